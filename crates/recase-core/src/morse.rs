// Recase Morse Tables
// Fixed text <-> Morse code lookup, built once and shared read-only

use std::collections::HashMap;
use std::sync::LazyLock;

use indexmap::IndexMap;

/// Letters, digits and the word separator, in table order.
const DEFINITIONS: [(char, &str); 37] = [
    ('a', ".-"),
    ('b', "-..."),
    ('c', "-.-."),
    ('d', "-.."),
    ('e', "."),
    ('f', "..-."),
    ('g', "--."),
    ('h', "...."),
    ('i', ".."),
    ('j', ".---"),
    ('k', "-.-"),
    ('l', ".-.."),
    ('m', "--"),
    ('n', "-."),
    ('o', "---"),
    ('p', ".--."),
    ('q', "--.-"),
    ('r', ".-."),
    ('s', "..."),
    ('t', "-"),
    ('u', "..-"),
    ('v', "...-"),
    ('w', ".--"),
    ('x', "-..-"),
    ('y', "-.--"),
    ('z', "--.."),
    ('1', ".----"),
    ('2', "..---"),
    ('3', "...--"),
    ('4', "....-"),
    ('5', "....."),
    ('6', "-...."),
    ('7', "--..."),
    ('8', "---.."),
    ('9', "----."),
    ('0', "-----"),
    (' ', "/"),
];

static TEXT_TO_MORSE: LazyLock<IndexMap<char, &'static str>> =
    LazyLock::new(|| DEFINITIONS.iter().copied().collect());

static MORSE_TO_TEXT: LazyLock<HashMap<&'static str, char>> =
    LazyLock::new(|| DEFINITIONS.iter().map(|&(c, code)| (code, c)).collect());

/// Morse code for a lowercase letter, digit or space.
pub fn encode_char(c: char) -> Option<&'static str> {
    TEXT_TO_MORSE.get(&c).copied()
}

/// Character for a single Morse token (`"..."` -> `'s'`, `"/"` -> `' '`).
pub fn decode_token(token: &str) -> Option<char> {
    MORSE_TO_TEXT.get(token).copied()
}

/// All table entries in definition order.
pub fn entries() -> impl Iterator<Item = (char, &'static str)> {
    TEXT_TO_MORSE.iter().map(|(&c, &code)| (c, code))
}

/// Number of mapped symbols.
pub fn len() -> usize {
    TEXT_TO_MORSE.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tables_are_inverse() {
        assert_eq!(len(), 37);
        assert_eq!(MORSE_TO_TEXT.len(), 37);
        for (c, code) in entries() {
            assert_eq!(decode_token(code), Some(c), "code {code} for {c:?}");
            assert_eq!(encode_char(c), Some(code));
        }
    }

    #[test]
    fn test_known_codes() {
        assert_eq!(encode_char('s'), Some("..."));
        assert_eq!(encode_char('o'), Some("---"));
        assert_eq!(encode_char('0'), Some("-----"));
        assert_eq!(encode_char(' '), Some("/"));
        assert_eq!(decode_token("-.--"), Some('y'));
    }

    #[test]
    fn test_unmapped_symbols() {
        assert_eq!(encode_char('S'), None);
        assert_eq!(encode_char('!'), None);
        assert_eq!(decode_token(""), None);
        assert_eq!(decode_token("......."), None);
    }

    #[test]
    fn test_entries_keep_definition_order() {
        let first: Vec<char> = entries().take(3).map(|(c, _)| c).collect();
        assert_eq!(first, vec!['a', 'b', 'c']);
        assert_eq!(entries().last(), Some((' ', "/")));
    }
}
