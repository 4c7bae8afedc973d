// Recase Style Conversions
// Novelty conversions: alternating, inverse, leetspeak, vaporwave

/// Letter substitutions, applied one after another over the whole text.
const LEET_SUBSTITUTIONS: [(char, &str); 7] = [
    ('a', "4"),
    ('e', "3"),
    ('i', "1"),
    ('o', "0"),
    ('s', "5"),
    ('t', "7"),
    ('l', "1"),
];

/// Lowercase at even character positions, uppercase at odd ones.
pub fn alternating(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for (i, c) in input.chars().enumerate() {
        if i % 2 == 0 {
            out.extend(c.to_lowercase());
        } else {
            out.extend(c.to_uppercase());
        }
    }
    out
}

/// Flip the case of every character.
///
/// A character that is already its own uppercase form is lowercased, anything
/// else is uppercased.
pub fn inverse(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        let mut upper = c.to_uppercase();
        if upper.next() == Some(c) && upper.next().is_none() {
            out.extend(c.to_lowercase());
        } else {
            out.extend(c.to_uppercase());
        }
    }
    out
}

pub fn leetspeak(input: &str) -> String {
    LEET_SUBSTITUTIONS
        .iter()
        .fold(input.to_lowercase(), |text, &(from, to)| text.replace(from, to))
}

/// Space out every character and uppercase the result.
pub fn vaporwave(input: &str) -> String {
    let mut spaced = String::with_capacity(input.len() * 2);
    for (i, c) in input.chars().enumerate() {
        if i > 0 {
            spaced.push(' ');
        }
        spaced.push(c);
    }
    spaced.to_uppercase()
}
