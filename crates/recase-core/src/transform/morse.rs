// Recase Morse Conversions
// Text to Morse and back, passing unmapped symbols through untouched

use crate::morse;

/// Encode each character of the lowercased text, separating codes by a space.
pub fn encode(input: &str) -> String {
    let lowered = input.to_lowercase();
    let mut out = String::with_capacity(lowered.len() * 4);
    for (i, c) in lowered.chars().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        match morse::encode_char(c) {
            Some(code) => out.push_str(code),
            None => out.push(c),
        }
    }
    out
}

/// Decode space-separated Morse tokens and concatenate the results.
pub fn decode(input: &str) -> String {
    let mut out = String::with_capacity(input.len() / 2);
    for token in input.split(' ') {
        match morse::decode_token(token) {
            Some(c) => out.push(c),
            None => out.push_str(token),
        }
    }
    out
}
