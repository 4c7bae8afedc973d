// Recase Transform Engine
// Dispatches a selector to its conversion

use super::{case, morse, style};
use crate::Selector;

/// Apply `selector` to `input`.
///
/// Every conversion is total: no input makes it fail, and the empty string
/// always maps to the empty string.
pub fn transform(input: &str, selector: Selector) -> String {
    log::trace!("applying {} to {} bytes", selector, input.len());

    match selector {
        Selector::Upper => case::upper(input),
        Selector::Lower => case::lower(input),
        Selector::Title => case::title(input),
        Selector::Sentence => case::sentence(input),
        Selector::Camel => case::camel(input),
        Selector::Snake => case::snake(input),
        Selector::Kebab => case::kebab(input),
        Selector::Alternating => style::alternating(input),
        Selector::Inverse => style::inverse(input),
        Selector::Leetspeak => style::leetspeak(input),
        Selector::Vaporwave => style::vaporwave(input),
        Selector::Morse => morse::encode(input),
        Selector::MorseDecode => morse::decode(input),
    }
}

/// Apply a selector given by name. Unrecognized names return `input` unchanged.
pub fn transform_named(input: &str, selector: &str) -> String {
    match Selector::from_name(selector) {
        Some(selector) => transform(input, selector),
        None => {
            log::debug!("unknown selector '{}', returning input unchanged", selector);
            input.to_string()
        }
    }
}
