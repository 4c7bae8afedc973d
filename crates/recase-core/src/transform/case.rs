// Recase Case Conversions
// Casing and identifier-style conversions (upper, lower, title, sentence, camel, snake, kebab)

use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::whitespace::{LINE_TERMINATOR_CLASS, NOT_LINE_TERMINATOR_CLASS, SPACE_CLASS};

/// Word character at the start of a line, or after a period and whitespace.
///
/// Any of `\n`, `\r`, U+2028 and U+2029 starts a line; the terminator is part
/// of the match and survives uppercasing unchanged.
static SENTENCE_START: LazyLock<Regex> = LazyLock::new(|| {
    let pattern = format!(
        r"(?:(?:\A|{LINE_TERMINATOR_CLASS})(?-u:\w)|\.{SPACE_CLASS}+(?-u:\w))"
    );
    Regex::new(&pattern).expect("sentence pattern is valid")
});

/// A run of separators and the character that follows it on the same line.
static CAMEL_BOUNDARY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"[^a-zA-Z0-9]+({NOT_LINE_TERMINATOR_CLASS})"))
        .expect("camel pattern is valid")
});

static WHITESPACE_RUN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!("{SPACE_CLASS}+")).expect("whitespace pattern is valid")
});

static NOT_SNAKE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-zA-Z0-9_]").expect("snake pattern is valid"));

static NOT_KEBAB: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-zA-Z0-9-]").expect("kebab pattern is valid"));

pub fn upper(input: &str) -> String {
    input.to_uppercase()
}

pub fn lower(input: &str) -> String {
    input.to_lowercase()
}

/// Lowercase, then capitalize the first character of every space-separated token.
///
/// Only the literal space splits tokens, so tabs and newlines stay inside a
/// token and consecutive spaces produce empty tokens that are kept as-is.
pub fn title(input: &str) -> String {
    input
        .to_lowercase()
        .split(' ')
        .map(capitalize_first)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Lowercase, then capitalize the first word character of each line and of
/// each sentence that follows a `.` and whitespace.
pub fn sentence(input: &str) -> String {
    SENTENCE_START
        .replace_all(&input.to_lowercase(), |caps: &Captures| caps[0].to_uppercase())
        .into_owned()
}

/// Lowercase, then drop every separator run and uppercase the character after it.
///
/// A run that ends the text has nothing to capitalize and is kept.
pub fn camel(input: &str) -> String {
    CAMEL_BOUNDARY
        .replace_all(&input.to_lowercase(), |caps: &Captures| caps[1].to_uppercase())
        .into_owned()
}

pub fn snake(input: &str) -> String {
    identifier(input, "_", &NOT_SNAKE)
}

pub fn kebab(input: &str) -> String {
    identifier(input, "-", &NOT_KEBAB)
}

fn identifier(input: &str, separator: &str, disallowed: &Regex) -> String {
    let lowered = input.to_lowercase();
    let joined = WHITESPACE_RUN.replace_all(&lowered, separator);
    disallowed.replace_all(&joined, "").into_owned()
}

fn capitalize_first(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upper_lower() {
        assert_eq!(upper("Hello, World 42"), "HELLO, WORLD 42");
        assert_eq!(lower("Hello, World 42"), "hello, world 42");
        assert_eq!(upper(""), "");
    }

    #[test]
    fn test_title_basic() {
        assert_eq!(title("hello world"), "Hello World");
        assert_eq!(title("hELLO wORLD"), "Hello World");
    }

    #[test]
    fn test_title_splits_on_literal_space_only() {
        assert_eq!(title("a  b"), "A  B");
        assert_eq!(title("one\ttwo three"), "One\ttwo Three");
        assert_eq!(title(" lead"), " Lead");
        assert_eq!(title("line\nnext"), "Line\nnext");
    }

    #[test]
    fn test_sentence() {
        assert_eq!(sentence("HELLO. HOW ARE YOU"), "Hello. How are you");
        assert_eq!(sentence("one.   two.three"), "One.   Two.three");
        assert_eq!(sentence("what? no! ok. yes"), "What? no! ok. Yes");
    }

    #[test]
    fn test_sentence_capitalizes_each_line() {
        assert_eq!(sentence("first line\nsecond line"), "First line\nSecond line");
        assert_eq!(sentence("end.\nnext"), "End.\nNext");
    }

    #[test]
    fn test_sentence_recognizes_every_line_terminator() {
        assert_eq!(sentence("one\rtwo"), "One\rTwo");
        assert_eq!(sentence("first\r\nsecond"), "First\r\nSecond");
        assert_eq!(sentence("a\u{2028}b\u{2029}c"), "A\u{2028}B\u{2029}C");
        assert_eq!(sentence("\n\nlate start"), "\n\nLate start");
    }

    #[test]
    fn test_sentence_skips_non_word_start() {
        assert_eq!(sentence("\"quoted\" start"), "\"quoted\" start");
        assert_eq!(sentence("élan vital"), "élan vital");
    }

    #[test]
    fn test_camel() {
        assert_eq!(camel("hello world"), "helloWorld");
        assert_eq!(camel("Hello big_wide-World"), "helloBigWideWorld");
        assert_eq!(camel("  leading space"), "LeadingSpace");
    }

    #[test]
    fn test_camel_keeps_trailing_run() {
        assert_eq!(camel("hello world!"), "helloWorld!");
        assert_eq!(camel("hi !!"), "hi!");
    }

    #[test]
    fn test_camel_does_not_cross_line_terminators() {
        assert_eq!(camel("hello world \r\n"), "helloWorld \r\n");
        assert_eq!(camel("x !\r\n"), "x!\r\n");
        // a run may span a line break as long as a character follows it
        assert_eq!(camel("one two\r\nthree four"), "oneTwoThreeFour");
        assert_eq!(camel("a \u{2028}"), "a \u{2028}");
    }

    #[test]
    fn test_identifier_styles_treat_byte_order_mark_as_space() {
        assert_eq!(snake("a\u{FEFF}b"), "a_b");
        assert_eq!(kebab("a \u{FEFF} b"), "a-b");
    }

    #[test]
    fn test_snake() {
        assert_eq!(snake("Hello World"), "hello_world");
        assert_eq!(snake("  Mixed   Case, here! "), "_mixed_case_here_");
        assert_eq!(snake("keep_underscores-not-dashes"), "keep_underscoresnotdashes");
    }

    #[test]
    fn test_kebab() {
        assert_eq!(kebab("Hello World"), "hello-world");
        assert_eq!(kebab("tabs\tand\nnewlines"), "tabs-and-newlines");
        assert_eq!(kebab("keep-dashes_not_underscores"), "keep-dashesnotunderscores");
    }
}
