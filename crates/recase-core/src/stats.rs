// Recase Text Statistics
// Character, word, sentence and line counts over raw input

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::whitespace::{self, SPACE_CLASS};

/// Sentence terminators followed by one whitespace character.
static SENTENCE_BREAK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!("[.!?]+{SPACE_CLASS}")).expect("sentence break pattern is valid")
});

static WHITESPACE_RUN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!("{SPACE_CLASS}+")).expect("whitespace pattern is valid")
});

/// Counts derived from a piece of text. Independent of any conversion.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TextStats {
    /// Length in UTF-16 code units
    pub character_count: usize,
    pub word_count: usize,
    pub sentence_count: usize,
    /// Non-empty lines
    pub line_count: usize,
}

impl TextStats {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

impl fmt::Display for TextStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "characters: {}, words: {}, sentences: {}, lines: {}",
            self.character_count, self.word_count, self.sentence_count, self.line_count
        )
    }
}

/// Compute statistics for `input`.
///
/// Whitespace-only input counts characters but reports zero words, sentences
/// and lines.
pub fn compute_stats(input: &str) -> TextStats {
    let character_count = input.encode_utf16().count();

    let trimmed = whitespace::trim(input);
    if trimmed.is_empty() {
        return TextStats {
            character_count,
            ..TextStats::default()
        };
    }

    TextStats {
        character_count,
        word_count: WHITESPACE_RUN.split(trimmed).count(),
        sentence_count: SENTENCE_BREAK.split(input).filter(|s| !s.is_empty()).count(),
        line_count: input.split('\n').filter(|l| !l.is_empty()).count(),
    }
}
