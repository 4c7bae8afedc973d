// Recase Whitespace
// One definition of "whitespace" for every conversion and count

/// Regex class for a whitespace character: Unicode White_Space plus the
/// byte order mark, which browsers also treat as blank.
pub(crate) const SPACE_CLASS: &str = r"[\s\u{FEFF}]";

/// Regex class for a line terminator.
pub(crate) const LINE_TERMINATOR_CLASS: &str = r"[\n\r\u{2028}\u{2029}]";

/// Regex class for any character except a line terminator.
pub(crate) const NOT_LINE_TERMINATOR_CLASS: &str = r"[^\n\r\u{2028}\u{2029}]";

pub(crate) fn is_space(c: char) -> bool {
    c.is_whitespace() || c == '\u{FEFF}'
}

/// `str::trim` with [`is_space`].
pub(crate) fn trim(text: &str) -> &str {
    text.trim_matches(is_space)
}
