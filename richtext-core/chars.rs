/// U+000A -- LineFeed, the character that terminates a paragraph.
pub const PARAGRAPH_SEPARATOR: char = '\u{000A}';

#[inline]
pub fn char_is_separator(ch: char) -> bool {
  ch == PARAGRAPH_SEPARATOR
}

/// Whitespace in the wide sense, separators included.
#[inline]
pub fn char_is_blank(ch: char) -> bool {
  ch.is_whitespace()
}
