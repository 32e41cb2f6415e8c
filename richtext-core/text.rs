//! The styled text value and the interfaces for reading and assembling it.
//!
//! [`StyledText`] is an immutable string carrying one style/link record per
//! character. It is only ever produced through [`StyledTextBuilder`]: set the
//! text, apply style and link records over half-open char ranges, then
//! [`build`](StyledTextBuilder::build).
//!
//! The editing layer does not depend on these concrete types directly; it
//! reads through [`StyledTextSource`] and writes through [`StyledTextSink`],
//! so any value with the same shape can stand in (tests do exactly that).
//!
//! # Indexing
//!
//! All ranges are half-open and counted in chars, not bytes. Like slice
//! indexing, range arguments past the end or with `start > end` panic;
//! fallible validation of caller input belongs to the operation layer, not
//! the value.

use std::{
  fmt,
  ops::Range,
};

use crate::{
  Tendril,
  style::TextStyle,
};

/// One character together with its style and optional link.
#[derive(Debug, Clone, PartialEq)]
pub struct StyledChar {
  pub ch:    char,
  pub style: TextStyle,
  pub link:  Option<Tendril>,
}

impl StyledChar {
  /// A character with no styling and no link.
  pub fn plain(ch: char) -> Self {
    Self {
      ch,
      style: TextStyle::default(),
      link: None,
    }
  }
}

/// Read access to a styled text value.
pub trait StyledTextSource {
  /// The full text.
  fn text(&self) -> &str;

  /// The style shared by every char in `range`.
  ///
  /// Attributes the chars disagree on read as unset; the empty range reads
  /// as fully unset.
  fn style_at(&self, range: Range<usize>) -> TextStyle;

  /// The link shared by every char in `range`, if they all carry the same
  /// one.
  fn link_at(&self, range: Range<usize>) -> Option<Tendril>;
}

/// Write access used to assemble a styled text value.
pub trait StyledTextSink {
  type Output;

  /// Replace the text, resetting every per-character record to unset.
  fn set_text(&mut self, text: &str);

  fn set_style(&mut self, range: Range<usize>, style: &TextStyle);

  fn set_link(&mut self, range: Range<usize>, link: Option<&str>);

  /// Finalize into the immutable value.
  fn finish(self) -> Self::Output;
}

#[derive(Debug, Clone, Default, PartialEq)]
struct Record {
  style: TextStyle,
  link:  Option<Tendril>,
}

/// An immutable string with per-character style and link records.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StyledText {
  text:    String,
  records: Vec<Record>,
}

impl StyledText {
  /// A styled text over `text` with every character unstyled and link-free.
  pub fn plain(text: &str) -> Self {
    Self {
      text:    text.to_owned(),
      records: vec![Record::default(); text.chars().count()],
    }
  }

  pub fn builder() -> StyledTextBuilder {
    StyledTextBuilder::new()
  }

  pub fn text(&self) -> &str {
    &self.text
  }

  /// Length in chars, not bytes.
  pub fn char_len(&self) -> usize {
    self.records.len()
  }

  pub fn is_empty(&self) -> bool {
    self.records.is_empty()
  }

  /// The style shared by every char in `range`; disagreements read as unset.
  ///
  /// # Panics
  ///
  /// Panics if `range` is decreasing or past the end of the text.
  #[track_caller]
  pub fn style_at(&self, range: Range<usize>) -> TextStyle {
    check_range(&range, self.records.len());
    let mut records = self.records[range].iter();
    let Some(first) = records.next() else {
      return TextStyle::default();
    };
    records.fold(first.style.clone(), |acc, record| acc.common(&record.style))
  }

  /// The link shared by every char in `range`, if they all carry the same
  /// one.
  ///
  /// # Panics
  ///
  /// Panics if `range` is decreasing or past the end of the text.
  #[track_caller]
  pub fn link_at(&self, range: Range<usize>) -> Option<Tendril> {
    check_range(&range, self.records.len());
    let mut records = self.records[range].iter();
    let first = &records.next()?.link;
    if records.all(|record| record.link == *first) {
      first.clone()
    } else {
      None
    }
  }

  /// Iterate the characters together with their records, in order.
  pub fn chars(&self) -> impl Iterator<Item = StyledChar> + '_ {
    self
      .text
      .chars()
      .zip(self.records.iter())
      .map(|(ch, record)| {
        StyledChar {
          ch,
          style: record.style.clone(),
          link: record.link.clone(),
        }
      })
  }
}

impl fmt::Display for StyledText {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&self.text)
  }
}

impl StyledTextSource for StyledText {
  fn text(&self) -> &str {
    &self.text
  }

  fn style_at(&self, range: Range<usize>) -> TextStyle {
    Self::style_at(self, range)
  }

  fn link_at(&self, range: Range<usize>) -> Option<Tendril> {
    Self::link_at(self, range)
  }
}

/// Assembles a [`StyledText`].
///
/// [`set_text`](Self::set_text) first, then any number of per-range style and
/// link applications, then [`build`](Self::build). Applying a record over a
/// range overwrites the whole record range, last write wins.
#[derive(Debug, Default)]
pub struct StyledTextBuilder {
  text:    String,
  records: Vec<Record>,
}

impl StyledTextBuilder {
  pub fn new() -> Self {
    Self::default()
  }

  /// Replace the text. Every per-character record resets to unset.
  pub fn set_text(&mut self, text: &str) -> &mut Self {
    self.text.clear();
    self.text.push_str(text);
    self.records.clear();
    self
      .records
      .resize(text.chars().count(), Record::default());
    self
  }

  /// Apply `style` to every char in `range`.
  ///
  /// # Panics
  ///
  /// Panics if `range` is decreasing or past the end of the text.
  #[track_caller]
  pub fn set_style(&mut self, range: Range<usize>, style: &TextStyle) -> &mut Self {
    check_range(&range, self.records.len());
    for record in &mut self.records[range] {
      record.style = style.clone();
    }
    self
  }

  /// Apply `link` (or clear it, with `None`) to every char in `range`.
  ///
  /// # Panics
  ///
  /// Panics if `range` is decreasing or past the end of the text.
  #[track_caller]
  pub fn set_link(&mut self, range: Range<usize>, link: Option<&str>) -> &mut Self {
    check_range(&range, self.records.len());
    for record in &mut self.records[range] {
      record.link = link.map(Tendril::from);
    }
    self
  }

  pub fn build(self) -> StyledText {
    StyledText {
      text:    self.text,
      records: self.records,
    }
  }
}

impl StyledTextSink for StyledTextBuilder {
  type Output = StyledText;

  fn set_text(&mut self, text: &str) {
    StyledTextBuilder::set_text(self, text);
  }

  fn set_style(&mut self, range: Range<usize>, style: &TextStyle) {
    StyledTextBuilder::set_style(self, range, style);
  }

  fn set_link(&mut self, range: Range<usize>, link: Option<&str>) {
    StyledTextBuilder::set_link(self, range, link);
  }

  fn finish(self) -> StyledText {
    self.build()
  }
}

#[track_caller]
fn check_range(range: &Range<usize>, len: usize) {
  assert!(
    range.start <= range.end,
    "invalid char range {}..{}: start is after end",
    range.start,
    range.end,
  );
  assert!(
    range.end <= len,
    "char range {}..{} is out of bounds for text of {} chars",
    range.start,
    range.end,
    len,
  );
}
