//! Paragraph boundaries over the flat character sequence, and deletion by
//! paragraph index.

use smallvec::SmallVec;
use tracing::debug;

use richtext_core::{
  StyledChar,
  StyledText,
  chars::{
    PARAGRAPH_SEPARATOR,
    char_is_blank,
    char_is_separator,
  },
};

use crate::{
  error::{
    Result,
    RichTextError,
  },
  splice::{
    DeleteRange,
    decompose,
    delete_texts,
    recompose,
  },
};

/// Char positions of every paragraph separator in `text`.
pub fn separator_positions(text: &str) -> Vec<usize> {
  text
    .chars()
    .enumerate()
    .filter(|&(_, ch)| char_is_separator(ch))
    .map(|(i, _)| i)
    .collect()
}

/// Half-open char span `[start, end)` of every paragraph, in document order.
///
/// Each span includes the paragraph's trailing separator, except the final
/// paragraph's, which has none. Splitting always yields at least one
/// paragraph; for empty text that single span is empty.
pub fn paragraph_spans(text: &str) -> Vec<(usize, usize)> {
  let parts: Vec<&str> = text.split(PARAGRAPH_SEPARATOR).collect();
  let last = parts.len() - 1;

  let mut spans = Vec::with_capacity(parts.len());
  let mut start = 0;
  for (i, part) in parts.iter().enumerate() {
    let mut len = part.chars().count();
    if i != last {
      len += 1;
    }
    spans.push((start, start + len));
    start += len;
  }
  spans
}

/// Delete the paragraphs at `indexes`, separators included, keeping every
/// surviving character's style and link.
///
/// Every requested index must name an existing paragraph
/// ([`ParagraphNotFound`](RichTextError::ParagraphNotFound) otherwise).
/// Requesting every paragraph empties the document. Deleting the final
/// paragraph also strips whatever whitespace-only tail the removal leaves
/// behind, so no dangling separator survives.
pub fn delete_paragraphs(styled: &StyledText, indexes: &[usize]) -> Result<StyledText> {
  let spans = paragraph_spans(styled.text());
  let count = spans.len();
  for &index in indexes {
    if index >= count {
      return Err(RichTextError::ParagraphNotFound { index, count });
    }
  }

  if (0..count).all(|i| indexes.contains(&i)) {
    debug!(paragraphs = count, "deleting every paragraph");
    return Ok(StyledText::default());
  }

  if indexes.contains(&(count - 1)) {
    // The final paragraph has no trailing separator of its own, so deleting
    // it orphans the separator of the paragraph before it. Drop the spans
    // directly and strip the blank tail.
    let mut kept: Vec<StyledChar> = decompose(styled)
      .into_iter()
      .enumerate()
      .filter(|(i, _)| {
        !indexes.iter().any(|&p| {
          let (start, end) = spans[p];
          (start..end).contains(i)
        })
      })
      .map(|(_, c)| c)
      .collect();
    while kept.last().is_some_and(|c| char_is_blank(c.ch)) {
      kept.pop();
    }
    return Ok(recompose(&kept));
  }

  let ranges: SmallVec<[DeleteRange; 4]> = indexes
    .iter()
    .map(|&p| {
      let (start, end) = spans[p];
      (start, end - 1)
    })
    .collect();
  delete_texts(styled, &ranges)
}

#[cfg(test)]
mod test {
  use richtext_core::TextStyle;

  use super::*;

  fn styled(text: &str, style: &TextStyle) -> StyledText {
    let mut builder = StyledText::builder();
    builder.set_text(text);
    builder.set_style(0..text.chars().count(), style);
    builder.build()
  }

  #[test]
  fn spans_cover_separators_except_the_last() {
    assert_eq!(paragraph_spans("a\nbb\nc"), vec![(0, 2), (2, 5), (5, 6)]);
    assert_eq!(paragraph_spans(""), vec![(0, 0)]);
    assert_eq!(paragraph_spans("a\n"), vec![(0, 2), (2, 2)]);
    assert_eq!(paragraph_spans("\n"), vec![(0, 1), (1, 1)]);
  }

  #[test]
  fn separator_positions_are_char_indexed() {
    assert_eq!(separator_positions("日\n本\n"), vec![1, 3]);
    assert!(separator_positions("abc").is_empty());
  }

  #[test]
  fn deleting_a_middle_paragraph_takes_its_separator() {
    let styled = StyledText::plain("a\nb\nc");
    let result = delete_paragraphs(&styled, &[1]).unwrap();
    assert_eq!(result.text(), "a\nc");
  }

  #[test]
  fn deleting_every_paragraph_empties_the_document() {
    let styled = StyledText::plain("a\nb\nc");
    let result = delete_paragraphs(&styled, &[0, 1, 2]).unwrap();
    assert!(result.is_empty());
  }

  #[test]
  fn deleting_the_only_paragraph_empties_the_document() {
    let result = delete_paragraphs(&StyledText::plain("solo"), &[0]).unwrap();
    assert!(result.is_empty());
  }

  #[test]
  fn deleting_the_last_paragraph_leaves_no_dangling_separator() {
    let bold = TextStyle::default().bold(true);
    let styled = styled("a\nb\nc", &bold);

    let result = delete_paragraphs(&styled, &[2]).unwrap();
    assert_eq!(result.text(), "a\nb");
    assert_eq!(result.style_at(0..1), bold);
    assert_eq!(result.style_at(2..3), bold);
  }

  #[test]
  fn deleting_the_last_paragraph_strips_a_blank_tail() {
    let styled = StyledText::plain("a\n \nend");
    let result = delete_paragraphs(&styled, &[2]).unwrap();
    assert_eq!(result.text(), "a");
  }

  #[test]
  fn deleting_an_empty_final_paragraph_drops_its_separator() {
    let styled = StyledText::plain("a\n");
    let result = delete_paragraphs(&styled, &[1]).unwrap();
    assert_eq!(result.text(), "a");
  }

  #[test]
  fn missing_paragraph_is_reported() {
    let styled = StyledText::plain("a\nb");
    let err = delete_paragraphs(&styled, &[0, 5]).unwrap_err();
    assert_eq!(err, RichTextError::ParagraphNotFound { index: 5, count: 2 });
  }

  #[test]
  fn no_indexes_is_a_noop() {
    let styled = StyledText::plain("a\nb");
    assert_eq!(delete_paragraphs(&styled, &[]).unwrap(), styled);
  }
}
