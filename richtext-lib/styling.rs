//! Pattern-driven restyling of existing text.

use regex::Regex;
use tracing::debug;

use richtext_core::{
  StyledText,
  TextStyle,
};

use crate::{
  error::{
    Result,
    RichTextError,
  },
  splice::{
    decompose,
    recompose,
  },
};

/// Overwrite the style of every substring of `styled` matching any of
/// `patterns`.
///
/// Each pattern is a regular expression source (a plain literal being the
/// degenerate case), matched case-sensitively over the full text. Every char
/// of every non-overlapping match takes `style` wholesale; links stay
/// untouched. Patterns apply in the order given, so later patterns win where
/// matches overlap. Characters outside all matches keep their original style
/// and link.
///
/// An unparseable pattern fails with
/// [`InvalidArgument`](RichTextError::InvalidArgument) and no restyling takes
/// effect.
pub fn apply_style_to_matches<S: AsRef<str>>(
  styled: &StyledText,
  patterns: &[S],
  style: &TextStyle,
) -> Result<StyledText> {
  let text = styled.text();
  // Byte offset of every char, for translating match spans into char ranges.
  let byte_offsets: Vec<usize> = text.char_indices().map(|(offset, _)| offset).collect();
  let mut chars = decompose(styled);

  for pattern in patterns {
    let pattern = pattern.as_ref();
    let regex = Regex::new(pattern).map_err(|err| {
      RichTextError::InvalidArgument {
        reason: format!("pattern `{pattern}` is not a valid regular expression: {err}"),
      }
    })?;

    let mut restyled = 0usize;
    for found in regex.find_iter(text) {
      let start = byte_offsets.partition_point(|&offset| offset < found.start());
      let end = byte_offsets.partition_point(|&offset| offset < found.end());
      for c in &mut chars[start..end] {
        c.style = style.clone();
      }
      restyled += end - start;
    }
    debug!(pattern, chars = restyled, "applied style to pattern matches");
  }

  Ok(recompose(&chars))
}
