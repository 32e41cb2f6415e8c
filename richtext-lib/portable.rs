//! The flat, host-independent form of a styled text.
//!
//! One [`PortableChar`] per character, each naming its style attributes
//! explicitly, so the form survives storage and transmission without any
//! knowledge of the in-memory value. The JSON attribute names are the
//! PascalCase attribute vocabulary of the style getters
//! (`FontFamily` … `Underline`); unknown names are rejected on the way in.

use serde::{
  Deserialize,
  Serialize,
};

use richtext_core::{
  StyledChar,
  StyledText,
  Tendril,
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

/// One character of the portable form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PortableChar {
  pub text:  char,
  pub link:  Option<Tendril>,
  pub style: PortableStyle,
}

/// The style attribute set by name, as it appears on the wire.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct PortableStyle {
  pub font_family:      Option<Tendril>,
  pub font_size:        Option<f32>,
  pub foreground_color: Option<Tendril>,
  pub bold:             Option<bool>,
  pub italic:           Option<bool>,
  pub strikethrough:    Option<bool>,
  pub underline:        Option<bool>,
}

impl From<&TextStyle> for PortableStyle {
  fn from(style: &TextStyle) -> Self {
    Self {
      font_family:      style.font_family.clone(),
      font_size:        style.font_size,
      foreground_color: style.foreground_color.clone(),
      bold:             style.bold,
      italic:           style.italic,
      strikethrough:    style.strikethrough,
      underline:        style.underline,
    }
  }
}

impl From<PortableStyle> for TextStyle {
  fn from(style: PortableStyle) -> Self {
    Self {
      font_family:      style.font_family,
      font_size:        style.font_size,
      foreground_color: style.foreground_color,
      bold:             style.bold,
      italic:           style.italic,
      strikethrough:    style.strikethrough,
      underline:        style.underline,
    }
  }
}

impl From<&StyledChar> for PortableChar {
  fn from(c: &StyledChar) -> Self {
    Self {
      text:  c.ch,
      link:  c.link.clone(),
      style: PortableStyle::from(&c.style),
    }
  }
}

impl From<&PortableChar> for StyledChar {
  fn from(p: &PortableChar) -> Self {
    Self {
      ch:    p.text,
      style: TextStyle::from(p.style.clone()),
      link:  p.link.clone(),
    }
  }
}

/// The portable form of `styled`: one entry per character, empty text giving
/// an empty sequence.
pub fn to_portable(styled: &StyledText) -> Vec<PortableChar> {
  decompose(styled).iter().map(PortableChar::from).collect()
}

/// Reassemble a styled text from its portable form.
pub fn from_portable(portable: &[PortableChar]) -> StyledText {
  let chars: Vec<StyledChar> = portable.iter().map(StyledChar::from).collect();
  recompose(&chars)
}

/// Serialize `styled` to a JSON string of its portable form.
pub fn to_json(styled: &StyledText) -> Result<String> {
  serde_json::to_string(&to_portable(styled)).map_err(|err| {
    RichTextError::Serialization {
      reason: err.to_string(),
    }
  })
}

/// Parse a styled text back out of its portable JSON form.
///
/// Unknown attribute names, multi-character entries, and malformed JSON all
/// fail with [`Serialization`](RichTextError::Serialization).
pub fn from_json(json: &str) -> Result<StyledText> {
  let portable: Vec<PortableChar> = serde_json::from_str(json).map_err(|err| {
    RichTextError::Serialization {
      reason: err.to_string(),
    }
  })?;
  Ok(from_portable(&portable))
}

#[cfg(test)]
mod test {
  use super::*;

  fn sample() -> StyledText {
    let mut builder = StyledText::builder();
    builder.set_text("a\nb");
    builder.set_style(
      0..1,
      &TextStyle::default()
        .bold(true)
        .font_family("Arial")
        .font_size(12.0)
        .foreground_color("#00ff00"),
    );
    builder.set_style(2..3, &TextStyle::default().italic(true).underline(false));
    builder.set_link(2..3, Some("https://example.com"));
    builder.build()
  }

  #[test]
  fn round_trip_is_lossless() {
    let styled = sample();
    assert_eq!(from_portable(&to_portable(&styled)), styled);
  }

  #[test]
  fn round_trip_of_empty_text() {
    let empty = StyledText::default();
    assert!(to_portable(&empty).is_empty());
    assert_eq!(from_portable(&[]), empty);
  }

  #[test]
  fn json_round_trip_is_lossless() {
    let styled = sample();
    let json = to_json(&styled).unwrap();
    assert_eq!(from_json(&json).unwrap(), styled);
  }

  #[test]
  fn attribute_names_are_pascal_case() {
    let json = to_json(&sample()).unwrap();
    assert!(json.contains("\"FontFamily\":\"Arial\""));
    assert!(json.contains("\"FontSize\":12.0"));
    assert!(json.contains("\"ForegroundColor\":\"#00ff00\""));
    assert!(json.contains("\"Bold\":true"));
    assert!(json.contains("\"Strikethrough\":null"));
  }

  #[test]
  fn unknown_attribute_name_is_rejected() {
    let json = r#"[{"text":"a","link":null,"style":{"Bold":true,"Shadow":true}}]"#;
    let err = from_json(json).unwrap_err();
    match err {
      RichTextError::Serialization { reason } => assert!(reason.contains("Shadow")),
      other => panic!("expected Serialization, got {other:?}"),
    }
  }

  #[test]
  fn multi_char_entry_is_rejected() {
    let json = r#"[{"text":"ab","link":null,"style":{}}]"#;
    assert!(matches!(
      from_json(json).unwrap_err(),
      RichTextError::Serialization { .. }
    ));
  }

  #[test]
  fn missing_attributes_read_as_unset() {
    let json = r#"[{"text":"a","link":null,"style":{}}]"#;
    let styled = from_json(json).unwrap();
    assert_eq!(styled.text(), "a");
    assert!(styled.style_at(0..1).is_unset());
  }
}
