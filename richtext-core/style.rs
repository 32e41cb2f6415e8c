use crate::Tendril;

/// Visual attributes of a single character.
///
/// Every attribute is independently optional: `None` means the attribute is
/// unset and inherits whatever the surrounding context provides. Editing
/// operations move whole `TextStyle` values between characters and never
/// interpret the attribute values themselves.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TextStyle {
  pub font_family:      Option<Tendril>,
  pub font_size:        Option<f32>,
  pub foreground_color: Option<Tendril>,
  pub bold:             Option<bool>,
  pub italic:           Option<bool>,
  pub strikethrough:    Option<bool>,
  pub underline:        Option<bool>,
}

impl TextStyle {
  #[must_use]
  pub fn font_family(mut self, family: impl Into<Tendril>) -> Self {
    self.font_family = Some(family.into());
    self
  }

  #[must_use]
  pub fn font_size(mut self, size: f32) -> Self {
    self.font_size = Some(size);
    self
  }

  /// Hex string or color name, passed through verbatim.
  #[must_use]
  pub fn foreground_color(mut self, color: impl Into<Tendril>) -> Self {
    self.foreground_color = Some(color.into());
    self
  }

  #[must_use]
  pub fn bold(mut self, bold: bool) -> Self {
    self.bold = Some(bold);
    self
  }

  #[must_use]
  pub fn italic(mut self, italic: bool) -> Self {
    self.italic = Some(italic);
    self
  }

  #[must_use]
  pub fn strikethrough(mut self, strikethrough: bool) -> Self {
    self.strikethrough = Some(strikethrough);
    self
  }

  #[must_use]
  pub fn underline(mut self, underline: bool) -> Self {
    self.underline = Some(underline);
    self
  }

  /// True when every attribute is unset.
  pub fn is_unset(&self) -> bool {
    *self == Self::default()
  }

  /// Attribute-wise agreement of two styles.
  ///
  /// Attributes carrying the same value on both sides keep it; every other
  /// attribute reads as unset.
  #[must_use]
  pub fn common(&self, other: &Self) -> Self {
    fn agree<T: Clone + PartialEq>(a: &Option<T>, b: &Option<T>) -> Option<T> {
      match (a, b) {
        (Some(a), Some(b)) if a == b => Some(a.clone()),
        _ => None,
      }
    }

    Self {
      font_family:      agree(&self.font_family, &other.font_family),
      font_size:        agree(&self.font_size, &other.font_size),
      foreground_color: agree(&self.foreground_color, &other.foreground_color),
      bold:             agree(&self.bold, &other.bold),
      italic:           agree(&self.italic, &other.italic),
      strikethrough:    agree(&self.strikethrough, &other.strikethrough),
      underline:        agree(&self.underline, &other.underline),
    }
  }
}
