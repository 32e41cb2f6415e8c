use smartstring::{
  LazyCompact,
  SmartString,
};

pub mod chars;
pub mod style;
pub mod text;

/// Compact string type for short fragments: links, font names, colors.
pub type Tendril = SmartString<LazyCompact>;

pub use style::TextStyle;
pub use text::{
  StyledChar,
  StyledText,
  StyledTextBuilder,
  StyledTextSink,
  StyledTextSource,
};
