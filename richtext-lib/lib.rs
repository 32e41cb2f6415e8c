pub mod error;
pub mod paragraph;
pub mod portable;
pub mod splice;
pub mod styling;

pub use richtext_core::{
  StyledChar,
  StyledText,
  StyledTextBuilder,
  StyledTextSink,
  StyledTextSource,
  Tendril,
  TextStyle,
};

pub use crate::{
  error::{
    Result,
    RichTextError,
  },
  paragraph::delete_paragraphs,
  portable::{
    PortableChar,
    PortableStyle,
    from_json,
    from_portable,
    to_json,
    to_portable,
  },
  splice::{
    DeleteRange,
    append,
    decompose,
    delete_texts,
    insert_as_paragraph,
    insert_as_text,
    recompose,
    recompose_into,
  },
  styling::apply_style_to_matches,
};
