use thiserror::Error;

pub type Result<T> = std::result::Result<T, RichTextError>;

/// Failures surfaced by the editing operations.
///
/// These are contract violations on the caller's side, not transient faults:
/// an operation either returns a complete new value or fails immediately with
/// one of these, leaving no partial result behind.
#[derive(Debug, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum RichTextError {
  /// An argument fell outside an operation's documented domain.
  #[error("invalid argument: {reason}")]
  InvalidArgument { reason: String },

  /// A delete range whose start lies after its end.
  #[error("invalid delete range: start {start} is after end {end}")]
  InvalidRange { start: usize, end: usize },

  /// A paragraph index past the end of the document.
  #[error("paragraph {index} not found: text has {count} paragraphs")]
  ParagraphNotFound { index: usize, count: usize },

  /// The portable form could not be read or written.
  #[error("serialization failed: {reason}")]
  Serialization { reason: String },
}
