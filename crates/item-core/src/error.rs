use thiserror::Error;

pub type Result<T, E = ExtractError> = std::result::Result<T, E>;

/// Failures raised by the annotation collaborator. Token selection itself
/// never fails.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ExtractError {
    #[error("Text is {length} characters long, the limit is {limit}")]
    TextTooLong { length: usize, limit: usize },

    #[error("Annotation failed: {0}")]
    Annotation(String),
}
