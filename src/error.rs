//! Error types shared by the katas.

use thiserror::Error;

/// Errors surfaced by the validating katas.
///
/// Most katas are permissive and never fail; only date parsing, grid loading
/// and the katas that decode a fixed notation (OCR glyphs, playing cards,
/// URL symbols) return one of these.
#[derive(Debug, Error)]
pub enum KataError {
    /// A date string could not be parsed.
    #[error("cannot parse `{input}`: {reason}")]
    Parse { input: String, reason: String },

    /// The input is outside of what the kata accepts.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl KataError {
    pub(crate) fn parse(input: &str, reason: impl ToString) -> Self {
        KataError::Parse {
            input: input.to_string(),
            reason: reason.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, KataError>;
