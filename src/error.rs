// file: src/error.rs
// description: Custom error types and result type aliases
// reference: https://docs.rs/thiserror

use serde::Serialize;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, AnalyzerError>;

#[derive(Error, Debug)]
pub enum AnalyzerError {
    #[error("The uploaded PDF has no pages")]
    EmptyDocument,

    #[error("This PDF does not appear to be a government bill ({keyword_hits} of {required} keyword hits, no mandatory phrase)")]
    ClassificationRejected { keyword_hits: usize, required: usize },

    #[error("Failed to extract text from the PDF")]
    ExtractionFailed,

    #[error("Upstream service error: {0}")]
    UpstreamService(String),

    #[error("PDF error: {0}")]
    Pdf(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// User-visible outcome kinds a failed analysis maps onto.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    NoPages,
    NotABill,
    ExtractionFailed,
    UpstreamFailure,
    InvalidInput,
}

impl AnalyzerError {
    pub fn outcome(&self) -> Outcome {
        match self {
            AnalyzerError::EmptyDocument => Outcome::NoPages,
            AnalyzerError::ClassificationRejected { .. } => Outcome::NotABill,
            AnalyzerError::ExtractionFailed => Outcome::ExtractionFailed,
            AnalyzerError::UpstreamService(_) => Outcome::UpstreamFailure,
            _ => Outcome::InvalidInput,
        }
    }

    /// Rejections of the document itself, as opposed to faults of the system.
    pub fn is_document_rejection(&self) -> bool {
        matches!(
            self.outcome(),
            Outcome::NoPages | Outcome::NotABill | Outcome::ExtractionFailed
        )
    }
}

impl From<serde_json::Error> for AnalyzerError {
    fn from(err: serde_json::Error) -> Self {
        AnalyzerError::Serialization(err.to_string())
    }
}
