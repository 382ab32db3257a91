use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SubtitleError {
    #[error("I/O error while {context}: {source}")]
    Io {
        context: &'static str,
        #[source]
        source: std::io::Error,
    },
    #[error("JSON parse error while {context}: {source}")]
    Json {
        context: &'static str,
        #[source]
        source: serde_json::Error,
    },
    #[error("file not found: {}", path.display())]
    NotFound { path: PathBuf },
    #[error("malformed segment #{index}: {message}")]
    InvalidSegment { index: usize, message: String },
    #[error("{context}: {message}")]
    Aligner {
        context: &'static str,
        message: String,
    },
    #[error("empty or invalid result from {context}")]
    EmptyResult { context: &'static str },
    #[error("invalid input: {message}")]
    InvalidInput { message: String },
}

impl SubtitleError {
    pub(crate) fn io(context: &'static str, source: std::io::Error) -> Self {
        Self::Io { context, source }
    }

    pub(crate) fn json(context: &'static str, source: serde_json::Error) -> Self {
        Self::Json { context, source }
    }

    pub(crate) fn not_found(path: impl Into<PathBuf>) -> Self {
        Self::NotFound { path: path.into() }
    }

    pub(crate) fn invalid_segment(index: usize, message: impl Into<String>) -> Self {
        Self::InvalidSegment {
            index,
            message: message.into(),
        }
    }

    /// Wraps a failure reported by an external aligner or transcriber.
    pub fn aligner(context: &'static str, err: impl std::fmt::Display) -> Self {
        Self::Aligner {
            context,
            message: err.to_string(),
        }
    }

    pub(crate) fn empty_result(context: &'static str) -> Self {
        Self::EmptyResult { context }
    }

    pub(crate) fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }
}
