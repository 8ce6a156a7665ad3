use std::io;

use thiserror::Error;

/// Failure of the question source. Detail is for logs only; the session
/// shows a single fixed message for every variant.
#[derive(Debug, Clone, Error)]
pub enum SourceError {
    #[error("Missing credential: {0} is not set")]
    MissingCredential(&'static str),

    #[error("Request failed: {0}")]
    Http(String),

    #[error("Unexpected status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Response contained no text")]
    EmptyResponse,

    #[error("Malformed response: {0}")]
    Malformed(String),

    #[error("Response shape mismatch: {0}")]
    Shape(String),
}

impl From<reqwest::Error> for SourceError {
    fn from(err: reqwest::Error) -> Self {
        SourceError::Http(err.to_string())
    }
}

impl From<serde_json::Error> for SourceError {
    fn from(err: serde_json::Error) -> Self {
        SourceError::Malformed(err.to_string())
    }
}

/// Process-level failure of the application.
#[derive(Debug, Error)]
pub enum ExamError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type ExamResult<T> = Result<T, ExamError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = SourceError::MissingCredential("GEMINI_API_KEY");
        assert_eq!(err.to_string(), "Missing credential: GEMINI_API_KEY is not set");

        let err = SourceError::Status {
            status: 429,
            body: "quota".into(),
        };
        assert_eq!(err.to_string(), "Unexpected status 429: quota");
    }

    #[test]
    fn test_json_errors_become_malformed() {
        let parse = serde_json::from_str::<serde_json::Value>("{not json");
        let err: SourceError = parse.unwrap_err().into();
        assert!(matches!(err, SourceError::Malformed(_)));
    }
}
