// File: src/error.rs
use thiserror::Error;

#[derive(Error, Debug)]
pub enum QuizError {
    #[error("I/O error: {0}")]
    Io(Box<std::io::Error>),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("HTTP error: {0}")]
    Http(Box<reqwest::Error>),

    #[error("HTTP {status} from {url}")]
    HttpStatus { status: u16, url: String },

    #[error("Unknown JLPT level: {0} (expected one of N5, N4, N3, N2, N1)")]
    UnknownLevel(String),
}

impl From<std::io::Error> for QuizError {
    fn from(error: std::io::Error) -> Self {
        QuizError::Io(Box::new(error))
    }
}

impl From<reqwest::Error> for QuizError {
    fn from(error: reqwest::Error) -> Self {
        QuizError::Http(Box::new(error))
    }
}

impl From<tempfile::PersistError> for QuizError {
    fn from(error: tempfile::PersistError) -> Self {
        QuizError::Io(Box::new(error.error))
    }
}
