use std::fmt;

/// Errors raised while loading inputs or generating the dataset.
#[derive(Debug)]
pub enum CoreError {
    IoError(String),
    SerializationError(String),
    NamePoolExhausted,
    InvalidRosterSize { expected: usize, found: usize },
}

impl fmt::Display for CoreError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            CoreError::IoError(msg) => write!(f, "IO error: {}", msg),
            CoreError::SerializationError(msg) => write!(f, "Serialization error: {}", msg),
            CoreError::NamePoolExhausted => {
                write!(f, "Name pool exhausted: more players requested than names available")
            }
            CoreError::InvalidRosterSize { expected, found } => {
                write!(f, "Invalid roster size: expected {}, found {}", expected, found)
            }
        }
    }
}

impl std::error::Error for CoreError {}

impl From<std::io::Error> for CoreError {
    fn from(err: std::io::Error) -> Self {
        CoreError::IoError(err.to_string())
    }
}

impl From<serde_json::Error> for CoreError {
    fn from(err: serde_json::Error) -> Self {
        CoreError::SerializationError(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, CoreError>;
