use std::fmt;

/// Result type for devpath-types operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the types layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Text that does not name one of the three difficulty levels
    InvalidDifficulty(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidDifficulty(value) => write!(
                f,
                "Invalid difficulty '{}': expected Beginner, Intermediate or Advanced",
                value
            ),
        }
    }
}

impl std::error::Error for Error {}
