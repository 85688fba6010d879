use std::fmt;
use std::path::PathBuf;

use devpath_types::TrackId;

/// Result type for devpath-engine operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while building a catalog
#[derive(Debug)]
pub enum Error {
    /// IO operation failed
    Io(std::io::Error),

    /// Catalog file could not be decoded
    Parse { path: PathBuf, message: String },

    /// Two tracks share one identifier
    DuplicateTrack(TrackId),

    /// Identifier cannot be used as a path segment
    InvalidTrackId(TrackId),

    /// Two technologies of one track share a name
    DuplicateTechnology { track: TrackId, name: String },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(err) => write!(f, "IO error: {}", err),
            Error::Parse { path, message } => {
                write!(f, "Failed to parse catalog {}: {}", path.display(), message)
            }
            Error::DuplicateTrack(id) => write!(f, "Duplicate track id '{}'", id),
            Error::InvalidTrackId(id) => write!(
                f,
                "Invalid track id '{}': use letters, digits, '-', '_' or '.'",
                id
            ),
            Error::DuplicateTechnology { track, name } => {
                write!(f, "Duplicate technology '{}' in track '{}'", name, track)
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(err) => Some(err),
            Error::Parse { .. }
            | Error::DuplicateTrack(_)
            | Error::InvalidTrackId(_)
            | Error::DuplicateTechnology { .. } => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}
