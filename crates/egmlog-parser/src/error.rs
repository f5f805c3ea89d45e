use std::fmt;
use std::path::PathBuf;

/// Result type for egmlog-parser operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while loading log files
#[derive(Debug)]
pub enum Error {
    /// IO operation failed
    Io(std::io::Error),

    /// Walkdir error
    WalkDir(walkdir::Error),

    /// The given log folder does not exist or is not a directory
    NotADirectory(PathBuf),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(err) => write!(f, "IO error: {}", err),
            Error::WalkDir(err) => write!(f, "Directory traversal error: {}", err),
            Error::NotADirectory(path) => write!(f, "Not a directory: {}", path.display()),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(err) => Some(err),
            Error::WalkDir(err) => Some(err),
            Error::NotADirectory(_) => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<walkdir::Error> for Error {
    fn from(err: walkdir::Error) -> Self {
        Error::WalkDir(err)
    }
}
