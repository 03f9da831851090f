//! Error types for tintrun.

use std::fmt;
use std::io;

/// Result type alias for tintrun operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for tintrun operations.
///
/// Document operations are total and never produce errors; the fallible
/// surface is color parsing and the clipboard export seam.
#[derive(Debug)]
pub enum Error {
    /// Invalid color format (e.g., malformed hex string).
    InvalidColor(String),
    /// The host clipboard rejected the exported markup.
    Clipboard(io::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidColor(s) => write!(f, "invalid color format: {s}"),
            Self::Clipboard(e) => write!(f, "clipboard write failed: {e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Clipboard(e) => Some(e),
            Self::InvalidColor(_) => None,
        }
    }
}

impl From<io::Error> for Error {
    fn from(e: io::Error) -> Self {
        Self::Clipboard(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::InvalidColor("#zzz".to_string());
        assert!(err.to_string().contains("invalid color format"));

        let err = Error::Clipboard(io::Error::other("denied"));
        assert!(err.to_string().contains("clipboard write failed"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::BrokenPipe, "test");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Clipboard(_)));
    }
}
