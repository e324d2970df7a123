//! Errors raised while building bowl meshes or emitting their files

use std::path::PathBuf;

/// Everything that can abort a generation run.
#[derive(Debug, thiserror::Error)]
pub enum BowlError {
    /// (InvalidParameter) A geometric input is out of its domain, e.g. `num_division < 3`
    #[error("(InvalidParameter) {0}")]
    InvalidParameter(String),

    /// (IoFailure) A directory could not be created or a file could not be written
    #[error("(IoFailure) {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl BowlError {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        BowlError::InvalidParameter(msg.into())
    }

    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        BowlError::Io {
            path: path.into(),
            source,
        }
    }
}
