use std::path::PathBuf;

use thiserror::Error;

use crate::config::Mode;

pub type Result<T> = std::result::Result<T, SelfCatError>;

#[derive(Error, Debug)]
pub enum SelfCatError {
    #[error("File open failed: {}: {source}", path.display())]
    Open {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Error reading file: {0}")]
    Read(std::io::Error),
    #[error("Error writing output: {0}")]
    Write(std::io::Error),
    #[error("Block size must be positive, got {0}")]
    InvalidBlockSize(usize),
    #[error("Mode {0} is not supported on this platform")]
    Unsupported(Mode),
}

impl SelfCatError {
    pub(crate) fn open(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Open {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Error, ErrorKind};

    #[test]
    fn open_error_names_the_path() {
        let err = SelfCatError::open(
            "missing.rs",
            Error::new(ErrorKind::NotFound, "No such file or directory"),
        );
        assert_eq!(
            err.to_string(),
            "File open failed: missing.rs: No such file or directory"
        );
    }

    #[test]
    fn read_error_keeps_the_os_message() {
        let err =
            SelfCatError::Read(Error::new(ErrorKind::Other, "Is a directory"));
        assert_eq!(err.to_string(), "Error reading file: Is a directory");
    }
}
