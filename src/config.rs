use std::fmt;
use std::path::{Path, PathBuf};

use crate::errors::{Result, SelfCatError};

/// Transfer size used by the block and raw modes unless overridden.
pub const DEFAULT_BLOCK_SIZE: usize = 100;

/// I/O granularity used to copy the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Mode {
    /// One byte at a time through a buffered stream.
    Chars,
    /// Fixed-size blocks through a buffered stream.
    Blocks,
    /// Fixed-size blocks through raw file descriptors.
    Raw,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Mode::Chars => "chars",
            Mode::Blocks => "blocks",
            Mode::Raw => "raw",
        };
        write!(f, "{}", name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    path: PathBuf,
    mode: Mode,
    block_size: usize,
}

impl Config {
    pub fn new(path: impl Into<PathBuf>, mode: Mode) -> Self {
        Self {
            path: path.into(),
            mode,
            block_size: DEFAULT_BLOCK_SIZE,
        }
    }

    pub fn with_block_size(mut self, block_size: usize) -> Result<Self> {
        if block_size == 0 {
            return Err(SelfCatError::InvalidBlockSize(block_size));
        }
        self.block_size = block_size;
        Ok(self)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Size of the transfer buffer. Character mode always moves one byte.
    pub fn block_size(&self) -> usize {
        match self.mode {
            Mode::Chars => 1,
            Mode::Blocks | Mode::Raw => self.block_size,
        }
    }
}
