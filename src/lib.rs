//! # selfcat
//!
//! Copies a file byte-for-byte to standard output using one of three I/O
//! granularities (see [`Mode`]):
//!
//! - [`Mode::Chars`]: one byte per read and per write through buffered
//!   streams;
//! - [`Mode::Blocks`]: fixed-size blocks through buffered streams;
//! - [`Mode::Raw`]: fixed-size blocks through `read(2)`/`write(2)` on raw
//!   descriptors (unix only).
//!
//! Every mode reports progress through the same [`Chunk`] type, so end of
//! input and read errors look the same regardless of the primitive used.

use std::io::{self, BufWriter, Write};

use log::info;

pub mod config;
pub mod errors;
pub mod sink;
pub mod source;
pub mod transfer;

pub use config::{Config, Mode, DEFAULT_BLOCK_SIZE};
pub use errors::{Result, SelfCatError};
pub use transfer::{pump, Chunk, ChunkSink, ChunkSource, CopyStats};

use sink::StreamSink;
use source::{BlockSource, CharSource};

/// Copies the configured file to the process's standard output.
pub fn run(config: &Config) -> Result<CopyStats> {
    let stats = match config.mode() {
        Mode::Chars => {
            let stdout = io::stdout();
            let sink = StreamSink::new(BufWriter::new(stdout.lock()));
            copy_file(config, sink)?
        }
        Mode::Blocks => {
            let stdout = io::stdout();
            copy_file(config, StreamSink::new(stdout.lock()))?
        }
        Mode::Raw => copy_raw_to_stdout(config)?,
    };

    info!(
        "Copied {} ({} bytes, {} chunks, mode {})",
        config.path().display(),
        stats.bytes,
        stats.chunks,
        config.mode()
    );
    Ok(stats)
}

/// Copies the configured file into `writer` instead of standard output.
/// The input side still uses the primitive selected by the mode.
pub fn run_into<W: Write>(config: &Config, writer: W) -> Result<CopyStats> {
    copy_file(config, StreamSink::new(writer))
}

fn copy_file<K: ChunkSink>(config: &Config, mut sink: K) -> Result<CopyStats> {
    let mut buf = vec![0u8; config.block_size()];
    let mut source = open_source(config)?;
    pump(source.as_mut(), &mut sink, &mut buf)
}

fn open_source(config: &Config) -> Result<Box<dyn ChunkSource>> {
    let path = config.path();
    Ok(match config.mode() {
        Mode::Chars => Box::new(CharSource::open(path)?),
        Mode::Blocks => Box::new(BlockSource::open(path)?),
        #[cfg(unix)]
        Mode::Raw => Box::new(source::RawSource::open(path)?),
        #[cfg(not(unix))]
        Mode::Raw => return Err(SelfCatError::Unsupported(Mode::Raw)),
    })
}

#[cfg(unix)]
fn copy_raw_to_stdout(config: &Config) -> Result<CopyStats> {
    use std::os::unix::io::AsFd;

    let stdout = io::stdout();
    copy_file(config, sink::RawSink::new(stdout.as_fd()))
}

#[cfg(not(unix))]
fn copy_raw_to_stdout(_config: &Config) -> Result<CopyStats> {
    Err(SelfCatError::Unsupported(Mode::Raw))
}
