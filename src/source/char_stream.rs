use std::fs::File;
use std::io::{BufReader, Bytes, Read};
use std::path::Path;

use log::debug;

use crate::errors::{Result, SelfCatError};
use crate::transfer::{Chunk, ChunkSource};

/// Buffered stream read one byte per call.
pub struct CharSource {
    bytes: Bytes<BufReader<File>>,
}

impl CharSource {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        debug!("Opening {} as a character stream", path.display());

        let file =
            File::open(path).map_err(|e| SelfCatError::open(path, e))?;
        Ok(Self {
            bytes: BufReader::new(file).bytes(),
        })
    }
}

impl ChunkSource for CharSource {
    fn next_chunk(&mut self, buf: &mut [u8]) -> Result<Chunk> {
        if buf.is_empty() {
            return Ok(Chunk::End);
        }
        match self.bytes.next() {
            None => Ok(Chunk::End),
            Some(Err(e)) => Err(SelfCatError::Read(e)),
            Some(Ok(byte)) => {
                buf[0] = byte;
                Ok(Chunk::Data(1))
            }
        }
    }
}
