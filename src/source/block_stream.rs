use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::Path;

use log::debug;

use crate::errors::{Result, SelfCatError};
use crate::transfer::{Chunk, ChunkSource};

/// Buffered stream read in blocks of `buf.len()` bytes. Only the last
/// block before end of input (or before a read error) may be shorter.
pub struct BlockSource {
    reader: BufReader<File>,
    pending: Option<io::Error>,
}

impl BlockSource {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        debug!("Opening {} as a block stream", path.display());

        let file =
            File::open(path).map_err(|e| SelfCatError::open(path, e))?;
        Ok(Self {
            reader: BufReader::new(file),
            pending: None,
        })
    }
}

impl ChunkSource for BlockSource {
    fn next_chunk(&mut self, buf: &mut [u8]) -> Result<Chunk> {
        if let Some(e) = self.pending.take() {
            return Err(SelfCatError::Read(e));
        }

        let mut filled = 0;
        while filled < buf.len() {
            match self.reader.read(&mut buf[filled..]) {
                Ok(0) => break,
                Ok(n) => filled += n,
                // Bytes already in the block go out first, the error is
                // reported on the next call.
                Err(e) if filled > 0 => {
                    self.pending = Some(e);
                    break;
                }
                Err(e) => return Err(SelfCatError::Read(e)),
            }
        }

        if filled == 0 {
            Ok(Chunk::End)
        } else {
            Ok(Chunk::Data(filled))
        }
    }
}
