use log::{debug, trace};

use crate::errors::Result;

/// Outcome of a single read from a [`ChunkSource`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Chunk {
    /// This many bytes (never zero) were placed at the front of the buffer.
    Data(usize),
    /// No more bytes remain.
    End,
}

/// Something bytes can be pulled from, one buffer at a time.
pub trait ChunkSource {
    fn next_chunk(&mut self, buf: &mut [u8]) -> Result<Chunk>;
}

/// Something bytes can be pushed to.
pub trait ChunkSink {
    /// Writes the whole slice or fails.
    fn put(&mut self, bytes: &[u8]) -> Result<()>;

    /// Flushes anything the sink still holds.
    fn finish(&mut self) -> Result<()>;
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CopyStats {
    pub bytes: u64,
    pub chunks: u64,
}

/// Moves everything from `source` to `sink` through `buf`, in order,
/// stopping at the first error.
pub fn pump<S, K>(
    source: &mut S,
    sink: &mut K,
    buf: &mut [u8],
) -> Result<CopyStats>
where
    S: ChunkSource + ?Sized,
    K: ChunkSink + ?Sized,
{
    let mut stats = CopyStats::default();
    loop {
        match source.next_chunk(buf)? {
            Chunk::End => break,
            Chunk::Data(n) => {
                trace!("chunk #{}: {} bytes", stats.chunks, n);
                sink.put(&buf[..n])?;
                stats.bytes += n as u64;
                stats.chunks += 1;
            }
        }
    }
    sink.finish()?;

    debug!("{} bytes copied in {} chunks", stats.bytes, stats.chunks);
    Ok(stats)
}
