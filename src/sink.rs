use std::io::Write;
#[cfg(unix)]
use std::io::{Error, ErrorKind};
#[cfg(unix)]
use std::os::unix::io::{AsRawFd, BorrowedFd};

use crate::errors::{Result, SelfCatError};
use crate::transfer::ChunkSink;

/// Output through any buffered `Write` stream.
pub struct StreamSink<W: Write> {
    writer: W,
}

impl<W: Write> StreamSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> ChunkSink for StreamSink<W> {
    fn put(&mut self, bytes: &[u8]) -> Result<()> {
        self.writer.write_all(bytes).map_err(SelfCatError::Write)
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush().map_err(SelfCatError::Write)
    }
}

/// Output straight to a descriptor with `write(2)`, bypassing any
/// buffering.
#[cfg(unix)]
pub struct RawSink<'fd> {
    fd: BorrowedFd<'fd>,
}

#[cfg(unix)]
impl<'fd> RawSink<'fd> {
    pub fn new(fd: BorrowedFd<'fd>) -> Self {
        Self { fd }
    }
}

#[cfg(unix)]
impl ChunkSink for RawSink<'_> {
    fn put(&mut self, mut bytes: &[u8]) -> Result<()> {
        while !bytes.is_empty() {
            let n = unsafe {
                libc::write(
                    self.fd.as_raw_fd(),
                    bytes.as_ptr().cast(),
                    bytes.len(),
                )
            };
            if n < 0 {
                return Err(SelfCatError::Write(Error::last_os_error()));
            }
            if n == 0 {
                return Err(SelfCatError::Write(ErrorKind::WriteZero.into()));
            }
            bytes = &bytes[n as usize..];
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    struct Broken;

    impl Write for Broken {
        fn write(&mut self, _: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn stream_sink_writes_everything() {
        let mut out = Vec::new();
        let mut sink = StreamSink::new(&mut out);
        sink.put(b"hello ").unwrap();
        sink.put(b"world").unwrap();
        sink.finish().unwrap();
        assert_eq!(out, b"hello world");
    }

    #[test]
    fn stream_sink_reports_write_errors() {
        let mut sink = StreamSink::new(Broken);
        let result = sink.put(b"x");
        assert!(matches!(result, Err(SelfCatError::Write(_))));
    }

    #[cfg(unix)]
    #[test]
    fn raw_sink_writes_to_descriptor() {
        use std::fs::{self, File};
        use std::os::unix::io::AsFd;
        use tempdir::TempDir;

        let dir = TempDir::new("raw_sink").unwrap();
        let path = dir.path().join("out");
        let file = File::create(&path).unwrap();

        let mut sink = RawSink::new(file.as_fd());
        sink.put(b"int main()\n").unwrap();
        sink.put(&[0u8, 255, 10]).unwrap();
        sink.finish().unwrap();
        drop(file);

        let mut expected = b"int main()\n".to_vec();
        expected.extend_from_slice(&[0, 255, 10]);
        assert_eq!(fs::read(&path).unwrap(), expected);
    }
}
