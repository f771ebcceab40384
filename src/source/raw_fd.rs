use std::ffi::CString;
use std::io::{Error, ErrorKind};
use std::os::unix::ffi::OsStrExt;
use std::os::unix::io::{AsRawFd, FromRawFd, OwnedFd};
use std::path::{Path, PathBuf};

use log::{debug, trace};

use crate::errors::{Result, SelfCatError};
use crate::transfer::{Chunk, ChunkSource};

/// Unbuffered descriptor read with `read(2)`.
pub struct RawSource {
    fd: OwnedFd,
    path: PathBuf,
}

impl RawSource {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        debug!("Opening {} as a raw descriptor", path.display());

        let c_path = CString::new(path.as_os_str().as_bytes()).map_err(|e| {
            SelfCatError::open(path, Error::new(ErrorKind::InvalidInput, e))
        })?;

        let fd = unsafe {
            libc::open(c_path.as_ptr(), libc::O_RDONLY | libc::O_CLOEXEC)
        };
        if fd < 0 {
            return Err(SelfCatError::open(path, Error::last_os_error()));
        }

        // SAFETY: `fd` was just returned by a successful open(2) and is
        // owned by nobody else.
        let fd = unsafe { OwnedFd::from_raw_fd(fd) };
        Ok(Self {
            fd,
            path: path.to_path_buf(),
        })
    }
}

impl ChunkSource for RawSource {
    fn next_chunk(&mut self, buf: &mut [u8]) -> Result<Chunk> {
        let n = unsafe {
            libc::read(self.fd.as_raw_fd(), buf.as_mut_ptr().cast(), buf.len())
        };
        match n {
            n if n < 0 => Err(SelfCatError::Read(Error::last_os_error())),
            0 => Ok(Chunk::End),
            n => Ok(Chunk::Data(n as usize)),
        }
    }
}

impl Drop for RawSource {
    fn drop(&mut self) {
        trace!(
            "Closing descriptor {} for {}",
            self.fd.as_raw_fd(),
            self.path.display()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempdir::TempDir;

    #[test]
    fn reads_blocks_until_zero() {
        let dir = TempDir::new("raw_source").unwrap();
        let path = dir.path().join("p06.rs");
        fs::write(&path, vec![1u8; 200]).unwrap();

        let mut source = RawSource::open(&path).unwrap();
        let mut buf = [0u8; 100];

        assert_eq!(source.next_chunk(&mut buf).unwrap(), Chunk::Data(100));
        assert_eq!(source.next_chunk(&mut buf).unwrap(), Chunk::Data(100));
        assert_eq!(source.next_chunk(&mut buf).unwrap(), Chunk::End);
    }

    #[test]
    fn missing_file_fails_to_open() {
        let dir = TempDir::new("raw_source_missing").unwrap();
        let result = RawSource::open(dir.path().join("p06.rs"));

        match result {
            Err(SelfCatError::Open { source, .. }) => {
                assert_eq!(source.kind(), ErrorKind::NotFound)
            }
            _ => panic!("expected an open failure"),
        }
    }

    #[test]
    fn interior_nul_is_rejected() {
        let result = RawSource::open("p06\0.rs");
        assert!(matches!(result, Err(SelfCatError::Open { .. })));
    }

    #[test]
    fn negative_read_is_an_error() {
        let dir = TempDir::new("raw_source_dir").unwrap();
        let mut source = RawSource::open(dir.path()).unwrap();
        let mut buf = [0u8; 100];

        let result = source.next_chunk(&mut buf);
        assert!(matches!(result, Err(SelfCatError::Read(_))));
    }
}
