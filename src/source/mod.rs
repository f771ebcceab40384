//! Input handles. Each one is acquired by `open` and released when it is
//! dropped, so every exit path closes the file.

mod block_stream;
mod char_stream;
#[cfg(unix)]
mod raw_fd;

pub use block_stream::BlockSource;
pub use char_stream::CharSource;
#[cfg(unix)]
pub use raw_fd::RawSource;
