//! Byte source and sink seams.
//!
//! The source is addressed by explicit offset on every read; nothing here
//! keeps a hidden cursor. The sink is written strictly in order.

use alloc::vec::Vec;

use crate::error::ScaleError;

/// Random-access byte source.
pub trait ByteSource {
    /// Fill `buf` with the bytes starting at `offset`.
    ///
    /// Fewer available bytes than `buf.len()` is a [`ScaleError::TruncatedSource`].
    fn read_at(&mut self, offset: u64, buf: &mut [u8]) -> Result<(), ScaleError>;
}

/// Sequential byte sink.
pub trait ByteSink {
    fn write_all(&mut self, bytes: &[u8]) -> Result<(), ScaleError>;
}

impl ByteSource for &[u8] {
    fn read_at(&mut self, offset: u64, buf: &mut [u8]) -> Result<(), ScaleError> {
        let needed = buf.len();
        let truncated = || ScaleError::TruncatedSource { offset, needed };
        let start = usize::try_from(offset).map_err(|_| truncated())?;
        let src = start
            .checked_add(needed)
            .and_then(|end| self.get(start..end))
            .ok_or_else(truncated)?;
        buf.copy_from_slice(src);
        Ok(())
    }
}

impl<T: ByteSource + ?Sized> ByteSource for &mut T {
    fn read_at(&mut self, offset: u64, buf: &mut [u8]) -> Result<(), ScaleError> {
        (**self).read_at(offset, buf)
    }
}

impl ByteSink for Vec<u8> {
    fn write_all(&mut self, bytes: &[u8]) -> Result<(), ScaleError> {
        self.extend_from_slice(bytes);
        Ok(())
    }
}

impl<T: ByteSink + ?Sized> ByteSink for &mut T {
    fn write_all(&mut self, bytes: &[u8]) -> Result<(), ScaleError> {
        (**self).write_all(bytes)
    }
}

#[cfg(feature = "std")]
pub use self::std_io::{IoSink, IoSource};

#[cfg(feature = "std")]
mod std_io {
    use std::io::{self, Read, Seek, SeekFrom, Write};

    use super::{ByteSink, ByteSource};
    use crate::error::ScaleError;

    const DEFAULT_WINDOW: usize = 8 * 1024;

    /// [`ByteSource`] over any `Read + Seek`.
    ///
    /// Keeps one window of the underlying reader in memory. Reads that fall
    /// inside it are served without touching `R`; anything else seeks and
    /// refills the window from the requested offset. Pass an unbuffered
    /// reader: a `BufReader` would drop its own buffer on every seek.
    #[derive(Debug)]
    pub struct IoSource<R> {
        inner: R,
        window: Vec<u8>,
        window_start: u64,
        capacity: usize,
    }

    impl<R: Read + Seek> IoSource<R> {
        pub fn new(inner: R) -> Self {
            Self::with_capacity(DEFAULT_WINDOW, inner)
        }

        /// Use a window of `capacity` bytes (at least 1).
        pub fn with_capacity(capacity: usize, inner: R) -> Self {
            Self {
                inner,
                window: Vec::new(),
                window_start: 0,
                capacity: capacity.max(1),
            }
        }

        pub fn into_inner(self) -> R {
            self.inner
        }

        fn cached(&self, offset: u64, len: usize) -> Option<&[u8]> {
            let start = usize::try_from(offset.checked_sub(self.window_start)?).ok()?;
            self.window.get(start..start.checked_add(len)?)
        }

        fn seek_to(&mut self, offset: u64) -> Result<(), ScaleError> {
            self.inner
                .seek(SeekFrom::Start(offset))
                .map(|_| ())
                .map_err(|e| ScaleError::SourceUnreadable(e.to_string()))
        }

        fn refill(&mut self, offset: u64) -> Result<(), ScaleError> {
            self.window.clear();
            self.seek_to(offset)?;
            self.window.resize(self.capacity, 0);
            let mut filled = 0;
            while filled < self.capacity {
                match self.inner.read(&mut self.window[filled..]) {
                    Ok(0) => break,
                    Ok(n) => filled += n,
                    Err(e) if e.kind() == io::ErrorKind::Interrupted => {}
                    Err(e) => {
                        self.window.clear();
                        return Err(ScaleError::SourceUnreadable(e.to_string()));
                    }
                }
            }
            self.window.truncate(filled);
            self.window_start = offset;
            Ok(())
        }
    }

    impl<R: Read + Seek> ByteSource for IoSource<R> {
        fn read_at(&mut self, offset: u64, buf: &mut [u8]) -> Result<(), ScaleError> {
            let needed = buf.len();
            if needed > self.capacity {
                self.seek_to(offset)?;
                return self.inner.read_exact(buf).map_err(|e| match e.kind() {
                    io::ErrorKind::UnexpectedEof => ScaleError::TruncatedSource { offset, needed },
                    _ => ScaleError::SourceUnreadable(e.to_string()),
                });
            }
            if self.cached(offset, needed).is_none() {
                self.refill(offset)?;
            }
            let src = self
                .cached(offset, needed)
                .ok_or(ScaleError::TruncatedSource { offset, needed })?;
            buf.copy_from_slice(src);
            Ok(())
        }
    }

    /// [`ByteSink`] over any `Write`.
    #[derive(Debug)]
    pub struct IoSink<W> {
        inner: W,
    }

    impl<W: Write> IoSink<W> {
        pub fn new(inner: W) -> Self {
            Self { inner }
        }

        pub fn flush(&mut self) -> Result<(), ScaleError> {
            self.inner
                .flush()
                .map_err(|e| ScaleError::DestinationUnwritable(e.to_string()))
        }

        pub fn into_inner(self) -> W {
            self.inner
        }
    }

    impl<W: Write> ByteSink for IoSink<W> {
        fn write_all(&mut self, bytes: &[u8]) -> Result<(), ScaleError> {
            self.inner
                .write_all(bytes)
                .map_err(|e| ScaleError::DestinationUnwritable(e.to_string()))
        }
    }
}
