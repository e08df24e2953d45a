use std::io::{self, Write};

/// An append-only sink that knows how many bytes it has accepted.
///
/// The cross-reference table needs the byte offset of every object, and
/// the underlying writer is not required to be seekable, so offsets are
/// counted here instead of queried.
#[derive(Debug)]
pub struct CountingSink<W: Write> {
    inner: W,
    offset: u64,
}

impl<W: Write> CountingSink<W> {
    pub fn new(inner: W) -> Self {
        Self { inner, offset: 0 }
    }

    /// Number of bytes accepted so far.
    pub fn offset(&self) -> u64 {
        self.offset
    }

    pub fn get_ref(&self) -> &W {
        &self.inner
    }

    pub fn into_inner(self) -> W {
        self.inner
    }
}

impl<W: Write> Write for CountingSink<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let written = self.inner.write(buf)?;
        self.offset += written as u64;
        Ok(written)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}
