//! Output sinks.
//!
//! [`OutputSink`] is the one capability every destination offers: byte and
//! formatted writes, absolute seeks, position and length queries, and
//! flushing. Each backing store is an independent implementation picked by
//! the caller.
//!
//! Length is the high-water mark of bytes written, so seeking backwards and
//! overwriting never shrinks it.

use std::fmt;
use std::fs::File;
use std::io::{BufWriter, Seek, SeekFrom, Write};
use std::path::Path;

use crate::error::{Error, Result};

/// A byte destination for rendered output.
pub trait OutputSink {
    /// Write raw bytes at the current position.
    fn write(&mut self, data: &[u8]) -> Result<()>;

    /// Write formatted text at the current position.
    fn write_formatted(&mut self, args: fmt::Arguments<'_>) -> Result<()> {
        match args.as_str() {
            Some(s) => self.write(s.as_bytes()),
            None => self.write(fmt::format(args).as_bytes()),
        }
    }

    /// Move to an absolute offset from the start.
    fn seek(&mut self, offset: usize) -> Result<()>;

    /// Current offset from the start.
    fn tell(&self) -> usize;

    /// Number of bytes written (high-water mark).
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Push buffered data to the backing store.
    fn flush(&mut self) -> Result<()> {
        Ok(())
    }
}

/// Writes nothing, only counts.
#[derive(Debug, Clone, Default)]
pub struct NullSink {
    position: usize,
    length: usize,
}

impl NullSink {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Position after writing `len` bytes at `position`.
fn write_end(position: usize, len: usize) -> Result<usize> {
    position
        .checked_add(len)
        .ok_or_else(|| {
            Error::Sink(format!(
                "write of {} bytes at offset {} overflows",
                len, position
            ))
        })
}

impl OutputSink for NullSink {
    fn write(&mut self, data: &[u8]) -> Result<()> {
        self.position = write_end(self.position, data.len())?;
        self.length = self.length.max(self.position);
        Ok(())
    }

    fn seek(&mut self, offset: usize) -> Result<()> {
        self.position = offset;
        Ok(())
    }

    fn tell(&self) -> usize {
        self.position
    }

    fn len(&self) -> usize {
        self.length
    }
}

/// Buffered file output.
#[derive(Debug)]
pub struct FileSink {
    file: BufWriter<File>,
    position: usize,
    length: usize,
}

impl FileSink {
    /// Create (or truncate) the file at `path`.
    pub fn create<P: AsRef<Path>>(path: P) -> Result<Self> {
        Ok(Self {
            file: BufWriter::new(File::create(path)?),
            position: 0,
            length: 0,
        })
    }
}

impl OutputSink for FileSink {
    fn write(&mut self, data: &[u8]) -> Result<()> {
        let end = write_end(self.position, data.len())?;
        self.file.write_all(data)?;
        self.position = end;
        self.length = self.length.max(self.position);
        Ok(())
    }

    fn seek(&mut self, offset: usize) -> Result<()> {
        self.file.seek(SeekFrom::Start(offset as u64))?;
        self.position = offset;
        Ok(())
    }

    fn tell(&self) -> usize {
        self.position
    }

    fn len(&self) -> usize {
        self.length
    }

    fn flush(&mut self) -> Result<()> {
        self.file.flush()?;
        Ok(())
    }
}

/// Writes into a caller-owned, fixed-size buffer.
#[derive(Debug)]
pub struct SliceSink<'a> {
    buf: &'a mut [u8],
    position: usize,
    length: usize,
}

impl<'a> SliceSink<'a> {
    pub fn new(buf: &'a mut [u8]) -> Self {
        Self {
            buf,
            position: 0,
            length: 0,
        }
    }

    pub fn capacity(&self) -> usize {
        self.buf.len()
    }

    /// The bytes written so far.
    pub fn written(&self) -> &[u8] {
        &self.buf[..self.length]
    }
}

impl OutputSink for SliceSink<'_> {
    fn write(&mut self, data: &[u8]) -> Result<()> {
        let end = write_end(self.position, data.len())?;
        if end > self.buf.len() {
            return Err(Error::Sink(format!(
                "buffer overflow: {} bytes at offset {} exceed capacity {}",
                data.len(),
                self.position,
                self.buf.len()
            )));
        }
        self.buf[self.position..end].copy_from_slice(data);
        self.position = end;
        self.length = self.length.max(end);
        Ok(())
    }

    fn seek(&mut self, offset: usize) -> Result<()> {
        if offset > self.buf.len() {
            return Err(Error::Sink(format!(
                "seek to {} beyond capacity {}",
                offset,
                self.buf.len()
            )));
        }
        self.position = offset;
        Ok(())
    }

    fn tell(&self) -> usize {
        self.position
    }

    fn len(&self) -> usize {
        self.length
    }
}

/// Growable in-memory output.
///
/// Seeking past the end is allowed; the gap is zero-filled on the next write.
#[derive(Debug, Clone, Default)]
pub struct VecSink {
    buf: Vec<u8>,
    position: usize,
}

impl VecSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.buf
    }

    pub fn into_inner(self) -> Vec<u8> {
        self.buf
    }
}

impl OutputSink for VecSink {
    fn write(&mut self, data: &[u8]) -> Result<()> {
        let end = write_end(self.position, data.len())?;
        if end > self.buf.len() {
            self.buf
                .try_reserve(end - self.buf.len())
                .map_err(|e| Error::Sink(format!("cannot grow buffer to {} bytes: {}", end, e)))?;
            self.buf.resize(end, 0);
        }
        self.buf[self.position..end].copy_from_slice(data);
        self.position = end;
        Ok(())
    }

    fn seek(&mut self, offset: usize) -> Result<()> {
        self.position = offset;
        Ok(())
    }

    fn tell(&self) -> usize {
        self.position
    }

    fn len(&self) -> usize {
        self.buf.len()
    }
}

/// Forwards to any [`Write`] (stdout, sockets, ...). Append-only.
pub struct StreamSink<W: Write> {
    inner: W,
    position: usize,
}

impl<W: Write> StreamSink<W> {
    pub fn new(inner: W) -> Self {
        Self { inner, position: 0 }
    }

    pub fn into_inner(self) -> W {
        self.inner
    }
}

impl<W: Write> OutputSink for StreamSink<W> {
    fn write(&mut self, data: &[u8]) -> Result<()> {
        let end = write_end(self.position, data.len())?;
        self.inner.write_all(data)?;
        self.position = end;
        Ok(())
    }

    fn seek(&mut self, offset: usize) -> Result<()> {
        if offset == self.position {
            return Ok(());
        }
        Err(Error::Sink("stream sinks cannot seek".to_string()))
    }

    fn tell(&self) -> usize {
        self.position
    }

    fn len(&self) -> usize {
        self.position
    }

    fn flush(&mut self) -> Result<()> {
        self.inner.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_sink_counts() {
        let mut sink = NullSink::new();
        sink.write(b"hello").unwrap();
        sink.write_formatted(format_args!("{}-{}", 1, 2)).unwrap();
        assert_eq!(sink.tell(), 8);
        sink.seek(2).unwrap();
        sink.write(b"x").unwrap();
        assert_eq!(sink.len(), 8);
        assert_eq!(sink.tell(), 3);
    }

    #[test]
    fn test_slice_sink_overflow() {
        let mut buf = [0u8; 4];
        let mut sink = SliceSink::new(&mut buf);
        sink.write(b"abc").unwrap();
        assert!(matches!(sink.write(b"de"), Err(Error::Sink(_))));
        assert_eq!(sink.written(), b"abc");
        assert!(sink.seek(5).is_err());
        sink.seek(1).unwrap();
        sink.write(b"Z").unwrap();
        assert_eq!(sink.written(), b"aZc");
    }

    #[test]
    fn test_vec_sink_overwrite_and_gap() {
        let mut sink = VecSink::new();
        sink.write(b"hello").unwrap();
        sink.seek(0).unwrap();
        sink.write(b"J").unwrap();
        assert_eq!(sink.as_bytes(), b"Jello");

        sink.seek(7).unwrap();
        sink.write(b"!").unwrap();
        assert_eq!(sink.into_inner(), b"Jello\0\0!".to_vec());
    }

    #[test]
    fn test_vec_sink_rejects_unaddressable_writes() {
        let mut sink = VecSink::new();
        sink.write(b"ok").unwrap();

        sink.seek(usize::MAX).unwrap();
        assert!(matches!(sink.write(b"x"), Err(Error::Sink(_))));

        sink.seek(usize::MAX - 1).unwrap();
        assert!(matches!(sink.write(b"x"), Err(Error::Sink(_))));

        assert_eq!(sink.as_bytes(), b"ok");
        assert_eq!(sink.tell(), usize::MAX - 1);
    }

    #[test]
    fn test_null_sink_rejects_overflowing_write() {
        let mut sink = NullSink::new();
        sink.seek(usize::MAX).unwrap();
        assert!(matches!(sink.write(b"x"), Err(Error::Sink(_))));
        assert_eq!(sink.len(), 0);
    }

    #[test]
    fn test_stream_sink_is_append_only() {
        let mut sink = StreamSink::new(Vec::new());
        sink.write(b"ab").unwrap();
        assert!(sink.seek(2).is_ok());
        assert!(matches!(sink.seek(0), Err(Error::Sink(_))));
        sink.flush().unwrap();
        assert_eq!(sink.into_inner(), b"ab".to_vec());
    }
}
