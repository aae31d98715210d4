//! Transfer backends for chunk reads and writes
//!
//! Higher layers move bytes through [`Source`] and [`Dest`] so that the same
//! codec paths serve buffered files, raw files, and memory. Each kind keeps
//! its own cursor; descriptors are not thread-safe and the caller owns the
//! underlying file or buffer.

use std::fs::File;
use std::io::{BufReader, BufWriter, Cursor, ErrorKind, Read, Seek, Write};

use crate::{Error, Result};

/// A byte source for chunk reads, one variant per backing kind.
#[derive(Debug)]
pub enum Source<'a> {
    /// Buffered file reads
    Buffered(BufReader<File>),
    /// Unbuffered file reads
    File(File),
    /// Borrowed in-memory data
    Slice(Cursor<&'a [u8]>),
    /// Owned in-memory data
    Owned(Cursor<Vec<u8>>),
}

impl<'a> Source<'a> {
    /// Read a file through a buffer.
    pub fn buffered(file: File) -> Self {
        Self::Buffered(BufReader::new(file))
    }

    /// Read a file without buffering.
    pub fn file(file: File) -> Self {
        Self::File(file)
    }

    /// Read from borrowed memory.
    pub fn from_slice(data: &'a [u8]) -> Self {
        Self::Slice(Cursor::new(data))
    }

    /// Read from owned memory.
    pub fn from_vec(data: Vec<u8>) -> Self {
        Self::Owned(Cursor::new(data))
    }

    /// Read a single byte, advancing the cursor.
    pub fn get_byte(&mut self) -> Result<u8> {
        let mut byte = [0u8; 1];
        self.read_exact(&mut byte)?;
        Ok(byte[0])
    }

    /// Fill `buf` completely, advancing the cursor.
    ///
    /// Running out of bytes reports [`Error::Truncated`] with the counts of
    /// this read, for files and memory alike.
    pub fn read_exact(&mut self, buf: &mut [u8]) -> Result<()> {
        let mut filled = 0;
        while filled < buf.len() {
            let n = self.read_some(&mut buf[filled..])?;
            if n == 0 {
                return Err(Error::Truncated {
                    expected: buf.len() as u64,
                    actual: filled as u64,
                });
            }
            filled += n;
        }
        Ok(())
    }

    /// Read every remaining byte into `out`, returning the count read.
    pub fn read_to_end(&mut self, out: &mut Vec<u8>) -> Result<usize> {
        let mut scratch = [0u8; 8192];
        let mut total = 0;
        loop {
            let n = self.read_some(&mut scratch)?;
            if n == 0 {
                return Ok(total);
            }
            out.extend_from_slice(&scratch[..n]);
            total += n;
        }
    }

    /// Current read position in bytes.
    pub fn position(&mut self) -> Result<u64> {
        let pos = match self {
            Self::Buffered(f) => f.stream_position()?,
            Self::File(f) => f.stream_position()?,
            Self::Slice(c) => c.position(),
            Self::Owned(c) => c.position(),
        };
        Ok(pos)
    }

    fn read_some(&mut self, buf: &mut [u8]) -> Result<usize> {
        loop {
            let read = match self {
                Self::Buffered(f) => f.read(buf),
                Self::File(f) => f.read(buf),
                Self::Slice(c) => c.read(buf),
                Self::Owned(c) => c.read(buf),
            };
            match read {
                Ok(n) => return Ok(n),
                Err(e) if e.kind() == ErrorKind::Interrupted => {}
                Err(e) => return Err(e.into()),
            }
        }
    }
}

/// A byte destination for chunk writes, one variant per backing kind.
#[derive(Debug)]
pub enum Dest<'a> {
    /// Buffered file writes
    Buffered(BufWriter<File>),
    /// Unbuffered file writes
    File(File),
    /// Borrowed memory, capacity fixed by the slice length
    Slice(Cursor<&'a mut [u8]>),
    /// Owned memory with a declared capacity
    Owned { buf: Vec<u8>, capacity: usize },
}

impl<'a> Dest<'a> {
    /// Write to a file through a buffer.
    pub fn buffered(file: File) -> Self {
        Self::Buffered(BufWriter::new(file))
    }

    /// Write to a file without buffering.
    pub fn file(file: File) -> Self {
        Self::File(file)
    }

    /// Write into borrowed memory.
    pub fn from_slice(buf: &'a mut [u8]) -> Self {
        Self::Slice(Cursor::new(buf))
    }

    /// Write into owned memory bounded at `capacity` bytes.
    pub fn with_capacity(capacity: usize) -> Self {
        Self::Owned {
            buf: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Write a single byte, advancing the cursor.
    pub fn put_byte(&mut self, byte: u8) -> Result<()> {
        self.write_all(&[byte])
    }

    /// Write all of `data`, advancing the cursor.
    ///
    /// Memory-backed kinds check remaining capacity before touching the
    /// buffer; an oversized write fails with [`Error::BufferOverflow`] and
    /// leaves the destination unchanged.
    pub fn write_all(&mut self, data: &[u8]) -> Result<()> {
        match self {
            Self::Buffered(f) => f.write_all(data)?,
            Self::File(f) => f.write_all(data)?,
            Self::Slice(c) => {
                let capacity = c.get_ref().len();
                let remaining = (capacity as u64).saturating_sub(c.position());
                if data.len() as u64 > remaining {
                    return Err(Error::BufferOverflow { capacity });
                }
                c.write_all(data)?;
            }
            Self::Owned { buf, capacity } => {
                if data.len() > capacity.saturating_sub(buf.len()) {
                    return Err(Error::BufferOverflow {
                        capacity: *capacity,
                    });
                }
                buf.extend_from_slice(data);
            }
        }
        Ok(())
    }

    /// Flush buffered writes through to the file.
    pub fn flush(&mut self) -> Result<()> {
        match self {
            Self::Buffered(f) => f.flush()?,
            Self::File(f) => f.flush()?,
            Self::Slice(_) | Self::Owned { .. } => {}
        }
        Ok(())
    }

    /// Current write position in bytes.
    pub fn position(&mut self) -> Result<u64> {
        let pos = match self {
            Self::Buffered(f) => f.stream_position()?,
            Self::File(f) => f.stream_position()?,
            Self::Slice(c) => c.position(),
            Self::Owned { buf, .. } => buf.len() as u64,
        };
        Ok(pos)
    }

    /// Bytes written so far, for memory-backed kinds.
    pub fn written(&self) -> Option<usize> {
        match self {
            Self::Slice(c) => Some(c.position() as usize),
            Self::Owned { buf, .. } => Some(buf.len()),
            Self::Buffered(_) | Self::File(_) => None,
        }
    }

    /// Take the accumulated bytes out of an owned-memory destination.
    ///
    /// Returns `None` for the other kinds.
    pub fn into_vec(self) -> Option<Vec<u8>> {
        match self {
            Self::Owned { buf, .. } => Some(buf),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write as _;

    #[test]
    fn test_slice_source_reads_in_order() {
        let data = [0x10, 0x20, 0x30];
        let mut src = Source::from_slice(&data);

        assert_eq!(src.get_byte().unwrap(), 0x10);
        assert_eq!(src.get_byte().unwrap(), 0x20);
        assert_eq!(src.get_byte().unwrap(), 0x30);
        assert_eq!(src.position().unwrap(), 3);

        let err = src.get_byte().unwrap_err();
        assert!(
            matches!(
                err,
                Error::Truncated {
                    expected: 1,
                    actual: 0
                }
            ),
            "actual error: {err:?}",
        );
    }

    #[test]
    fn test_read_exact_reports_partial_counts() {
        let data = [0u8; 10];
        let mut src = Source::from_slice(&data);

        let mut buf = [0u8; 16];
        let err = src.read_exact(&mut buf).unwrap_err();
        assert!(
            matches!(
                err,
                Error::Truncated {
                    expected: 16,
                    actual: 10
                }
            ),
            "actual error: {err:?}",
        );
    }

    #[test]
    fn test_read_to_end_drains_remaining() {
        let mut src = Source::from_vec(vec![1, 2, 3, 4, 5]);
        assert_eq!(src.get_byte().unwrap(), 1);

        let mut rest = Vec::new();
        assert_eq!(src.read_to_end(&mut rest).unwrap(), 4);
        assert_eq!(rest, vec![2, 3, 4, 5]);
    }

    #[test]
    fn test_slice_dest_overflow_leaves_buffer_unchanged() {
        let mut buf = [0u8; 4];
        let mut dest = Dest::from_slice(&mut buf);

        let err = dest.write_all(&[1, 2, 3, 4, 5]).unwrap_err();
        assert!(
            matches!(err, Error::BufferOverflow { capacity: 4 }),
            "actual error: {err:?}",
        );
        assert_eq!(dest.written(), Some(0));

        dest.write_all(&[1, 2, 3, 4]).unwrap();
        assert_eq!(dest.written(), Some(4));
        drop(dest);
        assert_eq!(buf, [1, 2, 3, 4]);
    }

    #[test]
    fn test_owned_dest_respects_declared_capacity() {
        let mut dest = Dest::with_capacity(2);
        dest.put_byte(0xAA).unwrap();
        dest.put_byte(0xBB).unwrap();

        let err = dest.put_byte(0xCC).unwrap_err();
        assert!(
            matches!(err, Error::BufferOverflow { capacity: 2 }),
            "actual error: {err:?}",
        );
        assert_eq!(dest.into_vec(), Some(vec![0xAA, 0xBB]));
    }

    #[test]
    fn test_into_vec_is_none_for_files() {
        let file = tempfile::tempfile().unwrap();
        let dest = Dest::file(file);
        assert!(dest.written().is_none());
        assert!(dest.into_vec().is_none());
    }

    #[test]
    fn test_file_round_trip() {
        let mut tmp = tempfile::NamedTempFile::new().unwrap();
        tmp.write_all(&[7, 8, 9]).unwrap();
        tmp.flush().unwrap();

        let mut src = Source::buffered(tmp.reopen().unwrap());
        let mut buf = [0u8; 3];
        src.read_exact(&mut buf).unwrap();
        assert_eq!(buf, [7, 8, 9]);

        let err = src.get_byte().unwrap_err();
        assert!(matches!(err, Error::Truncated { .. }), "actual error: {err:?}");
    }
}
