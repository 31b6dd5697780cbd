//! The memory-mapped byte region backing an [`crate::elf::Elf`] container.

use std::fs::{File, OpenOptions as FsOpenOptions};
use std::io::Write;
use std::path::Path;

use memmap2::{Mmap, MmapMut, MmapOptions};

use crate::error::{Error, ErrorContext, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Byte order of the multi-byte fields recorded in the file
pub enum Endian {
    /// Least significant byte first
    Little,
    /// Most significant byte first
    Big,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Whether a [`MappedBuffer`] was opened for reading only, or for reading and
/// in-place writing
pub enum OpenMode {
    /// The mapping is immutable; [`MappedBuffer::write_bytes`] fails
    ReadOnly,
    /// The mapping additionally exposes a mutable view of the same bytes
    ReadWrite,
}

/// A fixed-layout on-disk record that can be decoded from a byte slice,
/// honoring the file's declared byte order.
///
/// One impl per raw 32-/64-bit record struct in [`crate::raw`]; each impl
/// decodes every scalar field with `from_le_bytes`/`from_be_bytes` rather
/// than an unsafe transmute, so a misaligned or differently-packed `T` can
/// never be read out of a buffer it wasn't written for.
pub trait FromRecordBytes: Sized {
    /// The on-disk size of this record, in bytes
    const SIZE: usize;

    /// Decode an instance of `Self` from the first `Self::SIZE` bytes of `bytes`
    fn from_record_bytes(bytes: &[u8], endian: Endian) -> Self;
}

enum Backing {
    ReadOnly(Mmap),
    ReadWrite(MmapMut),
}

impl Backing {
    fn as_slice(&self) -> &[u8] {
        match self {
            Backing::ReadOnly(map) => &map[..],
            Backing::ReadWrite(map) => &map[..],
        }
    }
}

/// A file-backed byte region with a fixed endian and read/write mode.
///
/// Exposes typed fixed-layout reads at an offset (honoring the declared
/// endian) and, when opened read-write, bounded byte writes. The mapping and
/// the file handle backing it are released together on `Drop`.
pub struct MappedBuffer {
    // Kept alive for the lifetime of the mapping; never read directly.
    _file: File,
    backing: Backing,
    endian: Endian,
    mode: OpenMode,
}

impl MappedBuffer {
    /// Map `path` into memory with the given `endian` and `mode`.
    pub fn open<P: AsRef<Path>>(path: P, endian: Endian, mode: OpenMode) -> Result<Self> {
        let path = path.as_ref();
        let file = match mode {
            OpenMode::ReadOnly => FsOpenOptions::new().read(true).open(path),
            OpenMode::ReadWrite => FsOpenOptions::new().read(true).write(true).open(path),
        }
        .map_err(|e| Error::OpenFailed {
            message: e.to_string(),
        })?;

        let backing = match mode {
            OpenMode::ReadOnly => {
                let map = unsafe { Mmap::map(&file) }.map_err(|e| Error::MapFailed {
                    message: e.to_string(),
                })?;
                Backing::ReadOnly(map)
            }
            OpenMode::ReadWrite => {
                // A private (copy-on-write) mapping: writes land on pages owned
                // by this process only and are never flushed back to `file`.
                // `persist_to` is the only way this buffer's edits reach disk.
                let map = unsafe { MmapOptions::new().map_copy(&file) }.map_err(|e| {
                    Error::MapFailed {
                        message: e.to_string(),
                    }
                })?;
                Backing::ReadWrite(map)
            }
        };

        Ok(Self {
            _file: file,
            backing,
            endian,
            mode,
        })
    }

    /// The byte order this buffer decodes multi-byte fields with
    pub fn endian(&self) -> Endian {
        self.endian
    }

    /// Whether this buffer was opened for writing
    pub fn mode(&self) -> OpenMode {
        self.mode
    }

    /// The total length of the mapped region, in bytes
    pub fn len(&self) -> usize {
        self.backing.as_slice().len()
    }

    /// Whether the mapped region is empty
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Borrow the full mapped region
    pub fn as_bytes(&self) -> &[u8] {
        self.backing.as_slice()
    }

    /// Borrow `[offset, offset + len)` of the mapped region, bounds-checked
    pub fn slice(&self, offset: usize, len: usize) -> Result<&[u8]> {
        let bytes = self.as_bytes();
        let end = offset.checked_add(len).ok_or(Error::InvalidOffset {
            context: ErrorContext::at(offset),
            length: bytes.len(),
        })?;
        if end > bytes.len() {
            return Err(Error::InvalidOffset {
                context: ErrorContext::at(offset),
                length: bytes.len(),
            });
        }
        Ok(&bytes[offset..end])
    }

    /// Decode a fixed-layout record `T` at `offset`, honoring this buffer's endian
    pub fn read_record<T: FromRecordBytes>(&self, offset: usize) -> Result<T> {
        let bytes = self.slice(offset, T::SIZE)?;
        Ok(T::from_record_bytes(bytes, self.endian))
    }

    /// Write `bytes` into the mutable view at `offset`.
    ///
    /// Fails with [`Error::NotMutable`] when opened read-only.
    pub fn write_bytes(&mut self, bytes: &[u8], offset: usize) -> Result<()> {
        let end = offset.checked_add(bytes.len()).ok_or(Error::InvalidOffset {
            context: ErrorContext::at(offset),
            length: self.len(),
        })?;
        if end > self.len() {
            return Err(Error::InvalidOffset {
                context: ErrorContext::at(offset),
                length: self.len(),
            });
        }
        match &mut self.backing {
            Backing::ReadWrite(map) => {
                map[offset..end].copy_from_slice(bytes);
                Ok(())
            }
            Backing::ReadOnly(_) => Err(Error::NotMutable),
        }
    }

    /// Create a new file at `new_path` containing the buffer's current bytes.
    ///
    /// Requires read-write mode; persisting a read-only mapping would just be
    /// a copy of the unmodified file, which the caller can already do without
    /// this crate.
    pub fn persist_to<P: AsRef<Path>>(&self, new_path: P) -> Result<()> {
        if !matches!(self.mode, OpenMode::ReadWrite) {
            return Err(Error::NoMutableBuffer);
        }
        let mut out = File::create(new_path.as_ref()).map_err(|e| Error::OpenFailed {
            message: e.to_string(),
        })?;
        out.write_all(self.as_bytes())
            .map_err(|e| Error::WriteFailed {
                message: e.to_string(),
            })?;
        Ok(())
    }
}

#[allow(clippy::unwrap_used, clippy::expect_used)]
#[cfg(test)]
mod test {
    use super::*;
    use std::io::Write as _;
    use tempfile::NamedTempFile;

    fn fixture(bytes: &[u8]) -> NamedTempFile {
        let mut f = NamedTempFile::new().expect("create temp file");
        f.write_all(bytes).expect("write temp file");
        f.flush().expect("flush temp file");
        f
    }

    #[test]
    fn read_only_rejects_writes() {
        let f = fixture(&[0u8; 16]);
        let mut buf = MappedBuffer::open(f.path(), Endian::Little, OpenMode::ReadOnly)
            .expect("open buffer");
        assert_eq!(buf.write_bytes(&[1, 2, 3], 0), Err(Error::NotMutable));
    }

    #[test]
    fn bounded_write_then_persist_round_trips() {
        let f = fixture(&[0u8; 16]);
        let mut buf = MappedBuffer::open(f.path(), Endian::Little, OpenMode::ReadWrite)
            .expect("open buffer");
        buf.write_bytes(&[0xaa, 0xbb], 4).expect("write bytes");

        let out = NamedTempFile::new().expect("create out file");
        buf.persist_to(out.path()).expect("persist");

        let persisted = std::fs::read(out.path()).expect("read persisted file");
        assert_eq!(&persisted[4..6], &[0xaa, 0xbb]);
        assert_eq!(persisted.len(), 16);

        let original = std::fs::read(f.path()).expect("read original file");
        assert_eq!(original, vec![0u8; 16]);
    }

    #[test]
    fn write_bytes_never_touches_the_backing_file() {
        let f = fixture(&[0u8; 16]);
        let mut buf = MappedBuffer::open(f.path(), Endian::Little, OpenMode::ReadWrite)
            .expect("open buffer");
        buf.write_bytes(&[0xaa, 0xbb], 4).expect("write bytes");

        assert_eq!(buf.slice(4, 2).expect("read back"), &[0xaa, 0xbb]);
        let original = std::fs::read(f.path()).expect("read original file");
        assert_eq!(original, vec![0u8; 16]);
    }

    #[test]
    fn out_of_bounds_read_is_invalid_offset() {
        let f = fixture(&[0u8; 4]);
        let buf =
            MappedBuffer::open(f.path(), Endian::Little, OpenMode::ReadOnly).expect("open buffer");
        assert!(matches!(
            buf.slice(2, 4),
            Err(Error::InvalidOffset { .. })
        ));
    }
}
