//! Local header reader implementation
//!
//! Reads file headers from the local filesystem.

use crate::domain::repositories::{HeaderReadError, HeaderReader};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Local file system header reader
///
/// Opens each file only for the duration of one [`HeaderReader::read_header`]
/// call; the handle is closed when the call returns.
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalHeaderReader;

impl LocalHeaderReader {
    /// Creates a new reader
    pub fn new() -> Self {
        Self
    }
}

impl HeaderReader for LocalHeaderReader {
    fn read_header(&self, path: &Path, length: usize) -> Result<Vec<u8>, HeaderReadError> {
        let mut file = File::open(path).map_err(|source| HeaderReadError::Open {
            path: path.to_path_buf(),
            source,
        })?;

        let size = file
            .metadata()
            .map_err(|source| HeaderReadError::Stat {
                path: path.to_path_buf(),
                source,
            })?
            .len();

        if size < length as u64 {
            return Err(HeaderReadError::TooSmall {
                path: path.to_path_buf(),
                size,
                expected: length,
            });
        }

        let mut header = vec![0u8; length];
        file.read_exact(&mut header)
            .map_err(|source| HeaderReadError::Read {
                path: path.to_path_buf(),
                source,
            })?;

        Ok(header)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_reads_exact_prefix() {
        let mut temp = NamedTempFile::new().unwrap();
        temp.write_all(b"%PDF-1.7\n").unwrap();
        temp.flush().unwrap();

        let header = LocalHeaderReader::new().read_header(temp.path(), 5).unwrap();

        assert_eq!(header, b"%PDF-");
    }

    #[test]
    fn test_exact_size_file_is_readable() {
        let mut temp = NamedTempFile::new().unwrap();
        temp.write_all(&[0xFF, 0xD8, 0xFF]).unwrap();
        temp.flush().unwrap();

        let header = LocalHeaderReader::new().read_header(temp.path(), 3).unwrap();

        assert_eq!(header.len(), 3);
    }

    #[test]
    fn test_too_small() {
        let mut temp = NamedTempFile::new().unwrap();
        temp.write_all(b"%P").unwrap();
        temp.flush().unwrap();

        let err = LocalHeaderReader::new()
            .read_header(temp.path(), 5)
            .unwrap_err();

        match err {
            HeaderReadError::TooSmall { size, expected, .. } => {
                assert_eq!(size, 2);
                assert_eq!(expected, 5);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.png");

        let err = LocalHeaderReader::new().read_header(&path, 8).unwrap_err();

        assert!(matches!(err, HeaderReadError::Open { .. }));
        assert_eq!(err.path(), path.as_path());
    }

    #[cfg(unix)]
    #[test]
    fn test_directory_is_not_readable() {
        let dir = tempfile::tempdir().unwrap();

        let err = LocalHeaderReader::new()
            .read_header(dir.path(), 1)
            .unwrap_err();

        // Opening a directory succeeds on Unix; its size or the read fails.
        assert!(matches!(
            err,
            HeaderReadError::TooSmall { .. } | HeaderReadError::Read { .. }
        ));
    }
}
