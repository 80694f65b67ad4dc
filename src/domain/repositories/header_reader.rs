//! Header reader trait
//!
//! Defines the interface for fetching the leading bytes of a candidate file.

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur while reading a file header
///
/// Every variant carries the path involved. None of them is fatal to a
/// detection run: the affected file is skipped.
#[derive(Error, Debug)]
pub enum HeaderReadError {
    #[error("cannot open file {}: {source}", path.display())]
    Open { path: PathBuf, source: io::Error },

    #[error("cannot get file info for {}: {source}", path.display())]
    Stat { path: PathBuf, source: io::Error },

    #[error("file {} is smaller than expected header size ({size} < {expected} bytes)", path.display())]
    TooSmall {
        path: PathBuf,
        size: u64,
        expected: usize,
    },

    #[error("cannot read header of {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },
}

impl HeaderReadError {
    /// Path of the file that failed
    pub fn path(&self) -> &Path {
        match self {
            HeaderReadError::Open { path, .. }
            | HeaderReadError::Stat { path, .. }
            | HeaderReadError::TooSmall { path, .. }
            | HeaderReadError::Read { path, .. } => path,
        }
    }
}

/// Trait for reading the first bytes of a file
///
/// Implementations must return exactly `length` bytes on success and must
/// release any handle they open before returning, on every path.
pub trait HeaderReader {
    /// Reads exactly `length` leading bytes from `path`
    ///
    /// A file shorter than `length` fails with [`HeaderReadError::TooSmall`]
    /// without attempting the read.
    fn read_header(&self, path: &Path, length: usize) -> Result<Vec<u8>, HeaderReadError>;
}

impl<R: HeaderReader + ?Sized> HeaderReader for &R {
    fn read_header(&self, path: &Path, length: usize) -> Result<Vec<u8>, HeaderReadError> {
        (**self).read_header(path, length)
    }
}
