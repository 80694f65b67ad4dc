//! File signature entity
//!
//! Represents the magic bytes at the start of a file that identify
//! a specific file format. This is the foundation of header detection.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Returned when a format token does not name a supported format
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unsupported format: {0}")]
pub struct UnsupportedFormat(pub String);

/// File formats that can be detected by their header
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileType {
    /// PNG image format
    Png,
    /// JPEG image format
    Jpeg,
    /// GIF image format (89a)
    Gif,
    /// PDF document format
    Pdf,
}

impl FileType {
    /// Every supported format, in table order
    pub const ALL: [FileType; 4] = [FileType::Png, FileType::Jpeg, FileType::Gif, FileType::Pdf];

    /// Returns the token used to select this format on the command line
    pub fn token(&self) -> &'static str {
        match self {
            FileType::Png => "png",
            FileType::Jpeg => "jpg",
            FileType::Gif => "gif",
            FileType::Pdf => "pdf",
        }
    }

    /// Returns a human-readable name for this file type
    pub fn name(&self) -> &'static str {
        match self {
            FileType::Png => "PNG Image",
            FileType::Jpeg => "JPEG Image",
            FileType::Gif => "GIF Image",
            FileType::Pdf => "PDF Document",
        }
    }

    /// Returns the magic bytes every file of this type starts with
    pub fn signature_bytes(&self) -> &'static [u8] {
        match self {
            // 89 50 4E 47 0D 0A 1A 0A
            FileType::Png => b"\x89PNG\r\n\x1a\n",
            // FF D8 FF
            FileType::Jpeg => &[0xFF, 0xD8, 0xFF],
            FileType::Gif => b"GIF89a",
            FileType::Pdf => b"%PDF-",
        }
    }
}

impl fmt::Display for FileType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for FileType {
    type Err = UnsupportedFormat;

    /// Tokens are matched exactly: no case folding, no aliases.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FileType::ALL
            .into_iter()
            .find(|file_type| file_type.token() == s)
            .ok_or_else(|| UnsupportedFormat(s.to_string()))
    }
}

/// A file signature containing the header bytes for file identification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileSignature {
    /// The type of file this signature identifies
    file_type: FileType,
    /// The header bytes (magic bytes at the start of the file)
    header: &'static [u8],
}

impl FileSignature {
    /// Creates the signature for a file type
    pub fn new(file_type: FileType) -> Self {
        Self {
            file_type,
            header: file_type.signature_bytes(),
        }
    }

    /// Returns the file type this signature identifies
    pub fn file_type(&self) -> FileType {
        self.file_type
    }

    /// Returns the header bytes
    pub fn header(&self) -> &'static [u8] {
        self.header
    }

    /// Number of leading bytes that must be read to check a file
    pub fn len(&self) -> usize {
        self.header.len()
    }

    /// Always false for the built-in formats
    pub fn is_empty(&self) -> bool {
        self.header.is_empty()
    }

    /// Returns the header as upper-case hex pairs, e.g. `FF D8 FF`
    pub fn header_hex(&self) -> String {
        self.header
            .iter()
            .map(|b| hex::encode_upper([*b]))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Checks whether `data` is exactly this signature's header
    ///
    /// `data` is expected to be the leading `self.len()` bytes of a file;
    /// a buffer of any other length never matches.
    pub fn matches_header(&self, data: &[u8]) -> bool {
        data == self.header
    }
}
