//! Signature registry service
//!
//! Resolves format tokens to the file signatures used for header detection.

use crate::domain::entities::{FileSignature, FileType, UnsupportedFormat};

/// Registry of file signatures for header detection
///
/// # Example
///
/// ```
/// use magic_detect::domain::services::SignatureRegistry;
/// use magic_detect::domain::entities::FileType;
///
/// let registry = SignatureRegistry::standard();
/// let sig = registry.signature_for("jpg").unwrap();
/// assert_eq!(sig.file_type(), FileType::Jpeg);
/// assert_eq!(sig.header(), &[0xFFu8, 0xD8, 0xFF][..]);
/// assert!(registry.signature_for("bmp").is_err());
/// ```
#[derive(Debug, Clone)]
pub struct SignatureRegistry {
    signatures: Vec<FileSignature>,
}

impl SignatureRegistry {
    /// Creates a registry with every supported format
    pub fn standard() -> Self {
        Self {
            signatures: FileType::ALL.into_iter().map(FileSignature::new).collect(),
        }
    }

    /// Looks up the signature for a format token
    ///
    /// Fails with the offending token when the format is not supported.
    pub fn signature_for(&self, format: &str) -> Result<&FileSignature, UnsupportedFormat> {
        let file_type: FileType = format.parse()?;
        self.signatures
            .iter()
            .find(|sig| sig.file_type() == file_type)
            .ok_or_else(|| UnsupportedFormat(format.to_string()))
    }

    /// Returns all registered signatures in table order
    pub fn signatures(&self) -> impl Iterator<Item = &FileSignature> {
        self.signatures.iter()
    }

    /// Returns the number of registered signatures
    pub fn signature_count(&self) -> usize {
        self.signatures.len()
    }
}

impl Default for SignatureRegistry {
    fn default() -> Self {
        Self::standard()
    }
}
