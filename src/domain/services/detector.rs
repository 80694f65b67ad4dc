//! File detector service
//!
//! Checks a batch of files against the signature of one format.

use crate::domain::entities::{Detection, FileSignature, UnsupportedFormat};
use crate::domain::repositories::HeaderReader;
use crate::domain::services::SignatureRegistry;
use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::path::Path;
use thiserror::Error;

/// Run-level errors of a detection
///
/// Per-file read failures are not errors at this level; they end up in
/// [`Detection::skipped`].
#[derive(Error, Debug)]
pub enum DetectError {
    #[error(transparent)]
    UnsupportedFormat(#[from] UnsupportedFormat),

    #[error("cannot detect: {0}")]
    Internal(String),
}

/// Detects which files start with a format's signature
///
/// # Example
///
/// ```no_run
/// use magic_detect::domain::services::{FileDetector, SignatureRegistry};
/// use magic_detect::infrastructure::LocalHeaderReader;
///
/// let detector = FileDetector::new(SignatureRegistry::standard(), LocalHeaderReader::new());
/// let detection = detector.detect("png", &["a.png", "b.txt"])?;
/// for path in detection.matches() {
///     println!("{}", path.display());
/// }
/// # Ok::<(), magic_detect::domain::services::DetectError>(())
/// ```
#[derive(Debug)]
pub struct FileDetector<R> {
    registry: SignatureRegistry,
    reader: R,
}

impl<R: HeaderReader> FileDetector<R> {
    /// Creates a detector over the given registry and reader
    pub fn new(registry: SignatureRegistry, reader: R) -> Self {
        Self { registry, reader }
    }

    /// Returns the signature registry
    pub fn registry(&self) -> &SignatureRegistry {
        &self.registry
    }

    /// Checks every path, in order, against the signature of `format`
    ///
    /// An unsupported format fails before any file is opened. Files that
    /// cannot be read are skipped and recorded. A panic anywhere in the pass
    /// is turned into [`DetectError::Internal`].
    pub fn detect<P: AsRef<Path>>(
        &self,
        format: &str,
        paths: &[P],
    ) -> Result<Detection, DetectError> {
        let signature = *self.registry.signature_for(format)?;

        panic::catch_unwind(AssertUnwindSafe(|| self.check_all(&signature, paths)))
            .unwrap_or_else(|payload| Err(DetectError::Internal(panic_message(&*payload))))
    }

    fn check_all<P: AsRef<Path>>(
        &self,
        signature: &FileSignature,
        paths: &[P],
    ) -> Result<Detection, DetectError> {
        let mut detection = Detection::new(signature.file_type());

        for path in paths {
            let path = path.as_ref();

            let header = match self.reader.read_header(path, signature.len()) {
                Ok(header) => header,
                Err(e) => {
                    tracing::warn!("Skipping {}: {}", path.display(), e);
                    detection.add_skipped(path.to_path_buf(), e.to_string());
                    continue;
                }
            };

            if header.len() != signature.len() {
                return Err(DetectError::Internal(format!(
                    "header of {} has {} bytes, expected {}",
                    path.display(),
                    header.len(),
                    signature.len()
                )));
            }

            if signature.matches_header(&header) {
                tracing::debug!("{} matches {}", path.display(), signature.file_type());
                detection.add_match(path.to_path_buf());
            } else {
                tracing::debug!("{} does not match {}", path.display(), signature.file_type());
                detection.add_mismatch();
            }
        }

        Ok(detection)
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::FileType;
    use crate::domain::repositories::HeaderReadError;
    use std::cell::Cell;
    use std::collections::HashMap;
    use std::path::PathBuf;

    /// In-memory reader that counts how often it is asked for a header
    #[derive(Default)]
    struct MemoryReader {
        files: HashMap<PathBuf, Vec<u8>>,
        reads: Cell<usize>,
    }

    impl MemoryReader {
        fn with(mut self, path: &str, data: &[u8]) -> Self {
            self.files.insert(PathBuf::from(path), data.to_vec());
            self
        }
    }

    impl HeaderReader for MemoryReader {
        fn read_header(&self, path: &Path, length: usize) -> Result<Vec<u8>, HeaderReadError> {
            self.reads.set(self.reads.get() + 1);
            let data = self.files.get(path).ok_or_else(|| HeaderReadError::Open {
                path: path.to_path_buf(),
                source: std::io::ErrorKind::NotFound.into(),
            })?;
            if (data.len() as u64) < length as u64 {
                return Err(HeaderReadError::TooSmall {
                    path: path.to_path_buf(),
                    size: data.len() as u64,
                    expected: length,
                });
            }
            Ok(data[..length].to_vec())
        }
    }

    struct PanickingReader;

    impl HeaderReader for PanickingReader {
        fn read_header(&self, _path: &Path, _length: usize) -> Result<Vec<u8>, HeaderReadError> {
            panic!("reader exploded");
        }
    }

    struct TruncatingReader;

    impl HeaderReader for TruncatingReader {
        fn read_header(&self, _path: &Path, length: usize) -> Result<Vec<u8>, HeaderReadError> {
            Ok(vec![0; length - 1])
        }
    }

    #[test]
    fn test_unsupported_format_reads_nothing() {
        let reader = MemoryReader::default().with("a", b"BM....");
        let detector = FileDetector::new(SignatureRegistry::standard(), &reader);

        let err = detector.detect("bmp", &["a"]).unwrap_err();

        assert!(matches!(err, DetectError::UnsupportedFormat(ref u) if u.0 == "bmp"));
        assert_eq!(err.to_string(), "unsupported format: bmp");
        assert_eq!(reader.reads.get(), 0);
    }

    #[test]
    fn test_keeps_input_order_and_duplicates() {
        let reader = MemoryReader::default()
            .with("b.gif", b"GIF89a trailing")
            .with("a.gif", b"GIF89a")
            .with("c.gif", b"GIF87a");
        let detector = FileDetector::new(SignatureRegistry::standard(), &reader);

        let detection = detector
            .detect("gif", &["b.gif", "c.gif", "a.gif", "b.gif"])
            .unwrap();

        assert_eq!(detection.file_type(), FileType::Gif);
        assert_eq!(
            detection.matches(),
            &[
                PathBuf::from("b.gif"),
                PathBuf::from("a.gif"),
                PathBuf::from("b.gif")
            ]
        );
        assert_eq!(detection.checked(), 4);
        assert_eq!(reader.reads.get(), 4);
    }

    #[test]
    fn test_skips_unreadable_files() {
        let reader = MemoryReader::default().with("tiny.pdf", b"%P");
        let detector = FileDetector::new(SignatureRegistry::standard(), &reader);

        let detection = detector.detect("pdf", &["missing.pdf", "tiny.pdf"]).unwrap();

        assert!(detection.matches().is_empty());
        assert_eq!(detection.checked(), 0);
        assert_eq!(detection.skipped().len(), 2);
        assert_eq!(detection.skipped()[0].path, PathBuf::from("missing.pdf"));
        assert!(detection.skipped()[1].reason.contains("smaller than expected"));
    }

    #[test]
    fn test_panic_becomes_internal_error() {
        let detector = FileDetector::new(SignatureRegistry::standard(), PanickingReader);

        let err = detector.detect("png", &["x.png"]).unwrap_err();

        match err {
            DetectError::Internal(msg) => assert!(msg.contains("reader exploded")),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_wrong_length_header_is_internal_error() {
        let detector = FileDetector::new(SignatureRegistry::standard(), TruncatingReader);

        let err = detector.detect("jpg", &["x.jpg"]).unwrap_err();

        assert!(matches!(err, DetectError::Internal(_)));
    }
}
