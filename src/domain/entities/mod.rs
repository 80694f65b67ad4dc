//! Domain entities
//!
//! Core business objects that represent the fundamental concepts
//! in the header detection domain.

mod detection;
mod file_signature;

pub use detection::{Detection, SkippedFile};
pub use file_signature::{FileSignature, FileType, UnsupportedFormat};
