//! Domain services
//!
//! Core business logic services that operate on domain entities.

mod detector;
mod signature_registry;

pub use detector::{DetectError, FileDetector};
pub use signature_registry::SignatureRegistry;
