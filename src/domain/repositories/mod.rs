//! Repository traits (interfaces)
//!
//! These traits define the contracts for external dependencies.
//! The detector only sees the filesystem through them.

mod header_reader;

pub use header_reader::{HeaderReadError, HeaderReader};
