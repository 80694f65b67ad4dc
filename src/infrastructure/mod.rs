//! Infrastructure layer
//!
//! Concrete implementations of the domain repositories.
//! This layer is the only one that talks to the filesystem.

mod local_header_reader;

pub use local_header_reader::LocalHeaderReader;
