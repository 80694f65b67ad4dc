//! Application layer
//!
//! Use cases that orchestrate domain logic.

mod detect_files;
pub mod dto;

pub use detect_files::DetectFilesUseCase;
