//! Data Transfer Objects

mod detect_options;
mod detection_report;

pub use detect_options::{DEFAULT_FORMAT, DetectOptions};
pub use detection_report::{DetectionReport, SkippedEntry};
