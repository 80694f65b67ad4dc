//! Detect options DTO

use std::path::PathBuf;

/// Format checked when none is given
pub const DEFAULT_FORMAT: &str = "png";

/// Options for a detection run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetectOptions {
    /// Format token to check against ("png", "jpg", "gif", "pdf")
    pub format: String,
    /// Candidate files, checked in this order
    pub paths: Vec<PathBuf>,
}

impl DetectOptions {
    /// Creates options for the given files with the default format
    pub fn new(paths: Vec<PathBuf>) -> Self {
        Self {
            format: DEFAULT_FORMAT.to_string(),
            paths,
        }
    }

    /// Sets the format token
    pub fn with_format(mut self, format: impl Into<String>) -> Self {
        self.format = format.into();
        self
    }
}
