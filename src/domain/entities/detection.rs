//! Detection entity
//!
//! The outcome of checking one batch of files against one signature.

use super::FileType;
use std::path::PathBuf;

/// A candidate file that could not be checked, and why
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedFile {
    /// Path as supplied by the caller
    pub path: PathBuf,
    /// Human-readable reason the header could not be read
    pub reason: String,
}

/// Result of a detection run over a batch of files
#[derive(Debug, Clone)]
pub struct Detection {
    file_type: FileType,
    matches: Vec<PathBuf>,
    skipped: Vec<SkippedFile>,
    checked: usize,
}

impl Detection {
    /// Creates an empty detection for the given format
    pub fn new(file_type: FileType) -> Self {
        Self {
            file_type,
            matches: Vec::new(),
            skipped: Vec::new(),
            checked: 0,
        }
    }

    /// Records a file whose header matched
    pub fn add_match(&mut self, path: PathBuf) {
        self.checked += 1;
        self.matches.push(path);
    }

    /// Records a file whose header was read but did not match
    pub fn add_mismatch(&mut self) {
        self.checked += 1;
    }

    /// Records a file that could not be read
    pub fn add_skipped(&mut self, path: PathBuf, reason: String) {
        self.skipped.push(SkippedFile { path, reason });
    }

    /// Format the batch was checked against
    pub fn file_type(&self) -> FileType {
        self.file_type
    }

    /// Matching paths, in input order
    pub fn matches(&self) -> &[PathBuf] {
        &self.matches
    }

    /// Files that were skipped, in input order
    pub fn skipped(&self) -> &[SkippedFile] {
        &self.skipped
    }

    /// Number of files whose header was actually compared
    pub fn checked(&self) -> usize {
        self.checked
    }

    /// Consumes the detection, returning the matching paths
    pub fn into_matches(self) -> Vec<PathBuf> {
        self.matches
    }
}
