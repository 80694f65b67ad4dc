//! Detection report DTO

use crate::domain::entities::Detection;
use serde::Serialize;
use std::path::Path;

/// A file that could not be checked
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedEntry {
    pub path: String,
    pub reason: String,
}

/// Result of a detection run, ready to be shown to the user
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DetectionReport {
    /// Format token the files were checked against
    pub format: String,
    /// Files whose header matched, in input order
    pub valid: Vec<String>,
    /// Files that could not be read
    pub skipped: Vec<SkippedEntry>,
    /// Number of files whose header was compared
    pub checked: usize,
}

impl DetectionReport {
    /// Whether any file matched
    pub fn has_matches(&self) -> bool {
        !self.valid.is_empty()
    }
}

impl From<&Detection> for DetectionReport {
    fn from(detection: &Detection) -> Self {
        Self {
            format: detection.file_type().token().to_string(),
            valid: detection.matches().iter().map(|p| display(p)).collect(),
            skipped: detection
                .skipped()
                .iter()
                .map(|s| SkippedEntry {
                    path: display(&s.path),
                    reason: s.reason.clone(),
                })
                .collect(),
            checked: detection.checked(),
        }
    }
}

fn display(path: &Path) -> String {
    path.display().to_string()
}
