//! Detect files use case
//!
//! Runs a detection for a set of options and turns the outcome into a report.

use crate::application::dto::{DetectOptions, DetectionReport};
use crate::domain::repositories::HeaderReader;
use crate::domain::services::{DetectError, FileDetector, SignatureRegistry};
use crate::infrastructure::LocalHeaderReader;
use std::time::Instant;

/// Detect files use case
pub struct DetectFilesUseCase<R: HeaderReader> {
    detector: FileDetector<R>,
}

impl DetectFilesUseCase<LocalHeaderReader> {
    /// Creates the use case over the local filesystem
    pub fn with_local_files() -> Self {
        Self::new(FileDetector::new(
            SignatureRegistry::standard(),
            LocalHeaderReader::new(),
        ))
    }
}

impl<R: HeaderReader> DetectFilesUseCase<R> {
    /// Creates a new detect files use case
    pub fn new(detector: FileDetector<R>) -> Self {
        Self { detector }
    }

    /// Executes the detection
    pub fn execute(&self, options: &DetectOptions) -> Result<DetectionReport, DetectError> {
        let start_time = Instant::now();

        tracing::info!(
            "Checking {} file(s) for {} headers",
            options.paths.len(),
            options.format
        );

        let detection = self.detector.detect(&options.format, options.paths.as_slice())?;
        let report = DetectionReport::from(&detection);

        tracing::info!(
            "Detection complete: {} valid, {} skipped, {} checked in {:.2?}",
            report.valid.len(),
            report.skipped.len(),
            report.checked,
            start_time.elapsed()
        );

        Ok(report)
    }
}
