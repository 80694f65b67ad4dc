//! Report rendering for CLI

use crate::application::dto::DetectionReport;
use crate::domain::services::SignatureRegistry;
use std::io::{self, Write};

/// Writes a report in human-readable form
///
/// Skipped files come first as `Error:` lines, followed by either the list of
/// valid files or a single "No valid files found." line.
pub fn write_report<W: Write>(out: &mut W, report: &DetectionReport) -> io::Result<()> {
    for skipped in &report.skipped {
        writeln!(out, "Error: {}", skipped.reason)?;
    }

    if report.has_matches() {
        writeln!(out, "Valid files detected:")?;
        for path in &report.valid {
            writeln!(out, "  {}", path)?;
        }
    } else {
        writeln!(out, "No valid files found.")?;
    }

    Ok(())
}

/// Writes a report as pretty-printed JSON
pub fn write_report_json<W: Write>(out: &mut W, report: &DetectionReport) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, report)?;
    writeln!(out)
}

/// Writes the table of supported formats
pub fn write_formats<W: Write>(out: &mut W, registry: &SignatureRegistry) -> io::Result<()> {
    writeln!(out, "{:<6} {:<14} SIGNATURE", "FORMAT", "NAME")?;
    for sig in registry.signatures() {
        writeln!(
            out,
            "{:<6} {:<14} {}",
            sig.file_type().token(),
            sig.file_type().name(),
            sig.header_hex()
        )?;
    }
    Ok(())
}
