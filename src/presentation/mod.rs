//! Presentation layer
//!
//! Command-line parsing and rendering of detection reports.

pub mod cli;
