use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use std::io::{self, Write};

use magic_detect::SignatureRegistry;
use magic_detect::application::DetectFilesUseCase;
use magic_detect::presentation::cli::{self, Cli};

fn main() -> Result<()> {
    let args = Cli::parse();

    setup_logging(args.log_level());

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if args.list_formats {
        cli::write_formats(&mut out, &SignatureRegistry::standard())?;
        return Ok(());
    }

    if args.paths.is_empty() {
        eprintln!("Please provide at least one file to check.");
        eprintln!("{}", Cli::command().render_usage());
        std::process::exit(1);
    }

    let options = args.detect_options();
    let report = DetectFilesUseCase::with_local_files()
        .execute(&options)
        .with_context(|| format!("detection failed for format '{}'", options.format))?;

    if args.json {
        cli::write_report_json(&mut out, &report)?;
    } else {
        cli::write_report(&mut out, &report)?;
    }
    out.flush()?;

    Ok(())
}

/// Logs go to stderr so stdout only carries the report. `RUST_LOG` wins over
/// the verbosity flags when set.
fn setup_logging(default_level: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}
