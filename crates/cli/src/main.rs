use clap::Parser;
use std::io::{self, Write};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;
use tree_tally_cli::args::Args;
use tree_tally_cli::error::AppError;
use tree_tally_cli::options::OutputFormat;
use tree_tally_cli::presentation;
use tree_tally_engine::{Narrator, ScanConfig};

fn main() -> ExitCode {
    // Diagnostics go to stderr; stdout carries narration and the report.
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let config = match ScanConfig::try_from(&args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration Error: {e}");
            return ExitCode::FAILURE;
        }
    };
    log::debug!("scanning {:?}", config);

    // Keep stdout parseable when it carries JSON.
    let narration: Box<dyn Write> = match args.format {
        OutputFormat::Text => Box::new(io::stdout()),
        OutputFormat::Json => Box::new(io::stderr()),
    };
    let mut narrator = Narrator::new(narration);
    let report = match tree_tally_engine::analyze(&config, &mut narrator) {
        Ok(report) => report,
        Err(e) => {
            // Fail fast: no summary for a partial scan.
            if !e.is_broken_pipe() {
                // stdout may be closed.
                let _ = writeln!(io::stdout(), "Error: {e}");
            }
            return ExitCode::FAILURE;
        }
    };

    let written = presentation::write_skipped(&mut io::stderr(), &report)
        .and_then(|()| presentation::write_report(&mut io::stdout().lock(), &report, args.format));
    match written {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => application_error(&e),
    }
}

fn application_error(e: &AppError) -> ExitCode {
    if e.is_broken_pipe() {
        log::debug!("output closed early: {e}");
    } else {
        let _ = writeln!(io::stderr(), "Application Error: {e}");
    }
    ExitCode::FAILURE
}
