//! # tree_tally engine
//!
//! Walks a directory tree and aggregates three metric families: lines in
//! every file, the number of files and folders, and total byte size.
//!
//! - [`scan`]: the three independent traversal passes
//! - [`analyze`]: runs all of them and builds a [`ScanReport`]
//! - [`scanner::Scanner`]: keeps a configuration and the last totals between runs

use std::collections::HashSet;

pub mod config;
pub mod error;
pub mod filesystem;
pub mod format;
pub mod options;
pub mod processor;
pub mod progress;
pub mod report;
pub mod scan;
pub mod scanner;
pub mod stats;

pub use crate::config::{DEFAULT_ROOT, ScanConfig, ScanConfigBuilder};
pub use crate::error::{EngineError, Result};
pub use crate::options::ErrorPolicy;
pub use crate::progress::{Narrator, ProgressSink, Silent};
pub use crate::report::ScanReport;
pub use crate::stats::{EntryCounts, ScanResult, Tally};

/// Run the line, entry and size passes over `config.root`, one after another.
///
/// Narration goes to `sink` only when `config.verbose` is set.
///
/// # Errors
///
/// With [`ErrorPolicy::FailFast`] the first access or read error aborts the
/// scan and no report is produced. With [`ErrorPolicy::Skip`] those errors are
/// collected in [`ScanReport::errors`], each offending path listed once.
pub fn analyze(config: &ScanConfig, sink: &mut dyn ProgressSink) -> Result<ScanReport> {
    let mut silent = Silent;
    let sink: &mut dyn ProgressSink = if config.verbose { sink } else { &mut silent };
    let root = config.root.as_path();

    let lines = scan::count_lines(root, config, sink)?;
    let entries = scan::count_files_and_folders(root, config, sink)?;
    let bytes = scan::count_data_size(root, config, sink)?;

    let result = ScanResult {
        total_lines: lines.total,
        total_files: entries.total.files,
        total_folders: entries.total.folders,
        total_bytes: bytes.total,
    };

    // The same broken entry shows up once per pass.
    let mut seen = HashSet::new();
    let errors: Vec<EngineError> = lines
        .errors
        .into_iter()
        .chain(entries.errors)
        .chain(bytes.errors)
        .filter(|err| seen.insert(err.to_string()))
        .collect();

    log::debug!(
        "scanned {} entries under {}: {} lines, {} bytes",
        result.total_entries(),
        root.display(),
        result.total_lines,
        result.total_bytes
    );
    if !errors.is_empty() {
        log::warn!("{} entries could not be scanned under {}", errors.len(), root.display());
    }

    Ok(ScanReport {
        root: config.root.clone(),
        result,
        errors,
    })
}
