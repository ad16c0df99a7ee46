//! The three traversal passes.
//!
//! Each pass walks the whole tree under `path` on its own and folds one
//! metric family into a [`Tally`]. They share nothing but the walker, so
//! running them in any order (or twice) gives the same totals.

use std::path::Path;

use crate::config::ScanConfig;
use crate::error::Result;
use crate::filesystem::{EntryKind, walk_entries};
use crate::processor::count_file_lines;
use crate::progress::ProgressSink;
use crate::stats::{EntryCounts, Tally};

/// Sum the line counts of every regular file under `path`.
///
/// # Errors
/// Fails on the first unreadable entry unless the config skips errors.
pub fn count_lines(
    path: &Path,
    config: &ScanConfig,
    sink: &mut dyn ProgressSink,
) -> Result<Tally<usize>> {
    let mut total = 0;
    let mut errors = Vec::new();
    walk_entries(path, config, &mut errors, |entry| {
        sink.counting_lines(entry.path())?;
        if entry.kind() == EntryKind::RegularFile {
            total += count_file_lines(entry.path())?;
        }
        Ok(())
    })?;
    log::debug!("line pass over {}: {total} lines", path.display());
    Ok(Tally::new(total, errors))
}

/// Count every directory (root included) as a folder and everything else as a file.
///
/// # Errors
/// Fails on the first inaccessible entry unless the config skips errors.
pub fn count_files_and_folders(
    path: &Path,
    config: &ScanConfig,
    sink: &mut dyn ProgressSink,
) -> Result<Tally<EntryCounts>> {
    let mut counts = EntryCounts::default();
    let mut errors = Vec::new();
    walk_entries(path, config, &mut errors, |entry| {
        if entry.is_dir() {
            sink.counted_folder(entry.path())?;
            counts.folders += 1;
        } else {
            sink.counted_file(entry.path())?;
            counts.files += 1;
        }
        Ok(())
    })?;
    log::debug!(
        "entry pass over {}: {} files, {} folders",
        path.display(),
        counts.files,
        counts.folders
    );
    Ok(Tally::new(counts, errors))
}

/// Sum the metadata length of every file under `path`; directories add nothing.
///
/// # Errors
/// Fails on the first entry that cannot be stat'ed unless the config skips errors.
pub fn count_data_size(
    path: &Path,
    config: &ScanConfig,
    sink: &mut dyn ProgressSink,
) -> Result<Tally<u64>> {
    let mut total = 0u64;
    let mut errors = Vec::new();
    walk_entries(path, config, &mut errors, |entry| {
        if entry.is_dir() {
            return Ok(());
        }
        let len = entry.byte_len()?;
        sink.counted_bytes(entry.path(), len)?;
        total += len;
        Ok(())
    })?;
    log::debug!("size pass over {}: {total} bytes", path.display());
    Ok(Tally::new(total, errors))
}
