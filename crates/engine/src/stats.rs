use crate::error::EngineError;
use serde::{Deserialize, Serialize};

const BYTES_PER_MEBIBYTE: u64 = 1024 * 1024;

/// Aggregate counters produced by one complete scan.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanResult {
    pub total_lines: usize,
    pub total_files: usize,
    pub total_folders: usize,
    pub total_bytes: u64,
}

impl ScanResult {
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Whole mebibytes, rounded down.
    pub const fn mebibytes(&self) -> u64 {
        self.total_bytes / BYTES_PER_MEBIBYTE
    }

    /// Files and folders together: every entry visited, root included.
    pub const fn total_entries(&self) -> usize {
        self.total_files + self.total_folders
    }
}

/// File and folder counts from the entry pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryCounts {
    pub files: usize,
    pub folders: usize,
}

/// Outcome of a single pass: the folded total and any entries that were skipped.
///
/// `errors` stays empty unless the scan runs with [`crate::options::ErrorPolicy::Skip`].
#[derive(Debug, Default)]
pub struct Tally<T> {
    pub total: T,
    pub errors: Vec<EngineError>,
}

impl<T> Tally<T> {
    pub const fn new(total: T, errors: Vec<EngineError>) -> Self {
        Self { total, errors }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reset_zeroes_every_counter() {
        let mut result = ScanResult {
            total_lines: 7,
            total_files: 2,
            total_folders: 2,
            total_bytes: 60,
        };
        result.reset();
        assert_eq!(result, ScanResult::default());
    }

    #[test]
    fn mebibytes_round_down() {
        let mut result = ScanResult {
            total_bytes: 1_048_575,
            ..ScanResult::default()
        };
        assert_eq!(result.mebibytes(), 0);
        result.total_bytes = 3 * 1_048_576 + 17;
        assert_eq!(result.mebibytes(), 3);
    }
}
