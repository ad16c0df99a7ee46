use std::fmt;
use std::path::PathBuf;

use crate::error::EngineError;
use crate::format::group_thousands;
use crate::stats::ScanResult;

const RULE: &str = "-------------------------------------";

/// Totals of a finished scan together with the root they describe.
///
/// `Display` renders the human-readable summary block.
#[derive(Debug)]
pub struct ScanReport {
    pub root: PathBuf,
    pub result: ScanResult,
    /// Entries skipped under `ErrorPolicy::Skip`; always empty when failing fast.
    pub errors: Vec<EngineError>,
}

impl fmt::Display for ScanReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let r = &self.result;
        writeln!(f, "{RULE}")?;
        writeln!(f, "Scanned Directory: {}", self.root.display())?;
        writeln!(f)?;
        writeln!(f, "Total Number of Lines: {} lines", group_thousands(r.total_lines))?;
        writeln!(f, "Total Number of Files: {} files", group_thousands(r.total_files))?;
        writeln!(f, "Total Number of Folders: {} folders", group_thousands(r.total_folders))?;
        writeln!(
            f,
            "Total Directory Size: {} bytes ({} MB)",
            group_thousands(r.total_bytes),
            group_thousands(r.mebibytes())
        )?;
        writeln!(f, "{RULE}")
    }
}
