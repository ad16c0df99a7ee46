use std::path::PathBuf;

use crate::config::ScanConfig;
use crate::error::Result;
use crate::progress::ProgressSink;
use crate::stats::ScanResult;

/// Holds a configuration and the totals of the last scan run with it.
///
/// At most one scan is in flight per `Scanner`; `analyze` takes `&mut self`.
#[derive(Debug, Default)]
pub struct Scanner {
    config: ScanConfig,
    result: ScanResult,
}

impl Scanner {
    pub fn new(config: ScanConfig) -> Self {
        Self {
            config,
            result: ScanResult::default(),
        }
    }

    pub const fn config(&self) -> &ScanConfig {
        &self.config
    }

    /// Totals of the last successful scan; zero before the first one.
    pub const fn result(&self) -> &ScanResult {
        &self.result
    }

    pub fn set_root(&mut self, root: impl Into<PathBuf>) {
        self.config.root = root.into();
    }

    pub fn set_verbose(&mut self, verbose: bool) {
        self.config.verbose = verbose;
    }

    /// Zero the counters and restore the default configuration.
    pub fn reset(&mut self) {
        self.config = ScanConfig::default();
        self.result.reset();
    }

    /// Run all three passes and keep the totals.
    ///
    /// Counters start from zero on every call. On error the previous totals are
    /// left untouched.
    ///
    /// # Errors
    /// See [`crate::analyze`].
    pub fn analyze(&mut self, sink: &mut dyn ProgressSink) -> Result<crate::report::ScanReport> {
        let report = crate::analyze(&self.config, sink)?;
        self.result = report.result;
        Ok(report)
    }
}
