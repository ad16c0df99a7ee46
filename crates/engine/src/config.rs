use crate::options::ErrorPolicy;
use derive_builder::Builder;
use std::path::PathBuf;

/// Root scanned when no path is given.
pub const DEFAULT_ROOT: &str = "toBeCounted";

#[derive(Debug, Clone, PartialEq, Eq, Builder)]
#[builder(setter(into))]
pub struct ScanConfig {
    #[builder(default = "PathBuf::from(DEFAULT_ROOT)")]
    pub root: PathBuf,
    /// Narrate every visited entry.
    #[builder(default)]
    pub verbose: bool,
    /// Resolve symbolic links instead of counting them as plain entries.
    #[builder(default)]
    pub follow_links: bool,
    #[builder(default)]
    pub on_error: ErrorPolicy,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from(DEFAULT_ROOT),
            verbose: false,
            follow_links: false,
            on_error: ErrorPolicy::FailFast,
        }
    }
}
