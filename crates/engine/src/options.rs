use serde::{Deserialize, Serialize};

/// What a pass does when an entry cannot be accessed or read.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ErrorPolicy {
    /// Abort the whole scan on the first failure.
    #[default]
    FailFast,
    /// Log the failure, remember it and keep walking.
    Skip,
}
