use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::config::ScanConfigBuilderError;

#[derive(Debug, Error)]
pub enum EngineError {
    /// The entry could not be listed or stat'ed.
    #[error("There was an error accessing the given file or folder at {path}: {}", access_detail(.source))]
    Access {
        path: PathBuf,
        #[source]
        source: ignore::Error,
    },

    /// The file could not be opened or read while counting its lines.
    #[error("There was an error counting the number of lines in the file found here {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write progress: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl EngineError {
    /// Builds an access error, preferring the path recorded inside the walk error.
    pub(crate) fn access(fallback: &Path, source: ignore::Error) -> Self {
        let path = walk_error_path(&source).unwrap_or_else(|| fallback.to_path_buf());
        Self::Access { path, source }
    }

    /// The offending entry, for access and read failures.
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Access { path, .. } | Self::Read { path, .. } => Some(path),
            Self::Io(_) | Self::Config(_) => None,
        }
    }

    /// Only per-entry failures may be skipped; anything else aborts the scan.
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Access { .. } | Self::Read { .. })
    }

    /// The progress writer's reader went away, e.g. `tree_tally | head`.
    pub fn is_broken_pipe(&self) -> bool {
        matches!(self, Self::Io(e) if e.kind() == std::io::ErrorKind::BrokenPipe)
    }
}

fn walk_error_path(err: &ignore::Error) -> Option<PathBuf> {
    match err {
        ignore::Error::WithPath { path, .. } => Some(path.clone()),
        ignore::Error::WithDepth { err, .. } | ignore::Error::WithLineNumber { err, .. } => {
            walk_error_path(err)
        }
        ignore::Error::Loop { child, .. } => Some(child.clone()),
        _ => None,
    }
}

/// The innermost cause of a walk error, without the paths the wrappers repeat.
fn access_detail(err: &ignore::Error) -> String {
    match err {
        ignore::Error::WithPath { err, .. }
        | ignore::Error::WithDepth { err, .. }
        | ignore::Error::WithLineNumber { err, .. } => access_detail(err),
        // Walker io errors wrap the walker's own error, which names the path again.
        ignore::Error::Io(io_err) => match io_err.get_ref().and_then(|inner| std::error::Error::source(inner)) {
            Some(cause) => cause.to_string(),
            None => io_err.to_string(),
        },
        other => other.to_string(),
    }
}

impl From<ScanConfigBuilderError> for EngineError {
    fn from(err: ScanConfigBuilderError) -> Self {
        Self::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn access_error_uses_path_from_walk_error() {
        let inner = ignore::Error::Io(io::Error::from(io::ErrorKind::NotFound));
        let source = ignore::Error::WithDepth {
            depth: 2,
            err: Box::new(ignore::Error::WithPath {
                path: PathBuf::from("root/sub/gone"),
                err: Box::new(inner),
            }),
        };

        let err = EngineError::access(Path::new("root"), source);
        assert_eq!(err.path(), Some(Path::new("root/sub/gone")));
        assert!(err.is_recoverable());
        assert!(err.to_string().contains("root/sub/gone"));
    }

    #[test]
    fn access_error_names_the_path_once() {
        let source = ignore::Error::WithDepth {
            depth: 0,
            err: Box::new(ignore::Error::WithPath {
                path: PathBuf::from("toBeCounted"),
                err: Box::new(ignore::Error::Io(io::Error::other("no such entry"))),
            }),
        };

        let err = EngineError::access(Path::new("toBeCounted"), source);
        assert_eq!(
            err.to_string(),
            "There was an error accessing the given file or folder at toBeCounted: no such entry"
        );
    }

    #[test]
    fn access_error_falls_back_to_given_path() {
        let source = ignore::Error::Io(io::Error::other("boom"));
        let err = EngineError::access(Path::new("fallback"), source);
        assert_eq!(err.path(), Some(Path::new("fallback")));
    }

    #[test]
    fn io_and_config_errors_are_not_recoverable() {
        let io_err = EngineError::from(io::Error::other("pipe closed"));
        assert!(!io_err.is_recoverable());
        assert!(io_err.path().is_none());
        assert!(!EngineError::Config("bad".into()).is_recoverable());
    }

    #[test]
    fn broken_pipe_is_only_detected_on_progress_writes() {
        assert!(EngineError::from(io::Error::from(io::ErrorKind::BrokenPipe)).is_broken_pipe());
        assert!(!EngineError::from(io::Error::other("disk full")).is_broken_pipe());

        let read = EngineError::Read {
            path: PathBuf::from("a.txt"),
            source: io::Error::from(io::ErrorKind::BrokenPipe),
        };
        assert!(!read.is_broken_pipe());
    }
}
