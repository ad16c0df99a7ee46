use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Engine(#[from] tree_tally_engine::EngineError),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl AppError {
    /// Stdout was closed before the output was written.
    pub fn is_broken_pipe(&self) -> bool {
        match self {
            Self::Engine(e) => e.is_broken_pipe(),
            Self::Io(e) => e.kind() == io::ErrorKind::BrokenPipe,
            Self::Json(e) => e.io_error_kind() == Some(io::ErrorKind::BrokenPipe),
        }
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
