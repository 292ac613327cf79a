//! Setup errors

use multilog_core::PathError;
use std::io;
use std::path::PathBuf;

/// Failures while preparing the file sink.
#[derive(Debug, thiserror::Error)]
pub enum SetupError {
    #[error("fail to resolve logfile {}: {source}", path.display())]
    ResolvePath {
        path: PathBuf,
        #[source]
        source: PathError,
    },

    #[error("cannot create dir {} for logging: {source}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot open {} for logging: {source}", path.display())]
    OpenFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl SetupError {
    /// Path the failure is about
    pub fn path(&self) -> &std::path::Path {
        match self {
            SetupError::ResolvePath { path, .. }
            | SetupError::CreateDir { path, .. }
            | SetupError::OpenFile { path, .. } => path,
        }
    }
}
