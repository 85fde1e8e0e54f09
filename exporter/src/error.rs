//! Failure kinds for an export. Every variant is fatal.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("configuration file not found: {}", path.display())]
    ConfigMissing { path: PathBuf },

    #[error("configuration key {key} is missing or empty in {}", path.display())]
    ConfigKeyMissing { key: &'static str, path: PathBuf },

    #[error("read configuration {}", path.display())]
    ConfigUnreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("compiled resume ({}) not found", path.display())]
    SourceMissing { path: PathBuf },

    #[error("base directory does not exist: {}", path.display())]
    BaseDirMissing { path: PathBuf },

    #[error("create directory {}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("copy {} to {}", from.display(), to.display())]
    Copy {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("console I/O")]
    Console(#[source] io::Error),
}

impl ExportError {
    /// Follow-up advice printed under the error, when there is any.
    pub fn hint(&self) -> Option<String> {
        match self {
            ExportError::ConfigMissing { path } => Some(format!(
                "Create {} with BASE_DIR, FIRST_NAME and LAST_NAME.",
                path.display()
            )),
            ExportError::SourceMissing { .. } => {
                Some("Please compile your resume first.".to_string())
            }
            ExportError::BaseDirMissing { .. } => {
                Some("Please check the path and ensure it exists.".to_string())
            }
            _ => None,
        }
    }
}
