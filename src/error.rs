use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LogtallyError {
    #[error("invalid arguments")]
    Usage(#[source] clap::Error),

    #[error("Could not open file: {}", path.display())]
    FileAccess {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl LogtallyError {
    pub fn exit_code(&self) -> u8 {
        match self {
            LogtallyError::Usage(_) => 1,
            LogtallyError::FileAccess { .. } => 2,
        }
    }
}
