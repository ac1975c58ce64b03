//! Error taxonomy for the rewrite pipeline

use std::io;
use std::path::PathBuf;
use std::string::FromUtf8Error;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RewriteError {
    /// Input missing, unreadable, or a directory
    #[error("cannot read input {}", .path.display())]
    InputAccess {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Input bytes are not valid UTF-8
    #[error("input {} is not valid UTF-8", .path.display())]
    Encoding {
        path: PathBuf,
        #[source]
        source: FromUtf8Error,
    },

    /// Output could not be created, written or flushed
    #[error("cannot write output {}", .path.display())]
    OutputAccess {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl RewriteError {
    pub fn code(&self) -> &'static str {
        match self {
            RewriteError::InputAccess { .. } => "INPUT_ACCESS",
            RewriteError::Encoding { .. } => "ENCODING",
            RewriteError::OutputAccess { .. } => "OUTPUT_ACCESS",
        }
    }

    pub fn path(&self) -> &PathBuf {
        match self {
            RewriteError::InputAccess { path, .. }
            | RewriteError::Encoding { path, .. }
            | RewriteError::OutputAccess { path, .. } => path,
        }
    }
}
