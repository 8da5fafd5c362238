use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ResflatError>;

#[derive(Debug, Error)]
pub enum ResflatError {
    /// Bad command line input, including a project root that is not a directory.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("required source directory not found: {}", path.display())]
    MissingSourceDirectory { path: PathBuf },

    #[error("required source file not found: {}", path.display())]
    MissingSourceFile { path: PathBuf },

    /// Output directories may only hold plain files and symlinks.
    #[error("refusing to clean {}: not a plain file", path.display())]
    UnsupportedEntryKind { path: PathBuf },

    #[error("cannot flatten {}: name keeps uppercase letters after lower-casing", path.display())]
    UnsupportedFileName { path: PathBuf },

    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to copy {} to {}: {source}", from.display(), to.display())]
    Copy {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid config file {}: {source}", path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error(
        "{} and {} both flatten to {}",
        previous.display(),
        current.display(),
        target.display()
    )]
    NameCollision {
        target: PathBuf,
        previous: PathBuf,
        current: PathBuf,
    },
}

impl ResflatError {
    pub fn io(path: impl AsRef<Path>, source: io::Error) -> Self {
        ResflatError::Io { path: path.as_ref().to_path_buf(), source }
    }

    /// Process exit status for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            ResflatError::InvalidArgument(_) => 2,
            _ => 1,
        }
    }
}
