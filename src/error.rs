use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while starting the program or patching the live document.
#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("config file not found: {}", .0.display())]
    ConfigNotFound(PathBuf),

    #[error("invalid config file {}: {source}", path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("mount point #{0} not found in document")]
    MountPointNotFound(String),

    #[error("mount point #{0} already holds a view")]
    AlreadyMounted(String),

    #[error("patch target {0:?} does not exist in the document")]
    PatchTargetMissing(Vec<usize>),
}

pub type Result<T> = std::result::Result<T, Error>;
