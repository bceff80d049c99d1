use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TreeError {
    #[error("child slot {index} out of range (node has {len} slots)")]
    OutOfRange { index: usize, len: usize },

    #[error("tree is empty")]
    EmptyTree,
}

pub type TreeResult<T> = Result<T, TreeError>;

/// Errors raised while loading render settings.
#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("parse {path}: {message}")]
    Parse { path: PathBuf, message: String },

    #[error("environment override: {0}")]
    Env(String),
}
