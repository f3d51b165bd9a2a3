use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FmaxError {
    #[error("Root path is empty")]
    EmptyRootPath,

    #[error("Invalid search pattern '{pattern}': {reason}")]
    InvalidPattern { pattern: String, reason: String },

    #[error("Path does not exist: {0}")]
    PathNotFound(PathBuf),

    #[error("Path is not a directory: {0}")]
    NotADirectory(PathBuf),

    #[error("Walk error: {0}")]
    Walk(#[from] jwalk::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Collection contains no elements")]
    EmptyCollection,
}

pub type Result<T> = std::result::Result<T, FmaxError>;
