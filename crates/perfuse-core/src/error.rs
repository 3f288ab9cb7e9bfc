use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PerfuseError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to read volume {path}: {source}")]
    VolumeRead {
        path: PathBuf,
        source: nifti::NiftiError,
    },

    #[error("Shape mismatch: {left_name} is {left:?} but {right_name} is {right:?}")]
    ShapeMismatch {
        left_name: &'static str,
        left: Vec<usize>,
        right_name: &'static str,
        right: Vec<usize>,
    },

    #[error("Failed to write volume {path}: {source}")]
    VolumeWrite {
        path: PathBuf,
        source: nifti::NiftiError,
    },

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
}

pub type Result<T> = std::result::Result<T, PerfuseError>;
