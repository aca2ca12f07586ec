use std::{io, path::PathBuf};
use thiserror::Error;

/// Everything that can stop an icon batch.
#[derive(Debug, Error)]
pub enum IconError {
    #[error("icon size must be between 1 and {max} (got {0})", max = crate::render::MAX_SIZE)]
    InvalidSize(u32),
    #[error("unrecognised color specification {0:?}")]
    InvalidColor(String),
    #[error("config {path:?}: {message}")]
    Config { path: PathBuf, message: String },
    #[error("create output dir {path:?}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("write {path:?}")]
    Write {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

impl IconError {
    /// Invalid-input errors come from bad sizes, colors or config; the rest are I/O.
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidSize(_) | Self::InvalidColor(_) | Self::Config { .. })
    }
}

pub type Result<T> = std::result::Result<T, IconError>;
