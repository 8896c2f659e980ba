//! Error types for the voxel editor

use glam::IVec3;
use thiserror::Error;

/// Main error type for the editor
#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid grid dimension: {0} (must be positive)")]
    InvalidDimension(i32),

    #[error("Coordinate {coord} is outside a grid of size {size}")]
    OutOfRange { coord: IVec3, size: i32 },

    #[error("Scene format error on line {line}: {reason}")]
    Format { line: usize, reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("GPU error: {0}")]
    Gpu(String),

    #[error("Window error: {0}")]
    Window(String),

    #[error("Audio error: {0}")]
    Audio(String),
}

impl Error {
    /// Shorthand for a format error at a 1-based line number
    pub fn format(line: usize, reason: impl Into<String>) -> Self {
        Self::Format { line, reason: reason.into() }
    }
}
