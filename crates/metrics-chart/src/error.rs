// File: crates/metrics-chart/src/error.rs
// Summary: Error type shared by chart construction and rendering.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("series '{0}' has no points")]
    Empty(String),
    #[error("series '{label}' has {got} values, expected {expected}")]
    LengthMismatch { label: String, expected: usize, got: usize },
    #[error("x value {0} appears more than once")]
    DuplicateX(f64),
    #[error("series '{label}' has a non-finite value at index {index}")]
    NonFinite { label: String, index: usize },
    #[error("failed to create {0}x{1} raster surface")]
    Surface(i32, i32),
    #[error("encode PNG failed: {0}")]
    Encode(#[from] png::EncodingError),
    #[error("reading surface pixels failed")]
    ReadPixels,
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ChartError>;
