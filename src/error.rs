// src/error.rs

use thiserror::Error;

#[derive(Debug, Error)]
pub enum KaosError {
    #[error("a regular polygon needs at least 3 edges, got {0}")]
    InvalidEdgeCount(usize),

    #[error("polygon radius must be positive and finite, got {0}")]
    InvalidRadius(f64),

    #[error("degenerate {name} rectangle: width {width}, height {height}")]
    DegenerateRectangle {
        name: &'static str,
        width: f64,
        height: f64,
    },

    #[error("image size must be non-zero, got {width}x{height}")]
    InvalidImageSize { width: u32, height: u32 },

    #[error("pixel buffer holds {actual} bytes, expected {expected}")]
    BufferSizeMismatch { expected: usize, actual: usize },

    #[error("image encoding error: {0}")]
    Encode(#[from] image::ImageError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, KaosError>;
