use color_pipeline::{ParseColorError, PipelineError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DeltaeError {
    #[error("Invalid color: {0}")]
    Color(#[from] ParseColorError),

    #[error("Image size mismatch: {left_width}x{left_height} vs {right_width}x{right_height}")]
    SizeMismatch {
        left_width: u32,
        left_height: u32,
        right_width: u32,
        right_height: u32,
    },

    #[error("Unsupported PNG layout: {0}")]
    UnsupportedPng(String),

    #[error("PNG decode error: {0}")]
    PngDecode(#[from] png::DecodingError),

    #[error("PNG encode error: {0}")]
    PngEncode(#[from] png::EncodingError),

    #[error("Pipeline error: {0}")]
    Pipeline(#[from] PipelineError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
