//! Error type for slice pipelines.

use thiserror::Error;

/// Errors from the slice helpers.
///
/// The per-pixel units never fail; only whole-buffer operations that pair
/// two inputs can.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PipelineError {
    /// The two buffers being compared hold different numbers of pixels
    #[error("pixel count mismatch: left has {left}, right has {right}")]
    LengthMismatch {
        /// Pixels in the first buffer
        left: usize,
        /// Pixels in the second buffer
        right: usize,
    },
}
