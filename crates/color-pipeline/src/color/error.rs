//! Error type for parsing storage colors from hex strings.

use std::num::ParseIntError;

use thiserror::Error;

/// Error type for parsing hex color strings.
///
/// Returned when parsing a hex color string fails, either due to
/// invalid length or invalid hexadecimal characters.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseColorError {
    /// Hex string has a length the target pixel format does not accept
    #[error("invalid hex color length {len} (expected one of {expected})")]
    InvalidLength {
        /// Number of hex digits found after stripping '#'
        len: usize,
        /// Human-readable list of accepted lengths
        expected: &'static str,
    },
    /// Invalid hexadecimal character encountered
    #[error("invalid hex character: {0}")]
    InvalidHex(#[from] ParseIntError),
}
