//! Decode and encode units
//!
//! A decode unit turns a storage pixel into a working color; an encode unit
//! does the reverse. Each unit is a zero-sized value implementing the
//! contract once per (storage, working) pair it supports, so a pipeline is
//! assembled by choosing types, not by branching:
//!
//! ```
//! use color_pipeline::{Decode, Encode, IdentityCodec, LinearRgba, Rgba32, SrgbCodec};
//!
//! let pixel = Rgba32::new(188, 188, 188, 128);
//!
//! let linear: LinearRgba = SrgbCodec.decode(pixel);
//! assert!((linear.r - 0.503).abs() < 0.002);
//!
//! let raw: LinearRgba = IdentityCodec.decode(pixel);
//! assert!((raw.r - 188.0 / 255.0).abs() < 1e-6);
//!
//! let back: Rgba32 = SrgbCodec.encode(linear);
//! assert_eq!(back, pixel);
//! ```

mod identity;
mod oklab;
mod srgb;

pub use identity::IdentityCodec;
pub use oklab::OklabCodec;
pub use srgb::SrgbCodec;

use crate::color::lut;

/// Storage pixel to working color.
pub trait Decode<S, W> {
    /// Decode one pixel.
    fn decode(&self, pixel: S) -> W;
}

/// Working color to storage pixel.
///
/// Implementations clamp out-of-range channels; encoding never fails.
pub trait Encode<W, S> {
    /// Encode one color.
    fn encode(&self, color: W) -> S;
}

/// Gamma-expand one sRGB channel to linear light.
#[inline]
pub(crate) fn srgb_to_linear(byte: u8) -> f32 {
    lut::expand_f32(byte)
}

/// Gamma-compress one linear channel, clamping to `0.0..=1.0`.
#[inline]
pub(crate) fn linear_to_srgb(value: f32) -> u8 {
    lut::compress_f32(value)
}

/// Scale a byte linearly to `0.0..=1.0`.
#[inline]
pub(crate) fn unorm_to_f32(byte: u8) -> f32 {
    byte as f32 / 255.0
}

/// Scale `0.0..=1.0` linearly to a byte, rounding to nearest.
///
/// NaN encodes as `0`.
#[inline]
pub(crate) fn f32_to_unorm(value: f32) -> u8 {
    (value.clamp(0.0, 1.0) * 255.0 + 0.5) as u8
}
