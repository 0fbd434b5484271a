//! Color types and the gamma lookup tables
//!
//! Three families of representation, kept apart by type:
//!
//! - **Storage**: byte-packed pixels as held in image buffers ([`Rgb24`],
//!   [`Rgba32`], [`Bgra32`], [`Cmyk32`]).
//! - **Working**: floating-point colors used for arithmetic ([`LinearRgb`],
//!   [`LinearRgba`], [`OklabA`], [`CmykA`]), all implementing [`WorkingColor`].
//! - **Key**: spaces used only for distance ([`Lab`], [`Din99`], [`Yuv`],
//!   [`YCbCr`], [`Oklab`]), all implementing [`KeyColor`].
//!
//! # Example
//!
//! ```
//! use color_pipeline::{Decode, Encode, LinearRgb, Rgb24, SrgbCodec};
//!
//! // Load a pixel from an image buffer
//! let pixel: Rgb24 = "#808080".parse().unwrap();
//!
//! // Decode to linear light for calculations
//! let linear: LinearRgb = SrgbCodec.decode(pixel);
//!
//! // After calculations, encode back for output
//! let output: Rgb24 = SrgbCodec.encode(linear);
//! assert_eq!(output, pixel);
//! ```

mod cmyk;
mod error;
mod key;
mod linear_rgb;
pub mod lut;
mod oklab;
mod storage;
mod working;

pub use cmyk::CmykA;
pub use error::ParseColorError;
pub use key::{Din99, KeyColor, Lab, WithAlpha, YCbCr, Yuv};
pub use linear_rgb::{LinearRgb, LinearRgba};
pub use oklab::{Oklab, OklabA};
pub(crate) use oklab::{linear_to_oklab, oklab_to_linear};
pub use storage::{Bgra32, Cmyk32, Rgb24, Rgba32};
pub use working::WorkingColor;
