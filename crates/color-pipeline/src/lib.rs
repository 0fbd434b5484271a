#![allow(clippy::excessive_precision, clippy::manual_range_contains)]

//! color-pipeline: composable color conversions and perceptual color difference
//!
//! This library moves pixel data between byte-packed storage formats,
//! floating-point working colors and perceptual key spaces, and measures
//! color difference with the CIE family of ΔE formulas.
//!
//! # Quick Start
//!
//! ```
//! use color_pipeline::{Ciede2000, Decode, Lab, LabProjection, LinearRgb, Metric, Project, Rgb24, SrgbCodec};
//!
//! let a: Rgb24 = "#c83232".parse().unwrap();
//! let b: Rgb24 = "#c83a32".parse().unwrap();
//!
//! let to_lab = |p: Rgb24| -> Lab {
//!     let linear: LinearRgb = SrgbCodec.decode(p);
//!     LabProjection.project(linear)
//! };
//!
//! let d = Ciede2000.distance(to_lab(a), to_lab(b));
//! assert!(d.to_f32() > 0.0 && d.to_f32() < 0.05);
//! ```
//!
//! # Architecture
//!
//! Every step is a zero-sized unit implementing one small contract:
//!
//! | Contract | Shape | Units |
//! |----------|-------|-------|
//! | [`Decode<S, W>`] | storage -> working | [`SrgbCodec`], [`IdentityCodec`], [`OklabCodec`] |
//! | [`Encode<W, S>`] | working -> storage | same |
//! | [`Project<F, T>`] | working <-> key | [`IdentityProjection`], [`YuvProjection`], [`YCbCrProjection`], [`OklabProjection`], [`LabProjection`], [`Din99Projection`], [`CmykProjection`], [`Chain`] |
//! | [`Metric<K>`] | key × key -> [`Distance`] | [`Cie76`], [`Cie94`], [`Ciede2000`], [`CmcPerceptibility`], [`Din99Distance`], [`Euclidean`], ... |
//!
//! Units never call each other. A pipeline is assembled at the call site
//! by choosing types, so the per-pixel path is monomorphized with no
//! runtime dispatch. [`pipeline::KeyPipeline`] bundles a decode unit and a
//! projection for buffer-level work.
//!
//! ```text
//! StoragePixel --Decode--> WorkingColor --Project--> KeyColor --Metric--> Distance
//!       ^                        |
//!       +--------Encode----------+
//! ```
//!
//! # Color Spaces
//!
//! | Family | Types | Used For |
//! |--------|-------|----------|
//! | **Storage** | [`Rgb24`], [`Rgba32`], [`Bgra32`], [`Cmyk32`] | Image buffers, byte-exact I/O |
//! | **Working** | [`LinearRgb`], [`LinearRgba`], [`OklabA`], [`CmykA`] | Blending, error diffusion, anything arithmetic |
//! | **Key** | [`Lab`], [`Din99`], [`Yuv`], [`YCbCr`], [`Oklab`] | Distance only; never written back to storage |
//!
//! Working colors carry straight (non-premultiplied) alpha. Their channels
//! may leave `0.0..=1.0` during arithmetic; encode units clamp.
//!
//! ## Gamma
//!
//! sRGB decode and encode go through two lookup tables in 16.16 fixed
//! point (see [`color::lut`]), built once on first use and shared by all
//! threads. Decode then encode returns the original byte for all 256
//! values. The transfer function itself is never evaluated per pixel.
//!
//! ## Metrics
//!
//! All metrics return a [`Distance`] in `[0, 1]`. `0` is identical; `1`
//! means the raw difference reached the metric's saturation point (ΔE 100
//! for the CIE family, ΔE² 10000 for the squared variants). Metrics are
//! total: out-of-gamut input is fine and NaN saturates to `1`.
//!
//! CIEDE2000 runs in `f64` and matches the published Sharma, Wu & Dalal
//! reference pairs to 1e-3.
//!
//! # Parallelism
//!
//! With the `parallel` feature, [`pipeline::parallel`] offers rayon-backed
//! buffer helpers. The units themselves are `Send + Sync` and hold no state.

pub mod codec;
pub mod color;
pub mod metric;
pub mod pipeline;
pub mod project;

#[cfg(test)]
mod domain_tests;

pub use codec::{Decode, Encode, IdentityCodec, OklabCodec, SrgbCodec};
pub use color::{
    Bgra32, CmykA, Cmyk32, Din99, KeyColor, Lab, LinearRgb, LinearRgba, Oklab, OklabA,
    ParseColorError, Rgb24, Rgba32, WithAlpha, WorkingColor, YCbCr, Yuv,
};
pub use metric::{
    Cie76, Cie76Squared, Cie94, Cie94Textile, Ciede2000, Ciede2000Squared, CmcAcceptability,
    CmcAcceptabilitySquared, CmcPerceptibility, CmcPerceptibilitySquared, Din99Distance,
    Din99DistanceSquared, Distance, Euclidean, EuclideanSquared, Metric,
};
pub use pipeline::{DistanceStats, KeyPipeline, PipelineError};
pub use project::{
    Bt2020, Bt601, Bt709, Chain, CmykProjection, Din99Projection, IdentityProjection,
    LabProjection, LumaCoefficients, OklabProjection, Project, YCbCrProjection, YuvProjection,
};
