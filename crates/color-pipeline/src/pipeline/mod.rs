//! Composed pipelines and whole-buffer helpers.
//!
//! The units in [`codec`](crate::codec), [`project`](crate::project) and
//! [`metric`](crate::metric) work on one pixel at a time. This module wires
//! them together for caller-owned buffers. Nothing is retained between
//! calls.
//!
//! # Example
//!
//! ```
//! use color_pipeline::pipeline::{compare_slices, KeyPipeline};
//! use color_pipeline::{Ciede2000, Lab, LabProjection, LinearRgba, Rgba32, SrgbCodec};
//!
//! let perceptual = KeyPipeline::<_, _, LinearRgba, Lab>::new(SrgbCodec, LabProjection);
//!
//! let before = [Rgba32::new(200, 30, 30, 255), Rgba32::new(0, 0, 0, 255)];
//! let after = [Rgba32::new(201, 30, 30, 255), Rgba32::new(255, 255, 255, 255)];
//!
//! let distances = compare_slices(&perceptual, &Ciede2000, &before, &after).unwrap();
//! assert!(distances[0].to_f32() < 0.01);
//! assert!(distances[1].to_f32() > 0.99);
//! ```

mod error;
#[cfg(feature = "parallel")]
pub mod parallel;
mod stats;

use std::marker::PhantomData;

pub use error::PipelineError;
pub use stats::DistanceStats;

use crate::codec::{Decode, Encode};
use crate::metric::{Distance, Metric};
use crate::project::Project;

/// A decode unit and a projection, applied in sequence.
///
/// `W` is the working color between the two; `K` is the key color the
/// projection produces.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeyPipeline<D, P, W, K> {
    decode: D,
    project: P,
    _colors: PhantomData<fn(W) -> K>,
}

impl<D, P, W, K> KeyPipeline<D, P, W, K> {
    /// Pair a decode unit with a projection.
    pub const fn new(decode: D, project: P) -> Self {
        Self {
            decode,
            project,
            _colors: PhantomData,
        }
    }

    /// Decode and project one storage pixel.
    #[inline]
    pub fn key<S>(&self, pixel: S) -> K
    where
        D: Decode<S, W>,
        P: Project<W, K>,
    {
        self.project.project(self.decode.decode(pixel))
    }

    /// Distance between two storage pixels under `metric`.
    #[inline]
    pub fn distance<S, M>(&self, metric: &M, a: S, b: S) -> Distance
    where
        D: Decode<S, W>,
        P: Project<W, K>,
        M: Metric<K>,
    {
        metric.distance(self.key(a), self.key(b))
    }
}

/// Decode every pixel of a buffer.
pub fn decode_slice<S, W, D>(codec: &D, pixels: &[S]) -> Vec<W>
where
    S: Copy,
    D: Decode<S, W>,
{
    pixels.iter().map(|&p| codec.decode(p)).collect()
}

/// Encode every color of a buffer. Out-of-range channels are clamped.
pub fn encode_slice<W, S, E>(codec: &E, colors: &[W]) -> Vec<S>
where
    W: Copy,
    E: Encode<W, S>,
{
    colors.iter().map(|&c| codec.encode(c)).collect()
}

/// Project every color of a buffer.
pub fn project_slice<F, T, P>(projection: &P, colors: &[F]) -> Vec<T>
where
    F: Copy,
    P: Project<F, T>,
{
    colors.iter().map(|&c| projection.project(c)).collect()
}

/// Per-pixel distances between two equally sized buffers.
///
/// # Errors
///
/// [`PipelineError::LengthMismatch`] when the buffers differ in length.
pub fn compare_slices<S, D, P, W, K, M>(
    pipeline: &KeyPipeline<D, P, W, K>,
    metric: &M,
    a: &[S],
    b: &[S],
) -> Result<Vec<Distance>, PipelineError>
where
    S: Copy,
    D: Decode<S, W>,
    P: Project<W, K>,
    M: Metric<K>,
{
    check_lengths(a, b)?;
    tracing::debug!(pixels = a.len(), "Comparing pixel buffers");
    Ok(a
        .iter()
        .zip(b)
        .map(|(&x, &y)| pipeline.distance(metric, x, y))
        .collect())
}

fn check_lengths<S>(a: &[S], b: &[S]) -> Result<(), PipelineError> {
    if a.len() != b.len() {
        return Err(PipelineError::LengthMismatch {
            left: a.len(),
            right: b.len(),
        });
    }
    Ok(())
}
