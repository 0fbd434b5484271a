//! Rayon-parallel versions of the slice helpers.
//!
//! Every unit is stateless and the gamma tables are read-only once built,
//! so pixels are processed independently with no coordination.
//!
//! # Example
//!
//! ```
//! use color_pipeline::pipeline::{parallel, KeyPipeline};
//! use color_pipeline::{Ciede2000, Lab, LabProjection, LinearRgba, Rgba32, SrgbCodec};
//!
//! let lab = KeyPipeline::<_, _, LinearRgba, Lab>::new(SrgbCodec, LabProjection);
//! let a = vec![Rgba32::new(90, 90, 90, 255); 1024];
//! let d = parallel::par_compare_slices(&lab, &Ciede2000, &a, &a).unwrap();
//! assert!(d.iter().all(|d| d.to_bits() == 0));
//! ```

use rayon::prelude::*;

use super::{check_lengths, KeyPipeline, PipelineError};
use crate::codec::Decode;
use crate::metric::{Distance, Metric};
use crate::project::Project;

/// Decode every pixel of a buffer across the rayon thread pool.
pub fn par_decode_slice<S, W, D>(codec: &D, pixels: &[S]) -> Vec<W>
where
    S: Copy + Sync,
    W: Send,
    D: Decode<S, W> + Sync,
{
    pixels.par_iter().map(|&p| codec.decode(p)).collect()
}

/// Per-pixel distances between two equally sized buffers, in parallel.
///
/// # Errors
///
/// [`PipelineError::LengthMismatch`] when the buffers differ in length.
pub fn par_compare_slices<S, D, P, W, K, M>(
    pipeline: &KeyPipeline<D, P, W, K>,
    metric: &M,
    a: &[S],
    b: &[S],
) -> Result<Vec<Distance>, PipelineError>
where
    S: Copy + Sync,
    D: Decode<S, W> + Sync,
    P: Project<W, K> + Sync,
    M: Metric<K> + Sync,
{
    check_lengths(a, b)?;
    tracing::debug!(
        pixels = a.len(),
        threads = rayon::current_num_threads(),
        "Comparing pixel buffers in parallel"
    );
    Ok(a
        .par_iter()
        .zip(b.par_iter())
        .map(|(&x, &y)| pipeline.distance(metric, x, y))
        .collect())
}
