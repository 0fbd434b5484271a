//! Summary statistics over a buffer of distances.

use crate::metric::Distance;

/// Mean, maximum and threshold count of a set of distances.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DistanceStats {
    /// Number of distances summarized
    pub count: usize,
    /// Arithmetic mean, `0.0..=1.0` (`0.0` when empty)
    pub mean: f32,
    /// Largest distance (`Distance::ZERO` when empty)
    pub max: Distance,
    /// Threshold used for `above_threshold`
    pub threshold: Distance,
    /// Number of distances strictly greater than `threshold`
    pub above_threshold: usize,
}

impl DistanceStats {
    /// Summarize `distances` against `threshold`.
    ///
    /// # Example
    ///
    /// ```
    /// use color_pipeline::{Distance, DistanceStats};
    ///
    /// let d = [Distance::ZERO, Distance::from_ratio(0.5), Distance::ONE];
    /// let stats = DistanceStats::from_distances(&d, Distance::from_ratio(0.25));
    /// assert_eq!(stats.above_threshold, 2);
    /// assert_eq!(stats.max, Distance::ONE);
    /// ```
    pub fn from_distances(distances: &[Distance], threshold: Distance) -> Self {
        let mut sum = 0.0f64;
        let mut max = Distance::ZERO;
        let mut above_threshold = 0;
        for &d in distances {
            sum += d.to_f32() as f64;
            max = max.max(d);
            if d > threshold {
                above_threshold += 1;
            }
        }
        let mean = if distances.is_empty() {
            0.0
        } else {
            (sum / distances.len() as f64) as f32
        };

        Self {
            count: distances.len(),
            mean,
            max,
            threshold,
            above_threshold,
        }
    }

    /// Whether every distance is at or below the threshold.
    #[inline]
    pub fn all_within(&self) -> bool {
        self.above_threshold == 0
    }
}
