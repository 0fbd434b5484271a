//! Perceptual color-difference metrics.
//!
//! Every metric compares two key colors and returns a [`Distance`]: a
//! fixed-point value in `[0, 1]` where `0` means identical and `1` means
//! "at or beyond the metric's saturation point" (ΔE ≥ 100 for the CIE
//! family). The unnormalized value is available through [`Metric::raw`]
//! and, for CIEDE2000, as an `f64` through [`Ciede2000::delta_e`].
//!
//! # Metrics
//!
//! | Metric | Key | Saturation |
//! |--------|-----|-----------|
//! | [`Cie76`] / [`Cie76Squared`] | [`Lab`](crate::Lab) | 100 / 10000 |
//! | [`Cie94`] / [`Cie94Textile`] | [`Lab`](crate::Lab) | 100 |
//! | [`Ciede2000`] / [`Ciede2000Squared`] | [`Lab`](crate::Lab) | 100 / 10000 |
//! | [`CmcPerceptibility`] / [`CmcAcceptability`] (+ squared) | [`Lab`](crate::Lab) | 100 / 10000 |
//! | [`Din99Distance`] / [`Din99DistanceSquared`] | [`Din99`](crate::Din99) | 100 / 10000 |
//! | [`Euclidean`] / [`EuclideanSquared`] | any [`KeyColor`](crate::KeyColor) | `K::MAX_DISTANCE` (squared) |
//!
//! # Numeric behavior
//!
//! Metrics are total. Out-of-gamut and very large finite inputs never panic
//! and always normalize into `[0, 1]`. Identical inputs give exactly zero.
//! NaN is not trapped: it flows through [`Metric::raw`] and saturates to
//! `1.0` in [`Distance`].
//!
//! # Example
//!
//! ```
//! use color_pipeline::{Ciede2000, Lab, Metric};
//!
//! let a = Lab::new(50.0, 2.6772, -79.7751);
//! let b = Lab::new(50.0, 0.0, -82.7485);
//!
//! assert!((Ciede2000::delta_e(a, b) - 2.0425).abs() < 1e-3);
//! assert_eq!(Ciede2000.distance(a, a).to_f32(), 0.0);
//! ```

mod cie76;
mod cie94;
mod ciede2000;
mod cmc;
mod euclidean;

use std::fmt;

pub use cie76::{Cie76, Cie76Squared};
pub use cie94::{Cie94, Cie94Textile};
pub use ciede2000::{Ciede2000, Ciede2000Squared};
pub use cmc::{CmcAcceptability, CmcAcceptabilitySquared, CmcPerceptibility, CmcPerceptibilitySquared};
pub use euclidean::{Din99Distance, Din99DistanceSquared, Euclidean, EuclideanSquared};

/// Normalized color distance in `[0, 1]`, stored as 0.16 fixed point.
///
/// `Distance::ZERO` is identical, `Distance::ONE` is saturated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Distance(u16);

impl Distance {
    /// Identical colors.
    pub const ZERO: Distance = Distance(0);

    /// At or beyond the saturation threshold.
    pub const ONE: Distance = Distance(u16::MAX);

    /// Build from a ratio, clamping into `[0, 1]`.
    ///
    /// NaN is treated as maximally different.
    ///
    /// # Example
    ///
    /// ```
    /// use color_pipeline::Distance;
    ///
    /// assert_eq!(Distance::from_ratio(-0.5), Distance::ZERO);
    /// assert_eq!(Distance::from_ratio(7.0), Distance::ONE);
    /// assert_eq!(Distance::from_ratio(f32::NAN), Distance::ONE);
    /// ```
    #[inline]
    pub fn from_ratio(ratio: f32) -> Self {
        if ratio.is_nan() {
            return Self::ONE;
        }
        Self((ratio.clamp(0.0, 1.0) * u16::MAX as f32 + 0.5) as u16)
    }

    /// Build from the raw fixed-point value.
    #[inline]
    pub const fn from_bits(bits: u16) -> Self {
        Self(bits)
    }

    /// The raw fixed-point value, `0..=65535`.
    #[inline]
    pub const fn to_bits(self) -> u16 {
        self.0
    }

    /// The distance as a float in `0.0..=1.0`.
    #[inline]
    pub fn to_f32(self) -> f32 {
        self.0 as f32 / u16::MAX as f32
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.4}", self.to_f32())
    }
}

/// A perceptual distance between two key colors.
///
/// Metrics are zero-sized units; call them as `Ciede2000.distance(a, b)`.
pub trait Metric<K> {
    /// Raw value that maps to [`Distance::ONE`].
    const SATURATION: f32;

    /// Unnormalized difference (ΔE, or ΔE² for the squared variants).
    fn raw(&self, a: K, b: K) -> f32;

    /// Normalized difference: `raw / SATURATION`, clamped to `[0, 1]`.
    #[inline]
    fn distance(&self, a: K, b: K) -> Distance {
        Distance::from_ratio(self.raw(a, b) / Self::SATURATION)
    }
}

/// Lab components widened for the f64 formulas.
#[inline]
pub(crate) fn lab64(c: crate::color::Lab) -> (f64, f64, f64) {
    (c.l as f64, c.a as f64, c.b as f64)
}
