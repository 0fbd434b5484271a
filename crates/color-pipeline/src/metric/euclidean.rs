//! Plain Euclidean distances: DIN99 and generic key colors.

use super::Metric;
use crate::color::{Din99, KeyColor};

#[inline]
fn din99_squared(a: Din99, b: Din99) -> f64 {
    let dl = a.l as f64 - b.l as f64;
    let da = a.a as f64 - b.a as f64;
    let db = a.b as f64 - b.b as f64;
    dl * dl + da * da + db * db
}

/// ΔE99: Euclidean distance in DIN99.
///
/// DIN99 is built so that no further weighting is needed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Din99Distance;

impl Metric<Din99> for Din99Distance {
    const SATURATION: f32 = 100.0;

    #[inline]
    fn raw(&self, a: Din99, b: Din99) -> f32 {
        din99_squared(a, b).sqrt() as f32
    }
}

/// Squared ΔE99.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Din99DistanceSquared;

impl Metric<Din99> for Din99DistanceSquared {
    const SATURATION: f32 = 10_000.0;

    #[inline]
    fn raw(&self, a: Din99, b: Din99) -> f32 {
        din99_squared(a, b) as f32
    }
}

/// Euclidean distance in any key space, saturating at `K::MAX_DISTANCE`.
///
/// # Example
///
/// ```
/// use color_pipeline::{Euclidean, Metric, Oklab};
///
/// let white = Oklab::new(1.0, 0.0, 0.0);
/// let black = Oklab::new(0.0, 0.0, 0.0);
/// assert_eq!(Euclidean.distance(white, black).to_f32(), 1.0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Euclidean;

impl<K: KeyColor> Metric<K> for Euclidean {
    const SATURATION: f32 = K::MAX_DISTANCE;

    #[inline]
    fn raw(&self, a: K, b: K) -> f32 {
        a.distance_squared(b).sqrt()
    }
}

/// Squared Euclidean distance, saturating at `K::MAX_DISTANCE²`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EuclideanSquared;

impl<K: KeyColor> Metric<K> for EuclideanSquared {
    const SATURATION: f32 = K::MAX_DISTANCE * K::MAX_DISTANCE;

    #[inline]
    fn raw(&self, a: K, b: K) -> f32 {
        a.distance_squared(b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::{Lab, LinearRgb, WithAlpha, YCbCr};
    use crate::metric::Distance;

    #[test]
    fn test_din99_distance() {
        let a = Din99::new(50.0, 0.0, 0.0);
        let b = Din99::new(50.0, 6.0, 8.0);
        assert!((Din99Distance.raw(a, b) - 10.0).abs() < 1e-5);
        assert!((Din99DistanceSquared.raw(a, b) - 100.0).abs() < 1e-3);
        assert!((Din99Distance.distance(a, b).to_f32() - 0.1).abs() < 1e-4);
        assert!((Din99DistanceSquared.distance(a, b).to_f32() - 0.01).abs() < 1e-4);
    }

    #[test]
    fn test_euclidean_uses_key_maximum() {
        let black = LinearRgb::new(0.0, 0.0, 0.0);
        let white = LinearRgb::new(1.0, 1.0, 1.0);
        assert_eq!(Euclidean.distance(black, white), Distance::ONE);
        assert_eq!(EuclideanSquared.distance(black, white), Distance::ONE);

        let gray = LinearRgb::new(0.5, 0.5, 0.5);
        assert!((Euclidean.distance(black, gray).to_f32() - 0.5).abs() < 1e-4);
        assert!((EuclideanSquared.distance(black, gray).to_f32() - 0.25).abs() < 1e-4);
    }

    #[test]
    fn test_euclidean_over_lab_matches_cie76() {
        use crate::metric::Cie76;

        let a = Lab::new(40.0, 12.0, -7.0);
        let b = Lab::new(47.0, -3.0, 2.0);
        assert!((Euclidean.raw(a, b) - Cie76.raw(a, b)).abs() < 1e-4);
    }

    #[test]
    fn test_alpha_counts() {
        let opaque = WithAlpha::new(YCbCr::new(0.5, 0.0, 0.0), 1.0);
        let clear = WithAlpha::new(YCbCr::new(0.5, 0.0, 0.0), 0.0);
        let d = Euclidean.distance(opaque, clear).to_f32();
        assert!((d - std::f32::consts::FRAC_1_SQRT_2).abs() < 1e-3, "got {d}");
    }
}
