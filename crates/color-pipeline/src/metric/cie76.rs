//! CIE76: Euclidean distance in CIELAB.

use super::{lab64, Metric};
use crate::color::Lab;

#[inline]
fn delta_e_squared(a: Lab, b: Lab) -> f64 {
    let (l1, a1, b1) = lab64(a);
    let (l2, a2, b2) = lab64(b);
    let (dl, da, db) = (l1 - l2, a1 - a2, b1 - b2);
    dl * dl + da * da + db * db
}

/// CIE 1976 ΔE*ab.
///
/// A ΔE of about 2.3 is a just-noticeable difference.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cie76;

impl Metric<Lab> for Cie76 {
    const SATURATION: f32 = 100.0;

    #[inline]
    fn raw(&self, a: Lab, b: Lab) -> f32 {
        delta_e_squared(a, b).sqrt() as f32
    }
}

/// Squared CIE76 ΔE, skipping the square root.
///
/// Orders pairs exactly like [`Cie76`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cie76Squared;

impl Metric<Lab> for Cie76Squared {
    const SATURATION: f32 = 10_000.0;

    #[inline]
    fn raw(&self, a: Lab, b: Lab) -> f32 {
        delta_e_squared(a, b) as f32
    }
}
