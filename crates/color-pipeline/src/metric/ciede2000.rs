//! CIEDE2000 color difference
//!
//! Computed in `f64` from `f32` inputs. The formula is piecewise: the hue
//! difference wraps at ±180°, and the mean hue takes one of three branches
//! depending on whether the two hues straddle 0°/360°.
//!
//! # References
//!
//! G. Sharma, W. Wu, E. N. Dalal, "The CIEDE2000 Color-Difference Formula:
//! Implementation Notes, Supplementary Test Data, and Mathematical
//! Observations", Color Research & Application 30(1), 2005.

use super::{lab64, Metric};
use crate::color::Lab;

/// 25^7
const POW25_7: f64 = 6_103_515_625.0;

/// Slack for hue comparisons at the ±180° boundary.
///
/// Widening `f32` inputs can leave two hues 180° + 1e-14 apart when they
/// are exactly opposite in decimal.
const HUE_EPSILON: f64 = 1e-9;

/// Hue angle in degrees, `0..360`. Zero for neutral colors.
#[inline]
fn hue_degrees(a: f64, b: f64) -> f64 {
    if a == 0.0 && b == 0.0 {
        return 0.0;
    }
    let h = b.atan2(a).to_degrees();
    if h < 0.0 {
        h + 360.0
    } else {
        h
    }
}

/// `sqrt(c^7 / (c^7 + 25^7))`
#[inline]
fn chroma_weight(c: f64) -> f64 {
    let c7 = c.powi(7);
    (c7 / (c7 + POW25_7)).sqrt()
}

/// CIEDE2000 ΔE00 with `kL = kC = kH = 1`.
fn delta_e(x: Lab, y: Lab) -> f64 {
    let (l1, a1, b1) = lab64(x);
    let (l2, a2, b2) = lab64(y);

    // Rotate a* towards neutral for low-chroma pairs
    let c_bar = (a1.hypot(b1) + a2.hypot(b2)) / 2.0;
    let g = 0.5 * (1.0 - chroma_weight(c_bar));
    let a1p = a1 * (1.0 + g);
    let a2p = a2 * (1.0 + g);

    let c1p = a1p.hypot(b1);
    let c2p = a2p.hypot(b2);
    let h1p = hue_degrees(a1p, b1);
    let h2p = hue_degrees(a2p, b2);
    let neutral = c1p * c2p == 0.0;

    let dl = l2 - l1;
    let dc = c2p - c1p;
    let dh = if neutral {
        0.0
    } else {
        let d = h2p - h1p;
        if d > 180.0 + HUE_EPSILON {
            d - 360.0
        } else if d < -180.0 - HUE_EPSILON {
            d + 360.0
        } else {
            d
        }
    };
    let dh_big = 2.0 * (c1p * c2p).sqrt() * (dh / 2.0).to_radians().sin();

    let l_bar = (l1 + l2) / 2.0;
    let cp_bar = (c1p + c2p) / 2.0;
    let hp_bar = if neutral {
        h1p + h2p
    } else if (h1p - h2p).abs() <= 180.0 + HUE_EPSILON {
        (h1p + h2p) / 2.0
    } else if h1p + h2p < 360.0 {
        (h1p + h2p + 360.0) / 2.0
    } else {
        (h1p + h2p - 360.0) / 2.0
    };

    let t = 1.0 - 0.17 * (hp_bar - 30.0).to_radians().cos()
        + 0.24 * (2.0 * hp_bar).to_radians().cos()
        + 0.32 * (3.0 * hp_bar + 6.0).to_radians().cos()
        - 0.20 * (4.0 * hp_bar - 63.0).to_radians().cos();

    let l50 = (l_bar - 50.0) * (l_bar - 50.0);
    let sl = 1.0 + 0.015 * l50 / (20.0 + l50).sqrt();
    let sc = 1.0 + 0.045 * cp_bar;
    let sh = 1.0 + 0.015 * cp_bar * t;

    let d_theta = 30.0 * (-((hp_bar - 275.0) / 25.0).powi(2)).exp();
    let rc = 2.0 * chroma_weight(cp_bar);
    let rt = -(2.0 * d_theta).to_radians().sin() * rc;

    let tl = dl / sl;
    let tc = dc / sc;
    let th = dh_big / sh;
    (tl * tl + tc * tc + th * th + rt * tc * th).sqrt()
}

/// CIEDE2000 ΔE00.
///
/// The most perceptually accurate of the CIE formulas, and the slowest.
///
/// # Example
///
/// ```
/// use color_pipeline::{Ciede2000, Lab, Metric};
///
/// let gray = Lab::new(50.0, 0.0, 0.0);
/// let tinted = Lab::new(50.0, -1.0, 2.0);
/// assert!((Ciede2000::delta_e(gray, tinted) - 2.3669).abs() < 1e-3);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Ciede2000;

impl Ciede2000 {
    /// Unnormalized ΔE00 in full `f64` precision.
    #[inline]
    pub fn delta_e(a: Lab, b: Lab) -> f64 {
        delta_e(a, b)
    }
}

impl Metric<Lab> for Ciede2000 {
    const SATURATION: f32 = 100.0;

    #[inline]
    fn raw(&self, a: Lab, b: Lab) -> f32 {
        delta_e(a, b) as f32
    }
}

/// Squared CIEDE2000, normalized against ΔE00² = 10000.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Ciede2000Squared;

impl Metric<Lab> for Ciede2000Squared {
    const SATURATION: f32 = 10_000.0;

    #[inline]
    fn raw(&self, a: Lab, b: Lab) -> f32 {
        let d = delta_e(a, b);
        (d * d) as f32
    }
}
