//! CMC l:c color difference (Colour Measurement Committee, 1984).

use super::{lab64, Metric};
use crate::color::Lab;

/// Lightness and chroma tolerances.
struct CmcWeights {
    l: f64,
    c: f64,
}

/// 1:1, threshold of perceptibility
const PERCEPTIBILITY: CmcWeights = CmcWeights { l: 1.0, c: 1.0 };

/// 2:1, threshold of acceptability
const ACCEPTABILITY: CmcWeights = CmcWeights { l: 2.0, c: 1.0 };

/// Squared ΔE CMC(l:c). `a` is the reference color.
fn delta_e_squared(a: Lab, b: Lab, w: &CmcWeights) -> f64 {
    let (l1, a1, b1) = lab64(a);
    let (l2, a2, b2) = lab64(b);

    let c1 = a1.hypot(b1);
    let c2 = a2.hypot(b2);
    let dl = l1 - l2;
    let dc = c1 - c2;
    let (da, db) = (a1 - a2, b1 - b2);
    let dh_sq = (da * da + db * db - dc * dc).max(0.0);

    let h1 = {
        let h = b1.atan2(a1).to_degrees();
        if h < 0.0 {
            h + 360.0
        } else {
            h
        }
    };

    let sl = if l1 < 16.0 {
        0.511
    } else {
        0.040975 * l1 / (1.0 + 0.01765 * l1)
    };
    let sc = 0.0638 * c1 / (1.0 + 0.0131 * c1) + 0.638;

    let c1_4 = c1 * c1 * c1 * c1;
    let f = (c1_4 / (c1_4 + 1900.0)).sqrt();
    let t = if (164.0..=345.0).contains(&h1) {
        0.56 + (0.2 * (h1 + 168.0).to_radians().cos()).abs()
    } else {
        0.36 + (0.4 * (h1 + 35.0).to_radians().cos()).abs()
    };
    let sh = sc * (f * t + 1.0 - f);

    let tl = dl / (w.l * sl);
    let tc = dc / (w.c * sc);
    tl * tl + tc * tc + dh_sq / (sh * sh)
}

/// ΔE CMC(1:1), for judging whether a difference is visible at all.
///
/// Not symmetric: the first argument is the reference.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CmcPerceptibility;

impl Metric<Lab> for CmcPerceptibility {
    const SATURATION: f32 = 100.0;

    #[inline]
    fn raw(&self, a: Lab, b: Lab) -> f32 {
        delta_e_squared(a, b, &PERCEPTIBILITY).sqrt() as f32
    }
}

/// ΔE CMC(2:1), for judging whether a visible difference is acceptable.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CmcAcceptability;

impl Metric<Lab> for CmcAcceptability {
    const SATURATION: f32 = 100.0;

    #[inline]
    fn raw(&self, a: Lab, b: Lab) -> f32 {
        delta_e_squared(a, b, &ACCEPTABILITY).sqrt() as f32
    }
}

/// Squared ΔE CMC(1:1).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CmcPerceptibilitySquared;

impl Metric<Lab> for CmcPerceptibilitySquared {
    const SATURATION: f32 = 10_000.0;

    #[inline]
    fn raw(&self, a: Lab, b: Lab) -> f32 {
        delta_e_squared(a, b, &PERCEPTIBILITY) as f32
    }
}

/// Squared ΔE CMC(2:1).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CmcAcceptabilitySquared;

impl Metric<Lab> for CmcAcceptabilitySquared {
    const SATURATION: f32 = 10_000.0;

    #[inline]
    fn raw(&self, a: Lab, b: Lab) -> f32 {
        delta_e_squared(a, b, &ACCEPTABILITY) as f32
    }
}
