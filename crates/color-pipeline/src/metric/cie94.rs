//! CIE94: lightness, chroma and hue differences weighted by the first
//! color's chroma.

use super::{lab64, Metric};
use crate::color::Lab;

/// Application constants for ΔE94.
struct Cie94Weights {
    kl: f64,
    k1: f64,
    k2: f64,
}

/// Graphic arts
const GRAPHIC_ARTS: Cie94Weights = Cie94Weights {
    kl: 1.0,
    k1: 0.045,
    k2: 0.015,
};

/// Textiles
const TEXTILES: Cie94Weights = Cie94Weights {
    kl: 2.0,
    k1: 0.048,
    k2: 0.014,
};

/// ΔE94 with `kC = kH = 1`. `a` is the reference color.
fn delta_e(a: Lab, b: Lab, w: &Cie94Weights) -> f64 {
    let (l1, a1, b1) = lab64(a);
    let (l2, a2, b2) = lab64(b);

    let c1 = a1.hypot(b1);
    let c2 = a2.hypot(b2);

    let dl = l1 - l2;
    let dc = c1 - c2;
    let (da, db) = (a1 - a2, b1 - b2);
    // Rounding can push the hue term slightly negative
    let dh_sq = (da * da + db * db - dc * dc).max(0.0);

    let sc = 1.0 + w.k1 * c1;
    let sh = 1.0 + w.k2 * c1;

    let tl = dl / w.kl;
    let tc = dc / sc;
    (tl * tl + tc * tc + dh_sq / (sh * sh)).sqrt()
}

/// CIE 1994 ΔE, graphic arts constants (`kL = 1`, `K1 = 0.045`, `K2 = 0.015`).
///
/// Not symmetric: the first argument is the reference.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cie94;

impl Metric<Lab> for Cie94 {
    const SATURATION: f32 = 100.0;

    #[inline]
    fn raw(&self, a: Lab, b: Lab) -> f32 {
        delta_e(a, b, &GRAPHIC_ARTS) as f32
    }
}

/// CIE 1994 ΔE, textile constants (`kL = 2`, `K1 = 0.048`, `K2 = 0.014`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cie94Textile;

impl Metric<Lab> for Cie94Textile {
    const SATURATION: f32 = 100.0;

    #[inline]
    fn raw(&self, a: Lab, b: Lab) -> f32 {
        delta_e(a, b, &TEXTILES) as f32
    }
}
