//! Key color types
//!
//! Key colors live in perceptual or luma/chroma spaces and exist only to be
//! compared. They are produced by a projection from a working color and fed
//! to a metric; they are never encoded back to storage directly.

use std::f32::consts::SQRT_2;

use super::linear_rgb::LinearRgb;
use super::oklab::Oklab;

/// A color usable as metric input.
pub trait KeyColor: Copy + std::fmt::Debug + PartialEq + Send + Sync {
    /// Practical maximum Euclidean distance between two in-gamut colors.
    ///
    /// Used to normalize plain Euclidean distances into `0.0..=1.0`.
    const MAX_DISTANCE: f32;

    /// Squared Euclidean distance over all components.
    fn distance_squared(self, other: Self) -> f32;
}

#[inline]
fn sq3(a: [f32; 3], b: [f32; 3]) -> f32 {
    let d0 = a[0] - b[0];
    let d1 = a[1] - b[1];
    let d2 = a[2] - b[2];
    d0 * d0 + d1 * d1 + d2 * d2
}

/// CIELAB (D65 white point).
///
/// `l` runs from 0 (black) to 100 (diffuse white); `a` and `b` are
/// unbounded, roughly ±128 for real surfaces.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Lab {
    /// Lightness, 0..100
    pub l: f32,
    /// Green (-) to red (+)
    pub a: f32,
    /// Blue (-) to yellow (+)
    pub b: f32,
}

impl Lab {
    /// Create a new Lab color.
    #[inline]
    pub const fn new(l: f32, a: f32, b: f32) -> Self {
        Self { l, a, b }
    }

    /// Chroma `sqrt(a² + b²)`.
    #[inline]
    pub fn chroma(self) -> f32 {
        self.a.hypot(self.b)
    }

    /// Hue angle in degrees, `0.0..360.0`.
    #[inline]
    pub fn hue_degrees(self) -> f32 {
        let h = self.b.atan2(self.a).to_degrees();
        if h < 0.0 {
            h + 360.0
        } else {
            h
        }
    }
}

impl KeyColor for Lab {
    const MAX_DISTANCE: f32 = 100.0;

    #[inline]
    fn distance_squared(self, other: Self) -> f32 {
        sq3([self.l, self.a, self.b], [other.l, other.a, other.b])
    }
}

/// DIN99 (DIN 6176) coordinates.
///
/// A logarithmic remapping of CIELAB in which plain Euclidean distance is
/// already close to perceptually uniform.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Din99 {
    /// DIN99 lightness, 0..100
    pub l: f32,
    /// Redness-greenness
    pub a: f32,
    /// Yellowness-blueness
    pub b: f32,
}

impl Din99 {
    /// Create a new DIN99 color.
    #[inline]
    pub const fn new(l: f32, a: f32, b: f32) -> Self {
        Self { l, a, b }
    }
}

impl KeyColor for Din99 {
    const MAX_DISTANCE: f32 = 100.0;

    #[inline]
    fn distance_squared(self, other: Self) -> f32 {
        sq3([self.l, self.a, self.b], [other.l, other.a, other.b])
    }
}

/// Analog-style YUV: luma plus scaled blue and red differences.
///
/// For in-gamut input `y` is in `0..1`, `u` in `±0.436` and `v` in `±0.615`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Yuv {
    /// Luma
    pub y: f32,
    /// Blue-difference chroma
    pub u: f32,
    /// Red-difference chroma
    pub v: f32,
}

impl Yuv {
    /// Create a new YUV color.
    #[inline]
    pub const fn new(y: f32, u: f32, v: f32) -> Self {
        Self { y, u, v }
    }
}

impl KeyColor for Yuv {
    // Diagonal of the box 1 x 0.872 x 1.23
    const MAX_DISTANCE: f32 = 1.809_222;

    #[inline]
    fn distance_squared(self, other: Self) -> f32 {
        sq3([self.y, self.u, self.v], [other.y, other.u, other.v])
    }
}

/// Digital YCbCr, full range, chroma centered on zero.
///
/// For in-gamut input `y` is in `0..1` and both chroma components in `±0.5`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct YCbCr {
    /// Luma
    pub y: f32,
    /// Blue-difference chroma
    pub cb: f32,
    /// Red-difference chroma
    pub cr: f32,
}

impl YCbCr {
    /// Create a new YCbCr color.
    #[inline]
    pub const fn new(y: f32, cb: f32, cr: f32) -> Self {
        Self { y, cb, cr }
    }
}

impl KeyColor for YCbCr {
    const MAX_DISTANCE: f32 = 1.732_050_8;

    #[inline]
    fn distance_squared(self, other: Self) -> f32 {
        sq3([self.y, self.cb, self.cr], [other.y, other.cb, other.cr])
    }
}

impl KeyColor for Oklab {
    const MAX_DISTANCE: f32 = 1.0;

    #[inline]
    fn distance_squared(self, other: Self) -> f32 {
        Oklab::distance_squared(self, other)
    }
}

impl KeyColor for LinearRgb {
    const MAX_DISTANCE: f32 = 1.732_050_8;

    #[inline]
    fn distance_squared(self, other: Self) -> f32 {
        sq3(self.to_array(), other.to_array())
    }
}

/// Any key color plus straight alpha.
///
/// The alpha difference is scaled by `K::MAX_DISTANCE`, so an opaque and a
/// fully transparent pixel of the same color are as far apart as the two
/// most distant opaque colors.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct WithAlpha<K> {
    /// The color proper
    pub color: K,
    /// Straight alpha, 0..1
    pub alpha: f32,
}

impl<K> WithAlpha<K> {
    /// Pair a key color with alpha.
    #[inline]
    pub const fn new(color: K, alpha: f32) -> Self {
        Self { color, alpha }
    }
}

impl<K: KeyColor> KeyColor for WithAlpha<K> {
    const MAX_DISTANCE: f32 = K::MAX_DISTANCE * SQRT_2;

    #[inline]
    fn distance_squared(self, other: Self) -> f32 {
        let da = (self.alpha - other.alpha) * K::MAX_DISTANCE;
        self.color.distance_squared(other.color) + da * da
    }
}
