//! RGB <-> YUV / YCbCr for the BT.601, BT.709 and BT.2020 luma weights.
//!
//! Forward transforms compute luma as `Y = Kr·R + Kg·G + Kb·B` and chroma as
//! scaled `B - Y` and `R - Y`. Inverse transforms use the closed-form
//! algebraic inverse rather than an inverted matrix.

use std::marker::PhantomData;

use super::Project;
use crate::color::{LinearRgb, LinearRgba, WithAlpha, YCbCr, Yuv};

/// Luma weights of a video standard.
pub trait LumaCoefficients: Copy + Default + Send + Sync + 'static {
    /// Red weight
    const KR: f32;
    /// Blue weight
    const KB: f32;
    /// Green weight, the remainder
    const KG: f32 = 1.0 - Self::KR - Self::KB;
    /// Display name
    const NAME: &'static str;
}

/// ITU-R BT.601 (standard definition).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Bt601;

/// ITU-R BT.709 (HDTV).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Bt709;

/// ITU-R BT.2020 (UHDTV).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Bt2020;

impl LumaCoefficients for Bt601 {
    const KR: f32 = 0.299;
    const KB: f32 = 0.114;
    const NAME: &'static str = "BT.601";
}

impl LumaCoefficients for Bt709 {
    const KR: f32 = 0.2126;
    const KB: f32 = 0.0722;
    const NAME: &'static str = "BT.709";
}

impl LumaCoefficients for Bt2020 {
    const KR: f32 = 0.2627;
    const KB: f32 = 0.0593;
    const NAME: &'static str = "BT.2020";
}

/// Maximum |U| of the analog YUV scaling.
const U_MAX: f32 = 0.436;
/// Maximum |V| of the analog YUV scaling.
const V_MAX: f32 = 0.615;

#[inline]
fn luma<S: LumaCoefficients>(c: LinearRgb) -> f32 {
    S::KR * c.r + S::KG * c.g + S::KB * c.b
}

/// Rebuild RGB from luma and the unscaled differences `B - Y` and `R - Y`.
#[inline]
fn from_differences<S: LumaCoefficients>(y: f32, b_minus_y: f32, r_minus_y: f32) -> LinearRgb {
    let r = y + r_minus_y;
    let b = y + b_minus_y;
    let g = (y - S::KR * r - S::KB * b) / S::KG;
    LinearRgb::new(r, g, b)
}

/// Linear RGB <-> analog-scaled [`Yuv`] for standard `S`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct YuvProjection<S>(PhantomData<S>);

impl<S> YuvProjection<S> {
    /// Create the projection.
    pub const fn new() -> Self {
        Self(PhantomData)
    }
}

impl<S: LumaCoefficients> Project<LinearRgb, Yuv> for YuvProjection<S> {
    #[inline]
    fn project(&self, c: LinearRgb) -> Yuv {
        let y = luma::<S>(c);
        Yuv::new(
            y,
            U_MAX * (c.b - y) / (1.0 - S::KB),
            V_MAX * (c.r - y) / (1.0 - S::KR),
        )
    }
}

impl<S: LumaCoefficients> Project<Yuv, LinearRgb> for YuvProjection<S> {
    #[inline]
    fn project(&self, c: Yuv) -> LinearRgb {
        from_differences::<S>(
            c.y,
            c.u * (1.0 - S::KB) / U_MAX,
            c.v * (1.0 - S::KR) / V_MAX,
        )
    }
}

impl<S: LumaCoefficients> Project<LinearRgba, WithAlpha<Yuv>> for YuvProjection<S> {
    #[inline]
    fn project(&self, c: LinearRgba) -> WithAlpha<Yuv> {
        WithAlpha::new(self.project(c.rgb()), c.a)
    }
}

impl<S: LumaCoefficients> Project<WithAlpha<Yuv>, LinearRgba> for YuvProjection<S> {
    #[inline]
    fn project(&self, c: WithAlpha<Yuv>) -> LinearRgba {
        let rgb: LinearRgb = self.project(c.color);
        rgb.rgba(c.alpha)
    }
}

/// Linear RGB <-> full-range [`YCbCr`] for standard `S`.
///
/// Chroma is centered on zero with range `±0.5`; no studio-range offsets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct YCbCrProjection<S>(PhantomData<S>);

impl<S> YCbCrProjection<S> {
    /// Create the projection.
    pub const fn new() -> Self {
        Self(PhantomData)
    }
}

impl<S: LumaCoefficients> Project<LinearRgb, YCbCr> for YCbCrProjection<S> {
    #[inline]
    fn project(&self, c: LinearRgb) -> YCbCr {
        let y = luma::<S>(c);
        YCbCr::new(
            y,
            (c.b - y) / (2.0 * (1.0 - S::KB)),
            (c.r - y) / (2.0 * (1.0 - S::KR)),
        )
    }
}

impl<S: LumaCoefficients> Project<YCbCr, LinearRgb> for YCbCrProjection<S> {
    #[inline]
    fn project(&self, c: YCbCr) -> LinearRgb {
        from_differences::<S>(
            c.y,
            c.cb * 2.0 * (1.0 - S::KB),
            c.cr * 2.0 * (1.0 - S::KR),
        )
    }
}

impl<S: LumaCoefficients> Project<LinearRgba, WithAlpha<YCbCr>> for YCbCrProjection<S> {
    #[inline]
    fn project(&self, c: LinearRgba) -> WithAlpha<YCbCr> {
        WithAlpha::new(self.project(c.rgb()), c.a)
    }
}

impl<S: LumaCoefficients> Project<WithAlpha<YCbCr>, LinearRgba> for YCbCrProjection<S> {
    #[inline]
    fn project(&self, c: WithAlpha<YCbCr>) -> LinearRgba {
        let rgb: LinearRgb = self.project(c.color);
        rgb.rgba(c.alpha)
    }
}
