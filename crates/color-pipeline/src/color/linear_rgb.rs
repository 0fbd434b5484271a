//! Linear RGB color types
//!
//! Linear RGB is the color space where light addition is physically accurate.
//! Blending, error diffusion and every projection into a key space start here.

use super::working::{impl_channel_ops, WorkingColor};

/// A color in linear RGB color space, without alpha.
///
/// Linear RGB values represent light intensity proportional to physical light power.
/// Arithmetic operations are only meaningful in linear space.
///
/// Values are typically in the range 0.0..=1.0, but may exceed this range
/// for HDR content or intermediate calculations.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LinearRgb {
    /// Red channel (linear light intensity)
    pub r: f32,
    /// Green channel (linear light intensity)
    pub g: f32,
    /// Blue channel (linear light intensity)
    pub b: f32,
}

impl LinearRgb {
    /// Create a new LinearRgb color from linear RGB values.
    ///
    /// # Arguments
    /// * `r` - Red channel (typically 0.0..=1.0)
    /// * `g` - Green channel (typically 0.0..=1.0)
    /// * `b` - Blue channel (typically 0.0..=1.0)
    #[inline]
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Attach a straight alpha value.
    #[inline]
    pub const fn rgba(self, a: f32) -> LinearRgba {
        LinearRgba::new(self.r, self.g, self.b, a)
    }

    #[inline]
    pub(crate) const fn to_array(self) -> [f32; 3] {
        [self.r, self.g, self.b]
    }

    #[inline]
    pub(crate) const fn from_array(c: [f32; 3]) -> Self {
        Self::new(c[0], c[1], c[2])
    }
}

impl WorkingColor for LinearRgb {
    const LABELS: &'static [&'static str] = &["R", "G", "B"];
    const HAS_ALPHA: bool = false;

    #[inline]
    fn map_channels(self, mut f: impl FnMut(f32) -> f32) -> Self {
        Self::new(f(self.r), f(self.g), f(self.b))
    }

    #[inline]
    fn zip_channels(self, other: Self, mut f: impl FnMut(f32, f32) -> f32) -> Self {
        Self::new(f(self.r, other.r), f(self.g, other.g), f(self.b, other.b))
    }

    #[inline]
    fn clamp(self) -> Self {
        self.map_channels(|c| c.clamp(0.0, 1.0))
    }
}

impl_channel_ops!(LinearRgb);

/// A color in linear RGB color space with straight alpha.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearRgba {
    /// Red channel (linear light intensity)
    pub r: f32,
    /// Green channel (linear light intensity)
    pub g: f32,
    /// Blue channel (linear light intensity)
    pub b: f32,
    /// Straight alpha (0.0 = transparent, 1.0 = opaque)
    pub a: f32,
}

impl LinearRgba {
    /// Create a new color from linear RGB values and straight alpha.
    #[inline]
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Color channels without alpha.
    #[inline]
    pub const fn rgb(self) -> LinearRgb {
        LinearRgb::new(self.r, self.g, self.b)
    }
}

impl Default for LinearRgba {
    fn default() -> Self {
        Self::new(0.0, 0.0, 0.0, 1.0)
    }
}

impl From<LinearRgb> for LinearRgba {
    fn from(rgb: LinearRgb) -> Self {
        rgb.rgba(1.0)
    }
}

impl WorkingColor for LinearRgba {
    const LABELS: &'static [&'static str] = &["R", "G", "B"];
    const HAS_ALPHA: bool = true;

    #[inline]
    fn map_channels(self, mut f: impl FnMut(f32) -> f32) -> Self {
        Self::new(f(self.r), f(self.g), f(self.b), self.a)
    }

    #[inline]
    fn zip_channels(self, other: Self, mut f: impl FnMut(f32, f32) -> f32) -> Self {
        Self::new(
            f(self.r, other.r),
            f(self.g, other.g),
            f(self.b, other.b),
            self.a,
        )
    }

    #[inline]
    fn alpha(&self) -> f32 {
        self.a
    }

    #[inline]
    fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }

    #[inline]
    fn clamp(self) -> Self {
        self.map_channels(|c| c.clamp(0.0, 1.0))
            .with_alpha(self.a.clamp(0.0, 1.0))
    }
}

impl_channel_ops!(LinearRgba);
