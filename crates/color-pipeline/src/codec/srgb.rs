//! Standard sRGB decode/encode

use super::{f32_to_unorm, linear_to_srgb, srgb_to_linear, unorm_to_f32, Decode, Encode};
use crate::color::{Bgra32, LinearRgb, LinearRgba, Rgb24, Rgba32};

/// sRGB storage <-> linear working colors.
///
/// Color channels go through the shared gamma tables; alpha is scaled
/// linearly, with no gamma applied.
///
/// | Storage | Working | Notes |
/// |---------|---------|-------|
/// | [`Rgb24`] | [`LinearRgb`] | both directions |
/// | [`Rgb24`] | [`LinearRgba`] | decode gives alpha `1.0`, encode drops alpha |
/// | [`Rgba32`] | [`LinearRgba`] | both directions |
/// | [`Bgra32`] | [`LinearRgba`] | both directions |
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SrgbCodec;

impl Decode<Rgb24, LinearRgb> for SrgbCodec {
    #[inline]
    fn decode(&self, p: Rgb24) -> LinearRgb {
        LinearRgb::new(srgb_to_linear(p.r), srgb_to_linear(p.g), srgb_to_linear(p.b))
    }
}

impl Encode<LinearRgb, Rgb24> for SrgbCodec {
    #[inline]
    fn encode(&self, c: LinearRgb) -> Rgb24 {
        Rgb24::new(linear_to_srgb(c.r), linear_to_srgb(c.g), linear_to_srgb(c.b))
    }
}

impl Decode<Rgb24, LinearRgba> for SrgbCodec {
    #[inline]
    fn decode(&self, p: Rgb24) -> LinearRgba {
        Decode::<Rgb24, LinearRgb>::decode(self, p).rgba(1.0)
    }
}

impl Encode<LinearRgba, Rgb24> for SrgbCodec {
    #[inline]
    fn encode(&self, c: LinearRgba) -> Rgb24 {
        self.encode(c.rgb())
    }
}

impl Decode<Rgba32, LinearRgba> for SrgbCodec {
    #[inline]
    fn decode(&self, p: Rgba32) -> LinearRgba {
        LinearRgba::new(
            srgb_to_linear(p.r),
            srgb_to_linear(p.g),
            srgb_to_linear(p.b),
            unorm_to_f32(p.a),
        )
    }
}

impl Encode<LinearRgba, Rgba32> for SrgbCodec {
    #[inline]
    fn encode(&self, c: LinearRgba) -> Rgba32 {
        Rgba32::new(
            linear_to_srgb(c.r),
            linear_to_srgb(c.g),
            linear_to_srgb(c.b),
            f32_to_unorm(c.a),
        )
    }
}

impl Decode<Bgra32, LinearRgba> for SrgbCodec {
    #[inline]
    fn decode(&self, p: Bgra32) -> LinearRgba {
        self.decode(Rgba32::from(p))
    }
}

impl Encode<LinearRgba, Bgra32> for SrgbCodec {
    #[inline]
    fn encode(&self, c: LinearRgba) -> Bgra32 {
        let rgba: Rgba32 = self.encode(c);
        Bgra32::from(rgba)
    }
}
