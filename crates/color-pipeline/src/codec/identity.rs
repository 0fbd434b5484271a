//! Identity decode/encode: bytes scaled to floats, nothing else.

use super::{f32_to_unorm, unorm_to_f32, Decode, Encode};
use crate::color::{Bgra32, CmykA, Cmyk32, LinearRgb, LinearRgba, Rgb24, Rgba32};

/// Decode/encode without colorimetric conversion.
///
/// Every channel, alpha included, is scaled linearly between `0..=255` and
/// `0.0..=1.0`. Use it where a pipeline needs a codec but the bytes must
/// pass through untouched, e.g. nearest-neighbor resampling. Covers every
/// pair [`SrgbCodec`](crate::SrgbCodec) covers, plus [`Cmyk32`] <-> [`CmykA`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IdentityCodec;

impl Decode<Rgb24, LinearRgb> for IdentityCodec {
    #[inline]
    fn decode(&self, p: Rgb24) -> LinearRgb {
        LinearRgb::new(unorm_to_f32(p.r), unorm_to_f32(p.g), unorm_to_f32(p.b))
    }
}

impl Encode<LinearRgb, Rgb24> for IdentityCodec {
    #[inline]
    fn encode(&self, c: LinearRgb) -> Rgb24 {
        Rgb24::new(f32_to_unorm(c.r), f32_to_unorm(c.g), f32_to_unorm(c.b))
    }
}

impl Decode<Rgb24, LinearRgba> for IdentityCodec {
    #[inline]
    fn decode(&self, p: Rgb24) -> LinearRgba {
        Decode::<Rgb24, LinearRgb>::decode(self, p).rgba(1.0)
    }
}

impl Encode<LinearRgba, Rgb24> for IdentityCodec {
    #[inline]
    fn encode(&self, c: LinearRgba) -> Rgb24 {
        self.encode(c.rgb())
    }
}

impl Decode<Rgba32, LinearRgba> for IdentityCodec {
    #[inline]
    fn decode(&self, p: Rgba32) -> LinearRgba {
        LinearRgba::new(
            unorm_to_f32(p.r),
            unorm_to_f32(p.g),
            unorm_to_f32(p.b),
            unorm_to_f32(p.a),
        )
    }
}

impl Encode<LinearRgba, Rgba32> for IdentityCodec {
    #[inline]
    fn encode(&self, c: LinearRgba) -> Rgba32 {
        Rgba32::new(
            f32_to_unorm(c.r),
            f32_to_unorm(c.g),
            f32_to_unorm(c.b),
            f32_to_unorm(c.a),
        )
    }
}

impl Decode<Bgra32, LinearRgba> for IdentityCodec {
    #[inline]
    fn decode(&self, p: Bgra32) -> LinearRgba {
        self.decode(Rgba32::from(p))
    }
}

impl Encode<LinearRgba, Bgra32> for IdentityCodec {
    #[inline]
    fn encode(&self, c: LinearRgba) -> Bgra32 {
        let rgba: Rgba32 = self.encode(c);
        Bgra32::from(rgba)
    }
}

impl Decode<Cmyk32, CmykA> for IdentityCodec {
    #[inline]
    fn decode(&self, p: Cmyk32) -> CmykA {
        CmykA::new(
            unorm_to_f32(p.c),
            unorm_to_f32(p.m),
            unorm_to_f32(p.y),
            unorm_to_f32(p.k),
            1.0,
        )
    }
}

impl Encode<CmykA, Cmyk32> for IdentityCodec {
    #[inline]
    fn encode(&self, c: CmykA) -> Cmyk32 {
        Cmyk32::new(
            f32_to_unorm(c.c),
            f32_to_unorm(c.m),
            f32_to_unorm(c.y),
            f32_to_unorm(c.k),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bytes_pass_through_unchanged() {
        for v in 0..=255u8 {
            let p = Rgba32::new(v, v.wrapping_mul(7), 255 - v, v / 3);
            let c: LinearRgba = IdentityCodec.decode(p);
            let back: Rgba32 = IdentityCodec.encode(c);
            assert_eq!(back, p);

            let k = Cmyk32::new(v, 0, 255 - v, v / 2);
            let c: CmykA = IdentityCodec.decode(k);
            let back: Cmyk32 = IdentityCodec.encode(c);
            assert_eq!(back, k);
        }
    }

    #[test]
    fn test_no_gamma_applied() {
        let c: LinearRgb = IdentityCodec.decode(Rgb24::new(128, 0, 255));
        assert!((c.r - 128.0 / 255.0).abs() < 1e-6);
        assert_eq!(c.g, 0.0);
        assert_eq!(c.b, 1.0);
    }

    #[test]
    fn test_bgra_layout() {
        let c: LinearRgba = IdentityCodec.decode(Bgra32::new(255, 0, 0, 255));
        assert_eq!(c, LinearRgba::new(0.0, 0.0, 1.0, 1.0));
    }
}
