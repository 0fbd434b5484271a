//! Fused sRGB <-> Oklab codec
//!
//! Equivalent to [`SrgbCodec`](crate::SrgbCodec) followed by
//! [`OklabProjection`](crate::OklabProjection) (and the reverse), without
//! materializing the intermediate linear color.

use super::{f32_to_unorm, linear_to_srgb, srgb_to_linear, unorm_to_f32, Decode, Encode};
use crate::color::{linear_to_oklab, oklab_to_linear, Bgra32, OklabA, Rgb24, Rgba32};

/// sRGB storage <-> [`OklabA`] in one step.
///
/// Decoding expands through the gamma tables straight into the Oklab
/// matrices. Encoding converts back to linear light, clamps to the gamut
/// and compresses. Alpha is scaled linearly in both directions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OklabCodec;

#[inline]
fn decode_rgb(r: u8, g: u8, b: u8, alpha: f32) -> OklabA {
    let [l, a, bb] = linear_to_oklab([srgb_to_linear(r), srgb_to_linear(g), srgb_to_linear(b)]);
    OklabA::new(l, a, bb, alpha)
}

#[inline]
fn encode_rgb(c: OklabA) -> [u8; 3] {
    oklab_to_linear([c.l, c.a, c.b]).map(linear_to_srgb)
}

impl Decode<Rgb24, OklabA> for OklabCodec {
    #[inline]
    fn decode(&self, p: Rgb24) -> OklabA {
        decode_rgb(p.r, p.g, p.b, 1.0)
    }
}

impl Decode<Rgba32, OklabA> for OklabCodec {
    #[inline]
    fn decode(&self, p: Rgba32) -> OklabA {
        decode_rgb(p.r, p.g, p.b, unorm_to_f32(p.a))
    }
}

impl Decode<Bgra32, OklabA> for OklabCodec {
    #[inline]
    fn decode(&self, p: Bgra32) -> OklabA {
        decode_rgb(p.r, p.g, p.b, unorm_to_f32(p.a))
    }
}

impl Encode<OklabA, Rgb24> for OklabCodec {
    #[inline]
    fn encode(&self, c: OklabA) -> Rgb24 {
        Rgb24::from_bytes(encode_rgb(c))
    }
}

impl Encode<OklabA, Rgba32> for OklabCodec {
    #[inline]
    fn encode(&self, c: OklabA) -> Rgba32 {
        let [r, g, b] = encode_rgb(c);
        Rgba32::new(r, g, b, f32_to_unorm(c.alpha))
    }
}

impl Encode<OklabA, Bgra32> for OklabCodec {
    #[inline]
    fn encode(&self, c: OklabA) -> Bgra32 {
        let [r, g, b] = encode_rgb(c);
        Bgra32::new(b, g, r, f32_to_unorm(c.alpha))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn max_channel_error(a: Rgb24, b: Rgb24) -> u8 {
        a.to_bytes()
            .iter()
            .zip(b.to_bytes())
            .map(|(&x, y)| x.abs_diff(y))
            .max()
            .unwrap_or(0)
    }

    #[test]
    fn test_round_trip_grid() {
        let levels = [0u8, 1, 17, 64, 100, 128, 188, 200, 254, 255];
        for &r in &levels {
            for &g in &levels {
                for &b in &levels {
                    let p = Rgb24::new(r, g, b);
                    let lab: OklabA = OklabCodec.decode(p);
                    let back: Rgb24 = OklabCodec.encode(lab);
                    assert!(
                        max_channel_error(p, back) <= 1,
                        "Oklab round trip drifted: {p:?} -> {back:?}"
                    );
                }
            }
        }
    }

    #[test]
    fn test_black_white_primaries_secondaries() {
        let samples = [
            Rgb24::new(0, 0, 0),
            Rgb24::new(255, 255, 255),
            Rgb24::new(255, 0, 0),
            Rgb24::new(0, 255, 0),
            Rgb24::new(0, 0, 255),
            Rgb24::new(0, 255, 255),
            Rgb24::new(255, 0, 255),
            Rgb24::new(255, 255, 0),
        ];
        for p in samples {
            let back: Rgb24 = OklabCodec.encode(OklabCodec.decode(p));
            assert!(max_channel_error(p, back) <= 1, "{p:?} -> {back:?}");
        }
    }

    #[test]
    fn test_white_is_l_one() {
        let white: OklabA = OklabCodec.decode(Rgb24::new(255, 255, 255));
        assert!((white.l - 1.0).abs() < 1e-4);
        assert!(white.a.abs() < 1e-4 && white.b.abs() < 1e-4);
        assert_eq!(white.alpha, 1.0);
    }

    #[test]
    fn test_alpha_and_channel_order() {
        let rgba = Rgba32::new(200, 40, 10, 64);
        let from_rgba: OklabA = OklabCodec.decode(rgba);
        let from_bgra: OklabA = OklabCodec.decode(Bgra32::from(rgba));
        assert_eq!(from_rgba, from_bgra);

        let back: Bgra32 = OklabCodec.encode(from_bgra);
        assert_eq!(back.a, 64);
        assert!(max_channel_error(Rgba32::from(back).rgb(), rgba.rgb()) <= 1);
    }
}
