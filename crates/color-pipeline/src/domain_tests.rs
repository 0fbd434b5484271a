//! Domain-critical regression tests for color-pipeline.
//!
//! These tests are designed to catch specific classes of bugs, not just
//! confirm happy paths. Each test documents the regression it guards against.

#[cfg(test)]
mod domain_tests {
    use crate::codec::{Decode, Encode, IdentityCodec, OklabCodec, SrgbCodec};
    use crate::color::{
        lut, Bgra32, Din99, Lab, LinearRgb, LinearRgba, Oklab, OklabA, Rgb24, Rgba32, WithAlpha,
        YCbCr, Yuv,
    };
    use crate::metric::{
        Cie76, Cie76Squared, Cie94, Cie94Textile, Ciede2000, Ciede2000Squared, CmcAcceptability,
        CmcAcceptabilitySquared, CmcPerceptibility, CmcPerceptibilitySquared, Din99Distance,
        Din99DistanceSquared, Distance, Euclidean, EuclideanSquared, Metric,
    };
    use crate::pipeline::project_slice;
    use crate::project::{
        Bt2020, Bt601, Bt709, Din99Projection, LabProjection, OklabProjection, Project,
        YCbCrProjection, YuvProjection,
    };

    /// Lab samples spanning in-gamut, neutral, hue-boundary and far out-of-gamut values.
    const LAB_SAMPLES: [Lab; 10] = [
        Lab::new(0.0, 0.0, 0.0),
        Lab::new(100.0, 0.0, 0.0),
        Lab::new(50.0, 2.6772, -79.7751),
        Lab::new(50.0, 2.49, -0.001),
        Lab::new(50.0, -2.49, 0.0009),
        Lab::new(10.0, 5.0, -3.0),
        Lab::new(60.2574, -34.0099, 36.2677),
        Lab::new(-40.0, 500.0, -500.0),
        Lab::new(250.0, -900.0, 1200.0),
        Lab::new(1.0e6, -1.0e6, 1.0e6),
    ];

    fn check_identity_and_range<K: Copy + std::fmt::Debug, M: Metric<K>>(
        name: &str,
        metric: M,
        samples: &[K],
    ) {
        for &a in samples {
            assert_eq!(
                metric.distance(a, a),
                Distance::ZERO,
                "REGRESSION: {name} gave a nonzero distance for identical input {a:?}"
            );
            for &b in samples {
                let d = metric.distance(a, b).to_f32();
                assert!(
                    (0.0..=1.0).contains(&d),
                    "REGRESSION: {name} left [0, 1] for {a:?} vs {b:?}: {d}"
                );
            }
        }
    }

    // ========================================================================
    // GAP 1: Gamma tables -- decode/encode must be lossless for 8-bit input
    // ========================================================================

    /// If this breaks, it means: the compression table resolution or its
    /// bucket rounding drifted, so some sRGB bytes no longer survive a
    /// decode/encode round trip. Every byte must come back unchanged.
    #[test]
    fn test_every_byte_round_trips_through_linear() {
        for v in 0..=255u8 {
            let p = Rgba32::new(v, v, v, v);
            let linear: LinearRgba = SrgbCodec.decode(p);
            let back: Rgba32 = SrgbCodec.encode(linear);
            assert_eq!(
                back, p,
                "REGRESSION: byte {v} decoded to {} and encoded back as {back:?}",
                linear.r
            );
        }
    }

    /// If this breaks, it means: decode is no longer applying the sRGB
    /// transfer function (or applies it twice). sRGB 128 is about 21.6%
    /// linear light and sRGB 188 about 50%; a linear scaling would give
    /// 0.502 and 0.737.
    #[test]
    fn test_mid_gray_linear_values() {
        let dark: LinearRgb = SrgbCodec.decode(Rgb24::new(128, 128, 128));
        assert!(
            (dark.r - 0.2158).abs() < 0.002,
            "REGRESSION: sRGB 128 decoded to {}, expected ~0.2158",
            dark.r
        );
        let back: Rgb24 = SrgbCodec.encode(dark);
        assert_eq!(back, Rgb24::new(128, 128, 128));

        let half: LinearRgb = SrgbCodec.decode(Rgb24::new(188, 188, 188));
        assert!(
            (half.r - 0.503).abs() < 0.002,
            "REGRESSION: sRGB 188 decoded to {}, expected ~0.503",
            half.r
        );
        let back: Rgb24 = SrgbCodec.encode(half);
        assert_eq!(back, Rgb24::new(188, 188, 188));
    }

    /// If this breaks, it means: the gamma tables are being rebuilt per
    /// call or per thread instead of once for the process.
    #[test]
    fn test_gamma_tables_shared_across_threads() {
        let main_tables = lut::tables() as *const lut::GammaTables as usize;
        let seen: Vec<usize> = std::thread::scope(|s| {
            let handles: Vec<_> = (0..4)
                .map(|_| s.spawn(|| lut::tables() as *const lut::GammaTables as usize))
                .collect();
            handles
                .into_iter()
                .map(|h| h.join().unwrap_or_default())
                .collect()
        });
        assert!(seen.iter().all(|&addr| addr == main_tables));
    }

    // ========================================================================
    // GAP 2: Metrics -- identity, range and totality
    // ========================================================================

    /// If this breaks, it means: a metric returns a tiny nonzero value for
    /// identical colors (e.g. from a hue term that does not cancel) or
    /// escapes [0, 1] for out-of-gamut input instead of saturating.
    #[test]
    fn test_lab_metrics_identity_and_range() {
        check_identity_and_range("CIE76", Cie76, &LAB_SAMPLES);
        check_identity_and_range("CIE76²", Cie76Squared, &LAB_SAMPLES);
        check_identity_and_range("CIE94", Cie94, &LAB_SAMPLES);
        check_identity_and_range("CIE94 textile", Cie94Textile, &LAB_SAMPLES);
        check_identity_and_range("CIEDE2000", Ciede2000, &LAB_SAMPLES);
        check_identity_and_range("CIEDE2000²", Ciede2000Squared, &LAB_SAMPLES);
        check_identity_and_range("CMC 1:1", CmcPerceptibility, &LAB_SAMPLES);
        check_identity_and_range("CMC 2:1", CmcAcceptability, &LAB_SAMPLES);
        check_identity_and_range("CMC 1:1²", CmcPerceptibilitySquared, &LAB_SAMPLES);
        check_identity_and_range("CMC 2:1²", CmcAcceptabilitySquared, &LAB_SAMPLES);
        check_identity_and_range("Euclidean Lab", Euclidean, &LAB_SAMPLES);
    }

    /// If this breaks, it means: a metric overflows to NaN on extreme but
    /// finite input (e.g. `inf - inf` in single precision) instead of
    /// saturating at 1.
    #[test]
    fn test_metrics_saturate_on_extreme_finite_input() {
        let huge = [
            Lab::new(f32::MAX, f32::MAX, f32::MAX),
            Lab::new(-f32::MAX, -f32::MAX, -f32::MAX),
            Lab::new(f32::MAX, -f32::MAX, 0.0),
        ];
        check_identity_and_range("CIE76", Cie76, &huge);
        check_identity_and_range("CIE94", Cie94, &huge);
        check_identity_and_range("CIEDE2000", Ciede2000, &huge);
        check_identity_and_range("CMC 1:1", CmcPerceptibility, &huge);
        check_identity_and_range("Euclidean", EuclideanSquared, &huge);

        let huge99 = [
            Din99::new(f32::MAX, 0.0, -f32::MAX),
            Din99::new(-f32::MAX, f32::MAX, 0.0),
        ];
        check_identity_and_range("DIN99", Din99Distance, &huge99);
        check_identity_and_range("DIN99²", Din99DistanceSquared, &huge99);
    }

    /// If this breaks, it means: a key space's Euclidean distance or its
    /// `MAX_DISTANCE` normalization is wrong for one of the non-Lab spaces.
    #[test]
    fn test_euclidean_over_every_key_space() {
        let rgb = [
            LinearRgb::new(0.0, 0.0, 0.0),
            LinearRgb::new(1.0, 1.0, 1.0),
            LinearRgb::new(1.0, 0.0, 0.0),
            LinearRgb::new(0.0, 0.0, 1.0),
            LinearRgb::new(-0.3, 1.4, 0.5),
        ];

        let rgba: Vec<LinearRgba> = rgb.iter().map(|c| c.rgba(0.5)).collect();

        let yuv: Vec<Yuv> = project_slice(&YuvProjection::<Bt601>::new(), &rgb);
        let ycc: Vec<YCbCr> = project_slice(&YCbCrProjection::<Bt709>::new(), &rgb);
        let ok: Vec<Oklab> = project_slice(&OklabProjection, &rgb);
        let din: Vec<Din99> = project_slice(&Din99Projection, &rgb);
        let alpha: Vec<WithAlpha<Oklab>> = project_slice(&OklabProjection, &rgba);

        check_identity_and_range("Euclidean YUV", Euclidean, &yuv);
        check_identity_and_range("Euclidean YCbCr", Euclidean, &ycc);
        check_identity_and_range("Euclidean Oklab", Euclidean, &ok);
        check_identity_and_range("Euclidean RGB", Euclidean, &rgb);
        check_identity_and_range("Euclidean Oklab+alpha", EuclideanSquared, &alpha);
        check_identity_and_range("DIN99", Din99Distance, &din);
    }

    /// If this breaks, it means: the ±180° hue correction or the mean-hue
    /// branch of CIEDE2000 is wrong. Pairs of nearly opposite hues are the
    /// first casualties.
    #[test]
    fn test_ciede2000_hue_boundary() {
        let a = Lab::new(50.0, 2.49, -0.001);
        let b = Lab::new(50.0, -2.49, 0.0010);
        assert!((Ciede2000::delta_e(a, b) - 7.1792).abs() < 1e-3);

        let b = Lab::new(50.0, -2.49, 0.0011);
        assert!((Ciede2000::delta_e(a, b) - 7.2195).abs() < 1e-3);
    }

    // ========================================================================
    // GAP 3: Fused Oklab codec must equal the two-step path
    // ========================================================================

    /// If this breaks, it means: the fused sRGB -> Oklab codec diverged from
    /// `SrgbCodec` + `OklabProjection` (e.g. different matrices, skipped
    /// gamma expansion, or alpha mishandled).
    #[test]
    fn test_fused_oklab_equals_two_step() {
        for i in 0..512u32 {
            let p = Rgba32::new(
                (i * 37 % 256) as u8,
                (i * 91 % 256) as u8,
                (i * 13 % 256) as u8,
                (i % 256) as u8,
            );

            let fused: OklabA = OklabCodec.decode(p);
            let linear: LinearRgba = SrgbCodec.decode(p);
            let staged: OklabA = OklabProjection.project(linear);
            assert!(
                (fused.l - staged.l).abs() < 1e-6
                    && (fused.a - staged.a).abs() < 1e-6
                    && (fused.b - staged.b).abs() < 1e-6
                    && fused.alpha == staged.alpha,
                "REGRESSION: fused decode {fused:?} != two-step {staged:?} for {p:?}"
            );

            let fused_out: Rgba32 = OklabCodec.encode(fused);
            let back: LinearRgba = OklabProjection.project(staged);
            let staged_out: Rgba32 = SrgbCodec.encode(back);
            assert_eq!(fused_out, staged_out, "REGRESSION: fused encode drifted for {p:?}");
        }
    }

    /// If this breaks, it means: the Oklab round trip loses more than one
    /// level per channel on black, white, primaries or secondaries.
    #[test]
    fn test_oklab_round_trip_key_colors() {
        let samples = [
            Bgra32::new(0, 0, 0, 255),
            Bgra32::new(255, 255, 255, 255),
            Bgra32::new(0, 0, 255, 255),
            Bgra32::new(0, 255, 0, 255),
            Bgra32::new(255, 0, 0, 255),
            Bgra32::new(255, 255, 0, 255),
            Bgra32::new(255, 0, 255, 255),
            Bgra32::new(0, 255, 255, 0),
        ];
        for p in samples {
            let lab: OklabA = OklabCodec.decode(p);
            let back: Bgra32 = OklabCodec.encode(lab);
            for (x, y) in p.to_bytes().iter().zip(back.to_bytes()) {
                assert!(x.abs_diff(y) <= 1, "REGRESSION: {p:?} came back as {back:?}");
            }
        }
    }

    // ========================================================================
    // GAP 4: Projections must invert
    // ========================================================================

    fn check_yuv_inverse<P>(name: &str, projection: P)
    where
        P: Project<LinearRgba, WithAlpha<Yuv>> + Project<WithAlpha<Yuv>, LinearRgba>,
    {
        for i in 0..64u8 {
            let p = Rgba32::new(i * 4, 255 - i * 3, i.wrapping_mul(29), 255 - i);
            let c: LinearRgba = SrgbCodec.decode(p);
            let k: WithAlpha<Yuv> = projection.project(c);
            let back: LinearRgba = projection.project(k);
            let out: Rgba32 = SrgbCodec.encode(back);
            assert_eq!(out, p, "REGRESSION: {name} YUV inverse drifted");
        }
    }

    /// If this breaks, it means: an inverse YUV coefficient no longer
    /// matches its forward transform, so storage -> YUV -> storage loses
    /// levels for one of the video standards.
    #[test]
    fn test_yuv_storage_round_trip_all_standards() {
        check_yuv_inverse("BT.601", YuvProjection::<Bt601>::new());
        check_yuv_inverse("BT.709", YuvProjection::<Bt709>::new());
        check_yuv_inverse("BT.2020", YuvProjection::<Bt2020>::new());
    }

    /// If this breaks, it means: Lab projection and its inverse disagree, so
    /// a perceptual pipeline cannot be reversed for inspection.
    #[test]
    fn test_lab_storage_round_trip() {
        for i in 0..=255u8 {
            let p = Rgb24::new(i, i.wrapping_mul(7), 255 - i);
            let c: LinearRgb = SrgbCodec.decode(p);
            let lab: Lab = LabProjection.project(c);
            let back: LinearRgb = LabProjection.project(lab);
            let out: Rgb24 = SrgbCodec.encode(back);
            for (x, y) in p.to_bytes().iter().zip(out.to_bytes()) {
                assert!(x.abs_diff(y) <= 1, "REGRESSION: {p:?} came back as {out:?}");
            }
        }
    }

    // ========================================================================
    // GAP 5: Identity codec must not touch the bytes
    // ========================================================================

    /// If this breaks, it means: the identity codec picked up a gamma curve
    /// or a rounding bias, so "no conversion" pipelines alter pixels.
    #[test]
    fn test_identity_codec_is_byte_exact() {
        for v in 0..=255u8 {
            let p = Bgra32::new(v, 255 - v, v / 3, v);
            let c: LinearRgba = IdentityCodec.decode(p);
            let back: Bgra32 = IdentityCodec.encode(c);
            assert_eq!(back, p);
        }
    }
}
