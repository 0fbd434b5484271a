//! Oklab perceptual color space
//!
//! Oklab appears twice in this crate: [`Oklab`] is a key color used for
//! perceptual distance, and [`OklabA`] is a working color (with alpha) for
//! pipelines that blend or diffuse error in a perceptual space.
//!
//! # References
//!
//! Björn Ottosson, "A perceptual color space for image processing"
//! <https://bottosson.github.io/posts/oklab/>

use super::working::{impl_channel_ops, WorkingColor};

/// A color in Oklab perceptual color space.
///
/// Oklab provides perceptually uniform distances - equal numerical differences
/// correspond to equal perceived differences.
///
/// # Components
///
/// - `l`: Lightness (0.0 = black, 1.0 = white for in-gamut colors)
/// - `a`: Green-red axis (negative = green, positive = red)
/// - `b`: Blue-yellow axis (negative = blue, positive = yellow)
///
/// # Note
///
/// Values are not clamped. Out-of-gamut colors (from error diffusion) may
/// have components outside typical ranges.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Oklab {
    /// Lightness: 0.0 (black) to 1.0 (white) for in-gamut colors
    pub l: f32,
    /// Green-red axis: typically -0.5 to 0.5
    pub a: f32,
    /// Blue-yellow axis: typically -0.5 to 0.5
    pub b: f32,
}

impl Oklab {
    /// Create a new Oklab color.
    ///
    /// # Example
    ///
    /// ```
    /// use color_pipeline::Oklab;
    ///
    /// // Create a mid-gray color (neutral, no chroma)
    /// let gray = Oklab::new(0.5, 0.0, 0.0);
    /// ```
    #[inline]
    pub const fn new(l: f32, a: f32, b: f32) -> Self {
        Self { l, a, b }
    }

    /// Squared Euclidean distance in Oklab space.
    ///
    /// # Example
    ///
    /// ```
    /// use color_pipeline::Oklab;
    ///
    /// let white = Oklab::new(1.0, 0.0, 0.0);
    /// let black = Oklab::new(0.0, 0.0, 0.0);
    /// let gray = Oklab::new(0.5, 0.0, 0.0);
    ///
    /// // Gray is equidistant from black and white
    /// let d_to_black = gray.distance_squared(black);
    /// let d_to_white = gray.distance_squared(white);
    /// assert!((d_to_black - d_to_white).abs() < 1e-6);
    /// ```
    #[inline]
    pub fn distance_squared(self, other: Oklab) -> f32 {
        let dl = self.l - other.l;
        let da = self.a - other.a;
        let db = self.b - other.b;
        dl * dl + da * da + db * db
    }

    /// Chroma: distance from the neutral axis.
    #[inline]
    pub fn chroma(self) -> f32 {
        self.a.hypot(self.b)
    }

    /// Attach a straight alpha value, producing a working color.
    #[inline]
    pub const fn with_alpha(self, alpha: f32) -> OklabA {
        OklabA::new(self.l, self.a, self.b, alpha)
    }
}

/// Oklab with straight alpha, used as a working color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OklabA {
    /// Lightness
    pub l: f32,
    /// Green-red axis
    pub a: f32,
    /// Blue-yellow axis
    pub b: f32,
    /// Straight alpha (0.0 = transparent, 1.0 = opaque)
    pub alpha: f32,
}

impl OklabA {
    /// Create a new color from Oklab components and straight alpha.
    #[inline]
    pub const fn new(l: f32, a: f32, b: f32, alpha: f32) -> Self {
        Self { l, a, b, alpha }
    }

    /// Drop alpha, producing a key color.
    #[inline]
    pub const fn lab(self) -> Oklab {
        Oklab::new(self.l, self.a, self.b)
    }
}

impl Default for OklabA {
    fn default() -> Self {
        Self::new(0.0, 0.0, 0.0, 1.0)
    }
}

impl WorkingColor for OklabA {
    const LABELS: &'static [&'static str] = &["L", "a", "b"];
    const HAS_ALPHA: bool = true;

    #[inline]
    fn map_channels(self, mut f: impl FnMut(f32) -> f32) -> Self {
        Self::new(f(self.l), f(self.a), f(self.b), self.alpha)
    }

    #[inline]
    fn zip_channels(self, other: Self, mut f: impl FnMut(f32, f32) -> f32) -> Self {
        Self::new(
            f(self.l, other.l),
            f(self.a, other.a),
            f(self.b, other.b),
            self.alpha,
        )
    }

    #[inline]
    fn alpha(&self) -> f32 {
        self.alpha
    }

    #[inline]
    fn with_alpha(self, alpha: f32) -> Self {
        Self { alpha, ..self }
    }

    /// Lightness and alpha are clamped to `0.0..=1.0`. The chroma axes have
    /// no hard bound and are left alone.
    #[inline]
    fn clamp(self) -> Self {
        Self::new(
            self.l.clamp(0.0, 1.0),
            self.a,
            self.b,
            self.alpha.clamp(0.0, 1.0),
        )
    }
}

impl_channel_ops!(OklabA);

/// Linear sRGB to LMS (M1), updated 2021-01-25 matrices.
const M1: [[f32; 3]; 3] = [
    [0.4122214708, 0.5363325363, 0.0514459929],
    [0.2119034982, 0.6806995451, 0.1073969566],
    [0.0883024619, 0.2817188376, 0.6299787005],
];

/// Non-linear LMS to Lab (M2).
const M2: [[f32; 3]; 3] = [
    [0.2104542553, 0.7936177850, -0.0040720468],
    [1.9779984951, -2.4285922050, 0.4505937099],
    [0.0259040371, 0.7827717662, -0.8086757660],
];

/// Lab to non-linear LMS (inverse M2).
const M2_INV: [[f32; 3]; 3] = [
    [1.0, 0.3963377774, 0.2158037573],
    [1.0, -0.1055613458, -0.0638541728],
    [1.0, -0.0894841775, -1.2914855480],
];

/// LMS to linear sRGB (inverse M1).
const M1_INV: [[f32; 3]; 3] = [
    [4.0767416621, -3.3077115913, 0.2309699292],
    [-1.2684380046, 2.6097574011, -0.3413193965],
    [-0.0041960863, -0.7034186147, 1.7076147010],
];

#[inline]
fn mul3(m: &[[f32; 3]; 3], v: [f32; 3]) -> [f32; 3] {
    [
        m[0][0] * v[0] + m[0][1] * v[1] + m[0][2] * v[2],
        m[1][0] * v[0] + m[1][1] * v[1] + m[1][2] * v[2],
        m[2][0] * v[0] + m[2][1] * v[1] + m[2][2] * v[2],
    ]
}

/// Linear RGB `[r, g, b]` to Oklab `[L, a, b]`.
///
/// The cube root is the real, sign-preserving one (`f32::cbrt`), so slightly
/// negative LMS values from out-of-gamut input map to negative roots rather
/// than NaN.
#[inline]
pub(crate) fn linear_to_oklab(rgb: [f32; 3]) -> [f32; 3] {
    let lms = mul3(&M1, rgb);
    mul3(&M2, lms.map(f32::cbrt))
}

/// Oklab `[L, a, b]` to linear RGB `[r, g, b]`. Not clamped.
#[inline]
pub(crate) fn oklab_to_linear(lab: [f32; 3]) -> [f32; 3] {
    let lms_ = mul3(&M2_INV, lab);
    mul3(&M1_INV, lms_.map(|c| c * c * c))
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Tolerance for palette crate comparison (single matrix transform)
    const PALETTE_TOLERANCE: f32 = 1e-6;

    /// Tolerance for round-trip through two matrix transforms (f32 accumulates error)
    const ROUND_TRIP_TOLERANCE: f32 = 1e-5;

    fn approx_eq(a: f32, b: f32, tol: f32) -> bool {
        (a - b).abs() < tol
    }

    #[test]
    fn test_oklab_matches_palette_crate() {
        use palette::{IntoColor, LinSrgb, Oklab as PaletteOklab};

        let test_colors = [
            (1.0, 0.0, 0.0),
            (0.0, 1.0, 0.0),
            (0.0, 0.0, 1.0),
            (0.5, 0.5, 0.5),
            (1.0, 1.0, 1.0),
            (0.0, 0.0, 0.0),
        ];

        for (r, g, b) in test_colors {
            let [l, a, bb] = linear_to_oklab([r, g, b]);

            let palette_linear: LinSrgb<f32> = LinSrgb::new(r, g, b);
            let expected: PaletteOklab<f32> = palette_linear.into_color();

            assert!(
                approx_eq(l, expected.l, PALETTE_TOLERANCE),
                "L mismatch for ({r}, {g}, {b}): ours={l}, palette={}",
                expected.l
            );
            assert!(
                approx_eq(a, expected.a, PALETTE_TOLERANCE),
                "a mismatch for ({r}, {g}, {b}): ours={a}, palette={}",
                expected.a
            );
            assert!(
                approx_eq(bb, expected.b, PALETTE_TOLERANCE),
                "b mismatch for ({r}, {g}, {b}): ours={bb}, palette={}",
                expected.b
            );
        }
    }

    #[test]
    fn test_oklab_round_trip() {
        let test_colors = [
            [1.0, 0.0, 0.0],
            [0.0, 1.0, 0.0],
            [0.0, 0.0, 1.0],
            [1.0, 1.0, 0.0],
            [1.0, 0.0, 1.0],
            [0.0, 1.0, 1.0],
            [0.5, 0.5, 0.5],
            [0.25, 0.25, 0.25],
            [1.0, 1.0, 1.0],
            [0.0, 0.0, 0.0],
        ];

        for original in test_colors {
            let back = oklab_to_linear(linear_to_oklab(original));
            for i in 0..3 {
                assert!(
                    approx_eq(original[i], back[i], ROUND_TRIP_TOLERANCE),
                    "channel {i} round-trip failed for {original:?}: got {back:?}"
                );
            }
        }
    }

    #[test]
    fn test_white_and_black_known_values() {
        let [l, a, b] = linear_to_oklab([1.0, 1.0, 1.0]);
        assert!(approx_eq(l, 1.0, PALETTE_TOLERANCE), "white L = {l}");
        assert!(approx_eq(a, 0.0, PALETTE_TOLERANCE), "white a = {a}");
        assert!(approx_eq(b, 0.0, PALETTE_TOLERANCE), "white b = {b}");

        assert_eq!(linear_to_oklab([0.0, 0.0, 0.0]), [0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_negative_lms_is_defined() {
        // Far outside the gamut: LMS goes negative, cube root must stay real
        let lab = linear_to_oklab([-0.2, -0.1, -0.3]);
        assert!(lab.iter().all(|c| c.is_finite()), "got {lab:?}");
        assert!(lab[0] < 0.0);

        let back = oklab_to_linear(lab);
        assert!(approx_eq(back[0], -0.2, ROUND_TRIP_TOLERANCE));
        assert!(approx_eq(back[2], -0.3, ROUND_TRIP_TOLERANCE));
    }

    #[test]
    fn test_oklab_distance() {
        let white = Oklab::new(1.0, 0.0, 0.0);
        let black = Oklab::new(0.0, 0.0, 0.0);
        assert!((white.distance_squared(black) - 1.0).abs() < 1e-6);
        assert_eq!(white.distance_squared(white), 0.0);

        let red_ish = Oklab::new(0.5, 0.2, 0.0);
        let blue_ish = Oklab::new(0.5, 0.0, -0.2);
        assert!((red_ish.distance_squared(blue_ish) - 0.08).abs() < 1e-6);
    }

    #[test]
    fn test_working_clamp_leaves_chroma_axes() {
        let c = OklabA::new(1.2, 0.7, -0.9, 1.5).clamp();
        assert_eq!(c, OklabA::new(1.0, 0.7, -0.9, 1.0));
        assert_eq!(c.lab(), Oklab::new(1.0, 0.7, -0.9));
    }
}
