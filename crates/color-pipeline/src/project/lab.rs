//! Linear sRGB <-> CIELAB (D65) and CIELAB -> DIN99.

use super::Project;
use crate::color::{Din99, Lab, LinearRgb, LinearRgba, WithAlpha};

/// Linear sRGB to CIE XYZ (D65).
const RGB_TO_XYZ: [[f32; 3]; 3] = [
    [0.4124564, 0.3575761, 0.1804375],
    [0.2126729, 0.7151522, 0.0721750],
    [0.0193339, 0.1191920, 0.9503041],
];

/// CIE XYZ (D65) to linear sRGB.
const XYZ_TO_RGB: [[f32; 3]; 3] = [
    [3.2404542, -1.5371385, -0.4985314],
    [-0.9692660, 1.8760108, 0.0415560],
    [0.0556434, -0.2040259, 1.0572252],
];

/// D65 reference white in XYZ.
const WHITE: [f32; 3] = [0.95047, 1.0, 1.08883];

/// CIE epsilon (216 / 24389)
const EPSILON: f32 = 216.0 / 24389.0;
/// CIE kappa (24389 / 27)
const KAPPA: f32 = 24389.0 / 27.0;

#[inline]
fn mul3(m: &[[f32; 3]; 3], v: [f32; 3]) -> [f32; 3] {
    [
        m[0][0] * v[0] + m[0][1] * v[1] + m[0][2] * v[2],
        m[1][0] * v[0] + m[1][1] * v[1] + m[1][2] * v[2],
        m[2][0] * v[0] + m[2][1] * v[1] + m[2][2] * v[2],
    ]
}

#[inline]
fn lab_f(t: f32) -> f32 {
    if t > EPSILON {
        t.cbrt()
    } else {
        (KAPPA * t + 16.0) / 116.0
    }
}

#[inline]
fn lab_f_inv(f: f32) -> f32 {
    let cubed = f * f * f;
    if cubed > EPSILON {
        cubed
    } else {
        (116.0 * f - 16.0) / KAPPA
    }
}

/// Linear sRGB <-> [`Lab`] through CIE XYZ, D65 white, 2° observer.
///
/// Out-of-gamut input is projected with the same formulas; nothing is clamped.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LabProjection;

impl Project<LinearRgb, Lab> for LabProjection {
    #[inline]
    fn project(&self, c: LinearRgb) -> Lab {
        let xyz = mul3(&RGB_TO_XYZ, c.to_array());
        let fx = lab_f(xyz[0] / WHITE[0]);
        let fy = lab_f(xyz[1] / WHITE[1]);
        let fz = lab_f(xyz[2] / WHITE[2]);
        Lab::new(116.0 * fy - 16.0, 500.0 * (fx - fy), 200.0 * (fy - fz))
    }
}

impl Project<Lab, LinearRgb> for LabProjection {
    #[inline]
    fn project(&self, c: Lab) -> LinearRgb {
        let fy = (c.l + 16.0) / 116.0;
        let fx = fy + c.a / 500.0;
        let fz = fy - c.b / 200.0;
        let y = if c.l > KAPPA * EPSILON {
            fy * fy * fy
        } else {
            c.l / KAPPA
        };
        let xyz = [lab_f_inv(fx) * WHITE[0], y * WHITE[1], lab_f_inv(fz) * WHITE[2]];
        LinearRgb::from_array(mul3(&XYZ_TO_RGB, xyz))
    }
}

impl Project<LinearRgba, Lab> for LabProjection {
    #[inline]
    fn project(&self, c: LinearRgba) -> Lab {
        self.project(c.rgb())
    }
}

impl Project<LinearRgba, WithAlpha<Lab>> for LabProjection {
    #[inline]
    fn project(&self, c: LinearRgba) -> WithAlpha<Lab> {
        WithAlpha::new(self.project(c.rgb()), c.a)
    }
}

/// DIN 6176 lightness scale
const DIN_L_SCALE: f32 = 105.51;
/// DIN 6176 lightness compression
const DIN_L_COMPRESS: f32 = 0.0158;
/// DIN 6176 chroma compression
const DIN_C_COMPRESS: f32 = 0.045;
/// Redness-yellowness rotation (16°)
const DIN_HUE_ROTATION: f32 = 16.0 * std::f32::consts::PI / 180.0;
/// Yellowness axis compression
const DIN_F_SCALE: f32 = 0.7;

/// [`Lab`] -> [`Din99`] (DIN 6176, `kE = kCH = 1`).
///
/// Also accepts linear RGB(A), going through [`LabProjection`] first.
/// Lightness below about -63 has no DIN99 value and yields NaN.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Din99Projection;

impl Project<Lab, Din99> for Din99Projection {
    #[inline]
    fn project(&self, c: Lab) -> Din99 {
        let l99 = DIN_L_SCALE * (DIN_L_COMPRESS * c.l).ln_1p();

        let (sin_h, cos_h) = DIN_HUE_ROTATION.sin_cos();
        let e = c.a * cos_h + c.b * sin_h;
        let f = DIN_F_SCALE * (c.b * cos_h - c.a * sin_h);
        let g = e.hypot(f);

        // a99/b99 keep the direction of (e, f) with the chroma compressed
        let scale = if g > 0.0 {
            (DIN_C_COMPRESS * g).ln_1p() / DIN_C_COMPRESS / g
        } else {
            0.0
        };
        Din99::new(l99, e * scale, f * scale)
    }
}

impl Project<LinearRgb, Din99> for Din99Projection {
    #[inline]
    fn project(&self, c: LinearRgb) -> Din99 {
        let lab: Lab = LabProjection.project(c);
        self.project(lab)
    }
}

impl Project<LinearRgba, WithAlpha<Din99>> for Din99Projection {
    #[inline]
    fn project(&self, c: LinearRgba) -> WithAlpha<Din99> {
        WithAlpha::new(self.project(c.rgb()), c.a)
    }
}
