//! Key-space coordinates for a single color.

use clap::ValueEnum;
use color_pipeline::{
    Bt2020, Bt601, Bt709, Chain, Decode, Din99, Din99Projection, Lab, LabProjection,
    LinearRgba, LumaCoefficients, Oklab, OklabA, OklabCodec, Project, Rgba32, SrgbCodec,
    WithAlpha, YCbCr, YCbCrProjection, Yuv, YuvProjection,
};
use serde::{Deserialize, Serialize};

/// Video standard for the YUV and YCbCr projections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Standard {
    Bt601,
    #[default]
    Bt709,
    Bt2020,
}

impl Standard {
    pub fn name(self) -> &'static str {
        match self {
            Standard::Bt601 => Bt601::NAME,
            Standard::Bt709 => Bt709::NAME,
            Standard::Bt2020 => Bt2020::NAME,
        }
    }
}

/// Target space for `deltae convert`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Space {
    Lab,
    Din99,
    Oklab,
    Yuv,
    Ycbcr,
}

/// A color expressed in one key space.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Coordinates {
    pub space: Space,
    /// Present for YUV and YCbCr only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub standard: Option<Standard>,
    pub channels: Vec<(&'static str, f32)>,
    pub alpha: f32,
}

impl std::fmt::Display for Coordinates {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self.space)?;
        if let Some(standard) = self.standard {
            write!(f, " ({})", standard.name())?;
        }
        for (label, value) in &self.channels {
            write!(f, " {label}={value:.4}")?;
        }
        write!(f, " alpha={:.4}", self.alpha)
    }
}

fn yuv<S: LumaCoefficients>(c: LinearRgba) -> WithAlpha<Yuv> {
    YuvProjection::<S>::new().project(c)
}

fn ycbcr<S: LumaCoefficients>(c: LinearRgba) -> WithAlpha<YCbCr> {
    YCbCrProjection::<S>::new().project(c)
}

/// Convert one sRGB color into `space`.
///
/// `standard` only affects [`Space::Yuv`] and [`Space::Ycbcr`].
pub fn convert(color: Rgba32, space: Space, standard: Standard) -> Coordinates {
    let linear: LinearRgba = SrgbCodec.decode(color);
    let alpha = linear.a;

    let (channels, standard) = match space {
        Space::Lab => {
            let lab: Lab = LabProjection.project(linear);
            (vec![("L", lab.l), ("a", lab.a), ("b", lab.b)], None)
        }
        Space::Din99 => {
            let din: Din99 = Chain::<_, _, Lab>::new(LabProjection, Din99Projection).project(linear);
            (vec![("L99", din.l), ("a99", din.a), ("b99", din.b)], None)
        }
        Space::Oklab => {
            let ok: OklabA = OklabCodec.decode(color);
            let ok: Oklab = ok.lab();
            (vec![("L", ok.l), ("a", ok.a), ("b", ok.b)], None)
        }
        Space::Yuv => {
            let k = match standard {
                Standard::Bt601 => yuv::<Bt601>(linear),
                Standard::Bt709 => yuv::<Bt709>(linear),
                Standard::Bt2020 => yuv::<Bt2020>(linear),
            };
            let c = k.color;
            (vec![("Y", c.y), ("U", c.u), ("V", c.v)], Some(standard))
        }
        Space::Ycbcr => {
            let k = match standard {
                Standard::Bt601 => ycbcr::<Bt601>(linear),
                Standard::Bt709 => ycbcr::<Bt709>(linear),
                Standard::Bt2020 => ycbcr::<Bt2020>(linear),
            };
            let c = k.color;
            (vec![("Y", c.y), ("Cb", c.cb), ("Cr", c.cr)], Some(standard))
        }
    };

    Coordinates {
        space,
        standard,
        channels,
        alpha,
    }
}
