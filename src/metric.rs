//! Runtime metric selection.
//!
//! The pipeline units are generic, so a metric picked on the command line
//! has to be turned into concrete types once. [`MetricKind::dispatch`]
//! does that and hands the monomorphized pipeline to a [`MetricVisitor`];
//! the per-pixel loop never branches on the metric.

use clap::ValueEnum;
use color_pipeline::pipeline::{compare_slices, parallel::par_compare_slices, KeyPipeline};
use color_pipeline::{
    Bt2020, Bt601, Bt709, Chain, Cie76, Cie94, Cie94Textile, Ciede2000, CmcAcceptability,
    CmcPerceptibility, Decode, Din99, Din99Distance, Din99Projection, Distance, Euclidean, Lab,
    LabProjection, LinearRgba, LumaCoefficients, Metric, Oklab, OklabA, OklabCodec,
    OklabProjection, PipelineError, Project, Rgba32, SrgbCodec, WithAlpha, Yuv, YuvProjection,
};
use serde::{Deserialize, Serialize};

use crate::space::Standard;

/// Color-difference formula selectable at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MetricKind {
    /// CIE 1976 ΔE*ab
    Cie76,
    /// CIE 1994, graphic arts weights
    Cie94,
    /// CIE 1994, textile weights
    Cie94Textile,
    /// CIEDE2000
    #[default]
    Ciede2000,
    /// CMC l:c 1:1
    #[value(name = "cmc11")]
    #[serde(rename = "cmc11")]
    Cmc11,
    /// CMC l:c 2:1
    #[value(name = "cmc21")]
    #[serde(rename = "cmc21")]
    Cmc21,
    /// Euclidean ΔE99 in DIN99
    Din99,
    /// Euclidean distance in Oklab
    Oklab,
    /// Euclidean distance in YUV with alpha
    Yuv,
}

/// Receives the concrete pipeline and metric chosen by [`MetricKind::dispatch`].
pub trait MetricVisitor {
    type Output;

    fn visit<D, P, W, K, M>(self, pipeline: KeyPipeline<D, P, W, K>, metric: M) -> Self::Output
    where
        D: Decode<Rgba32, W> + Sync,
        P: Project<W, K> + Sync,
        K: Copy,
        M: Metric<K> + Sync;
}

fn srgb_pipeline<P, K>(projection: P) -> KeyPipeline<SrgbCodec, P, LinearRgba, K> {
    KeyPipeline::new(SrgbCodec, projection)
}

fn yuv_pipeline<S: LumaCoefficients>(
) -> KeyPipeline<SrgbCodec, YuvProjection<S>, LinearRgba, WithAlpha<Yuv>> {
    srgb_pipeline(YuvProjection::<S>::new())
}

impl MetricKind {
    /// Display name as used on the command line.
    pub fn name(self) -> &'static str {
        match self {
            MetricKind::Cie76 => "cie76",
            MetricKind::Cie94 => "cie94",
            MetricKind::Cie94Textile => "cie94-textile",
            MetricKind::Ciede2000 => "ciede2000",
            MetricKind::Cmc11 => "cmc11",
            MetricKind::Cmc21 => "cmc21",
            MetricKind::Din99 => "din99",
            MetricKind::Oklab => "oklab",
            MetricKind::Yuv => "yuv",
        }
    }

    /// Every selectable metric.
    pub fn all() -> &'static [MetricKind] {
        MetricKind::value_variants()
    }

    /// Build the pipeline and metric for `self` and pass them to `visitor`.
    ///
    /// `standard` is only consulted by [`MetricKind::Yuv`].
    pub fn dispatch<V: MetricVisitor>(self, standard: Standard, visitor: V) -> V::Output {
        let lab = || srgb_pipeline::<_, Lab>(LabProjection);
        match self {
            MetricKind::Cie76 => visitor.visit(lab(), Cie76),
            MetricKind::Cie94 => visitor.visit(lab(), Cie94),
            MetricKind::Cie94Textile => visitor.visit(lab(), Cie94Textile),
            MetricKind::Ciede2000 => visitor.visit(lab(), Ciede2000),
            MetricKind::Cmc11 => visitor.visit(lab(), CmcPerceptibility),
            MetricKind::Cmc21 => visitor.visit(lab(), CmcAcceptability),
            MetricKind::Din99 => {
                let via_lab = Chain::<_, _, Lab>::new(LabProjection, Din99Projection);
                visitor.visit(srgb_pipeline::<_, Din99>(via_lab), Din99Distance)
            }
            MetricKind::Oklab => {
                let pipeline =
                    KeyPipeline::<_, _, OklabA, Oklab>::new(OklabCodec, OklabProjection);
                visitor.visit(pipeline, Euclidean)
            }
            MetricKind::Yuv => match standard {
                Standard::Bt601 => visitor.visit(yuv_pipeline::<Bt601>(), Euclidean),
                Standard::Bt709 => visitor.visit(yuv_pipeline::<Bt709>(), Euclidean),
                Standard::Bt2020 => visitor.visit(yuv_pipeline::<Bt2020>(), Euclidean),
            },
        }
    }
}

impl std::fmt::Display for MetricKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Difference between two colors under one metric.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Comparison {
    pub metric: MetricKind,
    /// Unnormalized value (ΔE for the CIE family)
    pub raw: f32,
    /// Normalized to `0.0..=1.0`
    pub distance: f32,
}

struct CompareColors {
    a: Rgba32,
    b: Rgba32,
}

impl MetricVisitor for CompareColors {
    type Output = (f32, Distance);

    fn visit<D, P, W, K, M>(self, pipeline: KeyPipeline<D, P, W, K>, metric: M) -> Self::Output
    where
        D: Decode<Rgba32, W> + Sync,
        P: Project<W, K> + Sync,
        K: Copy,
        M: Metric<K> + Sync,
    {
        let (ka, kb) = (pipeline.key(self.a), pipeline.key(self.b));
        (metric.raw(ka, kb), metric.distance(ka, kb))
    }
}

struct CompareBuffers<'a> {
    a: &'a [Rgba32],
    b: &'a [Rgba32],
    parallel: bool,
}

impl MetricVisitor for CompareBuffers<'_> {
    type Output = Result<Vec<Distance>, PipelineError>;

    fn visit<D, P, W, K, M>(self, pipeline: KeyPipeline<D, P, W, K>, metric: M) -> Self::Output
    where
        D: Decode<Rgba32, W> + Sync,
        P: Project<W, K> + Sync,
        K: Copy,
        M: Metric<K> + Sync,
    {
        if self.parallel {
            par_compare_slices(&pipeline, &metric, self.a, self.b)
        } else {
            compare_slices(&pipeline, &metric, self.a, self.b)
        }
    }
}

/// Compare two colors under `metric`.
pub fn compare_colors(metric: MetricKind, standard: Standard, a: Rgba32, b: Rgba32) -> Comparison {
    let (raw, distance) = metric.dispatch(standard, CompareColors { a, b });
    Comparison {
        metric,
        raw,
        distance: distance.to_f32(),
    }
}

/// Per-pixel distances between two equally sized buffers.
pub fn compare_pixels(
    metric: MetricKind,
    standard: Standard,
    a: &[Rgba32],
    b: &[Rgba32],
    parallel: bool,
) -> Result<Vec<Distance>, PipelineError> {
    tracing::debug!(%metric, parallel, pixels = a.len(), "Comparing buffers");
    metric.dispatch(standard, CompareBuffers { a, b, parallel })
}
