//! Naive RGB <-> CMYK

use super::Project;
use crate::color::{CmykA, LinearRgba};

/// Device-independent RGB <-> CMYK with full black generation.
///
/// `K = 1 - max(R, G, B)`, and the remaining inks cover what black does
/// not. There is no ink or paper model; this exists so CMYK buffers can
/// share pipelines with RGB ones. Inputs are clamped to `0.0..=1.0` first.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CmykProjection;

impl Project<LinearRgba, CmykA> for CmykProjection {
    #[inline]
    fn project(&self, c: LinearRgba) -> CmykA {
        let r = c.r.clamp(0.0, 1.0);
        let g = c.g.clamp(0.0, 1.0);
        let b = c.b.clamp(0.0, 1.0);
        let max = r.max(g).max(b);
        let k = 1.0 - max;
        if max <= 0.0 {
            return CmykA::new(0.0, 0.0, 0.0, 1.0, c.a);
        }
        CmykA::new((max - r) / max, (max - g) / max, (max - b) / max, k, c.a)
    }
}

impl Project<CmykA, LinearRgba> for CmykProjection {
    #[inline]
    fn project(&self, c: CmykA) -> LinearRgba {
        let white = 1.0 - c.k;
        LinearRgba::new(
            (1.0 - c.c) * white,
            (1.0 - c.m) * white,
            (1.0 - c.y) * white,
            c.alpha,
        )
    }
}
