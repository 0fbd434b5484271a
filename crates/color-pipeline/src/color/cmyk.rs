//! CMYK working color

use super::working::{impl_channel_ops, WorkingColor};

/// Ink coverage in C, M, Y, K order with straight alpha.
///
/// Coverage is `0.0` (no ink) to `1.0` (full ink). No ink model is implied;
/// see [`CmykProjection`](crate::CmykProjection) for the naive RGB mapping.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CmykA {
    /// Cyan coverage
    pub c: f32,
    /// Magenta coverage
    pub m: f32,
    /// Yellow coverage
    pub y: f32,
    /// Key (black) coverage
    pub k: f32,
    /// Straight alpha (0.0 = transparent, 1.0 = opaque)
    pub alpha: f32,
}

impl CmykA {
    /// Create a new color from ink coverage and straight alpha.
    #[inline]
    pub const fn new(c: f32, m: f32, y: f32, k: f32, alpha: f32) -> Self {
        Self { c, m, y, k, alpha }
    }
}

impl Default for CmykA {
    fn default() -> Self {
        Self::new(0.0, 0.0, 0.0, 0.0, 1.0)
    }
}

impl WorkingColor for CmykA {
    const LABELS: &'static [&'static str] = &["C", "M", "Y", "K"];
    const HAS_ALPHA: bool = true;

    #[inline]
    fn map_channels(self, mut f: impl FnMut(f32) -> f32) -> Self {
        Self::new(f(self.c), f(self.m), f(self.y), f(self.k), self.alpha)
    }

    #[inline]
    fn zip_channels(self, other: Self, mut f: impl FnMut(f32, f32) -> f32) -> Self {
        Self::new(
            f(self.c, other.c),
            f(self.m, other.m),
            f(self.y, other.y),
            f(self.k, other.k),
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

    #[inline]
    fn clamp(self) -> Self {
        self.map_channels(|c| c.clamp(0.0, 1.0))
            .with_alpha(self.alpha.clamp(0.0, 1.0))
    }
}

impl_channel_ops!(CmykA);
