//! Linear RGB <-> Oklab

use super::Project;
use crate::color::{linear_to_oklab, oklab_to_linear, LinearRgb, LinearRgba, Oklab, OklabA, WithAlpha};

/// Linear RGB <-> Oklab.
///
/// Linear -> LMS (3×3) -> real cube root -> Lab (3×3), and the same steps
/// reversed with a cube. Negative LMS values from out-of-gamut input keep
/// their sign through the cube root.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OklabProjection;

impl Project<LinearRgb, Oklab> for OklabProjection {
    #[inline]
    fn project(&self, c: LinearRgb) -> Oklab {
        let [l, a, b] = linear_to_oklab(c.to_array());
        Oklab::new(l, a, b)
    }
}

impl Project<Oklab, LinearRgb> for OklabProjection {
    #[inline]
    fn project(&self, c: Oklab) -> LinearRgb {
        LinearRgb::from_array(oklab_to_linear([c.l, c.a, c.b]))
    }
}

impl Project<LinearRgba, OklabA> for OklabProjection {
    #[inline]
    fn project(&self, c: LinearRgba) -> OklabA {
        let lab: Oklab = self.project(c.rgb());
        lab.with_alpha(c.a)
    }
}

impl Project<OklabA, LinearRgba> for OklabProjection {
    #[inline]
    fn project(&self, c: OklabA) -> LinearRgba {
        let rgb: LinearRgb = self.project(c.lab());
        rgb.rgba(c.alpha)
    }
}

impl Project<OklabA, Oklab> for OklabProjection {
    #[inline]
    fn project(&self, c: OklabA) -> Oklab {
        c.lab()
    }
}

impl Project<OklabA, WithAlpha<Oklab>> for OklabProjection {
    #[inline]
    fn project(&self, c: OklabA) -> WithAlpha<Oklab> {
        WithAlpha::new(c.lab(), c.alpha)
    }
}

impl Project<LinearRgba, WithAlpha<Oklab>> for OklabProjection {
    #[inline]
    fn project(&self, c: LinearRgba) -> WithAlpha<Oklab> {
        WithAlpha::new(self.project(c.rgb()), c.a)
    }
}
