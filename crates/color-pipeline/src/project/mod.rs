//! Projection units: color-space transforms between working and key colors.
//!
//! A projection maps one color representation to another without touching
//! storage. Forward projections (working -> key) feed metrics; a few spaces
//! also project back (key -> working), which is how round trips are tested.
//!
//! | Unit | From | To |
//! |------|------|----|
//! | [`IdentityProjection`] | any `W` | `W` |
//! | [`YuvProjection<S>`] | [`LinearRgb`](crate::LinearRgb) / [`LinearRgba`](crate::LinearRgba) | [`Yuv`](crate::Yuv) / [`WithAlpha<Yuv>`](crate::WithAlpha), and back |
//! | [`YCbCrProjection<S>`] | same | [`YCbCr`](crate::YCbCr) / [`WithAlpha<YCbCr>`](crate::WithAlpha), and back |
//! | [`OklabProjection`] | linear RGB(A) | [`Oklab`](crate::Oklab) / [`OklabA`](crate::OklabA), and back |
//! | [`LabProjection`] | linear RGB(A) | [`Lab`](crate::Lab), and back |
//! | [`Din99Projection`] | [`Lab`](crate::Lab) or linear RGB(A) | [`Din99`](crate::Din99) |
//! | [`CmykProjection`] | [`LinearRgba`](crate::LinearRgba) | [`CmykA`](crate::CmykA), and back |
//!
//! `S` is one of [`Bt601`], [`Bt709`] or [`Bt2020`].
//!
//! # Example
//!
//! ```
//! use color_pipeline::{Bt709, LinearRgb, Project, Yuv, YuvProjection};
//!
//! let yuv: Yuv = YuvProjection::<Bt709>::new().project(LinearRgb::new(1.0, 1.0, 1.0));
//! assert!((yuv.y - 1.0).abs() < 1e-6);
//! assert!(yuv.u.abs() < 1e-6 && yuv.v.abs() < 1e-6);
//! ```

mod cmyk;
mod lab;
mod oklab;
mod yuv;

use std::marker::PhantomData;

pub use cmyk::CmykProjection;
pub use lab::{Din99Projection, LabProjection};
pub use oklab::OklabProjection;
pub use yuv::{Bt2020, Bt601, Bt709, LumaCoefficients, YCbCrProjection, YuvProjection};

/// Transform a color from representation `F` to representation `T`.
pub trait Project<F, T> {
    /// Project one color.
    fn project(&self, color: F) -> T;
}

/// Returns its input unchanged.
///
/// Lets a pipeline that is generic over a projection run directly in its
/// working space.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IdentityProjection;

impl<W: Copy> Project<W, W> for IdentityProjection {
    #[inline]
    fn project(&self, color: W) -> W {
        color
    }
}

/// Two projections applied in sequence through the intermediate type `M`.
///
/// # Example
///
/// ```
/// use color_pipeline::{Chain, Din99, Din99Projection, Lab, LabProjection, LinearRgb, Project};
///
/// let via_lab = Chain::<_, _, Lab>::new(LabProjection, Din99Projection);
/// let din: Din99 = via_lab.project(LinearRgb::new(0.2, 0.4, 0.6));
/// assert!(din.l > 0.0);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Chain<A, B, M> {
    first: A,
    second: B,
    _via: PhantomData<fn() -> M>,
}

impl<A, B, M> Chain<A, B, M> {
    /// Apply `first`, then `second`.
    pub const fn new(first: A, second: B) -> Self {
        Self {
            first,
            second,
            _via: PhantomData,
        }
    }
}

impl<F, M, T, A, B> Project<F, T> for Chain<A, B, M>
where
    A: Project<F, M>,
    B: Project<M, T>,
{
    #[inline]
    fn project(&self, color: F) -> T {
        self.second.project(self.first.project(color))
    }
}
