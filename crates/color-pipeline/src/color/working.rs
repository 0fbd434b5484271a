//! The uniform shape shared by all working color types.
//!
//! A working color is a handful of labeled `f32` channels plus an optional
//! straight (non-premultiplied) alpha. Channels may leave `0.0..=1.0` while
//! arithmetic is in flight; [`WorkingColor::clamp`] brings them back before
//! encoding.

use std::fmt::Debug;
use std::ops::{Add, Mul, Sub};

/// Floating-point color used for arithmetic.
///
/// Implementors provide channel-wise mapping; the arithmetic used by
/// blending and error diffusion is derived from it. The operator impls
/// (`+`, `-`, `* f32`) touch color channels only and keep the alpha of the
/// left-hand operand.
pub trait WorkingColor:
    Copy
    + Debug
    + PartialEq
    + Send
    + Sync
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<f32, Output = Self>
{
    /// Channel names, in storage order, excluding alpha.
    const LABELS: &'static [&'static str];

    /// Whether the type carries a separate alpha channel.
    const HAS_ALPHA: bool;

    /// Apply `f` to every color channel, keeping alpha.
    fn map_channels(self, f: impl FnMut(f32) -> f32) -> Self;

    /// Combine color channels pairwise, keeping the alpha of `self`.
    fn zip_channels(self, other: Self, f: impl FnMut(f32, f32) -> f32) -> Self;

    /// Straight alpha; `1.0` for types without alpha.
    #[inline]
    fn alpha(&self) -> f32 {
        1.0
    }

    /// Replace alpha. No-op for types without alpha.
    #[inline]
    fn with_alpha(self, _alpha: f32) -> Self {
        self
    }

    /// Bring every channel (alpha included) back into its nominal range.
    fn clamp(self) -> Self;

    /// Linear interpolation towards `other`; `t = 0` gives `self`, `t = 1` gives `other`.
    ///
    /// Alpha is interpolated along with the color channels.
    #[inline]
    fn lerp(self, other: Self, t: f32) -> Self {
        let alpha = self.alpha() + (other.alpha() - self.alpha()) * t;
        self.zip_channels(other, |a, b| a + (b - a) * t)
            .with_alpha(alpha)
    }
}

/// Implement `Add`, `Sub` and `Mul<f32>` for a working color in terms of
/// [`WorkingColor::zip_channels`] and [`WorkingColor::map_channels`].
macro_rules! impl_channel_ops {
    ($ty:ty) => {
        impl ::std::ops::Add for $ty {
            type Output = Self;

            #[inline]
            fn add(self, rhs: Self) -> Self {
                $crate::color::WorkingColor::zip_channels(self, rhs, |a, b| a + b)
            }
        }

        impl ::std::ops::Sub for $ty {
            type Output = Self;

            #[inline]
            fn sub(self, rhs: Self) -> Self {
                $crate::color::WorkingColor::zip_channels(self, rhs, |a, b| a - b)
            }
        }

        impl ::std::ops::Mul<f32> for $ty {
            type Output = Self;

            #[inline]
            fn mul(self, factor: f32) -> Self {
                $crate::color::WorkingColor::map_channels(self, |c| c * factor)
            }
        }
    };
}

pub(crate) use impl_channel_ops;
