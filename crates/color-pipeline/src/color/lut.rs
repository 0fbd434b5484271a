//! Fixed-point sRGB gamma lookup tables
//!
//! Linear values are carried as 16.16 fixed point, so `1.0` is
//! [`FIXED_ONE`] (65536). Two tables are built on first use and never
//! change afterwards:
//!
//! - **expansion**: 256 entries, sRGB byte -> fixed-point linear
//! - **compression**: 4096 entries, indexed by the top 12 bits of the
//!   16-bit linear fraction -> sRGB byte
//!
//! The transfer function itself (IEC 61966-2-1) is only evaluated while the
//! tables are built. Runtime lookups are a clamp, a shift and an index.

use std::sync::OnceLock;

/// Fixed-point representation of linear `1.0`.
pub const FIXED_ONE: i32 = 1 << 16;

/// Number of index bits used by the compression table.
const COMPRESS_BITS: u32 = 12;

/// Shift from a 16-bit fraction down to a compression table index.
const COMPRESS_SHIFT: u32 = 16 - COMPRESS_BITS;

/// Number of compression table entries.
pub const COMPRESS_ENTRIES: usize = 1 << COMPRESS_BITS;

/// The two gamma tables.
#[derive(Debug)]
pub struct GammaTables {
    /// sRGB byte -> 16.16 fixed-point linear light
    pub expand: [u32; 256],
    /// Linear bucket (top 12 fraction bits) -> sRGB byte
    pub compress: [u8; COMPRESS_ENTRIES],
}

static TABLES: OnceLock<GammaTables> = OnceLock::new();

/// IEC 61966-2-1 exact formula: sRGB to linear
fn srgb_to_linear_exact(srgb: f64) -> f64 {
    if srgb <= 0.04045 {
        srgb / 12.92
    } else {
        ((srgb + 0.055) / 1.055).powf(2.4)
    }
}

/// IEC 61966-2-1 exact formula: linear to sRGB
fn linear_to_srgb_exact(linear: f64) -> f64 {
    if linear <= 0.0031308 {
        linear * 12.92
    } else {
        1.055 * linear.powf(1.0 / 2.4) - 0.055
    }
}

fn build() -> GammaTables {
    let mut expand = [0u32; 256];
    for (byte, slot) in expand.iter_mut().enumerate() {
        let linear = srgb_to_linear_exact(byte as f64 / 255.0);
        *slot = (linear * FIXED_ONE as f64 + 0.5) as u32;
    }

    // Each bucket maps to the sRGB byte of its midpoint.
    let mut compress = [0u8; COMPRESS_ENTRIES];
    for (index, slot) in compress.iter_mut().enumerate() {
        let linear = (index as f64 + 0.5) / COMPRESS_ENTRIES as f64;
        let srgb = linear_to_srgb_exact(linear);
        *slot = (srgb * 255.0 + 0.5).clamp(0.0, 255.0) as u8;
    }

    tracing::debug!(
        expand_entries = expand.len(),
        compress_entries = compress.len(),
        "Built sRGB gamma tables"
    );

    GammaTables { expand, compress }
}

/// Shared gamma tables, built exactly once on first access.
#[inline]
pub fn tables() -> &'static GammaTables {
    TABLES.get_or_init(build)
}

/// Gamma-expand an sRGB byte to 16.16 fixed-point linear light.
///
/// `0` maps to `0` and `255` maps to [`FIXED_ONE`].
#[inline]
pub fn expand(byte: u8) -> u32 {
    tables().expand[byte as usize]
}

/// Gamma-compress a 16.16 fixed-point linear value to an sRGB byte.
///
/// Values at or below zero give `0`; values at or above [`FIXED_ONE`] give `255`.
#[inline]
pub fn compress(fixed: i32) -> u8 {
    let index = (fixed.clamp(0, FIXED_ONE - 1) >> COMPRESS_SHIFT) as usize;
    tables().compress[index]
}

/// Gamma-expand an sRGB byte to a float in linear light.
#[inline]
pub fn expand_f32(byte: u8) -> f32 {
    expand(byte) as f32 / FIXED_ONE as f32
}

/// Convert a linear float to fixed point, clamping to `0.0..=1.0` first.
#[inline]
pub fn to_fixed(linear: f32) -> i32 {
    (linear.clamp(0.0, 1.0) * FIXED_ONE as f32) as i32
}

/// Gamma-compress a linear float (clamped to `0.0..=1.0`) to an sRGB byte.
#[inline]
pub fn compress_f32(linear: f32) -> u8 {
    compress(to_fixed(linear))
}
