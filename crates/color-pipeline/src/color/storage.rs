//! Storage pixel formats
//!
//! Storage pixels are the compact, byte-per-channel values held in image
//! buffers. They carry no colorimetric meaning on their own: a decode unit
//! decides whether the bytes are sRGB-encoded, linear, or something else.

use std::fmt;
use std::str::FromStr;

use super::error::ParseColorError;

/// A 3-channel 8-bit pixel in R, G, B order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb24 {
    /// Red channel
    pub r: u8,
    /// Green channel
    pub g: u8,
    /// Blue channel
    pub b: u8,
}

impl Rgb24 {
    /// Create a pixel from channel bytes.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Create a pixel from a byte array `[R, G, B]`.
    ///
    /// # Example
    /// ```
    /// use color_pipeline::Rgb24;
    /// let white = Rgb24::from_bytes([255, 255, 255]);
    /// assert_eq!(white.r, 255);
    /// ```
    #[inline]
    pub const fn from_bytes(bytes: [u8; 3]) -> Self {
        Self::new(bytes[0], bytes[1], bytes[2])
    }

    /// Convert to a byte array `[R, G, B]`.
    #[inline]
    pub const fn to_bytes(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

/// A 4-channel 8-bit pixel in R, G, B, A order with straight alpha.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgba32 {
    /// Red channel
    pub r: u8,
    /// Green channel
    pub g: u8,
    /// Blue channel
    pub b: u8,
    /// Alpha channel (straight, 255 = opaque)
    pub a: u8,
}

impl Rgba32 {
    /// Create a pixel from channel bytes.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create a pixel from a byte array `[R, G, B, A]`.
    #[inline]
    pub const fn from_bytes(bytes: [u8; 4]) -> Self {
        Self::new(bytes[0], bytes[1], bytes[2], bytes[3])
    }

    /// Convert to a byte array `[R, G, B, A]`.
    #[inline]
    pub const fn to_bytes(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Color channels without alpha.
    #[inline]
    pub const fn rgb(self) -> Rgb24 {
        Rgb24::new(self.r, self.g, self.b)
    }
}

impl Default for Rgba32 {
    fn default() -> Self {
        Self::new(0, 0, 0, 255)
    }
}

impl From<Rgb24> for Rgba32 {
    fn from(rgb: Rgb24) -> Self {
        Self::new(rgb.r, rgb.g, rgb.b, 255)
    }
}

/// A 4-channel 8-bit pixel in B, G, R, A order with straight alpha.
///
/// This is the in-memory layout used by many windowing and GPU APIs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Bgra32 {
    /// Blue channel
    pub b: u8,
    /// Green channel
    pub g: u8,
    /// Red channel
    pub r: u8,
    /// Alpha channel (straight, 255 = opaque)
    pub a: u8,
}

impl Bgra32 {
    /// Create a pixel from channel bytes, in memory order.
    #[inline]
    pub const fn new(b: u8, g: u8, r: u8, a: u8) -> Self {
        Self { b, g, r, a }
    }

    /// Create a pixel from a byte array `[B, G, R, A]`.
    #[inline]
    pub const fn from_bytes(bytes: [u8; 4]) -> Self {
        Self::new(bytes[0], bytes[1], bytes[2], bytes[3])
    }

    /// Convert to a byte array `[B, G, R, A]`.
    #[inline]
    pub const fn to_bytes(self) -> [u8; 4] {
        [self.b, self.g, self.r, self.a]
    }
}

impl From<Rgba32> for Bgra32 {
    fn from(p: Rgba32) -> Self {
        Self::new(p.b, p.g, p.r, p.a)
    }
}

impl From<Bgra32> for Rgba32 {
    fn from(p: Bgra32) -> Self {
        Self::new(p.r, p.g, p.b, p.a)
    }
}

/// A 4-channel 8-bit pixel in C, M, Y, K order (ink coverage, 255 = full).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Cmyk32 {
    /// Cyan coverage
    pub c: u8,
    /// Magenta coverage
    pub m: u8,
    /// Yellow coverage
    pub y: u8,
    /// Key (black) coverage
    pub k: u8,
}

impl Cmyk32 {
    /// Create a pixel from channel bytes.
    #[inline]
    pub const fn new(c: u8, m: u8, y: u8, k: u8) -> Self {
        Self { c, m, y, k }
    }

    /// Convert to a byte array `[C, M, Y, K]`.
    #[inline]
    pub const fn to_bytes(self) -> [u8; 4] {
        [self.c, self.m, self.y, self.k]
    }
}

/// Parse 3, 4, 6 or 8 hex digits into up to four channel bytes.
///
/// Shorthand digits are expanded by multiplying by 17 (0xF -> 0xFF).
fn parse_hex_channels(
    s: &str,
    allowed: &[usize],
    expected: &'static str,
) -> Result<Vec<u8>, ParseColorError> {
    let s = s.trim();
    let s = s.strip_prefix('#').unwrap_or(s);

    // Byte-slicing below assumes ASCII
    if !s.is_ascii() || !allowed.contains(&s.len()) {
        return Err(ParseColorError::InvalidLength {
            len: s.chars().count(),
            expected,
        });
    }

    let shorthand = s.len() <= 4;
    let width = if shorthand { 1 } else { 2 };
    let mut channels = Vec::with_capacity(4);
    for start in (0..s.len()).step_by(width) {
        let value = u8::from_str_radix(&s[start..start + width], 16)?;
        channels.push(if shorthand { value * 17 } else { value });
    }
    Ok(channels)
}

impl FromStr for Rgb24 {
    type Err = ParseColorError;

    /// Parse a pixel from `#RRGGBB` or `#RGB` (the `#` is optional).
    ///
    /// Parsing is case-insensitive. Leading and trailing whitespace is trimmed.
    ///
    /// # Examples
    ///
    /// ```
    /// use color_pipeline::Rgb24;
    ///
    /// let red: Rgb24 = "#F00".parse().unwrap();
    /// assert_eq!(red, Rgb24::new(255, 0, 0));
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let c = parse_hex_channels(s, &[3, 6], "3 or 6")?;
        Ok(Self::new(c[0], c[1], c[2]))
    }
}

impl FromStr for Rgba32 {
    type Err = ParseColorError;

    /// Parse a pixel from `#RRGGBBAA`, `#RGBA`, `#RRGGBB` or `#RGB`.
    ///
    /// Forms without an alpha digit are opaque.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let c = parse_hex_channels(s, &[3, 4, 6, 8], "3, 4, 6 or 8")?;
        let a = c.get(3).copied().unwrap_or(255);
        Ok(Self::new(c[0], c[1], c[2], a))
    }
}

impl fmt::Display for Rgb24 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl fmt::Display for Rgba32 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "#{:02x}{:02x}{:02x}{:02x}",
            self.r, self.g, self.b, self.a
        )
    }
}
