//! PNG reading and writing as straight-alpha `Rgba32` buffers.

use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use color_pipeline::Rgba32;

use crate::error::DeltaeError;

/// An 8-bit RGBA image held in memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RgbaImage {
    pub width: u32,
    pub height: u32,
    /// Row-major, `width * height` entries
    pub pixels: Vec<Rgba32>,
}

impl RgbaImage {
    /// A `width`x`height` image filled with `fill`.
    pub fn new(width: u32, height: u32, fill: Rgba32) -> Self {
        Self {
            width,
            height,
            pixels: vec![fill; width as usize * height as usize],
        }
    }

    /// Error unless `other` has the same dimensions.
    pub fn check_same_size(&self, other: &RgbaImage) -> Result<(), DeltaeError> {
        if (self.width, self.height) != (other.width, other.height) {
            return Err(DeltaeError::SizeMismatch {
                left_width: self.width,
                left_height: self.height,
                right_width: other.width,
                right_height: other.height,
            });
        }
        Ok(())
    }
}

/// Decode a PNG stream.
///
/// Palette, grayscale and 16-bit images are normalized to 8-bit RGBA;
/// images without alpha are opaque.
pub fn decode_png<R: Read>(reader: R) -> Result<RgbaImage, DeltaeError> {
    let mut decoder = png::Decoder::new(reader);
    decoder.set_transformations(png::Transformations::normalize_to_color8());
    let mut reader = decoder.read_info()?;
    let mut buf = vec![0; reader.output_buffer_size()];
    let info = reader.next_frame(&mut buf)?;
    let bytes = &buf[..info.buffer_size()];

    if info.bit_depth != png::BitDepth::Eight {
        return Err(DeltaeError::UnsupportedPng(format!(
            "bit depth {:?} after expansion",
            info.bit_depth
        )));
    }

    let pixels: Vec<Rgba32> = match info.color_type {
        png::ColorType::Rgba => bytes
            .chunks_exact(4)
            .map(|c| Rgba32::new(c[0], c[1], c[2], c[3]))
            .collect(),
        png::ColorType::Rgb => bytes
            .chunks_exact(3)
            .map(|c| Rgba32::new(c[0], c[1], c[2], 255))
            .collect(),
        png::ColorType::GrayscaleAlpha => bytes
            .chunks_exact(2)
            .map(|c| Rgba32::new(c[0], c[0], c[0], c[1]))
            .collect(),
        png::ColorType::Grayscale => bytes.iter().map(|&v| Rgba32::new(v, v, v, 255)).collect(),
        other => {
            return Err(DeltaeError::UnsupportedPng(format!(
                "color type {other:?}"
            )))
        }
    };

    tracing::debug!(
        width = info.width,
        height = info.height,
        color_type = ?info.color_type,
        "Decoded PNG"
    );

    Ok(RgbaImage {
        width: info.width,
        height: info.height,
        pixels,
    })
}

/// Encode an image as 8-bit RGBA PNG.
pub fn encode_png<W: Write>(writer: W, image: &RgbaImage) -> Result<(), DeltaeError> {
    let data: Vec<u8> = image.pixels.iter().flat_map(|p| p.to_bytes()).collect();

    let mut encoder = png::Encoder::new(writer, image.width, image.height);
    encoder.set_color(png::ColorType::Rgba);
    encoder.set_depth(png::BitDepth::Eight);
    encoder.set_compression(png::Compression::Fast);
    let mut writer = encoder.write_header()?;
    writer.write_image_data(&data)?;
    writer.finish()?;
    Ok(())
}

/// Read a PNG file.
pub fn read_png(path: &Path) -> Result<RgbaImage, DeltaeError> {
    let file = File::open(path)?;
    decode_png(BufReader::new(file))
}

/// Write a PNG file, replacing any existing file.
pub fn write_png(path: &Path, image: &RgbaImage) -> Result<(), DeltaeError> {
    let file = File::create(path)?;
    encode_png(BufWriter::new(file), image)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn encode_raw(width: u32, height: u32, color: png::ColorType, data: &[u8]) -> Vec<u8> {
        let mut buf = Vec::new();
        {
            let mut encoder = png::Encoder::new(&mut buf, width, height);
            encoder.set_color(color);
            encoder.set_depth(png::BitDepth::Eight);
            let mut writer = encoder.write_header().unwrap();
            writer.write_image_data(data).unwrap();
        }
        buf
    }

    #[test]
    fn test_round_trip_rgba() {
        let mut image = RgbaImage::new(3, 2, Rgba32::new(1, 2, 3, 4));
        image.pixels[4] = Rgba32::new(250, 0, 128, 255);

        let mut buf = Vec::new();
        encode_png(&mut buf, &image).unwrap();
        let back = decode_png(Cursor::new(buf)).unwrap();
        assert_eq!(back, image);
    }

    #[test]
    fn test_rgb_is_opaque() {
        let png = encode_raw(2, 1, png::ColorType::Rgb, &[10, 20, 30, 40, 50, 60]);
        let image = decode_png(Cursor::new(png)).unwrap();
        assert_eq!(
            image.pixels,
            vec![Rgba32::new(10, 20, 30, 255), Rgba32::new(40, 50, 60, 255)]
        );
    }

    #[test]
    fn test_grayscale_alpha_expands() {
        let png = encode_raw(1, 1, png::ColorType::GrayscaleAlpha, &[77, 128]);
        let image = decode_png(Cursor::new(png)).unwrap();
        assert_eq!(image.pixels, vec![Rgba32::new(77, 77, 77, 128)]);
    }

    #[test]
    fn test_garbage_is_decode_error() {
        let err = decode_png(Cursor::new(b"not a png".to_vec())).unwrap_err();
        assert!(matches!(err, DeltaeError::PngDecode(_)));
    }

    #[test]
    fn test_size_check() {
        let a = RgbaImage::new(2, 2, Rgba32::default());
        let b = RgbaImage::new(2, 3, Rgba32::default());
        assert!(a.check_same_size(&a.clone()).is_ok());
        assert!(matches!(
            a.check_same_size(&b),
            Err(DeltaeError::SizeMismatch { right_height: 3, .. })
        ));
    }
}
