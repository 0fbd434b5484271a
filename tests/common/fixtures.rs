//! Test fixtures and constants.

use std::path::PathBuf;

use color_pipeline::Rgba32;
use deltae::image::{write_png, RgbaImage};
use tempfile::TempDir;

/// Colors used across the image tests
pub mod colors {
    use color_pipeline::Rgba32;

    pub const GRAY: Rgba32 = Rgba32::new(128, 128, 128, 255);

    /// One sRGB step above `GRAY` in red; ΔE00 well below 1
    pub const GRAY_NUDGED: Rgba32 = Rgba32::new(129, 128, 128, 255);

    pub const RED: Rgba32 = Rgba32::new(255, 0, 0, 255);
}

/// A temporary directory holding PNG fixtures.
pub struct Workspace {
    dir: TempDir,
}

impl Workspace {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp dir"),
        }
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    /// Write `image` as `name` and return its path.
    pub fn png(&self, name: &str, image: &RgbaImage) -> PathBuf {
        let path = self.path(name);
        write_png(&path, image).expect("Failed to write fixture PNG");
        path
    }

    /// Write a text file and return its path.
    pub fn file(&self, name: &str, content: &str) -> PathBuf {
        let path = self.path(name);
        std::fs::write(&path, content).expect("Failed to write fixture file");
        path
    }
}

/// A horizontal gradient from black to white.
pub fn gradient(width: u32, height: u32) -> RgbaImage {
    let mut image = RgbaImage::new(width, height, Rgba32::default());
    for (i, p) in image.pixels.iter_mut().enumerate() {
        let x = (i as u32 % width) * 255 / (width - 1).max(1);
        *p = Rgba32::new(x as u8, x as u8, x as u8, 255);
    }
    image
}

/// `base` with the pixels at `indices` replaced by `color`.
pub fn with_pixels(base: &RgbaImage, indices: &[usize], color: Rgba32) -> RgbaImage {
    let mut image = base.clone();
    for &i in indices {
        image.pixels[i] = color;
    }
    image
}
