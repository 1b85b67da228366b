//! RGBA texture buffer and PNG export

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

/// RGBA texture buffer (4 bytes per pixel, row-major order)
#[derive(Clone)]
pub struct TextureBuffer {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
}

impl TextureBuffer {
    /// Create a buffer initialized to transparent black
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![0u8; (width * height * 4) as usize],
        }
    }

    /// Create a buffer filled with a solid color
    pub fn filled(width: u32, height: u32, color: [u8; 4]) -> Self {
        let mut buffer = Self::new(width, height);
        for chunk in buffer.pixels.chunks_exact_mut(4) {
            chunk.copy_from_slice(&color);
        }
        buffer
    }

    #[inline]
    pub fn get_pixel(&self, x: u32, y: u32) -> [u8; 4] {
        let idx = ((y * self.width + x) * 4) as usize;
        [
            self.pixels[idx],
            self.pixels[idx + 1],
            self.pixels[idx + 2],
            self.pixels[idx + 3],
        ]
    }

    #[inline]
    pub fn set_pixel(&mut self, x: u32, y: u32, color: [u8; 4]) {
        let idx = ((y * self.width + x) * 4) as usize;
        self.pixels[idx..idx + 4].copy_from_slice(&color);
    }

    /// Fill an axis-aligned rectangle (clipped to the buffer)
    pub fn fill_rect(&mut self, x: u32, y: u32, w: u32, h: u32, color: [u8; 4]) {
        for py in y..(y + h).min(self.height) {
            for px in x..(x + w).min(self.width) {
                self.set_pixel(px, py, color);
            }
        }
    }

    /// Add per-channel grain in [-amplitude, amplitude] to the RGB
    /// channels, clamped to the byte range. Alpha is untouched. The same
    /// seed always produces the same grain.
    pub fn grain(&mut self, amplitude: i32, seed: u64) {
        let mut rng = Lcg::new(seed);
        for chunk in self.pixels.chunks_exact_mut(4) {
            let offset = rng.range(-amplitude, amplitude);
            for channel in &mut chunk[..3] {
                *channel = (*channel as i32 + offset).clamp(0, 255) as u8;
            }
        }
    }
}

/// Simple LCG random number generator for reproducibility
pub struct Lcg {
    state: u64,
}

impl Lcg {
    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    fn next(&mut self) -> u64 {
        // LCG parameters (from Numerical Recipes)
        self.state = self
            .state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.state
    }

    /// Uniform value in [lo, hi], inclusive on both ends
    pub fn range(&mut self, lo: i32, hi: i32) -> i32 {
        let span = (hi - lo + 1).max(1) as u64;
        lo + ((self.next() >> 33) % span) as i32
    }
}

/// Write a TextureBuffer to a PNG file
pub fn write_png(texture: &TextureBuffer, path: &Path) -> std::io::Result<()> {
    let file = File::create(path)?;
    let w = BufWriter::new(file);

    let mut encoder = png::Encoder::new(w, texture.width, texture.height);
    encoder.set_color(png::ColorType::Rgba);
    encoder.set_depth(png::BitDepth::Eight);
    encoder.set_compression(png::Compression::Default);

    let mut writer = encoder
        .write_header()
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))?;

    writer
        .write_image_data(&texture.pixels)
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))?;

    Ok(())
}
