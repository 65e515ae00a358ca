use crate::error::{DecodeError, Result};

/// Largest width or height a decoded tile surface may have
pub const MAX_SURFACE_EXTENT: u32 = 4096;

/// Row-major RGBA8 surface produced by decoding a tile
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileImage {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl TileImage {
    /// Fully transparent surface
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![0u8; width as usize * height as usize * 4],
        }
    }

    /// Transparent surface sized from tile header data, rejecting extents
    /// above [`MAX_SURFACE_EXTENT`]
    pub fn try_new(width: u32, height: u32) -> Result<Self> {
        if width > MAX_SURFACE_EXTENT || height > MAX_SURFACE_EXTENT {
            return Err(DecodeError::SurfaceTooLarge { width, height, max: MAX_SURFACE_EXTENT });
        }
        Ok(Self::new(width, height))
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    pub fn pixels_mut(&mut self) -> &mut [u8] {
        &mut self.pixels
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = (y as usize * self.width as usize + x as usize) * 4;
        let px = &self.pixels[idx..idx + 4];
        Some([px[0], px[1], px[2], px[3]])
    }

    pub fn opaque_pixel_count(&self) -> usize {
        self.pixels.chunks_exact(4).filter(|px| px[3] != 0).count()
    }
}
