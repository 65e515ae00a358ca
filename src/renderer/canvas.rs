use tilegfx::TileImage;

use super::target::{RenderTarget, Tint};
#[cfg(feature = "png")]
use crate::error::{Error, Result};

/// Software RGBA render target
#[derive(Debug, Clone)]
pub struct Canvas {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl Canvas {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![0u8; width as usize * height as usize * 4],
        }
    }

    pub fn fill(&mut self, color: [u8; 4]) {
        for px in self.pixels.chunks_exact_mut(4) {
            px.copy_from_slice(&color);
        }
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

    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = (y as usize * self.width as usize + x as usize) * 4;
        let px = &self.pixels[idx..idx + 4];
        Some([px[0], px[1], px[2], px[3]])
    }

    #[cfg(feature = "png")]
    pub fn to_rgba_image(&self) -> Result<image::RgbaImage> {
        image::RgbaImage::from_raw(self.width, self.height, self.pixels.clone())
            .ok_or_else(|| Error::Io("canvas buffer does not match its dimensions".into()))
    }

    #[cfg(feature = "png")]
    pub fn save_png(&self, path: &std::path::Path) -> Result<()> {
        self.to_rgba_image()?
            .save(path)
            .map_err(|e| Error::Io(format!("{}: {e}", path.display())))
    }
}

fn scale(v: u8, by: u8) -> u32 {
    v as u32 * by as u32 / 255
}

impl RenderTarget for Canvas {
    /// Source-over blend with clipping; fully transparent source pixels are skipped
    fn draw_image(&mut self, image: &TileImage, x: i32, y: i32, tint: Tint) {
        let src = image.pixels();
        let src_w = image.width() as i64;

        let x0 = (x as i64).max(0);
        let y0 = (y as i64).max(0);
        let x1 = (x as i64 + src_w).min(self.width as i64);
        let y1 = (y as i64 + image.height() as i64).min(self.height as i64);

        for dy in y0..y1 {
            for dx in x0..x1 {
                let sx = dx - x as i64;
                let sy = dy - y as i64;
                let si = ((sy * src_w + sx) * 4) as usize;
                let sa = scale(src[si + 3], tint.a);
                if sa == 0 {
                    continue;
                }
                let sr = scale(src[si], tint.r);
                let sg = scale(src[si + 1], tint.g);
                let sb = scale(src[si + 2], tint.b);

                let di = ((dy * self.width as i64 + dx) * 4) as usize;
                let dst = &mut self.pixels[di..di + 4];
                let inv = 255 - sa;
                dst[0] = ((sr * sa + dst[0] as u32 * inv + 127) / 255) as u8;
                dst[1] = ((sg * sa + dst[1] as u32 * inv + 127) / 255) as u8;
                dst[2] = ((sb * sa + dst[2] as u32 * inv + 127) / 255) as u8;
                dst[3] = (sa + dst[3] as u32 * inv / 255) as u8;
            }
        }
    }
}
