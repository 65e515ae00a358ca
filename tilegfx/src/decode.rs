use crate::error::{DecodeError, Result};
use crate::image::TileImage;
use crate::palette::{Palette, Rgb};
use crate::tile::{Block, BlockFormat};

/// Row start offsets of the isometric diamond
pub const ISO_XJUMP: [i32; 15] = [14, 12, 10, 8, 6, 4, 2, 0, 2, 4, 6, 8, 10, 12, 14];
/// Pixels per row of the isometric diamond
pub const ISO_NBPIX: [i32; 15] = [4, 8, 12, 16, 20, 24, 28, 32, 28, 24, 20, 16, 12, 8, 4];
/// Encoded bytes consumed by one isometric block
pub const ISO_BLOCK_PIXELS: usize = 256;

/// Decode `blocks` into an owned surface. The surface width is the row stride.
pub fn decode_blocks(blocks: &[Block], palette: &Palette, y_offset: i32, image: &mut TileImage) -> Result<()> {
    let width = image.width();
    decode_into(blocks, palette, width, y_offset, image.pixels_mut())
}

/// Decode `blocks` into a raw RGBA buffer with row stride `dest_width`.
///
/// Palette index 0 leaves the destination pixel untouched; any other index
/// is written as an opaque color. Blocks are applied in order, so a later
/// block overwrites opaque pixels of an earlier one.
pub fn decode_into(
    blocks: &[Block],
    palette: &Palette,
    dest_width: u32,
    y_offset: i32,
    pixels: &mut [u8],
) -> Result<()> {
    let mut target = PixelTarget::new(pixels, dest_width);
    for block in blocks {
        match block.format {
            BlockFormat::Isometric => decode_isometric(block, palette, y_offset, &mut target)?,
            BlockFormat::Rle => decode_rle(block, palette, y_offset, &mut target)?,
        }
    }
    Ok(())
}

fn decode_isometric(block: &Block, palette: &Palette, y_offset: i32, target: &mut PixelTarget) -> Result<()> {
    let data = &block.encoded_data;
    if data.len() < ISO_BLOCK_PIXELS {
        return Err(DecodeError::Truncated { need: ISO_BLOCK_PIXELS, have: data.len() });
    }

    let base_x = block.x as i32;
    let base_y = block.y as i32 + y_offset;
    let mut idx = 0;
    for (row, (&x_start, &count)) in ISO_XJUMP.iter().zip(ISO_NBPIX.iter()).enumerate() {
        for col in 0..count {
            let color_index = data[idx];
            idx += 1;
            if color_index != 0 {
                target.put(base_x + x_start + col, base_y + row as i32, palette.color(color_index))?;
            }
        }
    }
    Ok(())
}

fn decode_rle(block: &Block, palette: &Palette, y_offset: i32, target: &mut PixelTarget) -> Result<()> {
    let data = &block.encoded_data;
    let base_x = block.x as i32;
    let base_y = block.y as i32 + y_offset;

    let mut remaining = block.length;
    let mut idx = 0usize;
    let mut x = 0i32;
    let mut y = 0i32;

    while remaining > 0 {
        let pair = data
            .get(idx..idx + 2)
            .ok_or(DecodeError::Truncated { need: idx + 2, have: data.len() })?;
        let (skip, count) = (pair[0], pair[1]);
        idx += 2;
        remaining -= 2;

        if skip == 0 && count == 0 {
            x = 0;
            y += 1;
            continue;
        }

        x += skip as i32;
        remaining -= count as i32;

        let end = idx + count as usize;
        let run = data
            .get(idx..end)
            .ok_or(DecodeError::Truncated { need: end, have: data.len() })?;
        for &color_index in run {
            if color_index != 0 {
                target.put(base_x + x, base_y + y, palette.color(color_index))?;
            }
            x += 1;
        }
        idx = end;
    }
    Ok(())
}

struct PixelTarget<'a> {
    pixels: &'a mut [u8],
    width: u32,
    height: u32,
}

impl<'a> PixelTarget<'a> {
    fn new(pixels: &'a mut [u8], width: u32) -> Self {
        let height = if width == 0 { 0 } else { (pixels.len() / (width as usize * 4)) as u32 };
        Self { pixels, width, height }
    }

    fn put(&mut self, x: i32, y: i32, color: Rgb) -> Result<()> {
        if x < 0 || y < 0 || x as u32 >= self.width || y as u32 >= self.height {
            return Err(DecodeError::BoundsViolation { x, y, width: self.width, height: self.height });
        }
        let offset = 4 * (y as usize * self.width as usize + x as usize);
        self.pixels[offset..offset + 4].copy_from_slice(&[color.r, color.g, color.b, 255]);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_palette() -> Palette {
        let mut palette = Palette::default();
        palette.set(1, Rgb::new(10, 20, 30));
        palette.set(5, Rgb::new(50, 0, 0));
        palette.set(6, Rgb::new(0, 60, 0));
        palette.set(7, Rgb::new(0, 0, 70));
        palette
    }

    #[test]
    fn test_isometric_diamond() {
        let palette = test_palette();
        let blocks = [Block::isometric(0, 0, vec![1u8; 256])];
        let mut image = TileImage::new(32, 15);
        decode_blocks(&blocks, &palette, 0, &mut image).unwrap();

        assert_eq!(image.opaque_pixel_count(), 256);
        for y in 0..15u32 {
            let start = ISO_XJUMP[y as usize] as u32;
            let end = start + ISO_NBPIX[y as usize] as u32;
            for x in 0..32u32 {
                let px = image.pixel(x, y).unwrap();
                if x >= start && x < end {
                    assert_eq!(px, [10, 20, 30, 255], "pixel ({x}, {y})");
                } else {
                    assert_eq!(px, [0, 0, 0, 0], "pixel ({x}, {y})");
                }
            }
        }
    }

    #[test]
    fn test_isometric_zero_leaves_destination() {
        let palette = test_palette();
        let blocks = [Block::isometric(0, 0, vec![0u8; 256])];
        let mut pixels = vec![7u8; 32 * 15 * 4];
        decode_into(&blocks, &palette, 32, 0, &mut pixels).unwrap();
        assert!(pixels.iter().all(|&b| b == 7));
    }

    #[test]
    fn test_isometric_truncated() {
        let palette = test_palette();
        let blocks = [Block::isometric(0, 0, vec![1u8; 100])];
        let mut image = TileImage::new(32, 15);
        let err = decode_blocks(&blocks, &palette, 0, &mut image).unwrap_err();
        assert_eq!(err, DecodeError::Truncated { need: 256, have: 100 });
    }

    #[test]
    fn test_rle_runs_and_row_advance() {
        let palette = test_palette();
        let blocks = [Block::rle(0, 0, vec![2, 3, 5, 6, 7, 0, 0, 1, 1, 1])];
        let mut image = TileImage::new(8, 2);
        decode_blocks(&blocks, &palette, 0, &mut image).unwrap();

        assert_eq!(image.pixel(0, 0).unwrap(), [0, 0, 0, 0]);
        assert_eq!(image.pixel(1, 0).unwrap(), [0, 0, 0, 0]);
        assert_eq!(image.pixel(2, 0).unwrap(), [50, 0, 0, 255]);
        assert_eq!(image.pixel(3, 0).unwrap(), [0, 60, 0, 255]);
        assert_eq!(image.pixel(4, 0).unwrap(), [0, 0, 70, 255]);
        assert_eq!(image.pixel(5, 0).unwrap(), [0, 0, 0, 0]);
        // x reset to 0 on the second row, then skip 1
        assert_eq!(image.pixel(0, 1).unwrap(), [0, 0, 0, 0]);
        assert_eq!(image.pixel(1, 1).unwrap(), [10, 20, 30, 255]);
        assert_eq!(image.opaque_pixel_count(), 4);
    }

    #[test]
    fn test_rle_zero_index_skipped() {
        let palette = test_palette();
        let blocks = [Block::rle(0, 0, vec![0, 3, 1, 0, 1])];
        let mut image = TileImage::new(4, 1);
        decode_blocks(&blocks, &palette, 0, &mut image).unwrap();
        assert_eq!(image.pixel(0, 0).unwrap(), [10, 20, 30, 255]);
        assert_eq!(image.pixel(1, 0).unwrap(), [0, 0, 0, 0]);
        assert_eq!(image.pixel(2, 0).unwrap(), [10, 20, 30, 255]);
    }

    #[test]
    fn test_rle_respects_declared_length() {
        let palette = test_palette();
        let mut block = Block::rle(0, 0, vec![0, 1, 1, 0, 1, 1]);
        block.length = 3;
        let mut image = TileImage::new(4, 1);
        decode_blocks(&[block], &palette, 0, &mut image).unwrap();
        assert_eq!(image.opaque_pixel_count(), 1);
    }

    #[test]
    fn test_block_origin_and_vertical_offset() {
        let palette = test_palette();
        let blocks = [Block::rle(3, -2, vec![0, 1, 1])];
        let mut image = TileImage::new(8, 4);
        decode_blocks(&blocks, &palette, 3, &mut image).unwrap();
        assert_eq!(image.pixel(3, 1).unwrap(), [10, 20, 30, 255]);
        assert_eq!(image.opaque_pixel_count(), 1);
    }

    #[test]
    fn test_bounds_violation() {
        let palette = test_palette();
        let blocks = [Block::rle(0, 0, vec![3, 2, 1, 1])];
        let mut image = TileImage::new(4, 1);
        let err = decode_blocks(&blocks, &palette, 0, &mut image).unwrap_err();
        assert_eq!(err, DecodeError::BoundsViolation { x: 4, y: 0, width: 4, height: 1 });

        let blocks = [Block::rle(0, -1, vec![0, 1, 1])];
        let mut image = TileImage::new(4, 1);
        assert!(matches!(
            decode_blocks(&blocks, &palette, 0, &mut image),
            Err(DecodeError::BoundsViolation { y: -1, .. })
        ));
    }

    #[test]
    fn test_rle_truncated_run() {
        let palette = test_palette();
        let mut block = Block::rle(0, 0, vec![0, 4, 1]);
        block.length = 6;
        let mut image = TileImage::new(8, 1);
        let err = decode_blocks(&[block], &palette, 0, &mut image).unwrap_err();
        assert_eq!(err, DecodeError::Truncated { need: 6, have: 3 });
    }

    #[test]
    fn test_decode_is_idempotent() {
        let palette = test_palette();
        let mut iso = vec![0u8; 256];
        for (i, b) in iso.iter_mut().enumerate() {
            *b = (i % 8) as u8;
        }
        let blocks = [Block::isometric(0, 0, iso), Block::rle(32, 2, vec![1, 2, 5, 6, 0, 0, 0, 1, 7])];
        let mut first = TileImage::new(64, 15);
        let mut second = TileImage::new(64, 15);
        decode_blocks(&blocks, &palette, 0, &mut first).unwrap();
        decode_blocks(&blocks, &palette, 0, &mut second).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_later_block_overwrites_opaque_pixels() {
        let palette = test_palette();
        let blocks = [Block::rle(0, 0, vec![0, 2, 5, 5]), Block::rle(0, 0, vec![1, 1, 6])];
        let mut image = TileImage::new(2, 1);
        decode_blocks(&blocks, &palette, 0, &mut image).unwrap();
        assert_eq!(image.pixel(0, 0).unwrap(), [50, 0, 0, 255]);
        assert_eq!(image.pixel(1, 0).unwrap(), [0, 60, 0, 255]);
    }
}
