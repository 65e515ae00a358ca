use tilegfx::{Palette, Rgb, PALETTE_SIZE};

use crate::error::{Error, Result};

/// Size of a palette file: 256 BGR triples
pub const PALETTE_FILE_LEN: usize = PALETTE_SIZE * 3;

/// Parse an act palette stored as blue, green, red byte triples.
/// Trailing bytes after the 256th entry are ignored.
pub fn parse_palette(data: &[u8]) -> Result<Palette> {
    if data.len() < PALETTE_FILE_LEN {
        return Err(Error::InvalidPalette { need: PALETTE_FILE_LEN, have: data.len() });
    }
    let mut colors = [Rgb::default(); PALETTE_SIZE];
    for (color, bgr) in colors.iter_mut().zip(data.chunks_exact(3)) {
        *color = Rgb::new(bgr[2], bgr[1], bgr[0]);
    }
    Ok(Palette::new(colors))
}
