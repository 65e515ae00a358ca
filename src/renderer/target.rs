use tilegfx::TileImage;

/// Per-channel multiplier applied while blitting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tint {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Tint {
    pub const NONE: Tint = Tint::new(255, 255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }
}

/// Shadows keep their color and drop to roughly 63% opacity
pub const SHADOW_TINT: Tint = Tint::new(255, 255, 255, 160);

/// Anything a decoded tile surface can be drawn onto
pub trait RenderTarget {
    /// Draw `image` with its top-left corner at (`x`, `y`)
    fn draw_image(&mut self, image: &TileImage, x: i32, y: i32, tint: Tint);
}
