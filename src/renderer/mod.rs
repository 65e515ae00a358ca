pub mod cache;
pub mod canvas;
pub mod generate;
pub mod key;
pub mod region;
pub mod target;

pub use cache::{CacheStats, TileCache, TileCacheRecord};
pub use canvas::Canvas;
pub use generate::{generate_floor, generate_shadow, generate_wall};
pub use key::TileKey;
pub use region::{cell_to_screen, Region, CELL_HALF_HEIGHT, CELL_HALF_WIDTH};
pub use target::{RenderTarget, Tint, SHADOW_TINT};
