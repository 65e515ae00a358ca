use tilegfx::Palette;

use super::cache::{CacheStats, TileCache};
use super::generate::{generate_floor, generate_shadow, generate_wall};
use super::key::TileKey;
use super::target::{RenderTarget, Tint, SHADOW_TINT};
use crate::error::Result;
use crate::map::{load_tile_index, FloorShadowRecord, LayerType, LevelType, RegionGrid, TileIndex, TileSetSource, WallRecord};

/// Half the width of a floor diamond in pixels
pub const CELL_HALF_WIDTH: i32 = 80;
/// Half the height of a floor diamond in pixels
pub const CELL_HALF_HEIGHT: i32 = 40;

/// Screen position of a cell's anchor relative to the anchor of cell (0, 0)
pub fn cell_to_screen(cell_x: usize, cell_y: usize) -> (i32, i32) {
    let (x, y) = (cell_x as i32, cell_y as i32);
    ((x - y) * CELL_HALF_WIDTH, (x + y) * CELL_HALF_HEIGHT)
}

/// One loaded map region: its tiles, grid, palette and the three surface caches
pub struct Region {
    tiles: TileIndex,
    grid: RegionGrid,
    palette: Palette,
    floor_cache: TileCache,
    shadow_cache: TileCache,
    wall_cache: TileCache,
}

impl Region {
    pub fn new(tiles: TileIndex, grid: RegionGrid, palette: Palette) -> Self {
        Self {
            tiles,
            grid,
            palette,
            floor_cache: TileCache::new(),
            shadow_cache: TileCache::new(),
            wall_cache: TileCache::new(),
        }
    }

    pub fn load(level: &LevelType, grid: RegionGrid, palette: Palette, source: &impl TileSetSource) -> Result<Self> {
        let tiles = load_tile_index(level, source)?;
        Ok(Self::new(tiles, grid, palette))
    }

    pub fn width(&self) -> usize {
        self.grid.width()
    }

    pub fn height(&self) -> usize {
        self.grid.height()
    }

    pub fn grid(&self) -> &RegionGrid {
        &self.grid
    }

    pub fn tiles(&self) -> &TileIndex {
        &self.tiles
    }

    pub fn cache(&self, layer: LayerType) -> &TileCache {
        match layer {
            LayerType::Floor => &self.floor_cache,
            LayerType::Wall => &self.wall_cache,
            LayerType::Shadow => &self.shadow_cache,
        }
    }

    pub fn cache_stats(&self, layer: LayerType) -> CacheStats {
        self.cache(layer).stats()
    }

    /// Draw one layer record of a cell at (`offset_x`, `offset_y`) plus the
    /// cached surface's own offset.
    ///
    /// A floor or wall whose tile is missing from the tile index fails with
    /// `TileNotFound`. A missing shadow tile draws nothing.
    pub fn render_tile<T: RenderTarget + ?Sized>(
        &mut self,
        offset_x: i32,
        offset_y: i32,
        cell_x: usize,
        cell_y: usize,
        layer: LayerType,
        layer_index: usize,
        target: &mut T,
    ) -> Result<()> {
        match layer {
            LayerType::Floor => {
                let record = self.grid.floor(cell_x, cell_y, layer_index)?;
                self.render_floor(&record, offset_x, offset_y, target)
            }
            LayerType::Wall => {
                let record = self.grid.wall(cell_x, cell_y, layer_index)?;
                self.render_wall(&record, offset_x, offset_y, target)
            }
            LayerType::Shadow => {
                let record = self.grid.shadow(cell_x, cell_y, layer_index)?;
                self.render_shadow(&record, offset_x, offset_y, target)
            }
        }
    }

    /// Draw every layer of a cell: floors, then shadows, then walls
    pub fn render_cell<T: RenderTarget + ?Sized>(
        &mut self,
        offset_x: i32,
        offset_y: i32,
        cell_x: usize,
        cell_y: usize,
        target: &mut T,
    ) -> Result<()> {
        for layer in [LayerType::Floor, LayerType::Shadow, LayerType::Wall] {
            self.render_layer(offset_x, offset_y, cell_x, cell_y, layer, target)?;
        }
        Ok(())
    }

    /// Draw the whole region with cell (0, 0) anchored at (`origin_x`, `origin_y`).
    ///
    /// Each layer type is drawn for every cell before the next one starts, so
    /// shadows never end up beneath a neighbouring floor.
    pub fn render_all<T: RenderTarget + ?Sized>(&mut self, origin_x: i32, origin_y: i32, target: &mut T) -> Result<()> {
        for layer in [LayerType::Floor, LayerType::Shadow, LayerType::Wall] {
            for cell_y in 0..self.grid.height() {
                for cell_x in 0..self.grid.width() {
                    let (sx, sy) = cell_to_screen(cell_x, cell_y);
                    self.render_layer(origin_x + sx, origin_y + sy, cell_x, cell_y, layer, target)?;
                }
            }
        }
        Ok(())
    }

    fn render_layer<T: RenderTarget + ?Sized>(
        &mut self,
        offset_x: i32,
        offset_y: i32,
        cell_x: usize,
        cell_y: usize,
        layer: LayerType,
        target: &mut T,
    ) -> Result<()> {
        let count = self.grid.cell(cell_x, cell_y)?.layer_count(layer);
        for layer_index in 0..count {
            self.render_tile(offset_x, offset_y, cell_x, cell_y, layer, layer_index, target)?;
        }
        Ok(())
    }

    fn render_floor<T: RenderTarget + ?Sized>(
        &mut self,
        record: &FloorShadowRecord,
        offset_x: i32,
        offset_y: i32,
        target: &mut T,
    ) -> Result<()> {
        let (tiles, palette) = (&self.tiles, &self.palette);
        let cached = self
            .floor_cache
            .get_or_try_insert_with(TileKey::floor(record), || generate_floor(tiles, palette, record).map(Some))?;
        if let Some(entry) = cached {
            target.draw_image(&entry.image, offset_x + entry.x_offset, offset_y + entry.y_offset, Tint::NONE);
        }
        Ok(())
    }

    fn render_shadow<T: RenderTarget + ?Sized>(
        &mut self,
        record: &FloorShadowRecord,
        offset_x: i32,
        offset_y: i32,
        target: &mut T,
    ) -> Result<()> {
        let (tiles, palette) = (&self.tiles, &self.palette);
        let cached = self
            .shadow_cache
            .get_or_try_insert_with(TileKey::shadow(record), || generate_shadow(tiles, palette, record))?;
        if let Some(entry) = cached {
            target.draw_image(&entry.image, offset_x + entry.x_offset, offset_y + entry.y_offset, SHADOW_TINT);
        }
        Ok(())
    }

    fn render_wall<T: RenderTarget + ?Sized>(
        &mut self,
        record: &WallRecord,
        offset_x: i32,
        offset_y: i32,
        target: &mut T,
    ) -> Result<()> {
        let (tiles, palette) = (&self.tiles, &self.palette);
        let cached = self
            .wall_cache
            .get_or_try_insert_with(TileKey::wall(record), || generate_wall(tiles, palette, record).map(Some))?;
        if let Some(entry) = cached {
            target.draw_image(&entry.image, offset_x + entry.x_offset, offset_y + entry.y_offset, Tint::NONE);
        }
        Ok(())
    }
}
