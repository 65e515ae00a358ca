use tilegfx::Tile;

/// Every tile available to a region, in tile-set load order.
///
/// Several tiles may share an identity (rarity variants); lookups return
/// the first one loaded so a region always renders the same way.
#[derive(Debug, Clone, Default)]
pub struct TileIndex {
    tiles: Vec<Tile>,
}

impl TileIndex {
    pub fn new(tiles: Vec<Tile>) -> Self {
        Self { tiles }
    }

    /// Concatenate tile sets; earlier sets win identity collisions
    pub fn from_tile_sets(sets: impl IntoIterator<Item = Vec<Tile>>) -> Self {
        let mut tiles = Vec::new();
        for set in sets {
            tiles.extend(set);
        }
        Self { tiles }
    }

    pub fn find(&self, main_index: i32, sub_index: i32, orientation: i32) -> Option<&Tile> {
        self.tiles
            .iter()
            .find(|t| t.matches(main_index, sub_index, orientation))
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }
}
