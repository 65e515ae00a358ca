use std::collections::hash_map::Entry;

use ahash::AHashMap;
use tilegfx::TileImage;

use super::key::TileKey;
use crate::error::Result;

/// A decoded surface and where to draw it relative to the cell offset
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileCacheRecord {
    pub image: TileImage,
    pub x_offset: i32,
    pub y_offset: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CacheStats {
    pub entries: usize,
    pub hits: u64,
    pub generated: u64,
}

/// Write-once surface cache for one layer type
#[derive(Debug, Default)]
pub struct TileCache {
    entries: AHashMap<TileKey, TileCacheRecord>,
    hits: u64,
    generated: u64,
}

impl TileCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: TileKey) -> Option<&TileCacheRecord> {
        self.entries.get(&key)
    }

    /// Return the entry for `key`, running `generate` only on a miss.
    ///
    /// `Ok(None)` from the generator means "nothing to draw"; nothing is
    /// stored and the next request for the key generates again. Errors are
    /// propagated and leave the cache untouched.
    pub fn get_or_try_insert_with<F>(&mut self, key: TileKey, generate: F) -> Result<Option<&TileCacheRecord>>
    where
        F: FnOnce() -> Result<Option<TileCacheRecord>>,
    {
        match self.entries.entry(key) {
            Entry::Occupied(entry) => {
                self.hits += 1;
                Ok(Some(entry.into_mut()))
            }
            Entry::Vacant(slot) => match generate()? {
                Some(record) => {
                    self.generated += 1;
                    Ok(Some(slot.insert(record)))
                }
                None => Ok(None),
            },
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn stats(&self) -> CacheStats {
        CacheStats {
            entries: self.entries.len(),
            hits: self.hits,
            generated: self.generated,
        }
    }
}
