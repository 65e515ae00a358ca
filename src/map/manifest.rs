use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::{LevelPreset, LevelType, RegionGrid};
use crate::error::{Error, Result};

/// JSON description of a region: its level type, the preset listing candidate
/// grid files, and the grids themselves keyed by file name.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegionManifest {
    pub level: LevelType,
    pub preset: LevelPreset,
    pub grids: BTreeMap<String, RegionGrid>,
}

impl RegionManifest {
    pub fn from_json(text: &str) -> Result<Self> {
        serde_json::from_str(text).map_err(|e| Error::InvalidManifest(e.to_string()))
    }

    /// Pick a grid through the preset; see [`LevelPreset::pick_file`]
    pub fn select_grid(&self, roll: f64) -> Result<(&str, &RegionGrid)> {
        let file = self.preset.pick_file(roll)?;
        let grid = self
            .grids
            .get(file)
            .ok_or_else(|| Error::InvalidManifest(format!("no grid for preset file {file}")))?;
        Ok((file, grid))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MANIFEST: &str = r#"{
        "level": { "name": "Act 1 - Town", "act": 1, "files": ["A1/Floor.dt1", "0"] },
        "preset": { "name": "Town", "files": ["town_a.ds1", "town_b.ds1"] },
        "grids": {
            "town_a.ds1": { "width": 1, "height": 1, "cells": [{}] },
            "town_b.ds1": { "width": 2, "height": 1, "cells": [{}, {}] }
        }
    }"#;

    #[test]
    fn test_parse_and_select() {
        let manifest = RegionManifest::from_json(MANIFEST).unwrap();
        assert_eq!(manifest.level.palette_name(), "act1");
        let (file, grid) = manifest.select_grid(0.9).unwrap();
        assert_eq!(file, "town_b.ds1");
        assert_eq!(grid.width(), 2);
    }

    #[test]
    fn test_missing_grid() {
        let mut manifest = RegionManifest::from_json(MANIFEST).unwrap();
        manifest.grids.remove("town_a.ds1");
        assert!(matches!(manifest.select_grid(0.0), Err(Error::InvalidManifest(_))));
    }

    #[test]
    fn test_invalid_json() {
        assert!(matches!(RegionManifest::from_json("{"), Err(Error::InvalidManifest(_))));
    }
}
