//! Section template catalogs for the map generator.
//!
//! A catalog is a list of fixed-size blocks of tile codes. There is one
//! catalog per position class of a block in the level (four corners, four
//! edges, middle). Edge and corner templates carry the map's outer walls; the
//! player start only appears in top-left templates and the level exit only in
//! bottom-right templates.
//!
//! Catalogs are content, not code. The game ships a built-in set
//! (`assets/sections.json`, compiled in) and hosts can load replacements from
//! any JSON file with the same shape:
//!
//! ```json
//! {
//!   "top_left": [ [[1,1,1], [1,4,3], [1,3,3]] ],
//!   "top": [ ... ],
//!   ...
//!   "bottom_right": [ ... ]
//! }
//! ```

use std::path::Path;

use bevy_ecs::prelude::Resource;
use log::info;
use serde::{Deserialize, Serialize};

use crate::error::{DelveError, Result};
use crate::resources::tilemap::TileType;

/// One block of tile codes, row 0 at the top.
pub type Section = Vec<Vec<i32>>;

const BUILTIN_SECTIONS: &str = include_str!("../../assets/sections.json");

#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionCatalogs {
    pub top_left: Vec<Section>,
    pub top: Vec<Section>,
    pub top_right: Vec<Section>,
    pub left: Vec<Section>,
    pub middle: Vec<Section>,
    pub right: Vec<Section>,
    pub bottom_left: Vec<Section>,
    pub bottom: Vec<Section>,
    pub bottom_right: Vec<Section>,
}

impl SectionCatalogs {
    /// The catalogs shipped with the game.
    pub fn builtin() -> Result<Self> {
        Self::from_json(BUILTIN_SECTIONS)
    }

    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| DelveError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let catalogs = Self::from_json(&text)?;
        info!("Loaded section catalogs from {:?}", path);
        Ok(catalogs)
    }

    pub fn named(&self) -> [(&'static str, &[Section]); 9] {
        [
            ("top_left", self.top_left.as_slice()),
            ("top", self.top.as_slice()),
            ("top_right", self.top_right.as_slice()),
            ("left", self.left.as_slice()),
            ("middle", self.middle.as_slice()),
            ("right", self.right.as_slice()),
            ("bottom_left", self.bottom_left.as_slice()),
            ("bottom", self.bottom.as_slice()),
            ("bottom_right", self.bottom_right.as_slice()),
        ]
    }

    /// Check every catalog is non-empty, every block is exactly
    /// `width × height`, and every code is a known tile.
    pub fn validate(&self, width: usize, height: usize) -> Result<()> {
        for (name, catalog) in self.named() {
            if catalog.is_empty() {
                return Err(DelveError::EmptyCatalog(name));
            }
            for section in catalog {
                let found_h = section.len();
                let bad_row = section.iter().map(Vec::len).find(|&w| w != width);
                if found_h != height || bad_row.is_some() {
                    return Err(DelveError::SectionSize {
                        catalog: name,
                        expected_w: width,
                        expected_h: height,
                        found_w: bad_row.unwrap_or(width),
                        found_h,
                    });
                }
                for &code in section.iter().flatten() {
                    TileType::try_from(code)?;
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn count(catalog: &[Section], tile: TileType) -> usize {
        catalog
            .iter()
            .flatten()
            .flatten()
            .filter(|&&c| c == tile.code())
            .count()
    }

    #[test]
    fn builtin_catalogs_are_valid_ten_by_ten() {
        let catalogs = SectionCatalogs::builtin().unwrap();
        catalogs.validate(10, 10).unwrap();
    }

    #[test]
    fn start_and_exit_live_only_in_their_corners() {
        let catalogs = SectionCatalogs::builtin().unwrap();
        for (name, catalog) in catalogs.named() {
            let starts = count(catalog, TileType::Start);
            let exits = count(catalog, TileType::End);
            match name {
                "top_left" => {
                    assert_eq!(starts, catalog.len());
                    assert_eq!(exits, 0);
                }
                "bottom_right" => {
                    assert_eq!(exits, catalog.len());
                    assert_eq!(starts, 0);
                }
                _ => {
                    assert_eq!(starts, 0, "start tile in {name}");
                    assert_eq!(exits, 0, "exit tile in {name}");
                }
            }
        }
    }

    #[test]
    fn empty_catalog_is_rejected() {
        let mut catalogs = SectionCatalogs::builtin().unwrap();
        catalogs.middle.clear();
        assert!(matches!(
            catalogs.validate(10, 10),
            Err(DelveError::EmptyCatalog("middle"))
        ));
    }

    #[test]
    fn wrong_block_size_is_rejected() {
        let catalogs = SectionCatalogs::builtin().unwrap();
        let err = catalogs.validate(8, 10).unwrap_err();
        assert!(matches!(
            err,
            DelveError::SectionSize {
                catalog: "top_left",
                found_w: 10,
                ..
            }
        ));
    }

    #[test]
    fn unknown_code_is_rejected() {
        let mut catalogs = SectionCatalogs::builtin().unwrap();
        catalogs.right[0][4][4] = 12;
        assert!(matches!(
            catalogs.validate(10, 10),
            Err(DelveError::UnknownTileCode(12))
        ));
    }

    #[test]
    fn malformed_json_is_a_catalog_error() {
        assert!(matches!(
            SectionCatalogs::from_json("{\"top_left\": ["),
            Err(DelveError::Catalog(_))
        ));
    }
}
