//! Tile grid and procedural level layout.
//!
//! A level is a grid of `sections.x × sections.y` blocks, each
//! `section_size` tiles. Every block is copied from one of nine section
//! catalogs chosen by where the block sits (corners, edges or middle), so the
//! outer border of the map is always closed off by the edge templates while
//! the interior varies from run to run.
//!
//! Row 0 of the grid is the top of the map. When the grid is presented to the
//! entity factories, tile `(col, row)` is placed at world position
//! `(col * tile_size, -row * tile_size)`, so the map grows down and right.
//!
//! # Generation order
//!
//! Draws from the random source happen in a fixed order so a seeded source
//! reproduces the same map: rows top to bottom, and within each row the left
//! block, then the right block, then the middle blocks left to right.

use bevy_ecs::prelude::Resource;
use glam::Vec2;
use log::debug;

use crate::error::{DelveError, Result};
use crate::resources::sectioncatalog::{Section, SectionCatalogs};

/// Tile codes used in section templates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TileType {
    Air,
    Wall,
    WallLit,
    Ground,
    Start,
    End,
    Enemy,
    Food,
}

impl TileType {
    pub fn code(self) -> i32 {
        match self {
            TileType::Air => 0,
            TileType::Wall => 1,
            TileType::WallLit => 2,
            TileType::Ground => 3,
            TileType::Start => 4,
            TileType::End => 5,
            TileType::Enemy => 6,
            TileType::Food => 7,
        }
    }

    /// Single-character glyph used by [`TileMap::to_ascii`].
    pub fn glyph(self) -> char {
        match self {
            TileType::Air => ' ',
            TileType::Wall => '#',
            TileType::WallLit => '*',
            TileType::Ground => '.',
            TileType::Start => 'S',
            TileType::End => 'E',
            TileType::Enemy => 'm',
            TileType::Food => 'f',
        }
    }
}

impl TryFrom<i32> for TileType {
    type Error = DelveError;

    fn try_from(code: i32) -> Result<Self> {
        match code {
            0 => Ok(TileType::Air),
            1 => Ok(TileType::Wall),
            2 => Ok(TileType::WallLit),
            3 => Ok(TileType::Ground),
            4 => Ok(TileType::Start),
            5 => Ok(TileType::End),
            6 => Ok(TileType::Enemy),
            7 => Ok(TileType::Food),
            other => Err(DelveError::UnknownTileCode(other)),
        }
    }
}

/// Section counts and sizes for a level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MapLayout {
    pub sections_x: usize,
    pub sections_y: usize,
    pub section_width: usize,
    pub section_height: usize,
}

impl Default for MapLayout {
    fn default() -> Self {
        MapLayout {
            sections_x: 5,
            sections_y: 3,
            section_width: 10,
            section_height: 10,
        }
    }
}

impl MapLayout {
    pub fn grid_size(&self) -> (usize, usize) {
        (
            self.sections_x * self.section_width,
            self.sections_y * self.section_height,
        )
    }

    /// Corner and edge templates need at least two sections on each axis.
    pub fn validate(&self) -> Result<()> {
        if self.sections_x < 2 || self.sections_y < 2 {
            return Err(DelveError::Layout(format!(
                "need at least 2x2 sections, got {}x{}",
                self.sections_x, self.sections_y
            )));
        }
        if self.section_width == 0 || self.section_height == 0 {
            return Err(DelveError::Layout("section size must be non-zero".into()));
        }
        Ok(())
    }
}

/// The generated tile grid of the current level.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct TileMap {
    layout: MapLayout,
    tile_size: f32,
    /// Row-major, row 0 at the top.
    tiles: Vec<Vec<i32>>,
}

impl TileMap {
    /// Allocate a grid for `layout` filled with [`TileType::Air`].
    pub fn new(layout: MapLayout, tile_size: f32) -> Self {
        let (w, h) = layout.grid_size();
        TileMap {
            layout,
            tile_size,
            tiles: vec![vec![TileType::Air.code(); w]; h],
        }
    }

    pub fn layout(&self) -> MapLayout {
        self.layout
    }

    pub fn tile_size(&self) -> f32 {
        self.tile_size
    }

    /// Grid dimensions in tiles as (columns, rows).
    pub fn dimensions(&self) -> (usize, usize) {
        self.layout.grid_size()
    }

    /// World-space extent of the whole map.
    pub fn tilemap_size(&self) -> Vec2 {
        let (w, h) = self.dimensions();
        Vec2::new(w as f32 * self.tile_size, h as f32 * self.tile_size)
    }

    /// Overwrite every tile with `tile`.
    pub fn fill(&mut self, tile: TileType) {
        for row in &mut self.tiles {
            row.fill(tile.code());
        }
    }

    /// Raw tile code at column `x`, row `y`.
    pub fn get_tile(&self, x: usize, y: usize) -> Option<i32> {
        self.tiles.get(y).and_then(|row| row.get(x)).copied()
    }

    /// Store a raw code. Out-of-range coordinates are ignored.
    pub fn set_tile(&mut self, x: usize, y: usize, code: i32) {
        if let Some(cell) = self.tiles.get_mut(y).and_then(|row| row.get_mut(x)) {
            *cell = code;
        }
    }

    /// True for tiles strictly inside the one-tile outer border.
    pub fn is_valid_tile(&self, x: usize, y: usize) -> bool {
        let (w, h) = self.dimensions();
        x >= 1 && y >= 1 && x + 1 < w && y + 1 < h
    }

    /// Lay out a fresh level from `catalogs`.
    ///
    /// The grid is cleared to [`TileType::Air`] first. Catalogs are validated
    /// against the layout before the first random draw, so a failed call
    /// leaves both the grid and the random source untouched.
    pub fn generate(&mut self, rng: &mut fastrand::Rng, catalogs: &SectionCatalogs) -> Result<()> {
        self.layout.validate()?;
        catalogs.validate(self.layout.section_width, self.layout.section_height)?;

        self.fill(TileType::Air);
        let sx = self.layout.sections_x;
        let sy = self.layout.sections_y;

        for row in 0..sy {
            let (left, middle, right) = if row == 0 {
                (&catalogs.top_left, &catalogs.top, &catalogs.top_right)
            } else if row == sy - 1 {
                (&catalogs.bottom_left, &catalogs.bottom, &catalogs.bottom_right)
            } else {
                (&catalogs.left, &catalogs.middle, &catalogs.right)
            };

            let block = pick(rng, left);
            self.stamp(0, row, block);
            let block = pick(rng, right);
            self.stamp(sx - 1, row, block);
            for col in 1..sx - 1 {
                let block = pick(rng, middle);
                self.stamp(col, row, block);
            }
        }

        debug!(
            "generated {}x{} tile map from {}x{} sections",
            self.dimensions().0,
            self.dimensions().1,
            sx,
            sy
        );
        Ok(())
    }

    fn stamp(&mut self, section_x: usize, section_y: usize, block: &Section) {
        let x0 = section_x * self.layout.section_width;
        let y0 = section_y * self.layout.section_height;
        for (dy, row) in block.iter().enumerate() {
            for (dx, &code) in row.iter().enumerate() {
                self.set_tile(x0 + dx, y0 + dy, code);
            }
        }
    }

    /// Hand every tile to `create_node` in row-major order together with its
    /// world position.
    ///
    /// All codes are checked before the first callback, so an unknown code
    /// fails the call without spawning half a level.
    pub fn present<F>(&self, mut create_node: F) -> Result<()>
    where
        F: FnMut(TileType, Vec2),
    {
        let mut decoded = Vec::with_capacity(self.tiles.len());
        for row in &self.tiles {
            let tiles = row
                .iter()
                .map(|&code| TileType::try_from(code))
                .collect::<Result<Vec<_>>>()?;
            decoded.push(tiles);
        }
        for (y, row) in decoded.iter().enumerate() {
            for (x, &tile) in row.iter().enumerate() {
                let pos = Vec2::new(x as f32 * self.tile_size, -(y as f32) * self.tile_size);
                create_node(tile, pos);
            }
        }
        Ok(())
    }

    /// Debug dump of the grid, one line per row.
    pub fn to_ascii(&self) -> String {
        let mut out = String::new();
        for row in &self.tiles {
            for &code in row {
                out.push(TileType::try_from(code).map_or('?', TileType::glyph));
            }
            out.push('\n');
        }
        out
    }
}

fn pick<'a>(rng: &mut fastrand::Rng, catalog: &'a [Section]) -> &'a Section {
    // Catalogs are validated non-empty before generation starts.
    &catalog[rng.usize(..catalog.len())]
}
