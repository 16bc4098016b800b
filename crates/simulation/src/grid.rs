use std::collections::BTreeMap;
use std::fmt;

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::buildings::BuildingData;
use crate::config::TILE_SIZE;

/// Tile coordinate. Ordering is row-major (`y` first, then `x`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TileXy {
    pub y: i32,
    pub x: i32,
}

impl TileXy {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// World-space centre of the tile.
    pub fn to_world(self) -> Vec2 {
        Vec2::new(
            self.x as f32 * TILE_SIZE + TILE_SIZE * 0.5,
            self.y as f32 * TILE_SIZE + TILE_SIZE * 0.5,
        )
    }

    /// Tile containing a world-space point.
    pub fn from_world(pos: Vec2) -> Self {
        Self::new(
            (pos.x / TILE_SIZE).floor() as i32,
            (pos.y / TILE_SIZE).floor() as i32,
        )
    }
}

impl fmt::Display for TileXy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.x, self.y)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Tile {
    pub explored: bool,
    pub building: Option<BuildingData>,
}

/// Every tile the simulation knows about, keyed by coordinate.
#[derive(Resource, Debug, Clone, Default)]
pub struct TileMap {
    pub tiles: BTreeMap<TileXy, Tile>,
}

impl TileMap {
    pub fn get(&self, xy: TileXy) -> Option<&Tile> {
        self.tiles.get(&xy)
    }

    pub fn building(&self, xy: TileXy) -> Option<&BuildingData> {
        self.tiles.get(&xy).and_then(|tile| tile.building.as_ref())
    }

    pub fn insert(&mut self, xy: TileXy, tile: Tile) {
        self.tiles.insert(xy, tile);
    }

    pub fn iter(&self) -> impl Iterator<Item = (TileXy, &Tile)> {
        self.tiles.iter().map(|(xy, tile)| (*xy, tile))
    }

    /// Explored tiles that carry a building.
    pub fn explored_buildings(&self) -> impl Iterator<Item = (TileXy, &BuildingData)> {
        self.iter().filter_map(|(xy, tile)| {
            if tile.explored {
                tile.building.as_ref().map(|b| (xy, b))
            } else {
                None
            }
        })
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buildings::{BuildingData, BuildingKey};

    #[test]
    fn test_tile_xy_orders_row_major() {
        let a = TileXy::new(5, 0);
        let b = TileXy::new(0, 1);
        assert!(a < b);
        assert!(TileXy::new(1, 1) < TileXy::new(2, 1));
    }

    #[test]
    fn test_tile_xy_display() {
        assert_eq!(TileXy::new(3, -2).to_string(), "3,-2");
    }

    #[test]
    fn test_to_world_is_tile_centre() {
        let world = TileXy::new(2, 1).to_world();
        assert!((world.x - (2.0 * TILE_SIZE + TILE_SIZE * 0.5)).abs() < f32::EPSILON);
        assert!((world.y - (TILE_SIZE + TILE_SIZE * 0.5)).abs() < f32::EPSILON);
    }

    #[test]
    fn test_from_world_round_trips_centre() {
        let xy = TileXy::new(7, 3);
        assert_eq!(TileXy::from_world(xy.to_world()), xy);
        assert_eq!(TileXy::from_world(Vec2::new(-1.0, 0.0)), TileXy::new(-1, 0));
    }

    #[test]
    fn test_explored_buildings_skips_hidden_and_empty_tiles() {
        let mut map = TileMap::default();
        let building = BuildingData::completed(BuildingKey::new("WheatFarm"), 1);
        map.insert(
            TileXy::new(0, 0),
            Tile {
                explored: true,
                building: Some(building.clone()),
            },
        );
        map.insert(
            TileXy::new(1, 0),
            Tile {
                explored: false,
                building: Some(building),
            },
        );
        map.insert(
            TileXy::new(2, 0),
            Tile {
                explored: true,
                building: None,
            },
        );

        let found: Vec<TileXy> = map.explored_buildings().map(|(xy, _)| xy).collect();
        assert_eq!(found, vec![TileXy::new(0, 0)]);
    }
}
