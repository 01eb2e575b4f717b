// src/floor/mod.rs

use crate::model::{Heading, Position, SurfaceType, TileSnapshot};
use std::collections::HashMap;

pub mod layout;
pub use layout::{LayoutError, parse_layout};

/// Handle to a tile owned by a floor plan.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TileId(pub usize);

/// A single cell of the floor plan.
#[derive(Clone, Debug, PartialEq)]
pub struct Tile {
    position: Position,
    surface: SurfaceType,
    dirt: u32,
    battery_cost: f64,
    accessible: bool,
    charging_station: bool,
}

impl Tile {
    pub fn new(position: Position, surface: SurfaceType, dirt: u32) -> Self {
        Self {
            position,
            surface,
            dirt,
            battery_cost: surface.default_battery_cost(),
            accessible: true,
            charging_station: false,
        }
    }

    pub fn with_battery_cost(mut self, cost: f64) -> Self {
        self.battery_cost = cost;
        self
    }

    pub fn as_obstacle(mut self) -> Self {
        self.accessible = false;
        self
    }

    pub fn as_charging_station(mut self) -> Self {
        self.charging_station = true;
        self
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn surface(&self) -> SurfaceType {
        self.surface
    }

    pub fn dirt(&self) -> u32 {
        self.dirt
    }

    pub fn battery_cost(&self) -> f64 {
        self.battery_cost
    }

    pub fn is_accessible(&self) -> bool {
        self.accessible
    }

    pub fn is_charging_station(&self) -> bool {
        self.charging_station
    }

    pub fn is_clean(&self) -> bool {
        self.dirt == 0
    }

    /// Removes one unit of dirt. Returns false if the tile was already clean.
    pub fn remove_dirt(&mut self) -> bool {
        if self.dirt == 0 {
            return false;
        }
        self.dirt -= 1;
        true
    }

    pub fn snapshot(&self) -> TileSnapshot {
        TileSnapshot {
            position: self.position,
            dirt: self.dirt,
            surface: self.surface,
            charging_station: self.charging_station,
        }
    }
}

/// Capability the cleaner uses to inspect and clean the floor.
pub trait FloorPlan {
    fn tile(&self, id: TileId) -> Option<&Tile>;
    fn tile_mut(&mut self, id: TileId) -> Option<&mut Tile>;
    fn neighbor(&self, id: TileId, heading: Heading) -> Option<TileId>;
}

/// In-memory grid floor. Neighbors are derived from tile coordinates.
#[derive(Clone, Debug, Default)]
pub struct GridFloor {
    tiles: Vec<Tile>,
    index: HashMap<Position, TileId>,
}

impl GridFloor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a tile, replacing any tile already at the same position.
    pub fn insert(&mut self, tile: Tile) -> TileId {
        if let Some(&id) = self.index.get(&tile.position()) {
            self.tiles[id.0] = tile;
            return id;
        }
        let id = TileId(self.tiles.len());
        self.index.insert(tile.position(), id);
        self.tiles.push(tile);
        id
    }

    pub fn tile_at(&self, position: Position) -> Option<TileId> {
        self.index.get(&position).copied()
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    pub fn tiles(&self) -> impl Iterator<Item = (TileId, &Tile)> {
        self.tiles.iter().enumerate().map(|(i, t)| (TileId(i), t))
    }

    pub fn total_dirt(&self) -> u32 {
        self.tiles.iter().map(Tile::dirt).sum()
    }

    pub fn charging_stations(&self) -> Vec<TileId> {
        self.tiles()
            .filter(|(_, t)| t.is_charging_station())
            .map(|(id, _)| id)
            .collect()
    }
}

impl FloorPlan for GridFloor {
    fn tile(&self, id: TileId) -> Option<&Tile> {
        self.tiles.get(id.0)
    }

    fn tile_mut(&mut self, id: TileId) -> Option<&mut Tile> {
        self.tiles.get_mut(id.0)
    }

    fn neighbor(&self, id: TileId, heading: Heading) -> Option<TileId> {
        let from = self.tile(id)?.position();
        self.tile_at(from.step(heading)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn neighbors_follow_coordinates() {
        let mut floor = GridFloor::new();
        let center = floor.insert(Tile::new(Position::new(1, 1), SurfaceType::BareFloor, 0));
        let north = floor.insert(Tile::new(Position::new(1, 0), SurfaceType::LowPile, 2));
        let east = floor.insert(Tile::new(Position::new(2, 1), SurfaceType::HighPile, 1));

        assert_eq!(floor.neighbor(center, Heading::North), Some(north));
        assert_eq!(floor.neighbor(center, Heading::East), Some(east));
        assert_eq!(floor.neighbor(center, Heading::South), None);
        assert_eq!(floor.neighbor(north, Heading::South), Some(center));
        assert_eq!(floor.neighbor(TileId(99), Heading::North), None);
    }

    #[test]
    fn edge_of_coordinate_space_has_no_neighbor() {
        let mut floor = GridFloor::new();
        let edge = floor.insert(Tile::new(Position::new(i32::MAX, 0), SurfaceType::BareFloor, 0));
        let west = floor.insert(Tile::new(Position::new(i32::MAX - 1, 0), SurfaceType::BareFloor, 0));

        assert_eq!(floor.neighbor(edge, Heading::East), None);
        assert_eq!(floor.neighbor(edge, Heading::West), Some(west));
    }

    #[test]
    fn insert_replaces_same_position() {
        let mut floor = GridFloor::new();
        let a = floor.insert(Tile::new(Position::new(0, 0), SurfaceType::BareFloor, 1));
        let b = floor.insert(Tile::new(Position::new(0, 0), SurfaceType::HighPile, 4));
        assert_eq!(a, b);
        assert_eq!(floor.len(), 1);
        assert_eq!(floor.tile(a).map(Tile::dirt), Some(4));
    }

    #[test]
    fn remove_dirt_stops_at_zero() {
        let mut tile = Tile::new(Position::default(), SurfaceType::LowPile, 1);
        assert_eq!(tile.battery_cost(), 2.0);
        assert!(tile.remove_dirt());
        assert!(tile.is_clean());
        assert!(!tile.remove_dirt());
        assert_eq!(tile.dirt(), 0);
    }

    #[test]
    fn snapshot_is_a_copy() {
        let mut tile = Tile::new(Position::new(3, 4), SurfaceType::HighPile, 2).as_charging_station();
        let snap = tile.snapshot();
        tile.remove_dirt();
        assert_eq!(snap.dirt, 2);
        assert!(snap.charging_station);
        assert_eq!(snap.position, Position::new(3, 4));
    }
}
