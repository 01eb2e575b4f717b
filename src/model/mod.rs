// src/model/mod.rs

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Compass heading of the cleaner.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub enum Heading {
    #[serde(rename = "N")]
    North,
    #[serde(rename = "E")]
    East,
    #[serde(rename = "S")]
    South,
    #[serde(rename = "W")]
    West,
}

/// A heading-relative turn applied before stepping forward.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Turn {
    Ahead,
    Left,
    Right,
    Back,
}

impl Heading {
    pub const ALL: [Heading; 4] = [Heading::North, Heading::East, Heading::South, Heading::West];

    /// Transition table, indexed by `Turn`: (ahead, left, right, back).
    pub fn turn(self, turn: Turn) -> Heading {
        let (ahead, left, right, back) = match self {
            Heading::North => (Heading::North, Heading::West, Heading::East, Heading::South),
            Heading::East => (Heading::East, Heading::North, Heading::South, Heading::West),
            Heading::South => (Heading::South, Heading::East, Heading::West, Heading::North),
            Heading::West => (Heading::West, Heading::South, Heading::North, Heading::East),
        };
        match turn {
            Turn::Ahead => ahead,
            Turn::Left => left,
            Turn::Right => right,
            Turn::Back => back,
        }
    }

    pub fn left(self) -> Heading {
        self.turn(Turn::Left)
    }

    pub fn right(self) -> Heading {
        self.turn(Turn::Right)
    }

    pub fn back(self) -> Heading {
        self.turn(Turn::Back)
    }

    /// Grid offset of one step in this heading. `y` grows southwards.
    pub fn offset(self) -> (i32, i32) {
        match self {
            Heading::North => (0, -1),
            Heading::East => (1, 0),
            Heading::South => (0, 1),
            Heading::West => (-1, 0),
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Heading::North => 'N',
            Heading::East => 'E',
            Heading::South => 'S',
            Heading::West => 'W',
        }
    }
}

impl fmt::Display for Heading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown heading '{0}', expected one of N, E, S, W")]
pub struct HeadingParseError(pub String);

impl TryFrom<String> for Heading {
    type Error = HeadingParseError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl FromStr for Heading {
    type Err = HeadingParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "n" | "north" => Ok(Heading::North),
            "e" | "east" => Ok(Heading::East),
            "s" | "south" => Ok(Heading::South),
            "w" | "west" => Ok(Heading::West),
            _ => Err(HeadingParseError(s.to_string())),
        }
    }
}

/// Floor covering classification attached to a tile.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SurfaceType {
    BareFloor,
    LowPile,
    HighPile,
}

impl SurfaceType {
    /// Battery units a tile of this surface costs when no explicit cost is set.
    pub fn default_battery_cost(self) -> f64 {
        match self {
            SurfaceType::BareFloor => 1.0,
            SurfaceType::LowPile => 2.0,
            SurfaceType::HighPile => 3.0,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// One tile over in `heading`, or `None` past the edge of the coordinate space.
    pub fn step(self, heading: Heading) -> Option<Position> {
        let (dx, dy) = heading.offset();
        Some(Position::new(self.x.checked_add(dx)?, self.y.checked_add(dy)?))
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.x, self.y)
    }
}

/// Value copy of a tile at the moment the cleaner arrived on it.
///
/// Snapshots never alias the live floor plan, so later cleaning does not
/// rewrite recorded history.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TileSnapshot {
    pub position: Position,
    pub dirt: u32,
    pub surface: SurfaceType,
    pub charging_station: bool,
}

impl TileSnapshot {
    /// Snapshot of the bare origin tile, used when no tile is set.
    pub fn origin() -> Self {
        Self {
            position: Position::default(),
            dirt: 0,
            surface: SurfaceType::BareFloor,
            charging_station: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transition_table_matches_compass() {
        assert_eq!(Heading::North.left(), Heading::West);
        assert_eq!(Heading::North.right(), Heading::East);
        assert_eq!(Heading::North.back(), Heading::South);
        assert_eq!(Heading::East.left(), Heading::North);
        assert_eq!(Heading::East.right(), Heading::South);
        assert_eq!(Heading::East.back(), Heading::West);
        assert_eq!(Heading::South.left(), Heading::East);
        assert_eq!(Heading::South.right(), Heading::West);
        assert_eq!(Heading::South.back(), Heading::North);
        assert_eq!(Heading::West.left(), Heading::South);
        assert_eq!(Heading::West.right(), Heading::North);
        assert_eq!(Heading::West.back(), Heading::East);
    }

    #[test]
    fn turns_form_closed_cycles() {
        for h in Heading::ALL {
            assert_eq!(h.left().left().left().left(), h);
            assert_eq!(h.right().right().right().right(), h);
            assert_eq!(h.back().back(), h);
            assert_eq!(h.left().right(), h);
            assert_eq!(h.turn(Turn::Ahead), h);
        }
    }

    #[test]
    fn parses_headings() {
        assert_eq!("n".parse::<Heading>(), Ok(Heading::North));
        assert_eq!("West".parse::<Heading>(), Ok(Heading::West));
        assert_eq!(Heading::try_from("s".to_string()), Ok(Heading::South));
        assert!("up".parse::<Heading>().is_err());
        assert_eq!(
            "x".parse::<Heading>().unwrap_err().to_string(),
            "unknown heading 'x', expected one of N, E, S, W"
        );
    }

    #[test]
    fn heading_serializes_as_letter_and_accepts_names() {
        assert_eq!(serde_json::to_string(&Heading::East).unwrap(), "\"E\"");
        assert_eq!(serde_json::from_str::<Heading>("\"north\"").unwrap(), Heading::North);
        assert_eq!(serde_json::from_str::<Heading>("\"W\"").unwrap(), Heading::West);
        assert!(serde_json::from_str::<Heading>("\"up\"").is_err());
    }

    #[test]
    fn north_decreases_y() {
        let p = Position::new(2, 2);
        assert_eq!(p.step(Heading::North), Some(Position::new(2, 1)));
        assert_eq!(p.step(Heading::West), Some(Position::new(1, 2)));
    }

    #[test]
    fn step_past_coordinate_limits_is_none() {
        assert_eq!(Position::new(i32::MAX, 0).step(Heading::East), None);
        assert_eq!(Position::new(0, i32::MIN).step(Heading::North), None);
        assert_eq!(Position::new(i32::MAX, 0).step(Heading::West), Some(Position::new(i32::MAX - 1, 0)));
    }
}
