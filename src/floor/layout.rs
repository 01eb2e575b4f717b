// src/floor/layout.rs

use crate::floor::{GridFloor, Tile};
use crate::model::{Position, SurfaceType};
use regex::Regex;
use thiserror::Error;

const TOKEN_PATTERN: &str = r"^(?:(?P<surface>[BLH])(?P<dirt>\d+)|(?P<station>C)|(?P<wall>#)|(?P<void>\.))$";

#[derive(Debug, Error)]
pub enum LayoutError {
    #[error("unrecognized tile '{token}' at row {row}, column {column}")]
    UnknownToken {
        token: String,
        row: usize,
        column: usize,
    },
    #[error("dirt amount out of range in '{token}' at row {row}, column {column}")]
    DirtOutOfRange {
        token: String,
        row: usize,
        column: usize,
    },
    #[error("layout contains no tiles")]
    Empty,
    #[error("invalid tile pattern: {0}")]
    Pattern(#[from] regex::Error),
}

/// Parses a text floor layout into a grid.
///
/// One row per line, the first line being the northernmost row. Tokens are
/// separated by whitespace:
///
/// - `B<n>`, `L<n>`, `H<n>`: bare floor, low pile or high pile holding `n` units of dirt
/// - `C`: charging station on bare floor
/// - `#`: obstacle
/// - `.`: no tile
///
/// Lines starting with `//` are ignored.
pub fn parse_layout(text: &str) -> Result<GridFloor, LayoutError> {
    let token_re = Regex::new(TOKEN_PATTERN)?;
    let mut floor = GridFloor::new();

    let rows = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with("//"));

    for (row, line) in rows.enumerate() {
        for (column, token) in line.split_whitespace().enumerate() {
            let position = Position::new(column as i32, row as i32);
            let caps = token_re
                .captures(token)
                .ok_or_else(|| LayoutError::UnknownToken {
                    token: token.to_string(),
                    row,
                    column,
                })?;

            let tile = if let Some(surface) = caps.name("surface") {
                let surface = match surface.as_str() {
                    "B" => SurfaceType::BareFloor,
                    "L" => SurfaceType::LowPile,
                    _ => SurfaceType::HighPile,
                };
                let dirt = caps["dirt"]
                    .parse::<u32>()
                    .map_err(|_| LayoutError::DirtOutOfRange {
                        token: token.to_string(),
                        row,
                        column,
                    })?;
                Tile::new(position, surface, dirt)
            } else if caps.name("station").is_some() {
                Tile::new(position, SurfaceType::BareFloor, 0).as_charging_station()
            } else if caps.name("wall").is_some() {
                Tile::new(position, SurfaceType::BareFloor, 0).as_obstacle()
            } else {
                continue;
            };

            floor.insert(tile);
        }
    }

    if floor.is_empty() {
        return Err(LayoutError::Empty);
    }
    Ok(floor)
}
