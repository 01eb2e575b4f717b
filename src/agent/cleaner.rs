// src/agent/cleaner.rs

use crate::agent::Agent;
use crate::config::{CleanerConfig, ConfigError, FailedMovePolicy};
use crate::context::Context;
use crate::floor::{FloorPlan, Tile, TileId};
use crate::ledger::{InMemoryLedger, PowerEvent, PowerLedger, PowerRecord};
use crate::memory::CleaningRecord;
use crate::model::{Heading, Position, TileSnapshot, Turn};
use crate::protocol::Command;
use std::collections::BTreeSet;
use tracing::{debug, info, warn};

pub const STATUS_IDLE: &str = "No status yet";
pub const STATUS_FULL: &str = "The Clean Sweep is out of space for dirt!";

/// The Clean Sweep controller: moves over a floor plan, picks up dirt and
/// accounts for every unit of battery it spends.
pub struct Cleaner<F: FloorPlan, L: PowerLedger = InMemoryLedger> {
    config: CleanerConfig,
    battery: f64,
    heading: Heading,
    current: Option<TileId>,
    previous: Option<TileId>,
    bag: CleaningRecord,
    history: Vec<TileSnapshot>,
    visited: BTreeSet<Position>,
    context: Context<F, L>,
}

impl<F: FloorPlan, L: PowerLedger> Cleaner<F, L> {
    /// Fully charged cleaner with the default configuration.
    pub fn new(context: Context<F, L>, start: TileId) -> Self {
        let config = CleanerConfig::default();
        let battery = config.max_battery;
        Self::place(config, battery, context, Some(start))
    }

    /// Builds a cleaner from a validated configuration.
    /// `battery` is capped at `config.max_battery`.
    pub fn with_config(
        config: CleanerConfig,
        battery: f64,
        context: Context<F, L>,
        start: Option<TileId>,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::place(config, battery, context, start))
    }

    fn place(config: CleanerConfig, battery: f64, context: Context<F, L>, start: Option<TileId>) -> Self {
        let mut cleaner = Self {
            battery: battery.min(config.max_battery),
            config,
            heading: Heading::North,
            current: None,
            previous: None,
            bag: CleaningRecord::new(),
            history: Vec::new(),
            visited: BTreeSet::new(),
            context,
        };
        if let Some(start) = start {
            cleaner.set_current_tile(start);
        }
        cleaner
    }

    /// Places the cleaner on `tile` without spending battery.
    pub fn set_current_tile(&mut self, tile: TileId) {
        self.current = Some(tile);
        if let Some(t) = self.context.floor.tile(tile) {
            self.visited.insert(t.position());
        }
    }

    pub fn change_heading(&mut self, heading: Heading) {
        self.heading = heading;
    }

    /// Steps one tile in the current heading. Returns true if the cleaner moved.
    pub fn move_ahead(&mut self) -> bool {
        let Some(current) = self.current else {
            debug!("cleaner has not been placed on the floor");
            return false;
        };

        let floor = &self.context.floor;
        let target = floor
            .neighbor(current, self.heading)
            .filter(|&id| floor.tile(id).is_some_and(Tile::is_accessible));

        let moved = match target {
            Some(next) => {
                self.previous = Some(current);
                self.current = Some(next);
                if let Some(tile) = self.context.floor.tile(next) {
                    self.history.push(tile.snapshot());
                    self.visited.insert(tile.position());
                }
                true
            }
            None => false,
        };

        if !moved {
            debug!(heading = %self.heading, "move blocked");
            if self.config.failed_move == FailedMovePolicy::Free {
                return false;
            }
        }

        self.account_movement();
        debug!("{}", self.coordinate_report());
        moved
    }

    pub fn move_left(&mut self) -> bool {
        self.turn_and_move(Turn::Left)
    }

    pub fn move_right(&mut self) -> bool {
        self.turn_and_move(Turn::Right)
    }

    pub fn move_back(&mut self) -> bool {
        self.turn_and_move(Turn::Back)
    }

    fn turn_and_move(&mut self, turn: Turn) -> bool {
        self.heading = self.heading.turn(turn);
        self.move_ahead()
    }

    // Charges the average cost of the previous/current pair, then recharges on a station.
    fn account_movement(&mut self) {
        let Some(current) = self.current else {
            return;
        };
        let previous = self.previous.unwrap_or(current);

        let floor = &self.context.floor;
        let (Some(from), Some(to)) = (floor.tile(previous), floor.tile(current)) else {
            return;
        };
        let cost = (from.battery_cost() + to.battery_cost()) / 2.0;
        let (from, to, on_station) = (from.position(), to.position(), to.is_charging_station());

        self.context.ledger.record(PowerRecord {
            event: PowerEvent::Movement,
            previous: from,
            current: to,
            battery_before: self.battery,
            cost,
        });
        self.battery -= cost;

        if on_station {
            self.context.ledger.record(PowerRecord {
                event: PowerEvent::Charging,
                previous: from,
                current: to,
                battery_before: self.battery,
                cost: 0.0,
            });
            info!(battery = self.battery, max = self.config.max_battery, "recharged at station {}", to);
            self.battery = self.config.max_battery;
        }

        self.warn_if_depleted();
    }

    /// Removes one unit of dirt from `tile` if the bag has room.
    /// Returns true if dirt was picked up.
    pub fn clean_surface(&mut self, tile: TileId) -> bool {
        let Some(t) = self.context.floor.tile(tile) else {
            return false;
        };
        if t.is_clean() {
            return false;
        }
        if self.is_at_capacity() || self.load() + 1 > self.config.max_capacity {
            debug!(load = self.load(), "bag full, leaving dirt on {}", t.position());
            return false;
        }

        let Some(t) = self.context.floor.tile_mut(tile) else {
            return false;
        };
        if !t.remove_dirt() {
            return false;
        }
        let (surface, cost, position) = (t.surface(), t.battery_cost(), t.position());

        self.context.ledger.record(PowerRecord {
            event: PowerEvent::Cleaning,
            previous: position,
            current: position,
            battery_before: self.battery,
            cost,
        });
        self.battery -= cost;
        self.bag.log(1, surface);

        let load = self.load();
        debug_assert!(load <= self.config.max_capacity, "load {load} exceeds capacity");
        debug!(load, ?surface, "cleaned {}", position);
        if self.is_at_capacity() {
            info!(load, "{}", STATUS_FULL);
        } else if load == self.config.near_capacity {
            info!(load, "bag nearly full");
        }

        self.warn_if_depleted();
        true
    }

    /// Cleans the tile the cleaner is standing on.
    pub fn clean_current(&mut self) -> bool {
        match self.current {
            Some(tile) => self.clean_surface(tile),
            None => false,
        }
    }

    fn warn_if_depleted(&self) {
        if self.battery <= 0.0 {
            warn!(battery = self.battery, "battery exhausted");
        }
    }

    pub fn current_tile(&self) -> Option<TileId> {
        self.current
    }

    pub fn previous_tile(&self) -> Option<TileId> {
        self.previous
    }

    /// Snapshot of the current tile, or of the origin tile when the cleaner is not placed.
    pub fn current_tile_snapshot(&self) -> TileSnapshot {
        self.current
            .and_then(|id| self.context.floor.tile(id))
            .map(Tile::snapshot)
            .unwrap_or_else(TileSnapshot::origin)
    }

    pub fn heading(&self) -> Heading {
        self.heading
    }

    pub fn battery(&self) -> f64 {
        self.battery
    }

    pub fn load(&self) -> u32 {
        self.bag.load()
    }

    pub fn max_capacity(&self) -> u32 {
        self.config.max_capacity
    }

    pub fn is_at_capacity(&self) -> bool {
        self.load() == self.config.max_capacity
    }

    pub fn is_near_capacity(&self) -> bool {
        self.load() >= self.config.near_capacity
    }

    pub fn status(&self) -> String {
        if self.is_at_capacity() {
            STATUS_FULL.to_string()
        } else if self.is_near_capacity() {
            format!("The Clean Sweep's current bag size is: {}", self.load())
        } else {
            STATUS_IDLE.to_string()
        }
    }

    pub fn coordinate_report(&self) -> String {
        format!("My coordinate is {}", self.current_tile_snapshot().position)
    }

    pub fn history(&self) -> &[TileSnapshot] {
        &self.history
    }

    pub fn visited(&self) -> &BTreeSet<Position> {
        &self.visited
    }

    pub fn cleaning_record(&self) -> &CleaningRecord {
        &self.bag
    }

    pub fn floor(&self) -> &F {
        self.context.floor()
    }

    pub fn ledger(&self) -> &L {
        self.context.ledger()
    }
}

impl<F: FloorPlan, L: PowerLedger> Agent for Cleaner<F, L> {
    fn execute(&mut self, command: &Command) -> bool {
        match command {
            Command::Move { direction } => match direction {
                Turn::Ahead => self.move_ahead(),
                Turn::Left => self.move_left(),
                Turn::Right => self.move_right(),
                Turn::Back => self.move_back(),
            },
            Command::Face { heading } => {
                self.change_heading(*heading);
                true
            }
            Command::Clean => self.clean_current(),
        }
    }

    fn battery(&self) -> f64 {
        self.battery
    }

    fn load(&self) -> u32 {
        self.bag.load()
    }

    fn status(&self) -> String {
        Cleaner::status(self)
    }

    fn summary(&self) -> String {
        format!(
            "Position: {}\nHeading: {}\nBattery: {:.1}/{}\nLoad: {}/{}\nStatus: {}",
            self.current_tile_snapshot().position,
            self.heading,
            self.battery,
            self.config.max_battery,
            self.load(),
            self.config.max_capacity,
            Cleaner::status(self)
        )
    }
}
