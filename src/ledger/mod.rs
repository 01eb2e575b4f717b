// src/ledger/mod.rs

use crate::model::Position;
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// Kind of battery-affecting event.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PowerEvent {
    Movement,
    Cleaning,
    Charging,
}

impl PowerEvent {
    pub fn as_str(self) -> &'static str {
        match self {
            PowerEvent::Movement => "Movement",
            PowerEvent::Cleaning => "Cleaning",
            PowerEvent::Charging => "Charging",
        }
    }
}

impl fmt::Display for PowerEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One ledger line. `battery_before` is the level prior to applying `cost`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PowerRecord {
    pub event: PowerEvent,
    pub previous: Position,
    pub current: Position,
    pub battery_before: f64,
    pub cost: f64,
}

/// Append-only sink for battery-affecting events.
pub trait PowerLedger {
    fn record(&mut self, entry: PowerRecord);
    fn records(&self) -> Vec<PowerRecord>;
}

#[derive(Default, Debug, Clone)]
pub struct InMemoryLedger {
    pub entries: Vec<PowerRecord>,
}

impl InMemoryLedger {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Sum of costs for one event kind.
    pub fn total(&self, event: PowerEvent) -> f64 {
        self.entries
            .iter()
            .filter(|e| e.event == event)
            .map(|e| e.cost)
            .sum()
    }

    pub fn count(&self, event: PowerEvent) -> usize {
        self.entries.iter().filter(|e| e.event == event).count()
    }
}

impl PowerLedger for InMemoryLedger {
    fn record(&mut self, entry: PowerRecord) {
        self.entries.push(entry);
    }

    fn records(&self) -> Vec<PowerRecord> {
        self.entries.clone()
    }
}

/// Several cleaners on one thread can append to a single ledger through a shared handle.
impl<L: PowerLedger> PowerLedger for Rc<RefCell<L>> {
    fn record(&mut self, entry: PowerRecord) {
        self.borrow_mut().record(entry);
    }

    fn records(&self) -> Vec<PowerRecord> {
        self.borrow().records()
    }
}
