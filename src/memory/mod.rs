// src/memory/mod.rs

use crate::model::SurfaceType;
use serde::Serialize;
use std::collections::BTreeMap;

/// Dirt removed by one cleaning action.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct CleaningEntry {
    pub units: u32,
    pub surface: SurfaceType,
}

/// Chronological log of everything the cleaner has picked up.
/// The sum of all entries is the current load of the dirt bag.
#[derive(Default, Debug, Clone)]
pub struct CleaningRecord {
    entries: Vec<CleaningEntry>,
}

impl CleaningRecord {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    pub fn log(&mut self, units: u32, surface: SurfaceType) {
        self.entries.push(CleaningEntry { units, surface });
    }

    pub fn load(&self) -> u32 {
        self.entries.iter().map(|e| e.units).sum()
    }

    pub fn entries(&self) -> &[CleaningEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Units collected per surface type.
    pub fn by_surface(&self) -> BTreeMap<SurfaceType, u32> {
        let mut totals = BTreeMap::new();
        for entry in &self.entries {
            *totals.entry(entry.surface).or_insert(0) += entry.units;
        }
        totals
    }
}
