// src/context/mod.rs

use crate::floor::FloorPlan;
use crate::ledger::{InMemoryLedger, PowerLedger};

/// Collaborators handed to a cleaner: the floor it works on and the ledger it reports to.
pub struct Context<F, L = InMemoryLedger> {
    pub floor: F,
    pub ledger: L,
}

impl<F: FloorPlan> Context<F, InMemoryLedger> {
    pub fn new(floor: F) -> Self {
        Self {
            floor,
            ledger: InMemoryLedger::new(),
        }
    }
}

impl<F: FloorPlan, L: PowerLedger> Context<F, L> {
    pub fn with_ledger<M: PowerLedger>(self, ledger: M) -> Context<F, M> {
        Context {
            floor: self.floor,
            ledger,
        }
    }

    pub fn floor(&self) -> &F {
        &self.floor
    }

    pub fn ledger(&self) -> &L {
        &self.ledger
    }
}
