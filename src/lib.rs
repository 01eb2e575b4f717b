pub mod agent;
pub mod config;
pub mod context;
pub mod floor;
pub mod ledger;
pub mod memory;
pub mod model;
pub mod protocol;
pub mod validation;
