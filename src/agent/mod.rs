// src/agent/mod.rs

use crate::protocol::Command;

pub mod cleaner;
pub use cleaner::Cleaner;

/// Something a route driver can steer one command at a time.
pub trait Agent {
    /// Applies one command. Returns false when it had no effect (blocked move, nothing cleaned).
    fn execute(&mut self, command: &Command) -> bool;
    fn battery(&self) -> f64;
    fn load(&self) -> u32;
    fn status(&self) -> String;

    fn summary(&self) -> String {
        format!(
            "Battery: {:.1}\nLoad: {}\nStatus: {}",
            self.battery(),
            self.load(),
            self.status()
        )
    }
}
