// src/config/mod.rs

use serde::Deserialize;
use thiserror::Error;

pub const MAX_BATTERY_POWER: f64 = 250.0;
pub const MAX_DIRT_CAPACITY: u32 = 50;
pub const NEAR_CAPACITY_THRESHOLD: u32 = 35;

/// What a move into a blocked or missing neighbor costs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailedMovePolicy {
    /// Nothing is charged or recorded when the cleaner does not move.
    #[default]
    Free,
    /// The average cost of the unchanged previous/current tiles is charged,
    /// and a charging station under the cleaner still recharges it.
    Charged,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("max_capacity must be greater than zero")]
    ZeroCapacity,
    #[error("near_capacity ({near}) must not exceed max_capacity ({max})")]
    ThresholdAboveCapacity { near: u32, max: u32 },
    #[error("max_battery must be positive, got {0}")]
    NonPositiveBattery(f64),
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct CleanerConfig {
    pub max_battery: f64,
    pub max_capacity: u32,
    pub near_capacity: u32,
    pub failed_move: FailedMovePolicy,
}

impl Default for CleanerConfig {
    fn default() -> Self {
        Self {
            max_battery: MAX_BATTERY_POWER,
            max_capacity: MAX_DIRT_CAPACITY,
            near_capacity: NEAR_CAPACITY_THRESHOLD,
            failed_move: FailedMovePolicy::default(),
        }
    }
}

impl CleanerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_battery(mut self, max_battery: f64) -> Self {
        self.max_battery = max_battery;
        self
    }

    pub fn with_max_capacity(mut self, max_capacity: u32) -> Self {
        self.max_capacity = max_capacity;
        self
    }

    pub fn with_near_capacity(mut self, near_capacity: u32) -> Self {
        self.near_capacity = near_capacity;
        self
    }

    pub fn with_failed_move_policy(mut self, policy: FailedMovePolicy) -> Self {
        self.failed_move = policy;
        self
    }

    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: CleanerConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_capacity == 0 {
            return Err(ConfigError::ZeroCapacity);
        }
        if self.near_capacity > self.max_capacity {
            return Err(ConfigError::ThresholdAboveCapacity {
                near: self.near_capacity,
                max: self.max_capacity,
            });
        }
        if self.max_battery <= 0.0 || self.max_battery.is_nan() {
            return Err(ConfigError::NonPositiveBattery(self.max_battery));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_clean_sweep_hardware() {
        let config = CleanerConfig::default();
        assert_eq!(config.max_battery, 250.0);
        assert_eq!(config.max_capacity, 50);
        assert_eq!(config.near_capacity, 35);
        assert_eq!(config.failed_move, FailedMovePolicy::Free);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let config =
            CleanerConfig::from_json_str(r#"{ "max_capacity": 10, "near_capacity": 8, "failed_move": "charged" }"#)
                .unwrap();
        assert_eq!(config.max_capacity, 10);
        assert_eq!(config.near_capacity, 8);
        assert_eq!(config.max_battery, 250.0);
        assert_eq!(config.failed_move, FailedMovePolicy::Charged);
    }

    #[test]
    fn rejects_inconsistent_thresholds() {
        let err = CleanerConfig::from_json_str(r#"{ "max_capacity": 10 }"#).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::ThresholdAboveCapacity { near: 35, max: 10 }
        ));
        assert!(matches!(
            CleanerConfig::new().with_max_capacity(0).validate(),
            Err(ConfigError::ZeroCapacity)
        ));
        assert!(matches!(
            CleanerConfig::new().with_max_battery(0.0).validate(),
            Err(ConfigError::NonPositiveBattery(_))
        ));
        assert!(matches!(
            CleanerConfig::from_json_str("{ not json"),
            Err(ConfigError::Parse(_))
        ));
    }
}
