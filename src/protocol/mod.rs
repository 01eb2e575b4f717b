// src/protocol/mod.rs

use crate::agent::Agent;
use crate::model::{Heading, Turn};
use crate::validation::{RouteValidationError, validate_route};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, warn};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Command {
    Move { direction: Turn },
    Face { heading: Heading },
    Clean,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Route {
    pub route: Vec<Command>,
}

#[derive(Debug, Error)]
pub enum RouteError {
    #[error("route is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("route document has no \"route\" array")]
    MissingRoute,
    #[error("route has {} invalid step(s)", .0.len())]
    Invalid(Vec<RouteValidationError>),
}

impl Route {
    pub fn new(route: Vec<Command>) -> Self {
        Self { route }
    }

    /// Parses `{ "route": [ ... ] }`, validating every raw step first.
    pub fn from_json(json: &str) -> Result<Self, RouteError> {
        let parsed: Value = serde_json::from_str(json)?;
        let steps = parsed
            .get("route")
            .and_then(|v| v.as_array())
            .ok_or(RouteError::MissingRoute)?;

        let errors = validate_route(steps);
        if !errors.is_empty() {
            return Err(RouteError::Invalid(errors));
        }

        Ok(serde_json::from_value(parsed)?)
    }

    pub fn len(&self) -> usize {
        self.route.len()
    }

    pub fn is_empty(&self) -> bool {
        self.route.is_empty()
    }
}

/// Outcome of driving an agent along a route.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SweepReport {
    pub commands_run: usize,
    pub moves_attempted: usize,
    pub moves_made: usize,
    pub units_cleaned: u32,
    pub battery: f64,
    pub load: u32,
    pub status: String,
    pub exhausted: bool,
}

/// Runs commands in order, stopping early once the battery is spent.
pub fn run_route<A: Agent>(agent: &mut A, route: &Route) -> SweepReport {
    let start_load = agent.load();
    let mut commands_run = 0;
    let mut moves_attempted = 0;
    let mut moves_made = 0;
    let mut exhausted = false;

    for command in &route.route {
        if agent.battery() <= 0.0 {
            warn!(remaining = route.len() - commands_run, "battery exhausted, abandoning route");
            exhausted = true;
            break;
        }

        let applied = agent.execute(command);
        commands_run += 1;
        if let Command::Move { .. } = command {
            moves_attempted += 1;
            if applied {
                moves_made += 1;
            }
        }
        debug!(?command, applied, "route step");
    }

    SweepReport {
        commands_run,
        moves_attempted,
        moves_made,
        units_cleaned: agent.load().saturating_sub(start_load),
        battery: agent.battery(),
        load: agent.load(),
        status: agent.status(),
        exhausted: exhausted || agent.battery() <= 0.0,
    }
}
