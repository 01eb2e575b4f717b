// src/validation/route.rs

use crate::model::Heading;
use serde_json::{Value, json};

const DIRECTIONS: [&str; 4] = ["ahead", "left", "right", "back"];

#[derive(Debug, Clone, PartialEq)]
pub enum RouteValidationError {
    NotAnObject(usize),
    UnknownType { step: usize, kind: String },
    MissingField { step: usize, field: &'static str },
    InvalidDirection { step: usize, direction: String },
    InvalidHeading { step: usize, heading: String },
}

impl RouteValidationError {
    pub fn step(&self) -> usize {
        match self {
            RouteValidationError::NotAnObject(step)
            | RouteValidationError::UnknownType { step, .. }
            | RouteValidationError::MissingField { step, .. }
            | RouteValidationError::InvalidDirection { step, .. }
            | RouteValidationError::InvalidHeading { step, .. } => *step,
        }
    }

    pub fn hint(&self) -> (String, Option<Value>) {
        match self {
            RouteValidationError::NotAnObject(_) => (
                "Each route step must be a JSON object.".to_string(),
                Some(json!({ "type": "clean" })),
            ),
            RouteValidationError::UnknownType { kind, .. } => (
                format!("Unknown step type '{kind}'. Only 'move', 'face' or 'clean' are valid."),
                Some(json!({ "type": "move", "direction": "ahead" })),
            ),
            RouteValidationError::MissingField { field, .. } => (
                "Missing required field.".to_string(),
                Some(json!({ field.to_string(): "<required>" })),
            ),
            RouteValidationError::InvalidDirection { direction, .. } => (
                format!("'{direction}' is not a direction."),
                Some(json!({ "direction": DIRECTIONS })),
            ),
            RouteValidationError::InvalidHeading { heading, .. } => (
                format!("'{heading}' is not a compass heading."),
                Some(json!({ "heading": ["N", "E", "S", "W"] })),
            ),
        }
    }
}

pub fn validate_route(steps: &[Value]) -> Vec<RouteValidationError> {
    let mut errors = Vec::new();

    for (step, value) in steps.iter().enumerate() {
        if !value.is_object() {
            errors.push(RouteValidationError::NotAnObject(step));
            continue;
        }
        let Some(kind) = value.get("type").and_then(|v| v.as_str()) else {
            errors.push(RouteValidationError::MissingField { step, field: "type" });
            continue;
        };

        match kind {
            "move" => {
                let Some(direction) = value.get("direction").and_then(|v| v.as_str()) else {
                    errors.push(RouteValidationError::MissingField {
                        step,
                        field: "direction",
                    });
                    continue;
                };
                if !DIRECTIONS.contains(&direction) {
                    errors.push(RouteValidationError::InvalidDirection {
                        step,
                        direction: direction.to_string(),
                    });
                }
            }
            "face" => {
                let Some(heading) = value.get("heading").and_then(|v| v.as_str()) else {
                    errors.push(RouteValidationError::MissingField { step, field: "heading" });
                    continue;
                };
                if heading.parse::<Heading>().is_err() {
                    errors.push(RouteValidationError::InvalidHeading {
                        step,
                        heading: heading.to_string(),
                    });
                }
            }
            "clean" => {}
            unknown => {
                errors.push(RouteValidationError::UnknownType {
                    step,
                    kind: unknown.to_string(),
                });
            }
        }
    }

    errors
}
