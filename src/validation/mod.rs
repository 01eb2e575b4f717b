// src/validation/mod.rs

pub mod route;
pub use route::{RouteValidationError, validate_route};
