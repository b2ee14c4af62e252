//! # firefly-routing
//!
//! Capacitated multi-vehicle delivery routing solved with a firefly swarm
//! metaheuristic. Every point is assigned to exactly one vehicle and each
//! vehicle's points are ordered into a route from the depot at (0, 0),
//! minimizing the average cumulative delivery time.
//!
//! ## Modules
//!
//! - [`models`] — Domain model types (Point, Vehicle, InputData, OutputData)
//! - [`distance`] — Distance matrix over the depot and all points
//! - [`evaluation`] — Cumulative delivery-time fitness and arrival estimates
//! - [`firefly`] — Candidate solutions, mutation operators, swarm and engine
//! - [`solver`] — Uniform solve contract for interchangeable algorithms
//! - [`error`] — Error type shared by all modules

pub mod distance;
pub mod error;
pub mod evaluation;
pub mod firefly;
pub mod models;
pub mod solver;

pub use error::{Result, RoutingError};
