//! Domain model types for delivery routing.
//!
//! Points and vehicles are read-only records consumed by the solver; the
//! input bundles them together and the output carries the best routes found.

mod input;
mod output;
mod point;
mod vehicle;

pub use input::InputData;
pub use output::{OutputData, VehicleRoute};
pub use point::Point;
pub use vehicle::Vehicle;
