//! Error types shared by the whole crate.

use thiserror::Error;

/// Failures surfaced while configuring or running a solver.
///
/// All variants are reported before the first search cycle runs, except
/// [`RoutingError::AlreadySolved`]. A solve either produces a complete best
/// candidate or returns one of these.
#[derive(Debug, Error)]
pub enum RoutingError {
    #[error("parameter type mismatch: expected {expected}, found {found}")]
    ParamsMismatch {
        expected: &'static str,
        found: &'static str,
    },

    #[error("invalid parameter `{name}`: {reason}")]
    InvalidParameter { name: &'static str, reason: String },

    #[error("vehicle capacities sum to {capacity} but there are {points} points")]
    CapacityMismatch { capacity: usize, points: usize },

    #[error("input has no {0}")]
    EmptyInput(&'static str),

    #[error("invalid vehicle {id}: {reason}")]
    InvalidVehicle { id: usize, reason: String },

    #[error("invalid point {id}: {reason}")]
    InvalidPoint { id: usize, reason: String },

    #[error("duplicate point id {0}")]
    DuplicatePoint(usize),

    #[error("solver already ran; configure a new instance")]
    AlreadySolved,

    #[error("failed to parse parameters: {0}")]
    ConfigParse(#[from] serde_json::Error),
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, RoutingError>;
