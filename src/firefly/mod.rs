//! Firefly swarm search for capacitated delivery routing.
//!
//! - [`Firefly`] — One candidate: a route per vehicle covering every point once
//! - [`operators`] — Attraction, perturbation and re-split of flattened routes
//! - [`Swarm`] — Population, per-cycle mutation and best tracking
//! - [`FireflyAlgorithm`] — [`SolvingAlgorithm`](crate::solver::SolvingAlgorithm) implementation

mod algorithm;
mod candidate;
pub mod operators;
mod params;
mod swarm;

pub use algorithm::{FireflyAlgorithm, ALGORITHM_NAME};
pub use candidate::Firefly;
pub use params::FireflyParams;
pub use swarm::{BestTracker, CycleReport, Swarm};
