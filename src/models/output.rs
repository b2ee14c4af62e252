//! Solver output types.

use std::collections::HashMap;

use serde::Serialize;

use super::{Point, Vehicle};

/// The ordered points one vehicle delivers, starting from the depot.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VehicleRoute {
    /// The vehicle driving this route.
    pub vehicle: Vehicle,
    /// Points in visiting order.
    pub points: Vec<Point>,
}

impl VehicleRoute {
    /// Number of points on this route.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns `true` if the route visits no points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Result of a completed solve.
///
/// # Examples
///
/// ```
/// use firefly_routing::models::{InputData, Point, Vehicle};
/// use firefly_routing::firefly::{FireflyAlgorithm, FireflyParams};
/// use firefly_routing::solver::SolvingAlgorithm;
///
/// let mut solver = FireflyAlgorithm::new();
/// solver.set_input(InputData::new(
///     vec![Point::new(0, 1.0, 0.0), Point::new(1, 2.0, 0.0)],
///     vec![Vehicle::new(0, 2, 1.0)],
/// ));
/// solver
///     .set_parameters(&FireflyParams::default().with_fireflies(4).with_cycles(3).with_seed(1))
///     .unwrap();
/// let output = solver.solve().unwrap();
/// assert_eq!(output.routes.len(), 1);
/// assert_eq!(output.delivery_times.len(), 2);
/// assert_eq!(output.algorithm_name, "Firefly algorithm");
/// ```
#[derive(Debug, Clone, Serialize)]
pub struct OutputData {
    /// One route per vehicle, in input vehicle order.
    pub routes: Vec<VehicleRoute>,
    /// Estimated arrival time of each point, keyed by point id.
    pub delivery_times: HashMap<usize, f64>,
    /// Cycle at which the best solution was last improved.
    pub best_iteration: usize,
    /// Fitness of the best solution.
    pub best_fitness: f64,
    /// Best fitness after each cycle.
    pub history: Vec<f64>,
    /// Display name of the algorithm that produced this output.
    pub algorithm_name: String,
}

impl OutputData {
    /// Total number of delivered points across all routes.
    pub fn num_served(&self) -> usize {
        self.routes.iter().map(|r| r.len()).sum()
    }
}
