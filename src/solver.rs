//! Uniform solve contract shared by routing algorithms.
//!
//! A selection layer configures any solver through [`SolvingAlgorithm`]
//! without knowing its concrete type; each solver downcasts the parameter
//! object it receives and rejects types it does not understand.

use std::any::Any;
use std::fmt::Debug;

use crate::error::Result;
use crate::models::{InputData, OutputData, Point};

/// A parameter object for one concrete algorithm.
pub trait AlgorithmParams: Any + Debug + Send + Sync {
    /// Upcast used by solvers to recover the concrete type.
    fn as_any(&self) -> &dyn Any;

    /// Name of the concrete parameter type, used in error reports.
    fn params_name(&self) -> &'static str;
}

/// A routing algorithm that can be configured and run once.
///
/// # Examples
///
/// ```
/// use firefly_routing::models::{InputData, Point, Vehicle};
/// use firefly_routing::firefly::{FireflyAlgorithm, FireflyParams};
/// use firefly_routing::solver::SolvingAlgorithm;
///
/// fn run(solver: &mut dyn SolvingAlgorithm, input: InputData) -> f64 {
///     solver.set_input(input);
///     solver.solve().map(|o| o.best_fitness).unwrap_or(f64::INFINITY)
/// }
///
/// let input = InputData::new(
///     vec![Point::new(0, 1.0, 1.0), Point::new(1, 2.0, 2.0)],
///     vec![Vehicle::new(0, 1, 1.0), Vehicle::new(1, 1, 1.0)],
/// );
/// let mut solver = FireflyAlgorithm::with_params(
///     FireflyParams::default().with_fireflies(5).with_cycles(2).with_seed(3),
/// );
/// assert!(run(&mut solver, input).is_finite());
/// ```
pub trait SolvingAlgorithm {
    /// Display name of the algorithm.
    fn name(&self) -> &'static str;

    /// Takes ownership of the points and vehicles to route.
    fn set_input(&mut self, input: InputData);

    /// Accepts a parameter object, failing with
    /// [`RoutingError::ParamsMismatch`](crate::error::RoutingError::ParamsMismatch)
    /// if its concrete type belongs to another algorithm.
    fn set_parameters(&mut self, params: &dyn AlgorithmParams) -> Result<()>;

    /// Runs the algorithm. Each configured instance solves once.
    fn solve(&mut self) -> Result<OutputData>;

    /// The input points, for reporting.
    fn points(&self) -> &[Point];
}
