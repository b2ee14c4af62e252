//! The firefly search engine behind the uniform solve contract.

use std::collections::HashMap;

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;

use crate::distance::DistanceMatrix;
use crate::error::{Result, RoutingError};
use crate::models::{InputData, OutputData, Point, VehicleRoute};
use crate::solver::{AlgorithmParams, SolvingAlgorithm};

use super::{FireflyParams, Swarm};

/// Display name reported in [`OutputData::algorithm_name`].
pub const ALGORITHM_NAME: &str = "Firefly algorithm";

/// Firefly swarm optimizer for capacitated delivery routing.
///
/// Builds `fireflies` random feasible assignments, then for `cycles`
/// iterations pulls every non-best firefly toward the best one and
/// re-selects the best. The engine solves once; configure a new instance
/// for another run.
///
/// # Examples
///
/// ```
/// use firefly_routing::models::{InputData, Point, Vehicle};
/// use firefly_routing::firefly::{FireflyAlgorithm, FireflyParams};
/// use firefly_routing::solver::SolvingAlgorithm;
///
/// let points = vec![
///     Point::new(0, 0.0, 1.0),
///     Point::new(1, 1.0, 1.0),
///     Point::new(2, 5.0, 5.0),
///     Point::new(3, 6.0, 5.0),
/// ];
/// let vehicles = vec![Vehicle::new(0, 2, 1.0), Vehicle::new(1, 2, 1.0)];
///
/// let mut solver = FireflyAlgorithm::new();
/// solver.set_input(InputData::new(points, vehicles));
/// solver
///     .set_parameters(&FireflyParams::default().with_fireflies(20).with_cycles(30).with_seed(42))
///     .unwrap();
///
/// let output = solver.solve().unwrap();
/// assert_eq!(output.num_served(), 4);
/// assert!(solver.solve().is_err());
/// ```
#[derive(Debug, Default)]
pub struct FireflyAlgorithm {
    input: InputData,
    params: FireflyParams,
    solved: bool,
}

impl FireflyAlgorithm {
    /// Creates an engine with default parameters and no input.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an engine with the given parameters.
    pub fn with_params(params: FireflyParams) -> Self {
        Self {
            params,
            ..Self::default()
        }
    }

    /// Current parameters.
    pub fn params(&self) -> &FireflyParams {
        &self.params
    }

    fn rng(&self) -> StdRng {
        match self.params.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        }
    }

    fn run(&self) -> Result<OutputData> {
        let points = self.input.points();
        let vehicles = self.input.vehicles();
        let params = &self.params;

        info!(
            points = points.len(),
            vehicles = vehicles.len(),
            fireflies = params.fireflies,
            cycles = params.cycles,
            alpha = params.alpha,
            beta = params.beta,
            "starting firefly search"
        );

        let distances = DistanceMatrix::from_points(points);
        let mut rng = self.rng();
        let mut swarm = Swarm::initialize(vehicles, &distances, points.len(), params.fireflies, &mut rng)?;

        for cycle in 0..params.cycles {
            swarm.cycle(cycle, params.alpha, params.beta, &mut rng);
        }

        let (best, tracker, history) = swarm.into_best();
        info!(
            fitness = tracker.fitness(),
            best_iteration = tracker.iteration(),
            "firefly search finished"
        );

        let routes = best
            .routes()
            .iter()
            .zip(vehicles)
            .map(|(route, vehicle)| VehicleRoute {
                vehicle: vehicle.clone(),
                points: route.iter().map(|&i| points[i]).collect(),
            })
            .collect();
        let delivery_times: HashMap<usize, f64> = best
            .delivery_times(vehicles, &distances)
            .into_iter()
            .map(|(i, time)| (points[i].id(), time))
            .collect();

        Ok(OutputData {
            routes,
            delivery_times,
            best_iteration: tracker.iteration(),
            best_fitness: tracker.fitness(),
            history,
            algorithm_name: ALGORITHM_NAME.to_string(),
        })
    }
}

impl SolvingAlgorithm for FireflyAlgorithm {
    fn name(&self) -> &'static str {
        ALGORITHM_NAME
    }

    fn set_input(&mut self, input: InputData) {
        self.input = input;
    }

    fn set_parameters(&mut self, params: &dyn AlgorithmParams) -> Result<()> {
        let params = params
            .as_any()
            .downcast_ref::<FireflyParams>()
            .ok_or(RoutingError::ParamsMismatch {
                expected: "FireflyParams",
                found: params.params_name(),
            })?;
        params.validate()?;
        self.params = params.clone();
        Ok(())
    }

    fn solve(&mut self) -> Result<OutputData> {
        if self.solved {
            return Err(RoutingError::AlreadySolved);
        }
        self.params.validate()?;
        self.input.validate()?;
        self.solved = true;
        self.run()
    }

    fn points(&self) -> &[Point] {
        self.input.points()
    }
}
