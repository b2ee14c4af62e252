//! Firefly population and best-candidate tracking.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use tracing::{debug, trace};

use crate::distance::DistanceMatrix;
use crate::error::{Result, RoutingError};
use crate::models::Vehicle;

use super::operators::mutate;
use super::Firefly;

/// Position of the best firefly in the population, its fitness, and the
/// cycle at which it was last replaced.
///
/// Only a strictly lower fitness replaces the best; ties keep the incumbent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BestTracker {
    index: usize,
    fitness: f64,
    iteration: usize,
}

impl BestTracker {
    /// Starts from the first firefly, then scans the rest.
    fn initialize(population: &[Firefly]) -> Self {
        let mut best = Self {
            index: 0,
            fitness: population[0].fitness(),
            iteration: 0,
        };
        best.scan(population);
        best
    }

    /// Moves to every strictly better firefly found in one pass, ending on
    /// the population minimum. Returns `true` if the best changed.
    fn scan(&mut self, population: &[Firefly]) -> bool {
        let mut improved = false;
        for (i, firefly) in population.iter().enumerate() {
            if firefly.fitness() < self.fitness {
                self.index = i;
                self.fitness = firefly.fitness();
                improved = true;
            }
        }
        improved
    }

    /// Population index of the best firefly.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Fitness of the best firefly.
    pub fn fitness(&self) -> f64 {
        self.fitness
    }

    /// Cycle at which the best was last improved (0 if never).
    pub fn iteration(&self) -> usize {
        self.iteration
    }
}

/// What one search cycle did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CycleReport {
    /// Whether the best firefly changed.
    pub improved: bool,
    /// Alpha-step swaps performed across the population.
    pub swaps: usize,
}

/// A fixed-size population of fireflies searching one problem.
///
/// # Examples
///
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use firefly_routing::models::{Point, Vehicle};
/// use firefly_routing::distance::DistanceMatrix;
/// use firefly_routing::firefly::Swarm;
///
/// let points: Vec<Point> = (0..6).map(|i| Point::new(i, i as f64, 1.0)).collect();
/// let vehicles = vec![Vehicle::new(0, 3, 1.0), Vehicle::new(1, 3, 1.0)];
/// let dm = DistanceMatrix::from_points(&points);
/// let mut rng = StdRng::seed_from_u64(42);
///
/// let mut swarm = Swarm::initialize(&vehicles, &dm, points.len(), 10, &mut rng).unwrap();
/// let before = swarm.best_tracker().fitness();
/// for cycle in 0..20 {
///     swarm.cycle(cycle, 10, 25, &mut rng);
/// }
/// assert!(swarm.best_tracker().fitness() <= before);
/// ```
pub struct Swarm<'a> {
    vehicles: &'a [Vehicle],
    distances: &'a DistanceMatrix,
    population: Vec<Firefly>,
    best: BestTracker,
    history: Vec<f64>,
}

impl<'a> Swarm<'a> {
    /// Builds `size` independent random fireflies, evaluates them and
    /// selects the initial best.
    pub fn initialize<R: Rng>(
        vehicles: &'a [Vehicle],
        distances: &'a DistanceMatrix,
        point_count: usize,
        size: usize,
        rng: &mut R,
    ) -> Result<Self> {
        if size == 0 {
            return Err(RoutingError::InvalidParameter {
                name: "fireflies",
                reason: "population needs at least one firefly".into(),
            });
        }
        for vehicle in vehicles {
            vehicle.validate()?;
        }

        let population = (0..size)
            .map(|_| {
                let mut firefly = Firefly::random(vehicles, point_count, rng)?;
                firefly.evaluate(vehicles, distances);
                Ok(firefly)
            })
            .collect::<Result<Vec<_>>>()?;

        let best = BestTracker::initialize(&population);
        debug!(
            fitness = best.fitness,
            index = best.index,
            "initial best firefly"
        );

        Ok(Self {
            vehicles,
            distances,
            population,
            best,
            history: Vec::new(),
        })
    }

    /// Runs one cycle: mutates every firefly except the best toward the
    /// best, then re-selects the best.
    ///
    /// Mutations run in parallel. Each firefly gets its own generator seeded
    /// from `rng` before the parallel section, so the outcome only depends
    /// on `rng`.
    pub fn cycle<R: Rng>(&mut self, cycle: usize, alpha: u32, beta: u32, rng: &mut R) -> CycleReport {
        let best_index = self.best.index;
        let best_flat = self.population[best_index].flatten();
        // one seed per slot, the best's included, so seeds do not depend on best_index
        let seeds: Vec<u64> = (0..self.population.len()).map(|_| rng.random()).collect();

        let vehicles = self.vehicles;
        let distances = self.distances;
        let swaps: usize = self
            .population
            .par_iter_mut()
            .zip(seeds)
            .enumerate()
            .filter(|(i, _)| *i != best_index)
            .map(|(_, (firefly, seed))| {
                let mut rng = StdRng::seed_from_u64(seed);
                mutate(firefly, &best_flat, vehicles, distances, alpha, beta, &mut rng)
            })
            .sum();
        trace!(cycle, swaps, "mutation pass done");

        let improved = self.best.scan(&self.population);
        if improved {
            self.best.iteration = cycle;
            debug!(cycle, fitness = self.best.fitness, "new best firefly");
        }
        self.history.push(self.best.fitness);

        CycleReport { improved, swaps }
    }

    /// The current best firefly.
    pub fn best(&self) -> &Firefly {
        &self.population[self.best.index]
    }

    /// Best index, fitness and last-improved cycle.
    pub fn best_tracker(&self) -> &BestTracker {
        &self.best
    }

    /// All fireflies.
    pub fn population(&self) -> &[Firefly] {
        &self.population
    }

    /// Best fitness after each completed cycle.
    pub fn history(&self) -> &[f64] {
        &self.history
    }

    /// Consumes the swarm, keeping the best firefly and the history.
    pub fn into_best(mut self) -> (Firefly, BestTracker, Vec<f64>) {
        let best = self.population.swap_remove(self.best.index);
        (best, self.best, self.history)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Point;

    fn grid(n: usize) -> Vec<Point> {
        (0..n)
            .map(|i| Point::new(i, (i % 4) as f64, (i / 4) as f64 + 1.0))
            .collect()
    }

    #[test]
    fn test_initialize_population() {
        let points = grid(8);
        let vehicles = vec![Vehicle::new(0, 5, 1.0), Vehicle::new(1, 3, 2.0)];
        let dm = DistanceMatrix::from_points(&points);
        let mut rng = StdRng::seed_from_u64(1);
        let swarm = Swarm::initialize(&vehicles, &dm, 8, 12, &mut rng).expect("feasible");

        assert_eq!(swarm.population().len(), 12);
        let min = swarm
            .population()
            .iter()
            .map(Firefly::fitness)
            .fold(f64::INFINITY, f64::min);
        assert_eq!(swarm.best_tracker().fitness(), min);
        assert_eq!(swarm.best().fitness(), min);
        assert_eq!(swarm.best_tracker().iteration(), 0);
        assert!(swarm.history().is_empty());
    }

    #[test]
    fn test_initialize_capacity_mismatch() {
        let points = grid(4);
        let vehicles = vec![Vehicle::new(0, 3, 1.0)];
        let dm = DistanceMatrix::from_points(&points);
        let mut rng = StdRng::seed_from_u64(1);
        assert!(Swarm::initialize(&vehicles, &dm, 4, 3, &mut rng).is_err());
    }

    #[test]
    fn test_initialize_empty_population() {
        let points = grid(4);
        let vehicles = vec![Vehicle::new(0, 4, 1.0)];
        let dm = DistanceMatrix::from_points(&points);
        let mut rng = StdRng::seed_from_u64(1);
        assert!(matches!(
            Swarm::initialize(&vehicles, &dm, 4, 0, &mut rng),
            Err(RoutingError::InvalidParameter {
                name: "fireflies",
                ..
            })
        ));
    }

    #[test]
    fn test_initialize_zero_capacity_vehicle() {
        let points = grid(2);
        let vehicles = vec![Vehicle::new(0, 0, 1.0), Vehicle::new(1, 2, 1.0)];
        let dm = DistanceMatrix::from_points(&points);
        let mut rng = StdRng::seed_from_u64(1);
        assert!(matches!(
            Swarm::initialize(&vehicles, &dm, 2, 4, &mut rng),
            Err(RoutingError::InvalidVehicle { id: 0, .. })
        ));
    }

    #[test]
    fn test_full_attraction_collapses_onto_best() {
        let points = vec![Point::new(0, 1.0, 0.0), Point::new(1, 0.0, 5.0)];
        let vehicles = vec![Vehicle::new(0, 1, 1.0), Vehicle::new(1, 1, 1.0)];
        let dm = DistanceMatrix::from_points(&points);
        let mut rng = StdRng::seed_from_u64(5);
        let mut swarm = Swarm::initialize(&vehicles, &dm, 2, 6, &mut rng).expect("feasible");

        for cycle in 0..5 {
            let report = swarm.cycle(cycle, 0, 100, &mut rng);
            assert_eq!(report.swaps, 0);
            let best = swarm.best().routes().to_vec();
            for firefly in swarm.population() {
                assert_eq!(firefly.routes(), best.as_slice());
            }
        }
    }

    #[test]
    fn test_zero_alpha_never_swaps() {
        let points = grid(12);
        let vehicles = vec![Vehicle::new(0, 6, 1.0), Vehicle::new(1, 6, 1.0)];
        let dm = DistanceMatrix::from_points(&points);
        let mut rng = StdRng::seed_from_u64(17);
        let mut swarm = Swarm::initialize(&vehicles, &dm, 12, 8, &mut rng).expect("feasible");
        for cycle in 0..10 {
            assert_eq!(swarm.cycle(cycle, 0, 25, &mut rng).swaps, 0);
        }
    }

    #[test]
    fn test_history_monotonic_and_last_improvement() {
        let points = grid(16);
        let vehicles = vec![
            Vehicle::new(0, 4, 1.0),
            Vehicle::new(1, 8, 1.5),
            Vehicle::new(2, 4, 0.5),
        ];
        let dm = DistanceMatrix::from_points(&points);
        let mut rng = StdRng::seed_from_u64(23);
        let mut swarm = Swarm::initialize(&vehicles, &dm, 16, 15, &mut rng).expect("feasible");

        let mut previous = swarm.best_tracker().fitness();
        let mut last_improved = 0;
        for cycle in 0..40 {
            let report = swarm.cycle(cycle, 30, 25, &mut rng);
            let current = swarm.best_tracker().fitness();
            assert!(current <= previous);
            assert_eq!(report.improved, current < previous);
            if report.improved {
                last_improved = cycle;
            }
            assert_eq!(swarm.best_tracker().iteration(), last_improved);
            previous = current;
        }
        assert_eq!(swarm.history().len(), 40);
        assert!(swarm.history().windows(2).all(|w| w[1] <= w[0]));
    }

    #[test]
    fn test_invariants_hold_after_cycles() {
        let points = grid(10);
        let vehicles = vec![Vehicle::new(0, 3, 1.0), Vehicle::new(1, 7, 1.0)];
        let dm = DistanceMatrix::from_points(&points);
        let mut rng = StdRng::seed_from_u64(31);
        let mut swarm = Swarm::initialize(&vehicles, &dm, 10, 20, &mut rng).expect("feasible");
        for cycle in 0..15 {
            swarm.cycle(cycle, 50, 40, &mut rng);
            for firefly in swarm.population() {
                assert!(firefly.is_permutation(10));
                assert!(firefly.respects_capacities(&vehicles));
            }
        }
    }

    #[test]
    fn test_cycles_deterministic_under_seed() {
        let points = grid(9);
        let vehicles = vec![Vehicle::new(0, 4, 1.0), Vehicle::new(1, 5, 1.0)];
        let dm = DistanceMatrix::from_points(&points);

        let run = |seed: u64| {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut swarm = Swarm::initialize(&vehicles, &dm, 9, 12, &mut rng).expect("feasible");
            for cycle in 0..10 {
                swarm.cycle(cycle, 20, 30, &mut rng);
            }
            swarm.population().to_vec()
        };
        assert_eq!(run(77), run(77));
    }

    #[test]
    fn test_into_best() {
        let points = grid(4);
        let vehicles = vec![Vehicle::new(0, 4, 1.0)];
        let dm = DistanceMatrix::from_points(&points);
        let mut rng = StdRng::seed_from_u64(2);
        let swarm = Swarm::initialize(&vehicles, &dm, 4, 5, &mut rng).expect("feasible");
        let expected = swarm.best().clone();
        let (best, tracker, history) = swarm.into_best();
        assert_eq!(best, expected);
        assert_eq!(tracker.fitness(), best.fitness());
        assert!(history.is_empty());
    }
}
