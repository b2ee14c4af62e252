//! A single candidate solution of the swarm.

use rand::Rng;

use crate::distance::DistanceMatrix;
use crate::error::{Result, RoutingError};
use crate::evaluation;
use crate::models::Vehicle;

use super::operators::split;

/// One firefly: a full assignment of point indices to vehicles.
///
/// `routes[v]` is the visiting order of `vehicles[v]` and always holds
/// exactly `vehicles[v].capacity()` entries; together the routes form a
/// permutation of `0..point_count`. The fitness is cached and refreshed by
/// [`Firefly::evaluate`].
///
/// # Examples
///
/// ```
/// use firefly_routing::firefly::Firefly;
///
/// let firefly = Firefly::new(vec![vec![2, 0], vec![1]]);
/// assert_eq!(firefly.flatten(), vec![2, 0, 1]);
/// assert_eq!(firefly.fitness(), f64::INFINITY);
/// assert!(firefly.is_permutation(3));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Firefly {
    routes: Vec<Vec<usize>>,
    fitness: f64,
}

impl Firefly {
    /// Wraps existing routes. The fitness stays unknown until evaluated.
    pub fn new(routes: Vec<Vec<usize>>) -> Self {
        Self {
            routes,
            fitness: f64::INFINITY,
        }
    }

    /// Draws a random feasible assignment.
    ///
    /// Point indices are drawn uniformly without replacement and handed out
    /// to vehicles in order, each vehicle receiving exactly its capacity.
    /// Running out of points, or leaving some undrawn, is a
    /// [`RoutingError::CapacityMismatch`].
    pub fn random<R: Rng>(vehicles: &[Vehicle], point_count: usize, rng: &mut R) -> Result<Self> {
        let mismatch = || RoutingError::CapacityMismatch {
            capacity: vehicles.iter().map(|v| v.capacity()).sum(),
            points: point_count,
        };

        let mut pool: Vec<usize> = (0..point_count).collect();
        let mut routes = Vec::with_capacity(vehicles.len());
        for vehicle in vehicles {
            let mut route = Vec::with_capacity(vehicle.capacity());
            for _ in 0..vehicle.capacity() {
                if pool.is_empty() {
                    return Err(mismatch());
                }
                let drawn = rng.random_range(0..pool.len());
                route.push(pool.swap_remove(drawn));
            }
            routes.push(route);
        }

        if !pool.is_empty() {
            return Err(mismatch());
        }
        Ok(Self::new(routes))
    }

    /// Routes in vehicle order.
    pub fn routes(&self) -> &[Vec<usize>] {
        &self.routes
    }

    /// Cached fitness (`f64::INFINITY` if never evaluated).
    pub fn fitness(&self) -> f64 {
        self.fitness
    }

    /// Recomputes and caches the fitness.
    pub fn evaluate(&mut self, vehicles: &[Vehicle], distances: &DistanceMatrix) -> f64 {
        self.fitness = evaluation::fitness(&self.routes, vehicles, distances);
        self.fitness
    }

    /// Estimated arrival time of each point index.
    pub fn delivery_times(
        &self,
        vehicles: &[Vehicle],
        distances: &DistanceMatrix,
    ) -> Vec<(usize, f64)> {
        evaluation::delivery_times(&self.routes, vehicles, distances)
    }

    /// All routes concatenated in vehicle order.
    pub fn flatten(&self) -> Vec<usize> {
        self.routes.concat()
    }

    /// Replaces the routes with `flat` cut into capacity-sized chunks and
    /// refreshes the fitness.
    pub fn resplit(&mut self, flat: &[usize], vehicles: &[Vehicle], distances: &DistanceMatrix) {
        self.routes = split(flat, vehicles);
        self.evaluate(vehicles, distances);
    }

    /// Returns `true` if the routes hold every index in `0..point_count`
    /// exactly once.
    pub fn is_permutation(&self, point_count: usize) -> bool {
        let mut seen = vec![false; point_count];
        for &point in self.routes.iter().flatten() {
            if point >= point_count || seen[point] {
                return false;
            }
            seen[point] = true;
        }
        seen.into_iter().all(|s| s)
    }

    /// Returns `true` if every route length matches its vehicle's capacity.
    pub fn respects_capacities(&self, vehicles: &[Vehicle]) -> bool {
        self.routes.len() == vehicles.len()
            && self
                .routes
                .iter()
                .zip(vehicles)
                .all(|(route, vehicle)| route.len() == vehicle.capacity())
    }
}
