//! Cumulative delivery-time evaluation of routes.

use crate::distance::{DistanceMatrix, DEPOT};
use crate::models::Vehicle;

/// Walks a single vehicle's route from the depot and tracks the running
/// travel time at each delivered point.
///
/// Routes are sequences of point indices (not matrix locations).
///
/// # Examples
///
/// ```
/// use firefly_routing::models::{Point, Vehicle};
/// use firefly_routing::distance::DistanceMatrix;
/// use firefly_routing::evaluation::RouteEvaluator;
///
/// let points = vec![Point::new(0, 3.0, 4.0), Point::new(1, 6.0, 8.0)];
/// let dm = DistanceMatrix::from_points(&points);
/// let vehicle = Vehicle::new(0, 2, 1.0);
///
/// let evaluator = RouteEvaluator::new(&dm, &vehicle);
/// assert_eq!(evaluator.arrival_times(&[0, 1]), vec![5.0, 10.0]);
/// assert!((evaluator.cumulative_time(&[0, 1]) - 15.0).abs() < 1e-10);
/// ```
pub struct RouteEvaluator<'a> {
    distances: &'a DistanceMatrix,
    vehicle: &'a Vehicle,
}

impl<'a> RouteEvaluator<'a> {
    /// Creates an evaluator for one vehicle.
    pub fn new(distances: &'a DistanceMatrix, vehicle: &'a Vehicle) -> Self {
        Self { distances, vehicle }
    }

    /// Running arrival time at every point of `route`, in visiting order.
    pub fn arrival_times(&self, route: &[usize]) -> Vec<f64> {
        let mut times = Vec::with_capacity(route.len());
        self.walk(route, |_, time| times.push(time));
        times
    }

    /// Sum of the running arrival times over the whole route.
    ///
    /// Early deliveries weigh on every later term, so this favors routes
    /// that serve close points first rather than merely short routes.
    pub fn cumulative_time(&self, route: &[usize]) -> f64 {
        let mut total = 0.0;
        self.walk(route, |_, time| total += time);
        total
    }

    fn walk<F: FnMut(usize, f64)>(&self, route: &[usize], mut visit: F) {
        let mut time = 0.0;
        let mut prev = DEPOT;
        for &point in route {
            let location = DistanceMatrix::location(point);
            time += self.vehicle.travel_time(self.distances.get(prev, location));
            visit(point, time);
            prev = location;
        }
    }
}

/// Fitness of a full assignment: the cumulative time of every route, summed
/// and averaged over the number of vehicles. Lower is better.
///
/// `routes[v]` belongs to `vehicles[v]`.
pub fn fitness(routes: &[Vec<usize>], vehicles: &[Vehicle], distances: &DistanceMatrix) -> f64 {
    debug_assert_eq!(routes.len(), vehicles.len());
    if vehicles.is_empty() {
        return 0.0;
    }
    let total: f64 = routes
        .iter()
        .zip(vehicles)
        .map(|(route, vehicle)| RouteEvaluator::new(distances, vehicle).cumulative_time(route))
        .sum();
    total / vehicles.len() as f64
}

/// Estimated arrival time of every point, as `(point index, time)` pairs in
/// vehicle then visiting order.
pub fn delivery_times(
    routes: &[Vec<usize>],
    vehicles: &[Vehicle],
    distances: &DistanceMatrix,
) -> Vec<(usize, f64)> {
    let mut result = Vec::with_capacity(routes.iter().map(Vec::len).sum());
    for (route, vehicle) in routes.iter().zip(vehicles) {
        RouteEvaluator::new(distances, vehicle).walk(route, |point, time| {
            result.push((point, time));
        });
    }
    result
}
