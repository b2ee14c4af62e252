//! Problem input: delivery points and the fleet.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::{Point, Vehicle};
use crate::error::{Result, RoutingError};

/// Delivery points and vehicles handed to a solver.
///
/// # Examples
///
/// ```
/// use firefly_routing::models::{InputData, Point, Vehicle};
///
/// let input = InputData::new(
///     vec![Point::new(0, 1.0, 0.0), Point::new(1, 0.0, 1.0)],
///     vec![Vehicle::new(0, 2, 1.0)],
/// );
/// assert_eq!(input.total_capacity(), 2);
/// assert!(input.validate().is_ok());
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InputData {
    points: Vec<Point>,
    vehicles: Vec<Vehicle>,
}

impl InputData {
    /// Creates an input from points and vehicles.
    pub fn new(points: Vec<Point>, vehicles: Vec<Vehicle>) -> Self {
        Self { points, vehicles }
    }

    /// Delivery points.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Vehicles, in route order.
    pub fn vehicles(&self) -> &[Vehicle] {
        &self.vehicles
    }

    /// Sum of all vehicle capacities.
    pub fn total_capacity(&self) -> usize {
        self.vehicles.iter().map(|v| v.capacity()).sum()
    }

    /// Checks every precondition the solver relies on.
    ///
    /// Fails on empty points or vehicles, invalid vehicles, non-finite or
    /// duplicate points, or a capacity sum that differs from the point count.
    pub fn validate(&self) -> Result<()> {
        if self.points.is_empty() {
            return Err(RoutingError::EmptyInput("points"));
        }
        if self.vehicles.is_empty() {
            return Err(RoutingError::EmptyInput("vehicles"));
        }
        for vehicle in &self.vehicles {
            vehicle.validate()?;
        }

        let mut seen = HashSet::with_capacity(self.points.len());
        for point in &self.points {
            point.validate()?;
            if !seen.insert(point.id()) {
                return Err(RoutingError::DuplicatePoint(point.id()));
            }
        }

        let capacity = self.total_capacity();
        if capacity != self.points.len() {
            return Err(RoutingError::CapacityMismatch {
                capacity,
                points: self.points.len(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn points(n: usize) -> Vec<Point> {
        (0..n).map(|i| Point::new(i, i as f64, 0.0)).collect()
    }

    #[test]
    fn test_valid_input() {
        let input = InputData::new(
            points(5),
            vec![Vehicle::new(0, 2, 1.0), Vehicle::new(1, 3, 1.0)],
        );
        assert!(input.validate().is_ok());
        assert_eq!(input.total_capacity(), 5);
    }

    #[test]
    fn test_empty_points() {
        let input = InputData::new(vec![], vec![Vehicle::new(0, 1, 1.0)]);
        assert!(matches!(
            input.validate(),
            Err(RoutingError::EmptyInput("points"))
        ));
    }

    #[test]
    fn test_empty_vehicles() {
        let input = InputData::new(points(1), vec![]);
        assert!(matches!(
            input.validate(),
            Err(RoutingError::EmptyInput("vehicles"))
        ));
    }

    #[test]
    fn test_capacity_underflow() {
        let input = InputData::new(points(4), vec![Vehicle::new(0, 3, 1.0)]);
        assert!(matches!(
            input.validate(),
            Err(RoutingError::CapacityMismatch {
                capacity: 3,
                points: 4
            })
        ));
    }

    #[test]
    fn test_capacity_overflow() {
        let input = InputData::new(points(2), vec![Vehicle::new(0, 3, 1.0)]);
        assert!(matches!(
            input.validate(),
            Err(RoutingError::CapacityMismatch { .. })
        ));
    }

    #[test]
    fn test_duplicate_point_id() {
        let input = InputData::new(
            vec![Point::new(4, 0.0, 1.0), Point::new(4, 2.0, 2.0)],
            vec![Vehicle::new(0, 2, 1.0)],
        );
        assert!(matches!(
            input.validate(),
            Err(RoutingError::DuplicatePoint(4))
        ));
    }

    #[test]
    fn test_non_finite_point() {
        let input = InputData::new(
            vec![Point::new(0, f64::NAN, 0.0), Point::new(1, 1.0, 1.0)],
            vec![Vehicle::new(0, 2, 1.0)],
        );
        assert!(matches!(
            input.validate(),
            Err(RoutingError::InvalidPoint { id: 0, .. })
        ));
    }

    #[test]
    fn test_same_coordinates_different_ids() {
        let input = InputData::new(
            vec![Point::new(0, 1.0, 1.0), Point::new(1, 1.0, 1.0)],
            vec![Vehicle::new(0, 2, 1.0)],
        );
        assert!(input.validate().is_ok());
    }
}
