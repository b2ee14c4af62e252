//! Vehicle type with capacity and speed.

use serde::{Deserialize, Serialize};

use crate::error::{Result, RoutingError};

/// A delivery vehicle.
///
/// `capacity` is exact: a feasible assignment gives the vehicle precisely
/// that many points. `speed` converts distance into travel time.
///
/// # Examples
///
/// ```
/// use firefly_routing::models::Vehicle;
///
/// let v = Vehicle::new(0, 4, 2.0);
/// assert_eq!(v.capacity(), 4);
/// assert!((v.travel_time(10.0) - 5.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vehicle {
    id: usize,
    capacity: usize,
    speed: f64,
}

impl Vehicle {
    /// Creates a vehicle with the given ID, capacity and speed.
    pub fn new(id: usize, capacity: usize, speed: f64) -> Self {
        Self {
            id,
            capacity,
            speed,
        }
    }

    /// Vehicle ID.
    pub fn id(&self) -> usize {
        self.id
    }

    /// Number of points this vehicle must carry.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Distance covered per unit of time.
    pub fn speed(&self) -> f64 {
        self.speed
    }

    /// Time needed to cover `distance`.
    pub fn travel_time(&self, distance: f64) -> f64 {
        distance / self.speed
    }

    /// Checks that the vehicle can carry at least one point and moves at a
    /// finite positive speed.
    pub fn validate(&self) -> Result<()> {
        if self.capacity == 0 {
            return Err(RoutingError::InvalidVehicle {
                id: self.id,
                reason: "capacity must be at least 1".into(),
            });
        }
        if !self.speed.is_finite() || self.speed <= 0.0 {
            return Err(RoutingError::InvalidVehicle {
                id: self.id,
                reason: format!("speed must be finite and positive, got {}", self.speed),
            });
        }
        Ok(())
    }
}
