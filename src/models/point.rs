//! Delivery point type.

use serde::{Deserialize, Serialize};

use crate::error::{Result, RoutingError};

/// A delivery location on the plane.
///
/// Points compare structurally over `(id, x, y)`. Ids are unique within an
/// input, so two deliveries at the same coordinates are still distinct
/// points.
///
/// # Examples
///
/// ```
/// use firefly_routing::models::Point;
///
/// let p = Point::new(1, 3.0, 4.0);
/// assert_eq!(p.id(), 1);
/// assert!((p.distance_to(&Point::origin()) - 5.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    id: usize,
    x: f64,
    y: f64,
}

impl Point {
    /// Creates a point with the given id and coordinates.
    pub fn new(id: usize, x: f64, y: f64) -> Self {
        Self { id, x, y }
    }

    /// The depot location (0, 0). Its id is not meaningful.
    pub fn origin() -> Self {
        Self::new(usize::MAX, 0.0, 0.0)
    }

    /// Point ID.
    pub fn id(&self) -> usize {
        self.id
    }

    /// X-coordinate.
    pub fn x(&self) -> f64 {
        self.x
    }

    /// Y-coordinate.
    pub fn y(&self) -> f64 {
        self.y
    }

    /// Euclidean distance to another point.
    pub fn distance_to(&self, other: &Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Checks that both coordinates are finite.
    pub fn validate(&self) -> Result<()> {
        if !self.x.is_finite() || !self.y.is_finite() {
            return Err(RoutingError::InvalidPoint {
                id: self.id,
                reason: format!("coordinates must be finite, got ({}, {})", self.x, self.y),
            });
        }
        Ok(())
    }
}
