//! Dense distance matrix over the depot and all delivery points.

use crate::models::Point;

/// Matrix location of the depot.
pub const DEPOT: usize = 0;

/// A dense n×n distance matrix stored in row-major order.
///
/// Location 0 is the depot at (0, 0); point `i` of the input lives at
/// location `i + 1` (see [`DistanceMatrix::location`]).
///
/// # Examples
///
/// ```
/// use firefly_routing::models::Point;
/// use firefly_routing::distance::{DistanceMatrix, DEPOT};
///
/// let points = vec![Point::new(0, 3.0, 4.0), Point::new(1, 6.0, 8.0)];
/// let dm = DistanceMatrix::from_points(&points);
/// assert!((dm.get(DEPOT, DistanceMatrix::location(0)) - 5.0).abs() < 1e-10);
/// assert_eq!(dm.size(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct DistanceMatrix {
    data: Vec<f64>,
    size: usize,
}

impl DistanceMatrix {
    /// Creates a distance matrix of the given size, initialized to zero.
    pub fn new(size: usize) -> Self {
        Self {
            data: vec![0.0; size * size],
            size,
        }
    }

    /// Computes Euclidean distances between the depot and every point.
    pub fn from_points(points: &[Point]) -> Self {
        let locations: Vec<Point> = std::iter::once(Point::origin())
            .chain(points.iter().copied())
            .collect();
        let n = locations.len();
        let mut dm = Self::new(n);
        for i in 0..n {
            for j in (i + 1)..n {
                let d = locations[i].distance_to(&locations[j]);
                dm.set(i, j, d);
                dm.set(j, i, d);
            }
        }
        dm
    }

    /// Matrix location of the point at `index` in the input list.
    #[inline]
    pub fn location(index: usize) -> usize {
        index + 1
    }

    /// Returns the distance from location `from` to location `to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    #[inline]
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.data[from * self.size + to]
    }

    /// Sets the distance from location `from` to location `to`.
    pub fn set(&mut self, from: usize, to: usize, distance: f64) {
        self.data[from * self.size + to] = distance;
    }

    /// Number of locations in this matrix, depot included.
    pub fn size(&self) -> usize {
        self.size
    }
}
