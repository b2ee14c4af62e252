//! Distance matrix between the depot and delivery points.

mod matrix;

pub use matrix::{DistanceMatrix, DEPOT};
