//! Route evaluation: cumulative delivery times and fitness.

mod evaluator;

pub use evaluator::{delivery_times, fitness, RouteEvaluator};
