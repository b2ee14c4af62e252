//! Firefly algorithm parameters.

use std::any::Any;

use serde::{Deserialize, Serialize};

use crate::error::{Result, RoutingError};
use crate::solver::AlgorithmParams;

/// Configuration parameters for the firefly search.
///
/// `alpha` and `beta` are percentages. Missing fields in a JSON document
/// fall back to the defaults.
///
/// # Examples
///
/// ```
/// use firefly_routing::firefly::FireflyParams;
///
/// let params = FireflyParams::default()
///     .with_fireflies(50)
///     .with_beta(40)
///     .with_seed(7);
/// assert_eq!(params.fireflies, 50);
/// assert_eq!(params.cycles, 200);
/// assert!(params.validate().is_ok());
///
/// let parsed = FireflyParams::from_json(r#"{"alpha": 0, "cycles": 10}"#).unwrap();
/// assert_eq!(parsed.alpha, 0);
/// assert_eq!(parsed.fireflies, 500);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FireflyParams {
    /// Population size.
    pub fireflies: usize,
    /// Number of search cycles.
    pub cycles: usize,
    /// Perturbation strength: up to `points * alpha / 100` swaps per mutation.
    pub alpha: u32,
    /// Attraction strength: chance, in percent, of copying a differing
    /// position from the best candidate. At most 100.
    pub beta: u32,
    /// Random seed (None seeds from the operating system).
    pub seed: Option<u64>,
}

impl Default for FireflyParams {
    fn default() -> Self {
        Self {
            fireflies: 500,
            cycles: 200,
            alpha: 10,
            beta: 25,
            seed: None,
        }
    }
}

impl FireflyParams {
    /// Sets the population size.
    pub fn with_fireflies(mut self, n: usize) -> Self {
        self.fireflies = n;
        self
    }

    /// Sets the number of cycles.
    pub fn with_cycles(mut self, n: usize) -> Self {
        self.cycles = n;
        self
    }

    /// Sets the perturbation strength.
    pub fn with_alpha(mut self, alpha: u32) -> Self {
        self.alpha = alpha;
        self
    }

    /// Sets the attraction strength.
    pub fn with_beta(mut self, beta: u32) -> Self {
        self.beta = beta;
        self
    }

    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Parses parameters from a JSON document and validates them.
    pub fn from_json(json: &str) -> Result<Self> {
        let params: Self = serde_json::from_str(json)?;
        params.validate()?;
        Ok(params)
    }

    /// Checks value ranges.
    pub fn validate(&self) -> Result<()> {
        if self.fireflies == 0 {
            return Err(RoutingError::InvalidParameter {
                name: "fireflies",
                reason: "population needs at least one firefly".into(),
            });
        }
        if self.beta > 100 {
            return Err(RoutingError::InvalidParameter {
                name: "beta",
                reason: format!("must be a percentage in 0..=100, got {}", self.beta),
            });
        }
        Ok(())
    }
}

impl AlgorithmParams for FireflyParams {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn params_name(&self) -> &'static str {
        "FireflyParams"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let params = FireflyParams::default();
        assert_eq!(params.fireflies, 500);
        assert_eq!(params.cycles, 200);
        assert_eq!(params.alpha, 10);
        assert_eq!(params.beta, 25);
        assert!(params.seed.is_none());
    }

    #[test]
    fn test_builder() {
        let params = FireflyParams::default()
            .with_fireflies(10)
            .with_cycles(5)
            .with_alpha(0)
            .with_beta(100)
            .with_seed(3);
        assert_eq!(
            params,
            FireflyParams {
                fireflies: 10,
                cycles: 5,
                alpha: 0,
                beta: 100,
                seed: Some(3),
            }
        );
    }

    #[test]
    fn test_zero_fireflies_rejected() {
        let err = FireflyParams::default().with_fireflies(0).validate();
        assert!(matches!(
            err,
            Err(RoutingError::InvalidParameter {
                name: "fireflies",
                ..
            })
        ));
    }

    #[test]
    fn test_beta_over_100_rejected() {
        let err = FireflyParams::default().with_beta(101).validate();
        assert!(matches!(
            err,
            Err(RoutingError::InvalidParameter { name: "beta", .. })
        ));
    }

    #[test]
    fn test_zero_cycles_allowed() {
        assert!(FireflyParams::default().with_cycles(0).validate().is_ok());
    }

    #[test]
    fn test_from_json_partial() {
        let params = FireflyParams::from_json(r#"{"fireflies": 20, "seed": 99}"#).expect("valid");
        assert_eq!(params.fireflies, 20);
        assert_eq!(params.seed, Some(99));
        assert_eq!(params.beta, 25);
    }

    #[test]
    fn test_from_json_malformed() {
        assert!(matches!(
            FireflyParams::from_json("{fireflies: }"),
            Err(RoutingError::ConfigParse(_))
        ));
    }

    #[test]
    fn test_from_json_out_of_range() {
        assert!(matches!(
            FireflyParams::from_json(r#"{"beta": 150}"#),
            Err(RoutingError::InvalidParameter { name: "beta", .. })
        ));
    }
}
