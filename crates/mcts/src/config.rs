//! MCTS configuration parameters.
//!
//! These parameters control the behavior of the Monte Carlo Tree Search algorithm.

use playout_core::{PlayoutError, Result};

/// Default number of iterations per decision.
pub const DEFAULT_ITERATION_BUDGET: usize = 500;

/// Default UCB1 exploration constant.
pub const DEFAULT_EXPLORATION_CONSTANT: f64 = 2.0;

/// MCTS configuration parameters.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct MctsConfig {
    /// Number of select/expand/rollout/backpropagate iterations per search.
    /// This is the only stopping condition of a search.
    pub iteration_budget: usize,

    /// UCB1 exploration constant `C` in
    /// `win_rate + C * sqrt(ln(N_parent) / N_child)`.
    /// Higher values favor rarely visited children.
    pub exploration_constant: f64,
}

impl Default for MctsConfig {
    fn default() -> Self {
        Self {
            iteration_budget: DEFAULT_ITERATION_BUDGET,
            exploration_constant: DEFAULT_EXPLORATION_CONSTANT,
        }
    }
}

impl MctsConfig {
    /// Create a new config with the specified number of iterations.
    pub fn with_iterations(iteration_budget: usize) -> Self {
        Self {
            iteration_budget,
            ..Default::default()
        }
    }

    /// Builder pattern: set the exploration constant.
    pub fn with_exploration(mut self, exploration_constant: f64) -> Self {
        self.exploration_constant = exploration_constant;
        self
    }

    /// Check that the configuration can drive a search.
    ///
    /// # Errors
    /// Returns `PlayoutError::InvalidConfig` if the iteration budget is zero
    /// or the exploration constant is negative or not finite.
    pub fn validate(&self) -> Result<()> {
        if self.iteration_budget == 0 {
            return Err(PlayoutError::InvalidConfig(
                "iteration budget must be at least 1".to_string(),
            ));
        }

        if !self.exploration_constant.is_finite() || self.exploration_constant < 0.0 {
            return Err(PlayoutError::InvalidConfig(format!(
                "exploration constant {} must be finite and non-negative",
                self.exploration_constant
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = MctsConfig::default();
        assert_eq!(config.iteration_budget, 500);
        assert!((config.exploration_constant - 2.0).abs() < 1e-12);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_with_iterations() {
        let config = MctsConfig::with_iterations(50);
        assert_eq!(config.iteration_budget, 50);
        // Other values should be default
        assert!((config.exploration_constant - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_builder_pattern() {
        let config = MctsConfig::with_iterations(10).with_exploration(1.4);
        assert_eq!(config.iteration_budget, 10);
        assert!((config.exploration_constant - 1.4).abs() < 1e-12);
    }

    #[test]
    fn test_zero_budget_rejected() {
        let config = MctsConfig::with_iterations(0);
        assert!(matches!(
            config.validate(),
            Err(PlayoutError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_bad_exploration_rejected() {
        for c in [-1.0, f64::NAN, f64::INFINITY] {
            let config = MctsConfig::default().with_exploration(c);
            assert!(config.validate().is_err(), "accepted exploration {c}");
        }
    }

    #[test]
    fn test_zero_exploration_allowed() {
        let config = MctsConfig::default().with_exploration(0.0);
        assert!(config.validate().is_ok());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_deserialize_partial() {
        let config: MctsConfig = serde_json::from_str(r#"{"iteration_budget": 64}"#).unwrap();
        assert_eq!(config.iteration_budget, 64);
        assert!((config.exploration_constant - 2.0).abs() < 1e-12);
    }
}
