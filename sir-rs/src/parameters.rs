use serde::Deserialize;

use crate::error::SirError;

/// Inputs to a single simulation run.
///
/// Defaults match the original interactive tool; the ranges users were
/// offered there (β ∈ [0.1, 0.8], γ ∈ [0.05, 0.3], N ∈ [500, 5000],
/// I₀ ∈ [1, 50], T ∈ [50, 300]) are advisory, not enforced — only the
/// constraints checked by [`Parameters::validate`] are hard.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct Parameters {
    /// Infection rate per contact per day (β).
    pub beta: f64,
    /// Recovery rate per day (γ), the inverse of the mean infectious period.
    pub gamma: f64,
    /// Total population size (N).
    pub population: u64,
    /// Infected count at day 0 (I₀).
    pub initial_infected: u64,
    /// Simulation horizon in days (T); the trajectory has T + 1 points.
    pub days: usize,
}

impl Default for Parameters {
    fn default() -> Self {
        Parameters {
            beta: 0.3,
            gamma: 0.1,
            population: 1000,
            initial_infected: 10,
            days: 160,
        }
    }
}

impl Parameters {
    /// Checks the model constraints: β > 0, γ > 0, N ≥ 1, 1 ≤ I₀ ≤ N, T ≥ 1.
    pub fn validate(&self) -> Result<(), SirError> {
        if !(self.beta > 0.0) {
            return Err(SirError::InvalidParameter(format!(
                "beta must be positive, got {}",
                self.beta
            )));
        }
        if !(self.gamma > 0.0) {
            return Err(SirError::InvalidParameter(format!(
                "gamma must be positive, got {}",
                self.gamma
            )));
        }
        if self.population == 0 {
            return Err(SirError::InvalidParameter(
                "population must be at least 1".to_string(),
            ));
        }
        if self.initial_infected == 0 {
            return Err(SirError::InvalidParameter(
                "initial_infected must be at least 1".to_string(),
            ));
        }
        if self.initial_infected > self.population {
            return Err(SirError::InvalidParameter(format!(
                "initial_infected ({}) exceeds population ({})",
                self.initial_infected, self.population
            )));
        }
        if self.days == 0 {
            return Err(SirError::InvalidParameter(
                "days must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
