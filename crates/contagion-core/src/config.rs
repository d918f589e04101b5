//! Configuration types for the simulation.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Disease parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathogenConfig {
    /// Display name of the disease
    pub name: String,
    /// Probability of transmission per contact per day (0.0 to 1.0)
    pub p_transmit: f64,
    /// Probability of death once an infection has run its course (0.0 to 1.0)
    pub p_death: f64,
    /// Minimum days from exposure to infectiousness
    pub min_incubation_days: u32,
    /// Average days from exposure to infectiousness
    pub mean_incubation_days: u32,
    /// Minimum days an infection lasts
    pub min_infectious_days: u32,
    /// Average days an infection lasts
    pub mean_infectious_days: u32,
    /// Average number of close contacts per day
    pub mean_contacts: f64,
    /// Days of quarantine once symptomatic (currently unused)
    pub quarantine_days: u32,
}

impl Default for PathogenConfig {
    fn default() -> Self {
        // Ebola-like parameter set
        Self {
            name: "Ebola-like".to_string(),
            p_transmit: 0.005,
            p_death: 0.5,
            min_incubation_days: 2,
            mean_incubation_days: 9,
            min_infectious_days: 7,
            mean_infectious_days: 9,
            mean_contacts: 16.0,
            quarantine_days: 1,
        }
    }
}

impl PathogenConfig {
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.p_transmit) {
            return Err(Error::InvalidConfig(format!(
                "p_transmit must be within [0, 1], got {}",
                self.p_transmit
            )));
        }
        if !(0.0..=1.0).contains(&self.p_death) {
            return Err(Error::InvalidConfig(format!(
                "p_death must be within [0, 1], got {}",
                self.p_death
            )));
        }
        if self.min_incubation_days == 0 {
            return Err(Error::InvalidConfig(
                "incubation must last at least one day".to_string(),
            ));
        }
        if self.mean_incubation_days < self.min_incubation_days {
            return Err(Error::InvalidConfig(format!(
                "mean incubation ({}) must not be below minimum ({})",
                self.mean_incubation_days, self.min_incubation_days
            )));
        }
        if self.min_infectious_days == 0 {
            return Err(Error::InvalidConfig(
                "infection must last at least one day".to_string(),
            ));
        }
        if self.mean_infectious_days < self.min_infectious_days {
            return Err(Error::InvalidConfig(format!(
                "mean infectious duration ({}) must not be below minimum ({})",
                self.mean_infectious_days, self.min_infectious_days
            )));
        }
        if self.mean_contacts <= 0.0 {
            return Err(Error::InvalidConfig(format!(
                "mean_contacts must be positive, got {}",
                self.mean_contacts
            )));
        }
        Ok(())
    }
}

/// Grid dimensions.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct GridConfig {
    /// Number of rows in the grid
    pub rows: i32,
    /// Number of columns in the grid
    pub cols: i32,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            rows: 100,
            cols: 100,
        }
    }
}

impl GridConfig {
    pub fn square(n: i32) -> Self {
        Self { rows: n, cols: n }
    }

    pub fn population(&self) -> usize {
        (self.rows as usize) * (self.cols as usize)
    }

    pub fn validate(&self) -> Result<()> {
        if self.rows <= 0 || self.cols <= 0 {
            return Err(Error::InvalidConfig(format!(
                "grid dimensions must be positive, got {}x{}",
                self.rows, self.cols
            )));
        }
        Ok(())
    }
}

/// Complete configuration for one simulation run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimConfig {
    /// Grid configuration
    pub grid: GridConfig,
    /// Disease configuration
    pub pathogen: PathogenConfig,
    /// Day budget; the run stops here even if infections remain
    pub max_days: u64,
    /// Number of hosts seeded as exposed at day zero
    pub initial_infections: u32,
    /// Days between progress reports (0 disables them)
    pub report_interval: u64,
    /// Fixed generator seed for reproducible runs; `None` seeds from entropy
    pub rng_seed: Option<u64>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            grid: GridConfig::default(),
            pathogen: PathogenConfig::default(),
            max_days: 1000,
            initial_infections: 1,
            report_interval: 1,
            rng_seed: None,
        }
    }
}

impl SimConfig {
    pub fn validate(&self) -> Result<()> {
        self.grid.validate()?;
        self.pathogen.validate()?;
        Ok(())
    }
}
