//! Simulation driver for running an outbreak to completion.

use crate::grid::Grid;
use crate::pathogen::Pathogen;
use contagion_core::{Result, SimConfig};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Owns a grid and steps it day by day until the epidemic burns out or the
/// day budget is exhausted. Only aggregate queries are used here; the
/// driver never touches individual host records.
pub struct Simulation {
    grid: Grid,
    max_days: u64,
    report_interval: u64,
    day: u64,
}

impl Simulation {
    /// Build the generator, pathogen, and grid, then plant the initial
    /// infections.
    pub fn new(config: &SimConfig) -> Result<Self> {
        config.validate()?;

        let rng = match config.rng_seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };
        let pathogen = Pathogen::new(&config.pathogen)?;
        let mut grid = Grid::new(&config.grid, pathogen, rng);
        grid.seed(config.initial_infections);

        Ok(Self {
            grid,
            max_days: config.max_days,
            report_interval: config.report_interval,
            day: 0,
        })
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn day(&self) -> u64 {
        self.day
    }

    /// Run until no exposed or infectious hosts remain, or until the day
    /// budget runs dry. Returns the aggregate outcome.
    pub fn run(&mut self) -> SimulationReport {
        info!(
            population = self.grid.population(),
            infected = self.grid.count_infected(),
            max_days = self.max_days,
            "starting outbreak"
        );

        while self.grid.count_infected() > 0 && self.day < self.max_days {
            self.grid.advance();
            self.day += 1;

            if self.report_interval > 0 && self.day % self.report_interval == 0 {
                let census = self.grid.census();
                debug!(
                    day = self.day,
                    susceptible = census.susceptible,
                    exposed = census.exposed,
                    infectious = census.infectious,
                    recovered = census.recovered,
                    deceased = census.deceased,
                    "progress"
                );
            }
        }

        let report = self.report();
        info!(
            event = "outbreak_complete",
            days_elapsed = report.days_elapsed,
            deceased = report.deceased,
            recovered = report.recovered,
            still_infected = report.still_infected,
            "outbreak finished"
        );
        report
    }

    fn report(&self) -> SimulationReport {
        SimulationReport {
            days_elapsed: self.day,
            recovered: self.grid.count_recovered(),
            deceased: self.grid.count_deceased(),
            still_infected: self.grid.count_infected(),
        }
    }
}

/// Aggregate outcome of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationReport {
    pub days_elapsed: u64,
    pub recovered: usize,
    pub deceased: usize,
    pub still_infected: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use contagion_core::{GridConfig, PathogenConfig};

    fn config() -> SimConfig {
        SimConfig {
            grid: GridConfig::square(5),
            pathogen: PathogenConfig {
                p_transmit: 1.0,
                p_death: 0.0,
                min_incubation_days: 1,
                mean_incubation_days: 1,
                min_infectious_days: 1,
                mean_infectious_days: 1,
                mean_contacts: 8.0,
                ..Default::default()
            },
            max_days: 200,
            initial_infections: 1,
            report_interval: 1,
            rng_seed: Some(42),
        }
    }

    #[test]
    fn test_rejects_invalid_config() {
        let mut bad = config();
        bad.grid.rows = 0;
        assert!(Simulation::new(&bad).is_err());
    }

    #[test]
    fn test_runs_are_reproducible() {
        let first = Simulation::new(&config()).unwrap().run();
        let second = Simulation::new(&config()).unwrap().run();
        assert_eq!(first, second);
    }

    #[test]
    fn test_epidemic_burns_out() {
        let mut sim = Simulation::new(&config()).unwrap();
        let report = sim.run();

        assert!(report.days_elapsed < 200);
        assert_eq!(report.still_infected, 0);
        assert_eq!(report.deceased, 0);
        assert!(report.recovered >= 1);
        assert_eq!(sim.day(), report.days_elapsed);
    }

    #[test]
    fn test_isolated_seed_resolves_in_two_days() {
        // One-day incubation plus one-day infection, no transmission:
        // the single seed is the whole epidemic.
        let mut quiet = config();
        quiet.pathogen.p_transmit = 0.0;
        let report = Simulation::new(&quiet).unwrap().run();

        assert_eq!(report.days_elapsed, 2);
        assert_eq!(report.recovered, 1);
        assert_eq!(report.deceased, 0);
        assert_eq!(report.still_infected, 0);
    }

    #[test]
    fn test_day_budget_stops_the_run() {
        let mut capped = config();
        capped.pathogen.min_incubation_days = 50;
        capped.pathogen.mean_incubation_days = 50;
        capped.max_days = 3;
        let report = Simulation::new(&capped).unwrap().run();

        assert_eq!(report.days_elapsed, 3);
        assert_eq!(report.still_infected, 1);
    }

    #[test]
    fn test_zero_day_budget() {
        let mut frozen = config();
        frozen.max_days = 0;
        let report = Simulation::new(&frozen).unwrap().run();

        assert_eq!(report.days_elapsed, 0);
        assert_eq!(report.still_infected, 1);
        assert_eq!(report.recovered + report.deceased, 0);
    }
}
