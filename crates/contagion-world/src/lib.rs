//! Outbreak simulation engine.
//!
//! This crate implements a per-individual SEIRD model on a toroidal grid:
//! a pathogen with stochastic transitions, a grid of hosts coupled through
//! variable-radius contact neighborhoods, and a driver that steps the grid
//! one day at a time until the epidemic burns out.

pub mod grid;
pub mod pathogen;
pub mod simulation;

pub use grid::{Census, Grid, GridSnapshot};
pub use pathogen::Pathogen;
pub use simulation::{Simulation, SimulationReport};
