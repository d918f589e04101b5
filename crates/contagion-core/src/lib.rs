//! Core data types for the contagion simulation.
//!
//! This crate holds the plain data shared by the simulation engine and its
//! consumers: disease stages, hosts, grid positions, configuration, and the
//! common error type. It contains no randomness and no simulation logic.

pub mod config;
pub mod error;
pub mod types;

pub use config::{GridConfig, PathogenConfig, SimConfig};
pub use error::{Error, Result};
pub use types::{Host, Position, Stage};
