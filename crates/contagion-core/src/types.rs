//! Core type definitions for the simulation.

use serde::{Deserialize, Serialize};

/// Disease progression stage of a single host.
///
/// `Resolved` is transient: an infection that runs its course resolves to
/// `Recovered` or `Deceased` within the same day step, so `Resolved` is
/// never observed between steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Stage {
    Susceptible,
    Exposed,
    Infectious,
    Resolved,
    Recovered,
    Deceased,
}

impl Stage {
    /// The next stage along the forward disease course.
    ///
    /// `Resolved -> Recovered` is the survival branch; the fatality draw
    /// swaps in `Deceased` at resolution time. Terminal stages return
    /// themselves.
    pub fn next(self) -> Stage {
        match self {
            Stage::Susceptible => Stage::Exposed,
            Stage::Exposed => Stage::Infectious,
            Stage::Infectious => Stage::Resolved,
            Stage::Resolved => Stage::Recovered,
            Stage::Recovered => Stage::Recovered,
            Stage::Deceased => Stage::Deceased,
        }
    }

    /// A host in a terminal stage never changes again.
    pub fn is_terminal(self) -> bool {
        matches!(self, Stage::Recovered | Stage::Deceased)
    }

    /// Whether this stage counts toward the active infection total.
    pub fn is_infected(self) -> bool {
        matches!(self, Stage::Exposed | Stage::Infectious)
    }

    /// Single-character rendering of this stage.
    pub fn glyph(self) -> char {
        match self {
            Stage::Susceptible => 's',
            Stage::Exposed => 'e',
            Stage::Infectious => 'I',
            Stage::Resolved => '!',
            Stage::Recovered => 'R',
            Stage::Deceased => ' ',
        }
    }
}

/// A single individual in the population.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Host {
    pub stage: Stage,
    /// Days left in the current stage. Meaningful only while `Exposed` or
    /// `Infectious`; reaching zero mid-step advances the stage.
    pub days_remaining: u32,
    /// Daily close-contact count, drawn once when the host is created and
    /// used to size the exposure neighborhood while `Infectious`.
    pub contact_count: u32,
}

impl Host {
    /// A fresh susceptible host with the given contact count.
    pub fn susceptible(contact_count: u32) -> Self {
        Self {
            stage: Stage::Susceptible,
            days_remaining: 0,
            contact_count,
        }
    }
}

/// 2D position on the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub row: i32,
    pub col: i32,
}

impl Position {
    pub fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    pub fn offset(&self, d_row: i32, d_col: i32) -> Self {
        Self {
            row: self.row + d_row,
            col: self.col + d_col,
        }
    }

    /// Apply toroidal wrapping for the given grid dimensions.
    ///
    /// True modulo arithmetic, so offsets exceeding a full grid dimension
    /// still resolve to an in-range index.
    pub fn wrap(&self, rows: i32, cols: i32) -> Self {
        Self {
            row: ((self.row % rows) + rows) % rows,
            col: ((self.col % cols) + cols) % cols,
        }
    }
}
