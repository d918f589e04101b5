//! Toroidal grid of hosts.

use crate::pathogen::Pathogen;
use contagion_core::{GridConfig, Host, Position, Stage};
use rand::Rng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Square-neighborhood half-width for a host with `contacts` daily close
/// contacts: the inverse of "a (2k+1)x(2k+1) block minus self holds
/// `contacts` cells".
fn contact_radius(contacts: u32) -> i32 {
    (((f64::from(contacts) + 1.0).sqrt() - 1.0) / 2.0).round() as i32
}

/// Rectangular grid of host individuals along with the disease to model.
///
/// The grid owns its host array, the pathogen, and the random generator.
/// Nothing else mutates host data; collaborators get read-only views via
/// [`Grid::cells`] or [`Grid::snapshot`].
pub struct Grid {
    rows: i32,
    cols: i32,
    cells: Vec<Host>,
    scratch: Vec<Host>,
    pathogen: Pathogen,
    rng: ChaCha8Rng,
}

impl Grid {
    /// Create a grid with every host susceptible and contact counts drawn
    /// from the pathogen.
    pub fn new(config: &GridConfig, pathogen: Pathogen, mut rng: ChaCha8Rng) -> Self {
        let size = config.population();
        let mut cells = Vec::with_capacity(size);
        for _ in 0..size {
            cells.push(Host::susceptible(pathogen.contact_count(&mut rng)));
        }
        Self {
            rows: config.rows,
            cols: config.cols,
            cells,
            scratch: Vec::with_capacity(size),
            pathogen,
            rng,
        }
    }

    pub fn rows(&self) -> i32 {
        self.rows
    }

    pub fn cols(&self) -> i32 {
        self.cols
    }

    pub fn population(&self) -> usize {
        self.cells.len()
    }

    /// Host at a position (with toroidal wrapping).
    pub fn get(&self, pos: Position) -> &Host {
        let index = self.index_of(pos.wrap(self.rows, self.cols));
        &self.cells[index]
    }

    /// Flat row-major view of the host array.
    pub fn cells(&self) -> &[Host] {
        &self.cells
    }

    /// Owned read-only copy of the grid state for renderers and reporters.
    pub fn snapshot(&self) -> GridSnapshot {
        GridSnapshot {
            rows: self.rows,
            cols: self.cols,
            hosts: self.cells.clone(),
        }
    }

    /// Restore every host to susceptible with a fresh contact draw.
    pub fn reset(&mut self) {
        for cell in &mut self.cells {
            *cell = Host::susceptible(self.pathogen.contact_count(&mut self.rng));
        }
    }

    /// Plant the disease in `count` uniformly chosen hosts, with
    /// replacement; a host drawn twice is simply re-infected. Each chosen
    /// host is forced to exposed with a fresh incubation draw.
    pub fn seed(&mut self, count: u32) {
        for _ in 0..count {
            let index = self.rng.gen_range(0..self.cells.len());
            self.pathogen.infect(&mut self.cells[index], &mut self.rng);
        }
    }

    /// Advance the simulation one time step (i.e., day).
    ///
    /// Yesterday's stages decide which hosts progress and which spread.
    /// Contact exposure writes into the in-progress day, so an infection
    /// planted early in the scan is visible to hosts processed later in the
    /// same step. Outcomes therefore depend on the fixed scan order:
    /// row-major over the grid, then row-major over each contact
    /// neighborhood. Changing either order changes simulation results.
    pub fn advance(&mut self) {
        let mut yesterday = std::mem::take(&mut self.scratch);
        yesterday.clear();
        yesterday.extend_from_slice(&self.cells);

        for row in 0..self.rows {
            for col in 0..self.cols {
                let index = (row * self.cols + col) as usize;
                match yesterday[index].stage {
                    Stage::Exposed => {
                        self.pathogen.progress(&mut self.cells[index], &mut self.rng);
                    }
                    Stage::Infectious => {
                        self.pathogen.progress(&mut self.cells[index], &mut self.rng);
                        // Spreads even on its resolution day.
                        self.spread_contacts(Position::new(row, col));
                    }
                    _ => {}
                }
            }
        }

        self.scratch = yesterday;
    }

    /// Identify and potentially infect the close contacts of the infectious
    /// host at `origin`, writing into the in-progress day.
    ///
    /// The neighborhood wraps toroidally. A radius spanning more than a
    /// full grid dimension revisits cells; the first successful infection
    /// makes later visits no-ops.
    fn spread_contacts(&mut self, origin: Position) {
        let origin_index = self.index_of(origin);
        let k = contact_radius(self.cells[origin_index].contact_count);

        for d_row in -k..=k {
            for d_col in -k..=k {
                let pos = origin.offset(d_row, d_col).wrap(self.rows, self.cols);
                let index = self.index_of(pos);
                if self.cells[index].stage == Stage::Susceptible
                    && self.pathogen.transmits(&mut self.rng)
                {
                    self.pathogen.infect(&mut self.cells[index], &mut self.rng);
                }
            }
        }
    }

    /// Number of active infections (exposed plus infectious).
    pub fn count_infected(&self) -> usize {
        self.cells.iter().filter(|h| h.stage.is_infected()).count()
    }

    pub fn count_susceptible(&self) -> usize {
        self.cells
            .iter()
            .filter(|h| h.stage == Stage::Susceptible)
            .count()
    }

    pub fn count_recovered(&self) -> usize {
        self.cells
            .iter()
            .filter(|h| h.stage == Stage::Recovered)
            .count()
    }

    pub fn count_deceased(&self) -> usize {
        self.cells
            .iter()
            .filter(|h| h.stage == Stage::Deceased)
            .count()
    }

    /// Per-stage population totals in a single pass.
    pub fn census(&self) -> Census {
        let mut census = Census::default();
        for host in &self.cells {
            match host.stage {
                Stage::Susceptible => census.susceptible += 1,
                Stage::Exposed => census.exposed += 1,
                Stage::Infectious => census.infectious += 1,
                Stage::Resolved => debug_assert!(false, "resolved host observed between steps"),
                Stage::Recovered => census.recovered += 1,
                Stage::Deceased => census.deceased += 1,
            }
        }
        census
    }

    fn index_of(&self, pos: Position) -> usize {
        debug_assert!(pos.row >= 0 && pos.row < self.rows);
        debug_assert!(pos.col >= 0 && pos.col < self.cols);
        (pos.row * self.cols + pos.col) as usize
    }
}

/// Per-stage population totals.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Census {
    pub susceptible: usize,
    pub exposed: usize,
    pub infectious: usize,
    pub recovered: usize,
    pub deceased: usize,
}

impl Census {
    pub fn infected(&self) -> usize {
        self.exposed + self.infectious
    }

    pub fn total(&self) -> usize {
        self.susceptible + self.infected() + self.recovered + self.deceased
    }
}

/// Serializable read-only copy of the grid state (flat, row-major).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GridSnapshot {
    pub rows: i32,
    pub cols: i32,
    pub hosts: Vec<Host>,
}
