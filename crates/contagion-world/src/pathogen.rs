//! Disease representation and per-host state transitions.
//!
//! Incubation time and infection duration are assumed exponential; the
//! discrete geometric distribution stands in for the exponential because
//! the simulation advances in whole-day steps. Daily contact counts follow
//! a Poisson distribution.

use contagion_core::{Error, Host, PathogenConfig, Result, Stage};
use rand_chacha::ChaCha8Rng;
use rand_distr::{Bernoulli, Distribution, Geometric, Poisson};

/// A communicable disease and its stochastic behavior.
///
/// Parameters are immutable for the lifetime of a run. Every draw consumes
/// from the generator passed in by the caller; the pathogen itself holds no
/// generator state, so reproducibility is entirely in the caller's hands.
pub struct Pathogen {
    name: String,
    transmission: Bernoulli,
    fatality: Bernoulli,
    incubation: Geometric,
    duration: Geometric,
    contacts: Poisson<f64>,
    min_incubation_days: u32,
    min_infectious_days: u32,
}

impl Pathogen {
    /// Build a pathogen from a configuration, validating it first.
    pub fn new(config: &PathogenConfig) -> Result<Self> {
        config.validate()?;

        let incubation_p =
            1.0 / f64::from(config.mean_incubation_days - config.min_incubation_days + 1);
        let duration_p =
            1.0 / f64::from(config.mean_infectious_days - config.min_infectious_days + 1);

        Ok(Self {
            name: config.name.clone(),
            transmission: Bernoulli::new(config.p_transmit)
                .map_err(|e| Error::Distribution(e.to_string()))?,
            fatality: Bernoulli::new(config.p_death)
                .map_err(|e| Error::Distribution(e.to_string()))?,
            incubation: Geometric::new(incubation_p)
                .map_err(|e| Error::Distribution(e.to_string()))?,
            duration: Geometric::new(duration_p)
                .map_err(|e| Error::Distribution(e.to_string()))?,
            contacts: Poisson::new(config.mean_contacts)
                .map_err(|e| Error::Distribution(e.to_string()))?,
            min_incubation_days: config.min_incubation_days,
            min_infectious_days: config.min_infectious_days,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// One transmission draw for a single (infectious, susceptible) contact.
    pub fn transmits(&self, rng: &mut ChaCha8Rng) -> bool {
        self.transmission.sample(rng)
    }

    /// One fatality draw for a single resolving infection.
    pub fn kills(&self, rng: &mut ChaCha8Rng) -> bool {
        self.fatality.sample(rng)
    }

    /// Days a fresh exposure incubates before turning infectious.
    pub fn incubation_period(&self, rng: &mut ChaCha8Rng) -> u32 {
        self.min_incubation_days + self.incubation.sample(rng) as u32
    }

    /// Days a fresh infection lasts before resolving.
    pub fn infectious_period(&self, rng: &mut ChaCha8Rng) -> u32 {
        self.min_infectious_days + self.duration.sample(rng) as u32
    }

    /// Daily close-contact count for a newly created host.
    pub fn contact_count(&self, rng: &mut ChaCha8Rng) -> u32 {
        1 + self.contacts.sample(rng) as u32
    }

    /// Force a host into the exposed stage with a fresh incubation draw.
    pub fn infect(&self, host: &mut Host, rng: &mut ChaCha8Rng) {
        host.stage = Stage::Exposed;
        host.days_remaining = self.incubation_period(rng);
    }

    /// Advance an exposed or infectious host by one day.
    ///
    /// When the current stage runs out of days the host moves forward:
    /// exposure turns infectious with a fresh duration draw, and a finished
    /// infection resolves to recovered or deceased via the fatality draw.
    pub fn progress(&self, host: &mut Host, rng: &mut ChaCha8Rng) {
        debug_assert!(host.stage.is_infected());
        debug_assert!(host.days_remaining > 0);

        host.days_remaining -= 1;
        if host.days_remaining > 0 {
            return;
        }

        host.stage = host.stage.next();
        match host.stage {
            Stage::Infectious => host.days_remaining = self.infectious_period(rng),
            Stage::Resolved => {
                host.stage = if self.kills(rng) {
                    Stage::Deceased
                } else {
                    Stage::Recovered
                };
            }
            _ => debug_assert!(false, "host progressed from a non-infected stage"),
        }
    }
}
