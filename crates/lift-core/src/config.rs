//! Building shape and run settings.

use crate::{Floor, LiftError, LiftResult};

/// Default master seed used when a scenario does not set one.
pub const DEFAULT_SEED: u64 = 42;

/// Top-level simulation configuration.
///
/// Policies are not part of this struct: they are passed to the simulation
/// builder alongside it.  Applications that load scenarios from files use
/// `lift_sim::ScenarioConfig`, which embeds a `SimConfig`.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimConfig {
    /// Number of floors in the building.  Must be at least 2.
    pub num_floors: Floor,

    /// Number of elevator cars.  Must be at least 1.
    pub num_elevators: u32,

    /// Passenger capacity of every car.  Must be at least 1.
    pub elevator_capacity: u32,

    /// Master RNG seed.  The same seed always produces identical results.
    #[cfg_attr(feature = "serde", serde(default = "default_seed"))]
    pub seed: u64,

    /// Enables the visualization hooks of the simulation observer.
    #[cfg_attr(feature = "serde", serde(default))]
    pub visualize: bool,

    /// Time units the visualizer is asked to pause after each rendered round.
    #[cfg_attr(feature = "serde", serde(default = "default_pause_units"))]
    pub pause_units: u32,
}

#[cfg(feature = "serde")]
fn default_seed() -> u64 {
    DEFAULT_SEED
}

#[cfg(feature = "serde")]
fn default_pause_units() -> u32 {
    1
}

impl SimConfig {
    /// A non-visualized configuration with the default seed.
    pub fn new(num_floors: Floor, num_elevators: u32, elevator_capacity: u32) -> Self {
        Self {
            num_floors,
            num_elevators,
            elevator_capacity,
            seed:        DEFAULT_SEED,
            visualize:   false,
            pause_units: 1,
        }
    }

    /// Check the building-shape invariants.
    pub fn validate(&self) -> LiftResult<()> {
        if self.num_floors < 2 {
            return Err(LiftError::Config(format!(
                "num_floors must be at least 2, got {}",
                self.num_floors
            )));
        }
        if self.num_elevators < 1 {
            return Err(LiftError::Config("num_elevators must be at least 1".into()));
        }
        if self.elevator_capacity < 1 {
            return Err(LiftError::Config("elevator_capacity must be at least 1".into()));
        }
        Ok(())
    }
}
