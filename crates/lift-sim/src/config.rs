//! Scenario files: building shape plus policy selection, loaded from TOML.
//!
//! # Format
//!
//! ```toml
//! num_floors        = 6
//! num_elevators     = 2
//! elevator_capacity = 3
//! visualize         = true
//! seed              = 7        # optional, default 42
//! pause_units       = 1        # optional, default 1
//!
//! moving_algorithm  = "short_sighted"
//! arrival_generator = { kind = "random", num_people = 2 }
//! ```
//!
//! Unknown keys are ignored.  A missing required key is a
//! [`SimError::Config`].

use std::path::Path;

use serde::{Deserialize, Serialize};

use lift_arrival::{ArrivalPolicy, ArrivalSource};
use lift_core::config::DEFAULT_SEED;
use lift_core::{Floor, SimConfig};
use lift_policy::{MovementKind, MovementPolicy};

use crate::{Sim, SimBuilder, SimError, SimResult};

/// A simulation whose policies were chosen at runtime.
pub type DynSim = Sim<Box<dyn ArrivalPolicy>, Box<dyn MovementPolicy>>;

/// Everything needed to build a [`Sim`] from a file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScenarioConfig {
    pub num_floors:        Floor,
    pub num_elevators:     u32,
    pub elevator_capacity: u32,
    pub arrival_generator: ArrivalSource,
    pub moving_algorithm:  MovementKind,
    pub visualize:         bool,

    #[serde(default = "default_seed")]
    pub seed:              u64,

    #[serde(default = "default_pause_units")]
    pub pause_units:       u32,
}

fn default_seed() -> u64 {
    DEFAULT_SEED
}

fn default_pause_units() -> u32 {
    1
}

impl ScenarioConfig {
    /// Parse a scenario from TOML text.
    pub fn from_toml_str(s: &str) -> SimResult<Self> {
        toml::from_str(s).map_err(|e| SimError::Config(e.to_string()))
    }

    /// Read a scenario file.  A relative schedule path inside it is taken
    /// relative to the scenario file's directory.
    pub fn from_path(path: &Path) -> SimResult<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| {
            SimError::Config(format!("cannot read scenario {}: {e}", path.display()))
        })?;
        let mut scenario = Self::from_toml_str(&text)?;
        if let Some(dir) = path.parent() {
            scenario.arrival_generator.resolve_relative_to(dir);
        }
        Ok(scenario)
    }

    /// The engine settings embedded in this scenario.
    pub fn sim_config(&self) -> SimConfig {
        SimConfig {
            num_floors:        self.num_floors,
            num_elevators:     self.num_elevators,
            elevator_capacity: self.elevator_capacity,
            seed:              self.seed,
            visualize:         self.visualize,
            pause_units:       self.pause_units,
        }
    }

    /// Build the selected policies and a ready-to-run simulation.
    pub fn build(&self) -> SimResult<DynSim> {
        let config = self.sim_config();
        config.validate()?;
        let arrivals = self.arrival_generator.build(config.num_floors)?;
        let movement = self.moving_algorithm.build();
        SimBuilder::new(config, arrivals, movement).build()
    }
}
