//! Scenario-file selector for arrival policies.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use lift_core::Floor;

use crate::{ArrivalPolicy, ArrivalResult, FileArrivals, RandomArrivals};

/// Which arrival policy a scenario uses.
///
/// ```toml
/// arrival_generator = { kind = "random", num_people = 2 }
/// arrival_generator = { kind = "file", path = "arrivals.csv" }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ArrivalSource {
    Random {
        #[serde(default)]
        num_people: Option<u32>,
    },
    File {
        path: PathBuf,
    },
}

impl ArrivalSource {
    /// Construct the selected policy for a building with `max_floor` floors.
    pub fn build(&self, max_floor: Floor) -> ArrivalResult<Box<dyn ArrivalPolicy>> {
        Ok(match self {
            ArrivalSource::Random { num_people } => {
                Box::new(RandomArrivals::new(max_floor, *num_people)?)
            }
            ArrivalSource::File { path } => Box::new(FileArrivals::from_path(max_floor, path)?),
        })
    }

    /// Make a relative schedule path relative to `base_dir` instead of the
    /// process working directory.
    pub fn resolve_relative_to(&mut self, base_dir: &Path) {
        if let ArrivalSource::File { path } = self {
            if path.is_relative() {
                *path = base_dir.join(&*path);
            }
        }
    }
}
