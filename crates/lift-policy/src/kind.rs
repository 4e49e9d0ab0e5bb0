//! Scenario-file selector for movement policies.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{MovementPolicy, PushyPassenger, RandomAlgorithm, ShortSighted};

/// Which movement policy a scenario uses.
///
/// ```toml
/// moving_algorithm = "short_sighted"
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MovementKind {
    Random,
    PushyPassenger,
    ShortSighted,
}

impl MovementKind {
    pub const ALL: [MovementKind; 3] = [
        MovementKind::Random,
        MovementKind::PushyPassenger,
        MovementKind::ShortSighted,
    ];

    /// Construct the selected policy.
    pub fn build(self) -> Box<dyn MovementPolicy> {
        match self {
            MovementKind::Random         => Box::new(RandomAlgorithm),
            MovementKind::PushyPassenger => Box::new(PushyPassenger),
            MovementKind::ShortSighted   => Box::new(ShortSighted),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            MovementKind::Random         => "random",
            MovementKind::PushyPassenger => "pushy_passenger",
            MovementKind::ShortSighted   => "short_sighted",
        }
    }
}

impl fmt::Display for MovementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error)]
#[error("unknown movement policy {0:?}: expected \"random\", \"pushy_passenger\", or \"short_sighted\"")]
pub struct UnknownMovementKind(pub String);

impl FromStr for MovementKind {
    type Err = UnknownMovementKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MovementKind::ALL
            .into_iter()
            .find(|k| k.as_str() == s.trim())
            .ok_or_else(|| UnknownMovementKind(s.to_owned()))
    }
}
