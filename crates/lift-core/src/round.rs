//! Simulation round model.
//!
//! A round is one discrete step of the simulation.  Rounds are numbered from
//! 0: the first round the engine runs is `Round(0)`, which is also the round
//! number scheduled-arrival files use for the first batch of passengers.

use std::fmt;

// ── Round ─────────────────────────────────────────────────────────────────────

/// An absolute round counter.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Round(pub u64);

impl std::ops::Add<u64> for Round {
    type Output = Round;
    #[inline]
    fn add(self, rhs: u64) -> Round {
        Round(self.0 + rhs)
    }
}

impl fmt::Display for Round {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "R{}", self.0)
    }
}

// ── RoundClock ────────────────────────────────────────────────────────────────

/// Tracks the next round to run.
///
/// Since rounds start at 0, `current_round.0` is also the number of rounds
/// completed so far.
#[derive(Clone, Debug, Default)]
pub struct RoundClock {
    /// The round that will be processed next.
    pub current_round: Round,
}

impl RoundClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance the clock by one round.
    #[inline]
    pub fn advance(&mut self) {
        self.current_round = self.current_round + 1;
    }

    /// Number of rounds completed.
    #[inline]
    pub fn rounds_run(&self) -> u64 {
        self.current_round.0
    }
}
