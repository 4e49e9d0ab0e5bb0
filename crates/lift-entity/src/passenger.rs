//! A person travelling between two floors.

use lift_core::{Floor, PassengerId};

/// A person in the simulation.
///
/// `wait_time` counts every round the passenger has spent either waiting on
/// a floor or riding an elevator.  It only ever increases.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Passenger {
    /// Assigned by the engine on admission; `INVALID` until then.
    pub id: PassengerId,

    /// Floor the passenger arrived on.
    pub start: Floor,

    /// Floor the passenger wants to reach.
    pub target: Floor,

    wait_time: u32,
}

impl Passenger {
    /// Create a passenger with zero wait time and no id.
    ///
    /// # Panics
    /// Panics if either floor is 0 or if `start == target`.
    pub fn new(start: Floor, target: Floor) -> Self {
        assert!(start >= 1 && target >= 1, "floors are 1-based: {start} -> {target}");
        assert_ne!(start, target, "passenger start and target must differ");
        Self {
            id: PassengerId::INVALID,
            start,
            target,
            wait_time: 0,
        }
    }

    /// Rounds spent waiting or riding so far.
    #[inline]
    pub fn wait_time(&self) -> u32 {
        self.wait_time
    }

    /// Add one round of waiting.
    #[inline]
    pub fn accrue_wait(&mut self) {
        self.wait_time += 1;
    }

    /// Bucketed impatience derived from `wait_time`.
    ///
    /// | wait_time | level |
    /// |-----------|-------|
    /// | 0-2       | 0     |
    /// | 3-4       | 1     |
    /// | 5-6       | 2     |
    /// | 7-8       | 3     |
    /// | ≥ 9       | 4     |
    pub fn anger_level(&self) -> u8 {
        match self.wait_time {
            0..=2 => 0,
            3..=4 => 1,
            5..=6 => 2,
            7..=8 => 3,
            _     => 4,
        }
    }
}
