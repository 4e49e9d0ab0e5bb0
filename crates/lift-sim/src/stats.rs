//! Completion statistics and per-round summaries.

use std::fmt;

use lift_core::Round;

// ── WaitStats ─────────────────────────────────────────────────────────────────

/// Running accumulator owned by the engine.
///
/// Arrivals are counted as they are admitted; everything else is updated
/// only when a passenger completes.
#[derive(Debug, Clone, Default)]
pub struct WaitStats {
    total_people:     u64,
    completion_times: Vec<u32>,
    max_time:         Option<u32>,
}

impl WaitStats {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn record_arrival(&mut self) {
        self.total_people += 1;
    }

    /// Record a passenger reaching its target after `wait_time` rounds.
    pub fn record_completion(&mut self, wait_time: u32) {
        self.completion_times.push(wait_time);
        self.max_time = Some(self.max_time.map_or(wait_time, |m| m.max(wait_time)));
    }

    pub fn total_people(&self) -> u64 {
        self.total_people
    }

    pub fn people_completed(&self) -> u64 {
        self.completion_times.len() as u64
    }

    /// Snapshot the accumulator into a report.
    pub fn summarize(&self, num_iterations: u64) -> SimStats {
        let times = &self.completion_times;
        let (min_time, avg_time) = if times.is_empty() {
            (-1, -1)
        } else {
            let sum: u64 = times.iter().map(|&t| t as u64).sum();
            let min = times.iter().copied().min().unwrap_or(0);
            (min as i64, (sum / times.len() as u64) as i64)
        };
        SimStats {
            num_iterations,
            total_people:     self.total_people,
            people_completed: self.people_completed(),
            max_time:         self.max_time.map_or(-1, i64::from),
            min_time,
            avg_time,
        }
    }
}

// ── SimStats ──────────────────────────────────────────────────────────────────

/// End-of-run report.
///
/// The three wait-time fields are `-1` when nobody has completed a trip.
/// `avg_time` is rounded down.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimStats {
    /// Rounds run since the engine was built.
    pub num_iterations:   u64,
    /// Passengers admitted.
    pub total_people:     u64,
    /// Passengers who reached their target.
    pub people_completed: u64,
    pub max_time:         i64,
    pub min_time:         i64,
    pub avg_time:         i64,
}

impl fmt::Display for SimStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "rounds={} arrived={} completed={} wait[min={} avg={} max={}]",
            self.num_iterations,
            self.total_people,
            self.people_completed,
            self.min_time,
            self.avg_time,
            self.max_time,
        )
    }
}

// ── RoundSummary ──────────────────────────────────────────────────────────────

/// What happened during one round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RoundSummary {
    pub round:    Round,
    /// Passengers admitted this round.
    pub arrived:  usize,
    /// Passengers who completed this round.
    pub alighted: usize,
    /// Passengers who boarded this round.
    pub boarded:  usize,
    /// Passengers still waiting on a floor at the end of the round.
    pub waiting:  usize,
    /// Passengers aboard a car at the end of the round.
    pub riding:   usize,
}
