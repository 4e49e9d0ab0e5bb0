//! Plain data row types written by output backends.

use lift_sim::{RoundSummary, SimStats};

/// One row per simulated round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundSummaryRow {
    pub round:    u64,
    pub arrived:  u64,
    pub alighted: u64,
    pub boarded:  u64,
    /// Passengers still queued on any floor after the round.
    pub waiting:  u64,
    /// Passengers aboard any car after the round.
    pub riding:   u64,
}

impl From<&RoundSummary> for RoundSummaryRow {
    fn from(s: &RoundSummary) -> Self {
        Self {
            round:    s.round.0,
            arrived:  s.arrived as u64,
            alighted: s.alighted as u64,
            boarded:  s.boarded as u64,
            waiting:  s.waiting as u64,
            riding:   s.riding as u64,
        }
    }
}

/// Cumulative statistics at the end of one `run` call.  `-1` in the time
/// columns means nobody has completed a trip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunStatsRow {
    pub num_iterations:   u64,
    pub total_people:     u64,
    pub people_completed: u64,
    pub max_time:         i64,
    pub min_time:         i64,
    pub avg_time:         i64,
}

impl From<&SimStats> for RunStatsRow {
    fn from(s: &SimStats) -> Self {
        Self {
            num_iterations:   s.num_iterations,
            total_people:     s.total_people,
            people_completed: s.people_completed,
            max_time:         s.max_time,
            min_time:         s.min_time,
            avg_time:         s.avg_time,
        }
    }
}
