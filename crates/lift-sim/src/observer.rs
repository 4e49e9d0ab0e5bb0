//! Simulation observer trait for visualization and data collection.

use lift_arrival::Arrivals;
use lift_core::{Direction, ElevatorId, Round};
use lift_entity::{Elevator, Passenger, WaitingRegistry};

use crate::{RoundSummary, SimStats};

/// Callbacks invoked by [`Sim::run`][crate::Sim::run] at fixed points in the
/// round pipeline.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// The *visualization* hooks (`on_round_start` through `on_pause`) are only
/// called when `SimConfig::visualize` is set.  The *data* hooks
/// (`on_round_end`, `on_sim_end`) are always called.
///
/// # Example: progress printer
///
/// ```rust,ignore
/// struct ProgressPrinter;
///
/// impl SimObserver for ProgressPrinter {
///     fn on_round_end(&mut self, round: Round, summary: &RoundSummary) {
///         println!("{round}: {} waiting, {} riding", summary.waiting, summary.riding);
///     }
/// }
/// ```
pub trait SimObserver {
    // ── Visualization hooks ──────────────────────────────────────────────

    /// Start of a round, before wait-time accrual.
    fn on_round_start(&mut self, _round: Round) {}

    /// New passengers for this round, ids already assigned.
    fn on_arrivals(&mut self, _round: Round, _arrivals: &Arrivals) {}

    /// `passenger` stepped into `elevator`.
    fn on_boarding(&mut self, _passenger: &Passenger, _elevator: ElevatorId) {}

    /// `passenger` reached its target and left `elevator`.
    fn on_disembarking(&mut self, _passenger: &Passenger, _elevator: ElevatorId) {}

    /// Cars after moving, with the directions they were given.
    fn on_elevator_moves(&mut self, _elevators: &[Elevator], _directions: &[Direction]) {}

    /// Draw the building as it stands at the end of the round.
    fn on_render(&mut self, _round: Round, _elevators: &[Elevator], _waiting: &WaitingRegistry) {}

    /// Hold the frame for `units` time units.
    fn on_pause(&mut self, _units: u32) {}

    // ── Data hooks ───────────────────────────────────────────────────────

    /// End of a round.
    fn on_round_end(&mut self, _round: Round, _summary: &RoundSummary) {}

    /// Called once when a `run` call finishes, with cumulative statistics.
    fn on_sim_end(&mut self, _final_round: Round, _stats: &SimStats) {}
}

/// A [`SimObserver`] that does nothing.  Use when you need to call `run` but
/// don't want callbacks.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}

impl<O: SimObserver + ?Sized> SimObserver for &mut O {
    fn on_round_start(&mut self, round: Round) {
        (**self).on_round_start(round)
    }
    fn on_arrivals(&mut self, round: Round, arrivals: &Arrivals) {
        (**self).on_arrivals(round, arrivals)
    }
    fn on_boarding(&mut self, passenger: &Passenger, elevator: ElevatorId) {
        (**self).on_boarding(passenger, elevator)
    }
    fn on_disembarking(&mut self, passenger: &Passenger, elevator: ElevatorId) {
        (**self).on_disembarking(passenger, elevator)
    }
    fn on_elevator_moves(&mut self, elevators: &[Elevator], directions: &[Direction]) {
        (**self).on_elevator_moves(elevators, directions)
    }
    fn on_render(&mut self, round: Round, elevators: &[Elevator], waiting: &WaitingRegistry) {
        (**self).on_render(round, elevators, waiting)
    }
    fn on_pause(&mut self, units: u32) {
        (**self).on_pause(units)
    }
    fn on_round_end(&mut self, round: Round, summary: &RoundSummary) {
        (**self).on_round_end(round, summary)
    }
    fn on_sim_end(&mut self, final_round: Round, stats: &SimStats) {
        (**self).on_sim_end(final_round, stats)
    }
}

/// Fan out every callback to two observers, `.0` first.
impl<A: SimObserver, B: SimObserver> SimObserver for (A, B) {
    fn on_round_start(&mut self, round: Round) {
        self.0.on_round_start(round);
        self.1.on_round_start(round);
    }
    fn on_arrivals(&mut self, round: Round, arrivals: &Arrivals) {
        self.0.on_arrivals(round, arrivals);
        self.1.on_arrivals(round, arrivals);
    }
    fn on_boarding(&mut self, passenger: &Passenger, elevator: ElevatorId) {
        self.0.on_boarding(passenger, elevator);
        self.1.on_boarding(passenger, elevator);
    }
    fn on_disembarking(&mut self, passenger: &Passenger, elevator: ElevatorId) {
        self.0.on_disembarking(passenger, elevator);
        self.1.on_disembarking(passenger, elevator);
    }
    fn on_elevator_moves(&mut self, elevators: &[Elevator], directions: &[Direction]) {
        self.0.on_elevator_moves(elevators, directions);
        self.1.on_elevator_moves(elevators, directions);
    }
    fn on_render(&mut self, round: Round, elevators: &[Elevator], waiting: &WaitingRegistry) {
        self.0.on_render(round, elevators, waiting);
        self.1.on_render(round, elevators, waiting);
    }
    fn on_pause(&mut self, units: u32) {
        self.0.on_pause(units);
        self.1.on_pause(units);
    }
    fn on_round_end(&mut self, round: Round, summary: &RoundSummary) {
        self.0.on_round_end(round, summary);
        self.1.on_round_end(round, summary);
    }
    fn on_sim_end(&mut self, final_round: Round, stats: &SimStats) {
        self.0.on_sim_end(final_round, stats);
        self.1.on_sim_end(final_round, stats);
    }
}
