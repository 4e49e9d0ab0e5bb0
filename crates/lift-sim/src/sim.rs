//! The `Sim` struct and its round loop.

use lift_arrival::ArrivalPolicy;
use lift_core::{Direction, PassengerId, Round, RoundClock, SimConfig, SimRng};
use lift_entity::{Elevator, WaitingRegistry};
use lift_policy::{MoveContext, MovementPolicy};

use crate::{RoundSummary, SimError, SimObserver, SimResult, SimStats, WaitStats};

// ── Sim ───────────────────────────────────────────────────────────────────────

/// The simulation engine.
///
/// `Sim<A, M>` owns the whole building (cars, waiting registry, statistics)
/// and is its only mutator.  Policies see it read-only through
/// [`MoveContext`] or not at all.
///
/// Create via [`SimBuilder`][crate::SimBuilder].  The building shape is
/// fixed once built; [`config`][Self::config] and
/// [`current_round`][Self::current_round] are read-only views.
///
/// ```compile_fail
/// fn grow(sim: &mut lift_sim::DynSim) {
///     sim.config.num_floors = 20;
/// }
/// ```
///
/// ```compile_fail
/// fn rewind(sim: &mut lift_sim::DynSim) {
///     sim.clock.current_round = lift_core::Round(0);
/// }
/// ```
pub struct Sim<A: ArrivalPolicy, M: MovementPolicy> {
    pub(crate) config:         SimConfig,
    pub(crate) clock:          RoundClock,
    pub(crate) elevators:      Vec<Elevator>,
    pub(crate) waiting:        WaitingRegistry,
    pub(crate) arrivals:       A,
    pub(crate) movement:       M,
    pub(crate) arrival_rng:    SimRng,
    pub(crate) movement_rng:   SimRng,
    pub(crate) stats:          WaitStats,
    pub(crate) next_passenger: u64,
}

impl<A: ArrivalPolicy, M: MovementPolicy> Sim<A, M> {
    // ── Public API ────────────────────────────────────────────────────────

    /// Run `num_rounds` more rounds and return cumulative statistics.
    ///
    /// Rounds continue from wherever a previous call stopped.  `num_rounds`
    /// must be at least 1.
    pub fn run<O: SimObserver>(&mut self, num_rounds: u64, observer: &mut O) -> SimResult<SimStats> {
        if num_rounds == 0 {
            return Err(SimError::Config("num_rounds must be at least 1".into()));
        }

        log::info!(
            "running {num_rounds} rounds from {}: {} floors, {} elevators (capacity {}), {} dispatch",
            self.clock.current_round,
            self.config.num_floors,
            self.elevators.len(),
            self.config.elevator_capacity,
            self.movement.name(),
        );

        for _ in 0..num_rounds {
            self.step(observer);
        }

        let stats = self.stats();
        observer.on_sim_end(self.clock.current_round, &stats);
        log::info!("finished at {}: {stats}", self.clock.current_round);
        Ok(stats)
    }

    /// Run exactly one round.
    pub fn step<O: SimObserver>(&mut self, observer: &mut O) -> RoundSummary {
        let now = self.clock.current_round;
        let summary = self.process_round(now, observer);
        log::debug!(
            "{now}: +{} arrived, {} boarded, {} alighted, {} waiting, {} riding",
            summary.arrived,
            summary.boarded,
            summary.alighted,
            summary.waiting,
            summary.riding,
        );
        observer.on_round_end(now, &summary);
        self.clock.advance();
        summary
    }

    /// Building shape and run settings the engine was built with.
    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// The round the next call to [`step`][Self::step] will process, which
    /// is also the number of rounds run so far.
    pub fn current_round(&self) -> Round {
        self.clock.current_round
    }

    /// Cumulative statistics since the engine was built.
    pub fn stats(&self) -> SimStats {
        self.stats.summarize(self.clock.rounds_run())
    }

    /// All cars, indexed by `ElevatorId`.
    pub fn elevators(&self) -> &[Elevator] {
        &self.elevators
    }

    /// Passengers waiting on each floor.
    pub fn waiting(&self) -> &WaitingRegistry {
        &self.waiting
    }

    /// Wait-time accumulator.
    pub fn wait_stats(&self) -> &WaitStats {
        &self.stats
    }

    // ── Core round processing ─────────────────────────────────────────────

    fn process_round<O: SimObserver>(&mut self, now: Round, observer: &mut O) -> RoundSummary {
        let visualize = self.config.visualize;
        let max_floor = self.config.num_floors;
        let mut summary = RoundSummary { round: now, ..RoundSummary::default() };

        if visualize {
            observer.on_round_start(now);
        }

        // ── Phase 1: wait-time accrual ────────────────────────────────────
        //
        // Before anything else happens, so a passenger who arrives and is
        // delivered within the same round is not charged for it.
        self.waiting.accrue_wait();
        for elevator in &mut self.elevators {
            elevator.accrue_wait();
        }

        // ── Phase 2: arrivals ─────────────────────────────────────────────
        let mut batch = self.arrivals.generate(now, &mut self.arrival_rng);
        for (&floor, people) in batch.iter_mut() {
            for passenger in people.iter_mut() {
                debug_assert!(!passenger.id.is_valid(), "arrival policy assigned {}", passenger.id);
                assert_eq!(
                    passenger.start, floor,
                    "arrival policy filed a passenger starting on {} under floor {floor}",
                    passenger.start,
                );
                passenger.id = PassengerId(self.next_passenger);
                self.next_passenger += 1;
            }
        }
        if visualize {
            observer.on_arrivals(now, &batch);
        }
        for passenger in batch.into_values().flatten() {
            self.waiting.push(passenger);
            self.stats.record_arrival();
            summary.arrived += 1;
        }

        // ── Phase 3: alighting ────────────────────────────────────────────
        for elevator in &mut self.elevators {
            for passenger in elevator.alight() {
                log::trace!(
                    "{now}: {} left {} at floor {} after {} rounds",
                    passenger.id,
                    elevator.id,
                    elevator.current_floor(),
                    passenger.wait_time(),
                );
                self.stats.record_completion(passenger.wait_time());
                summary.alighted += 1;
                if visualize {
                    observer.on_disembarking(&passenger, elevator.id);
                }
            }
        }

        // ── Phase 4: boarding ─────────────────────────────────────────────
        //
        // How many board is decided before anyone is removed from the queue;
        // `take_front` then drains them in one go.
        for elevator in &mut self.elevators {
            let free = elevator.free_slots();
            if free == 0 {
                continue;
            }
            let floor = elevator.current_floor();
            for passenger in self.waiting.take_front(floor, free) {
                log::trace!("{now}: {} boarded {} at floor {floor}", passenger.id, elevator.id);
                if visualize {
                    observer.on_boarding(&passenger, elevator.id);
                }
                elevator.board(passenger);
                summary.boarded += 1;
            }
            debug_assert!(elevator.is_full() || self.waiting.at(floor).is_empty());
        }

        // ── Phase 5: movement ─────────────────────────────────────────────
        //
        // Every decision sees the same snapshot; no car moves until all
        // directions are in and checked.
        let directions = {
            let ctx = MoveContext::new(now, max_floor, &self.elevators, &self.waiting);
            self.movement.move_elevators(&ctx, &mut self.movement_rng)
        };
        self.check_directions(&directions);
        for (elevator, &direction) in self.elevators.iter_mut().zip(&directions) {
            elevator.move_one(direction, max_floor);
        }

        if visualize {
            observer.on_elevator_moves(&self.elevators, &directions);
            observer.on_render(now, &self.elevators, &self.waiting);
            observer.on_pause(self.config.pause_units);
        }

        summary.waiting = self.waiting.total();
        summary.riding = self.elevators.iter().map(Elevator::len).sum();
        summary
    }

    /// Panic if the movement policy broke its contract.
    fn check_directions(&self, directions: &[Direction]) {
        assert_eq!(
            directions.len(),
            self.elevators.len(),
            "movement policy `{}` returned {} directions for {} elevators",
            self.movement.name(),
            directions.len(),
            self.elevators.len(),
        );
        for (elevator, &direction) in self.elevators.iter().zip(directions) {
            assert!(
                direction
                    .apply(elevator.current_floor(), self.config.num_floors)
                    .is_some(),
                "movement policy `{}` sent {} {direction} from floor {} of {}",
                self.movement.name(),
                elevator.id,
                elevator.current_floor(),
                self.config.num_floors,
            );
        }
    }
}
