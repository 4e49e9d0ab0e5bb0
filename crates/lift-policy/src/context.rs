//! Read-only simulation state passed to movement policies.

use lift_core::{Floor, Round};
use lift_entity::{Elevator, WaitingRegistry};

/// A read-only snapshot of the building taken after boarding and before any
/// car moves.
///
/// The engine never allows mutable access to these structures while a
/// `MoveContext` is live, so every elevator's decision sees the same state.
pub struct MoveContext<'a> {
    /// Current round.
    pub round: Round,

    /// Highest floor in the building.
    pub max_floor: Floor,

    /// All cars, indexed by `ElevatorId`.
    pub elevators: &'a [Elevator],

    /// Passengers waiting on each floor.
    pub waiting: &'a WaitingRegistry,
}

impl<'a> MoveContext<'a> {
    #[inline]
    pub fn new(
        round:     Round,
        max_floor: Floor,
        elevators: &'a [Elevator],
        waiting:   &'a WaitingRegistry,
    ) -> Self {
        Self { round, max_floor, elevators, waiting }
    }
}
