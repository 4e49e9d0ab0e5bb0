//! First-come-first-served dispatch.

use lift_core::{Direction, SimRng};
use lift_entity::Elevator;

use crate::{direction_toward, MoveContext, MovementPolicy};

/// Serves whoever boarded first.
///
/// - An empty car heads for the *lowest* floor with anyone waiting, or stays
///   put if nobody is waiting anywhere.
/// - A loaded car heads for the target of its first-boarded passenger.
///
/// Each car decides independently; two empty cars may chase the same floor.
#[derive(Debug, Clone, Copy, Default)]
pub struct PushyPassenger;

impl PushyPassenger {
    fn decide(elevator: &Elevator, ctx: &MoveContext<'_>) -> Direction {
        let here = elevator.current_floor();
        match elevator.passengers().first() {
            Some(first) => direction_toward(first.target, here),
            None => ctx
                .waiting
                .occupied_floors()
                .next()
                .map_or(Direction::Stay, |floor| direction_toward(floor, here)),
        }
    }
}

impl MovementPolicy for PushyPassenger {
    fn move_elevators(&self, ctx: &MoveContext<'_>, _rng: &mut SimRng) -> Vec<Direction> {
        ctx.elevators.iter().map(|e| Self::decide(e, ctx)).collect()
    }

    fn name(&self) -> &'static str {
        "pushy_passenger"
    }
}
