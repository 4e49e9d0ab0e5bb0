//! Nearest-first dispatch.

use lift_core::{Direction, SimRng};
use lift_entity::Elevator;

use crate::{closest_floor, direction_toward, MoveContext, MovementPolicy};

/// Always heads for the nearest thing to do.
///
/// - An empty car heads for the nearest *other* floor with anyone waiting.
/// - A loaded car heads for the nearest target among all its passengers;
///   boarding order is irrelevant.
///
/// Ties go to the lower floor.  With nothing to do, the car stays put.
#[derive(Debug, Clone, Copy, Default)]
pub struct ShortSighted;

impl ShortSighted {
    fn decide(elevator: &Elevator, ctx: &MoveContext<'_>) -> Direction {
        let here = elevator.current_floor();
        let nearest = if elevator.is_empty() {
            closest_floor(
                ctx.waiting
                    .occupied_floors()
                    .filter(|&floor| floor != here)
                    .map(|floor| (floor, floor.abs_diff(here))),
            )
        } else {
            closest_floor(
                elevator
                    .passengers()
                    .iter()
                    .map(|p| (p.target, p.target.abs_diff(here))),
            )
        };
        nearest.map_or(Direction::Stay, |floor| direction_toward(floor, here))
    }
}

impl MovementPolicy for ShortSighted {
    fn move_elevators(&self, ctx: &MoveContext<'_>, _rng: &mut SimRng) -> Vec<Direction> {
        ctx.elevators.iter().map(|e| Self::decide(e, ctx)).collect()
    }

    fn name(&self) -> &'static str {
        "short_sighted"
    }
}
