//! Random dispatch.

use lift_core::{Direction, SimRng};

use crate::{MoveContext, MovementPolicy};

/// Moves every car in a uniformly random legal direction, ignoring
/// passengers entirely.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomAlgorithm;

impl MovementPolicy for RandomAlgorithm {
    fn move_elevators(&self, ctx: &MoveContext<'_>, rng: &mut SimRng) -> Vec<Direction> {
        ctx.elevators
            .iter()
            .map(|e| {
                let options = Direction::valid_at(e.current_floor(), ctx.max_floor);
                rng.choose(&options).copied().unwrap_or(Direction::Stay)
            })
            .collect()
    }

    fn name(&self) -> &'static str {
        "random"
    }
}
