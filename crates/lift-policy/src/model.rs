//! The `MovementPolicy` trait: the main extension point for dispatch logic.

use lift_core::{Direction, SimRng};

use crate::MoveContext;

/// Pluggable elevator dispatch.
///
/// Called once per round with a snapshot of every car and every waiting
/// passenger.  Implementations only read `ctx`; randomness comes from the
/// engine-owned `rng` so seeded runs repeat exactly.
///
/// # Example
///
/// ```rust,ignore
/// struct AlwaysStay;
///
/// impl MovementPolicy for AlwaysStay {
///     fn move_elevators(&self, ctx: &MoveContext<'_>, _rng: &mut SimRng) -> Vec<Direction> {
///         vec![Direction::Stay; ctx.elevators.len()]
///     }
/// }
/// ```
pub trait MovementPolicy: Send + 'static {
    /// One direction per elevator, aligned by index with `ctx.elevators`.
    fn move_elevators(&self, ctx: &MoveContext<'_>, rng: &mut SimRng) -> Vec<Direction>;

    /// Short name used in logs.
    fn name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}

impl<P: MovementPolicy + ?Sized> MovementPolicy for Box<P> {
    fn move_elevators(&self, ctx: &MoveContext<'_>, rng: &mut SimRng) -> Vec<Direction> {
        (**self).move_elevators(ctx, rng)
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}
