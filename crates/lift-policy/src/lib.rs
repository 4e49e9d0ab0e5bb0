//! `lift-policy`: how elevators decide where to go.
//!
//! # Crate layout
//!
//! | Module            | Contents                                                   |
//! |-------------------|------------------------------------------------------------|
//! | [`context`]       | `MoveContext<'a>`: read-only round snapshot                |
//! | [`model`]         | `MovementPolicy` trait                                     |
//! | [`primitives`]    | `direction_toward`, `closest_floor`                        |
//! | [`random`]        | `RandomAlgorithm`                                          |
//! | [`pushy`]         | `PushyPassenger`                                           |
//! | [`short_sighted`] | `ShortSighted`                                             |
//! | [`kind`]          | `MovementKind`: scenario-file selector                     |
//!
//! # Contract
//!
//! `move_elevators` returns one [`Direction`][lift_core::Direction] per
//! elevator, index-aligned with `ctx.elevators`.  A car on floor 1 is never
//! told to go down and a car on `ctx.max_floor` is never told to go up.  The
//! engine panics if a policy breaks this.

pub mod context;
pub mod kind;
pub mod model;
pub mod primitives;
pub mod pushy;
pub mod random;
pub mod short_sighted;


pub use context::MoveContext;
pub use kind::{MovementKind, UnknownMovementKind};
pub use model::MovementPolicy;
pub use primitives::{closest_floor, direction_toward};
pub use pushy::PushyPassenger;
pub use random::RandomAlgorithm;
pub use short_sighted::ShortSighted;
