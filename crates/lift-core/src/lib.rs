//! `lift-core`: foundational types for the `rust_lift` elevator simulator.
//!
//! This crate is a dependency of every other `lift-*` crate.  It has no
//! `lift-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module        | Contents                                                |
//! |---------------|---------------------------------------------------------|
//! | [`ids`]       | `ElevatorId`, `PassengerId`                             |
//! | [`floor`]     | `Floor`, `Direction`                                    |
//! | [`round`]     | `Round`, `RoundClock`                                   |
//! | [`rng`]       | `SimRng` (seeded, with deterministic child streams)     |
//! | [`config`]    | `SimConfig`: building shape and run settings            |
//! | [`error`]     | `LiftError`, `LiftResult`                               |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod config;
pub mod error;
pub mod floor;
pub mod ids;
pub mod rng;
pub mod round;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::SimConfig;
pub use error::{LiftError, LiftResult};
pub use floor::{Direction, Floor};
pub use ids::{ElevatorId, PassengerId};
pub use rng::SimRng;
pub use round::{Round, RoundClock};
