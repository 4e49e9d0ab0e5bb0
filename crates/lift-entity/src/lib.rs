//! `lift-entity`: the things that live inside the building.
//!
//! # Crate layout
//!
//! | Module          | Contents                                                  |
//! |-----------------|-----------------------------------------------------------|
//! | [`passenger`]   | `Passenger`: start/target floors and accrued wait time    |
//! | [`elevator`]    | `Elevator`: a car with a floor, capacity and passengers   |
//! | [`waiting`]     | `WaitingRegistry`: floor-indexed queues of waiting people |
//!
//! # Ownership model
//!
//! A `Passenger` is a plain value that is *moved* between containers: from
//! the arrival batch into the `WaitingRegistry`, from there into an
//! `Elevator`, and out again when it alights.  Because it can only live in
//! one `Vec` at a time, "waiting", "aboard" and "completed" are mutually
//! exclusive by construction.

pub mod elevator;
pub mod passenger;
pub mod waiting;

#[cfg(test)]
mod tests;

pub use elevator::Elevator;
pub use passenger::Passenger;
pub use waiting::WaitingRegistry;
