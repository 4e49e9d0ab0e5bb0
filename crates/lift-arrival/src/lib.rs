//! `lift-arrival`: where new passengers come from.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                     |
//! |-------------|--------------------------------------------------------------|
//! | [`policy`]  | `ArrivalPolicy` trait, `Arrivals` batch type                 |
//! | [`random`]  | `RandomArrivals`: fixed number of random people per round    |
//! | [`file`]    | `FileArrivals`: replay a CSV schedule                        |
//! | [`source`]  | `ArrivalSource`: scenario-file selector for the above        |
//! | [`error`]   | `ArrivalError`, `ArrivalResult<T>`                           |
//!
//! # Schedule CSV format
//!
//! No header, one record per line, variable length:
//!
//! ```csv
//! 0, 1, 4, 2, 6
//! 1, 5, 1
//! 3, 2, 3, 6, 1, 4, 2
//! ```
//!
//! The first field is the round; the rest are `start, target` pairs.

pub mod error;
pub mod file;
pub mod policy;
pub mod random;
pub mod source;

#[cfg(test)]
mod tests;

pub use error::{ArrivalError, ArrivalResult};
pub use file::FileArrivals;
pub use policy::{ArrivalPolicy, Arrivals};
pub use random::RandomArrivals;
pub use source::ArrivalSource;
