//! `lift-sim`: round loop orchestrator for the rust_lift elevator simulator.
//!
//! # Round pipeline
//!
//! ```text
//! for round in 0..num_rounds:
//!   ① Accrue    : every waiting and every riding passenger: wait_time += 1
//!   ② Arrive    : ArrivalPolicy::generate(round) → waiting registry
//!   ③ Alight    : riders whose target is the current floor leave and are
//!                 recorded as completed
//!   ④ Board     : each car with room takes passengers from the front of its
//!                 floor's queue until full or the queue is empty
//!   ⑤ Move      : MovementPolicy::move_elevators on a snapshot; each car
//!                 steps at most one floor
//! ```
//!
//! A policy that sends a car outside the building is a bug in the policy; the
//! engine panics rather than clamping.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use lift_arrival::RandomArrivals;
//! use lift_core::SimConfig;
//! use lift_policy::ShortSighted;
//! use lift_sim::{NoopObserver, SimBuilder};
//!
//! let config = SimConfig::new(6, 2, 3);
//! let arrivals = RandomArrivals::new(6, Some(2))?;
//! let mut sim = SimBuilder::new(config, arrivals, ShortSighted).build()?;
//! let stats = sim.run(15, &mut NoopObserver)?;
//! ```

pub mod builder;
pub mod config;
pub mod error;
pub mod observer;
pub mod sim;
pub mod stats;


pub use builder::SimBuilder;
pub use config::{DynSim, ScenarioConfig};
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver};
pub use sim::Sim;
pub use stats::{RoundSummary, SimStats, WaitStats};
