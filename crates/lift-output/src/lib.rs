//! `lift-output`: observers that turn a running simulation into something
//! a person can read.
//!
//! | Type                  | Hooks used           | Produces                                   |
//! |-----------------------|----------------------|--------------------------------------------|
//! | [`SimOutputObserver`] | data hooks           | rows for any [`OutputWriter`]              |
//! | [`CsvWriter`]         | (none)               | `round_summaries.csv`, `run_stats.csv`     |
//! | [`TextRenderer`]      | visualization hooks  | ASCII building frames on any `io::Write`   |
//!
//! # Usage
//!
//! ```rust,ignore
//! use lift_output::{CsvWriter, SimOutputObserver, TextRenderer};
//!
//! let mut csv = SimOutputObserver::new(CsvWriter::new(Path::new("./out"))?);
//! let mut text = TextRenderer::new(std::io::stdout());
//! sim.run(15, &mut (&mut text, &mut csv))?;
//! if let Some(e) = csv.take_error() {
//!     eprintln!("output error: {e}");
//! }
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod text;
pub mod writer;

#[cfg(test)]
mod tests;

pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::SimOutputObserver;
pub use row::{RoundSummaryRow, RunStatsRow};
pub use text::{render_frame, TextRenderer};
pub use writer::OutputWriter;
