//! The `OutputWriter` trait implemented by backend writers.

use crate::{OutputResult, RoundSummaryRow, RunStatsRow};

/// A sink for simulation rows.
///
/// Errors are returned here but swallowed by the observer, which keeps the
/// first one for [`SimOutputObserver::take_error`][crate::SimOutputObserver::take_error].
pub trait OutputWriter {
    /// Write one round summary row.
    fn write_round_summary(&mut self, row: &RoundSummaryRow) -> OutputResult<()>;

    /// Write the statistics reported at the end of a `run` call.
    fn write_run_stats(&mut self, row: &RunStatsRow) -> OutputResult<()>;

    /// Flush all underlying file handles.  Safe to call more than once;
    /// writes after a flush are still accepted.
    fn finish(&mut self) -> OutputResult<()>;
}
