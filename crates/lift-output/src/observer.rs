//! `SimOutputObserver<W>` bridges `SimObserver` to an `OutputWriter`.

use lift_core::Round;
use lift_sim::{RoundSummary, SimObserver, SimStats};

use crate::row::{RoundSummaryRow, RunStatsRow};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`SimObserver`] that writes round summaries and end-of-run statistics
/// to any [`OutputWriter`].
///
/// Only the data hooks are used, so this works with `visualize` off.
/// `SimObserver` methods have no return value; the first write error is kept
/// and can be collected with [`take_error`][Self::take_error] once `run`
/// returns.
pub struct SimOutputObserver<W: OutputWriter> {
    writer:     W,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> SimOutputObserver<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, last_error: None }
    }

    /// Take the stored write error, if any.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            log::warn!("output write failed: {e}");
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> SimObserver for SimOutputObserver<W> {
    fn on_round_end(&mut self, _round: Round, summary: &RoundSummary) {
        let result = self.writer.write_round_summary(&RoundSummaryRow::from(summary));
        self.store_err(result);
    }

    fn on_sim_end(&mut self, _final_round: Round, stats: &SimStats) {
        let result = self
            .writer
            .write_run_stats(&RunStatsRow::from(stats))
            .and_then(|()| self.writer.finish());
        self.store_err(result);
    }
}
