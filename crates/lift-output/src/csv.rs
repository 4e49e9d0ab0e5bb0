//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `round_summaries.csv`
//! - `run_stats.csv` (one row per `run` call)

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{OutputResult, RoundSummaryRow, RunStatsRow};

pub const ROUND_SUMMARIES_FILE: &str = "round_summaries.csv";
pub const RUN_STATS_FILE: &str = "run_stats.csv";

/// Writes simulation output to two CSV files.
pub struct CsvWriter {
    summaries: Writer<File>,
    stats:     Writer<File>,
}

impl CsvWriter {
    /// Create the two CSV files in `dir` (which must exist) and write the
    /// header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut summaries = Writer::from_path(dir.join(ROUND_SUMMARIES_FILE))?;
        summaries.write_record(["round", "arrived", "alighted", "boarded", "waiting", "riding"])?;

        let mut stats = Writer::from_path(dir.join(RUN_STATS_FILE))?;
        stats.write_record([
            "num_iterations",
            "total_people",
            "people_completed",
            "max_time",
            "min_time",
            "avg_time",
        ])?;

        log::info!("writing round summaries to {}", dir.display());
        Ok(Self { summaries, stats })
    }
}

impl OutputWriter for CsvWriter {
    fn write_round_summary(&mut self, row: &RoundSummaryRow) -> OutputResult<()> {
        self.summaries.write_record(&[
            row.round.to_string(),
            row.arrived.to_string(),
            row.alighted.to_string(),
            row.boarded.to_string(),
            row.waiting.to_string(),
            row.riding.to_string(),
        ])?;
        Ok(())
    }

    fn write_run_stats(&mut self, row: &RunStatsRow) -> OutputResult<()> {
        self.stats.write_record(&[
            row.num_iterations.to_string(),
            row.total_people.to_string(),
            row.people_completed.to_string(),
            row.max_time.to_string(),
            row.min_time.to_string(),
            row.avg_time.to_string(),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        self.summaries.flush()?;
        self.stats.flush()?;
        Ok(())
    }
}
