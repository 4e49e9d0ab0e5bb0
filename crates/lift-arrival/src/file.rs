//! Scheduled arrivals replayed from a CSV source.
//!
//! The whole schedule is read and validated when the policy is built;
//! `generate` is then a map lookup.
//!
//! # Ordering
//!
//! Rounds may appear in any order and more than once.  Records sharing a
//! round number are merged in file order, and pairs within a record keep
//! their order, so a floor's queue for that round is exactly the order the
//! passengers are written in.  Records are never sorted by start or target
//! floor.

use std::collections::BTreeMap;
use std::io::Read;
use std::path::Path;

use lift_core::{Floor, Round, SimRng};
use lift_entity::Passenger;

use crate::policy::empty_arrivals;
use crate::{ArrivalError, ArrivalPolicy, ArrivalResult, Arrivals};

/// Replays a pre-recorded arrival schedule.
#[derive(Debug, Clone)]
pub struct FileArrivals {
    max_floor: Floor,
    /// Round number → `(start, target)` pairs in file order.
    schedule:  BTreeMap<u64, Vec<(Floor, Floor)>>,
}

impl FileArrivals {
    /// Load a schedule from a CSV file.
    pub fn from_path(max_floor: Floor, path: &Path) -> ArrivalResult<Self> {
        let file = std::fs::File::open(path)?;
        let loaded = Self::from_reader(max_floor, file)?;
        log::info!(
            "loaded {} scheduled passengers over {} rounds from {}",
            loaded.total_scheduled(),
            loaded.schedule.len(),
            path.display(),
        );
        Ok(loaded)
    }

    /// Like [`from_path`][Self::from_path] but accepts any `Read` source.
    ///
    /// Useful for testing (pass a `std::io::Cursor`).
    pub fn from_reader<R: Read>(max_floor: Floor, reader: R) -> ArrivalResult<Self> {
        if max_floor < 2 {
            return Err(ArrivalError::Config(format!(
                "scheduled arrivals need at least 2 floors, got {max_floor}"
            )));
        }

        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let mut schedule: BTreeMap<u64, Vec<(Floor, Floor)>> = BTreeMap::new();

        for result in csv_reader.records() {
            let record = result?;
            let line = record.position().map(|p| p.line()).unwrap_or(0);
            let (round, pairs) = parse_record(&record, line, max_floor)?;
            schedule.entry(round).or_default().extend(pairs);
        }

        Ok(Self { max_floor, schedule })
    }

    /// Total number of passengers across the whole schedule.
    pub fn total_scheduled(&self) -> usize {
        self.schedule.values().map(Vec::len).sum()
    }
}

impl ArrivalPolicy for FileArrivals {
    fn generate(&self, round: Round, _rng: &mut SimRng) -> Arrivals {
        let mut arrivals = empty_arrivals(self.max_floor);
        if let Some(pairs) = self.schedule.get(&round.0) {
            for &(start, target) in pairs {
                arrivals
                    .entry(start)
                    .or_default()
                    .push(Passenger::new(start, target));
            }
        }
        arrivals
    }

    fn max_floor(&self) -> Floor {
        self.max_floor
    }
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn parse_record(
    record:    &csv::StringRecord,
    line:      u64,
    max_floor: Floor,
) -> ArrivalResult<(u64, Vec<(Floor, Floor)>)> {
    let format_err = |reason: String| ArrivalError::Format { line, reason };

    let mut fields = record.iter();
    let round = match fields.next() {
        Some(s) if !s.is_empty() => s
            .parse::<u64>()
            .map_err(|_| format_err(format!("invalid round number {s:?}")))?,
        _ => return Err(format_err("record has no round number".into())),
    };

    let floors: Vec<Floor> = fields
        .map(|s| {
            s.parse::<Floor>()
                .map_err(|_| format_err(format!("invalid floor {s:?}")))
        })
        .collect::<Result<_, _>>()?;

    if floors.len() % 2 != 0 {
        return Err(format_err(format!(
            "round {round} has a start floor {} without a target",
            floors[floors.len() - 1]
        )));
    }

    let pairs = floors
        .chunks_exact(2)
        .map(|pair| {
            let (start, target) = (pair[0], pair[1]);
            for floor in [start, target] {
                if floor < 1 || floor > max_floor {
                    return Err(format_err(format!(
                        "floor {floor} outside 1..={max_floor}"
                    )));
                }
            }
            if start == target {
                return Err(format_err(format!(
                    "passenger starts and ends on floor {start}"
                )));
            }
            Ok((start, target))
        })
        .collect::<ArrivalResult<Vec<_>>>()?;

    Ok((round, pairs))
}
