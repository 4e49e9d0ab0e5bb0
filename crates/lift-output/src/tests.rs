//! Integration tests for lift-output.

use std::io::Cursor;

use lift_arrival::{ArrivalPolicy, FileArrivals};
use lift_core::SimConfig;
use lift_policy::{MovementPolicy, ShortSighted};
use lift_sim::{DynSim, SimBuilder};

fn one_trip_sim(visualize: bool) -> DynSim {
    let arrivals: Box<dyn ArrivalPolicy> =
        Box::new(FileArrivals::from_reader(4, Cursor::new("0, 1, 2\n")).unwrap());
    let movement: Box<dyn MovementPolicy> = Box::new(ShortSighted);
    SimBuilder::new(SimConfig::new(4, 1, 3), arrivals, movement)
        .visualize(visualize)
        .build()
        .unwrap()
}

#[cfg(test)]
mod csv_tests {
    use tempfile::TempDir;

    use super::*;
    use crate::csv::{CsvWriter, ROUND_SUMMARIES_FILE, RUN_STATS_FILE};
    use crate::observer::SimOutputObserver;
    use crate::row::{RoundSummaryRow, RunStatsRow};
    use crate::writer::OutputWriter;

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    fn read_rows(path: &std::path::Path) -> Vec<csv::StringRecord> {
        let mut rdr = csv::Reader::from_path(path).unwrap();
        rdr.records().map(|r| r.unwrap()).collect()
    }

    #[test]
    fn csv_files_created() {
        let dir = tmp();
        let _w = CsvWriter::new(dir.path()).unwrap();
        assert!(dir.path().join(ROUND_SUMMARIES_FILE).exists());
        assert!(dir.path().join(RUN_STATS_FILE).exists());
    }

    #[test]
    fn csv_headers_correct() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join(ROUND_SUMMARIES_FILE)).unwrap();
        let headers: Vec<_> = rdr.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(headers, ["round", "arrived", "alighted", "boarded", "waiting", "riding"]);

        let mut rdr = csv::Reader::from_path(dir.path().join(RUN_STATS_FILE)).unwrap();
        let headers: Vec<_> = rdr.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(
            headers,
            ["num_iterations", "total_people", "people_completed", "max_time", "min_time", "avg_time"]
        );
    }

    #[test]
    fn negative_sentinels_written_verbatim() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_run_stats(&RunStatsRow {
            num_iterations:   5,
            total_people:     0,
            people_completed: 0,
            max_time:         -1,
            min_time:         -1,
            avg_time:         -1,
        })
        .unwrap();
        w.finish().unwrap();

        let rows = read_rows(&dir.path().join(RUN_STATS_FILE));
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].iter().collect::<Vec<_>>(), ["5", "0", "0", "-1", "-1", "-1"]);
    }

    #[test]
    fn csv_finish_idempotent() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();
        w.finish().unwrap();
        w.write_round_summary(&RoundSummaryRow {
            round: 0, arrived: 1, alighted: 0, boarded: 1, waiting: 0, riding: 1,
        })
        .unwrap();
        w.finish().unwrap();
        assert_eq!(read_rows(&dir.path().join(ROUND_SUMMARIES_FILE)).len(), 1);
    }

    #[test]
    fn integration_csv() {
        let dir = tmp();
        let mut sim = one_trip_sim(false);
        let mut obs = SimOutputObserver::new(CsvWriter::new(dir.path()).unwrap());
        sim.run(3, &mut obs).unwrap();
        assert!(obs.take_error().is_none());

        let rows = read_rows(&dir.path().join(ROUND_SUMMARIES_FILE));
        assert_eq!(rows.len(), 3);
        // round, arrived, alighted, boarded, waiting, riding
        assert_eq!(rows[0].iter().collect::<Vec<_>>(), ["0", "1", "0", "1", "0", "1"]);
        assert_eq!(rows[1].iter().collect::<Vec<_>>(), ["1", "0", "1", "0", "0", "0"]);
        assert_eq!(&rows[2][0], "2");

        let stats = read_rows(&dir.path().join(RUN_STATS_FILE));
        assert_eq!(stats[0].iter().collect::<Vec<_>>(), ["3", "1", "1", "1", "1", "1"]);
    }

    #[test]
    fn one_stats_row_per_run() {
        let dir = tmp();
        let mut sim = one_trip_sim(false);
        let mut obs = SimOutputObserver::new(CsvWriter::new(dir.path()).unwrap());
        sim.run(1, &mut obs).unwrap();
        sim.run(2, &mut obs).unwrap();

        let stats = read_rows(&dir.path().join(RUN_STATS_FILE));
        assert_eq!(stats.len(), 2);
        assert_eq!(&stats[0][0], "1");
        assert_eq!(&stats[1][0], "3");
        assert_eq!(read_rows(&dir.path().join(ROUND_SUMMARIES_FILE)).len(), 3);
    }
}

#[cfg(test)]
mod text_tests {
    use std::time::{Duration, Instant};

    use lift_core::ElevatorId;
    use lift_entity::{Elevator, Passenger, WaitingRegistry};
    use lift_sim::SimObserver;

    use super::*;
    use crate::text::{render_frame, TextRenderer};

    #[test]
    fn frame_layout() {
        let mut car = Elevator::placed(ElevatorId(1), 3, 3);
        car.board(Passenger::new(3, 1));
        let cars = [Elevator::new(ElevatorId(0), 3), car];

        let mut waiting = WaitingRegistry::new(3);
        waiting.push(Passenger::new(2, 1));
        let mut angry = Passenger::new(2, 3);
        for _ in 0..5 {
            angry.accrue_wait();
        }
        waiting.push(angry);

        let frame = render_frame(&cars, &waiting);
        let lines: Vec<_> = frame.lines().collect();
        assert_eq!(
            lines,
            [
                "    3 |   .   [1/3] |",
                "    2 |   .     .   | 0 2",
                "    1 | [0/3]   .   |",
            ]
        );
    }

    #[test]
    fn quiet_without_visualize() {
        let mut sim = one_trip_sim(false);
        let mut r = TextRenderer::new(Vec::new());
        let stats = sim.run(2, &mut r).unwrap();
        let text = String::from_utf8(r.into_inner()).unwrap();
        assert_eq!(text, format!("{stats}\n"));
    }

    #[test]
    fn narrates_each_round() {
        let mut sim = one_trip_sim(true);
        let mut r = TextRenderer::new(Vec::new());
        sim.run(2, &mut r).unwrap();
        assert!(r.take_error().is_none());
        let text = String::from_utf8(r.into_inner()).unwrap();

        assert!(text.contains("── R0 ──"));
        assert!(text.contains("── R1 ──"));
        assert!(text.contains("+ PassengerId(0) arrives on floor 1, going to 2"));
        assert!(text.contains("> PassengerId(0) boards ElevatorId(0)"));
        assert!(text.contains("< PassengerId(0) leaves ElevatorId(0) on floor 2 after 1 rounds"));
        // Two frames of four floors each.
        assert_eq!(text.lines().filter(|l| l.contains(" | ")).count(), 8);
    }

    #[test]
    fn pause_scales_with_units() {
        let mut r = TextRenderer::new(Vec::new()).with_frame_delay(Duration::from_millis(5));
        let start = Instant::now();
        r.on_pause(2);
        assert!(start.elapsed() >= Duration::from_millis(10));
    }

    #[test]
    fn zero_delay_never_sleeps() {
        let mut r = TextRenderer::new(Vec::new());
        let start = Instant::now();
        r.on_pause(1_000);
        assert!(start.elapsed() < Duration::from_secs(1));
    }
}
