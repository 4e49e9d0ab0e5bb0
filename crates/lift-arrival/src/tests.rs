//! Unit tests for lift-arrival.

use std::io::Cursor;

use lift_core::{Round, SimRng};

use crate::{ArrivalError, ArrivalPolicy, ArrivalSource, Arrivals, FileArrivals, RandomArrivals};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn count(arrivals: &Arrivals) -> usize {
    arrivals.values().map(Vec::len).sum()
}

fn load(csv: &str, max_floor: u32) -> Result<FileArrivals, ArrivalError> {
    FileArrivals::from_reader(max_floor, Cursor::new(csv))
}

// ── RandomArrivals ────────────────────────────────────────────────────────────

#[cfg(test)]
mod random {
    use super::*;

    #[test]
    fn generates_requested_count_with_distinct_floors() {
        let policy = RandomArrivals::new(6, Some(2)).unwrap();
        let mut rng = SimRng::new(11);
        for r in 0..200 {
            let arrivals = policy.generate(Round(r), &mut rng);
            assert_eq!(count(&arrivals), 2);
            for (&floor, people) in &arrivals {
                for p in people {
                    assert_eq!(p.start, floor);
                    assert_ne!(p.start, p.target);
                    assert!((1..=6).contains(&p.start));
                    assert!((1..=6).contains(&p.target));
                }
            }
        }
    }

    #[test]
    fn none_generates_nobody() {
        let policy = RandomArrivals::new(6, None).unwrap();
        let mut rng = SimRng::new(11);
        for r in 0..10 {
            assert_eq!(count(&policy.generate(Round(r), &mut rng)), 0);
        }
    }

    #[test]
    fn every_floor_present_in_batch() {
        let policy = RandomArrivals::new(4, Some(1)).unwrap();
        let arrivals = policy.generate(Round(0), &mut SimRng::new(3));
        assert_eq!(arrivals.keys().copied().collect::<Vec<_>>(), vec![1, 2, 3, 4]);
    }

    #[test]
    fn two_floor_building_always_swaps() {
        let policy = RandomArrivals::new(2, Some(5)).unwrap();
        let arrivals = policy.generate(Round(0), &mut SimRng::new(5));
        for p in arrivals.values().flatten() {
            assert_eq!(p.start + p.target, 3);
        }
    }

    #[test]
    fn seeded_runs_repeat() {
        let policy = RandomArrivals::new(8, Some(3)).unwrap();
        let a = policy.generate(Round(0), &mut SimRng::new(99));
        let b = policy.generate(Round(0), &mut SimRng::new(99));
        assert_eq!(a, b);
    }

    #[test]
    fn single_floor_rejected() {
        assert!(matches!(RandomArrivals::new(1, Some(1)), Err(ArrivalError::Config(_))));
    }
}

// ── FileArrivals ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod file {
    use super::*;

    const SCHEDULE: &str = "\
3, 2, 5\n\
0, 1, 4, 2, 6\n\
1, 5, 1\n\
0, 1, 3\n\
";

    #[test]
    fn returns_exactly_the_scheduled_round() {
        let policy = load(SCHEDULE, 6).unwrap();
        let mut rng = SimRng::new(0);

        let r0 = policy.generate(Round(0), &mut rng);
        assert_eq!(count(&r0), 3);
        // Two records share round 0; file order is kept within floor 1.
        let floor1: Vec<_> = r0[&1].iter().map(|p| p.target).collect();
        assert_eq!(floor1, vec![4, 3]);
        assert_eq!(r0[&2][0].target, 6);

        assert_eq!(count(&policy.generate(Round(1), &mut rng)), 1);
        assert_eq!(count(&policy.generate(Round(2), &mut rng)), 0);
        assert_eq!(count(&policy.generate(Round(3), &mut rng)), 1);
    }

    #[test]
    fn total_counts_every_passenger() {
        let policy = load(SCHEDULE, 6).unwrap();
        assert_eq!(policy.total_scheduled(), 5);
    }

    #[test]
    fn same_round_same_floor_keeps_file_order() {
        // Queue follows the file, not ascending target order.
        let policy = load("0, 1, 5\n2, 3, 1\n0, 1, 3\n0, 1, 2\n", 6).unwrap();
        let r0 = policy.generate(Round(0), &mut SimRng::new(0));
        let queue: Vec<_> = r0[&1].iter().map(|p| p.target).collect();
        assert_eq!(queue, vec![5, 3, 2]);
        assert_eq!(count(&policy.generate(Round(2), &mut SimRng::new(0))), 1);
    }

    #[test]
    fn round_only_record_is_an_empty_batch() {
        let policy = load("4\n", 6).unwrap();
        assert_eq!(count(&policy.generate(Round(4), &mut SimRng::new(0))), 0);
    }

    #[test]
    fn odd_trailing_value_rejected() {
        let err = load("0, 1, 4, 2\n", 6).unwrap_err();
        assert!(matches!(err, ArrivalError::Format { line: 1, .. }), "{err}");
    }

    #[test]
    fn error_reports_offending_line() {
        let err = load("0, 1, 4\n1, 2\n", 6).unwrap_err();
        assert!(matches!(err, ArrivalError::Format { line: 2, .. }), "{err}");
    }

    #[test]
    fn non_numeric_rejected() {
        assert!(matches!(load("zero, 1, 2\n", 6), Err(ArrivalError::Format { .. })));
        assert!(matches!(load("0, one, 2\n", 6), Err(ArrivalError::Format { .. })));
    }

    #[test]
    fn out_of_range_floor_rejected() {
        assert!(matches!(load("0, 1, 7\n", 6), Err(ArrivalError::Format { .. })));
        assert!(matches!(load("0, 0, 2\n", 6), Err(ArrivalError::Format { .. })));
    }

    #[test]
    fn same_start_and_target_rejected() {
        assert!(matches!(load("0, 3, 3\n", 6), Err(ArrivalError::Format { .. })));
    }

    #[test]
    fn from_path_reads_file() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("arrivals.csv");
        std::fs::write(&path, SCHEDULE).unwrap();
        let policy = FileArrivals::from_path(6, &path).unwrap();
        assert_eq!(policy.total_scheduled(), 5);
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let result = FileArrivals::from_path(6, &dir.path().join("nope.csv"));
        assert!(matches!(result, Err(ArrivalError::Io(_))));
    }
}

// ── ArrivalSource ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod source {
    use std::path::{Path, PathBuf};

    use super::*;

    #[test]
    fn builds_random_policy() {
        let source = ArrivalSource::Random { num_people: Some(2) };
        let policy = source.build(6).unwrap();
        assert_eq!(policy.max_floor(), 6);
        assert_eq!(count(&policy.generate(Round(0), &mut SimRng::new(1))), 2);
    }

    #[test]
    fn relative_paths_resolved_against_base() {
        let mut source = ArrivalSource::File { path: PathBuf::from("arrivals.csv") };
        source.resolve_relative_to(Path::new("/scenarios"));
        assert_eq!(source, ArrivalSource::File { path: PathBuf::from("/scenarios/arrivals.csv") });
    }

    #[test]
    fn absolute_paths_untouched() {
        let mut source = ArrivalSource::File { path: PathBuf::from("/data/a.csv") };
        source.resolve_relative_to(Path::new("/scenarios"));
        assert_eq!(source, ArrivalSource::File { path: PathBuf::from("/data/a.csv") });
    }
}
