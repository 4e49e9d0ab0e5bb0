//! Decision primitives shared by the distance-based policies.

use lift_core::{Direction, Floor};

/// The direction that takes a car on `current` one step closer to `target`.
#[inline]
pub fn direction_toward(target: Floor, current: Floor) -> Direction {
    use std::cmp::Ordering::*;
    match target.cmp(&current) {
        Greater => Direction::Up,
        Less    => Direction::Down,
        Equal   => Direction::Stay,
    }
}

/// Pick the nearest candidate floor, breaking ties toward the lowest floor.
///
/// `candidates` yields `(floor, distance)` pairs.  Floors that should not be
/// considered are simply left out.  Candidate order does not matter and
/// duplicates are harmless.  Returns `None` when there are no candidates.
pub fn closest_floor<I>(candidates: I) -> Option<Floor>
where
    I: IntoIterator<Item = (Floor, u32)>,
{
    candidates
        .into_iter()
        .min_by_key(|&(floor, distance)| (distance, floor))
        .map(|(floor, _)| floor)
}
