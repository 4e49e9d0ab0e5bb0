//! Floors and elevator directions.

use std::fmt;

/// A 1-based floor number.  Floor 1 is the ground floor.
pub type Floor = u32;

/// The direction an elevator moves during one round.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    Up,
    Stay,
    Down,
}

impl Direction {
    /// Every direction, in `Up, Stay, Down` order.
    pub const ALL: [Direction; 3] = [Direction::Up, Direction::Stay, Direction::Down];

    /// Signed floor offset: `+1`, `0` or `-1`.
    #[inline]
    pub fn offset(self) -> i64 {
        match self {
            Direction::Up   => 1,
            Direction::Stay => 0,
            Direction::Down => -1,
        }
    }

    /// Floor reached by moving one step from `floor`, or `None` if that step
    /// would leave `[1, max_floor]`.
    #[inline]
    pub fn apply(self, floor: Floor, max_floor: Floor) -> Option<Floor> {
        let next = floor as i64 + self.offset();
        if next >= 1 && next <= max_floor as i64 {
            Some(next as Floor)
        } else {
            None
        }
    }

    /// The directions an elevator at `floor` may legally take.
    pub fn valid_at(floor: Floor, max_floor: Floor) -> Vec<Direction> {
        Self::ALL
            .into_iter()
            .filter(|d| d.apply(floor, max_floor).is_some())
            .collect()
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Direction::Up   => "up",
            Direction::Stay => "stay",
            Direction::Down => "down",
        };
        f.write_str(s)
    }
}
