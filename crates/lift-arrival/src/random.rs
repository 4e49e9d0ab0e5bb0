//! Uniformly random arrivals.

use rand::seq::index;

use lift_core::{Floor, Round, SimRng};
use lift_entity::Passenger;

use crate::policy::empty_arrivals;
use crate::{ArrivalError, ArrivalPolicy, ArrivalResult, Arrivals};

/// Generates `num_people` passengers every round.
///
/// Start and target floors are drawn together, uniformly and without
/// replacement, from `1..=max_floor`, so they always differ.  `None` means
/// nobody ever arrives.
#[derive(Debug, Clone)]
pub struct RandomArrivals {
    max_floor:  Floor,
    num_people: Option<u32>,
}

impl RandomArrivals {
    pub fn new(max_floor: Floor, num_people: Option<u32>) -> ArrivalResult<Self> {
        if max_floor < 2 {
            return Err(ArrivalError::Config(format!(
                "random arrivals need at least 2 floors, got {max_floor}"
            )));
        }
        Ok(Self { max_floor, num_people })
    }
}

impl ArrivalPolicy for RandomArrivals {
    fn generate(&self, _round: Round, rng: &mut SimRng) -> Arrivals {
        let mut arrivals = empty_arrivals(self.max_floor);
        for _ in 0..self.num_people.unwrap_or(0) {
            let pick = index::sample(rng.inner(), self.max_floor as usize, 2);
            let start = pick.index(0) as Floor + 1;
            let target = pick.index(1) as Floor + 1;
            arrivals
                .entry(start)
                .or_default()
                .push(Passenger::new(start, target));
        }
        arrivals
    }

    fn max_floor(&self) -> Floor {
        self.max_floor
    }
}
