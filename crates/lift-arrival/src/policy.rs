//! The `ArrivalPolicy` trait.

use std::collections::BTreeMap;

use lift_core::{Floor, Round, SimRng};
use lift_entity::Passenger;

/// One round's new passengers, keyed by start floor.
///
/// Policies may omit floors with no arrivals or map them to an empty `Vec`;
/// consumers must accept both.
pub type Arrivals = BTreeMap<Floor, Vec<Passenger>>;

/// Pluggable source of new passengers.
///
/// The engine calls [`generate`][Self::generate] exactly once per round,
/// after wait-time accrual and before alighting.  Randomness comes from the
/// engine-owned `rng`, so a seeded run is reproducible.
///
/// Passengers returned here carry `PassengerId::INVALID`; the engine assigns
/// ids on admission.
pub trait ArrivalPolicy: Send + 'static {
    /// New passengers for `round`.
    fn generate(&self, round: Round, rng: &mut SimRng) -> Arrivals;

    /// Highest floor this policy may place a passenger on.
    fn max_floor(&self) -> Floor;
}

impl<P: ArrivalPolicy + ?Sized> ArrivalPolicy for Box<P> {
    fn generate(&self, round: Round, rng: &mut SimRng) -> Arrivals {
        (**self).generate(round, rng)
    }

    fn max_floor(&self) -> Floor {
        (**self).max_floor()
    }
}

/// An `Arrivals` map with an empty queue for every floor in `1..=max_floor`.
pub(crate) fn empty_arrivals(max_floor: Floor) -> Arrivals {
    (1..=max_floor).map(|f| (f, Vec::new())).collect()
}
