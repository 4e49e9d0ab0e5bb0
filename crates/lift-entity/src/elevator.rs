//! An elevator car.

use lift_core::{Direction, ElevatorId, Floor};

use crate::Passenger;

/// A single elevator car.
///
/// Passengers are kept in boarding order: `passengers()[0]` is the one who
/// has been aboard the longest.  Movement policies such as *pushy passenger*
/// depend on that ordering.
///
/// # Invariants
///
/// - `1 <= current_floor`, and `current_floor` changes by at most one floor
///   per call to [`move_one`][Self::move_one].
/// - `passengers().len() <= capacity`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Elevator {
    pub id: ElevatorId,
    current_floor: Floor,
    capacity: u32,
    passengers: Vec<Passenger>,
}

impl Elevator {
    /// An empty car on floor 1.
    pub fn new(id: ElevatorId, capacity: u32) -> Self {
        Self::placed(id, capacity, 1)
    }

    /// An empty car on `floor`.
    ///
    /// # Panics
    /// Panics if `capacity == 0` or `floor == 0`.
    pub fn placed(id: ElevatorId, capacity: u32, floor: Floor) -> Self {
        assert!(capacity >= 1, "elevator capacity must be at least 1");
        assert!(floor >= 1, "floors are 1-based");
        Self {
            id,
            current_floor: floor,
            capacity,
            passengers: Vec::with_capacity(capacity as usize),
        }
    }

    #[inline]
    pub fn current_floor(&self) -> Floor {
        self.current_floor
    }

    #[inline]
    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    /// Passengers in boarding order.
    #[inline]
    pub fn passengers(&self) -> &[Passenger] {
        &self.passengers
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.passengers.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.passengers.is_empty()
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.passengers.len() >= self.capacity as usize
    }

    /// Seats still available.
    #[inline]
    pub fn free_slots(&self) -> usize {
        (self.capacity as usize).saturating_sub(self.passengers.len())
    }

    /// Fraction of capacity in use, in `[0.0, 1.0]`.
    pub fn fullness(&self) -> f64 {
        self.passengers.len() as f64 / self.capacity as f64
    }

    /// Load one passenger at the back of the boarding order.
    ///
    /// # Panics
    /// Panics if the car is already full.
    pub fn board(&mut self, passenger: Passenger) {
        assert!(!self.is_full(), "{} boarded beyond capacity {}", self.id, self.capacity);
        self.passengers.push(passenger);
    }

    /// Remove and return every passenger whose target is the current floor,
    /// in boarding order.  Remaining passengers keep their relative order.
    pub fn alight(&mut self) -> Vec<Passenger> {
        let floor = self.current_floor;
        let (leaving, staying): (Vec<_>, Vec<_>) = std::mem::take(&mut self.passengers)
            .into_iter()
            .partition(|p| p.target == floor);
        self.passengers = staying;
        leaving
    }

    /// Add one round of waiting to every passenger aboard.
    pub fn accrue_wait(&mut self) {
        for p in &mut self.passengers {
            p.accrue_wait();
        }
    }

    /// Move one step in `direction`.
    ///
    /// # Panics
    /// Panics if the step would leave `[1, max_floor]`.  A movement policy
    /// that asks for such a step is broken; there is no sensible recovery.
    pub fn move_one(&mut self, direction: Direction, max_floor: Floor) {
        match direction.apply(self.current_floor, max_floor) {
            Some(next) => self.current_floor = next,
            None => panic!(
                "{} at floor {} cannot move {direction} in a {max_floor}-floor building",
                self.id, self.current_floor,
            ),
        }
    }
}
