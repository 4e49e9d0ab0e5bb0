//! Floor-indexed queues of passengers waiting for a car.

use lift_core::Floor;

use crate::Passenger;

/// Passengers waiting on each floor, in arrival order.
///
/// Internally a dense `Vec` indexed by `floor - 1`; every floor in
/// `1..=num_floors` always has a (possibly empty) queue.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WaitingRegistry {
    floors: Vec<Vec<Passenger>>,
}

impl WaitingRegistry {
    /// An empty registry for a building with `num_floors` floors.
    pub fn new(num_floors: Floor) -> Self {
        Self {
            floors: vec![Vec::new(); num_floors as usize],
        }
    }

    #[inline]
    pub fn num_floors(&self) -> Floor {
        self.floors.len() as Floor
    }

    /// Waiting passengers on `floor`, oldest first.  Empty for floors outside
    /// the building.
    pub fn at(&self, floor: Floor) -> &[Passenger] {
        floor
            .checked_sub(1)
            .and_then(|i| self.floors.get(i as usize))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// `(floor, queue)` for every floor, ascending.
    pub fn iter(&self) -> impl Iterator<Item = (Floor, &[Passenger])> + '_ {
        self.floors
            .iter()
            .enumerate()
            .map(|(i, q)| (i as Floor + 1, q.as_slice()))
    }

    /// Floors with at least one waiting passenger, ascending.
    pub fn occupied_floors(&self) -> impl Iterator<Item = Floor> + '_ {
        self.iter().filter(|(_, q)| !q.is_empty()).map(|(f, _)| f)
    }

    /// Total passengers waiting across all floors.
    pub fn total(&self) -> usize {
        self.floors.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.floors.iter().all(Vec::is_empty)
    }

    /// Append `passenger` to the queue at its start floor.
    ///
    /// # Panics
    /// Panics if the start floor is outside the building.
    pub fn push(&mut self, passenger: Passenger) {
        let floor = passenger.start;
        let Some(queue) = floor
            .checked_sub(1)
            .and_then(|i| self.floors.get_mut(i as usize))
        else {
            panic!(
                "passenger start floor {floor} outside building of {} floors",
                self.floors.len()
            );
        };
        queue.push(passenger);
    }

    /// Remove and return up to `n` passengers from the front of `floor`'s
    /// queue, preserving their order.
    pub fn take_front(&mut self, floor: Floor, n: usize) -> Vec<Passenger> {
        match floor.checked_sub(1).and_then(|i| self.floors.get_mut(i as usize)) {
            None => Vec::new(),
            Some(queue) => {
                let n = n.min(queue.len());
                queue.drain(..n).collect()
            }
        }
    }

    /// Add one round of waiting to every waiting passenger.
    pub fn accrue_wait(&mut self) {
        for p in self.floors.iter_mut().flatten() {
            p.accrue_wait();
        }
    }
}
