//! Fluent builder for constructing a [`Sim`].

use lift_arrival::ArrivalPolicy;
use lift_core::{ElevatorId, Floor, RoundClock, SimConfig, SimRng};
use lift_entity::{Elevator, WaitingRegistry};
use lift_policy::MovementPolicy;

use crate::{Sim, SimError, SimResult, WaitStats};

/// Child-stream offsets so arrivals and movement never share random numbers.
const ARRIVAL_STREAM:  u64 = 1;
const MOVEMENT_STREAM: u64 = 2;

/// Fluent builder for [`Sim<A, M>`].
///
/// # Required inputs
///
/// - [`SimConfig`]: floors, elevators, capacity, seed, visualize flag
/// - `A: ArrivalPolicy`: where passengers come from
/// - `M: MovementPolicy`: how cars are dispatched
///
/// # Optional inputs (have defaults)
///
/// | Method                   | Default                     |
/// |--------------------------|-----------------------------|
/// | `.seed(s)`               | `config.seed`               |
/// | `.visualize(b)`          | `config.visualize`          |
/// | `.initial_floors(v)`     | every car on floor 1        |
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::new(config, RandomArrivals::new(6, Some(2))?, PushyPassenger)
///     .seed(7)
///     .build()?;
/// sim.run(10, &mut NoopObserver)?;
/// ```
pub struct SimBuilder<A: ArrivalPolicy, M: MovementPolicy> {
    config:    SimConfig,
    arrivals:  A,
    movement:  M,
    floors:    Option<Vec<Floor>>,
}

impl<A: ArrivalPolicy, M: MovementPolicy> SimBuilder<A, M> {
    /// Create a builder with all required inputs.
    pub fn new(config: SimConfig, arrivals: A, movement: M) -> Self {
        Self {
            config,
            arrivals,
            movement,
            floors: None,
        }
    }

    /// Override the master RNG seed.
    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = seed;
        self
    }

    /// Turn the observer's visualization hooks on or off.
    pub fn visualize(mut self, visualize: bool) -> Self {
        self.config.visualize = visualize;
        self
    }

    /// Start each car on the given floor instead of floor 1.
    ///
    /// Must be length `num_elevators`, every floor within the building.
    pub fn initial_floors(mut self, floors: Vec<Floor>) -> Self {
        self.floors = Some(floors);
        self
    }

    /// Validate inputs, place the cars, seed the RNG streams, and return a
    /// ready-to-run [`Sim`].
    pub fn build(self) -> SimResult<Sim<A, M>> {
        self.config.validate()?;
        let num_floors = self.config.num_floors;
        let num_elevators = self.config.num_elevators as usize;

        if self.arrivals.max_floor() > num_floors {
            return Err(SimError::Config(format!(
                "arrival policy places passengers up to floor {} but the building has {num_floors}",
                self.arrivals.max_floor()
            )));
        }

        // ── Resolve starting floors ───────────────────────────────────────
        let floors = match self.floors {
            Some(f) => {
                if f.len() != num_elevators {
                    return Err(SimError::ElevatorCountMismatch {
                        expected: num_elevators,
                        got:      f.len(),
                        what:     "initial floors",
                    });
                }
                if let Some(bad) = f.iter().find(|&&fl| fl < 1 || fl > num_floors) {
                    return Err(SimError::Config(format!(
                        "initial floor {bad} outside 1..={num_floors}"
                    )));
                }
                f
            }
            None => vec![1; num_elevators],
        };

        let elevators = floors
            .into_iter()
            .enumerate()
            .map(|(i, floor)| {
                Elevator::placed(ElevatorId(i as u32), self.config.elevator_capacity, floor)
            })
            .collect();

        // ── Seed independent RNG streams ──────────────────────────────────
        let mut root = SimRng::new(self.config.seed);
        let arrival_rng = root.child(ARRIVAL_STREAM);
        let movement_rng = root.child(MOVEMENT_STREAM);

        Ok(Sim {
            waiting:        WaitingRegistry::new(num_floors),
            clock:          RoundClock::new(),
            config:         self.config,
            elevators,
            arrivals:       self.arrivals,
            movement:       self.movement,
            arrival_rng,
            movement_rng,
            stats:          WaitStats::new(),
            next_passenger: 0,
        })
    }
}
