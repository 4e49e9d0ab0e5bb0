//! Plain-text visualization.
//!
//! [`TextRenderer`] implements the visualization hooks of
//! [`SimObserver`] and writes a log of events plus one ASCII frame per
//! round:
//!
//! ```text
//! ── R3 ──
//!   + PassengerId(4) arrives on floor 5, going to 2
//!   < PassengerId(1) leaves ElevatorId(0) on floor 4 after 3 rounds
//!   > PassengerId(3) boards ElevatorId(1)
//!     5 |   .     .   | 0
//!     4 | [0/3]   .   |
//!     3 |   .   [2/3] |
//!     2 |   .     .   | 2 4
//!     1 |   .     .   |
//! ```
//!
//! Each car shows `[riding/capacity]` on its floor.  The digits to the right
//! of a floor are the anger levels of the people queued there, in queue
//! order.

use std::io::{self, Write};
use std::thread;
use std::time::Duration;

use lift_arrival::Arrivals;
use lift_core::{Direction, ElevatorId, Round};
use lift_entity::{Elevator, Passenger, WaitingRegistry};
use lift_sim::{SimObserver, SimStats};

/// Draw the building, top floor first.  Lines have no trailing whitespace
/// and end in `\n`.
pub fn render_frame(elevators: &[Elevator], waiting: &WaitingRegistry) -> String {
    let width = elevators
        .iter()
        .map(|e| car_cell(e.capacity() as usize, e.capacity()).len())
        .max()
        .unwrap_or(1);

    let mut frame = String::new();
    for floor in (1..=waiting.num_floors()).rev() {
        let mut line = format!("{floor:>5} |");
        for e in elevators {
            let cell = if e.current_floor() == floor {
                car_cell(e.len(), e.capacity())
            } else {
                ".".to_owned()
            };
            line.push_str(&format!(" {cell:^width$}"));
        }
        line.push_str(" |");
        for p in waiting.at(floor) {
            line.push_str(&format!(" {}", p.anger_level()));
        }
        frame.push_str(line.trim_end());
        frame.push('\n');
    }
    frame
}

fn car_cell(riding: usize, capacity: u32) -> String {
    format!("[{riding}/{capacity}]")
}

/// A [`SimObserver`] that prints what happens each round to `out`.
///
/// Only does anything when the simulation runs with `visualize` on, except
/// for the closing statistics line which is always written.
pub struct TextRenderer<W: Write> {
    out:         W,
    frame_delay: Duration,
    last_error:  Option<io::Error>,
}

impl<W: Write> TextRenderer<W> {
    /// Render to `out` without pausing between frames.
    pub fn new(out: W) -> Self {
        Self { out, frame_delay: Duration::ZERO, last_error: None }
    }

    /// Sleep `units × delay` whenever the engine asks for a pause.
    pub fn with_frame_delay(mut self, delay: Duration) -> Self {
        self.frame_delay = delay;
        self
    }

    /// Take the first write error, if any.
    pub fn take_error(&mut self) -> Option<io::Error> {
        self.last_error.take()
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn emit(&mut self, text: std::fmt::Arguments<'_>) {
        if let Err(e) = self.out.write_fmt(text) {
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: Write> SimObserver for TextRenderer<W> {
    fn on_round_start(&mut self, round: Round) {
        self.emit(format_args!("── {round} ──\n"));
    }

    fn on_arrivals(&mut self, _round: Round, arrivals: &Arrivals) {
        for p in arrivals.values().flatten() {
            self.emit(format_args!(
                "  + {} arrives on floor {}, going to {}\n",
                p.id, p.start, p.target
            ));
        }
    }

    fn on_boarding(&mut self, passenger: &Passenger, elevator: ElevatorId) {
        self.emit(format_args!("  > {} boards {elevator}\n", passenger.id));
    }

    fn on_disembarking(&mut self, passenger: &Passenger, elevator: ElevatorId) {
        self.emit(format_args!(
            "  < {} leaves {elevator} on floor {} after {} rounds\n",
            passenger.id,
            passenger.target,
            passenger.wait_time(),
        ));
    }

    fn on_elevator_moves(&mut self, elevators: &[Elevator], directions: &[Direction]) {
        for (e, d) in elevators.iter().zip(directions) {
            if *d != Direction::Stay {
                log::trace!(
                    "{} moved {d} to floor {} ({:.0}% full)",
                    e.id,
                    e.current_floor(),
                    e.fullness() * 100.0,
                );
            }
        }
    }

    fn on_render(&mut self, _round: Round, elevators: &[Elevator], waiting: &WaitingRegistry) {
        let frame = render_frame(elevators, waiting);
        self.emit(format_args!("{frame}"));
        if let Err(e) = self.out.flush() {
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }

    fn on_pause(&mut self, units: u32) {
        if !self.frame_delay.is_zero() && units > 0 {
            thread::sleep(self.frame_delay * units);
        }
    }

    fn on_sim_end(&mut self, _final_round: Round, stats: &SimStats) {
        self.emit(format_args!("{stats}\n"));
    }
}
