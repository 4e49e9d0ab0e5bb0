use lift_arrival::ArrivalError;
use lift_core::LiftError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(String),

    #[error("{what} length {got} does not match elevator count {expected}")]
    ElevatorCountMismatch {
        expected: usize,
        got:      usize,
        what:     &'static str,
    },

    #[error(transparent)]
    Core(#[from] LiftError),

    #[error("arrival policy error: {0}")]
    Arrival(#[from] ArrivalError),
}

pub type SimResult<T> = Result<T, SimError>;
