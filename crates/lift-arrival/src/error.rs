use thiserror::Error;

#[derive(Debug, Error)]
pub enum ArrivalError {
    #[error("schedule format error on line {line}: {reason}")]
    Format { line: u64, reason: String },

    #[error("schedule CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("arrival configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type ArrivalResult<T> = Result<T, ArrivalError>;
