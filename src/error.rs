use thiserror::Error;

#[derive(Error, Debug)]
pub enum KursError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Malformed rate data: {0}")]
    MalformedRates(String),

    #[error("Unknown currency: {0} (no rate on record)")]
    UnknownCurrency(String),

    #[error("Invalid rate for {0}: rates must be positive")]
    InvalidRate(String),

    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    #[error("Settings error: {0}")]
    Settings(String),

    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, KursError>;
