use thiserror::Error;

use crate::Track;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InvalidInput),
}

/// Rejected values from the session or the sweep configuration.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InvalidInput {
    #[error("expected {what}, found end of input")]
    MissingValue { what: &'static str },
    #[error("{what} must be an integer, got {token:?}")]
    NotANumber { what: &'static str, token: String },
    #[error("{what} must not be negative, got {token}")]
    Negative { what: &'static str, token: String },
    #[error("{what} is too large: {token}")]
    TooLarge { what: &'static str, token: String },
    #[error("number of requests must be positive")]
    NoRequests,
    #[error("track {track} is outside a disk of {disk_size} tracks")]
    TrackOutOfRange { track: Track, disk_size: Track },
    #[error("disk size must be positive")]
    ZeroDiskSize,
}
