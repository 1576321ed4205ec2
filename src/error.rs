use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while reading point lists. Point set operations themselves never fail.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    #[error("token {index} ({token:?}) is not a number")]
    InvalidCoordinate { index: usize, token: String },
    #[error("coordinate list has an odd length, the last x ({x}) has no y")]
    MissingY { x: f64 },
}
