use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum QuadtreeError {
    #[error(
        "region must be finite with non-negative width/height (x: {x}, y: {y}, width: {width}, height: {height})"
    )]
    InvalidRegion {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
    },

    #[error("node capacity must be at least 1")]
    InvalidCapacity,

    #[error("item is already tracked by a node")]
    AlreadyTracked,

    #[error("item is not tracked by any node")]
    NotTracked,

    #[error("item key does not refer to a stored item")]
    UnknownItem,
}

pub type QuadtreeResult<T> = Result<T, QuadtreeError>;
