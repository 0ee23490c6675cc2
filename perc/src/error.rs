use thiserror::Error;

////////////////////////////////////////////////////////////////////////////////

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// A constructor was given a zero dimension or trial count.
    #[error("{what} must be greater than zero")]
    InvalidArgument { what: &'static str },
    /// A site coordinate lies outside the grid.
    #[error("site ({row}, {col}) is outside a {size}x{size} grid")]
    OutOfRange {
        row: usize,
        col: usize,
        size: usize,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
