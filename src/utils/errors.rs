use rand;
use std::error;
use std::fmt::{self, Display, Formatter};
use std::result;

#[derive(Debug)]
pub enum Error {
    /// A fill element that is not a bit, or an empty fill (no `index`).
    InvalidState { index: Option<usize>, value: String },
    /// A tap that does not address a bit of a `len`-bit register.
    InvalidTap { tap: usize, len: usize },
    InvalidArgument(String),
    Rng(rand::Error),
}

impl Display for Error {
    fn fmt(&self, formatter: &mut Formatter) -> fmt::Result {
        match *self {
            Error::InvalidState {
                index: Some(index),
                ref value,
            } => write!(
                formatter,
                "invalid register state: element {} is {}, expected 0 or 1",
                index, value
            ),
            Error::InvalidState { index: None, .. } => {
                write!(formatter, "invalid register state: fill is empty")
            }
            Error::InvalidTap { tap, len } => write!(
                formatter,
                "invalid tap {} for a {}-bit register (taps must be below {})",
                tap, len, len
            ),
            Error::InvalidArgument(ref message) => {
                write!(formatter, "invalid argument: {}", message)
            }
            Error::Rng(ref error) => error.fmt(formatter),
        }
    }
}

impl error::Error for Error {}

impl From<rand::Error> for Error {
    fn from(error: rand::Error) -> Self {
        Error::Rng(error)
    }
}

pub type Result<T> = result::Result<T, Error>;
