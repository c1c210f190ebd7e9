use core::fmt;

/// Math error
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum Error {
    /// A transform that needed to be inverted has a determinant of (approximately) 0
    SingularTransform { determinant: f64 },
    /// Raw index that does not name one of the rotation orders
    UnknownRotationOrder(usize),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::SingularTransform { determinant } => f.write_fmt(format_args!("Singular transform, determinant is {determinant}")),
            Error::UnknownRotationOrder(idx)         => f.write_fmt(format_args!("Unknown rotation order: {idx}")),
        }
    }
}

impl std::error::Error for Error {}

pub type Result<T> = core::result::Result<T, Error>;
