use crate::somelinalg::linear_system::LinearSystemError;
use std::fmt;
use std::io;

#[derive(Debug)]
pub enum LieError {
    /// malformed structure constants or parameter polynomial
    Parse { input: String, message: String },
    /// a pair `ij` refers to a basis element outside `1..=n`
    IndexOutOfRange { index: usize, dimension: usize },
    /// a component of the structure constants is not a combination of pairs `ij`
    NotATwoForm(String),
    /// a symbol in the structure constants is not a declared parameter
    UnknownParameter(String),
    /// a parameter name collides with the coordinate names used internally
    ReservedParameterName(String),
    ZeroDenominator(String),
    /// a catalog has no entry at this 1-based position
    NoSuchEntry { index: usize, size: usize },
    NonLinear(String),
    InconsistentSystem(String),
    Config(String),
    Io(io::Error),
}

impl fmt::Display for LieError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            LieError::Parse { input, message } => {
                write!(f, "cannot parse '{}': {}", input, message)
            }
            LieError::IndexOutOfRange { index, dimension } => write!(
                f,
                "basis index {} out of range for a Lie algebra of dimension {}",
                index, dimension
            ),
            LieError::NotATwoForm(component) => {
                write!(f, "component '{}' is not a linear combination of pairs ij", component)
            }
            LieError::UnknownParameter(name) => write!(f, "unknown parameter '{}'", name),
            LieError::ReservedParameterName(name) => {
                write!(f, "parameter name '{}' is reserved for coordinates", name)
            }
            LieError::ZeroDenominator(input) => write!(f, "zero denominator in '{}'", input),
            LieError::NoSuchEntry { index, size } => {
                write!(f, "no entry {} in a catalog of {} entries", index, size)
            }
            LieError::NonLinear(eq) => write!(f, "expected a linear equation, got {}", eq),
            LieError::InconsistentSystem(msg) => write!(f, "inconsistent linear system: {}", msg),
            LieError::Config(msg) => write!(f, "invalid configuration: {}", msg),
            LieError::Io(e) => write!(f, "I/O error: {}", e),
        }
    }
}

impl std::error::Error for LieError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LieError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<LinearSystemError> for LieError {
    fn from(e: LinearSystemError) -> Self {
        match e {
            LinearSystemError::NonLinear(eq) => LieError::NonLinear(eq),
            LinearSystemError::Inconsistent(msg) => LieError::InconsistentSystem(msg),
        }
    }
}

impl From<io::Error> for LieError {
    fn from(e: io::Error) -> Self {
        LieError::Io(e)
    }
}

pub type LieResult<T> = Result<T, LieError>;
