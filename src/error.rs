//! Errors raised while constructing shapes or doing point arithmetic.
use thiserror::Error;

pub type Result<T> = std::result::Result<T, GeometryError>;

/// Every failure is reported eagerly, at construction or operation time.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum GeometryError {
    /// A required named option was not supplied.
    #[error("{shape} requires {parameter}")]
    MissingParameter {
        shape: &'static str,
        parameter: &'static str,
    },

    /// More than one mutually exclusive option was supplied.
    #[error("{shape} accepts only one of {}", .parameters.join(", "))]
    ConflictingParameters {
        shape: &'static str,
        parameters: Vec<&'static str>,
    },

    /// Operands have a different number of coordinates.
    #[error("dimension mismatch: {left} vs {right}")]
    DimensionMismatch { left: usize, right: usize },

    /// The operand has the wrong kind for the operation.
    #[error("invalid operand: {0}")]
    InvalidOperand(String),

    /// A constructor was handed the wrong number of arguments.
    #[error("{shape} takes {expected} arguments, got {found}")]
    WrongArity {
        shape: &'static str,
        expected: usize,
        found: usize,
    },
}
