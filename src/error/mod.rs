//! Error handling for field and curve arithmetic

use std::fmt;

/// The error type for field and curve operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The requested field power has no entry in the built-in table of
    /// reduction polynomials and none was supplied by the caller
    UnknownPrimitivePolynomial {
        /// Field power that was requested
        power: u64,
    },

    /// Arithmetic attempted between elements of different fields
    IncompatibleBaseOperation {
        /// Operation that mixed the operands
        operation: &'static str,
    },

    /// A point handed to the group law does not lie on the curve
    InvalidPoint {
        /// Context where the membership check failed
        context: &'static str,
    },

    /// Inversion of zero, or a curve degeneracy that leaves the
    /// formula undefined
    DivisionByZero {
        /// Operation where the division occurred
        context: &'static str,
    },

    /// Parameter validation error
    Parameter {
        /// Name of the invalid parameter
        name: &'static str,
        /// Reason why the parameter is invalid
        reason: &'static str,
    },
}

impl Error {
    /// Shorthand to create a Parameter error
    pub fn param(name: &'static str, reason: &'static str) -> Self {
        Error::Parameter { name, reason }
    }
}

/// Result type for field and curve operations
pub type Result<T> = core::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::UnknownPrimitivePolynomial { power } => {
                write!(
                    f,
                    "No built-in reduction polynomial for GF(2^{}); supply one explicitly",
                    power
                )
            }
            Error::IncompatibleBaseOperation { operation } => {
                write!(f, "Operands of {} belong to different fields", operation)
            }
            Error::InvalidPoint { context } => {
                write!(f, "Point is not on the curve in {}", context)
            }
            Error::DivisionByZero { context } => {
                write!(f, "Division by zero in {}", context)
            }
            Error::Parameter { name, reason } => {
                write!(f, "Invalid parameter '{}': {}", name, reason)
            }
        }
    }
}

impl std::error::Error for Error {}

// Include the validation submodule
pub mod validate;

#[cfg(test)]
mod tests;
