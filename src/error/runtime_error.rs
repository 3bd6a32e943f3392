use std::fmt;

use thiserror::Error;

/// The operator that attempted to divide by zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Division {
    /// `/`
    Quotient,
    /// `%`
    Remainder,
}

impl fmt::Display for Division {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Quotient => write!(f, "divide"),
            Self::Remainder => write!(f, "modulo"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
/// Represents all errors that can occur during evaluation.
pub enum RuntimeError {
    /// Tried to read or write a variable that was never declared.
    #[error("undefined variable {name}")]
    UndefinedVariable {
        /// The name of the variable.
        name: String,
    },
    /// Tried to declare a name that is already in the table.
    #[error("duplicate declaration {name}")]
    DuplicateDeclaration {
        /// The name of the variable.
        name: String,
    },
    /// Factorial of a value below zero.
    #[error("factorial of negative number {value}")]
    NegativeFactorial {
        /// The operand.
        value: f64,
    },
    /// Factorial of a value with a fractional part.
    #[error("factorial of non-integer {value}")]
    FractionalFactorial {
        /// The operand.
        value: f64,
    },
    /// Factorial whose result does not fit in an `f64`.
    #[error("factorial overflow {value}")]
    FactorialOverflow {
        /// The operand.
        value: f64,
    },
    /// Division or remainder by exactly zero.
    #[error("{0} by zero")]
    DivideByZero(Division),
}
