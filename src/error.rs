use thiserror::Error;

/// Lexing and grammar errors.
///
/// Raised while turning input into tokens or while matching the token stream
/// against the calculator grammar: malformed characters, unbalanced groups,
/// missing declaration parts and misuse of the pushback slot.
pub mod parse_error;
/// Evaluation errors.
///
/// Raised once a statement is well formed but cannot produce a value:
/// unknown or duplicated variables, division by zero and factorial domain
/// errors.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::{Division, RuntimeError};

/// Result type shared by the token stream, the evaluator and the session.
pub type EvalResult<T> = Result<T, Error>;

/// Any failure surfaced while reading or evaluating a statement.
#[derive(Debug, Error)]
pub enum Error {
    /// The input could not be tokenized or did not match the grammar.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// The statement was well formed but could not be evaluated.
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
    /// Reading input or writing output failed.
    #[error("i/o failure: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Returns `true` for errors that end the session instead of being
    /// reported and skipped.
    ///
    /// A full pushback slot means the evaluator broke its own invariant, and an
    /// I/O failure leaves nothing left to read, so neither can be recovered
    /// by discarding the rest of the statement.
    ///
    /// # Example
    /// ```
    /// use tally::error::{Error, ParseError, RuntimeError};
    ///
    /// assert!(Error::from(ParseError::BufferFull).is_fatal());
    /// assert!(!Error::from(ParseError::BadToken { token: "#".to_string() }).is_fatal());
    /// assert!(!Error::from(RuntimeError::UndefinedVariable { name: "x".to_string() }).is_fatal());
    /// ```
    #[must_use]
    pub const fn is_fatal(&self) -> bool {
        matches!(self, Self::Parse(ParseError::BufferFull) | Self::Io(_))
    }
}
