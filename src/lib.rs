//! # tally
//!
//! tally is an interactive floating-point calculator. It reads statements,
//! evaluates them as it parses, and prints each result.
//!
//! A statement is an expression or a `let` declaration, ended by `=`:
//!
//! ```text
//! > let r = 2 =
//! = 2
//! > pi * r * r =
//! = 12.566370614
//! > 5! / (2 + 3) =
//! = 24
//! ```
//!
//! Supported operators are `+`, `-`, `*`, `/`, `%`, unary `-`/`+`, postfix
//! `!` and grouping with `()` or `{}`. `q` quits.
//!
//! # Debugging
//!
//! The binary accepts `-v`, `-vv` or `-vvv` to log `info`, `debug` or
//! `trace` events to stderr. Trace level shows every token read.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc)]

use crate::interpreter::{
    parser::core::next_statement, stream::TokenStream, variables::VariableTable,
};

/// Provides unified error types for lexing, parsing and evaluation.
///
/// Errors are split into [`error::ParseError`] for malformed input and
/// [`error::RuntimeError`] for statements that cannot be evaluated, joined by
/// [`Error`]. The split also decides recovery: see [`Error::is_fatal`].
pub mod error;
/// Tokenizing, parsing and evaluating statements.
///
/// # Responsibilities
/// - Converts the input character stream into tokens.
/// - Evaluates statements by recursive descent, one precedence level per
///   function.
/// - Holds the variable table that declarations write to.
pub mod interpreter;
/// Diagnostic logging setup.
pub mod logging;
/// The interactive read-evaluate-print loop and its error recovery.
pub mod session;

pub use error::{Error, EvalResult};
pub use session::{Session, SessionOptions};

/// Evaluates every statement in `source` and returns the last value.
///
/// A fresh variable table with the predefined constants is used, so
/// declarations do not outlive the call. Evaluation stops at the first
/// error, or at a quit token. Returns `Ok(None)` if `source` holds no
/// statement.
///
/// # Errors
/// Returns the first lexing, parsing or evaluation error encountered.
///
/// # Examples
/// ```
/// use tally::evaluate;
///
/// assert_eq!(evaluate("2 + 3 * 4").unwrap(), Some(14.0));
/// assert_eq!(evaluate("let x = 2 = x * 3 =").unwrap(), Some(6.0));
///
/// // 'y' is not defined.
/// assert!(evaluate("y + 1").is_err());
/// ```
pub fn evaluate(source: &str) -> EvalResult<Option<f64>> {
    let mut tokens = TokenStream::new(source.as_bytes());
    let mut variables = VariableTable::with_constants();

    let mut result = None;
    while let Some(value) = next_statement(&mut tokens, &mut variables)? {
        result = Some(value);
    }
    Ok(result)
}
