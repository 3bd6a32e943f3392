use std::io::{BufRead, Write};

use tracing::{info, warn};

use crate::{
    error::EvalResult,
    interpreter::{
        lexer::Token, parser::core::next_statement, stream::TokenStream, variables::VariableTable,
    },
};

/// The prompt written before each statement is read.
pub const PROMPT: &str = "> ";

/// Settings for an interactive session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionOptions {
    /// Write [`PROMPT`] before each statement.
    pub prompt:    bool,
    /// Start with `pi` and `e` declared.
    pub constants: bool,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self { prompt:    true,
               constants: true, }
    }
}

/// The read-evaluate-print loop.
///
/// Owns the token stream and the variable table for the lifetime of the
/// session, so declarations from one statement are visible to the next.
/// Results go to `output`, error messages to `errors`.
///
/// # Example
/// ```
/// use tally::session::{Session, SessionOptions};
///
/// let mut output = Vec::new();
/// let mut errors = Vec::new();
/// let options = SessionOptions { prompt: false, ..SessionOptions::default() };
///
/// Session::new("let x = 2 = x * 3 = 1 / 0 = pi =".as_bytes(), &mut output, &mut errors, options)
///     .run()
///     .unwrap();
///
/// assert_eq!(String::from_utf8(output).unwrap(), "= 2\n= 6\n= 3.1415926535\n");
/// assert_eq!(String::from_utf8(errors).unwrap(), "divide by zero\n");
/// ```
pub struct Session<R, W, E> {
    tokens:    TokenStream<R>,
    variables: VariableTable,
    output:    W,
    errors:    E,
    options:   SessionOptions,
}

impl<R: BufRead, W: Write, E: Write> Session<R, W, E> {
    /// Creates a session reading statements from `input`.
    pub fn new(input: R, output: W, errors: E, options: SessionOptions) -> Self {
        let variables = if options.constants {
            VariableTable::with_constants()
        } else {
            VariableTable::new()
        };
        Self { tokens: TokenStream::new(input),
               variables,
               output,
               errors,
               options }
    }

    /// Runs until a quit token or the end of input.
    ///
    /// Each statement that evaluates prints `= <value>`. A statement that
    /// fails prints its error message, and the rest of its input, up to and
    /// including the next `=`, is discarded; the session then carries on with
    /// its variables intact.
    ///
    /// # Errors
    /// Fatal errors (see [`crate::Error::is_fatal`]) and failures to write
    /// output end the session and are returned.
    pub fn run(&mut self) -> EvalResult<()> {
        let mut evaluated = 0usize;
        let mut failed = 0usize;

        loop {
            if self.options.prompt {
                write!(self.output, "{PROMPT}")?;
                self.output.flush()?;
            }

            match next_statement(&mut self.tokens, &mut self.variables) {
                Ok(Some(value)) => {
                    evaluated += 1;
                    writeln!(self.output, "= {value}")?;
                },
                Ok(None) => break,
                Err(e) if e.is_fatal() => return Err(e),
                Err(e) => {
                    failed += 1;
                    warn!(error = %e, line = self.tokens.line(), "statement failed");
                    writeln!(self.errors, "{e}")?;
                    self.tokens.ignore(&Token::Print)?;
                },
            }
        }

        self.output.flush()?;
        info!(evaluated, failed, variables = self.variables.len(), "session finished");
        Ok(())
    }

    /// The variables declared so far.
    #[must_use]
    pub const fn variables(&self) -> &VariableTable {
        &self.variables
    }
}
