use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
/// Represents all errors that can occur during lexing or parsing.
pub enum ParseError {
    /// A character sequence that is not part of the language.
    #[error("bad token {token}")]
    BadToken {
        /// The offending source text.
        token: String,
    },
    /// A token was put back while another one was still waiting.
    #[error("putback() into a full buffer")]
    BufferFull,
    /// A group was not closed by its matching delimiter.
    #[error("'{expected}' expected")]
    MismatchedDelimiter {
        /// The closing character that was required.
        expected: char,
    },
    /// A required token of a declaration was absent.
    #[error("'{expected}' missing in declaration of {name}")]
    MissingToken {
        /// The token that was required.
        expected: char,
        /// The variable being declared.
        name:     String,
    },
    /// The token at hand cannot start or continue the current production.
    #[error("{expected}")]
    UnexpectedToken {
        /// What the grammar required at this point, phrased as a message.
        expected: &'static str,
    },
    /// Groups or unary signs nested beyond the supported depth.
    #[error("expression nested deeper than {limit} levels")]
    NestingTooDeep {
        /// The deepest nesting accepted.
        limit: usize,
    },
    /// Input ended in the middle of a statement.
    #[error("unexpected end of input")]
    EndOfInput,
}
