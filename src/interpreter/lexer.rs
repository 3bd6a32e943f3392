use std::fmt;

use logos::Logos;

/// Represents a lexical token in the calculator input.
///
/// Every operator and delimiter is its own variant; numbers and names carry
/// their payload. Whitespace, newlines included, only separates tokens.
#[derive(Logos, Debug, PartialEq, Clone)]
pub enum Token {
    /// Numeric literal tokens, such as `3`, `3.14`, `1.`, `.5` or `2.1e-10`.
    ///
    /// An exponent needs digits: `2e` is the number `2` followed by the name
    /// `e`.
    #[regex(r"[0-9]+(\.[0-9]*)?([eE][+-]?[0-9]+)?", parse_number)]
    #[regex(r"\.[0-9]+([eE][+-]?[0-9]+)?", parse_number)]
    Number(f64),
    /// `let`
    #[token("let")]
    Let,
    /// `q`
    #[token("q", priority = 5)]
    Quit,
    /// Variable names such as `x` or `rate2`.
    #[regex(r"[a-zA-Z][a-zA-Z0-9]*", |lex| lex.slice().to_string())]
    Name(String),
    /// `=`, which prints the value of the statement before it.
    #[token("=")]
    Print,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `%`
    #[token("%")]
    Percent,
    /// `!`
    #[token("!")]
    Bang,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `{`
    #[token("{")]
    LBrace,
    /// `}`
    #[token("}")]
    RBrace,

    /// Spaces, tabs, carriage returns and newlines.
    #[regex(r"[ \t\r\n\f]+", logos::skip)]
    Ignored,
}

impl Token {
    /// Returns `true` if both tokens are the same variant, ignoring payloads.
    ///
    /// # Example
    /// ```
    /// use tally::interpreter::lexer::Token;
    ///
    /// assert!(Token::Number(1.0).same_kind(&Token::Number(2.0)));
    /// assert!(!Token::Print.same_kind(&Token::Quit));
    /// ```
    #[must_use]
    pub fn same_kind(&self, other: &Self) -> bool {
        std::mem::discriminant(self) == std::mem::discriminant(other)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(value) => write!(f, "{value}"),
            Self::Name(name) => write!(f, "{name}"),
            Self::Let => write!(f, "let"),
            Self::Quit => write!(f, "q"),
            Self::Print => write!(f, "="),
            Self::Plus => write!(f, "+"),
            Self::Minus => write!(f, "-"),
            Self::Star => write!(f, "*"),
            Self::Slash => write!(f, "/"),
            Self::Percent => write!(f, "%"),
            Self::Bang => write!(f, "!"),
            Self::LParen => write!(f, "("),
            Self::RParen => write!(f, ")"),
            Self::LBrace => write!(f, "{{"),
            Self::RBrace => write!(f, "}}"),
            Self::Ignored => Ok(()),
        }
    }
}

/// Parses a floating-point literal from the current token slice.
///
/// Returns `None`, which logos reports as a lexing error, if the slice is not
/// a valid `f64`.
fn parse_number(lex: &logos::Lexer<Token>) -> Option<f64> {
    lex.slice().parse().ok()
}
