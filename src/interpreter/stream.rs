use std::{collections::VecDeque, io::BufRead};

use logos::Logos;
use tracing::trace;

use crate::{
    error::{EvalResult, ParseError},
    interpreter::lexer::Token,
};

/// A lexed unit of input: a token, or the text of a malformed one.
type Lexeme = Result<Token, String>;

/// Supplies tokens to the evaluator, one at a time.
///
/// Input is read lazily from `reader` one line at a time, so an interactive
/// session only blocks when the evaluator actually needs another token. A
/// statement may span several lines.
///
/// The stream keeps a single pushback slot: the evaluator reads one token too
/// far to decide whether an operator continues the current production, and
/// gives it back with [`TokenStream::putback`] when it does not.
///
/// # Example
/// ```
/// use tally::interpreter::{lexer::Token, stream::TokenStream};
///
/// let mut tokens = TokenStream::new("let x".as_bytes());
/// assert_eq!(tokens.get().unwrap(), Token::Let);
///
/// let name = tokens.get().unwrap();
/// tokens.putback(name).unwrap();
/// assert_eq!(tokens.get().unwrap(), Token::Name("x".to_string()));
/// assert!(tokens.try_get().unwrap().is_none());
/// ```
pub struct TokenStream<R> {
    reader:  R,
    pending: VecDeque<Lexeme>,
    buffer:  Option<Token>,
    line:    usize,
}

impl<R: BufRead> TokenStream<R> {
    /// Creates a stream that reads from `reader` with an empty pushback slot.
    pub const fn new(reader: R) -> Self {
        Self { reader,
               pending: VecDeque::new(),
               buffer: None,
               line: 0 }
    }

    /// Returns the next token.
    ///
    /// A token waiting in the pushback slot is returned first. Otherwise the
    /// next lexeme is read from input.
    ///
    /// # Errors
    /// - `ParseError::BadToken` if the next lexeme is not a valid token. The
    ///   malformed text is consumed.
    /// - `ParseError::EndOfInput` if input is exhausted.
    /// - `Error::Io` if reading fails.
    pub fn get(&mut self) -> EvalResult<Token> {
        self.try_get()?.ok_or_else(|| ParseError::EndOfInput.into())
    }

    /// Like [`TokenStream::get`], but returns `Ok(None)` at end of input.
    ///
    /// Operator loops use this so the final statement of piped input
    /// evaluates even without a trailing `=`.
    pub fn try_get(&mut self) -> EvalResult<Option<Token>> {
        if let Some(token) = self.buffer.take() {
            return Ok(Some(token));
        }

        match self.next_lexeme()? {
            Some(Ok(token)) => {
                trace!(%token, line = self.line, "read token");
                Ok(Some(token))
            },
            Some(Err(token)) => Err(ParseError::BadToken { token }.into()),
            None => Ok(None),
        }
    }

    /// Puts a token back so the next read returns it again.
    ///
    /// # Errors
    /// Returns `ParseError::BufferFull` if a token is already waiting. The
    /// slot keeps its original token.
    pub fn putback(&mut self, token: Token) -> EvalResult<()> {
        if self.buffer.is_some() {
            return Err(ParseError::BufferFull.into());
        }
        self.buffer = Some(token);
        Ok(())
    }

    /// Gives back a token that made the current statement fail, if it is the
    /// statement terminator.
    ///
    /// Any other offending token is dropped. Keeping the `=` lets recovery
    /// stop at the end of the failed statement instead of the next one.
    pub fn restore_terminator(&mut self, token: Token) -> EvalResult<()> {
        if token == Token::Print {
            self.putback(token)?;
        }
        Ok(())
    }

    /// Discards input up to and including the next token of the same kind as
    /// `kind`.
    ///
    /// If the pushback slot holds such a token it is consumed and nothing
    /// else is read. Otherwise the slot is cleared and raw input is skipped,
    /// malformed text included, until a match is consumed or input ends.
    ///
    /// # Errors
    /// Only I/O failures are reported.
    pub fn ignore(&mut self, kind: &Token) -> EvalResult<()> {
        if let Some(token) = self.buffer.take()
           && token.same_kind(kind)
        {
            return Ok(());
        }

        while let Some(lexeme) = self.next_lexeme()? {
            if let Ok(token) = lexeme
               && token.same_kind(kind)
            {
                return Ok(());
            }
        }
        Ok(())
    }

    /// The number of input lines read so far.
    #[must_use]
    pub const fn line(&self) -> usize {
        self.line
    }

    fn next_lexeme(&mut self) -> EvalResult<Option<Lexeme>> {
        loop {
            if let Some(lexeme) = self.pending.pop_front() {
                return Ok(Some(lexeme));
            }
            if !self.read_line()? {
                return Ok(None);
            }
        }
    }

    /// Lexes the next input line into `pending`. Returns `false` at end of
    /// input.
    ///
    /// Bytes that are not valid UTF-8 decode to U+FFFD, which the lexer
    /// rejects, so they surface as `BadToken` rather than an I/O error.
    fn read_line(&mut self) -> EvalResult<bool> {
        let mut bytes = Vec::new();
        if self.reader.read_until(b'\n', &mut bytes)? == 0 {
            return Ok(false);
        }
        self.line += 1;

        let text = String::from_utf8_lossy(&bytes);
        let mut lexer = Token::lexer(&text);
        while let Some(result) = lexer.next() {
            self.pending
                .push_back(result.map_err(|()| lexer.slice().to_string()));
        }
        Ok(true)
    }
}
