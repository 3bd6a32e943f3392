use std::io::BufRead;

use tracing::debug;

use crate::{
    error::EvalResult,
    interpreter::{
        lexer::Token,
        parser::{binary::eval_additive, statement::eval_declaration},
        stream::TokenStream,
        variables::VariableTable,
    },
};

/// Evaluates a full expression.
///
/// This is the entry point for expression evaluation. It begins at the lowest
/// precedence level, addition and subtraction, and recursively descends
/// through the precedence hierarchy.
///
/// Grammar: `expression := additive`
pub fn eval_expression<R: BufRead>(tokens: &mut TokenStream<R>,
                                   variables: &VariableTable)
                                   -> EvalResult<f64> {
    eval_additive(tokens, variables, 0)
}

/// Evaluates a single statement.
///
/// A statement is either a declaration introduced by `let` or a plain
/// expression. The token that ends the statement, usually `=`, is left in
/// the stream.
///
/// Grammar:
/// ```text
///     statement := "let" declaration
///                | expression
/// ```
pub fn eval_statement<R: BufRead>(tokens: &mut TokenStream<R>,
                                  variables: &mut VariableTable)
                                  -> EvalResult<f64> {
    match tokens.get()? {
        Token::Let => eval_declaration(tokens, variables),
        token => {
            tokens.putback(token)?;
            eval_expression(tokens, variables)
        },
    }
}

/// Reads and evaluates the next statement, skipping empty ones.
///
/// Consecutive `=` tokens are no-ops. Returns `Ok(None)` when the stream
/// holds a quit token or runs out of input.
///
/// # Example
/// ```
/// use tally::interpreter::{
///     parser::core::next_statement, stream::TokenStream, variables::VariableTable,
/// };
///
/// let mut tokens = TokenStream::new("= = 1 + 2 = q 4 =".as_bytes());
/// let mut variables = VariableTable::new();
///
/// assert_eq!(next_statement(&mut tokens, &mut variables).unwrap(), Some(3.0));
/// assert_eq!(next_statement(&mut tokens, &mut variables).unwrap(), None);
/// ```
pub fn next_statement<R: BufRead>(tokens: &mut TokenStream<R>,
                                  variables: &mut VariableTable)
                                  -> EvalResult<Option<f64>> {
    let token = loop {
        match tokens.try_get()? {
            Some(Token::Print) => {},
            Some(Token::Quit) | None => return Ok(None),
            Some(token) => break token,
        }
    };

    tokens.putback(token)?;
    let value = eval_statement(tokens, variables)?;
    debug!(value, line = tokens.line(), "evaluated statement");
    Ok(Some(value))
}
