use std::io::BufRead;

use crate::{
    error::{EvalResult, ParseError, RuntimeError},
    interpreter::{
        lexer::Token, parser::binary::eval_additive, stream::TokenStream,
        variables::VariableTable,
    },
};

/// Largest operand whose factorial is finite as an `f64`.
pub const MAX_FACTORIAL_OPERAND: f64 = 170.0;

/// Deepest allowed nesting of groups and unary signs.
pub const MAX_NESTING: usize = 256;

/// Evaluates a primary expression.
///
/// Primary expressions bind tightest and include:
/// - numeric literals
/// - variables
/// - parenthesized and braced expressions
/// - unary `-` and `+`
/// - any of the above, except a signed primary, followed by `!`
///
/// Unary signs recurse into another primary, so `-3!` is `-(3!)`.
///
/// Grammar:
/// ```text
///     primary := number postfix
///              | name postfix
///              | "(" expression ")" postfix
///              | "{" expression "}" postfix
///              | "-" primary
///              | "+" primary
///     postfix := "!"*
/// ```
///
/// `depth` counts the groups and signs enclosing this primary.
///
/// # Errors
/// - `ParseError::NestingTooDeep` past [`MAX_NESTING`] levels.
/// - `ParseError::UnexpectedToken` if the token cannot start a primary.
/// - `ParseError::MismatchedDelimiter` if a group is not closed.
/// - `RuntimeError::UndefinedVariable` for unknown names.
/// - Factorial errors from [`factorial`].
pub fn eval_primary<R: BufRead>(tokens: &mut TokenStream<R>,
                                variables: &VariableTable,
                                depth: usize)
                                -> EvalResult<f64> {
    if depth > MAX_NESTING {
        return Err(ParseError::NestingTooDeep { limit: MAX_NESTING }.into());
    }

    match tokens.get()? {
        Token::Number(value) => eval_postfix(tokens, value),
        Token::Name(name) => {
            let value = variables.get_value(&name)?;
            eval_postfix(tokens, value)
        },
        Token::LParen => {
            let value = eval_group(tokens, variables, depth + 1, &Token::RParen, ')')?;
            eval_postfix(tokens, value)
        },
        Token::LBrace => {
            let value = eval_group(tokens, variables, depth + 1, &Token::RBrace, '}')?;
            eval_postfix(tokens, value)
        },
        Token::Minus => Ok(-eval_primary(tokens, variables, depth + 1)?),
        Token::Plus => eval_primary(tokens, variables, depth + 1),
        token => {
            tokens.restore_terminator(token)?;
            Err(ParseError::UnexpectedToken { expected: "primary expected" }.into())
        },
    }
}

/// Evaluates the expression inside a group and consumes its closer.
fn eval_group<R: BufRead>(tokens: &mut TokenStream<R>,
                          variables: &VariableTable,
                          depth: usize,
                          closer: &Token,
                          expected: char)
                          -> EvalResult<f64> {
    let value = eval_additive(tokens, variables, depth)?;
    match tokens.try_get()? {
        Some(token) if token == *closer => Ok(value),
        Some(token) => {
            tokens.restore_terminator(token)?;
            Err(ParseError::MismatchedDelimiter { expected }.into())
        },
        None => Err(ParseError::MismatchedDelimiter { expected }.into()),
    }
}

/// Applies every `!` that follows a value; `3!!` is `(3!)!`.
fn eval_postfix<R: BufRead>(tokens: &mut TokenStream<R>, mut value: f64) -> EvalResult<f64> {
    while let Some(token) = tokens.try_get()? {
        if token != Token::Bang {
            tokens.putback(token)?;
            break;
        }
        value = factorial(value)?;
    }
    Ok(value)
}

/// Computes `value!` for a non-negative integral `value`.
///
/// `0!` and `1!` are both `1`. The product is accumulated iteratively in
/// `f64`.
///
/// # Errors
/// - `RuntimeError::NegativeFactorial` if `value < 0`.
/// - `RuntimeError::FactorialOverflow` if `value` exceeds
///   [`MAX_FACTORIAL_OPERAND`], including infinity.
/// - `RuntimeError::FractionalFactorial` if `value` has a fractional part or
///   is NaN.
///
/// # Example
/// ```
/// use tally::{error::RuntimeError, interpreter::parser::unary::factorial};
///
/// assert_eq!(factorial(0.0), Ok(1.0));
/// assert_eq!(factorial(5.0), Ok(120.0));
/// assert!(matches!(factorial(-1.0), Err(RuntimeError::NegativeFactorial { .. })));
/// assert!(matches!(factorial(2.5), Err(RuntimeError::FractionalFactorial { .. })));
/// ```
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
pub fn factorial(value: f64) -> Result<f64, RuntimeError> {
    if value < 0.0 {
        return Err(RuntimeError::NegativeFactorial { value });
    }
    if value > MAX_FACTORIAL_OPERAND {
        return Err(RuntimeError::FactorialOverflow { value });
    }
    if value.is_nan() || value.fract() != 0.0 {
        return Err(RuntimeError::FractionalFactorial { value });
    }

    let n = value as u64;
    Ok((2..=n).fold(1.0, |product, k| product * k as f64))
}
