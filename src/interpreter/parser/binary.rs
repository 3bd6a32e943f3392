use std::io::BufRead;

use crate::{
    error::{Division, EvalResult, RuntimeError},
    interpreter::{
        lexer::Token, parser::unary::eval_primary, stream::TokenStream, variables::VariableTable,
    },
};

/// Evaluates addition and subtraction.
///
/// Handles the left-associative binary operators `+` and `-`. The first token
/// that is neither is put back for the caller.
///
/// `depth` is the group nesting level, passed down to [`eval_primary`].
///
/// The rule is: `additive := multiplicative (("+" | "-") multiplicative)*`
pub fn eval_additive<R: BufRead>(tokens: &mut TokenStream<R>,
                                 variables: &VariableTable,
                                 depth: usize)
                                 -> EvalResult<f64> {
    let mut left = eval_multiplicative(tokens, variables, depth)?;
    while let Some(token) = tokens.try_get()? {
        match token {
            Token::Plus => left += eval_multiplicative(tokens, variables, depth)?,
            Token::Minus => left -= eval_multiplicative(tokens, variables, depth)?,
            token => {
                tokens.putback(token)?;
                break;
            },
        }
    }
    Ok(left)
}

/// Evaluates multiplication, division and remainder.
///
/// Handles the left-associative operators `*`, `/` and `%`. Remainder follows
/// `f64` semantics: the result takes the sign of the dividend.
///
/// The rule is: `multiplicative := primary (("*" | "/" | "%") primary)*`
///
/// # Errors
/// `RuntimeError::DivideByZero` when the divisor of `/` or `%` is exactly
/// zero.
pub fn eval_multiplicative<R: BufRead>(tokens: &mut TokenStream<R>,
                                       variables: &VariableTable,
                                       depth: usize)
                                       -> EvalResult<f64> {
    let mut left = eval_primary(tokens, variables, depth)?;
    while let Some(token) = tokens.try_get()? {
        match token {
            Token::Star => left *= eval_primary(tokens, variables, depth)?,
            Token::Slash => {
                let divisor = eval_primary(tokens, variables, depth)?;
                left /= nonzero(divisor, Division::Quotient)?;
            },
            Token::Percent => {
                let divisor = eval_primary(tokens, variables, depth)?;
                left %= nonzero(divisor, Division::Remainder)?;
            },
            token => {
                tokens.putback(token)?;
                break;
            },
        }
    }
    Ok(left)
}

fn nonzero(divisor: f64, op: Division) -> Result<f64, RuntimeError> {
    if divisor == 0.0 {
        return Err(RuntimeError::DivideByZero(op));
    }
    Ok(divisor)
}
