use std::io::BufRead;

use tracing::debug;

use crate::{
    error::{EvalResult, ParseError},
    interpreter::{
        lexer::Token, parser::core::eval_expression, stream::TokenStream, variables::VariableTable,
    },
};

/// Evaluates a variable declaration whose `let` has already been consumed.
///
/// The value of the initializer is bound to the new name and returned.
///
/// Grammar: `declaration := name "=" expression`
///
/// # Errors
/// - `ParseError::UnexpectedToken` if no name follows `let`.
/// - `ParseError::MissingToken` if the name is not followed by `=`.
/// - `RuntimeError::DuplicateDeclaration` if the name is already declared.
pub fn eval_declaration<R: BufRead>(tokens: &mut TokenStream<R>,
                                    variables: &mut VariableTable)
                                    -> EvalResult<f64> {
    let name = match tokens.get()? {
        Token::Name(name) => name,
        _ => {
            return Err(ParseError::UnexpectedToken { expected: "name expected in declaration" }.into());
        },
    };

    if tokens.get()? != Token::Print {
        return Err(ParseError::MissingToken { expected: '=',
                                              name }.into());
    }

    let value = eval_expression(tokens, variables)?;
    variables.define(&name, value)?;
    debug!(%name, value, "declared variable");
    Ok(value)
}
