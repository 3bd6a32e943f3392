/// The lexer module tokenizes source text.
///
/// Defines the [`lexer::Token`] enum and the `logos` rules that turn a line of
/// input into numbers, names, keywords and operator tokens.
pub mod lexer;
/// The parser module parses and evaluates in a single pass.
///
/// Each grammar level (primary, term, expression, statement) is a function
/// that reads tokens from a [`stream::TokenStream`] and returns the computed
/// value directly, without building a syntax tree.
///
/// # Responsibilities
/// - Implements operator precedence and left associativity.
/// - Binds and resolves variables through [`variables::VariableTable`].
/// - Reports grammar and evaluation errors without consuming the statement
///   terminator that recovery relies on.
pub mod parser;
/// Token stream with single-token pushback.
///
/// Pulls input lazily one line at a time, lexes it, and hands tokens to the
/// parser. Also implements the skip-to-terminator operation used for error
/// recovery.
pub mod stream;
/// The variable table.
///
/// Stores declared variables in declaration order and enforces that each
/// name is declared once.
pub mod variables;
