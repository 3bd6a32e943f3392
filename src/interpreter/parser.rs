/// Entry points: expressions and whole statements.
///
/// Provides the lowest-precedence level and the statement reader shared by
/// the interactive session and [`crate::evaluate`].
pub mod core;

/// Additive and multiplicative levels.
///
/// Left-associative folds over `+`/`-` and `*`/`/`/`%`, including the
/// division-by-zero checks.
pub mod binary;

/// Primary expressions.
///
/// Literals, variables, grouping, unary sign and the factorial postfix.
pub mod unary;

/// `let` declarations.
pub mod statement;
