use crate::error::RuntimeError;

/// Constants declared at the start of every session that asks for them.
#[allow(clippy::approx_constant)]
pub const PREDEFINED: [(&str, f64); 2] = [("pi", 3.141_592_653_5), ("e", 2.718_281_828_4)];

/// A named value.
#[derive(Debug, Clone, PartialEq)]
pub struct Variable {
    /// The name, unique within its table.
    pub name:  String,
    /// The current value.
    pub value: f64,
}

/// Declared variables, in declaration order.
///
/// Lookups are linear; an interactive session only ever holds a handful of
/// names.
#[derive(Debug, Clone, Default)]
pub struct VariableTable {
    variables: Vec<Variable>,
}

impl VariableTable {
    /// Creates an empty table.
    #[must_use]
    pub const fn new() -> Self {
        Self { variables: Vec::new() }
    }

    /// Creates a table holding the [`PREDEFINED`] constants.
    ///
    /// # Example
    /// ```
    /// use tally::interpreter::variables::VariableTable;
    ///
    /// let table = VariableTable::with_constants();
    /// assert_eq!(table.get_value("pi").unwrap(), 3.1415926535);
    /// assert_eq!(table.get_value("e").unwrap(), 2.7182818284);
    /// ```
    #[must_use]
    pub fn with_constants() -> Self {
        let variables = PREDEFINED.iter()
                                  .map(|&(name, value)| Variable { name: name.to_string(),
                                                                   value })
                                  .collect();
        Self { variables }
    }

    /// Returns the value bound to `name`.
    ///
    /// # Errors
    /// `RuntimeError::UndefinedVariable` if `name` was never declared.
    pub fn get_value(&self, name: &str) -> Result<f64, RuntimeError> {
        self.find(name)
            .map(|variable| variable.value)
            .ok_or_else(|| RuntimeError::UndefinedVariable { name: name.to_string() })
    }

    /// Rebinds an existing variable. Never declares a new one.
    ///
    /// # Errors
    /// `RuntimeError::UndefinedVariable` if `name` was never declared.
    pub fn set_value(&mut self, name: &str, value: f64) -> Result<(), RuntimeError> {
        let variable =
            self.variables
                .iter_mut()
                .find(|variable| variable.name == name)
                .ok_or_else(|| RuntimeError::UndefinedVariable { name: name.to_string() })?;
        variable.value = value;
        Ok(())
    }

    /// Returns `true` if `name` has been declared.
    #[must_use]
    pub fn is_declared(&self, name: &str) -> bool {
        self.find(name).is_some()
    }

    /// Declares `name` with an initial `value` and returns that value.
    ///
    /// # Errors
    /// `RuntimeError::DuplicateDeclaration` if `name` is already declared; the
    /// existing binding is left untouched.
    ///
    /// # Example
    /// ```
    /// use tally::{error::RuntimeError, interpreter::variables::VariableTable};
    ///
    /// let mut table = VariableTable::new();
    /// assert_eq!(table.define("x", 2.0), Ok(2.0));
    /// assert!(matches!(table.define("x", 3.0),
    ///                  Err(RuntimeError::DuplicateDeclaration { .. })));
    /// assert_eq!(table.get_value("x"), Ok(2.0));
    /// ```
    pub fn define(&mut self, name: &str, value: f64) -> Result<f64, RuntimeError> {
        if self.is_declared(name) {
            return Err(RuntimeError::DuplicateDeclaration { name: name.to_string() });
        }
        self.variables.push(Variable { name: name.to_string(),
                                       value });
        Ok(value)
    }

    /// Iterates over the variables in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &Variable> {
        self.variables.iter()
    }

    /// The number of declared variables.
    #[must_use]
    pub fn len(&self) -> usize {
        self.variables.len()
    }

    /// Returns `true` if nothing has been declared.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }

    fn find(&self, name: &str) -> Option<&Variable> {
        self.variables.iter().find(|variable| variable.name == name)
    }
}
