use std::collections::BTreeMap;

use crate::{
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::matrix::Matrix},
};

/// Maps matrix names to their current values.
///
/// There is a single flat namespace per run. Defining a name that is already
/// bound replaces the old value; there is no separate "redefinition" error.
/// The shape of each binding travels inside its [`Matrix`].
///
/// ## Example
/// ```
/// use matrixlang::interpreter::{evaluator::environment::Environment, value::matrix::Matrix};
///
/// let mut env = Environment::new();
/// env.define("I", Matrix::identity(2));
///
/// assert_eq!(env.get("I", 1).unwrap().shape().rows, 2);
/// assert!(env.get("J", 1).is_err());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Environment {
    bindings: BTreeMap<String, Matrix>,
}

impl Environment {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds `name` to `value`, replacing any previous binding.
    pub fn define(&mut self, name: &str, value: Matrix) {
        if let Some(slot) = self.bindings.get_mut(name) {
            *slot = value;
        } else {
            self.bindings.insert(name.to_string(), value);
        }
    }

    /// Looks up the matrix bound to `name`.
    ///
    /// # Errors
    /// Returns `RuntimeError::UnknownVariable` when `name` has no binding.
    pub fn get(&self, name: &str, line: usize) -> EvalResult<&Matrix> {
        self.bindings
            .get(name)
            .ok_or_else(|| RuntimeError::UnknownVariable { name: name.to_string(),
                                                           line })
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.bindings.contains_key(name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Iterates over all bindings in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Matrix)> {
        self.bindings.iter().map(|(name, value)| (name.as_str(), value))
    }
}
