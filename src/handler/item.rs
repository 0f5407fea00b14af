//! Registered list entries.

use crate::value::{Value, VariableType};

/// The payload registered for one OID.
///
/// A fresh item holds `NULL`. The caller fills it in after
/// [`ListHandler::add`](super::ListHandler::add) and may change it between
/// queries; lookups always report the current value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListItem {
    value: Value,
}

impl ListItem {
    /// Create an item holding `value`.
    pub fn new(value: Value) -> Self {
        Self { value }
    }

    /// The current value.
    pub fn value(&self) -> &Value {
        &self.value
    }

    /// The type tag of the current value.
    pub fn variable_type(&self) -> VariableType {
        self.value.variable_type()
    }

    /// Replace the value, returning the previous one.
    pub fn set(&mut self, value: impl Into<Value>) -> Value {
        std::mem::replace(&mut self.value, value.into())
    }

    /// Mutable access to the value.
    pub fn value_mut(&mut self) -> &mut Value {
        &mut self.value
    }
}
