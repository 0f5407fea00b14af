//! Result type for subtree lookups.

use crate::oid::Oid;
use crate::value::{Value, VariableType};
use crate::varbind::VarBind;

/// Result of a GET or GETNEXT lookup.
///
/// Absence is a normal outcome, not an error: a miss is reported as
/// `NoSuchObject` and the protocol layer encodes it as the
/// `noSuchObject` exception type with no value. Other exception types
/// (`noSuchInstance`, `endOfMibView`) are the protocol layer's to produce.
#[derive(Debug, Clone, PartialEq)]
pub enum GetResult {
    /// The OID is registered; carries the OID echoed back and its current value.
    Value(VarBind),
    /// No registered OID matched.
    NoSuchObject,
}

impl GetResult {
    /// Create a `GetResult` from an `Option<VarBind>`.
    ///
    /// `None` is treated as `NoSuchObject`.
    pub fn from_option(value: Option<VarBind>) -> Self {
        match value {
            Some(vb) => GetResult::Value(vb),
            None => GetResult::NoSuchObject,
        }
    }

    /// The type tag to report: the value's type, or
    /// [`VariableType::NoSuchObject`] on a miss.
    pub fn variable_type(&self) -> VariableType {
        match self {
            GetResult::Value(vb) => vb.variable_type(),
            GetResult::NoSuchObject => VariableType::NoSuchObject,
        }
    }

    /// The matched OID, if any.
    pub fn oid(&self) -> Option<&Oid> {
        match self {
            GetResult::Value(vb) => Some(&vb.oid),
            GetResult::NoSuchObject => None,
        }
    }

    /// The matched value, if any.
    pub fn value(&self) -> Option<&Value> {
        match self {
            GetResult::Value(vb) => Some(&vb.value),
            GetResult::NoSuchObject => None,
        }
    }

    /// Returns `true` if this is a value result.
    pub fn is_value(&self) -> bool {
        matches!(self, GetResult::Value(_))
    }

    /// Returns `true` if nothing matched.
    pub fn is_no_such_object(&self) -> bool {
        matches!(self, GetResult::NoSuchObject)
    }

    /// Converts to an `Option<VarBind>`.
    pub fn into_option(self) -> Option<VarBind> {
        match self {
            GetResult::Value(vb) => Some(vb),
            GetResult::NoSuchObject => None,
        }
    }
}

impl From<VarBind> for GetResult {
    fn from(vb: VarBind) -> Self {
        GetResult::Value(vb)
    }
}

impl From<Option<VarBind>> for GetResult {
    fn from(value: Option<VarBind>) -> Self {
        GetResult::from_option(value)
    }
}
