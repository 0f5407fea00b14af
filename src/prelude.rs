//! Prelude module for convenient imports.
//!
//! ```rust
//! use agentx_oidlist::prelude::*;
//! ```
//!
//! This imports:
//! - Core types: [`ListHandler`], [`Oid`], [`Value`], [`VariableType`], [`VarBind`]
//! - Lookup results and the handler trait: [`GetResult`], [`SubtreeHandler`]
//! - Error handling: [`Error`], [`Result`]
//! - The [`oid!`] macro for compile-time OID construction

pub use crate::error::{Error, Result};
pub use crate::handler::{GetResult, ListHandler, SubtreeHandler};
pub use crate::oid::Oid;
pub use crate::value::{Value, VariableType};
pub use crate::varbind::VarBind;

#[doc(no_inline)]
pub use crate::oid;
