//! # agentx-oidlist
//!
//! Ordered OID table for AgentX subagent subtree handlers.
//!
//! A subagent answers GET requests by exact OID and GETNEXT/GETBULK
//! requests by finding the next registered OID inside a search range, in
//! strict numeric OID order. [`ListHandler`] keeps registered OIDs in that
//! order and implements both lookups; everything protocol-facing (PDU
//! encoding, sessions with the master agent, transport) stays with the
//! caller.
//!
//! ## Quick Start
//!
//! ```rust
//! use agentx_oidlist::{ListHandler, Value, VariableType, oid};
//!
//! let mut list = ListHandler::new();
//! list.add("1.3.1")?.set(5);
//! list.add("1.3.10")?.set(7);
//!
//! let hit = list.get(&oid!(1, 3, 1))?;
//! assert_eq!(hit.variable_type(), VariableType::Integer);
//! assert_eq!(hit.value(), Some(&Value::Integer(5)));
//!
//! let next = list.get_next(&oid!(1, 3, 1), false, &oid!(1, 3, 99))?;
//! assert_eq!(next.oid(), Some(&oid!(1, 3, 10)));
//!
//! let miss = list.get(&oid!(1, 3, 2))?;
//! assert_eq!(miss.variable_type(), VariableType::NoSuchObject);
//! # Ok::<(), agentx_oidlist::Error>(())
//! ```
//!
//! ## Absence is not an error
//!
//! Lookups that find nothing return
//! [`GetResult::NoSuchObject`](handler::GetResult::NoSuchObject) inside
//! `Ok`. The only [`Error`] this crate produces is [`Error::InvalidOid`],
//! from parsing OID text.
//!
//! ## Tracing Integration
//!
//! The library uses the `tracing` crate for structured logging and never
//! installs a subscriber itself.
//!
//! | Level | What's Logged |
//! |-------|---------------|
//! | DEBUG | Re-registration of an already registered OID |
//! | TRACE | Registrations, GET and GETNEXT lookups |
//!
//! Fields use the `snmp.` prefix: `snmp.oid`, `snmp.from`, `snmp.to`,
//! `snmp.include_from`, `snmp.entries`.
//!
//! ```bash
//! RUST_LOG=agentx_oidlist=trace agentx-list --table table.json walk 1.3.6.1
//! ```
//!
//! ## Concurrency
//!
//! All operations are synchronous. Registration and in-place updates take
//! `&mut self`; callers sharing a list across threads wrap it in their own
//! lock.

pub mod error;
pub mod handler;
pub mod oid;
pub mod prelude;
pub mod value;
pub mod varbind;

#[cfg(feature = "cli")]
pub mod cli;

// Re-exports for convenience
pub use error::{Error, OidErrorKind, Result};
pub use handler::{GetResult, ListHandler, ListItem, SubtreeHandler};
pub use oid::Oid;
pub use value::{Value, VariableType};
pub use varbind::VarBind;
