//! Subtree handler types.
//!
//! - [`SubtreeHandler`] - Trait the protocol layer calls for GET and GETNEXT
//! - [`ListHandler`] - Ordered OID list implementing [`SubtreeHandler`]
//! - [`ListItem`] - The value registered for one OID
//! - [`GetResult`] - Lookup result, with `NoSuchObject` for a miss
//!
//! # Overview
//!
//! A subagent registers subtrees with its master agent and answers the
//! requests the master forwards for them. Decoding those requests, and
//! dispatching each to the handler for its subtree, is the job of the
//! protocol layer; this module supplies the handler side.
//!
//! [`ListHandler`] covers the common case of a fixed set of scalar or
//! table-cell OIDs whose values change over time:
//!
//! ```rust
//! use agentx_oidlist::handler::{GetResult, ListHandler, SubtreeHandler};
//! use agentx_oidlist::{Value, oid};
//!
//! let mut list = ListHandler::new();
//! list.add("1.3.6.1.2.1.1.1.0")?.set("agentx test subagent");
//! list.add("1.3.6.1.2.1.1.3.0")?.set(Value::TimeTicks(0));
//!
//! // Later, between requests
//! if let Some(item) = list.item_mut(&oid!(1, 3, 6, 1, 2, 1, 1, 3, 0)) {
//!     item.set(Value::TimeTicks(4200));
//! }
//!
//! let handler: &dyn SubtreeHandler = &list;
//! let next = handler.get_next(
//!     &oid!(1, 3, 6, 1, 2, 1, 1, 1, 0),
//!     false,
//!     &oid!(1, 3, 6, 1, 2, 1, 2),
//! )?;
//! assert_eq!(next.value(), Some(&Value::TimeTicks(4200)));
//!
//! assert_eq!(
//!     handler.get(&oid!(1, 3, 6, 1, 2, 1, 1, 2, 0))?,
//!     GetResult::NoSuchObject
//! );
//! # Ok::<(), agentx_oidlist::Error>(())
//! ```

mod item;
mod list;
mod results;
mod traits;

pub use item::ListItem;
pub use list::{ListHandler, oid_within};
pub use results::GetResult;
pub use traits::SubtreeHandler;
