//! CLI utilities for agentx-oidlist.
//!
//! This module provides argument parsing, table file loading, lookup
//! queries and output formatting for the `agentx-list` tool, which loads a [`ListHandler`]
//! from a JSON file and runs lookups against it.
//!
//! This module is only available with the `cli` feature.
//!
//! [`ListHandler`]: crate::ListHandler

pub mod args;
pub mod output;
pub mod query;
pub mod table;
