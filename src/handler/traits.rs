//! SubtreeHandler trait.

use crate::error::Result;
use crate::oid::Oid;

use super::GetResult;

/// Answers lookups for one registered subtree.
///
/// This is the seam between the protocol layer (PDU decoding, session
/// handling, dispatch across subtrees) and the data it serves. The protocol
/// layer picks the handler for a request, calls it, and encodes the result.
///
/// # GET
///
/// [`get`](SubtreeHandler::get) returns the value for an exact OID, or
/// [`GetResult::NoSuchObject`] when nothing is registered there.
///
/// # GETNEXT and search ranges
///
/// [`get_next`](SubtreeHandler::get_next) receives a search range as sent by
/// an AgentX master agent (RFC 2741 Section 5.2): a start OID, whether the
/// start itself may be returned, and an exclusive end OID (usually the end of
/// the subtree being served). It must return the smallest registered OID in
/// that range, ordering OIDs arc-by-arc as unsigned integers: `1.3.6.1.2` <
/// `1.3.6.1.2.1` < `1.3.6.1.10`.
///
/// # Errors
///
/// A miss is never an error. The `Result` lets implementations backed by
/// fallible sources report failures; [`ListHandler`](super::ListHandler)
/// never returns `Err`.
///
/// # Example
///
/// ```rust
/// use agentx_oidlist::handler::{GetResult, SubtreeHandler};
/// use agentx_oidlist::{Oid, Result, Value, VarBind, oid};
///
/// struct SysUpTime {
///     ticks: u32,
/// }
///
/// impl SubtreeHandler for SysUpTime {
///     fn get(&self, oid: &Oid) -> Result<GetResult> {
///         if oid == &oid!(1, 3, 6, 1, 2, 1, 1, 3, 0) {
///             return Ok(VarBind::new(oid.clone(), Value::TimeTicks(self.ticks)).into());
///         }
///         Ok(GetResult::NoSuchObject)
///     }
///
///     fn get_next(&self, from: &Oid, include_from: bool, to: &Oid) -> Result<GetResult> {
///         let mine = oid!(1, 3, 6, 1, 2, 1, 1, 3, 0);
///         if agentx_oidlist::handler::oid_within(&mine, from, include_from, to) {
///             return self.get(&mine);
///         }
///         Ok(GetResult::NoSuchObject)
///     }
/// }
///
/// let handler = SysUpTime { ticks: 100 };
/// let next = handler.get_next(&oid!(1, 3, 6, 1, 2, 1, 1), false, &oid!(1, 3, 6, 1, 2, 1, 2)).unwrap();
/// assert_eq!(next.oid(), Some(&oid!(1, 3, 6, 1, 2, 1, 1, 3, 0)));
/// ```
pub trait SubtreeHandler {
    /// Exact-match lookup.
    fn get(&self, oid: &Oid) -> Result<GetResult>;

    /// Smallest registered OID `k` with `from < k < to`, or `from <= k < to`
    /// when `include_from` is set.
    fn get_next(&self, from: &Oid, include_from: bool, to: &Oid) -> Result<GetResult>;
}
