//! Ordered OID list for serving a subtree.

use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::collections::btree_map::Entry;
use std::ops::Bound;

use crate::error::Result;
use crate::oid::Oid;
use crate::value::Value;
use crate::varbind::VarBind;

use super::{GetResult, ListItem, SubtreeHandler};

/// A fixed list of OIDs with default GET and GETNEXT behaviour.
///
/// Entries are kept in numeric OID order, so the successor search stops at
/// the first key inside the requested range. Keys are unique: registering
/// an OID again replaces its item with a fresh one.
///
/// # Example
///
/// ```rust
/// use agentx_oidlist::handler::ListHandler;
/// use agentx_oidlist::{Value, oid};
///
/// let mut list = ListHandler::new();
/// list.add("1.3.6.1.4.1.99999.1")?.set(5);
/// list.add("1.3.6.1.4.1.99999.10")?.set(7);
///
/// let hit = list.get(&oid!(1, 3, 6, 1, 4, 1, 99999, 1))?;
/// assert_eq!(hit.value(), Some(&Value::Integer(5)));
///
/// // .10 follows .1 numerically even though "10" < "2" as text
/// let next = list.get_next(
///     &oid!(1, 3, 6, 1, 4, 1, 99999, 1),
///     false,
///     &oid!(1, 3, 6, 1, 4, 1, 99999, 99),
/// )?;
/// assert_eq!(next.oid(), Some(&oid!(1, 3, 6, 1, 4, 1, 99999, 10)));
/// # Ok::<(), agentx_oidlist::Error>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct ListHandler {
    items: BTreeMap<Oid, ListItem>,
}

impl ListHandler {
    /// Create an empty list.
    pub fn new() -> Self {
        Self {
            items: BTreeMap::new(),
        }
    }

    /// Create a list pre-populated with `(oid, value)` pairs.
    ///
    /// Later pairs win over earlier ones with the same OID.
    pub fn with_entries<I, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (Oid, V)>,
        V: Into<Value>,
    {
        let mut list = Self::new();
        for (oid, value) in entries {
            list.insert(oid).set(value);
        }
        list
    }

    /// Parse `oid` and register a fresh item for it.
    ///
    /// Returns the new item for the caller to fill in. Fails only if `oid` is
    /// not valid dotted notation.
    pub fn add(&mut self, oid: &str) -> Result<&mut ListItem> {
        let oid = Oid::parse(oid)?;
        Ok(self.insert(oid))
    }

    /// Register a fresh item for `oid` and return it.
    ///
    /// If `oid` is already registered, its item is replaced.
    pub fn insert(&mut self, oid: Oid) -> &mut ListItem {
        match self.items.entry(oid) {
            Entry::Occupied(entry) => {
                tracing::debug!(snmp.oid = %entry.key(), "replacing registered list item");
                let item = entry.into_mut();
                *item = ListItem::default();
                item
            }
            Entry::Vacant(entry) => {
                tracing::trace!(snmp.oid = %entry.key(), "registering list item");
                entry.insert(ListItem::default())
            }
        }
    }

    /// Exact lookup.
    ///
    /// Returns the OID with its item's current value, or
    /// [`GetResult::NoSuchObject`] if nothing is registered there. Never
    /// returns `Err`.
    pub fn get(&self, oid: &Oid) -> Result<GetResult> {
        let result = match self.items.get(oid) {
            Some(item) => GetResult::Value(VarBind::new(oid.clone(), item.value().clone())),
            None => GetResult::NoSuchObject,
        };
        tracing::trace!(snmp.oid = %oid, found = result.is_value(), "list get");
        Ok(result)
    }

    /// Successor search within a range.
    ///
    /// Returns the smallest registered OID `k` with `from < k < to`, or
    /// `from <= k < to` when `include_from` is set. The upper bound is always
    /// exclusive, so `from >= to` never matches. Returns
    /// [`GetResult::NoSuchObject`] when the range holds no entry. Never
    /// returns `Err`.
    pub fn get_next(&self, from: &Oid, include_from: bool, to: &Oid) -> Result<GetResult> {
        tracing::trace!(
            snmp.from = %from,
            snmp.to = %to,
            snmp.include_from = include_from,
            snmp.entries = self.items.len(),
            "list get_next"
        );

        // BTreeMap::range panics on an inverted range
        if from >= to {
            return Ok(GetResult::NoSuchObject);
        }

        let lower = if include_from {
            Bound::Included(from)
        } else {
            Bound::Excluded(from)
        };

        match self
            .items
            .range::<Oid, _>((lower, Bound::Excluded(to)))
            .next()
        {
            Some((oid, _)) => self.get(oid),
            None => Ok(GetResult::NoSuchObject),
        }
    }

    /// Get the number of registered OIDs.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Check if `oid` is registered.
    pub fn contains(&self, oid: &Oid) -> bool {
        self.items.contains_key(oid)
    }

    /// The item registered for `oid`.
    pub fn item(&self, oid: &Oid) -> Option<&ListItem> {
        self.items.get(oid)
    }

    /// Mutable access to the item registered for `oid`.
    ///
    /// Use this to update a value between queries.
    pub fn item_mut(&mut self, oid: &Oid) -> Option<&mut ListItem> {
        self.items.get_mut(oid)
    }

    /// Iterate over registered OIDs and items in ascending OID order.
    pub fn iter(&self) -> impl Iterator<Item = (&Oid, &ListItem)> {
        self.items.iter()
    }

    /// Iterate over registered OIDs in ascending OID order.
    pub fn oids(&self) -> impl Iterator<Item = &Oid> {
        self.items.keys()
    }
}

impl SubtreeHandler for ListHandler {
    fn get(&self, oid: &Oid) -> Result<GetResult> {
        ListHandler::get(self, oid)
    }

    fn get_next(&self, from: &Oid, include_from: bool, to: &Oid) -> Result<GetResult> {
        ListHandler::get_next(self, from, include_from, to)
    }
}

impl<V: Into<Value>> FromIterator<(Oid, V)> for ListHandler {
    fn from_iter<I: IntoIterator<Item = (Oid, V)>>(iter: I) -> Self {
        Self::with_entries(iter)
    }
}

/// Check whether `oid` lies in the search range `(from, to)`.
///
/// The lower bound is inclusive when `include_from` is set; the upper bound
/// is always exclusive.
pub fn oid_within(oid: &Oid, from: &Oid, include_from: bool, to: &Oid) -> bool {
    let above_from = match from.cmp(oid) {
        Ordering::Less => true,
        Ordering::Equal => include_from,
        Ordering::Greater => false,
    };
    above_from && to.cmp(oid) == Ordering::Greater
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::oid;
    use crate::value::VariableType;

    fn scenario() -> ListHandler {
        let mut list = ListHandler::new();
        list.add("1.3.1").unwrap().set(5);
        list.add("1.3.10").unwrap().set(7);
        list
    }

    #[test]
    fn test_add_keeps_numeric_order() {
        let mut list = ListHandler::new();
        list.add("1.2.10").unwrap();
        list.add("1.2.9").unwrap();

        let order: Vec<String> = list.oids().map(|o| o.to_string()).collect();
        assert_eq!(order, ["1.2.9", "1.2.10"]);
    }

    #[test]
    fn test_add_order_after_each_insert() {
        let mut list = ListHandler::new();
        let mut expected: Vec<Oid> = Vec::new();
        for s in ["1.3.6.1.10", "1.3.6.1.2", "1.3.6", "1.3.6.1.2.1", "1.3.7", "1.3.6.1"] {
            list.add(s).unwrap();
            expected.push(Oid::parse(s).unwrap());
            expected.sort();
            assert_eq!(list.oids().cloned().collect::<Vec<_>>(), expected);
        }
    }

    #[test]
    fn test_add_invalid_oid() {
        let mut list = ListHandler::new();
        assert!(list.add("1.3.x").is_err());
        assert!(list.add("").is_err());
        assert!(list.is_empty());
    }

    #[test]
    fn test_add_returns_fresh_null_item() {
        let mut list = ListHandler::new();
        let item = list.add("1.3.6.1").unwrap();
        assert_eq!(item.value(), &Value::Null);
    }

    #[test]
    fn test_duplicate_add_last_wins() {
        let mut list = ListHandler::new();
        list.add("1.3.6.1.1").unwrap().set(50);
        let item = list.add("1.3.6.1.1").unwrap();
        assert_eq!(item.value(), &Value::Null);
        item.set(100);

        assert_eq!(list.len(), 1);
        assert_eq!(
            list.get(&oid!(1, 3, 6, 1, 1)).unwrap().value(),
            Some(&Value::Integer(100))
        );
    }

    #[test]
    fn test_get_scenario() {
        let list = scenario();
        let result = list.get(&oid!(1, 3, 1)).unwrap();
        assert_eq!(
            result,
            GetResult::Value(VarBind::new(oid!(1, 3, 1), Value::Integer(5)))
        );
        assert_eq!(result.variable_type(), VariableType::Integer);
    }

    #[test]
    fn test_get_missing_is_no_such_object() {
        let list = scenario();
        let result = list.get(&oid!(1, 3, 2)).unwrap();
        assert!(result.is_no_such_object());
        assert_eq!(result.variable_type(), VariableType::NoSuchObject);
        assert_eq!(result.oid(), None);
    }

    #[test]
    fn test_get_on_empty_list() {
        let list = ListHandler::new();
        assert!(list.get(&oid!(1, 3, 6, 1)).unwrap().is_no_such_object());
    }

    #[test]
    fn test_get_reflects_later_mutation() {
        let mut list = scenario();
        list.item_mut(&oid!(1, 3, 1)).unwrap().set(Value::Gauge32(9));
        assert_eq!(
            list.get(&oid!(1, 3, 1)).unwrap().value(),
            Some(&Value::Gauge32(9))
        );
    }

    #[test]
    fn test_get_next_scenario() {
        let list = scenario();
        let result = list
            .get_next(&oid!(1, 3, 1), false, &oid!(1, 3, 99))
            .unwrap();
        assert_eq!(
            result,
            GetResult::Value(VarBind::new(oid!(1, 3, 10), Value::Integer(7)))
        );
    }

    #[test]
    fn test_get_next_include_from() {
        let list = scenario();
        let result = list.get_next(&oid!(1, 3, 1), true, &oid!(1, 3, 99)).unwrap();
        assert_eq!(result.oid(), Some(&oid!(1, 3, 1)));

        let result = list
            .get_next(&oid!(1, 3, 1), false, &oid!(1, 3, 99))
            .unwrap();
        assert_eq!(result.oid(), Some(&oid!(1, 3, 10)));
    }

    #[test]
    fn test_get_next_include_from_unregistered() {
        let list = scenario();
        let result = list.get_next(&oid!(1, 3, 2), true, &oid!(1, 3, 99)).unwrap();
        assert_eq!(result.oid(), Some(&oid!(1, 3, 10)));
    }

    #[test]
    fn test_get_next_upper_bound_exclusive() {
        let list = scenario();
        let result = list
            .get_next(&oid!(1, 3, 1), false, &oid!(1, 3, 10))
            .unwrap();
        assert!(result.is_no_such_object());

        let result = list.get_next(&oid!(1, 3, 1), true, &oid!(1, 3, 10)).unwrap();
        assert_eq!(result.oid(), Some(&oid!(1, 3, 1)));
    }

    #[test]
    fn test_get_next_from_equals_to() {
        let list = scenario();
        for include_from in [false, true] {
            for bound in [oid!(1, 3, 1), oid!(1, 3, 10), oid!(1, 3, 5)] {
                let result = list.get_next(&bound, include_from, &bound).unwrap();
                assert!(result.is_no_such_object(), "{bound} include={include_from}");
            }
        }
    }

    #[test]
    fn test_get_next_inverted_range() {
        let list = scenario();
        let result = list.get_next(&oid!(1, 3, 99), true, &oid!(1, 3, 0)).unwrap();
        assert!(result.is_no_such_object());
    }

    #[test]
    fn test_get_next_before_first_and_after_last() {
        let list = scenario();
        let result = list.get_next(&oid!(1), false, &oid!(2)).unwrap();
        assert_eq!(result.oid(), Some(&oid!(1, 3, 1)));

        let result = list.get_next(&oid!(1, 3, 10), false, &oid!(2)).unwrap();
        assert!(result.is_no_such_object());
    }

    #[test]
    fn test_get_next_descends_into_children() {
        let mut list = ListHandler::new();
        list.add("1.3.6.1").unwrap().set(1);
        list.add("1.3.6.1.0").unwrap().set(2);
        list.add("1.3.6.2").unwrap().set(3);

        let result = list
            .get_next(&oid!(1, 3, 6, 1), false, &oid!(1, 3, 7))
            .unwrap();
        assert_eq!(result.oid(), Some(&oid!(1, 3, 6, 1, 0)));
    }

    #[test]
    fn test_get_next_on_empty_list() {
        let list = ListHandler::new();
        assert!(
            list.get_next(&oid!(1), true, &oid!(2))
                .unwrap()
                .is_no_such_object()
        );
    }

    #[test]
    fn test_with_entries_and_from_iter() {
        let list = ListHandler::with_entries([
            (oid!(1, 3, 6, 1, 3), Value::Integer(150)),
            (oid!(1, 3, 6, 1, 1), Value::Integer(50)),
        ]);
        assert_eq!(list.len(), 2);
        assert!(list.contains(&oid!(1, 3, 6, 1, 1)));

        let collected: ListHandler = vec![(oid!(1, 2), "a"), (oid!(1, 2), "b")]
            .into_iter()
            .collect();
        assert_eq!(collected.len(), 1);
        assert_eq!(
            collected.item(&oid!(1, 2)).map(|i| i.value().clone()),
            Some(Value::from("b"))
        );
    }

    #[test]
    fn test_iter_in_order() {
        let list = ListHandler::with_entries([
            (oid!(1, 3, 6, 1, 3), 150),
            (oid!(1, 3, 6, 1, 1), 50),
            (oid!(1, 3, 6, 1, 2), 100),
        ]);
        let entries: Vec<_> = list.iter().collect();
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0].0, &oid!(1, 3, 6, 1, 1));
        assert_eq!(entries[1].0, &oid!(1, 3, 6, 1, 2));
        assert_eq!(entries[2].0, &oid!(1, 3, 6, 1, 3));
    }

    #[test]
    fn test_subtree_handler_dispatch() {
        let list = scenario();
        let handler: &dyn SubtreeHandler = &list;
        assert!(handler.get(&oid!(1, 3, 10)).unwrap().is_value());
        assert_eq!(
            handler
                .get_next(&oid!(1, 3), false, &oid!(1, 4))
                .unwrap()
                .oid(),
            Some(&oid!(1, 3, 1))
        );
    }

    #[test]
    fn test_oid_within() {
        let from = oid!(1, 3, 1);
        let to = oid!(1, 3, 99);
        assert!(oid_within(&oid!(1, 3, 10), &from, false, &to));
        assert!(!oid_within(&from, &from, false, &to));
        assert!(oid_within(&from, &from, true, &to));
        assert!(!oid_within(&to, &from, true, &to));
        assert!(!oid_within(&oid!(1, 3, 0), &from, true, &to));
        assert!(!oid_within(&from, &from, true, &from));
    }
}
