//! Lookup queries run by the CLI.

use std::iter;

use crate::oid::MAX_OID_LEN;
use crate::{GetResult, Oid, Result, SubtreeHandler};

/// A single GET or GETNEXT lookup.
#[derive(Debug, Clone, PartialEq)]
pub enum Query {
    Get {
        oid: Oid,
    },
    Next {
        from: Oid,
        include_from: bool,
        to: Oid,
    },
}

impl Query {
    /// A GETNEXT query. Without `to` the range runs to the end of the view.
    pub fn next(from: Oid, include_from: bool, to: Option<Oid>) -> Self {
        Self::Next {
            from,
            include_from,
            to: to.unwrap_or_else(end_of_view),
        }
    }

    /// Run the lookup against `handler`.
    pub fn run<H: SubtreeHandler + ?Sized>(&self, handler: &H) -> Result<GetResult> {
        match self {
            Self::Get { oid } => handler.get(oid),
            Self::Next {
                from,
                include_from,
                to,
            } => handler.get_next(from, *include_from, to),
        }
    }
}

impl std::fmt::Display for Query {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Get { oid } => write!(f, "GET {}", oid),
            Self::Next {
                from,
                include_from,
                to,
            } => {
                let open = if *include_from { '[' } else { '(' };
                write!(f, "GETNEXT {}{}, {})", open, from, to)
            }
        }
    }
}

/// An OID ordered after every OID [`Oid::parse`] accepts.
///
/// Parsed OIDs have at most [`MAX_OID_LEN`] arcs, so one more `u32::MAX`
/// arc than that sorts after all of them.
pub fn end_of_view() -> Oid {
    Oid::new(iter::repeat_n(u32::MAX, MAX_OID_LEN + 1))
}

/// First OID after every OID under `root`: `root` with its last arc
/// incremented.
///
/// Trailing `u32::MAX` arcs have no successor and are dropped first; when
/// nothing is left the end of the view is returned.
pub fn subtree_end(root: &Oid) -> Oid {
    let arcs = root.arcs();
    match arcs.iter().rposition(|&arc| arc < u32::MAX) {
        Some(pos) => Oid::from_slice(&arcs[..pos]).child(arcs[pos] + 1),
        None => end_of_view(),
    }
}

/// Walk every OID under `root` in order, one GETNEXT at a time.
///
/// `lookup` runs each query; the walk stops at the first NoSuchObject.
pub fn walk<F>(root: Oid, mut lookup: F) -> Result<Vec<GetResult>>
where
    F: FnMut(Query) -> Result<GetResult>,
{
    let end = subtree_end(&root);
    let mut results = Vec::new();
    let mut current = root;
    loop {
        let result = lookup(Query::Next {
            from: current.clone(),
            include_from: false,
            to: end.clone(),
        })?;
        match result.oid() {
            Some(oid) => current = oid.clone(),
            None => break,
        }
        results.push(result);
    }
    Ok(results)
}
