//! Object Identifier (OID) type.
//!
//! OIDs are stored as `SmallVec<[u32; 16]>` so typical management OIDs
//! (up to 16 arcs) never touch the heap.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use smallvec::SmallVec;

use crate::error::{Error, OidErrorKind, Result};

/// Maximum number of arcs accepted when parsing (RFC 2578 Section 3.5).
pub const MAX_OID_LEN: usize = 128;

/// Object Identifier.
///
/// Ordering is component-wise on the numeric arcs, so `1.3.6.1.2` sorts
/// before `1.3.6.1.10`, and a prefix sorts before any of its extensions
/// (`1.3.6.1` < `1.3.6.1.0`). This is the order GETNEXT walks use, and it
/// differs from the byte order of the dotted strings.
#[derive(Clone, PartialEq, Eq, Hash, Default)]
pub struct Oid {
    arcs: SmallVec<[u32; 16]>,
}

impl Oid {
    /// Create an OID from an iterator of arcs.
    pub fn new(arcs: impl IntoIterator<Item = u32>) -> Self {
        Self {
            arcs: arcs.into_iter().collect(),
        }
    }

    /// Create an OID from a slice of arcs.
    pub fn from_slice(arcs: &[u32]) -> Self {
        Self {
            arcs: SmallVec::from_slice(arcs),
        }
    }

    /// Create an empty OID.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Parse an OID from dotted notation.
    ///
    /// A single leading dot is accepted (`.1.3.6.1`), as net-snmp prints it.
    /// Arcs must be decimal `u32` values; empty arcs are rejected.
    pub fn parse(s: &str) -> Result<Self> {
        let trimmed = s.strip_prefix('.').unwrap_or(s);
        if trimmed.is_empty() {
            return Err(Error::invalid_oid_with_input(OidErrorKind::Empty, s));
        }

        let mut arcs: SmallVec<[u32; 16]> = SmallVec::new();
        for part in trimmed.split('.') {
            if arcs.len() == MAX_OID_LEN {
                return Err(Error::invalid_oid_with_input(
                    OidErrorKind::TooManyArcs {
                        count: trimmed.split('.').count(),
                        max: MAX_OID_LEN,
                    },
                    s,
                ));
            }
            // u32::from_str accepts a leading '+', which is not valid OID syntax
            if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
                return Err(Error::invalid_oid_with_input(OidErrorKind::InvalidArc, s));
            }
            let arc = part
                .parse::<u32>()
                .map_err(|_| Error::invalid_oid_with_input(OidErrorKind::InvalidArc, s))?;
            arcs.push(arc);
        }

        Ok(Self { arcs })
    }

    /// The arcs of this OID.
    pub fn arcs(&self) -> &[u32] {
        &self.arcs
    }

    /// Number of arcs.
    pub fn len(&self) -> usize {
        self.arcs.len()
    }

    /// Check if the OID has no arcs.
    pub fn is_empty(&self) -> bool {
        self.arcs.is_empty()
    }

    /// Check if this OID starts with `prefix` (arc-wise, not textually).
    pub fn starts_with(&self, prefix: &Oid) -> bool {
        self.arcs.starts_with(&prefix.arcs)
    }

    /// The OID with the last arc removed, or `None` for an empty OID.
    pub fn parent(&self) -> Option<Oid> {
        if self.arcs.is_empty() {
            return None;
        }
        Some(Self::from_slice(&self.arcs[..self.arcs.len() - 1]))
    }

    /// The OID extended by one arc.
    pub fn child(&self, arc: u32) -> Oid {
        let mut arcs = self.arcs.clone();
        arcs.push(arc);
        Self { arcs }
    }

    /// Validate against X.690 encoding constraints.
    ///
    /// The first arc must be 0, 1 or 2, and under 0 or 1 the second arc must
    /// be below 40. The table itself accepts any OID; this is for callers
    /// that will later hand the OID to a BER encoder.
    pub fn validate(&self) -> Result<()> {
        let Some(&first) = self.arcs.first() else {
            return Err(Error::invalid_oid(OidErrorKind::Empty));
        };
        if first > 2 {
            return Err(Error::invalid_oid(OidErrorKind::InvalidFirstArc(first)));
        }
        let Some(&second) = self.arcs.get(1) else {
            return Err(Error::invalid_oid(OidErrorKind::TooShort));
        };
        if first < 2 && second >= 40 {
            return Err(Error::invalid_oid(OidErrorKind::InvalidSecondArc {
                first,
                second,
            }));
        }
        Ok(())
    }
}

impl Ord for Oid {
    fn cmp(&self, other: &Self) -> Ordering {
        // Slice ordering is lexicographic over the numeric arcs, with a
        // shorter prefix ordered first.
        self.arcs.as_slice().cmp(other.arcs.as_slice())
    }
}

impl PartialOrd for Oid {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Oid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for arc in &self.arcs {
            if !first {
                f.write_str(".")?;
            }
            write!(f, "{}", arc)?;
            first = false;
        }
        Ok(())
    }
}

impl fmt::Debug for Oid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Oid({})", self)
    }
}

impl FromStr for Oid {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl From<&[u32]> for Oid {
    fn from(arcs: &[u32]) -> Self {
        Self::from_slice(arcs)
    }
}

impl<const N: usize> From<[u32; N]> for Oid {
    fn from(arcs: [u32; N]) -> Self {
        Self::from_slice(&arcs)
    }
}

/// Build an [`Oid`] from literal arcs.
///
/// ```rust
/// use agentx_oidlist::{Oid, oid};
///
/// let sys_descr = oid!(1, 3, 6, 1, 2, 1, 1, 1, 0);
/// assert_eq!(sys_descr.to_string(), "1.3.6.1.2.1.1.1.0");
/// ```
#[macro_export]
macro_rules! oid {
    ($($arc:expr),* $(,)?) => {
        $crate::oid::Oid::from_slice(&[$($arc),*])
    };
}
