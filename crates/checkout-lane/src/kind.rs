//! Lane type tags and open/closed status.

use std::fmt;
use std::str::FromStr;

use crate::LaneError;

/// Which lane this is.  Cashier lanes are numbered from 1.
///
/// Ordering puts every regular lane (ascending by number) before
/// self-service, which is the scan order used by assignment.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
pub enum LaneKind {
    Regular(u8),
    SelfService,
}

impl LaneKind {
    #[inline]
    pub fn is_regular(self) -> bool {
        matches!(self, LaneKind::Regular(_))
    }

    /// The regular lane numbered one above this one.
    ///
    /// `None` for self-service and for `Regular(255)`.
    pub fn next_regular(self) -> Option<LaneKind> {
        match self {
            LaneKind::Regular(n) => n.checked_add(1).map(LaneKind::Regular),
            LaneKind::SelfService => None,
        }
    }
}

impl fmt::Display for LaneKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LaneKind::Regular(n) => write!(f, "Regular {n}"),
            LaneKind::SelfService => f.write_str("Self Service"),
        }
    }
}

impl FromStr for LaneKind {
    type Err = LaneError;

    /// Parse `"Regular <n>"` or `"Self Service"`.
    ///
    /// A name starting with `Regular` whose suffix is not a positive integer
    /// is an invariant violation and is reported, never ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s == "Self Service" {
            return Ok(LaneKind::SelfService);
        }
        let malformed = || LaneError::MalformedLaneName(s.to_owned());
        let suffix = s.strip_prefix("Regular").ok_or_else(malformed)?;
        match suffix.trim().parse::<u8>() {
            Ok(n) if n > 0 && suffix.starts_with(' ') => Ok(LaneKind::Regular(n)),
            _ => Err(malformed()),
        }
    }
}

// ── LaneStatus ────────────────────────────────────────────────────────────────

#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
pub enum LaneStatus {
    Open,
    #[default]
    Closed,
}

impl fmt::Display for LaneStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            LaneStatus::Open   => "Open",
            LaneStatus::Closed => "Closed",
        })
    }
}
