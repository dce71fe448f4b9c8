//! Strongly typed bridge identifier.
//!
//! Identifiers are assigned sequentially from 1 by the record cleaner and
//! never change afterwards.  `BridgeId` is `Copy + Ord + Hash` so it can be
//! used as a set member and compared directly for tie-breaks.

use std::fmt;

use rustc_hash::FxHashSet;

/// Identifier of a bridge within a collection.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct BridgeId(pub u32);

impl BridgeId {
    /// The first identifier handed out by the record cleaner.
    pub const FIRST: BridgeId = BridgeId(1);

    /// The identifier that follows `self` in cleaning order.
    #[inline]
    pub fn next(self) -> BridgeId {
        BridgeId(self.0 + 1)
    }
}

impl fmt::Display for BridgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BridgeId({})", self.0)
    }
}

impl From<u32> for BridgeId {
    #[inline(always)]
    fn from(n: u32) -> BridgeId {
        BridgeId(n)
    }
}

impl TryFrom<usize> for BridgeId {
    type Error = std::num::TryFromIntError;
    fn try_from(n: usize) -> Result<BridgeId, Self::Error> {
        u32::try_from(n).map(BridgeId)
    }
}

/// Set of identifiers used for radius-query exclusions and visited tracking.
///
/// FxHash is used because keys are small integers; SipHash's DoS resistance
/// buys nothing here.
pub type BridgeIdSet = FxHashSet<BridgeId>;
