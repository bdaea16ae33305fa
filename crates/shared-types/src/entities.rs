//! # Core Chain Entities
//!
//! ## Clusters
//!
//! - **Identity**: `AccountUid`, `PostPid`
//! - **Value**: `ShareType`, `AssetAid`, `Asset`
//! - **Authorization**: `AuthorityTier`

use serde::{Deserialize, Serialize};

// =============================================================================
// CLUSTER A: IDENTITY
// =============================================================================

/// Numeric account identifier. Zero is never a valid account.
pub type AccountUid = u64;

/// Per-poster post identifier. Zero is never a valid post.
pub type PostPid = u64;

// =============================================================================
// CLUSTER B: VALUE
// =============================================================================

/// Signed amount in the smallest unit of an asset.
pub type ShareType = i64;

/// Asset identifier.
pub type AssetAid = u64;

/// The network's core asset. Fees and pledges are denominated in it.
pub const GRAPHENE_CORE_ASSET_AID: AssetAid = 0;

/// Number of base units in one whole core-asset token.
pub const BLOCKCHAIN_PRECISION: u64 = 100_000;

/// An amount of a specific asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct Asset {
    /// Amount in base units.
    pub amount: ShareType,
    /// Which asset the amount is denominated in.
    pub asset_id: AssetAid,
}

impl Asset {
    /// Creates an asset amount.
    pub fn new(amount: ShareType, asset_id: AssetAid) -> Self {
        Self { amount, asset_id }
    }

    /// Creates an amount of the core asset.
    pub fn core(amount: ShareType) -> Self {
        Self::new(amount, GRAPHENE_CORE_ASSET_AID)
    }

    /// Returns true if this amount is denominated in the core asset.
    pub fn is_core(&self) -> bool {
        self.asset_id == GRAPHENE_CORE_ASSET_AID
    }
}

// =============================================================================
// CLUSTER C: AUTHORIZATION
// =============================================================================

/// Privilege level a signing key must hold.
///
/// Ordered by privilege: `Secondary < Active < Owner`. Value-moving operations
/// need `Active`; content operations need only `Secondary`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum AuthorityTier {
    /// Content key: posting and editing.
    Secondary,
    /// Balance key: transfers, pledges, votes.
    Active,
    /// Master key: can replace the other keys.
    Owner,
}

impl AuthorityTier {
    /// Returns true if a key at this tier may sign for `required`.
    pub fn satisfies(self, required: AuthorityTier) -> bool {
        self >= required
    }
}

impl std::fmt::Display for AuthorityTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Secondary => write!(f, "secondary"),
            Self::Active => write!(f, "active"),
            Self::Owner => write!(f, "owner"),
        }
    }
}
