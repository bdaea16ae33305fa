//! # Signing Authority Resolution
//!
//! States which accounts must sign an operation and at which tier. Signature
//! checking against these requirements happens downstream.
//!
//! | Operation | Required |
//! |-----------|----------|
//! | `PlatformCreate`, `PlatformUpdate` | `(account, Active)` |
//! | `PlatformVoteUpdate` | `(voter, Active)` |
//! | `Post`, `PostUpdate` | `(poster, Secondary)`, `(platform, Secondary)` |
//!
//! Posts need both parties: the poster attests authorship and the platform
//! attests that it accepted the attribution.

use std::collections::BTreeSet;

use shared_types::{AccountUid, AuthorityTier};

use super::operations::Operation;

/// Ordered set of `(account, tier)` pairs that must co-sign.
pub type RequiredAuthorities = BTreeSet<(AccountUid, AuthorityTier)>;

/// Resolves the signers an operation requires. Never fails.
pub fn required_authorities(op: &Operation) -> RequiredAuthorities {
    let mut required = RequiredAuthorities::new();
    match op {
        Operation::PlatformCreate(op) => {
            required.insert((op.account, AuthorityTier::Active));
        }
        Operation::PlatformUpdate(op) => {
            required.insert((op.account, AuthorityTier::Active));
        }
        Operation::PlatformVoteUpdate(op) => {
            required.insert((op.voter, AuthorityTier::Active));
        }
        Operation::Post(op) => {
            required.insert((op.poster, AuthorityTier::Secondary));
            required.insert((op.platform, AuthorityTier::Secondary));
        }
        Operation::PostUpdate(op) => {
            required.insert((op.poster, AuthorityTier::Secondary));
            required.insert((op.platform, AuthorityTier::Secondary));
        }
    }
    required
}

/// Accounts that must sign at exactly `tier`.
pub fn accounts_at_tier(required: &RequiredAuthorities, tier: AuthorityTier) -> BTreeSet<AccountUid> {
    required
        .iter()
        .filter(|(_, t)| *t == tier)
        .map(|(uid, _)| *uid)
        .collect()
}
