//! # Content Operations
//!
//! The closed set of content-platform operations. Field order in each struct
//! is the consensus wire order and must not be rearranged.
//!
//! ```text
//! PlatformCreate      fee, account, pledge, name, url, extra_data, extensions
//! PlatformUpdate      fee, account, new_pledge?, new_name?, new_url?, new_extra_data?, extensions
//! PlatformVoteUpdate  fee, voter, platform_to_add, platform_to_remove, extensions
//! Post                fee, post_pid, platform, poster, origin_poster?, origin_post_pid?,
//!                     origin_platform?, hash_value, extra_data, title, body, extensions
//! PostUpdate          fee, platform, poster, post_pid, hash_value?, extra_data?, title?,
//!                     body?, extensions
//! ```
//!
//! In update operations `None` means "unchanged" and `Some(String::new())`
//! means "cleared". The two are distinct on the wire.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use shared_types::{AccountUid, Asset, PostPid};

use super::extensions::Extensions;

/// Registers a platform backed by a pledge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlatformCreateOperation {
    pub fee: Asset,
    /// Platform owner; pays the fee.
    pub account: AccountUid,
    /// Collateral in the core asset.
    pub pledge: Asset,
    pub name: String,
    /// Main domain of the platform.
    pub url: String,
    /// Free-form JSON-like text. Not parsed here.
    pub extra_data: String,
    pub extensions: Extensions,
}

/// Changes any subset of a platform's settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlatformUpdateOperation {
    pub fee: Asset,
    pub account: AccountUid,
    pub new_pledge: Option<Asset>,
    pub new_name: Option<String>,
    pub new_url: Option<String>,
    pub new_extra_data: Option<String>,
    pub extensions: Extensions,
}

impl PlatformUpdateOperation {
    /// True if no field would change.
    pub fn is_noop(&self) -> bool {
        self.new_pledge.is_none()
            && self.new_name.is_none()
            && self.new_url.is_none()
            && self.new_extra_data.is_none()
    }
}

/// Adds and removes platforms from the voter's platform vote list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlatformVoteUpdateOperation {
    pub fee: Asset,
    pub voter: AccountUid,
    pub platform_to_add: BTreeSet<AccountUid>,
    pub platform_to_remove: BTreeSet<AccountUid>,
    pub extensions: Extensions,
}

/// Publishes an article or a reply.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostOperation {
    pub fee: Asset,
    pub post_pid: PostPid,
    pub platform: AccountUid,
    pub poster: AccountUid,
    /// Backlink to the post being replied to or forwarded. All three of the
    /// `origin_*` fields are set together or not at all.
    pub origin_poster: Option<AccountUid>,
    pub origin_post_pid: Option<PostPid>,
    pub origin_platform: Option<AccountUid>,
    pub hash_value: String,
    /// Category, tags and the like.
    pub extra_data: String,
    pub title: String,
    pub body: String,
    pub extensions: Extensions,
}

/// Backlink carried by a reply or repost.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PostOrigin {
    pub poster: AccountUid,
    pub post_pid: PostPid,
    pub platform: AccountUid,
}

impl PostOperation {
    /// Returns the backlink if the triple is complete.
    pub fn origin(&self) -> Option<PostOrigin> {
        match (self.origin_poster, self.origin_post_pid, self.origin_platform) {
            (Some(poster), Some(post_pid), Some(platform)) => Some(PostOrigin {
                poster,
                post_pid,
                platform,
            }),
            _ => None,
        }
    }
}

/// Edits an existing post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostUpdateOperation {
    pub fee: Asset,
    pub platform: AccountUid,
    pub poster: AccountUid,
    pub post_pid: PostPid,
    pub hash_value: Option<String>,
    pub extra_data: Option<String>,
    pub title: Option<String>,
    pub body: Option<String>,
    pub extensions: Extensions,
}

impl PostUpdateOperation {
    /// True if no field would change.
    pub fn is_noop(&self) -> bool {
        self.hash_value.is_none()
            && self.extra_data.is_none()
            && self.title.is_none()
            && self.body.is_none()
    }
}

/// Variant discriminant, used to look up fee parameters and for logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum OperationKind {
    PlatformCreate,
    PlatformUpdate,
    PlatformVoteUpdate,
    Post,
    PostUpdate,
}

impl OperationKind {
    pub fn name(&self) -> &'static str {
        match self {
            Self::PlatformCreate => "platform_create",
            Self::PlatformUpdate => "platform_update",
            Self::PlatformVoteUpdate => "platform_vote_update",
            Self::Post => "post",
            Self::PostUpdate => "post_update",
        }
    }
}

impl std::fmt::Display for OperationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A decoded content operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Operation {
    PlatformCreate(PlatformCreateOperation),
    PlatformUpdate(PlatformUpdateOperation),
    PlatformVoteUpdate(PlatformVoteUpdateOperation),
    Post(PostOperation),
    PostUpdate(PostUpdateOperation),
}

impl Operation {
    pub fn kind(&self) -> OperationKind {
        match self {
            Self::PlatformCreate(_) => OperationKind::PlatformCreate,
            Self::PlatformUpdate(_) => OperationKind::PlatformUpdate,
            Self::PlatformVoteUpdate(_) => OperationKind::PlatformVoteUpdate,
            Self::Post(_) => OperationKind::Post,
            Self::PostUpdate(_) => OperationKind::PostUpdate,
        }
    }

    /// The claimed fee. Verified by the fee calculator, never trusted.
    pub fn fee(&self) -> &Asset {
        match self {
            Self::PlatformCreate(op) => &op.fee,
            Self::PlatformUpdate(op) => &op.fee,
            Self::PlatformVoteUpdate(op) => &op.fee,
            Self::Post(op) => &op.fee,
            Self::PostUpdate(op) => &op.fee,
        }
    }

    /// Account debited for the fee.
    pub fn fee_payer(&self) -> AccountUid {
        match self {
            Self::PlatformCreate(op) => op.account,
            Self::PlatformUpdate(op) => op.account,
            Self::PlatformVoteUpdate(op) => op.voter,
            Self::Post(op) => op.poster,
            Self::PostUpdate(op) => op.poster,
        }
    }

    pub fn extensions(&self) -> &Extensions {
        match self {
            Self::PlatformCreate(op) => &op.extensions,
            Self::PlatformUpdate(op) => &op.extensions,
            Self::PlatformVoteUpdate(op) => &op.extensions,
            Self::Post(op) => &op.extensions,
            Self::PostUpdate(op) => &op.extensions,
        }
    }

    pub fn extensions_mut(&mut self) -> &mut Extensions {
        match self {
            Self::PlatformCreate(op) => &mut op.extensions,
            Self::PlatformUpdate(op) => &mut op.extensions,
            Self::PlatformVoteUpdate(op) => &mut op.extensions,
            Self::Post(op) => &mut op.extensions,
            Self::PostUpdate(op) => &mut op.extensions,
        }
    }
}

macro_rules! impl_from_operation {
    ($($variant:ident => $ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for Operation {
                fn from(op: $ty) -> Self {
                    Operation::$variant(op)
                }
            }
        )*
    };
}

impl_from_operation! {
    PlatformCreate => PlatformCreateOperation,
    PlatformUpdate => PlatformUpdateOperation,
    PlatformVoteUpdate => PlatformVoteUpdateOperation,
    Post => PostOperation,
    PostUpdate => PostUpdateOperation,
}
