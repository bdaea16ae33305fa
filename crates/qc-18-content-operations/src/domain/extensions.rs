//! # Extension Bag
//!
//! Every operation and every fee-parameter record carries an open bag of
//! `(id, payload)` entries. Nodes must round-trip ids they do not understand
//! byte-for-byte so that a later protocol version can act on them.
//!
//! ## Rules
//!
//! - A bag being validated is canonical: ids strictly increasing.
//! - Unknown ids are opaque and never inspected.
//! - Known ids must decode exactly, otherwise the operation is rejected.
//!
//! ## Known Post Extensions
//!
//! | Id | Extension | Payload |
//! |----|-----------|---------|
//! | 1 | `ForwardPrice` | `i64` LE, non-negative |
//! | 2 | `LicenseId` | `u64` LE |
//! | 3 | `PermissionFlags` | `u32` LE |

use serde::{Deserialize, Serialize};
use shared_types::ShareType;

use super::errors::ValidationError;

/// Extension identifier.
pub type ExtensionId = u16;

pub const EXT_FORWARD_PRICE: ExtensionId = 1;
pub const EXT_LICENSE_ID: ExtensionId = 2;
pub const EXT_PERMISSION_FLAGS: ExtensionId = 3;

/// A single extension entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ExtensionEntry {
    pub id: ExtensionId,
    pub payload: Vec<u8>,
}

impl ExtensionEntry {
    pub fn new(id: ExtensionId, payload: Vec<u8>) -> Self {
        Self { id, payload }
    }
}

/// Ordered extension bag.
///
/// Decoding keeps entries in wire order so that re-encoding is lossless; use
/// [`Extensions::canonicalize`] before hashing or signing a locally built bag.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Extensions(Vec<ExtensionEntry>);

impl Extensions {
    /// Creates an empty bag.
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Wraps entries in the order given.
    pub fn from_entries(entries: Vec<ExtensionEntry>) -> Self {
        Self(entries)
    }

    /// Inserts or replaces an entry, keeping the bag sorted by id.
    pub fn insert(&mut self, id: ExtensionId, payload: Vec<u8>) {
        match self.0.binary_search_by_key(&id, |e| e.id) {
            Ok(pos) => self.0[pos].payload = payload,
            Err(pos) => self.0.insert(pos, ExtensionEntry::new(id, payload)),
        }
    }

    /// Returns the payload of the first entry with `id`.
    pub fn get(&self, id: ExtensionId) -> Option<&[u8]> {
        self.0
            .iter()
            .find(|e| e.id == id)
            .map(|e| e.payload.as_slice())
    }

    pub fn entries(&self) -> &[ExtensionEntry] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns true if ids are strictly increasing.
    pub fn is_canonical(&self) -> bool {
        self.0.windows(2).all(|w| w[0].id < w[1].id)
    }

    /// Sorts by id. For duplicated ids the first occurrence wins.
    pub fn canonicalize(&mut self) {
        self.0.sort_by_key(|e| e.id);
        self.0.dedup_by_key(|e| e.id);
    }

    /// Rejects bags that are not strictly ordered by id.
    pub fn check_canonical(&self) -> Result<(), ValidationError> {
        if let Some(w) = self.0.windows(2).find(|w| w[0].id >= w[1].id) {
            return Err(ValidationError::malformed(
                "extensions",
                format!(
                    "ids must be strictly increasing, found {} before {}",
                    w[0].id, w[1].id
                ),
            ));
        }
        Ok(())
    }
}

/// Extensions understood on `Post` and `PostUpdate`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PostExtension {
    /// Price a reader pays to forward the post.
    ForwardPrice(ShareType),
    /// License registered by the platform.
    LicenseId(u64),
    /// Bit flags restricting replies, forwards and likes.
    PermissionFlags(u32),
}

impl PostExtension {
    pub fn id(&self) -> ExtensionId {
        match self {
            Self::ForwardPrice(_) => EXT_FORWARD_PRICE,
            Self::LicenseId(_) => EXT_LICENSE_ID,
            Self::PermissionFlags(_) => EXT_PERMISSION_FLAGS,
        }
    }

    pub fn to_payload(&self) -> Vec<u8> {
        match self {
            Self::ForwardPrice(price) => price.to_le_bytes().to_vec(),
            Self::LicenseId(lid) => lid.to_le_bytes().to_vec(),
            Self::PermissionFlags(flags) => flags.to_le_bytes().to_vec(),
        }
    }

    pub fn to_entry(&self) -> ExtensionEntry {
        ExtensionEntry::new(self.id(), self.to_payload())
    }

    /// Decodes a known id. Returns `Ok(None)` for ids this build does not know.
    pub fn decode(entry: &ExtensionEntry) -> Result<Option<Self>, ValidationError> {
        let ext = match entry.id {
            EXT_FORWARD_PRICE => {
                let price = ShareType::from_le_bytes(fixed_payload(entry)?);
                if price < 0 {
                    return Err(ValidationError::UnknownRequiredExtension {
                        id: entry.id,
                        reason: format!("forward price {} is negative", price),
                    });
                }
                Self::ForwardPrice(price)
            }
            EXT_LICENSE_ID => Self::LicenseId(u64::from_le_bytes(fixed_payload(entry)?)),
            EXT_PERMISSION_FLAGS => {
                Self::PermissionFlags(u32::from_le_bytes(fixed_payload(entry)?))
            }
            _ => return Ok(None),
        };
        Ok(Some(ext))
    }
}

fn fixed_payload<const N: usize>(entry: &ExtensionEntry) -> Result<[u8; N], ValidationError> {
    <[u8; N]>::try_from(entry.payload.as_slice()).map_err(|_| {
        ValidationError::UnknownRequiredExtension {
            id: entry.id,
            reason: format!("expected {} payload bytes, got {}", N, entry.payload.len()),
        }
    })
}

/// Decodes every known post extension in the bag, skipping unknown ids.
pub fn decode_post_extensions(bag: &Extensions) -> Result<Vec<PostExtension>, ValidationError> {
    let mut decoded = Vec::new();
    for entry in bag.entries() {
        if let Some(ext) = PostExtension::decode(entry)? {
            decoded.push(ext);
        }
    }
    Ok(decoded)
}
