//! # Fee Calculation
//!
//! Deterministic, integer-only fee computation. The schedule is passed in by
//! the caller; nothing here is hard-coded beyond the historical defaults.
//!
//! ## Size-priced operations
//!
//! ```text
//! size_fee  = ceil(payload_bytes / 1024) * price_per_kbyte
//! candidate = base_fee + size_fee
//! floor     = min_real_fee * (10000 - min_rf_percent) / 10000
//! required  = max(candidate, floor)
//! ```
//!
//! ## Platform votes
//!
//! ```text
//! candidate = basic_fee + price_per_platform * |platform_to_add|
//! ```
//! followed by the same floor rule.
//!
//! Arithmetic is done in `u128` and saturates at `u64::MAX`.

use serde::{Deserialize, Serialize};
use shared_types::BLOCKCHAIN_PRECISION;

use super::errors::{ConfigError, ValidationError};
use super::extensions::Extensions;
use super::operations::{Operation, OperationKind, PlatformVoteUpdateOperation};

/// `min_rf_percent` is expressed in basis points of this value.
pub const PERCENT_100: u16 = 10_000;

const KBYTE: u128 = 1024;

/// Fee parameters for size-priced operations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeeParameters {
    pub base_fee: u64,
    /// Absolute floor before the rebate percentage is applied.
    pub min_real_fee: u64,
    /// Basis-point discount on `min_real_fee`, in [0, 10000].
    pub min_rf_percent: u16,
    pub price_per_kbyte: u32,
    #[serde(default)]
    pub extensions: Extensions,
}

impl FeeParameters {
    pub fn new(base_fee: u64, min_real_fee: u64, min_rf_percent: u16, price_per_kbyte: u32) -> Self {
        Self {
            base_fee,
            min_real_fee,
            min_rf_percent,
            price_per_kbyte,
            extensions: Extensions::new(),
        }
    }
}

/// Fee parameters for `PlatformVoteUpdate`, priced per platform added.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoteFeeParameters {
    pub basic_fee: u64,
    pub price_per_platform: u64,
    pub min_real_fee: u64,
    pub min_rf_percent: u16,
    #[serde(default)]
    pub extensions: Extensions,
}

impl VoteFeeParameters {
    pub fn new(basic_fee: u64, price_per_platform: u64, min_real_fee: u64, min_rf_percent: u16) -> Self {
        Self {
            basic_fee,
            price_per_platform,
            min_real_fee,
            min_rf_percent,
            extensions: Extensions::new(),
        }
    }
}

/// One fee-parameter record per content operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeeSchedule {
    pub platform_create: FeeParameters,
    pub platform_update: FeeParameters,
    pub platform_vote_update: VoteFeeParameters,
    pub post: FeeParameters,
    pub post_update: FeeParameters,
}

impl Default for FeeSchedule {
    fn default() -> Self {
        let p = BLOCKCHAIN_PRECISION;
        let price = (10 * p) as u32;
        Self {
            platform_create: FeeParameters::new(1000 * p, 1000 * p, PERCENT_100, price),
            platform_update: FeeParameters::new(10 * p, 0, 0, price),
            platform_vote_update: VoteFeeParameters::new(p, p, 0, 0),
            post: FeeParameters::new(p, 0, 0, price),
            post_update: FeeParameters::new(p, 0, 0, price),
        }
    }
}

/// Borrowed view of the parameter record for one operation kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeeParametersRef<'a> {
    Sized(&'a FeeParameters),
    PerPlatform(&'a VoteFeeParameters),
}

impl FeeSchedule {
    pub fn parameters_for(&self, kind: OperationKind) -> FeeParametersRef<'_> {
        match kind {
            OperationKind::PlatformCreate => FeeParametersRef::Sized(&self.platform_create),
            OperationKind::PlatformUpdate => FeeParametersRef::Sized(&self.platform_update),
            OperationKind::PlatformVoteUpdate => {
                FeeParametersRef::PerPlatform(&self.platform_vote_update)
            }
            OperationKind::Post => FeeParametersRef::Sized(&self.post),
            OperationKind::PostUpdate => FeeParametersRef::Sized(&self.post_update),
        }
    }

    /// Checks every record's `min_rf_percent` is within [0, 10000].
    pub fn validate(&self) -> Result<(), ConfigError> {
        let percents = [
            (OperationKind::PlatformCreate, self.platform_create.min_rf_percent),
            (OperationKind::PlatformUpdate, self.platform_update.min_rf_percent),
            (
                OperationKind::PlatformVoteUpdate,
                self.platform_vote_update.min_rf_percent,
            ),
            (OperationKind::Post, self.post.min_rf_percent),
            (OperationKind::PostUpdate, self.post_update.min_rf_percent),
        ];
        for (kind, percent) in percents {
            if percent > PERCENT_100 {
                return Err(ConfigError::InvalidRebatePercent {
                    operation: kind.name(),
                    percent,
                });
            }
        }
        Ok(())
    }
}

/// `ceil(bytes / 1024) * price_per_kbyte`.
pub fn data_fee(payload_bytes: u64, price_per_kbyte: u32) -> u64 {
    let kbytes = (payload_bytes as u128).div_ceil(KBYTE);
    saturate(kbytes * price_per_kbyte as u128)
}

/// Raises `candidate` to the discounted floor.
pub fn apply_floor(candidate: u64, min_real_fee: u64, min_rf_percent: u16) -> u64 {
    let discount = PERCENT_100.saturating_sub(min_rf_percent) as u128;
    let floor = saturate(min_real_fee as u128 * discount / PERCENT_100 as u128);
    candidate.max(floor)
}

/// Fee for a size-priced operation whose encoded payload is `payload_bytes` long.
pub fn sized_fee(params: &FeeParameters, payload_bytes: u64) -> u64 {
    let candidate = params
        .base_fee
        .saturating_add(data_fee(payload_bytes, params.price_per_kbyte));
    apply_floor(candidate, params.min_real_fee, params.min_rf_percent)
}

/// Fee for a platform vote update.
pub fn vote_fee(op: &PlatformVoteUpdateOperation, params: &VoteFeeParameters) -> u64 {
    let per_platform = params.price_per_platform as u128 * op.platform_to_add.len() as u128;
    let candidate = saturate(params.basic_fee as u128 + per_platform);
    apply_floor(candidate, params.min_real_fee, params.min_rf_percent)
}

/// Minimum fee the operation must claim under `schedule`.
pub fn compute_fee(op: &Operation, schedule: &FeeSchedule, payload_bytes: u64) -> u64 {
    match op {
        Operation::PlatformCreate(_) => sized_fee(&schedule.platform_create, payload_bytes),
        Operation::PlatformUpdate(_) => sized_fee(&schedule.platform_update, payload_bytes),
        Operation::PlatformVoteUpdate(vote) => vote_fee(vote, &schedule.platform_vote_update),
        Operation::Post(_) => sized_fee(&schedule.post, payload_bytes),
        Operation::PostUpdate(_) => sized_fee(&schedule.post_update, payload_bytes),
    }
}

/// Rejects a claim below `required`. Overpayment is accepted.
pub fn check_fee_claim(op: &Operation, required: u64) -> Result<(), ValidationError> {
    let claimed = op.fee().amount;
    if claimed < 0 || (claimed as u64) < required {
        return Err(ValidationError::InsufficientFee { required, claimed });
    }
    Ok(())
}

fn saturate(value: u128) -> u64 {
    u64::try_from(value).unwrap_or(u64::MAX)
}
