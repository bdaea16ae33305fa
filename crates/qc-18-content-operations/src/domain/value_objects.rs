//! Value objects produced by the validation pipeline.

use shared_types::{AccountUid, ShareType};

use super::authority::RequiredAuthorities;
use super::operations::OperationKind;

/// Outcome of a successful validation.
///
/// Carries what the downstream stages consume: the signer requirements for
/// signature verification and the fee for the balance debit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedOperation {
    pub kind: OperationKind,
    /// Account debited for the fee.
    pub fee_payer: AccountUid,
    pub required_authorities: RequiredAuthorities,
    /// Minimum fee under the active schedule.
    pub required_fee: u64,
    /// Fee the submitter claimed. Always `>= required_fee`.
    pub claimed_fee: ShareType,
}

impl ValidatedOperation {
    /// Amount claimed above the required fee. Not refunded here.
    pub fn overpayment(&self) -> u64 {
        (self.claimed_fee as u64).saturating_sub(self.required_fee)
    }
}
