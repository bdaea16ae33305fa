//! Inbound Ports (Driving Ports / API)
//!
//! Consumed by the block-validation pipeline. Every method is synchronous and
//! side-effect free; retries, timeouts and backpressure belong to the caller.

use crate::domain::errors::ValidationError;
use crate::domain::operations::Operation;
use crate::domain::value_objects::ValidatedOperation;

/// Primary Content Operations API
pub trait ContentOperationsApi: Send + Sync {
    /// Validate one operation at `height`.
    ///
    /// Runs, in order:
    /// 1. Structural validation
    /// 2. Required authority resolution
    /// 3. Fee computation under the schedule active at `height`
    /// 4. Fee claim check
    ///
    /// On failure nothing is produced: no fee and no authority requirement.
    fn process(&self, op: &Operation, height: u64) -> Result<ValidatedOperation, ValidationError>;

    /// Decode then validate. Decoding failures are reported as a malformed
    /// `operation` field.
    fn process_encoded(
        &self,
        bytes: &[u8],
        height: u64,
    ) -> Result<ValidatedOperation, ValidationError>;

    /// Validate independent operations. Results are in input order.
    fn process_batch(
        &self,
        ops: &[Operation],
        height: u64,
    ) -> Vec<Result<ValidatedOperation, ValidationError>>;
}
