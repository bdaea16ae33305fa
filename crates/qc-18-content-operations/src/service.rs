//! Content Validation Service
//!
//! Wires the pure domain engines to the inbound port and picks the fee
//! schedule for the block height being validated.

use rayon::prelude::*;
use tracing::{debug, info};

use crate::codec;
use crate::config::{FeeScheduleHistory, ServiceConfig};
use crate::domain::authority::required_authorities;
use crate::domain::errors::ValidationError;
use crate::domain::fees::{check_fee_claim, compute_fee};
use crate::domain::operations::Operation;
use crate::domain::validation::validate;
use crate::domain::value_objects::ValidatedOperation;
use crate::ports::inbound::ContentOperationsApi;

/// Content Validation Service
///
/// Holds only read-only state, so one instance can be shared by every worker
/// validating a batch. Fee schedule changes are applied by building a new
/// service between batches.
pub struct ContentValidationService {
    config: ServiceConfig,
    fee_schedules: FeeScheduleHistory,
}

impl ContentValidationService {
    /// Create a new service with default config and the genesis schedule
    pub fn new() -> Self {
        Self {
            config: ServiceConfig::default(),
            fee_schedules: FeeScheduleHistory::default(),
        }
    }

    /// Create a new service with custom config and schedule history
    pub fn with_config(config: ServiceConfig, fee_schedules: FeeScheduleHistory) -> Self {
        Self {
            config,
            fee_schedules,
        }
    }

    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }

    pub fn fee_schedules(&self) -> &FeeScheduleHistory {
        &self.fee_schedules
    }

    fn run(&self, op: &Operation, height: u64) -> Result<ValidatedOperation, ValidationError> {
        validate(op)?;

        let authorities = required_authorities(op);

        let schedule = self.fee_schedules.schedule_at(height);
        let payload_bytes = codec::payload_len(op)?;
        let required_fee = compute_fee(op, schedule, payload_bytes);
        check_fee_claim(op, required_fee)?;

        Ok(ValidatedOperation {
            kind: op.kind(),
            fee_payer: op.fee_payer(),
            required_authorities: authorities,
            required_fee,
            claimed_fee: op.fee().amount,
        })
    }
}

impl Default for ContentValidationService {
    fn default() -> Self {
        Self::new()
    }
}

impl ContentOperationsApi for ContentValidationService {
    fn process(&self, op: &Operation, height: u64) -> Result<ValidatedOperation, ValidationError> {
        let result = self.run(op, height);
        match &result {
            Ok(validated) => debug!(
                kind = %validated.kind,
                fee_payer = validated.fee_payer,
                required_fee = validated.required_fee,
                signers = validated.required_authorities.len(),
                height,
                "Content operation accepted"
            ),
            Err(err) => debug!(kind = %op.kind(), height, error = %err, "Content operation rejected"),
        }
        result
    }

    fn process_encoded(
        &self,
        bytes: &[u8],
        height: u64,
    ) -> Result<ValidatedOperation, ValidationError> {
        let op = codec::decode_with_limit(bytes, self.config.max_operation_bytes)?;
        self.process(&op, height)
    }

    fn process_batch(
        &self,
        ops: &[Operation],
        height: u64,
    ) -> Vec<Result<ValidatedOperation, ValidationError>> {
        let parallel = ops.len() >= self.config.parallel_batch_threshold;
        let results: Vec<_> = if parallel {
            ops.par_iter().map(|op| self.process(op, height)).collect()
        } else {
            ops.iter().map(|op| self.process(op, height)).collect()
        };

        let rejected = results.iter().filter(|r| r.is_err()).count();
        info!(
            batch_size = ops.len(),
            rejected,
            parallel,
            height,
            schedule_activation = self.fee_schedules.activation_height_at(height),
            "Content operation batch validated"
        );
        results
    }
}
