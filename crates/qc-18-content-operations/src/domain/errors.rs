//! # Content Operation Errors
//!
//! Every rejection terminates processing of that one operation. Nothing is
//! charged and no authority requirement is emitted for a rejected operation.

use shared_types::ShareType;
use thiserror::Error;

use super::extensions::ExtensionId;

/// Reasons an operation is rejected.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// A single field violates its length, emptiness or value rules.
    #[error("Malformed field `{field}`: {reason}")]
    MalformedField { field: &'static str, reason: String },

    /// Fields are individually valid but contradict each other.
    #[error("Inconsistent fields: {reason}")]
    InconsistentFields { reason: String },

    /// The claimed fee is below the computed minimum.
    #[error("Insufficient fee: required {required}, claimed {claimed}")]
    InsufficientFee { required: u64, claimed: ShareType },

    /// A known extension id carries a payload that does not decode.
    #[error("Extension {id} rejected: {reason}")]
    UnknownRequiredExtension { id: ExtensionId, reason: String },
}

impl ValidationError {
    pub(crate) fn malformed(field: &'static str, reason: impl Into<String>) -> Self {
        Self::MalformedField {
            field,
            reason: reason.into(),
        }
    }

    pub(crate) fn inconsistent(reason: impl Into<String>) -> Self {
        Self::InconsistentFields {
            reason: reason.into(),
        }
    }
}

/// Wire encoding failures.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CodecError {
    #[error("Encoding failed: {0}")]
    Encode(String),

    #[error("Decoding failed: {0}")]
    Decode(String),

    #[error("Operation exceeds size limit of {limit} bytes")]
    TooLarge { limit: u64 },
}

impl From<CodecError> for ValidationError {
    fn from(err: CodecError) -> Self {
        ValidationError::malformed("operation", err.to_string())
    }
}

/// Fee schedule configuration errors.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// Schedule document could not be parsed.
    #[error("Failed to parse fee schedule: {0}")]
    Parse(String),

    /// No schedule active at height 0.
    #[error("Fee schedule history has no genesis entry")]
    MissingGenesis,

    /// Two schedules share an activation height.
    #[error("Fee schedule already defined for activation height {height}")]
    DuplicateActivation { height: u64 },

    /// `min_rf_percent` outside [0, 10000].
    #[error("Invalid min_rf_percent {percent} for {operation} (max 10000)")]
    InvalidRebatePercent { operation: &'static str, percent: u16 },
}
