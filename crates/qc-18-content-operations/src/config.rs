//! Configuration for the Content Operations Subsystem
//!
//! Fee schedules are chain-configured and change only at block-height
//! boundaries. Historical schedules are kept so that replaying an old block
//! prices its operations under the schedule that was active at that height.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::codec::DEFAULT_MAX_OPERATION_BYTES;
use crate::domain::errors::ConfigError;
use crate::domain::fees::FeeSchedule;

/// Service configuration
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// Largest encoded operation accepted by `process_encoded`
    pub max_operation_bytes: u64,
    /// Batches of at least this many operations are validated in parallel
    pub parallel_batch_threshold: usize,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            max_operation_bytes: DEFAULT_MAX_OPERATION_BYTES,
            parallel_batch_threshold: 64,
        }
    }
}

/// Fee schedules keyed by activation height.
///
/// Always holds a schedule at height 0. Serialized as a map from activation
/// height to schedule; deserialization runs the same checks as `validate`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    try_from = "BTreeMap<u64, FeeSchedule>",
    into = "BTreeMap<u64, FeeSchedule>"
)]
pub struct FeeScheduleHistory {
    schedules: BTreeMap<u64, FeeSchedule>,
}

impl FeeScheduleHistory {
    /// Starts a history with the schedule active from genesis.
    pub fn new(genesis: FeeSchedule) -> Result<Self, ConfigError> {
        genesis.validate()?;
        let mut schedules = BTreeMap::new();
        schedules.insert(0, genesis);
        Ok(Self { schedules })
    }

    /// Registers a schedule taking effect at `activation_height`.
    pub fn schedule_upgrade(
        &mut self,
        activation_height: u64,
        schedule: FeeSchedule,
    ) -> Result<(), ConfigError> {
        if self.schedules.contains_key(&activation_height) {
            return Err(ConfigError::DuplicateActivation {
                height: activation_height,
            });
        }
        schedule.validate()?;
        self.schedules.insert(activation_height, schedule);
        Ok(())
    }

    /// Schedule in force at `height`: the latest one activated at or below it.
    pub fn schedule_at(&self, height: u64) -> &FeeSchedule {
        self.schedules
            .range(..=height)
            .next_back()
            .map(|(_, schedule)| schedule)
            .unwrap_or_else(|| self.genesis())
    }

    /// Activation height of the schedule in force at `height`.
    pub fn activation_height_at(&self, height: u64) -> u64 {
        self.schedules
            .range(..=height)
            .next_back()
            .map(|(h, _)| *h)
            .unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.schedules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.schedules.is_empty()
    }

    fn genesis(&self) -> &FeeSchedule {
        // every constructor guarantees height 0 is present
        &self.schedules[&0]
    }

    /// Checks the genesis entry exists and every schedule is well-formed.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.schedules.contains_key(&0) {
            return Err(ConfigError::MissingGenesis);
        }
        self.schedules.values().try_for_each(FeeSchedule::validate)
    }

    /// Parses and validates a history from JSON.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let schedules: BTreeMap<u64, FeeSchedule> =
            serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))?;
        Self::try_from(schedules)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        serde_json::to_string_pretty(self).map_err(|e| ConfigError::Parse(e.to_string()))
    }
}

impl TryFrom<BTreeMap<u64, FeeSchedule>> for FeeScheduleHistory {
    type Error = ConfigError;

    fn try_from(schedules: BTreeMap<u64, FeeSchedule>) -> Result<Self, Self::Error> {
        let history = Self { schedules };
        history.validate()?;
        Ok(history)
    }
}

impl From<FeeScheduleHistory> for BTreeMap<u64, FeeSchedule> {
    fn from(history: FeeScheduleHistory) -> Self {
        history.schedules
    }
}

impl Default for FeeScheduleHistory {
    fn default() -> Self {
        let mut schedules = BTreeMap::new();
        schedules.insert(0, FeeSchedule::default());
        Self { schedules }
    }
}
