//! # Content Operations Subsystem
//!
//! **Subsystem ID:** 18
//!
//! ## Purpose
//!
//! Decides, for every content-platform operation in a block, whether it is
//! well-formed, whose signatures it needs and what fee it costs. Outputs must
//! be bit-identical on every validating node; any divergence forks the chain.
//! This subsystem never applies an operation's effects to chain state.
//!
//! ## Operations
//!
//! | Operation | Fee payer | Required authority |
//! |-----------|-----------|--------------------|
//! | `PlatformCreate` | `account` | `account` active |
//! | `PlatformUpdate` | `account` | `account` active |
//! | `PlatformVoteUpdate` | `voter` | `voter` active |
//! | `Post` | `poster` | `poster` + `platform` secondary |
//! | `PostUpdate` | `poster` | `poster` + `platform` secondary |
//!
//! ## Pipeline
//!
//! ```text
//! bytes ──decode──→ Operation ──validate──→ required_authorities ──compute_fee──→ ValidatedOperation
//!                      │              │                                 │
//!                      └──────────────┴──── ValidationError ←───────────┘
//! ```
//!
//! ## Module Structure (Hexagonal Architecture)
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │  service.rs - ContentValidationService (schedule by height,     │
//! │               batch validation on rayon workers)                │
//! └─────────────────────────────────────────────────────────────────┘
//!                          ↑ implements ↑
//! ┌─────────────────────────────────────────────────────────────────┐
//! │  ports/inbound.rs - ContentOperationsApi trait                  │
//! └─────────────────────────────────────────────────────────────────┘
//!                          ↑ uses ↑
//! ┌─────────────────────────────────────────────────────────────────┐
//! │  domain/operations.rs  - Operation variants, wire field order   │
//! │  domain/extensions.rs  - Extension bag, known post extensions   │
//! │  domain/validation.rs  - Structural validator                   │
//! │  domain/authority.rs   - Required signer resolution             │
//! │  domain/fees.rs        - Fee parameters and calculator          │
//! │  codec.rs              - Consensus wire encoding                │
//! │  config.rs             - Versioned fee schedules                │
//! └─────────────────────────────────────────────────────────────────┘
//! ```

pub mod codec;
pub mod config;
pub mod domain;
pub mod ports;
pub mod service;

pub use config::{FeeScheduleHistory, ServiceConfig};
pub use domain::*;
pub use ports::inbound::ContentOperationsApi;
pub use service::ContentValidationService;
