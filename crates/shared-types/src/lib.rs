//! # Shared Types Crate
//!
//! Chain primitives used by the operation subsystems.
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: identifier widths, asset layout and authority
//!   tiers are defined once here so that every validating node encodes them
//!   identically.
//! - **Fixed Width**: account and post identifiers are plain `u64` values; they
//!   are encoded as fixed-width little-endian integers on the wire.

pub mod entities;

pub use entities::*;
