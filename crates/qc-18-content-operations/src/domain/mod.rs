//! # Domain Layer - Content Operations Subsystem
//!
//! Pure functions over immutable inputs. Nothing here performs I/O, logs, or
//! holds shared state, so independent operations can be checked on parallel
//! workers without synchronisation.
//!
//! ## Components
//!
//! - `operations`: operation variants and their wire field order
//! - `extensions`: forward-compatible extension bag
//! - `validation`: structural validator
//! - `authority`: required signer resolution
//! - `fees`: fee parameter records and the fee calculator
//! - `value_objects`: `ValidatedOperation`
//! - `errors`: `ValidationError`, `CodecError`, `ConfigError`

pub mod authority;
pub mod errors;
pub mod extensions;
pub mod fees;
pub mod operations;
pub mod validation;
pub mod value_objects;

pub use authority::*;
pub use errors::*;
pub use extensions::*;
pub use fees::*;
pub use operations::*;
pub use validation::*;
pub use value_objects::*;
