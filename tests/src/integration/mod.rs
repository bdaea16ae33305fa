//! # Integration Flows
//!
//! End-to-end checks of the content operation pipeline as the block
//! validator drives it: wire bytes in, signer set and fee out.

pub mod content_flows;
