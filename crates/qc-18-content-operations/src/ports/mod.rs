//! Ports layer for the Content Operations Subsystem

pub mod inbound;

pub use inbound::ContentOperationsApi;
