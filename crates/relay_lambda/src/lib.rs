//! AWS-oriented adapters and handler for the event relay.
//!
//! This crate owns runtime integration details (the Lambda handler,
//! clock and storage adapters, and the runtime binary) and exposes a
//! single runtime module boundary for contract and storage-key
//! primitives.

pub mod adapters;
pub mod handlers;
pub mod runtime;
