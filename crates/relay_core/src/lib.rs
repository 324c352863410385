//! Shared relay domain primitives.
//!
//! This crate owns the request/response contract and storage-key
//! derivation. It intentionally excludes AWS SDK and Lambda runtime
//! concerns.

pub mod contract;
pub mod storage_keys;
