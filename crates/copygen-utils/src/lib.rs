//! Foundation utilities shared by the copygen crates
//!
//! - `error`: error taxonomy and the `UserFriendlyError` trait
//! - `exit_codes`: CLI exit code contract
//! - `logging`: tracing subscriber setup and generation log helpers
//! - `redaction`: scrubbing of credentials from error text
//! - `types`: small shared value types

pub mod error;
pub mod exit_codes;
pub mod logging;
pub mod redaction;
pub mod types;
