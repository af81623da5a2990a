//! Credit-default risk evaluation for loan applications.
//!
//! The `pipeline` module carries the request-to-decision flow: validation,
//! feature derivation, scoring (trained artifact with a deterministic
//! rule-based fallback), risk classification, decision policy, explanation,
//! and batch orchestration. `config`, `telemetry`, and `error` provide the
//! service plumbing shared with the API binary.

pub mod config;
pub mod error;
pub mod pipeline;
pub mod telemetry;
