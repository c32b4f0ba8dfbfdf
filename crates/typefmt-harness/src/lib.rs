//! Conformance harness for typefmt.
//!
//! This crate provides:
//! - Fixture verify: run JSON fixture sets through the engine and compare
//! - Structured JSONL logging with an artifact index
//! - Report generation: human-readable + machine-readable conformance reports
//! - Template inspection for the `harness parse` command

#![forbid(unsafe_code)]

pub mod diff;
pub mod error;
pub mod fixtures;
pub mod inspect;
pub mod report;
pub mod runner;
pub mod structured_log;
pub mod verify;

pub use error::HarnessError;
pub use fixtures::{FixtureArg, FixtureCase, FixtureSet};
pub use report::ConformanceReport;
pub use runner::TestRunner;
pub use verify::{VerificationResult, VerificationSummary};
