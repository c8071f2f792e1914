//! Stable DTOs and IDs used across the acctscan workspace.
//!
//! This crate is intentionally boring:
//! - account records as supplied by the account store
//! - per-account scan results and the aggregate summary
//! - stable rule IDs
//! - explain registry for remediation guidance

#![forbid(unsafe_code)]

pub mod account;
pub mod explain;
pub mod ids;
pub mod report;

pub use account::{Account, AccountStatus};
pub use explain::{ExamplePair, Explanation, lookup_explanation};
pub use report::{
    RejectedRecord, RiskDistribution, RiskLevel, SCAN_COMPLETED_MESSAGE, ScanReport, ScanResults,
    ScanSummary, ScannedAccount,
};
