use crate::Account;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// Message carried by every completed scan report.
pub const SCAN_COMPLETED_MESSAGE: &str = "Scan completed successfully";

/// Ordinal risk classification. Variant order is the severity order.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    #[default]
    Low,
    Medium,
    High,
    Critical,
}

impl RiskLevel {
    /// All levels, most severe first.
    pub const ALL_DESCENDING: [RiskLevel; 4] = [
        RiskLevel::Critical,
        RiskLevel::High,
        RiskLevel::Medium,
        RiskLevel::Low,
    ];

    /// Least upper bound on `low < medium < high < critical`.
    pub fn join(self, other: RiskLevel) -> RiskLevel {
        self.max(other)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            RiskLevel::Low => "low",
            RiskLevel::Medium => "medium",
            RiskLevel::High => "high",
            RiskLevel::Critical => "critical",
        }
    }
}

/// Per-account outcome of one scan.
///
/// `issues`, `recommendations` and `rules` are parallel: entry `i` of each comes from the same
/// triggered rule, in evaluation order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ScanResults {
    pub issues: Vec<String>,
    pub recommendations: Vec<String>,
    pub risk_level: RiskLevel,
    pub is_problematic: bool,
    #[schemars(with = "String")]
    #[serde(with = "time::serde::rfc3339")]
    pub scanned_at: OffsetDateTime,

    /// Rule IDs that fired.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub rules: Vec<String>,
}

/// An account together with its scan results (the shape the dashboard consumes).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ScannedAccount {
    #[serde(flatten)]
    pub account: Account,
    pub scan_results: ScanResults,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct RiskDistribution {
    pub critical: u32,
    pub high: u32,
    pub medium: u32,
    pub low: u32,
}

impl RiskDistribution {
    pub fn record(&mut self, level: RiskLevel) {
        match level {
            RiskLevel::Critical => self.critical = self.critical.saturating_add(1),
            RiskLevel::High => self.high = self.high.saturating_add(1),
            RiskLevel::Medium => self.medium = self.medium.saturating_add(1),
            RiskLevel::Low => self.low = self.low.saturating_add(1),
        }
    }

    pub fn count(&self, level: RiskLevel) -> u32 {
        match level {
            RiskLevel::Critical => self.critical,
            RiskLevel::High => self.high,
            RiskLevel::Medium => self.medium,
            RiskLevel::Low => self.low,
        }
    }

    pub fn total(&self) -> u32 {
        self.critical
            .saturating_add(self.high)
            .saturating_add(self.medium)
            .saturating_add(self.low)
    }
}

/// Aggregate over one scan. Recomputed on every scan, never persisted.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ScanSummary {
    pub total_accounts: u32,
    pub problematic_accounts: u32,
    pub risk_distribution: RiskDistribution,
    #[schemars(with = "String")]
    #[serde(with = "time::serde::rfc3339")]
    pub last_scan: OffsetDateTime,
}

impl ScanSummary {
    /// Share of accounts at `level`, as a whole percentage (0 when there are no accounts).
    pub fn risk_percentage(&self, level: RiskLevel) -> u32 {
        rounded_percent(self.risk_distribution.count(level), self.total_accounts)
    }

    /// Share of accounts without issues, as a whole percentage (0 when there are no accounts).
    pub fn health_score(&self) -> u32 {
        let healthy = self
            .total_accounts
            .saturating_sub(self.problematic_accounts);
        rounded_percent(healthy, self.total_accounts)
    }
}

// Rounds half up, integer-only.
fn rounded_percent(part: u32, total: u32) -> u32 {
    if total == 0 {
        return 0;
    }
    let (part, total) = (u64::from(part), u64::from(total));
    ((200 * part + total) / (2 * total)) as u32
}

/// An account entry the store could not decode. It is excluded from the scan.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct RejectedRecord {
    /// Zero-based position in the source collection.
    pub index: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub reason: String,
}

/// Body of a full scan: what `POST /api/scan/trigger` and `acctscan scan` emit.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ScanReport {
    pub message: String,
    pub summary: ScanSummary,
    pub accounts: Vec<ScannedAccount>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub rejected: Vec<RejectedRecord>,
}
