use acctscan_types::{RiskLevel, ScanReport};
use anyhow::Context;
use std::fmt;
use std::str::FromStr;

/// Parse a scan report previously written by `acctscan scan`.
pub fn parse_report_json(text: &str) -> anyhow::Result<ScanReport> {
    serde_json::from_str(text).context("parse report json")
}

pub fn serialize_report(report: &ScanReport) -> anyhow::Result<Vec<u8>> {
    let mut data = serde_json::to_vec_pretty(report).context("serialize report")?;
    data.push(b'\n');
    Ok(data)
}

/// Lowest risk level that makes `acctscan scan` exit with status 2.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FailOn {
    #[default]
    None,
    Level(RiskLevel),
}

impl FromStr for FailOn {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "none" => Ok(FailOn::None),
            "medium" => Ok(FailOn::Level(RiskLevel::Medium)),
            "high" => Ok(FailOn::Level(RiskLevel::High)),
            "critical" => Ok(FailOn::Level(RiskLevel::Critical)),
            other => Err(format!(
                "unknown fail-on level: {other} (expected none|medium|high|critical)"
            )),
        }
    }
}

impl fmt::Display for FailOn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailOn::None => f.write_str("none"),
            FailOn::Level(level) => f.write_str(level.as_str()),
        }
    }
}

/// 2 when some account is at or above the fail-on level, else 0.
pub fn fail_on_exit_code(report: &ScanReport, fail_on: FailOn) -> i32 {
    let FailOn::Level(threshold) = fail_on else {
        return 0;
    };
    let tripped = report
        .accounts
        .iter()
        .any(|a| a.scan_results.risk_level >= threshold);
    if tripped { 2 } else { 0 }
}
