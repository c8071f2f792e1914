use acctscan_types::{RiskDistribution, ScanSummary, ScannedAccount};
use time::OffsetDateTime;

/// Reduce a batch of scanned accounts to counts. Single pass; every account lands in exactly one
/// risk bucket.
pub fn summarize(scanned: &[ScannedAccount], now: OffsetDateTime) -> ScanSummary {
    let mut risk_distribution = RiskDistribution::default();
    let mut problematic_accounts = 0u32;

    for s in scanned {
        risk_distribution.record(s.scan_results.risk_level);
        if s.scan_results.is_problematic {
            problematic_accounts = problematic_accounts.saturating_add(1);
        }
    }

    ScanSummary {
        total_accounts: saturating_count(scanned.len()),
        problematic_accounts,
        risk_distribution,
        last_scan: now,
    }
}

/// Counts on the wire are `u32`; larger batches pin at `u32::MAX`.
fn saturating_count(n: usize) -> u32 {
    u32::try_from(n).unwrap_or(u32::MAX)
}
