use acctscan_types::{RiskLevel, ScanReport, ScannedAccount};
use std::cmp::Reverse;
use time::format_description::well_known::Rfc3339;

pub fn render_markdown(report: &ScanReport) -> String {
    let mut out = String::new();
    let summary = &report.summary;

    out.push_str("# Account security report\n\n");
    out.push_str(&format!(
        "- Accounts scanned: **{}**\n- Problematic accounts: **{}**\n- Health score: **{}%**\n- Last scan: {}\n\n",
        summary.total_accounts,
        summary.problematic_accounts,
        summary.health_score(),
        summary
            .last_scan
            .format(&Rfc3339)
            .unwrap_or_else(|_| "unknown".to_string()),
    ));

    out.push_str("| Risk | Accounts | Share |\n|------|---------:|------:|\n");
    for level in RiskLevel::ALL_DESCENDING {
        out.push_str(&format!(
            "| {} | {} | {}% |\n",
            label(level),
            summary.risk_distribution.count(level),
            summary.risk_percentage(level)
        ));
    }
    out.push('\n');

    if !report.rejected.is_empty() {
        out.push_str(&format!(
            "> Note: {} record(s) could not be read and were skipped.\n\n",
            report.rejected.len()
        ));
    }

    let mut problematic: Vec<&ScannedAccount> = report
        .accounts
        .iter()
        .filter(|a| a.scan_results.is_problematic)
        .collect();

    if problematic.is_empty() {
        out.push_str("No problematic accounts.\n");
        return out;
    }

    // Stable: input order is kept within a level.
    problematic.sort_by_key(|a| Reverse(a.scan_results.risk_level));

    out.push_str("## Problematic accounts\n\n");
    for s in problematic {
        let a = &s.account;
        out.push_str(&format!(
            "- [{}] `{}` {} ({}, {})\n",
            label(s.scan_results.risk_level),
            a.username,
            a.full_name(),
            a.role,
            a.department
        ));
        for (issue, recommendation) in s
            .scan_results
            .issues
            .iter()
            .zip(&s.scan_results.recommendations)
        {
            out.push_str(&format!("  - {}\n    - fix: {}\n", issue, recommendation));
        }
    }

    out
}

fn label(level: RiskLevel) -> &'static str {
    match level {
        RiskLevel::Critical => "CRITICAL",
        RiskLevel::High => "HIGH",
        RiskLevel::Medium => "MEDIUM",
        RiskLevel::Low => "LOW",
    }
}
