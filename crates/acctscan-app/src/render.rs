//! Render use cases: Markdown and CSV from in-memory reports.

use acctscan_render::AccountFilter;
use acctscan_types::ScanReport;

pub fn render_markdown(report: &ScanReport) -> String {
    acctscan_render::render_markdown(report)
}

/// CSV of the accounts passing `filter` and `search`, in report order.
pub fn render_csv(report: &ScanReport, filter: AccountFilter, search: &str) -> String {
    acctscan_render::render_csv(acctscan_render::select_accounts(
        &report.accounts,
        filter,
        search,
    ))
}
