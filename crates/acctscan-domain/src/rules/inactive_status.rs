use super::RuleContext;
use acctscan_types::AccountStatus;

pub(super) const ISSUE: &str = "Account marked as inactive but still accessible";
pub(super) const RECOMMENDATION: &str = "Disable account access immediately";

pub(super) fn detect(ctx: &RuleContext<'_>) -> Option<String> {
    (ctx.account.status == AccountStatus::Inactive).then(|| ISSUE.to_string())
}
