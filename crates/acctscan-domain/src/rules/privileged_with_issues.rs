use super::RuleContext;

pub(super) const ISSUE: &str = "Privileged account with security issues";
pub(super) const RECOMMENDATION: &str = "Urgent review required for admin account";

pub(super) fn detect(ctx: &RuleContext<'_>) -> Option<String> {
    (ctx.account.is_privileged() && ctx.prior_issues > 0).then(|| ISSUE.to_string())
}
