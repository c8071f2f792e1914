use super::RuleContext;
use super::utils::days_between;

pub(super) const RECOMMENDATION: &str = "Review account activity and consider deactivation";

pub(super) fn detect(ctx: &RuleContext<'_>) -> Option<String> {
    let days = days_between(ctx.account.last_login, ctx.now);
    (days > i64::from(ctx.config.inactive_threshold_days))
        .then(|| format!("Inactive for {days} days"))
}
