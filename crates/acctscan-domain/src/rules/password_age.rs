use super::RuleContext;
use super::utils::days_between;

pub(super) const RECOMMENDATION: &str = "Enforce password reset";

pub(super) fn detect(ctx: &RuleContext<'_>) -> Option<String> {
    let days = days_between(ctx.account.password_last_changed, ctx.now);
    (days > i64::from(ctx.config.password_age_threshold_days))
        .then(|| format!("Password unchanged for {days} days"))
}
