use super::RuleContext;

pub(super) const RECOMMENDATION: &str = "Investigate potential security breach and reset account";

pub(super) fn detect(ctx: &RuleContext<'_>) -> Option<String> {
    let attempts = ctx.account.failed_login_attempts;
    (attempts >= ctx.config.max_failed_attempts)
        .then(|| format!("{attempts} failed login attempts"))
}
