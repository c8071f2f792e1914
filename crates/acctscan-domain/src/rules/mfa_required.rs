use super::RuleContext;

pub(super) const ISSUE: &str = "Multi-factor authentication not enabled";
pub(super) const RECOMMENDATION: &str = "Enable MFA for enhanced security";

pub(super) fn detect(ctx: &RuleContext<'_>) -> Option<String> {
    (ctx.config.require_mfa && !ctx.account.mfa_enabled).then(|| ISSUE.to_string())
}
