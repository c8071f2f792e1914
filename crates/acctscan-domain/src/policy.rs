/// Thresholds for the account rules. Supplied once per scanner, immutable during a scan.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RuleConfig {
    /// Days without a login before an account counts as inactive (exclusive).
    pub inactive_threshold_days: u32,
    /// Days since the last password change before it counts as stale (exclusive).
    pub password_age_threshold_days: u32,
    /// Failed attempts at which the account is flagged (inclusive).
    pub max_failed_attempts: u32,
    pub require_mfa: bool,
}

impl Default for RuleConfig {
    fn default() -> Self {
        Self {
            inactive_threshold_days: 90,
            password_age_threshold_days: 180,
            max_failed_attempts: 3,
            require_mfa: true,
        }
    }
}
