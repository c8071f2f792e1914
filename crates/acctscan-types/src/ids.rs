//! Stable identifiers for the account rules.
//!
//! `rule_id` is a dotted namespace. The order of this list is the evaluation order.

pub const RULE_INACTIVITY: &str = "account.inactivity";
pub const RULE_INACTIVE_STATUS: &str = "account.inactive_status";
pub const RULE_PASSWORD_AGE: &str = "account.password_age";
pub const RULE_FAILED_LOGINS: &str = "account.failed_logins";
pub const RULE_MFA_REQUIRED: &str = "account.mfa_required";
pub const RULE_PRIVILEGED_WITH_ISSUES: &str = "account.privileged_with_issues";

/// Role name that marks an account as privileged (exact match).
pub const PRIVILEGED_ROLE: &str = "Admin";
