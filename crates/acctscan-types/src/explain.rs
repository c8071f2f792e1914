//! Explain registry for account rules.
//!
//! Maps rule IDs to human-readable explanations with remediation guidance.

use crate::ids;

/// Explanation entry for a rule.
#[derive(Debug, Clone)]
pub struct Explanation {
    /// Short description of the rule.
    pub title: &'static str,
    /// What the rule checks and why it exists.
    pub description: &'static str,
    /// How to resolve a finding.
    pub remediation: &'static str,
    /// Before/after account record examples.
    pub examples: ExamplePair,
}

/// Before and after account record excerpts.
#[derive(Debug, Clone)]
pub struct ExamplePair {
    /// Record that triggers the rule.
    pub before: &'static str,
    /// Record that passes the rule.
    pub after: &'static str,
}

/// Look up an explanation by rule ID.
///
/// Returns `None` if the identifier is not recognized.
pub fn lookup_explanation(identifier: &str) -> Option<Explanation> {
    match identifier {
        ids::RULE_INACTIVITY => Some(explain_inactivity()),
        ids::RULE_INACTIVE_STATUS => Some(explain_inactive_status()),
        ids::RULE_PASSWORD_AGE => Some(explain_password_age()),
        ids::RULE_FAILED_LOGINS => Some(explain_failed_logins()),
        ids::RULE_MFA_REQUIRED => Some(explain_mfa_required()),
        ids::RULE_PRIVILEGED_WITH_ISSUES => Some(explain_privileged_with_issues()),
        _ => None,
    }
}

/// List all rule IDs in evaluation order.
pub fn all_rule_ids() -> &'static [&'static str] {
    &[
        ids::RULE_INACTIVITY,
        ids::RULE_INACTIVE_STATUS,
        ids::RULE_PASSWORD_AGE,
        ids::RULE_FAILED_LOGINS,
        ids::RULE_MFA_REQUIRED,
        ids::RULE_PRIVILEGED_WITH_ISSUES,
    ]
}

fn explain_inactivity() -> Explanation {
    Explanation {
        title: "Inactive Account",
        description: "\
Flags accounts whose last login is older than `inactive_threshold_days` (default 90).

Dormant accounts are a common foothold:
- nobody notices when their credentials are used
- they often belong to people who changed teams or left

Raises the risk level to high.",
        remediation: "\
Confirm with the account owner's manager whether the account is still needed.
Deactivate it if not; otherwise have the owner sign in and rotate the password.",
        examples: ExamplePair {
            before: r#"{ "username": "jdoe", "lastLogin": "2025-01-02T09:00:00Z" }"#,
            after: r#"{ "username": "jdoe", "lastLogin": "2025-05-30T09:00:00Z" }"#,
        },
    }
}

fn explain_inactive_status() -> Explanation {
    Explanation {
        title: "Inactive Status But Accessible",
        description: "\
Flags accounts whose status is `inactive` but which are still present in the account store.

An account marked inactive is expected to have no access at all. If it can still
authenticate, the status field gives a false sense of safety.

Raises the risk level to high.",
        remediation: "\
Disable sign-in for the account and revoke its sessions and tokens, or remove it
from the store entirely.",
        examples: ExamplePair {
            before: r#"{ "username": "jdoe", "status": "inactive" }"#,
            after: r#"(account disabled and removed from the active directory export)"#,
        },
    }
}

fn explain_password_age() -> Explanation {
    Explanation {
        title: "Stale Password",
        description: "\
Flags accounts whose password has not changed for more than
`password_age_threshold_days` (default 180).

Raises the risk level to medium, or keeps it at high if an earlier rule already raised it.",
        remediation: "\
Force a password reset at next sign-in.",
        examples: ExamplePair {
            before: r#"{ "username": "jdoe", "passwordLastChanged": "2024-09-01T00:00:00Z" }"#,
            after: r#"{ "username": "jdoe", "passwordLastChanged": "2025-05-15T00:00:00Z" }"#,
        },
    }
}

fn explain_failed_logins() -> Explanation {
    Explanation {
        title: "Repeated Failed Logins",
        description: "\
Flags accounts with at least `max_failed_attempts` (default 3) failed login attempts.
The threshold is inclusive.

Repeated failures point to password guessing or credential stuffing.

Raises the risk level to high.",
        remediation: "\
Review the sign-in logs for the source of the attempts, reset the password, and
reset the failed-attempt counter once the account is secured.",
        examples: ExamplePair {
            before: r#"{ "username": "jdoe", "failedLoginAttempts": 5 }"#,
            after: r#"{ "username": "jdoe", "failedLoginAttempts": 0 }"#,
        },
    }
}

fn explain_mfa_required() -> Explanation {
    Explanation {
        title: "MFA Not Enabled",
        description: "\
Flags accounts without multi-factor authentication while `require_mfa` is on.

Raises the risk level to medium, or keeps it at high if an earlier rule already raised it.",
        remediation: "\
Enroll the account in MFA. Prefer phishing-resistant factors where available.",
        examples: ExamplePair {
            before: r#"{ "username": "jdoe", "mfaEnabled": false }"#,
            after: r#"{ "username": "jdoe", "mfaEnabled": true }"#,
        },
    }
}

fn explain_privileged_with_issues() -> Explanation {
    Explanation {
        title: "Privileged Account With Issues",
        description: "\
Flags accounts with role `Admin` (exact match) that already have at least one other finding.

Any weakness on an administrator account is an escalation path. This is the only
rule that raises the risk level to critical.",
        remediation: "\
Review the admin account urgently: resolve every other finding on it first, and
consider whether the account needs standing admin rights at all.",
        examples: ExamplePair {
            before: r#"{ "username": "root-admin", "role": "Admin", "mfaEnabled": false }"#,
            after: r#"{ "username": "root-admin", "role": "Admin", "mfaEnabled": true }"#,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_rule_id_has_an_explanation() {
        for id in all_rule_ids() {
            assert!(lookup_explanation(id).is_some(), "missing explanation for {id}");
        }
    }

    #[test]
    fn unknown_identifier_is_none() {
        assert!(lookup_explanation("account.nope").is_none());
    }
}
