//! Fuzz target for rule evaluation.
//!
//! Goal: evaluation should **never panic**, including for timestamps in the future or far past
//! and for extreme thresholds, and the result must stay internally consistent.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_evaluate
//! ```

#![no_main]

use acctscan_domain::policy::RuleConfig;
use acctscan_types::{Account, AccountStatus, RiskLevel};
use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use time::{Duration, OffsetDateTime};

#[derive(Arbitrary, Debug)]
struct EvalInput {
    /// Seconds before `now` of the last login (negative is in the future).
    login_offset_secs: i32,
    password_offset_secs: i32,
    failed_login_attempts: u32,
    mfa_enabled: bool,
    inactive: bool,
    admin: bool,
    inactive_threshold_days: u32,
    password_age_threshold_days: u32,
    max_failed_attempts: u32,
    require_mfa: bool,
}

fuzz_target!(|input: EvalInput| {
    let now = OffsetDateTime::UNIX_EPOCH + Duration::days(20_000);
    let account = Account {
        id: "1".to_string(),
        username: "fuzz".to_string(),
        email: "fuzz@example.com".to_string(),
        first_name: "Fuzz".to_string(),
        last_name: "Target".to_string(),
        role: if input.admin { "Admin" } else { "Developer" }.to_string(),
        department: "QA".to_string(),
        status: if input.inactive {
            AccountStatus::Inactive
        } else {
            AccountStatus::Active
        },
        created_at: OffsetDateTime::UNIX_EPOCH,
        last_login: now - Duration::seconds(i64::from(input.login_offset_secs)),
        password_last_changed: now - Duration::seconds(i64::from(input.password_offset_secs)),
        failed_login_attempts: input.failed_login_attempts,
        mfa_enabled: input.mfa_enabled,
    };
    let cfg = RuleConfig {
        inactive_threshold_days: input.inactive_threshold_days,
        password_age_threshold_days: input.password_age_threshold_days,
        max_failed_attempts: input.max_failed_attempts.max(1),
        require_mfa: input.require_mfa,
    };

    let results = acctscan_domain::evaluate(&account, &cfg, now);

    assert_eq!(results.issues.len(), results.recommendations.len());
    assert_eq!(results.issues.len(), results.rules.len());
    assert_eq!(results.is_problematic, !results.issues.is_empty());
    assert_eq!(results.risk_level == RiskLevel::Low, results.issues.is_empty());
    assert_eq!(results.scanned_at, now);
});
