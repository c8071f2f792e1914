use acctscan_types::{Account, AccountStatus};
use time::macros::datetime;
use time::{Duration, OffsetDateTime};

pub const NOW: OffsetDateTime = datetime!(2025-06-01 00:00 UTC);

pub fn days_ago(days: i64) -> OffsetDateTime {
    NOW - Duration::days(days)
}

/// An account that triggers no rule under the default configuration.
pub fn compliant_account() -> Account {
    Account {
        id: "1".to_string(),
        username: "jdoe".to_string(),
        email: "jdoe@example.com".to_string(),
        first_name: "Jane".to_string(),
        last_name: "Doe".to_string(),
        role: "Developer".to_string(),
        department: "Engineering".to_string(),
        status: AccountStatus::Active,
        created_at: days_ago(900),
        last_login: days_ago(1),
        password_last_changed: days_ago(30),
        failed_login_attempts: 0,
        mfa_enabled: true,
    }
}
