use acctscan_types::{Account, AccountStatus, RiskLevel, ScanResults, ScannedAccount, ids};
use time::OffsetDateTime;
use time::macros::datetime;

pub const NOW: OffsetDateTime = datetime!(2025-06-01 00:00 UTC);

fn account(id: &str, username: &str) -> Account {
    Account {
        id: id.to_string(),
        username: username.to_string(),
        email: format!("{username}@example.com"),
        first_name: "Test".to_string(),
        last_name: "User".to_string(),
        role: "Developer".to_string(),
        department: "Engineering".to_string(),
        status: AccountStatus::Active,
        created_at: datetime!(2023-01-01 00:00 UTC),
        last_login: datetime!(2025-05-30 00:00 UTC),
        password_last_changed: datetime!(2025-05-01 00:00 UTC),
        failed_login_attempts: 0,
        mfa_enabled: true,
    }
}

pub fn clean_account(id: &str, username: &str) -> ScannedAccount {
    ScannedAccount {
        account: account(id, username),
        scan_results: ScanResults {
            issues: Vec::new(),
            recommendations: Vec::new(),
            risk_level: RiskLevel::Low,
            is_problematic: false,
            scanned_at: NOW,
            rules: Vec::new(),
        },
    }
}

pub fn problematic_account(id: &str, username: &str) -> ScannedAccount {
    let mut a = account(id, username);
    a.last_login = datetime!(2025-02-01 00:00 UTC);
    a.failed_login_attempts = 4;
    ScannedAccount {
        account: a,
        scan_results: ScanResults {
            issues: vec![
                "Inactive for 120 days".to_string(),
                "4 failed login attempts".to_string(),
            ],
            recommendations: vec![
                "Review account activity and consider deactivation".to_string(),
                "Investigate potential security breach and reset account".to_string(),
            ],
            risk_level: RiskLevel::High,
            is_problematic: true,
            scanned_at: NOW,
            rules: vec![
                ids::RULE_INACTIVITY.to_string(),
                ids::RULE_FAILED_LOGINS.to_string(),
            ],
        },
    }
}
