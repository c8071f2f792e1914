use acctscan_domain::policy::RuleConfig;

pub const DEFAULT_PROFILE: &str = "default";

/// Known profile names.
pub const PROFILES: &[&str] = &["default", "strict", "relaxed"];

/// Preset profiles are opinionated defaults.
///
/// Keep these small and readable. Anything site-specific belongs in `acctscan.toml`.
pub fn preset(profile: &str) -> Option<RuleConfig> {
    match profile {
        "default" => Some(RuleConfig::default()),
        "strict" => Some(strict_profile()),
        "relaxed" => Some(relaxed_profile()),
        _ => None,
    }
}

fn strict_profile() -> RuleConfig {
    RuleConfig {
        inactive_threshold_days: 30,
        password_age_threshold_days: 90,
        max_failed_attempts: 3,
        require_mfa: true,
    }
}

fn relaxed_profile() -> RuleConfig {
    RuleConfig {
        inactive_threshold_days: 180,
        password_age_threshold_days: 365,
        max_failed_attempts: 5,
        require_mfa: false,
    }
}
