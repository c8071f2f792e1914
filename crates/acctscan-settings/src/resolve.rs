use crate::{model::AcctscanConfigV1, presets};
use acctscan_domain::policy::RuleConfig;

/// Command-line overrides. Each set field wins over the config file.
#[derive(Clone, Debug, Default)]
pub struct Overrides {
    pub profile: Option<String>,
    pub inactive_threshold_days: Option<u32>,
    pub password_age_threshold_days: Option<u32>,
    pub max_failed_attempts: Option<u32>,
    pub require_mfa: Option<bool>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolvedConfig {
    pub profile: String,
    pub rules: RuleConfig,
}

pub fn resolve_config(
    cfg: AcctscanConfigV1,
    overrides: Overrides,
) -> anyhow::Result<ResolvedConfig> {
    let profile = overrides
        .profile
        .clone()
        .or(cfg.profile.clone())
        .unwrap_or_else(|| presets::DEFAULT_PROFILE.to_string());

    let Some(mut rules) = presets::preset(&profile) else {
        anyhow::bail!(
            "unknown profile: {profile} (expected one of {})",
            presets::PROFILES.join("|")
        );
    };

    if let Some(days) = overrides
        .inactive_threshold_days
        .or(cfg.inactive_threshold_days)
    {
        rules.inactive_threshold_days = days;
    }
    if let Some(days) = overrides
        .password_age_threshold_days
        .or(cfg.password_age_threshold_days)
    {
        rules.password_age_threshold_days = days;
    }
    if let Some(max) = overrides.max_failed_attempts.or(cfg.max_failed_attempts) {
        if max == 0 {
            anyhow::bail!("max_failed_attempts must be at least 1 (0 flags every account)");
        }
        rules.max_failed_attempts = max;
    }
    if let Some(require) = overrides.require_mfa.or(cfg.require_mfa) {
        rules.require_mfa = require;
    }

    Ok(ResolvedConfig { profile, rules })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse_config_toml;

    #[test]
    fn empty_config_resolves_to_default_profile() {
        let resolved =
            resolve_config(AcctscanConfigV1::default(), Overrides::default()).expect("resolve");
        assert_eq!(resolved.profile, "default");
        assert_eq!(resolved.rules, RuleConfig::default());
    }

    #[test]
    fn file_thresholds_apply_on_top_of_profile() {
        let cfg = parse_config_toml(
            r#"
profile = "strict"
password_age_threshold_days = 60
require_mfa = false
"#,
        )
        .expect("parse");

        let resolved = resolve_config(cfg, Overrides::default()).expect("resolve");
        assert_eq!(resolved.profile, "strict");
        assert_eq!(resolved.rules.inactive_threshold_days, 30);
        assert_eq!(resolved.rules.password_age_threshold_days, 60);
        assert!(!resolved.rules.require_mfa);
    }

    #[test]
    fn overrides_win_over_file() {
        let cfg = parse_config_toml(
            r#"
profile = "relaxed"
inactive_threshold_days = 200
max_failed_attempts = 10
"#,
        )
        .expect("parse");

        let overrides = Overrides {
            profile: Some("default".to_string()),
            inactive_threshold_days: Some(45),
            require_mfa: Some(false),
            ..Overrides::default()
        };

        let resolved = resolve_config(cfg, overrides).expect("resolve");
        assert_eq!(resolved.profile, "default");
        assert_eq!(resolved.rules.inactive_threshold_days, 45);
        assert_eq!(resolved.rules.password_age_threshold_days, 180);
        assert_eq!(resolved.rules.max_failed_attempts, 10);
        assert!(!resolved.rules.require_mfa);
    }

    #[test]
    fn unknown_profile_is_an_error() {
        let cfg = AcctscanConfigV1 {
            profile: Some("paranoid".to_string()),
            ..AcctscanConfigV1::default()
        };
        let err = resolve_config(cfg, Overrides::default()).expect_err("unknown profile");
        assert!(err.to_string().contains("unknown profile: paranoid"));
    }

    #[test]
    fn zero_max_failed_attempts_is_rejected() {
        let overrides = Overrides {
            max_failed_attempts: Some(0),
            ..Overrides::default()
        };
        assert!(resolve_config(AcctscanConfigV1::default(), overrides).is_err());
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let cfg = parse_config_toml(
            r#"
schema = "acctscan.config.v1"
future_option = true
"#,
        )
        .expect("parse");
        assert_eq!(cfg.schema.as_deref(), Some("acctscan.config.v1"));
    }

    #[test]
    fn wrongly_typed_threshold_is_a_parse_error() {
        assert!(parse_config_toml("inactive_threshold_days = \"ninety\"").is_err());
        assert!(parse_config_toml("max_failed_attempts = -1").is_err());
    }
}
