use acctscan_settings::{AcctscanConfigV1, Overrides, ResolvedConfig};
use anyhow::Context;

/// Parse config text and apply overrides. Empty text means defaults.
pub fn load_config(config_text: &str, overrides: Overrides) -> anyhow::Result<ResolvedConfig> {
    let cfg = if config_text.trim().is_empty() {
        AcctscanConfigV1::default()
    } else {
        acctscan_settings::parse_config_toml(config_text).context("parse config")?
    };

    acctscan_settings::resolve_config(cfg, overrides).context("resolve config")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_text_resolves_default_profile() {
        let resolved = load_config("", Overrides::default()).expect("load");
        assert_eq!(resolved.profile, "default");
        assert_eq!(resolved.rules.inactive_threshold_days, 90);
    }

    #[test]
    fn file_threshold_then_override() {
        let text = "profile = \"strict\"\npassword_age_threshold_days = 60\n";
        let resolved = load_config(
            text,
            Overrides {
                inactive_threshold_days: Some(10),
                ..Overrides::default()
            },
        )
        .expect("load");

        assert_eq!(resolved.profile, "strict");
        assert_eq!(resolved.rules.password_age_threshold_days, 60);
        assert_eq!(resolved.rules.inactive_threshold_days, 10);
    }

    #[test]
    fn invalid_toml_has_context() {
        let err = load_config("profile = [", Overrides::default()).expect_err("should fail");
        assert!(format!("{err:#}").starts_with("parse config"));
    }

    #[test]
    fn unknown_profile_has_context() {
        let err = load_config("profile = \"lax\"", Overrides::default()).expect_err("should fail");
        let msg = format!("{err:#}");
        assert!(msg.starts_with("resolve config"));
        assert!(msg.contains("unknown profile: lax"));
    }
}
