use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

pub const SCHEMA_CONFIG_V1: &str = "acctscan.config.v1";

/// `acctscan.toml` schema v1.
///
/// This is a *user-facing* config model: every key is optional and unknown keys are ignored.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct AcctscanConfigV1 {
    /// Optional schema string for tooling (`acctscan.config.v1`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,

    /// Preset to start from: `default`, `strict` or `relaxed`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile: Option<String>,

    /// Days without a login before an account is flagged as inactive.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inactive_threshold_days: Option<u32>,

    /// Days since the last password change before it is flagged as stale.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password_age_threshold_days: Option<u32>,

    /// Failed login attempts at which an account is flagged (inclusive).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_failed_attempts: Option<u32>,

    /// Flag accounts without multi-factor authentication.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub require_mfa: Option<bool>,
}
