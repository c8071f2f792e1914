use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::ids;

/// Lifecycle status as recorded by the identity store.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum AccountStatus {
    Active,
    Inactive,
}

/// One user account, read-only to the scanner.
///
/// Field names follow the camelCase wire format of the account store. Timestamps are RFC 3339.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub id: String,
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,

    /// Free text. Only the exact value `Admin` is treated as privileged.
    pub role: String,
    pub department: String,

    pub status: AccountStatus,

    #[schemars(with = "String")]
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,

    #[schemars(with = "String")]
    #[serde(with = "time::serde::rfc3339")]
    pub last_login: OffsetDateTime,

    #[schemars(with = "String")]
    #[serde(with = "time::serde::rfc3339")]
    pub password_last_changed: OffsetDateTime,

    pub failed_login_attempts: u32,
    pub mfa_enabled: bool,
}

impl Account {
    pub fn is_privileged(&self) -> bool {
        self.role == ids::PRIVILEGED_ROLE
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}
