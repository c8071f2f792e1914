//! The fixed account rule table.
//!
//! Each rule is a data-described unit: a stable ID, a detector that produces the issue text,
//! the recommendation, and the risk level it contributes. [`RULES`] is evaluated in order; the
//! order is part of the output contract (issues appear in table order).

use crate::policy::RuleConfig;
use acctscan_types::{Account, RiskLevel, ids};
use time::OffsetDateTime;

mod failed_logins;
mod inactive_status;
mod inactivity;
mod mfa_required;
mod password_age;
mod privileged_with_issues;
mod utils;


pub use utils::days_between;

/// Everything a rule may look at.
#[derive(Clone, Copy, Debug)]
pub struct RuleContext<'a> {
    pub account: &'a Account,
    pub config: &'a RuleConfig,
    pub now: OffsetDateTime,
    /// Issues recorded by earlier rules in this evaluation.
    pub prior_issues: usize,
}

#[derive(Clone, Copy, Debug)]
pub struct Rule {
    pub id: &'static str,
    pub recommendation: &'static str,
    /// Level joined into the running risk when the rule fires.
    pub raises_to: RiskLevel,
    detect: fn(&RuleContext<'_>) -> Option<String>,
}

/// A triggered rule.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RuleHit {
    pub rule_id: &'static str,
    pub issue: String,
    pub recommendation: &'static str,
    pub raises_to: RiskLevel,
}

impl Rule {
    pub fn check(&self, ctx: &RuleContext<'_>) -> Option<RuleHit> {
        (self.detect)(ctx).map(|issue| RuleHit {
            rule_id: self.id,
            issue,
            recommendation: self.recommendation,
            raises_to: self.raises_to,
        })
    }
}

pub static RULES: [Rule; 6] = [
    Rule {
        id: ids::RULE_INACTIVITY,
        recommendation: inactivity::RECOMMENDATION,
        raises_to: RiskLevel::High,
        detect: inactivity::detect,
    },
    Rule {
        id: ids::RULE_INACTIVE_STATUS,
        recommendation: inactive_status::RECOMMENDATION,
        raises_to: RiskLevel::High,
        detect: inactive_status::detect,
    },
    Rule {
        id: ids::RULE_PASSWORD_AGE,
        recommendation: password_age::RECOMMENDATION,
        raises_to: RiskLevel::Medium,
        detect: password_age::detect,
    },
    Rule {
        id: ids::RULE_FAILED_LOGINS,
        recommendation: failed_logins::RECOMMENDATION,
        raises_to: RiskLevel::High,
        detect: failed_logins::detect,
    },
    Rule {
        id: ids::RULE_MFA_REQUIRED,
        recommendation: mfa_required::RECOMMENDATION,
        raises_to: RiskLevel::Medium,
        detect: mfa_required::detect,
    },
    // Must stay last: it looks at how many issues the rules above recorded.
    Rule {
        id: ids::RULE_PRIVILEGED_WITH_ISSUES,
        recommendation: privileged_with_issues::RECOMMENDATION,
        raises_to: RiskLevel::Critical,
        detect: privileged_with_issues::detect,
    },
];
