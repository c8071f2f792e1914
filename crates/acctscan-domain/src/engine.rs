use crate::policy::RuleConfig;
use crate::rules::{RULES, RuleContext, RuleHit};
use acctscan_types::{Account, RiskLevel, ScanResults, ScannedAccount};
use time::OffsetDateTime;

/// A rule evaluator bound to one configuration.
///
/// Constructed per scan by the caller; there is no process-wide instance.
#[derive(Clone, Debug, Default)]
pub struct Scanner {
    config: RuleConfig,
}

impl Scanner {
    pub fn new(config: RuleConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &RuleConfig {
        &self.config
    }

    pub fn evaluate(&self, account: &Account, now: OffsetDateTime) -> ScanResults {
        evaluate(account, &self.config, now)
    }

    pub fn scan(&self, accounts: &[Account], now: OffsetDateTime) -> Vec<ScannedAccount> {
        scan(accounts, &self.config, now)
    }
}

/// Evaluate one account against the rule table.
pub fn evaluate(account: &Account, cfg: &RuleConfig, now: OffsetDateTime) -> ScanResults {
    RULES
        .iter()
        .fold(Assessment::default(), |acc, rule| {
            let ctx = RuleContext {
                account,
                config: cfg,
                now,
                prior_issues: acc.issues.len(),
            };
            match rule.check(&ctx) {
                Some(hit) => acc.record(hit),
                None => acc,
            }
        })
        .into_results(now)
}

/// Evaluate every account independently. Output order follows input order.
pub fn scan(accounts: &[Account], cfg: &RuleConfig, now: OffsetDateTime) -> Vec<ScannedAccount> {
    accounts
        .iter()
        .map(|account| ScannedAccount {
            account: account.clone(),
            scan_results: evaluate(account, cfg, now),
        })
        .collect()
}

/// Accumulator threaded through the rule table.
#[derive(Debug, Default)]
struct Assessment {
    issues: Vec<String>,
    recommendations: Vec<String>,
    rules: Vec<String>,
    risk: RiskLevel,
}

impl Assessment {
    fn record(mut self, hit: RuleHit) -> Self {
        self.issues.push(hit.issue);
        self.recommendations.push(hit.recommendation.to_string());
        self.rules.push(hit.rule_id.to_string());
        self.risk = self.risk.join(hit.raises_to);
        self
    }

    fn into_results(self, now: OffsetDateTime) -> ScanResults {
        ScanResults {
            is_problematic: !self.issues.is_empty(),
            issues: self.issues,
            recommendations: self.recommendations,
            risk_level: self.risk,
            scanned_at: now,
            rules: self.rules,
        }
    }
}
