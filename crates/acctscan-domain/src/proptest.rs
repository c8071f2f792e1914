//! Property-based tests for the domain crate.
//!
//! These tests use proptest to verify invariants around:
//! - finding shape (parallel issue/recommendation/rule lists)
//! - risk monotonicity and the privilege escalation rule
//! - summary partitioning
//! - determinism for a fixed evaluation time

use crate::engine::evaluate;
use crate::policy::RuleConfig;
use crate::rules::{RULES, RuleContext};
use crate::summary::summarize;
use crate::test_support::NOW;
use crate::{Scanner, scan};
use acctscan_types::{Account, AccountStatus, RiskLevel, ids};
use proptest::prelude::*;
use time::Duration;

// ============================================================================
// Strategies
// ============================================================================

fn arb_role() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("Admin".to_string()),
        Just("admin".to_string()),
        Just("Developer".to_string()),
        Just("Manager".to_string()),
        prop::string::string_regex("[A-Z][a-z]{2,10}").unwrap(),
    ]
}

fn arb_status() -> impl Strategy<Value = AccountStatus> {
    prop_oneof![Just(AccountStatus::Active), Just(AccountStatus::Inactive)]
}

/// Minutes before `NOW`; negative values are future timestamps.
fn arb_minutes_ago() -> impl Strategy<Value = i64> {
    -10_000i64..1_000_000
}

fn arb_account() -> impl Strategy<Value = Account> {
    (
        "[a-z]{1,8}",
        arb_role(),
        arb_status(),
        arb_minutes_ago(),
        arb_minutes_ago(),
        0u32..10,
        any::<bool>(),
    )
        .prop_map(
            |(username, role, status, login_ago, password_ago, failed, mfa)| Account {
                id: username.clone(),
                email: format!("{username}@example.com"),
                username,
                first_name: "Test".to_string(),
                last_name: "User".to_string(),
                role,
                department: "Engineering".to_string(),
                status,
                created_at: NOW - Duration::days(2_000),
                last_login: NOW - Duration::minutes(login_ago),
                password_last_changed: NOW - Duration::minutes(password_ago),
                failed_login_attempts: failed,
                mfa_enabled: mfa,
            },
        )
}

fn arb_config() -> impl Strategy<Value = RuleConfig> {
    (0u32..400, 0u32..400, 1u32..10, any::<bool>()).prop_map(
        |(inactive, password, failed, mfa)| RuleConfig {
            inactive_threshold_days: inactive,
            password_age_threshold_days: password,
            max_failed_attempts: failed,
            require_mfa: mfa,
        },
    )
}

/// Replay the rule table step by step, returning the running risk after each rule and the
/// number of issues recorded before the privilege rule.
fn replay(account: &Account, cfg: &RuleConfig) -> (Vec<RiskLevel>, usize) {
    let mut risk = RiskLevel::Low;
    let mut issues = 0usize;
    let mut before_privilege = 0usize;
    let mut trail = Vec::new();
    for rule in &RULES {
        if rule.id == ids::RULE_PRIVILEGED_WITH_ISSUES {
            before_privilege = issues;
        }
        let ctx = RuleContext {
            account,
            config: cfg,
            now: NOW,
            prior_issues: issues,
        };
        if let Some(hit) = rule.check(&ctx) {
            issues += 1;
            risk = risk.join(hit.raises_to);
        }
        trail.push(risk);
    }
    (trail, before_privilege)
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #[test]
    fn parallel_lists_have_equal_length(account in arb_account(), cfg in arb_config()) {
        let results = evaluate(&account, &cfg, NOW);
        prop_assert_eq!(results.issues.len(), results.recommendations.len());
        prop_assert_eq!(results.issues.len(), results.rules.len());
        prop_assert_eq!(results.is_problematic, !results.issues.is_empty());
    }

    #[test]
    fn low_iff_no_issues(account in arb_account(), cfg in arb_config()) {
        let results = evaluate(&account, &cfg, NOW);
        prop_assert_eq!(results.risk_level == RiskLevel::Low, results.issues.is_empty());
    }

    #[test]
    fn risk_never_decreases_across_rules(account in arb_account(), cfg in arb_config()) {
        let (trail, _) = replay(&account, &cfg);
        for pair in trail.windows(2) {
            prop_assert!(pair[0] <= pair[1]);
        }
        let results = evaluate(&account, &cfg, NOW);
        prop_assert_eq!(trail.last().copied(), Some(results.risk_level));
    }

    #[test]
    fn privilege_rule_fires_iff_admin_with_prior_issues(
        account in arb_account(),
        cfg in arb_config(),
    ) {
        let (_, before_privilege) = replay(&account, &cfg);
        let results = evaluate(&account, &cfg, NOW);
        let fired = results
            .rules
            .iter()
            .any(|r| r == ids::RULE_PRIVILEGED_WITH_ISSUES);

        prop_assert_eq!(fired, account.role == "Admin" && before_privilege > 0);
        prop_assert_eq!(fired, results.risk_level == RiskLevel::Critical);
        if fired {
            prop_assert_eq!(
                results.rules.last().map(String::as_str),
                Some(ids::RULE_PRIVILEGED_WITH_ISSUES)
            );
        }
    }

    #[test]
    fn issues_follow_table_order(account in arb_account(), cfg in arb_config()) {
        let results = evaluate(&account, &cfg, NOW);
        let positions: Vec<usize> = results
            .rules
            .iter()
            .map(|id| RULES.iter().position(|r| r.id == id).expect("known rule"))
            .collect();
        for pair in positions.windows(2) {
            prop_assert!(pair[0] < pair[1]);
        }
    }

    #[test]
    fn tightening_thresholds_only_adds_issues(account in arb_account(), cfg in arb_config()) {
        let tighter = RuleConfig {
            inactive_threshold_days: cfg.inactive_threshold_days / 2,
            password_age_threshold_days: cfg.password_age_threshold_days / 2,
            max_failed_attempts: (cfg.max_failed_attempts / 2).max(1),
            require_mfa: true,
        };
        let loose = evaluate(&account, &cfg, NOW);
        let strict = evaluate(&account, &tighter, NOW);
        prop_assert!(strict.issues.len() >= loose.issues.len());
        prop_assert!(strict.risk_level >= loose.risk_level);
        for id in &loose.rules {
            prop_assert!(strict.rules.contains(id));
        }
    }

    #[test]
    fn summary_partitions_all_accounts(
        accounts in prop::collection::vec(arb_account(), 0..40),
        cfg in arb_config(),
    ) {
        let scanned = scan(&accounts, &cfg, NOW);
        let summary = summarize(&scanned, NOW);
        let dist = summary.risk_distribution;

        prop_assert_eq!(summary.total_accounts as usize, accounts.len());
        prop_assert_eq!(dist.critical + dist.high + dist.medium + dist.low, summary.total_accounts);
        prop_assert!(summary.problematic_accounts <= summary.total_accounts);
        prop_assert_eq!(summary.problematic_accounts, dist.critical + dist.high + dist.medium);
    }

    #[test]
    fn evaluation_is_deterministic(
        accounts in prop::collection::vec(arb_account(), 0..10),
        cfg in arb_config(),
    ) {
        let scanner = Scanner::new(cfg);
        let first = scanner.scan(&accounts, NOW);
        let second = scanner.scan(&accounts, NOW);

        let a = serde_json::to_vec(&(&first, summarize(&first, NOW))).expect("serialize");
        let b = serde_json::to_vec(&(&second, summarize(&second, NOW))).expect("serialize");
        prop_assert_eq!(a, b);
    }

    #[test]
    fn scan_is_order_insensitive_per_account(
        accounts in prop::collection::vec(arb_account(), 1..10),
        cfg in arb_config(),
    ) {
        let mut reversed = accounts.clone();
        reversed.reverse();

        let forward = scan(&accounts, &cfg, NOW);
        let mut backward = scan(&reversed, &cfg, NOW);
        backward.reverse();
        prop_assert_eq!(forward, backward);
    }
}
