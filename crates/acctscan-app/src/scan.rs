//! The scan use cases: load accounts, evaluate them, and summarize.

use crate::clock::Clock;
use acctscan_domain::Scanner;
use acctscan_domain::policy::RuleConfig;
use acctscan_store::{AccountSource, LoadedAccounts};
use acctscan_types::{RiskLevel, SCAN_COMPLETED_MESSAGE, ScanReport, ScanSummary, ScannedAccount};
use anyhow::Context;
use std::sync::Arc;

/// Account store, rule evaluator and clock, wired together.
///
/// Immutable once built; share it behind an `Arc`.
#[derive(Clone)]
pub struct ScanService {
    source: Arc<dyn AccountSource>,
    scanner: Scanner,
    clock: Arc<dyn Clock>,
}

impl ScanService {
    pub fn new(source: Arc<dyn AccountSource>, rules: RuleConfig, clock: Arc<dyn Clock>) -> Self {
        Self {
            source,
            scanner: Scanner::new(rules),
            clock,
        }
    }

    pub fn rules(&self) -> &RuleConfig {
        self.scanner.config()
    }

    /// Every readable account with fresh scan results, in store order.
    pub fn accounts(&self) -> anyhow::Result<Vec<ScannedAccount>> {
        Ok(self.trigger_scan()?.accounts)
    }

    /// One account by id, or `None` when the store has no such record.
    pub fn account(&self, id: &str) -> anyhow::Result<Option<ScannedAccount>> {
        let loaded = self.load()?;
        let now = self.clock.now();
        Ok(loaded
            .accounts
            .into_iter()
            .find(|a| a.id == id)
            .map(|account| ScannedAccount {
                scan_results: self.scanner.evaluate(&account, now),
                account,
            }))
    }

    pub fn summary(&self) -> anyhow::Result<ScanSummary> {
        Ok(self.trigger_scan()?.summary)
    }

    /// Load once, evaluate all, summarize. The clock is read once so every result and the
    /// summary share one timestamp.
    pub fn trigger_scan(&self) -> anyhow::Result<ScanReport> {
        let LoadedAccounts { accounts, rejected } = self.load()?;
        let now = self.clock.now();

        let scanned = self.scanner.scan(&accounts, now);
        let summary = acctscan_domain::summarize(&scanned, now);

        tracing::info!(
            accounts = summary.total_accounts,
            problematic = summary.problematic_accounts,
            critical = summary.risk_distribution.count(RiskLevel::Critical),
            rejected = rejected.len(),
            "scan completed"
        );

        Ok(ScanReport {
            message: SCAN_COMPLETED_MESSAGE.to_string(),
            summary,
            accounts: scanned,
            rejected,
        })
    }

    fn load(&self) -> anyhow::Result<LoadedAccounts> {
        self.source.load().context("load accounts")
    }
}
