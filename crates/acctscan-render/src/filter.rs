use acctscan_types::ScannedAccount;
use std::fmt;
use std::str::FromStr;

/// Which accounts to list.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AccountFilter {
    #[default]
    All,
    /// Accounts with at least one issue.
    Problematic,
    /// Accounts with no issues.
    Clean,
}

impl AccountFilter {
    pub fn matches(self, account: &ScannedAccount) -> bool {
        match self {
            AccountFilter::All => true,
            AccountFilter::Problematic => account.scan_results.is_problematic,
            AccountFilter::Clean => !account.scan_results.is_problematic,
        }
    }
}

impl FromStr for AccountFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(AccountFilter::All),
            "problematic" => Ok(AccountFilter::Problematic),
            "clean" => Ok(AccountFilter::Clean),
            other => Err(format!(
                "unknown filter: {other} (expected all|problematic|clean)"
            )),
        }
    }
}

impl fmt::Display for AccountFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            AccountFilter::All => "all",
            AccountFilter::Problematic => "problematic",
            AccountFilter::Clean => "clean",
        })
    }
}

/// Case-insensitive substring match over name, email, username, role and department.
/// An empty term matches every account.
pub fn matches_search(account: &ScannedAccount, term: &str) -> bool {
    if term.is_empty() {
        return true;
    }
    let needle = term.to_lowercase();
    let a = &account.account;
    [
        &a.first_name,
        &a.last_name,
        &a.email,
        &a.username,
        &a.role,
        &a.department,
    ]
    .iter()
    .any(|field| field.to_lowercase().contains(&needle))
}

/// Accounts passing both the filter and the search term, in input order.
pub fn select_accounts<'a>(
    accounts: &'a [ScannedAccount],
    filter: AccountFilter,
    search: &str,
) -> Vec<&'a ScannedAccount> {
    accounts
        .iter()
        .filter(|a| filter.matches(a) && matches_search(a, search))
        .collect()
}
