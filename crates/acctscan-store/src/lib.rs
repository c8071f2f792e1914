//! Account store adapters: read account records and hand them to the scanner.
//!
//! This crate is allowed to do filesystem IO. Records are validated one by one; a record that
//! cannot be decoded is rejected on its own instead of failing the whole load.

#![forbid(unsafe_code)]

mod decode;

use acctscan_types::{Account, RejectedRecord};
use camino::{Utf8Path, Utf8PathBuf};

pub use decode::decode_accounts;

/// Result of one bulk read.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoadedAccounts {
    pub accounts: Vec<Account>,
    pub rejected: Vec<RejectedRecord>,
}

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("read account store {path}")]
    Io {
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("account store {path} is not a JSON array of records")]
    Malformed {
        path: Utf8PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Bulk read of the account collection.
pub trait AccountSource: Send + Sync {
    fn load(&self) -> Result<LoadedAccounts, StoreError>;
}

/// Accounts stored as a JSON array in a single file.
#[derive(Clone, Debug)]
pub struct JsonFileStore {
    path: Utf8PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<Utf8PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Utf8Path {
        &self.path
    }
}

impl AccountSource for JsonFileStore {
    fn load(&self) -> Result<LoadedAccounts, StoreError> {
        let text = std::fs::read_to_string(&self.path).map_err(|source| StoreError::Io {
            path: self.path.clone(),
            source,
        })?;
        let loaded = decode_accounts(&text).map_err(|source| StoreError::Malformed {
            path: self.path.clone(),
            source,
        })?;

        for r in &loaded.rejected {
            tracing::warn!(
                store = %self.path,
                index = r.index,
                id = r.id.as_deref().unwrap_or("-"),
                reason = %r.reason,
                "rejected account record"
            );
        }
        tracing::debug!(
            store = %self.path,
            accounts = loaded.accounts.len(),
            rejected = loaded.rejected.len(),
            "loaded accounts"
        );

        Ok(loaded)
    }
}

/// Fixed in-memory collection, for embedding and tests.
#[derive(Clone, Debug, Default)]
pub struct InMemoryStore {
    accounts: Vec<Account>,
}

impl InMemoryStore {
    pub fn new(accounts: Vec<Account>) -> Self {
        Self { accounts }
    }
}

impl AccountSource for InMemoryStore {
    fn load(&self) -> Result<LoadedAccounts, StoreError> {
        Ok(LoadedAccounts {
            accounts: self.accounts.clone(),
            rejected: Vec::new(),
        })
    }
}
