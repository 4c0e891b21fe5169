// 💾 Store - Durable key-value blob + single-writer Ledger
//
// Persistence is one JSON array under one fixed key, replaced wholesale on
// every mutation. Load never fails: absent file, unreadable file, corrupt
// JSON, wrong shape, and malformed records all degrade to "fewer (or zero)
// transactions", never to an error the caller has to handle.
//
// Save is best-effort: it reports failure but callers are expected to warn
// and keep running with the in-memory collection intact.

use anyhow::{Context, Result};
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};

use crate::model::{DraftEntry, Transaction};
use crate::normalize::normalize;

/// The fixed storage key. On disk this becomes `<data_dir>/<KEY>.json`.
pub const STORAGE_KEY: &str = "finboard.transactions";

// ============================================================================
// STORE
// ============================================================================

#[derive(Debug, Clone)]
pub struct Store {
    path: PathBuf,
}

impl Store {
    /// Store rooted at a data directory; the blob lives under the fixed key.
    pub fn new(data_dir: impl AsRef<Path>) -> Self {
        Store {
            path: data_dir.as_ref().join(format!("{}.json", STORAGE_KEY)),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the persisted collection. Fails soft: anything unreadable yields
    /// an empty collection, and each array element is normalized with invalid
    /// records dropped silently.
    pub fn load(&self) -> Vec<Transaction> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(s) => s,
            Err(_) => return Vec::new(),
        };

        let value: Value = match serde_json::from_str(&raw) {
            Ok(v) => v,
            Err(_) => return Vec::new(),
        };

        match value.as_array() {
            Some(items) => items.iter().filter_map(normalize).collect(),
            None => Vec::new(),
        }
    }

    /// Serialize and persist the full collection, replacing prior content.
    /// Writes to a sibling temp file first so a failed write never leaves a
    /// torn blob behind.
    pub fn save(&self, transactions: &[Transaction]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create data dir {}", parent.display()))?;
        }

        let json = serde_json::to_string_pretty(transactions)?;
        let tmp = self.path.with_extension("json.tmp");

        fs::write(&tmp, json)
            .with_context(|| format!("Failed to write {}", tmp.display()))?;
        fs::rename(&tmp, &self.path)
            .with_context(|| format!("Failed to replace {}", self.path.display()))?;

        Ok(())
    }
}

// ============================================================================
// LEDGER (single-writer collection owner)
// ============================================================================

/// The in-memory TransactionCollection and its one logical owner.
///
/// All mutation goes through here; every successful mutation writes the full
/// collection back to the Store. Aggregation reads the snapshot via
/// [`Ledger::transactions`] and never mutates.
pub struct Ledger {
    transactions: Vec<Transaction>,
    store: Store,
}

impl Ledger {
    /// Load the persisted collection once at startup.
    pub fn load(store: Store) -> Self {
        let transactions = store.load();
        Ledger { transactions, store }
    }

    /// Immutable snapshot of the collection, newest entry first.
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    /// Validate a draft and prepend the resulting transaction.
    ///
    /// Validation failures leave the collection untouched and nothing is
    /// saved. A save failure after the prepend surfaces as Err with the new
    /// transaction still in memory.
    pub fn append(&mut self, draft: &DraftEntry) -> Result<&Transaction> {
        let tx = draft.validate()?;
        self.transactions.insert(0, tx);
        self.store.save(&self.transactions)?;
        Ok(&self.transactions[0])
    }

    /// Append already-normalized transactions (bulk import path).
    /// Returns how many were added.
    pub fn append_all(&mut self, incoming: Vec<Transaction>) -> Result<usize> {
        if incoming.is_empty() {
            return Ok(0);
        }
        let added = incoming.len();
        self.transactions.extend(incoming);
        self.store.save(&self.transactions)?;
        Ok(added)
    }

    /// Remove by id. Returns true when a transaction was removed (and the
    /// collection re-persisted); false leaves storage untouched.
    pub fn remove(&mut self, id: &str) -> Result<bool> {
        let before = self.transactions.len();
        self.transactions.retain(|tx| tx.id != id);
        if self.transactions.len() == before {
            return Ok(false);
        }
        self.store.save(&self.transactions)?;
        Ok(true)
    }

    /// Drop everything, in memory and on disk.
    pub fn clear(&mut self) -> Result<()> {
        self.transactions.clear();
        self.store.save(&self.transactions)
    }
}
