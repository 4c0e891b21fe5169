// 💰 Core Data Model - Transactions, categories, filters
//
// A Transaction is immutable once created. Identity is a UUID string;
// everything else is a plain value. The category sets are fixed per kind:
// renaming or extending them is a product decision, not a runtime one.

use anyhow::{bail, Result};
use chrono::{Datelike, Local, NaiveDate};
use serde::{Deserialize, Serialize};

// ============================================================================
// TRANSACTION KIND
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TxKind {
    Income,
    Expense,
}

impl TxKind {
    /// Wire/display form ("income" / "expense")
    pub fn as_str(&self) -> &'static str {
        match self {
            TxKind::Income => "income",
            TxKind::Expense => "expense",
        }
    }

    /// The fixed category set for this kind
    pub fn categories(&self) -> &'static [&'static str] {
        match self {
            TxKind::Income => &INCOME_CATEGORIES,
            TxKind::Expense => &EXPENSE_CATEGORIES,
        }
    }

    /// Fallback category when a stored record carries an unknown one
    pub fn default_category(&self) -> &'static str {
        self.categories()[0]
    }

    /// Membership test against this kind's set
    pub fn is_valid_category(&self, category: &str) -> bool {
        self.categories().contains(&category)
    }
}

/// Income sources (6)
pub const INCOME_CATEGORIES: [&str; 6] = [
    "Salary",
    "Freelance",
    "Business",
    "Investments",
    "Gifts",
    "Other",
];

/// Expense buckets (9)
pub const EXPENSE_CATEGORIES: [&str; 9] = [
    "Needs",
    "Food",
    "Transport",
    "Housing",
    "Utilities",
    "Health",
    "Entertainment",
    "Education",
    "Other",
];

// ============================================================================
// CALENDAR HELPERS
// ============================================================================

/// Month labels, January first - the fixed axis of every trend view
pub const MONTH_LABELS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun",
    "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Resolve a `YYYY-MM-DD` string to a month index 0-11.
/// Returns None for anything that is not a real calendar date.
pub fn month_index(date: &str) -> Option<usize> {
    NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .ok()
        .map(|d| d.month0() as usize)
}

/// Today in `YYYY-MM-DD` form - the substitute for unparseable stored dates
pub fn today() -> String {
    Local::now().format("%Y-%m-%d").to_string()
}

// ============================================================================
// TRANSACTION
// ============================================================================

/// A single recorded income or expense event.
///
/// Serialized shape matches the persisted blob:
/// `{id, description, amount, type, category, date}` - amount as a JSON
/// number, everything else strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: String,

    pub description: String,

    pub amount: f64,

    #[serde(rename = "type")]
    pub kind: TxKind,

    pub category: String,

    /// Calendar date, `YYYY-MM-DD`
    pub date: String,
}

impl Transaction {
    /// Month index 0-11 of this transaction's date.
    /// Normalized transactions always resolve; the Option exists because
    /// aggregation must stay total over arbitrary input.
    pub fn month_index(&self) -> Option<usize> {
        month_index(&self.date)
    }
}

// ============================================================================
// FILTER STATE
// ============================================================================

/// Month scope for most aggregates (the trend series ignores it)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MonthFilter {
    All,
    /// Month index 0-11
    Month(usize),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KindFilter {
    All,
    Income,
    Expense,
}

impl KindFilter {
    pub fn matches(&self, kind: TxKind) -> bool {
        match self {
            KindFilter::All => true,
            KindFilter::Income => kind == TxKind::Income,
            KindFilter::Expense => kind == TxKind::Expense,
        }
    }
}

/// Ephemeral UI filter state - never persisted
#[derive(Debug, Clone)]
pub struct FilterState {
    pub month: MonthFilter,
    pub kind: KindFilter,
    pub search: String,
    pub draft: DraftEntry,
}

impl Default for FilterState {
    fn default() -> Self {
        FilterState {
            month: MonthFilter::All,
            kind: KindFilter::All,
            search: String::new(),
            draft: DraftEntry::default(),
        }
    }
}

// ============================================================================
// DRAFT ENTRY (form input)
// ============================================================================

/// The transaction-entry form as the user typed it.
/// Amount stays a string until validation; rejecting bad input must not
/// mutate anything.
#[derive(Debug, Clone)]
pub struct DraftEntry {
    pub description: String,
    pub amount: String,
    pub kind: TxKind,
    pub category: String,
    pub date: String,
}

impl Default for DraftEntry {
    fn default() -> Self {
        DraftEntry {
            description: String::new(),
            amount: String::new(),
            kind: TxKind::Expense,
            category: TxKind::Expense.default_category().to_string(),
            date: today(),
        }
    }
}

impl DraftEntry {
    /// Validate the form and build a Transaction with a fresh id.
    ///
    /// Each failure carries a single human-readable message; on failure no
    /// state has changed anywhere.
    pub fn validate(&self) -> Result<Transaction> {
        let description = self.description.trim();
        if description.is_empty() {
            bail!("Description is required");
        }

        let amount: f64 = match self.amount.trim().parse() {
            Ok(n) => n,
            Err(_) => bail!("Amount must be a positive number"),
        };
        if !amount.is_finite() || amount <= 0.0 {
            bail!("Amount must be a positive number");
        }

        if month_index(&self.date).is_none() {
            bail!("Date must be a valid YYYY-MM-DD date");
        }

        if !self.kind.is_valid_category(&self.category) {
            bail!("Category is not valid for this type");
        }

        Ok(Transaction {
            id: uuid::Uuid::new_v4().to_string(),
            description: description.to_string(),
            amount,
            kind: self.kind,
            category: self.category.clone(),
            date: self.date.clone(),
        })
    }
}
