// 🧹 Normalizer - Raw stored record → well-formed Transaction
//
// The persisted blob is untrusted: it may have been written by an older
// version, edited by hand, or truncated. Every record passes through here on
// load. A record is either coerced into a fully valid Transaction or dropped;
// nothing half-valid reaches the collection.
//
// Rejection vs. repair:
// - missing/invalid amount or empty description → reject (None)
// - unparseable date → repair (substitute today)
// - unknown category → repair (substitute the kind's first category)
// - missing id → repair (fresh UUID)

use serde_json::Value;

use crate::model::{month_index, today, Transaction, TxKind};

/// Coerce a raw JSON value into a Transaction, or reject it.
///
/// Idempotent on already-valid records: every field, id included, passes
/// through unchanged.
pub fn normalize(raw: &Value) -> Option<Transaction> {
    let obj = raw.as_object()?;

    // "expense" exactly; anything else (missing, null, typo) is income
    let kind = match obj.get("type").and_then(Value::as_str) {
        Some("expense") => TxKind::Expense,
        _ => TxKind::Income,
    };

    let amount = parse_amount(obj.get("amount"))?;
    if !(amount > 0.0) {
        return None;
    }

    let description = obj
        .get("description")
        .and_then(Value::as_str)
        .unwrap_or("")
        .trim();
    if description.is_empty() {
        return None;
    }

    let date = match obj.get("date").and_then(Value::as_str) {
        Some(d) if month_index(d).is_some() => d.to_string(),
        _ => today(),
    };

    let category = match obj.get("category").and_then(Value::as_str) {
        Some(c) if kind.is_valid_category(c) => c.to_string(),
        _ => kind.default_category().to_string(),
    };

    let id = match obj.get("id").and_then(Value::as_str) {
        Some(s) => s.to_string(),
        None => uuid::Uuid::new_v4().to_string(),
    };

    Some(Transaction {
        id,
        description: description.to_string(),
        amount,
        kind,
        category,
        date,
    })
}

/// Numeric parse of the amount field. Accepts JSON numbers and numeric
/// strings (older blobs stored amounts as strings). NaN never passes the
/// caller's `> 0` check.
fn parse_amount(value: Option<&Value>) -> Option<f64> {
    match value? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}
