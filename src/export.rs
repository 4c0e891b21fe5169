// 📂 CSV Export/Import - Moving the collection in and out as flat rows
//
// Same column order as the persisted blob fields. Import runs every row
// through the Normalizer, so a hand-edited or foreign CSV obeys the exact
// rules a stored blob does: invalid rows dropped, repairable fields repaired.

use anyhow::{Context, Result};
use serde_json::{Map, Value};
use std::path::Path;

use crate::model::Transaction;
use crate::normalize::normalize;

const HEADER: [&str; 6] = ["id", "description", "amount", "type", "category", "date"];

/// Write the full collection to a CSV file. Returns the row count.
pub fn export_csv(path: &Path, transactions: &[Transaction]) -> Result<usize> {
    let mut wtr = csv::Writer::from_path(path)
        .with_context(|| format!("Failed to create CSV file {}", path.display()))?;

    wtr.write_record(HEADER)?;
    for tx in transactions {
        let amount = tx.amount.to_string();
        wtr.write_record([
            tx.id.as_str(),
            tx.description.as_str(),
            amount.as_str(),
            tx.kind.as_str(),
            tx.category.as_str(),
            tx.date.as_str(),
        ])?;
    }
    wtr.flush().context("Failed to flush CSV file")?;

    Ok(transactions.len())
}

/// Read transactions from a CSV file, dropping rows the Normalizer rejects.
/// Column names come from the header row; unknown columns are ignored.
pub fn import_csv(path: &Path) -> Result<Vec<Transaction>> {
    let mut rdr = csv::Reader::from_path(path)
        .with_context(|| format!("Failed to open CSV file {}", path.display()))?;

    let headers = rdr.headers().context("Failed to read CSV header")?.clone();

    let mut transactions = Vec::new();
    for record in rdr.records() {
        let record = record.context("Failed to read CSV row")?;

        let mut obj = Map::new();
        for (name, field) in headers.iter().zip(record.iter()) {
            obj.insert(name.to_string(), Value::String(field.to_string()));
        }

        if let Some(tx) = normalize(&Value::Object(obj)) {
            transactions.push(tx);
        }
    }

    Ok(transactions)
}
