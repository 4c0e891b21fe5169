// 📊 Aggregator - Pure reductions over the transaction snapshot
//
// Every function here is a deterministic transform of the slice it is given:
// no hidden state, no clock, no storage. The UI pipeline is
//
//   ordered → filter_by_month → filter_by_kind_and_search → render
//
// with summarize/breakdowns computed from the month-filtered list and
// monthly_series ALWAYS computed from the full unfiltered collection (the
// trend view shows the whole year regardless of the single-month filter).

use std::collections::HashMap;

use crate::model::{KindFilter, MonthFilter, Transaction, TxKind, MONTH_LABELS};

// ============================================================================
// ORDERING & FILTERS
// ============================================================================

/// Most-recent-first ordering: descending by date, ties broken by descending
/// id. Reproducible regardless of insertion order.
pub fn ordered(transactions: &[Transaction]) -> Vec<Transaction> {
    let mut sorted = transactions.to_vec();
    sorted.sort_by(|a, b| b.date.cmp(&a.date).then_with(|| b.id.cmp(&a.id)));
    sorted
}

/// Keep transactions whose date resolves to the filtered month.
pub fn filter_by_month(transactions: &[Transaction], month: MonthFilter) -> Vec<Transaction> {
    match month {
        MonthFilter::All => transactions.to_vec(),
        MonthFilter::Month(m) => transactions
            .iter()
            .filter(|tx| tx.month_index() == Some(m))
            .cloned()
            .collect(),
    }
}

/// Kind filter AND case-insensitive substring search over
/// `description + " " + category`. An empty (or all-whitespace) search
/// matches everything.
pub fn filter_by_kind_and_search(
    transactions: &[Transaction],
    kind: KindFilter,
    search: &str,
) -> Vec<Transaction> {
    let needle = search.trim().to_lowercase();
    transactions
        .iter()
        .filter(|tx| kind.matches(tx.kind))
        .filter(|tx| {
            if needle.is_empty() {
                return true;
            }
            let haystack = format!("{} {}", tx.description, tx.category).to_lowercase();
            haystack.contains(&needle)
        })
        .cloned()
        .collect()
}

// ============================================================================
// SUMMARY
// ============================================================================

/// Income/expense totals and their balance over one list
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Summary {
    pub income: f64,
    pub expenses: f64,
    pub balance: f64,
}

pub fn summarize(transactions: &[Transaction]) -> Summary {
    let mut income = 0.0;
    let mut expenses = 0.0;
    for tx in transactions {
        match tx.kind {
            TxKind::Income => income += tx.amount,
            TxKind::Expense => expenses += tx.amount,
        }
    }
    Summary {
        income,
        expenses,
        balance: income - expenses,
    }
}

/// Expenses as a percentage of income, capped at 100 so any gauge rendering
/// stays bounded. Zero income reads as zero pressure.
pub fn expense_pressure(summary: &Summary) -> f64 {
    if summary.income > 0.0 {
        (summary.expenses / summary.income * 100.0).min(100.0)
    } else {
        0.0
    }
}

// ============================================================================
// MONTHLY SERIES (trend view)
// ============================================================================

/// One calendar month's accumulated totals
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonthlyTotal {
    pub label: &'static str,
    pub income: f64,
    pub expense: f64,
}

/// Fixed 12-entry series, Jan..Dec, over the FULL collection.
///
/// Takes no filter parameter on purpose: the trend always covers the whole
/// year even while a single-month filter is active.
pub fn monthly_series(all_transactions: &[Transaction]) -> [MonthlyTotal; 12] {
    let mut series = [MonthlyTotal {
        label: "",
        income: 0.0,
        expense: 0.0,
    }; 12];
    for (i, slot) in series.iter_mut().enumerate() {
        slot.label = MONTH_LABELS[i];
    }

    for tx in all_transactions {
        if let Some(m) = tx.month_index() {
            match tx.kind {
                TxKind::Income => series[m].income += tx.amount,
                TxKind::Expense => series[m].expense += tx.amount,
            }
        }
    }

    series
}

/// Month with the highest value for one side of the series
#[derive(Debug, Clone, PartialEq)]
pub struct PeakMonth {
    pub label: &'static str,
    pub value: f64,
}

/// Placeholder label when the whole series is zero
pub const NO_PEAK_LABEL: &str = "—";

/// Entry with the maximum income (or expense) across the 12 months.
/// Ties go to the earliest month; an all-zero series yields the placeholder.
pub fn peak_month(series: &[MonthlyTotal; 12], kind: TxKind) -> PeakMonth {
    let mut best = PeakMonth {
        label: NO_PEAK_LABEL,
        value: 0.0,
    };
    for entry in series {
        let value = match kind {
            TxKind::Income => entry.income,
            TxKind::Expense => entry.expense,
        };
        // strict > keeps the first occurrence on ties
        if value > best.value {
            best = PeakMonth {
                label: entry.label,
                value,
            };
        }
    }
    best
}

// ============================================================================
// CATEGORY BREAKDOWN
// ============================================================================

/// One category's summed amount within a list
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryTotal {
    pub category: String,
    pub total: f64,
}

/// The expense distribution view shows at most this many categories
pub const PRIORITY_LIMIT: usize = 7;

/// Group the list by category for one kind, summing amounts, sorted
/// non-increasing by total (category name breaks exact ties, for stable
/// output).
pub fn category_breakdown(transactions: &[Transaction], kind: TxKind) -> Vec<CategoryTotal> {
    let mut totals: HashMap<&str, f64> = HashMap::new();
    for tx in transactions {
        if tx.kind == kind {
            *totals.entry(tx.category.as_str()).or_insert(0.0) += tx.amount;
        }
    }

    let mut result: Vec<CategoryTotal> = totals
        .into_iter()
        .map(|(category, total)| CategoryTotal {
            category: category.to_string(),
            total,
        })
        .collect();

    result.sort_by(|a, b| {
        b.total
            .partial_cmp(&a.total)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.category.cmp(&b.category))
    });

    result
}

/// Top expense categories by total amount - the "priorities" view
pub fn top_priorities(transactions: &[Transaction]) -> Vec<CategoryTotal> {
    let mut breakdown = category_breakdown(transactions, TxKind::Expense);
    breakdown.truncate(PRIORITY_LIMIT);
    breakdown
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tx(id: &str, description: &str, amount: f64, kind: TxKind, category: &str, date: &str) -> Transaction {
        Transaction {
            id: id.to_string(),
            description: description.to_string(),
            amount,
            kind,
            category: category.to_string(),
            date: date.to_string(),
        }
    }

    /// One January salary, one January rent payment
    fn january_pair() -> Vec<Transaction> {
        vec![
            tx("1", "Pay", 5000.0, TxKind::Income, "Salary", "2024-01-15"),
            tx("2", "Rent", 1200.0, TxKind::Expense, "Needs", "2024-01-20"),
        ]
    }

    #[test]
    fn test_ordered_most_recent_first() {
        let txs = vec![
            tx("x", "old", 1.0, TxKind::Expense, "Needs", "2024-01-05"),
            tx("y", "new", 1.0, TxKind::Expense, "Needs", "2024-03-05"),
            tx("z", "mid", 1.0, TxKind::Expense, "Needs", "2024-02-05"),
        ];
        let sorted = ordered(&txs);
        let ids: Vec<&str> = sorted.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, ["y", "z", "x"]);
    }

    #[test]
    fn test_ordered_tie_breaks_by_descending_id() {
        let txs = vec![
            tx("a", "first", 1.0, TxKind::Expense, "Needs", "2024-01-05"),
            tx("b", "second", 1.0, TxKind::Expense, "Needs", "2024-01-05"),
        ];
        let sorted = ordered(&txs);
        assert_eq!(sorted[0].id, "b");
        assert_eq!(sorted[1].id, "a");
    }

    #[test]
    fn test_filter_by_month() {
        let txs = vec![
            tx("1", "jan", 1.0, TxKind::Expense, "Needs", "2024-01-05"),
            tx("2", "feb", 1.0, TxKind::Expense, "Needs", "2024-02-05"),
        ];
        assert_eq!(filter_by_month(&txs, MonthFilter::All).len(), 2);
        let jan = filter_by_month(&txs, MonthFilter::Month(0));
        assert_eq!(jan.len(), 1);
        assert_eq!(jan[0].id, "1");
        assert!(filter_by_month(&txs, MonthFilter::Month(5)).is_empty());
    }

    #[test]
    fn test_filter_by_kind_and_search() {
        let txs = january_pair();

        assert_eq!(filter_by_kind_and_search(&txs, KindFilter::All, "").len(), 2);
        assert_eq!(
            filter_by_kind_and_search(&txs, KindFilter::Income, "").len(),
            1
        );

        // search is case-insensitive and spans description + category
        let hit = filter_by_kind_and_search(&txs, KindFilter::All, "RENT");
        assert_eq!(hit.len(), 1);
        assert_eq!(hit[0].id, "2");
        let by_category = filter_by_kind_and_search(&txs, KindFilter::All, "salary");
        assert_eq!(by_category.len(), 1);
        assert_eq!(by_category[0].id, "1");

        // whitespace-only search matches everything
        assert_eq!(
            filter_by_kind_and_search(&txs, KindFilter::All, "   ").len(),
            2
        );
        assert!(filter_by_kind_and_search(&txs, KindFilter::All, "yacht").is_empty());
    }

    #[test]
    fn test_summarize_scenario() {
        let january = filter_by_month(&january_pair(), MonthFilter::Month(0));
        let summary = summarize(&january);
        assert_eq!(summary.income, 5000.0);
        assert_eq!(summary.expenses, 1200.0);
        assert_eq!(summary.balance, 3800.0);
        assert_eq!(expense_pressure(&summary), 24.0);
    }

    #[test]
    fn test_summarize_empty_is_zero() {
        let summary = summarize(&[]);
        assert_eq!(summary.income, 0.0);
        assert_eq!(summary.expenses, 0.0);
        assert_eq!(summary.balance, 0.0);
    }

    #[test]
    fn test_expense_pressure_bounds() {
        let over = Summary {
            income: 100.0,
            expenses: 450.0,
            balance: -350.0,
        };
        assert_eq!(expense_pressure(&over), 100.0, "capped at 100");

        let no_income = Summary {
            income: 0.0,
            expenses: 450.0,
            balance: -450.0,
        };
        assert_eq!(expense_pressure(&no_income), 0.0, "zero income reads zero");
    }

    #[test]
    fn test_monthly_series_shape_and_conservation() {
        let txs = vec![
            tx("1", "Pay", 5000.0, TxKind::Income, "Salary", "2024-01-15"),
            tx("2", "Bonus", 500.0, TxKind::Income, "Other", "2024-06-01"),
            tx("3", "Rent", 1200.0, TxKind::Expense, "Needs", "2024-01-20"),
            tx("4", "Rent", 1200.0, TxKind::Expense, "Needs", "2024-06-20"),
        ];
        let series = monthly_series(&txs);

        assert_eq!(series.len(), 12);
        assert_eq!(series[0].label, "Jan");
        assert_eq!(series[11].label, "Dec");

        assert_eq!(series[0].income, 5000.0);
        assert_eq!(series[0].expense, 1200.0);
        assert_eq!(series[5].income, 500.0);

        // conservation: series totals equal collection totals
        let income_sum: f64 = series.iter().map(|m| m.income).sum();
        let expense_sum: f64 = series.iter().map(|m| m.expense).sum();
        assert_eq!(income_sum, 5500.0);
        assert_eq!(expense_sum, 2400.0);
    }

    #[test]
    fn test_peak_month() {
        let txs = vec![
            tx("1", "a", 100.0, TxKind::Expense, "Needs", "2024-03-01"),
            tx("2", "b", 300.0, TxKind::Expense, "Needs", "2024-07-01"),
        ];
        let series = monthly_series(&txs);
        let peak = peak_month(&series, TxKind::Expense);
        assert_eq!(peak.label, "Jul");
        assert_eq!(peak.value, 300.0);
    }

    #[test]
    fn test_peak_month_tie_takes_earliest() {
        let txs = vec![
            tx("1", "a", 300.0, TxKind::Expense, "Needs", "2024-03-01"),
            tx("2", "b", 300.0, TxKind::Expense, "Needs", "2024-07-01"),
        ];
        let peak = peak_month(&monthly_series(&txs), TxKind::Expense);
        assert_eq!(peak.label, "Mar");
    }

    #[test]
    fn test_peak_month_all_zero_sentinel() {
        let peak = peak_month(&monthly_series(&[]), TxKind::Income);
        assert_eq!(peak.label, NO_PEAK_LABEL);
        assert_eq!(peak.value, 0.0);
    }

    #[test]
    fn test_category_breakdown_sums_and_sorts() {
        let txs = vec![
            tx("1", "a", 100.0, TxKind::Expense, "Food", "2024-01-01"),
            tx("2", "b", 50.0, TxKind::Expense, "Food", "2024-02-01"),
            tx("3", "c", 900.0, TxKind::Expense, "Needs", "2024-01-01"),
            tx("4", "d", 20.0, TxKind::Expense, "Transport", "2024-01-01"),
            tx("5", "e", 5000.0, TxKind::Income, "Salary", "2024-01-01"),
        ];
        let breakdown = category_breakdown(&txs, TxKind::Expense);

        let total: f64 = breakdown.iter().map(|c| c.total).sum();
        assert_eq!(total, 1070.0, "entries sum to all matching-kind amounts");

        let names: Vec<&str> = breakdown.iter().map(|c| c.category.as_str()).collect();
        assert_eq!(names, ["Needs", "Food", "Transport"]);
        assert!(breakdown.windows(2).all(|w| w[0].total >= w[1].total));
    }

    #[test]
    fn test_top_priorities_truncates_to_seven() {
        let categories = [
            "Needs", "Food", "Transport", "Housing", "Utilities",
            "Health", "Entertainment", "Education", "Other",
        ];
        let txs: Vec<Transaction> = categories
            .iter()
            .enumerate()
            .map(|(i, c)| {
                tx(
                    &i.to_string(),
                    "x",
                    (i + 1) as f64 * 10.0,
                    TxKind::Expense,
                    c,
                    "2024-01-01",
                )
            })
            .collect();

        let priorities = top_priorities(&txs);
        assert_eq!(priorities.len(), PRIORITY_LIMIT);
        assert_eq!(priorities[0].category, "Other", "largest total first");
    }
}
