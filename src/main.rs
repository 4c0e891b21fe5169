use anyhow::{bail, Result};
use std::env;
use std::path::{Path, PathBuf};

use finboard::{
    category_breakdown, expense_pressure, export_csv, filter_by_month, import_csv,
    monthly_series, ordered, peak_month, summarize, top_priorities, DraftEntry, Ledger,
    MonthFilter, Store, Transaction, TxKind, MONTH_LABELS,
};

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();

    let Some(command) = args.get(1) else {
        print_usage();
        return Ok(());
    };

    let store = Store::new(data_dir());
    let mut ledger = Ledger::load(store);

    match command.as_str() {
        "add" => run_add(&mut ledger, &args[2..])?,
        "list" => run_list(&ledger, &args[2..])?,
        "summary" => run_summary(&ledger, &args[2..])?,
        "trend" => run_trend(&ledger),
        "breakdown" => run_breakdown(&ledger, &args[2..])?,
        "remove" => run_remove(&mut ledger, &args[2..])?,
        "export" => run_export(&ledger, &args[2..])?,
        "import" => run_import(&mut ledger, &args[2..])?,
        "clear" => {
            ledger.clear()?;
            println!("✓ Cleared all transactions");
        }
        _ => {
            print_usage();
            bail!("Unknown command: {}", command);
        }
    }

    Ok(())
}

/// Data directory: FINBOARD_DIR if set, else the current directory
fn data_dir() -> PathBuf {
    env::var_os("FINBOARD_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."))
}

fn print_usage() {
    println!("💰 finboard {} - personal finance dashboard", finboard::VERSION);
    println!();
    println!("Usage: finboard <command>");
    println!();
    println!("  add <desc> <amount> <income|expense> <category> <YYYY-MM-DD>");
    println!("  list [month 1-12]");
    println!("  summary [month 1-12]");
    println!("  trend");
    println!("  breakdown <income|expense> [month 1-12]");
    println!("  remove <id>");
    println!("  export <file.csv>");
    println!("  import <file.csv>");
    println!("  clear");
}

/// Optional `1-12` month argument → MonthFilter
fn parse_month(arg: Option<&String>) -> Result<MonthFilter> {
    match arg {
        None => Ok(MonthFilter::All),
        Some(s) => match s.parse::<usize>() {
            Ok(m) if (1..=12).contains(&m) => Ok(MonthFilter::Month(m - 1)),
            _ => bail!("Month must be 1-12, got '{}'", s),
        },
    }
}

fn parse_kind(arg: &str) -> Result<TxKind> {
    match arg {
        "income" => Ok(TxKind::Income),
        "expense" => Ok(TxKind::Expense),
        other => bail!("Type must be 'income' or 'expense', got '{}'", other),
    }
}

fn run_add(ledger: &mut Ledger, args: &[String]) -> Result<()> {
    let [description, amount, kind, category, date] = args else {
        bail!("Usage: add <desc> <amount> <income|expense> <category> <YYYY-MM-DD>");
    };

    let draft = DraftEntry {
        description: description.clone(),
        amount: amount.clone(),
        kind: parse_kind(kind)?,
        category: category.clone(),
        date: date.clone(),
    };

    let tx = ledger.append(&draft)?;
    println!("✓ Added {} ({})", tx.description, tx.id);
    Ok(())
}

fn run_list(ledger: &Ledger, args: &[String]) -> Result<()> {
    let month = parse_month(args.first())?;
    let rows = filter_by_month(&ordered(ledger.transactions()), month);

    if rows.is_empty() {
        println!("No transactions");
        return Ok(());
    }

    for tx in &rows {
        print_row(tx);
    }
    println!("  {} transaction(s)", rows.len());
    Ok(())
}

fn print_row(tx: &Transaction) {
    let sign = match tx.kind {
        TxKind::Income => '+',
        TxKind::Expense => '-',
    };
    println!(
        "{}  {}{:>10.2}  {:<14} {:<24} {}",
        tx.date, sign, tx.amount, tx.category, tx.description, tx.id
    );
}

fn run_summary(ledger: &Ledger, args: &[String]) -> Result<()> {
    let month = parse_month(args.first())?;
    let scoped = filter_by_month(ledger.transactions(), month);
    let summary = summarize(&scoped);

    let scope = match month {
        MonthFilter::All => "all months".to_string(),
        MonthFilter::Month(m) => MONTH_LABELS[m].to_string(),
    };

    println!("📊 Summary ({})", scope);
    println!("  Income:   {:>12.2}", summary.income);
    println!("  Expenses: {:>12.2}", summary.expenses);
    println!("  Balance:  {:>12.2}", summary.balance);
    println!("  Pressure: {:>11.1}%", expense_pressure(&summary));
    Ok(())
}

fn run_trend(ledger: &Ledger) {
    let series = monthly_series(ledger.transactions());

    println!("📈 Monthly trend");
    for entry in &series {
        println!(
            "  {}  income {:>10.2}  expense {:>10.2}",
            entry.label, entry.income, entry.expense
        );
    }

    let peak_in = peak_month(&series, TxKind::Income);
    let peak_out = peak_month(&series, TxKind::Expense);
    println!("  Peak income:  {} ({:.2})", peak_in.label, peak_in.value);
    println!("  Peak expense: {} ({:.2})", peak_out.label, peak_out.value);
}

fn run_breakdown(ledger: &Ledger, args: &[String]) -> Result<()> {
    let Some(kind_arg) = args.first() else {
        bail!("Usage: breakdown <income|expense> [month 1-12]");
    };
    let kind = parse_kind(kind_arg)?;
    let month = parse_month(args.get(1))?;
    let scoped = filter_by_month(ledger.transactions(), month);

    let entries = match kind {
        TxKind::Expense => top_priorities(&scoped),
        TxKind::Income => category_breakdown(&scoped, TxKind::Income),
    };

    if entries.is_empty() {
        println!("No {} transactions in scope", kind.as_str());
        return Ok(());
    }

    let total: f64 = entries.iter().map(|e| e.total).sum();
    println!("🏷️  {} breakdown", kind.as_str());
    for entry in &entries {
        println!(
            "  {:<14} {:>10.2}  {:>5.1}%",
            entry.category,
            entry.total,
            entry.total / total * 100.0
        );
    }
    Ok(())
}

fn run_remove(ledger: &mut Ledger, args: &[String]) -> Result<()> {
    let Some(id) = args.first() else {
        bail!("Usage: remove <id>");
    };
    if ledger.remove(id)? {
        println!("✓ Removed {}", id);
    } else {
        println!("No transaction with id {}", id);
    }
    Ok(())
}

fn run_export(ledger: &Ledger, args: &[String]) -> Result<()> {
    let Some(path) = args.first() else {
        bail!("Usage: export <file.csv>");
    };
    let count = export_csv(Path::new(path), ledger.transactions())?;
    println!("✓ Exported {} transaction(s) to {}", count, path);
    Ok(())
}

fn run_import(ledger: &mut Ledger, args: &[String]) -> Result<()> {
    let Some(path) = args.first() else {
        bail!("Usage: import <file.csv>");
    };
    let incoming = import_csv(Path::new(path))?;
    let added = ledger.append_all(incoming)?;
    println!("✓ Imported {} transaction(s) from {}", added, path);
    Ok(())
}
