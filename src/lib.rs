// Finboard - Personal Finance Dashboard Core
// Exposes all modules for use in the CLI, frontends, and tests

pub mod aggregate;
pub mod chart;
pub mod export;
pub mod model;
pub mod normalize;
pub mod store;

// Re-export commonly used types
pub use aggregate::{
    category_breakdown, expense_pressure, filter_by_kind_and_search, filter_by_month,
    monthly_series, ordered, peak_month, summarize, top_priorities,
    CategoryTotal, MonthlyTotal, PeakMonth, Summary, NO_PEAK_LABEL, PRIORITY_LIMIT,
};
pub use chart::{
    conic_gradient_stops, series_max, ChartFrame, GradientStop, RING_NEUTRAL, RING_PALETTE,
};
pub use export::{export_csv, import_csv};
pub use model::{
    month_index, today, DraftEntry, FilterState, KindFilter, MonthFilter, Transaction, TxKind,
    EXPENSE_CATEGORIES, INCOME_CATEGORIES, MONTH_LABELS,
};
pub use normalize::normalize;
pub use store::{Ledger, Store, STORAGE_KEY};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
