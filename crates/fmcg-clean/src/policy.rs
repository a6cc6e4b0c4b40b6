//! Per-dataset column handling.

use fmcg_core::Dataset;

/// How a column is coerced and repaired.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnPolicy {
    /// Calendar date; unparseable values become empty (unknown), rows are kept.
    Date,
    /// Whole-unit count. Missing becomes 0, negatives become 0, fractions truncate.
    Count,
    /// Non-negative float. Missing becomes 0, negatives become 0.
    Quantity,
    /// Price. Missing and negative values take the column median.
    Price,
    /// Cash amount. Missing becomes 0, sign is kept.
    Cash,
    /// Float carried through as parsed; unparseable values stay empty.
    Measure,
}

impl ColumnPolicy {
    pub fn is_integral(self) -> bool {
        matches!(self, ColumnPolicy::Count)
    }

    pub fn is_numeric(self) -> bool {
        !matches!(self, ColumnPolicy::Date)
    }

    pub fn needs_median(self) -> bool {
        matches!(self, ColumnPolicy::Price)
    }

    /// Replacement for a missing value.
    pub fn missing_default(self, median: Option<f64>) -> Option<f64> {
        match self {
            ColumnPolicy::Count | ColumnPolicy::Quantity | ColumnPolicy::Cash => Some(0.0),
            ColumnPolicy::Price => median,
            ColumnPolicy::Date | ColumnPolicy::Measure => None,
        }
    }

    /// Replacement for an out-of-domain value, or `None` when `value` is fine.
    pub fn clamp(self, value: f64, median: Option<f64>) -> Option<f64> {
        if value >= 0.0 {
            return None;
        }
        match self {
            ColumnPolicy::Count | ColumnPolicy::Quantity => Some(0.0),
            ColumnPolicy::Price => median,
            ColumnPolicy::Date | ColumnPolicy::Cash | ColumnPolicy::Measure => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnRule {
    pub column: &'static str,
    pub policy: ColumnPolicy,
}

/// A column always recomputed as `minuend - subtrahend` from cleaned values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DerivedRule {
    pub column: &'static str,
    pub minuend: &'static str,
    pub subtrahend: &'static str,
}

/// Column rules for one dataset. Columns not listed pass through verbatim.
#[derive(Debug, Clone, Copy)]
pub struct TableRules {
    pub columns: &'static [ColumnRule],
    pub derived: &'static [DerivedRule],
}

impl TableRules {
    pub fn policy(&self, column: &str) -> Option<ColumnPolicy> {
        self.columns
            .iter()
            .find(|rule| rule.column == column)
            .map(|rule| rule.policy)
    }
}

const fn rule(column: &'static str, policy: ColumnPolicy) -> ColumnRule {
    ColumnRule { column, policy }
}

const DAILY_SALES: &[ColumnRule] = &[
    rule("date", ColumnPolicy::Date),
    rule("quantity_sold", ColumnPolicy::Count),
    rule("unit_price", ColumnPolicy::Price),
    rule("sales_amount", ColumnPolicy::Measure),
];

const STOCK_LEVELS: &[ColumnRule] = &[
    rule("date", ColumnPolicy::Date),
    rule("opening_stock", ColumnPolicy::Count),
    rule("deliveries", ColumnPolicy::Count),
    rule("sales", ColumnPolicy::Count),
    rule("closing_stock", ColumnPolicy::Count),
];

const GRV_SUPPLIER_INVOICES: &[ColumnRule] = &[
    rule("grv_quantity", ColumnPolicy::Count),
    rule("invoice_quantity", ColumnPolicy::Count),
];

const GRV_DERIVED: &[DerivedRule] = &[DerivedRule {
    column: "difference",
    minuend: "invoice_quantity",
    subtrahend: "grv_quantity",
}];

const RECIPES: &[ColumnRule] = &[
    rule("quantity_per_unit", ColumnPolicy::Quantity),
    rule("cost_per_unit", ColumnPolicy::Quantity),
];

const MENU_PRICING: &[ColumnRule] = &[rule("selling_price", ColumnPolicy::Price)];

const CASH_SPOTCHECKS: &[ColumnRule] = &[
    rule("date", ColumnPolicy::Date),
    rule("expected_cash", ColumnPolicy::Cash),
    rule("actual_cash", ColumnPolicy::Cash),
];

const CASH_DERIVED: &[DerivedRule] = &[DerivedRule {
    column: "variance",
    minuend: "actual_cash",
    subtrahend: "expected_cash",
}];

/// Cleaning rules for a dataset.
///
/// `sales_amount`, `closing_stock` and `cost_per_unit` are coerced but not
/// recomputed; only `difference` and `variance` are derived again.
pub fn rules_for(dataset: Dataset) -> TableRules {
    match dataset {
        Dataset::DailySales => TableRules {
            columns: DAILY_SALES,
            derived: &[],
        },
        Dataset::StockLevels => TableRules {
            columns: STOCK_LEVELS,
            derived: &[],
        },
        Dataset::GrvSupplierInvoices => TableRules {
            columns: GRV_SUPPLIER_INVOICES,
            derived: GRV_DERIVED,
        },
        Dataset::RecipesAndRawMaterials => TableRules {
            columns: RECIPES,
            derived: &[],
        },
        Dataset::MenuPricing => TableRules {
            columns: MENU_PRICING,
            derived: &[],
        },
        Dataset::StoreCashSpotchecks => TableRules {
            columns: CASH_SPOTCHECKS,
            derived: CASH_DERIVED,
        },
    }
}
