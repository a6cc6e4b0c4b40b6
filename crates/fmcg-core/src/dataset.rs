use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// The six tabular datasets produced by the generator and consumed by the
/// cleaner. The file naming convention is the only contract between them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dataset {
    DailySales,
    StockLevels,
    GrvSupplierInvoices,
    RecipesAndRawMaterials,
    MenuPricing,
    StoreCashSpotchecks,
}

impl Dataset {
    /// All datasets, in generation order.
    pub const ALL: [Dataset; 6] = [
        Dataset::DailySales,
        Dataset::StockLevels,
        Dataset::GrvSupplierInvoices,
        Dataset::RecipesAndRawMaterials,
        Dataset::MenuPricing,
        Dataset::StoreCashSpotchecks,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Dataset::DailySales => "daily_sales",
            Dataset::StockLevels => "stock_levels",
            Dataset::GrvSupplierInvoices => "grv_supplier_invoices",
            Dataset::RecipesAndRawMaterials => "recipes_and_raw_materials",
            Dataset::MenuPricing => "menu_pricing",
            Dataset::StoreCashSpotchecks => "store_cash_spotchecks",
        }
    }

    /// Raw file name, e.g. `daily_sales.csv`.
    pub fn file_name(self) -> String {
        format!("{}.csv", self.name())
    }

    /// Cleaned file name, e.g. `daily_sales_cleaned.csv`.
    pub fn cleaned_file_name(self) -> String {
        format!("{}_cleaned.csv", self.name())
    }

    pub fn raw_path(self, dir: &Path) -> PathBuf {
        dir.join(self.file_name())
    }

    pub fn cleaned_path(self, dir: &Path) -> PathBuf {
        dir.join(self.cleaned_file_name())
    }

    /// Header row, in on-disk column order.
    pub fn columns(self) -> &'static [&'static str] {
        match self {
            Dataset::DailySales => &[
                "date",
                "store",
                "sku",
                "quantity_sold",
                "unit_price",
                "sales_amount",
            ],
            Dataset::StockLevels => &[
                "date",
                "store",
                "sku",
                "opening_stock",
                "deliveries",
                "sales",
                "closing_stock",
            ],
            Dataset::GrvSupplierInvoices => &[
                "grv_id",
                "sku",
                "grv_quantity",
                "invoice_quantity",
                "difference",
            ],
            Dataset::RecipesAndRawMaterials => &[
                "sku",
                "ingredient",
                "quantity_per_unit",
                "cost_per_unit",
            ],
            Dataset::MenuPricing => &["sku", "selling_price"],
            Dataset::StoreCashSpotchecks => &[
                "date",
                "store",
                "expected_cash",
                "actual_cash",
                "variance",
            ],
        }
    }
}

impl fmt::Display for Dataset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Dataset {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let name = value.strip_suffix(".csv").unwrap_or(value);
        Dataset::ALL
            .into_iter()
            .find(|dataset| dataset.name() == name)
            .ok_or_else(|| Error::UnknownDataset(value.to_string()))
    }
}
