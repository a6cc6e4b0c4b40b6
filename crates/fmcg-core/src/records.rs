//! Typed rows for each dataset. Field order is the on-disk column order.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Units of one SKU sold by one store on one day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailySale {
    pub date: NaiveDate,
    pub store: String,
    pub sku: String,
    pub quantity_sold: u32,
    pub unit_price: f64,
    pub sales_amount: f64,
}

/// End-of-day stock position for one SKU at one store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockLevel {
    pub date: NaiveDate,
    pub store: String,
    pub sku: String,
    pub opening_stock: u32,
    pub deliveries: u32,
    pub sales: u32,
    pub closing_stock: u32,
}

/// Goods received voucher reconciled against the supplier invoice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GrvInvoice {
    pub grv_id: String,
    pub sku: String,
    pub grv_quantity: u32,
    pub invoice_quantity: u32,
    pub difference: i64,
}

/// One ingredient line of a product's bill of materials.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeLine {
    pub sku: String,
    pub ingredient: String,
    pub quantity_per_unit: f64,
    pub cost_per_unit: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuPrice {
    pub sku: String,
    pub selling_price: f64,
}

/// Unscheduled cash count at a store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CashSpotCheck {
    pub date: NaiveDate,
    pub store: String,
    pub expected_cash: f64,
    pub actual_cash: f64,
    pub variance: f64,
}
