use chrono::NaiveDate;
use schemars::schema::RootSchema;
use schemars::{JsonSchema, schema_for};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::validation::validate_catalog;

/// Seed used when no other seed is configured.
pub const DEFAULT_SEED: u64 = 42;

/// Fixed reference tables driving dataset generation.
///
/// The catalog is plain immutable data: the generator borrows it and never
/// mutates it, so the same catalog and seed always yield the same datasets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Catalog {
    /// Seed for the generator's pseudo-random source.
    #[serde(default = "default_seed")]
    pub seed: u64,
    /// First day of the generated period (inclusive).
    pub start_date: NaiveDate,
    /// Last day of the generated period (inclusive).
    pub end_date: NaiveDate,
    /// Store identifiers.
    pub stores: Vec<String>,
    /// Products sold, each with its menu price.
    pub products: Vec<Product>,
    /// Raw materials with their unit cost.
    pub ingredients: Vec<Ingredient>,
    /// Bill of materials per product.
    pub recipes: Vec<Recipe>,
}

/// A sellable SKU and its fixed menu price.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Product {
    pub sku: String,
    pub price: f64,
}

/// A raw material and its cost per unit of measure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Ingredient {
    pub name: String,
    pub unit_cost: f64,
}

/// Bill of materials for one SKU.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Recipe {
    pub sku: String,
    pub components: Vec<RecipeComponent>,
}

/// Quantity of one ingredient required per unit produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct RecipeComponent {
    pub ingredient: String,
    pub quantity: f64,
}

fn default_seed() -> u64 {
    DEFAULT_SEED
}

impl Catalog {
    /// Reference tables for the bakery chain the sample data models.
    pub fn bakery() -> Self {
        let stores = [
            "Harare_Main",
            "Harare_North",
            "Borrowdale",
            "Avondale",
            "Chitungwiza",
        ];
        let products = [
            ("Bread_Standard", 1.00),
            ("Bread_Premium", 1.40),
            ("Buns_6pk", 1.10),
            ("Rolls_6pk", 1.00),
            ("Doughnut", 0.50),
            ("Cake_Slice", 0.80),
        ];
        let ingredients = [
            ("Flour_kg", 1.20),
            ("Yeast_g", 0.002),
            ("Sugar_kg", 0.90),
            ("Oil_L", 1.50),
            ("Packaging_unit", 0.10),
        ];
        // Component quantities in ingredient order above.
        let bom: [(&str, [f64; 5]); 6] = [
            ("Bread_Standard", [0.5, 5.0, 0.02, 0.01, 1.0]),
            ("Bread_Premium", [0.6, 7.0, 0.03, 0.015, 1.0]),
            ("Buns_6pk", [0.4, 4.0, 0.05, 0.01, 1.0]),
            ("Rolls_6pk", [0.35, 4.0, 0.04, 0.01, 1.0]),
            ("Doughnut", [0.12, 3.0, 0.03, 0.02, 1.0]),
            ("Cake_Slice", [0.1, 0.0, 0.08, 0.03, 1.0]),
        ];

        Self {
            seed: DEFAULT_SEED,
            start_date: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap_or_default(),
            end_date: NaiveDate::from_ymd_opt(2025, 1, 31).unwrap_or_default(),
            stores: stores.iter().map(|name| name.to_string()).collect(),
            products: products
                .iter()
                .map(|(sku, price)| Product {
                    sku: sku.to_string(),
                    price: *price,
                })
                .collect(),
            ingredients: ingredients
                .iter()
                .map(|(name, unit_cost)| Ingredient {
                    name: name.to_string(),
                    unit_cost: *unit_cost,
                })
                .collect(),
            recipes: bom
                .iter()
                .map(|(sku, quantities)| Recipe {
                    sku: sku.to_string(),
                    components: ingredients
                        .iter()
                        .zip(quantities)
                        .map(|((ingredient, _), quantity)| RecipeComponent {
                            ingredient: ingredient.to_string(),
                            quantity: *quantity,
                        })
                        .collect(),
                })
                .collect(),
        }
    }

    /// Every day from `start_date` through `end_date`, inclusive.
    pub fn dates(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.start_date
            .iter_days()
            .take_while(move |date| *date <= self.end_date)
    }

    pub fn price_of(&self, sku: &str) -> Option<f64> {
        self.products
            .iter()
            .find(|product| product.sku == sku)
            .map(|product| product.price)
    }

    pub fn unit_cost_of(&self, ingredient: &str) -> Option<f64> {
        self.ingredients
            .iter()
            .find(|item| item.name == ingredient)
            .map(|item| item.unit_cost)
    }

    pub fn validate(&self) -> Result<()> {
        validate_catalog(self)
    }

    /// JSON Schema describing catalog files.
    pub fn json_schema() -> RootSchema {
        schema_for!(Catalog)
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::bakery()
    }
}
