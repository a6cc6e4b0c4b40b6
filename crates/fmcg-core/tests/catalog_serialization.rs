use fmcg_core::{Catalog, Dataset};

#[test]
fn catalog_survives_json_round_trip() {
    let catalog = Catalog::bakery();
    let json = serde_json::to_string_pretty(&catalog).expect("serialize catalog");
    let parsed: Catalog = serde_json::from_str(&json).expect("parse catalog");
    assert_eq!(parsed, catalog);
}

#[test]
fn catalog_seed_defaults_when_omitted() {
    let json = r#"{
  "start_date": "2025-02-01",
  "end_date": "2025-02-03",
  "stores": ["Bulawayo"],
  "products": [{ "sku": "Bread_Standard", "price": 1.0 }],
  "ingredients": [],
  "recipes": []
}"#;
    let catalog: Catalog = serde_json::from_str(json).expect("parse catalog");
    assert_eq!(catalog.seed, 42);
    assert_eq!(catalog.dates().count(), 3);
    assert!(catalog.validate().is_ok());
}

#[test]
fn dataset_serializes_as_snake_case_name() {
    let json = serde_json::to_string(&Dataset::RecipesAndRawMaterials).expect("serialize");
    assert_eq!(json, "\"recipes_and_raw_materials\"");
    for dataset in Dataset::ALL {
        let quoted = serde_json::to_string(&dataset).expect("serialize");
        assert_eq!(quoted.trim_matches('"'), dataset.name());
    }
}
