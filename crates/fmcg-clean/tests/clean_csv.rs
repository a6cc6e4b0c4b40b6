use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use fmcg_clean::{CleanError, CleanOptions, CleaningEngine, RawTable};
use fmcg_core::{Catalog, Dataset};
use fmcg_generate::{GenerateOptions, GenerationEngine};

fn temp_dir(label: &str) -> PathBuf {
    let mut dir = std::env::temp_dir();
    dir.push(format!("fmcg_clean_{label}_{}", uuid::Uuid::new_v4()));
    fs::create_dir_all(&dir).expect("create temp dir");
    dir
}

fn generate_raw(raw_dir: &Path) {
    let options = GenerateOptions {
        out_dir: raw_dir.to_path_buf(),
        seed: None,
        write_report: false,
    };
    GenerationEngine::new(options)
        .run(&Catalog::bakery())
        .expect("generate raw data");
}

fn append_rows(path: &Path, rows: &str) {
    let mut contents = fs::read_to_string(path).expect("read raw file");
    contents.push_str(rows);
    fs::write(path, contents).expect("write raw file");
}

fn read_table(path: &Path) -> RawTable {
    RawTable::from_path(path).expect("read cleaned table")
}

fn column(table: &RawTable, name: &str) -> Vec<String> {
    let index = table.column_index(name).expect("column present");
    table.rows.iter().map(|row| row[index].clone()).collect()
}

fn numbers(table: &RawTable, name: &str) -> Vec<f64> {
    column(table, name)
        .iter()
        .map(|value| value.parse::<f64>().expect("numeric cell"))
        .collect()
}

#[test]
fn grv_difference_is_recomputed_from_quantities() {
    let root = temp_dir("grv");
    let raw_dir = root.join("raw");
    generate_raw(&raw_dir);
    append_rows(
        &Dataset::GrvSupplierInvoices.raw_path(&raw_dir),
        "GRV-Tst-0,Bread_Standard,600,605,42\n",
    );

    let cleaned_dir = root.join("cleaned");
    CleaningEngine::new(CleanOptions::new(&raw_dir, &cleaned_dir))
        .run()
        .expect("clean");

    let table = read_table(&Dataset::GrvSupplierInvoices.cleaned_path(&cleaned_dir));
    let ids = column(&table, "grv_id");
    let row = ids.iter().position(|id| id == "GRV-Tst-0").expect("test row");
    assert_eq!(column(&table, "difference")[row], "5");
}

#[test]
fn negative_selling_price_takes_column_median() {
    let root = temp_dir("menu");
    let raw_dir = root.join("raw");
    generate_raw(&raw_dir);
    fs::write(
        Dataset::MenuPricing.raw_path(&raw_dir),
        "sku,selling_price\nBread_Standard,1.00\nBuns_6pk,1.10\nDoughnut,-3\nBread_Premium,1.40\n",
    )
    .expect("write menu");

    let cleaned_dir = root.join("cleaned");
    CleaningEngine::new(CleanOptions::new(&raw_dir, &cleaned_dir))
        .run()
        .expect("clean");

    let table = read_table(&Dataset::MenuPricing.cleaned_path(&cleaned_dir));
    let prices = numbers(&table, "selling_price");
    assert!((prices[2] - 1.05).abs() < 1e-12);
    assert!(prices.iter().all(|price| *price >= 0.0));
}

#[test]
fn negative_closing_stock_is_reset_to_zero() {
    let root = temp_dir("stock");
    let raw_dir = root.join("raw");
    generate_raw(&raw_dir);
    append_rows(
        &Dataset::StockLevels.raw_path(&raw_dir),
        "2025-01-01,Avondale,Doughnut,10,0,20,-10\n",
    );

    let cleaned_dir = root.join("cleaned");
    let result = CleaningEngine::new(CleanOptions::new(&raw_dir, &cleaned_dir))
        .run()
        .expect("clean");

    let table = read_table(&Dataset::StockLevels.cleaned_path(&cleaned_dir));
    let last = table.rows.last().expect("rows");
    assert_eq!(last[6], "0");
    for name in ["opening_stock", "deliveries", "sales", "closing_stock"] {
        assert!(numbers(&table, name).iter().all(|value| *value >= 0.0));
    }
    let report = result.report.table(Dataset::StockLevels).expect("stock report");
    assert_eq!(report.values_clamped, 1);
}

#[test]
fn end_to_end_output_holds_cleaning_invariants() {
    let root = temp_dir("e2e");
    let raw_dir = root.join("raw");
    generate_raw(&raw_dir);
    let sales_path = Dataset::DailySales.raw_path(&raw_dir);
    let first_row = fs::read_to_string(&sales_path)
        .expect("read sales")
        .lines()
        .nth(1)
        .expect("first data row")
        .to_string();
    append_rows(
        &sales_path,
        &format!("{first_row}\nnot-a-date,Avondale,Doughnut,-4,abc,1.5\n"),
    );

    let cleaned_dir = root.join("cleaned");
    let result = CleaningEngine::new(CleanOptions::new(&raw_dir, &cleaned_dir))
        .run()
        .expect("clean");
    assert_eq!(result.report.tables.len(), 6);

    let sales_report = result.report.table(Dataset::DailySales).expect("sales report");
    assert_eq!(sales_report.rows_read, 932);
    assert_eq!(sales_report.duplicates_removed, 1);
    assert_eq!(sales_report.rows_written, 931);
    assert_eq!(sales_report.dates_unparsed, 1);

    for dataset in Dataset::ALL {
        let table = read_table(&dataset.cleaned_path(&cleaned_dir));
        assert_eq!(table.headers, dataset.columns());
        let unique: HashSet<&Vec<String>> = table.rows.iter().collect();
        assert_eq!(unique.len(), table.rows.len(), "{dataset} has duplicates");
    }

    let sales = read_table(&Dataset::DailySales.cleaned_path(&cleaned_dir));
    assert!(numbers(&sales, "quantity_sold").iter().all(|value| *value >= 0.0));
    assert!(numbers(&sales, "unit_price").iter().all(|value| *value >= 0.0));
    let dates = column(&sales, "date");
    assert_eq!(dates.last().map(String::as_str), Some(""));

    let grv = read_table(&Dataset::GrvSupplierInvoices.cleaned_path(&cleaned_dir));
    let received = numbers(&grv, "grv_quantity");
    let invoiced = numbers(&grv, "invoice_quantity");
    for (row, difference) in numbers(&grv, "difference").iter().enumerate() {
        assert_eq!(*difference, invoiced[row] - received[row]);
    }

    let cash = read_table(&Dataset::StoreCashSpotchecks.cleaned_path(&cleaned_dir));
    let expected = numbers(&cash, "expected_cash");
    let actual = numbers(&cash, "actual_cash");
    for (row, variance) in numbers(&cash, "variance").iter().enumerate() {
        assert_eq!(*variance, actual[row] - expected[row]);
    }
}

#[test]
fn second_pass_is_a_no_op() {
    let root = temp_dir("idempotent");
    let raw_dir = root.join("raw");
    generate_raw(&raw_dir);
    append_rows(
        &Dataset::MenuPricing.raw_path(&raw_dir),
        "Scone,oops\nScone,-1\nScone,-1\n",
    );

    let first_dir = root.join("first");
    CleaningEngine::new(CleanOptions::new(&raw_dir, &first_dir))
        .run()
        .expect("first clean");

    let second_raw = root.join("second_raw");
    fs::create_dir_all(&second_raw).expect("create second raw dir");
    for dataset in Dataset::ALL {
        fs::copy(
            dataset.cleaned_path(&first_dir),
            dataset.raw_path(&second_raw),
        )
        .expect("copy cleaned file");
    }

    let second_dir = root.join("second");
    let result = CleaningEngine::new(CleanOptions::new(&second_raw, &second_dir))
        .run()
        .expect("second clean");

    for dataset in Dataset::ALL {
        let first = fs::read_to_string(dataset.cleaned_path(&first_dir)).expect("first");
        let second = fs::read_to_string(dataset.cleaned_path(&second_dir)).expect("second");
        assert_eq!(first, second, "{dataset} changed on second pass");
    }
    assert!(result
        .report
        .tables
        .iter()
        .all(|table| table.duplicates_removed == 0 && table.values_clamped == 0));
}

#[test]
fn missing_raw_file_aborts_without_output() {
    let root = temp_dir("missing");
    let raw_dir = root.join("raw");
    generate_raw(&raw_dir);
    let missing = Dataset::RecipesAndRawMaterials.raw_path(&raw_dir);
    fs::remove_file(&missing).expect("remove raw file");

    let cleaned_dir = root.join("cleaned");
    let result = CleaningEngine::new(CleanOptions::new(&raw_dir, &cleaned_dir)).run();
    match result {
        Err(CleanError::MissingInput { path }) => assert_eq!(path, missing),
        other => panic!("expected missing input, got {other:?}"),
    }
    assert!(!cleaned_dir.exists());
}

#[test]
fn degenerate_price_column_aborts_without_output() {
    let root = temp_dir("degenerate");
    let raw_dir = root.join("raw");
    generate_raw(&raw_dir);
    fs::write(
        Dataset::MenuPricing.raw_path(&raw_dir),
        "sku,selling_price\nBread_Standard,tbd\nDoughnut,\n",
    )
    .expect("write menu");

    let cleaned_dir = root.join("cleaned");
    let result = CleaningEngine::new(CleanOptions::new(&raw_dir, &cleaned_dir)).run();
    let err = result.expect_err("degenerate column");
    assert!(err.to_string().contains("selling_price"));
    assert!(!Dataset::DailySales.cleaned_path(&cleaned_dir).exists());
}

#[test]
fn unwritable_cleaned_dir_names_the_path() {
    let root = temp_dir("unwritable");
    let raw_dir = root.join("raw");
    generate_raw(&raw_dir);
    let blocker = root.join("blocker");
    fs::write(&blocker, "not a directory").expect("write blocker file");

    let cleaned_dir = blocker.join("cleaned");
    let result = CleaningEngine::new(CleanOptions::new(&raw_dir, &cleaned_dir)).run();
    match result {
        Err(err @ CleanError::CreateDir { .. }) => {
            assert!(err.to_string().contains("blocker"), "{err}");
        }
        other => panic!("expected create dir error, got {other:?}"),
    }
}
