use std::fs;
use std::path::PathBuf;

use brigade::loader::{load_restaurant, LoaderError};
use tempfile::TempDir;

const MENU_FEED: &str = "\
1
Bakery
2
Bread
1 101
Croissant
2 101 103
";

const STOCK_FEED: &str = "\
5
101 Flour
2.0 10
103 Butter
3.5 20
";

const TABLES_FEED: &str = "2\n2 3\n1 4\n";

fn write_feeds(dir: &TempDir) -> (PathBuf, PathBuf, PathBuf) {
    let menu = dir.path().join("menu.in");
    let stock = dir.path().join("stock.in");
    let tables = dir.path().join("tables.in");
    fs::write(&menu, MENU_FEED).unwrap();
    fs::write(&stock, STOCK_FEED).unwrap();
    fs::write(&tables, TABLES_FEED).unwrap();
    (menu, stock, tables)
}

#[test]
fn test_load_restaurant_from_files_runs_pricing_pass() {
    let dir = TempDir::new().unwrap();
    let (menu, stock, tables) = write_feeds(&dir);

    let restaurant = load_restaurant(&menu, &stock, &tables).unwrap();

    assert_eq!(restaurant.pantry().len(), 2);
    assert_eq!(restaurant.menu().dish_count(), 2);
    assert_eq!(restaurant.table_capacities(), &[6, 4]);

    // Pricing ran on open: Bread = Flour(2.0) with the 1.2 markup.
    let bread = restaurant.menu().find_dish("Bread").unwrap();
    assert!((bread.price - 2.4).abs() < 1e-9);
    assert!((bread.profit_per_unit - 0.4).abs() < 1e-9);

    // Croissant = Flour(2.0) + Butter(3.5).
    let croissant = restaurant.menu().find_dish("Croissant").unwrap();
    assert!((croissant.price - 6.6).abs() < 1e-9);
}

#[test]
fn test_missing_feed_file_is_io_error() {
    let dir = TempDir::new().unwrap();
    let (menu, stock, _) = write_feeds(&dir);
    let missing = dir.path().join("nope.in");

    let result = load_restaurant(&menu, &stock, &missing);
    assert!(matches!(result, Err(LoaderError::Io { .. })));
}

#[test]
fn test_truncated_stock_file_still_loads() {
    let dir = TempDir::new().unwrap();
    let (menu, stock, tables) = write_feeds(&dir);
    // Chop the stock feed mid-record; the loader keeps the intact prefix.
    fs::write(&stock, "5\n101 Flour\n2.0 10\n103 Butter\n").unwrap();

    let restaurant = load_restaurant(&menu, &stock, &tables).unwrap();
    assert_eq!(restaurant.pantry().len(), 1);

    // Croissant's butter reference now dangles, so only flour prices it.
    let croissant = restaurant.menu().find_dish("Croissant").unwrap();
    assert!((croissant.price - 2.4).abs() < 1e-9);
}
