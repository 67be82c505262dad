#![allow(dead_code)]

use chrono::NaiveDate;
use macrolog::models::food::FoodItem;
use macrolog::models::meal::Meal;
use macrolog::models::nutrients::NutrientValue;
use macrolog::store::Store;
use tempfile::TempDir;

/// Create a store backed by a file in a temporary directory. Opening a
/// missing file seeds the example day.
pub fn setup_store() -> (TempDir, Store) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("state.json");
    let store = Store::open(&path).unwrap();
    (dir, store)
}

/// Create a store from a pre-written empty document, so tests start with
/// no logs at all instead of the seeded example day.
pub fn setup_empty_store() -> (TempDir, Store) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("state.json");
    std::fs::write(&path, r#"{"userFirstName":"","logs":{}}"#).unwrap();
    let store = Store::open(&path).unwrap();
    (dir, store)
}

pub fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn food(name: &str, calories: i64, protein: i64, carbs: i64, fat: i64) -> FoodItem {
    FoodItem::new(name, NutrientValue::new(calories, protein, carbs, fat))
}

pub fn meal(name: &str, items: Vec<FoodItem>) -> Meal {
    Meal::with_items(name, None, items)
}
