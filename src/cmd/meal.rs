use anyhow::Result;
use chrono::{Local, NaiveDate};
use regex::Regex;
use serde_json::json;

use macrolog::core::validate;
use macrolog::models::food::FoodItem;
use macrolog::models::meal::Meal;
use macrolog::models::nutrients::Aggregatable;
use macrolog::output;
use macrolog::output::human;
use macrolog::store::Store;

pub fn run_add(
    name: &str,
    emoji: Option<String>,
    item_specs: &[String],
    batch: Option<&str>,
    date: Option<NaiveDate>,
    human_flag: bool,
) -> Result<()> {
    let mut items: Vec<FoodItem> = Vec::new();
    for spec in item_specs {
        items.push(parse_item_spec(spec)?);
    }
    if let Some(batch_json) = batch {
        items.extend(parse_batch(batch_json)?);
    }

    let meal = Meal::with_items(name, emoji, items);

    let mut store = Store::open_default()?;
    let day = date.unwrap_or_else(|| Local::now().date_naive());
    let log = store.add_meal(day, meal.clone())?;

    if human_flag {
        println!(
            "Added {} {} ({}) to {}",
            meal.emoji,
            meal.name,
            human::format_totals(&meal.total_nutrients()),
            log.date
        );
    } else {
        let out = output::success(
            "meal",
            json!({ "meal": meal, "totals": log.total_nutrients() }),
        );
        println!("{}", serde_json::to_string(&out)?);
    }
    Ok(())
}

pub fn run_remove(meal_id: &str, date: Option<NaiveDate>, human_flag: bool) -> Result<()> {
    let mut store = Store::open_default()?;
    let day = date.unwrap_or_else(|| Local::now().date_naive());

    if !store.remove_meal(day, meal_id)? {
        anyhow::bail!("meal not found on {}: {}", day, meal_id);
    }

    if human_flag {
        println!("Meal removed: {}", meal_id);
    } else {
        let out = output::success("meal", json!({ "removed": meal_id }));
        println!("{}", serde_json::to_string(&out)?);
    }
    Ok(())
}

/// Split an `--item` spec into its five raw fields. Only the last four
/// commas separate; the name may contain its own. Field contents are left
/// to the validation layer.
fn parse_item_spec(spec: &str) -> Result<FoodItem> {
    let re = Regex::new(r"^\s*(.+?)\s*,\s*([^,]*?)\s*,\s*([^,]*?)\s*,\s*([^,]*?)\s*,\s*([^,]*?)\s*$")?;
    let caps = re.captures(spec).ok_or_else(|| {
        anyhow::anyhow!(
            "invalid item spec (expected name,calories,protein,carbs,fat): {}",
            spec
        )
    })?;
    let item = validate::food_item(&caps[1], &caps[2], &caps[3], &caps[4], &caps[5])?;
    Ok(item)
}

/// Build items from a JSON array of form objects. Every field is passed to
/// validation as raw text, so a malformed entry fails the same way a
/// malformed form would.
fn parse_batch(batch_json: &str) -> Result<Vec<FoodItem>> {
    let entries: Vec<serde_json::Value> = serde_json::from_str(batch_json)?;
    let mut items = Vec::new();
    for entry in &entries {
        let item = validate::food_item(
            &field_text(entry, "name"),
            &field_text(entry, "calories"),
            &field_text(entry, "protein"),
            &field_text(entry, "carbs"),
            &field_text(entry, "fat"),
        )?;
        items.push(item);
    }
    Ok(items)
}

fn field_text(entry: &serde_json::Value, key: &str) -> String {
    match &entry[key] {
        serde_json::Value::String(s) => s.clone(),
        serde_json::Value::Null => String::new(),
        other => other.to_string(),
    }
}
