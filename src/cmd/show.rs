use anyhow::Result;
use chrono::{Local, NaiveDate};
use serde_json::json;

use macrolog::models::nutrients::Aggregatable;
use macrolog::output;
use macrolog::output::human;
use macrolog::store::Store;

pub fn run(date: Option<NaiveDate>, human_flag: bool) -> Result<()> {
    let mut store = Store::open_default()?;
    let day = date.unwrap_or_else(|| Local::now().date_naive());
    let log = store.log_for_day(day)?;

    if human_flag {
        println!("{}", human::format_log(&log));
    } else {
        let out = output::success(
            "show",
            json!({ "log": log, "totals": log.total_nutrients() }),
        );
        println!("{}", serde_json::to_string(&out)?);
    }
    Ok(())
}
