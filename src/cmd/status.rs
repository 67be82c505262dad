use anyhow::Result;
use chrono::{Local, NaiveDate};
use serde::Serialize;

use macrolog::core::goal::{GoalEvaluable, GoalStatus};
use macrolog::models::goal::Goal;
use macrolog::models::nutrients::{Aggregatable, NutrientValue};
use macrolog::output;
use macrolog::output::human;
use macrolog::store::Store;

#[derive(Serialize)]
struct StatusData {
    date: NaiveDate,
    user_first_name: String,
    meal_count: usize,
    totals: NutrientValue,
    goals: Goal,
    goal_status: GoalStatus,
}

pub fn run(date: Option<NaiveDate>, human_flag: bool) -> Result<()> {
    let mut store = Store::open_default()?;
    let day = date.unwrap_or_else(|| Local::now().date_naive());
    let log = store.log_for_day(day)?;
    let goals = store.state().goals;

    let status = StatusData {
        date: day,
        user_first_name: store.state().user_first_name.clone(),
        meal_count: log.meals.len(),
        totals: log.total_nutrients(),
        goal_status: log.goal_status(&goals),
        goals,
    };

    if human_flag {
        println!("{}", format_status(&status));
    } else {
        let out = output::success("status", serde_json::to_value(&status)?);
        println!("{}", serde_json::to_string(&out)?);
    }
    Ok(())
}

fn format_status(s: &StatusData) -> String {
    let mut out = if s.user_first_name.is_empty() {
        format!("=== macrolog — {} ===\n", s.date)
    } else {
        format!("=== macrolog — {} — {} ===\n", s.user_first_name, s.date)
    };

    if s.meal_count == 0 {
        out.push_str("No meals logged.\n");
    } else {
        out.push_str(&format!(
            "{} meal(s), {}\n",
            s.meal_count,
            human::format_totals(&s.totals)
        ));
    }

    if s.goals.is_unconstrained() {
        out.push_str("No goal set.");
    } else {
        out.push_str(&human::format_goal_status(&s.goal_status));
    }
    out
}
