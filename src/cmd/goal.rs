use anyhow::Result;
use chrono::{Local, NaiveDate};
use serde_json::json;

use macrolog::core::goal::GoalEvaluable;
use macrolog::models::goal::Goal;
use macrolog::output;
use macrolog::output::human;
use macrolog::store::Store;

pub fn run_set(
    calories: Option<i64>,
    protein: Option<i64>,
    carbs: Option<i64>,
    fat: Option<i64>,
    human_flag: bool,
) -> Result<()> {
    for target in [calories, protein, carbs, fat].into_iter().flatten() {
        if target < 0 {
            anyhow::bail!("goal targets must be non-negative: {}", target);
        }
    }

    let goals = Goal {
        daily_calories: calories,
        daily_protein: protein,
        daily_carbs: carbs,
        daily_fat: fat,
    };

    let mut store = Store::open_default()?;
    store.update_goals(goals)?;

    if human_flag {
        println!("Goal set.\n{}", human::format_goal(&goals));
    } else {
        let out = output::success("goal", json!({ "goals": goals }));
        println!("{}", serde_json::to_string(&out)?);
    }
    Ok(())
}

pub fn run_show(date: Option<NaiveDate>, human_flag: bool) -> Result<()> {
    let mut store = Store::open_default()?;
    let day = date.unwrap_or_else(|| Local::now().date_naive());
    let log = store.log_for_day(day)?;
    let goals = store.state().goals;
    let status = log.goal_status(&goals);

    if human_flag {
        print!("{}", human::format_goal(&goals));
        if !goals.is_unconstrained() {
            println!("{}", human::format_goal_status(&status));
        }
    } else {
        let out = output::success("goal", json!({ "goals": goals, "goal_status": status }));
        println!("{}", serde_json::to_string(&out)?);
    }
    Ok(())
}

pub fn run_clear(human_flag: bool) -> Result<()> {
    let mut store = Store::open_default()?;
    store.update_goals(Goal::default())?;

    if human_flag {
        println!("Goal cleared.");
    } else {
        let out = output::success("goal", json!({ "goals": Goal::default() }));
        println!("{}", serde_json::to_string(&out)?);
    }
    Ok(())
}
