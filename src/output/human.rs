use colored::Colorize;
use comfy_table::{ContentArrangement, Table, presets::UTF8_FULL};

use crate::core::goal::GoalStatus;
use crate::core::recents::Recents;
use crate::models::goal::Goal;
use crate::models::log::DailyLog;
use crate::models::nutrients::{Aggregatable, NutrientValue};

/// Compact macro summary, e.g. `230 kcal (15p / 16c / 11f)`.
pub fn format_totals(t: &NutrientValue) -> String {
    format!(
        "{} kcal ({}p / {}c / {}f)",
        t.calories, t.protein, t.carbs, t.fat
    )
}

/// Pretty-print one day's log as a table, one row per item plus a totals
/// row.
pub fn format_log(log: &DailyLog) -> String {
    let mut out = format!("=== {} ===\n", log.date);

    if log.meals.is_empty() {
        out.push_str("No meals logged.");
        return out;
    }

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["Meal", "Item", "kcal", "Protein", "Carbs", "Fat"]);

    for meal in &log.meals {
        let label = format!("{} {}", meal.emoji, meal.name);
        if meal.items.is_empty() {
            table.add_row(vec![label, "(empty)".to_string(), String::new(), String::new(), String::new(), String::new()]);
            continue;
        }
        for (i, item) in meal.items.iter().enumerate() {
            let n = item.nutrients;
            table.add_row(vec![
                if i == 0 { label.clone() } else { String::new() },
                item.name.clone(),
                n.calories.to_string(),
                n.protein.to_string(),
                n.carbs.to_string(),
                n.fat.to_string(),
            ]);
        }
    }

    let totals = log.total_nutrients();
    table.add_row(vec![
        "Total".to_string(),
        String::new(),
        totals.calories.to_string(),
        totals.protein.to_string(),
        totals.carbs.to_string(),
        totals.fat.to_string(),
    ]);

    out.push_str(&table.to_string());
    out
}

/// One line per goal dimension, `unconstrained` where unset.
pub fn format_goal(goal: &Goal) -> String {
    let dim = |label: &str, target: Option<i64>, unit: &str| match target {
        Some(t) => format!("{}: {} {}\n", label, t, unit),
        None => format!("{}: unconstrained\n", label),
    };
    let mut out = String::new();
    out.push_str(&dim("calories", goal.daily_calories, "kcal"));
    out.push_str(&dim("protein", goal.daily_protein, "g"));
    out.push_str(&dim("carbs", goal.daily_carbs, "g"));
    out.push_str(&dim("fat", goal.daily_fat, "g"));
    out
}

/// Colored verdict: green when on track, one red line per issue otherwise.
pub fn format_goal_status(status: &GoalStatus) -> String {
    match status {
        GoalStatus::OnTrack => format!("{}", "On track".green()),
        GoalStatus::NeedsAttention(issues) => {
            let lines: Vec<String> = issues
                .iter()
                .map(|issue| format!("{} {}", "!".red(), issue.to_string().red()))
                .collect();
            lines.join("\n")
        }
    }
}

/// Recents cache, foods then meals, newest first.
pub fn format_recents(recents: &Recents) -> String {
    let mut out = String::new();

    out.push_str("Foods:\n");
    if recents.foods.is_empty() {
        out.push_str("  (none)\n");
    }
    for f in &recents.foods {
        out.push_str(&format!("  {} — {}\n", f.name, format_totals(&f.nutrients)));
    }

    out.push_str("Meals:\n");
    if recents.meals.is_empty() {
        out.push_str("  (none)\n");
    }
    for m in &recents.meals {
        out.push_str(&format!(
            "  {} {} — {}\n",
            m.emoji,
            m.name,
            format_totals(&m.total_nutrients())
        ));
    }

    out
}
