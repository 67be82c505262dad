use serde::Serialize;
use std::fmt;

use crate::models::goal::Goal;
use crate::models::log::DailyLog;
use crate::models::nutrients::Aggregatable;

/// One way a day's totals miss the active goal. The payload is the positive
/// size of the miss. Protein runs the other way from the rest: too little is
/// the problem, not too much.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(tag = "kind", content = "by", rename_all = "snake_case")]
pub enum GoalIssue {
    OverCalories(i64),
    UnderProtein(i64),
    OverCarbs(i64),
    OverFat(i64),
}

impl fmt::Display for GoalIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OverCalories(by) => write!(f, "{} kcal over the calorie target", by),
            Self::UnderProtein(by) => write!(f, "{} g short of the protein target", by),
            Self::OverCarbs(by) => write!(f, "{} g over the carb target", by),
            Self::OverFat(by) => write!(f, "{} g over the fat target", by),
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(tag = "status", content = "issues", rename_all = "snake_case")]
pub enum GoalStatus {
    OnTrack,
    NeedsAttention(Vec<GoalIssue>),
}

impl GoalStatus {
    pub fn is_on_track(&self) -> bool {
        matches!(self, Self::OnTrack)
    }
}

/// Evaluate a day against the active goal.
///
/// Dimensions are checked in a fixed order (calories, protein, carbs, fat)
/// and issues keep that order. Unset dimensions never emit. Comparisons are
/// strict: landing exactly on a target is on track.
pub fn evaluate(log: &DailyLog, goal: &Goal) -> GoalStatus {
    let totals = log.total_nutrients();
    let mut issues = Vec::new();

    if let Some(target) = goal.daily_calories
        && totals.calories > target
    {
        issues.push(GoalIssue::OverCalories(totals.calories - target));
    }
    if let Some(target) = goal.daily_protein
        && totals.protein < target
    {
        issues.push(GoalIssue::UnderProtein(target - totals.protein));
    }
    if let Some(target) = goal.daily_carbs
        && totals.carbs > target
    {
        issues.push(GoalIssue::OverCarbs(totals.carbs - target));
    }
    if let Some(target) = goal.daily_fat
        && totals.fat > target
    {
        issues.push(GoalIssue::OverFat(totals.fat - target));
    }

    if issues.is_empty() {
        GoalStatus::OnTrack
    } else {
        GoalStatus::NeedsAttention(issues)
    }
}

/// Implemented by the one container a goal is judged against.
pub trait GoalEvaluable {
    fn goal_status(&self, goal: &Goal) -> GoalStatus;
}

impl GoalEvaluable for DailyLog {
    fn goal_status(&self, goal: &Goal) -> GoalStatus {
        evaluate(self, goal)
    }
}
