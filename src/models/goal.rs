use serde::{Deserialize, Serialize};

/// Daily macro targets. Every dimension is optional; `None` means
/// unconstrained and is skipped by evaluation, never treated as zero.
/// One goal is active at a time and applies to every day.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Goal {
    pub daily_calories: Option<i64>,
    pub daily_protein: Option<i64>,
    pub daily_carbs: Option<i64>,
    pub daily_fat: Option<i64>,
}

impl Goal {
    pub fn is_unconstrained(&self) -> bool {
        self.daily_calories.is_none()
            && self.daily_protein.is_none()
            && self.daily_carbs.is_none()
            && self.daily_fat.is_none()
    }
}
