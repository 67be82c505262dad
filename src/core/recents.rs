use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::models::food::FoodItem;
use crate::models::log::DailyLog;
use crate::models::meal::Meal;

/// How many entries each recents list keeps.
pub const CAPACITY: usize = 12;

/// Recently used foods and meals, newest first, one entry per
/// case-insensitive name. Derived from the logs; persisted only as a
/// convenience and rebuilt on load.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Recents {
    pub foods: Vec<FoodItem>,
    pub meals: Vec<Meal>,
}

impl Recents {
    /// Fold one day into the cache. The day's entries go in front of the
    /// cached ones, then the combined list is deduped by lowercase name
    /// (first occurrence wins) and cut to capacity.
    pub fn capture(&mut self, log: &DailyLog) {
        let day_foods: Vec<FoodItem> = log
            .meals
            .iter()
            .flat_map(|m| m.items.iter().cloned())
            .collect();
        self.meals = merge(log.meals.clone(), &self.meals, |m: &Meal| m.name.as_str());
        self.foods = merge(day_foods, &self.foods, |f: &FoodItem| f.name.as_str());
    }

    /// Recompute the cache from scratch. Callers must hand over logs in
    /// ascending date order so the latest day wins name ties.
    pub fn rebuild<'a, I>(logs: I) -> Self
    where
        I: IntoIterator<Item = &'a DailyLog>,
    {
        let mut recents = Self::default();
        for log in logs {
            recents.capture(log);
        }
        recents
    }
}

fn merge<T: Clone>(fresh: Vec<T>, cached: &[T], name_of: impl Fn(&T) -> &str) -> Vec<T> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut kept = Vec::new();
    for entry in fresh.into_iter().chain(cached.iter().cloned()) {
        if seen.insert(name_of(&entry).to_lowercase()) {
            kept.push(entry);
            if kept.len() == CAPACITY {
                break;
            }
        }
    }
    kept
}
