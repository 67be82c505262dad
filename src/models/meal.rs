use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::food::FoodItem;
use crate::models::nutrients::{Aggregatable, NutrientValue};

pub const DEFAULT_EMOJI: &str = "🍽️";

/// A named, emoji-tagged group of food items within one day's log.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Meal {
    pub id: String,
    pub name: String,
    pub emoji: String,
    pub items: Vec<FoodItem>,
}

impl Meal {
    pub fn new(name: impl Into<String>, emoji: Option<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            emoji: emoji.unwrap_or_else(|| DEFAULT_EMOJI.to_string()),
            items: Vec::new(),
        }
    }

    pub fn with_items(name: impl Into<String>, emoji: Option<String>, items: Vec<FoodItem>) -> Self {
        let mut meal = Self::new(name, emoji);
        meal.items = items;
        meal
    }
}

impl Aggregatable for Meal {
    fn total_nutrients(&self) -> NutrientValue {
        self.items.iter().map(|i| i.total_nutrients()).sum()
    }
}
