use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::nutrients::{Aggregatable, NutrientValue};

/// A named food with its nutrient content. Value-semantic: copying a food
/// into two meals yields two independent items.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FoodItem {
    pub id: String,
    pub name: String,
    pub nutrients: NutrientValue,
}

impl FoodItem {
    pub fn new(name: impl Into<String>, nutrients: NutrientValue) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            nutrients,
        }
    }
}

impl Aggregatable for FoodItem {
    fn total_nutrients(&self) -> NutrientValue {
        self.nutrients
    }
}
