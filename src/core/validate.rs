use std::fmt;

use crate::models::food::FoodItem;
use crate::models::nutrients::NutrientValue;

/// What the add-food form did wrong. Surfaced to the caller for re-entry,
/// never treated as a bug.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FoodInputError {
    /// Name empty or whitespace-only after trimming.
    InvalidName,
    /// One of the numeric fields is not a non-negative integer.
    InvalidNumbers,
}

impl FoodInputError {
    /// Stable code for the JSON error envelope.
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidName => "invalid_name",
            Self::InvalidNumbers => "invalid_numbers",
        }
    }
}

impl fmt::Display for FoodInputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidName => write!(f, "food name must not be empty"),
            Self::InvalidNumbers => write!(
                f,
                "calories, protein, carbs and fat must be non-negative integers"
            ),
        }
    }
}

impl std::error::Error for FoodInputError {}

/// Build a food item from raw form fields. The name is checked first, then
/// all four numeric fields together.
pub fn food_item(
    name: &str,
    calories: &str,
    protein: &str,
    carbs: &str,
    fat: &str,
) -> Result<FoodItem, FoodInputError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(FoodInputError::InvalidName);
    }

    match (
        parse_amount(calories),
        parse_amount(protein),
        parse_amount(carbs),
        parse_amount(fat),
    ) {
        (Some(calories), Some(protein), Some(carbs), Some(fat)) => Ok(FoodItem::new(
            name,
            NutrientValue::new(calories, protein, carbs, fat),
        )),
        _ => Err(FoodInputError::InvalidNumbers),
    }
}

fn parse_amount(raw: &str) -> Option<i64> {
    raw.trim().parse::<i64>().ok().filter(|v| *v >= 0)
}
