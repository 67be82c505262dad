use serde::{Deserialize, Serialize};
use std::ops::Add;

/// One measurement of the four tracked macros, in kcal and grams.
///
/// Values are kept as i64 so folding any realistic (or hostile) number of
/// entries cannot wrap.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct NutrientValue {
    pub calories: i64,
    pub protein: i64,
    pub carbs: i64,
    pub fat: i64,
}

impl NutrientValue {
    /// Additive identity: `v + ZERO == v`.
    pub const ZERO: Self = Self {
        calories: 0,
        protein: 0,
        carbs: 0,
        fat: 0,
    };

    pub fn new(calories: i64, protein: i64, carbs: i64, fat: i64) -> Self {
        Self {
            calories,
            protein,
            carbs,
            fat,
        }
    }
}

impl Add for NutrientValue {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            calories: self.calories + other.calories,
            protein: self.protein + other.protein,
            carbs: self.carbs + other.carbs,
            fat: self.fat + other.fat,
        }
    }
}

impl std::iter::Sum for NutrientValue {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

/// Anything whose nutrient content can be totalled: a food item on its own,
/// a meal over its items, a day over its meals.
pub trait Aggregatable {
    fn total_nutrients(&self) -> NutrientValue;

    /// Calories are always read off the aggregate, never stored separately.
    fn calorie_count(&self) -> i64 {
        self.total_nutrients().calories
    }
}
