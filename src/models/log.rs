use chrono::{DateTime, Local, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::meal::Meal;
use crate::models::nutrients::{Aggregatable, NutrientValue};

/// Normalize a timestamp to its local calendar day. All time-of-day and
/// zone information is discarded; the day is the log's identity.
pub fn day_of(at: DateTime<Local>) -> NaiveDate {
    at.date_naive()
}

/// Render a day as the midnight ISO-8601 timestamp used in the state
/// document, e.g. `2026-08-07T00:00:00`.
pub fn render_day_key(day: NaiveDate) -> String {
    format!("{}T00:00:00", day.format("%Y-%m-%d"))
}

/// Parse a document date key. Accepts a midnight timestamp or a bare
/// `YYYY-MM-DD`; anything else is `None` (the caller drops the entry).
pub fn parse_day_key(s: &str) -> Option<NaiveDate> {
    if let Ok(dt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S") {
        return Some(dt.date());
    }
    s.parse::<NaiveDate>().ok()
}

/// The nutrition record for one calendar day.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DailyLog {
    pub id: String,
    #[serde(with = "midnight")]
    pub date: NaiveDate,
    pub meals: Vec<Meal>,
}

impl DailyLog {
    pub fn empty(day: NaiveDate) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            date: day,
            meals: Vec::new(),
        }
    }

    /// Build a log for the day containing `at`, normalizing away the time.
    pub fn for_timestamp(at: DateTime<Local>) -> Self {
        Self::empty(day_of(at))
    }

    pub fn add_meal(&mut self, meal: Meal) {
        self.meals.push(meal);
    }

    /// Remove a meal by id. Returns whether anything was removed.
    pub fn remove_meal(&mut self, meal_id: &str) -> bool {
        let before = self.meals.len();
        self.meals.retain(|m| m.id != meal_id);
        self.meals.len() < before
    }
}

impl Aggregatable for DailyLog {
    fn total_nutrients(&self) -> NutrientValue {
        self.meals.iter().map(|m| m.total_nutrients()).sum()
    }
}

mod midnight {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer, de};

    pub fn serialize<S: Serializer>(day: &NaiveDate, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&super::render_day_key(*day))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<NaiveDate, D::Error> {
        let raw = String::deserialize(d)?;
        super::parse_day_key(&raw)
            .ok_or_else(|| de::Error::custom(format!("invalid date: {raw}")))
    }
}
