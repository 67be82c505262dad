use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::core::recents::Recents;
use crate::models::goal::Goal;
use crate::models::log::{DailyLog, parse_day_key, render_day_key};

use super::AppState;

/// On-disk form of the full application state: one JSON object, rewritten
/// wholesale on every save. Log map keys are the normalized day rendered as
/// a midnight ISO-8601 timestamp.
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StateDocument {
    #[serde(default)]
    pub user_first_name: String,
    #[serde(default)]
    pub goals: Goal,
    #[serde(default)]
    pub logs: BTreeMap<String, DailyLog>,
    /// Denormalized convenience copy; ignored on load and rebuilt instead.
    #[serde(default)]
    pub recents: Recents,
}

impl StateDocument {
    pub fn from_state(state: &AppState) -> Self {
        Self {
            user_first_name: state.user_first_name.clone(),
            goals: state.goals,
            logs: state
                .logs
                .values()
                .map(|log| (render_day_key(log.date), log.clone()))
                .collect(),
            recents: state.recents.clone(),
        }
    }

    /// Decode into in-memory state. Entries whose key does not parse as a
    /// date are dropped without error; recents come back from a rebuild
    /// over the surviving logs, oldest day first.
    pub fn into_state(self) -> AppState {
        let mut logs: BTreeMap<chrono::NaiveDate, DailyLog> = BTreeMap::new();
        for (key, log) in self.logs {
            if let Some(day) = parse_day_key(&key) {
                logs.insert(day, log);
            }
        }
        let recents = Recents::rebuild(logs.values());
        AppState {
            user_first_name: self.user_first_name,
            goals: self.goals,
            logs,
            recents,
        }
    }
}
