mod document;

pub use document::StateDocument;

use anyhow::Result;
use chrono::{DateTime, Local, NaiveDate};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::recents::Recents;
use crate::models::food::FoodItem;
use crate::models::goal::Goal;
use crate::models::log::{DailyLog, day_of};
use crate::models::meal::Meal;
use crate::models::nutrients::NutrientValue;

/// Everything the app knows, in memory. Logs are keyed by normalized day;
/// the `BTreeMap` keeps them in date order so recents rebuilds are
/// deterministic.
#[derive(Debug, Clone, PartialEq)]
pub struct AppState {
    pub user_first_name: String,
    pub goals: Goal,
    pub logs: BTreeMap<NaiveDate, DailyLog>,
    pub recents: Recents,
}

/// Sole owner of the application state and its file. Every mutating
/// operation rewrites the whole state file before returning; a failed write
/// surfaces as an error rather than being swallowed. `&mut self` on every
/// mutator gives the single-writer discipline for free.
pub struct Store {
    path: PathBuf,
    state: AppState,
}

impl Store {
    /// Load state from `path`. A missing, unreadable or corrupt file is not
    /// an error: the store seeds itself with an example day and persists
    /// that instead. Recents are rebuilt after either path.
    pub fn open(path: &Path) -> Result<Self> {
        let loaded = fs::read_to_string(path)
            .ok()
            .and_then(|raw| serde_json::from_str::<StateDocument>(&raw).ok());

        let seeded = loaded.is_none();
        let mut store = Self {
            path: path.to_path_buf(),
            state: match loaded {
                Some(doc) => doc.into_state(),
                None => seed_state(Local::now()),
            },
        };
        store.state.recents = Recents::rebuild(store.state.logs.values());
        if seeded {
            store.persist()?;
        }
        Ok(store)
    }

    /// Open the store at the standard per-user location.
    pub fn open_default() -> Result<Self> {
        Self::open(&Self::state_path())
    }

    pub fn data_dir() -> PathBuf {
        if let Ok(home) = std::env::var("MACROLOG_HOME") {
            return PathBuf::from(home);
        }
        dirs::home_dir()
            .expect("cannot resolve home directory")
            .join(".macrolog")
    }

    pub fn state_path() -> PathBuf {
        Self::data_dir().join("state.json")
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// The log for the day containing `at`, created (and persisted) on
    /// first access. A miss is never an error.
    pub fn get_or_create_log(&mut self, at: DateTime<Local>) -> Result<DailyLog> {
        self.log_for_day(day_of(at))
    }

    /// Same as [`Store::get_or_create_log`], for an already-normalized day.
    pub fn log_for_day(&mut self, day: NaiveDate) -> Result<DailyLog> {
        if let Some(log) = self.state.logs.get(&day) {
            return Ok(log.clone());
        }
        let log = DailyLog::empty(day);
        self.state.logs.insert(day, log.clone());
        self.persist()?;
        Ok(log)
    }

    /// Overwrite the entry at the log's own day, fold the log into the
    /// recents cache, persist.
    pub fn save_log(&mut self, log: DailyLog) -> Result<()> {
        self.state.recents.capture(&log);
        self.state.logs.insert(log.date, log);
        self.persist()
    }

    /// Append a meal to the given day's log.
    pub fn add_meal(&mut self, day: NaiveDate, meal: Meal) -> Result<DailyLog> {
        let mut log = self.log_for_day(day)?;
        log.add_meal(meal);
        self.save_log(log.clone())?;
        Ok(log)
    }

    /// Remove a meal from the given day's log. Returns whether the meal
    /// existed.
    pub fn remove_meal(&mut self, day: NaiveDate, meal_id: &str) -> Result<bool> {
        let mut log = self.log_for_day(day)?;
        if !log.remove_meal(meal_id) {
            return Ok(false);
        }
        self.save_log(log)?;
        Ok(true)
    }

    pub fn update_goals(&mut self, goals: Goal) -> Result<()> {
        self.state.goals = goals;
        self.persist()
    }

    pub fn update_name(&mut self, name: &str) -> Result<()> {
        self.state.user_first_name = name.to_string();
        self.persist()
    }

    /// Rewrite the state file: serialize, write a sibling temp file, rename
    /// over the target so readers never see a half-written document.
    fn persist(&self) -> Result<()> {
        let doc = StateDocument::from_state(&self.state);
        let contents = serde_json::to_string_pretty(&doc)?;

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let tmp = self.path.with_extension("json.tmp");

        #[cfg(unix)]
        {
            use std::fs::OpenOptions;
            use std::io::Write;
            use std::os::unix::fs::OpenOptionsExt;

            let mut file = OpenOptions::new()
                .write(true)
                .create(true)
                .truncate(true)
                .mode(0o600)
                .open(&tmp)?;
            file.write_all(contents.as_bytes())?;
        }
        #[cfg(not(unix))]
        {
            fs::write(&tmp, &contents)?;
        }

        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

/// First-run state: one example log for today so the app never starts on a
/// blank screen.
fn seed_state(now: DateTime<Local>) -> AppState {
    let mut log = DailyLog::for_timestamp(now);
    log.add_meal(Meal::with_items(
        "Breakfast",
        Some("🍳".to_string()),
        vec![
            FoodItem::new("Eggs", NutrientValue::new(150, 12, 1, 10)),
            FoodItem::new("Toast", NutrientValue::new(80, 3, 15, 1)),
        ],
    ));

    let mut logs = BTreeMap::new();
    logs.insert(log.date, log);

    AppState {
        user_first_name: String::new(),
        goals: Goal::default(),
        logs,
        recents: Recents::default(),
    }
}
