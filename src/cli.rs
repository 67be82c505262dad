use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use clap_complete::Shell;

#[derive(Parser)]
#[command(name = "macrolog", version, about = "Agent-native nutrition tracking CLI")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output as human-readable text instead of JSON
    #[arg(long = "human", short = 'H', global = true)]
    pub human: bool,

    /// Operate on this day instead of today (YYYY-MM-DD)
    #[arg(long, global = true)]
    pub date: Option<NaiveDate>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize profile and data directory
    Init {
        /// Skip interactive setup, keep defaults
        #[arg(long)]
        skip: bool,
    },

    /// Add or remove meals on the day's log
    Meal {
        #[command(subcommand)]
        action: MealAction,
    },

    /// Show the day's log with totals
    Show,

    /// Quick overview: totals, goal verdict, meal count
    Status,

    /// Manage the daily macro goal
    Goal {
        #[command(subcommand)]
        action: GoalAction,
    },

    /// Recently used foods and meals
    Recents {
        /// Only show foods
        #[arg(long, conflicts_with = "meals")]
        foods: bool,

        /// Only show meals
        #[arg(long)]
        meals: bool,
    },

    /// Manage profile settings
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Generate shell completion scripts
    Completions {
        /// Target shell
        shell: Shell,
    },
}

#[derive(Subcommand)]
pub enum MealAction {
    /// Add a meal built from item specs
    Add {
        /// Meal name
        name: String,

        /// Display emoji (defaults to a generic icon)
        #[arg(long)]
        emoji: Option<String>,

        /// Item spec "name,calories,protein,carbs,fat" (repeatable)
        #[arg(long = "item")]
        items: Vec<String>,

        /// Batch JSON array of {name, calories, protein, carbs, fat}
        #[arg(long)]
        batch: Option<String>,
    },

    /// Remove a meal by id
    Remove {
        /// Meal id
        id: String,
    },
}

#[derive(Subcommand)]
pub enum GoalAction {
    /// Replace the active goal; absent flags leave that dimension unconstrained
    Set {
        /// Daily calorie ceiling (kcal)
        #[arg(long)]
        calories: Option<i64>,

        /// Daily protein floor (g)
        #[arg(long)]
        protein: Option<i64>,

        /// Daily carb ceiling (g)
        #[arg(long)]
        carbs: Option<i64>,

        /// Daily fat ceiling (g)
        #[arg(long)]
        fat: Option<i64>,
    },

    /// Show the active goal and the day's verdict
    Show,

    /// Reset every dimension to unconstrained
    Clear,
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show profile settings
    Show,
    /// Set a profile value (supported key: name)
    Set {
        /// Config key
        key: String,
        /// Config value
        value: String,
    },
}
