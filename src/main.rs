mod cli;
mod cmd;

use clap::Parser;
use cli::{Cli, Commands, ConfigAction, GoalAction, MealAction};
use macrolog::core::validate::FoodInputError;
use macrolog::output;
use std::process;

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Init { skip } => cmd::init::run(skip),
        Commands::Meal { action } => match action {
            MealAction::Add {
                name,
                emoji,
                items,
                batch,
            } => cmd::meal::run_add(&name, emoji, &items, batch.as_deref(), cli.date, cli.human),
            MealAction::Remove { id } => cmd::meal::run_remove(&id, cli.date, cli.human),
        },
        Commands::Show => cmd::show::run(cli.date, cli.human),
        Commands::Status => cmd::status::run(cli.date, cli.human),
        Commands::Goal { action } => match action {
            GoalAction::Set {
                calories,
                protein,
                carbs,
                fat,
            } => cmd::goal::run_set(calories, protein, carbs, fat, cli.human),
            GoalAction::Show => cmd::goal::run_show(cli.date, cli.human),
            GoalAction::Clear => cmd::goal::run_clear(cli.human),
        },
        Commands::Recents { foods, meals } => cmd::recents::run(foods, meals, cli.human),
        Commands::Config { action } => match action {
            ConfigAction::Show => cmd::config::run_show(cli.human),
            ConfigAction::Set { key, value } => cmd::config::run_set(&key, &value, cli.human),
        },
        Commands::Completions { shell } => cmd::completions::run(shell),
    };

    if let Err(e) = result {
        // Validation failures keep their stable code; everything else is general.
        let err = match e.downcast_ref::<FoodInputError>() {
            Some(v) => output::validation_error("", v),
            None => output::error("", "general_error", &e.to_string()),
        };
        eprintln!("{}", serde_json::to_string(&err).unwrap());
        process::exit(1);
    }
}
