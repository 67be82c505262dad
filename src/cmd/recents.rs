use anyhow::Result;
use serde_json::json;

use macrolog::output;
use macrolog::output::human;
use macrolog::store::Store;

pub fn run(foods_only: bool, meals_only: bool, human_flag: bool) -> Result<()> {
    let store = Store::open_default()?;
    let recents = &store.state().recents;

    if human_flag {
        let mut shown = recents.clone();
        if foods_only {
            shown.meals.clear();
        }
        if meals_only {
            shown.foods.clear();
        }
        print!("{}", human::format_recents(&shown));
        return Ok(());
    }

    let data = if foods_only {
        json!({ "foods": recents.foods })
    } else if meals_only {
        json!({ "meals": recents.meals })
    } else {
        json!({ "foods": recents.foods, "meals": recents.meals })
    };
    let out = output::success("recents", data);
    println!("{}", serde_json::to_string(&out)?);
    Ok(())
}
