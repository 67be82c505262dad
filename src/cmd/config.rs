use anyhow::Result;
use serde_json::json;

use macrolog::output;
use macrolog::store::Store;

pub fn run_show(human_flag: bool) -> Result<()> {
    let store = Store::open_default()?;
    let name = store.state().user_first_name.clone();

    if human_flag {
        if name.is_empty() {
            println!("name: (not set)");
        } else {
            println!("name: {}", name);
        }
    } else {
        let out = output::success("config", json!({ "userFirstName": name }));
        println!("{}", serde_json::to_string(&out)?);
    }
    Ok(())
}

pub fn run_set(key: &str, value: &str, human_flag: bool) -> Result<()> {
    let mut store = Store::open_default()?;

    match key {
        "name" => store.update_name(value)?,
        other => anyhow::bail!("unknown config key: {} (expected name)", other),
    }

    if human_flag {
        println!("Set {} = {}", key, value);
    } else {
        let out = output::success("config", json!({ key: value }));
        println!("{}", serde_json::to_string(&out)?);
    }
    Ok(())
}
