use anyhow::Result;
use std::io::{self, Write};

use macrolog::store::Store;

pub fn run(skip: bool) -> Result<()> {
    // Opening seeds an example day when no state exists yet.
    let mut store = Store::open_default()?;

    if !skip {
        println!("macrolog — Initial Setup\n");
        let name = prompt_string("First name")?;
        if !name.is_empty() {
            store.update_name(&name)?;
        }
        println!("\nSetup complete. Data stored in {:?}", Store::data_dir());
    } else {
        println!("State initialized at {:?}", Store::state_path());
    }

    Ok(())
}

fn prompt_string(label: &str) -> Result<String> {
    print!("{}: ", label);
    io::stdout().flush()?;
    let mut buf = String::new();
    io::stdin().read_line(&mut buf)?;
    Ok(buf.trim().to_string())
}
