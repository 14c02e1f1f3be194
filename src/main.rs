use anyhow::Result;
use env_logger::Env;
use std::env;

use parts_organiser::{ComponentItem, Resistor, VERSION};

fn main() -> Result<()> {
    // Default to warnings (silently substituted input); RUST_LOG overrides
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let args: Vec<String> = env::args().collect();

    if args.len() > 1 && args[1] == "json" {
        run_json()?;
    } else {
        run_demo();
    }

    Ok(())
}

fn demo_resistor() -> Resistor {
    Resistor::new(
        ComponentItem::new("Resistor", "This is a 49kOhm resistor.", 10, "Resistors"),
        Some(49.0),
        Some("k"),
    )
}

fn run_demo() {
    println!("🔧 Parts Organiser v{}", VERSION);
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");

    let resistor = demo_resistor();
    print!("{}", resistor);
    println!("{}", resistor.resistor_value());
}

fn run_json() -> Result<()> {
    let resistor = demo_resistor();
    println!("{}", serde_json::to_string_pretty(&resistor)?);
    Ok(())
}
