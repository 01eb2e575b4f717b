use clean_sweep::agent::{Agent, Cleaner};
use clean_sweep::config::CleanerConfig;
use clean_sweep::context::Context;
use clean_sweep::floor::parse_layout;
use clean_sweep::protocol::{Route, RouteError, run_route};
use colored::Colorize;
use std::env;
use std::error::Error;
use std::fs;
use tracing_subscriber::EnvFilter;

const DEMO_LAYOUT: &str = "
C  B1 B0 L2
B2 #  L3 L1
H1 H2 .  B4
";

const DEMO_ROUTE: &str = r#"{ "route": [
    { "type": "face", "heading": "E" },
    { "type": "move", "direction": "ahead" },
    { "type": "clean" },
    { "type": "move", "direction": "ahead" },
    { "type": "move", "direction": "ahead" },
    { "type": "clean" },
    { "type": "clean" },
    { "type": "move", "direction": "right" },
    { "type": "clean" },
    { "type": "move", "direction": "right" },
    { "type": "clean" },
    { "type": "clean" },
    { "type": "clean" },
    { "type": "move", "direction": "right" },
    { "type": "move", "direction": "left" },
    { "type": "move", "direction": "back" },
    { "type": "move", "direction": "back" }
] }"#;

/// Usage: clean-sweep [LAYOUT] [ROUTE] [CONFIG]
fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args: Vec<String> = env::args().skip(1).collect();
    let layout = match args.first() {
        Some(path) => fs::read_to_string(path)?,
        None => DEMO_LAYOUT.to_string(),
    };
    let route_json = match args.get(1) {
        Some(path) => fs::read_to_string(path)?,
        None => DEMO_ROUTE.to_string(),
    };
    let config = match args.get(2) {
        Some(path) => CleanerConfig::from_json_str(&fs::read_to_string(path)?)?,
        None => CleanerConfig::default(),
    };

    let floor = parse_layout(&layout)?;
    let start = floor
        .charging_stations()
        .first()
        .copied()
        .or_else(|| floor.tiles().find(|(_, t)| t.is_accessible()).map(|(id, _)| id))
        .ok_or("layout has no accessible tile to start from")?;

    let route = match Route::from_json(&route_json) {
        Ok(route) => route,
        Err(RouteError::Invalid(errors)) => {
            for error in &errors {
                let (msg, maybe_hint) = error.hint();
                eprintln!("{} step {}: {}", "⚠️".yellow(), error.step(), msg);
                if let Some(hint) = maybe_hint {
                    eprintln!("  → Hint: {}", hint);
                }
            }
            return Err(RouteError::Invalid(errors).into());
        }
        Err(e) => return Err(e.into()),
    };

    let battery = config.max_battery;
    let mut cleaner = Cleaner::with_config(config, battery, Context::new(floor), Some(start))?;
    let report = run_route(&mut cleaner, &route);

    let status = if cleaner.is_at_capacity() {
        report.status.red().bold()
    } else if cleaner.is_near_capacity() {
        report.status.yellow()
    } else {
        report.status.green()
    };

    println!("{}", "--- SWEEP ---".cyan().bold());
    println!(
        "{} commands, {}/{} moves, {} units cleaned",
        report.commands_run, report.moves_made, report.moves_attempted, report.units_cleaned
    );
    if report.exhausted {
        println!("{}", "Battery exhausted before the route finished.".red());
    }
    println!("{}", "--- CLEANER ---".cyan().bold());
    println!("{}", cleaner.summary());
    println!("{} {}", "Status:".bold(), status);
    println!(
        "{} {}",
        "Dirt left on floor:".bold(),
        cleaner.floor().total_dirt()
    );
    println!("{}", "--- HISTORY ---".cyan().bold());
    for snapshot in cleaner.history() {
        println!("{}", serde_json::to_string(snapshot)?);
    }
    println!("{}", "--- POWER LEDGER ---".cyan().bold());
    println!("{}", serde_json::to_string_pretty(&cleaner.ledger().entries)?);

    Ok(())
}
