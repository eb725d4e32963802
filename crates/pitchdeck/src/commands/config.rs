use colored::Colorize;

use crate::cli::ConfigCommands;
use crate::config::{Config, VALID_KEYS};

pub fn run(command: ConfigCommands) -> anyhow::Result<()> {
    match command {
        ConfigCommands::Show => show(),
        ConfigCommands::Set { key, value } => set(&key, &value),
    }
}

fn show() -> anyhow::Result<()> {
    let path = Config::path()?;
    let config = Config::load_or_default();
    println!("{} {}", "Config file:".bold(), path.display());
    if !path.exists() {
        println!("{}", "(not created yet, showing defaults)".dimmed());
    }
    println!();

    let durations = config.idle_durations();
    let rows = [
        ("defaults.theme", config.theme().unwrap_or("light").to_string()),
        ("defaults.render", config.render().unwrap_or("all").to_string()),
        (
            "defaults.start_mode",
            config.start_mode().unwrap_or("first").to_string(),
        ),
        ("idle.initial_ms", durations.initial.as_millis().to_string()),
        ("idle.activity_ms", durations.activity.as_millis().to_string()),
        (
            "idle.state_change_ms",
            durations.state_change.as_millis().to_string(),
        ),
    ];
    for (key, value) in rows {
        println!("  {:<22} {}", key.cyan(), value);
    }
    Ok(())
}

fn set(key: &str, value: &str) -> anyhow::Result<()> {
    let mut config = Config::load_or_default();
    if let Err(e) = config.set(key, value) {
        eprintln!("{}", format!("Valid keys: {VALID_KEYS}").dimmed());
        return Err(e);
    }
    let path = config.save()?;
    println!(
        "{} {} = {} ({})",
        "Set".green().bold(),
        key,
        value,
        path.display()
    );
    Ok(())
}
