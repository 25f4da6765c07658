use anyhow::Result;
use colored::Colorize;

use crate::cli::ConfigCommands;
use crate::config::Config;

pub fn run(command: ConfigCommands) -> Result<()> {
    match command {
        ConfigCommands::Show => show(),
        ConfigCommands::Set { key, value } => set(&key, &value),
    }
}

fn show() -> Result<()> {
    let path = Config::path()?;
    let config = Config::load_or_default();
    let markers = config.markers();

    println!("{} {}", "Config file:".bold(), path.display());
    println!();
    println!("{}", "markers".bold());
    println!("  empty: {:?}", markers.empty);
    println!("  start: {:?}", markers.start);
    println!("  path:  {:?}", markers.path);
    println!("  end:   {:?}", markers.end);
    println!("{}", "display".bold());
    println!("  color: {}", config.color());
    println!("{}", "session".bold());
    println!("  stop_word: {}", config.stop_word());
    Ok(())
}

fn set(key: &str, value: &str) -> Result<()> {
    let path = Config::path()?;
    Config::update_at(&path, key, value)?;
    println!(
        "{} {key} = {value} ({})",
        "Saved".green().bold(),
        path.display()
    );
    Ok(())
}
