//! Environment summary command.

use anyhow::Result;
use researcher_config::ResolvedConfig;

pub fn run(config: &ResolvedConfig) -> Result<()> {
    println!(
        "environment: {}",
        config.environment().as_deref().unwrap_or("(unset)")
    );
    println!("development: {}", config.is_development());
    println!("debug: {}", config.is_debug());
    if let Some(path) = config.config_path() {
        println!("config: {}", path.display());
    }
    match config.dotenv_path() {
        Some(path) => println!("dotenv: {}", path.display()),
        None => println!("dotenv: (disabled)"),
    }
    Ok(())
}
