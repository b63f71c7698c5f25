//! API key lookup command.

use anyhow::Result;
use researcher_config::ResolvedConfig;
use secrecy::ExposeSecret;

use crate::formatters::mask;

pub fn run(config: &ResolvedConfig, service: &str, reveal: bool) -> Result<()> {
    let key = config.api_key(service)?;
    if reveal {
        println!("{}", key.expose_secret());
    } else {
        println!("{}", mask(&key));
    }
    Ok(())
}
