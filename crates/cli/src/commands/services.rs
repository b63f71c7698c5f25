//! Typed service block commands.

use anyhow::Result;
use researcher_config::ResolvedConfig;
use serde::Serialize;

use crate::formatters::mask_opt;

#[derive(Serialize)]
struct OpenAiDisplay {
    api_key: Option<String>,
    base_url: Option<String>,
    model: Option<String>,
    max_tokens: Option<u32>,
}

#[derive(Serialize)]
struct BrightDataDisplay {
    api_key: Option<String>,
    base_url: Option<String>,
    username: Option<String>,
}

pub fn run_openai(config: &ResolvedConfig) -> Result<()> {
    let openai = config.openai_config()?;
    let display = OpenAiDisplay {
        api_key: mask_opt(&openai.api_key),
        base_url: openai.base_url,
        model: openai.model,
        max_tokens: openai.max_tokens,
    };
    println!("{}", serde_json::to_string_pretty(&display)?);
    Ok(())
}

pub fn run_bright_data(config: &ResolvedConfig) -> Result<()> {
    let bright = config.bright_data_config()?;
    let display = BrightDataDisplay {
        api_key: mask_opt(&bright.api_key),
        base_url: bright.base_url,
        username: bright.username,
    };
    println!("{}", serde_json::to_string_pretty(&display)?);
    Ok(())
}
