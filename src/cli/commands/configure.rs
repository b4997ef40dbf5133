//! Configure command handler for editing default settings.

use anyhow::{Result, bail};
use inquire::{Select, Text};

use crate::config::{
    ConfigFile, ConfigManager, CounselConfig, DEFAULT_BASE_URL, DEFAULT_HEALTH_INTERVAL_SECS,
    DEFAULT_REQUEST_TIMEOUT_SECS,
};
use crate::i18n::Language;
use crate::ui::{Style, handle_prompt_cancellation};

// Languages with translation tables: (code, label)
const SESSION_LANGUAGES: &[(&str, &str)] = &[("en", "English"), ("hi", "हिन्दी (Hindi)")];

/// Runs the configure command to edit default settings.
pub fn run_configure() -> Result<()> {
    handle_prompt_cancellation(run_configure_inner)
}

/// Prints the current config file contents.
pub fn show_config() -> Result<()> {
    let manager = ConfigManager::new()?;
    let config = manager.load_or_default()?;
    println!(
        "{}",
        Style::secondary(manager.config_path().display().to_string())
    );
    print_current_defaults(&config);
    Ok(())
}

fn run_configure_inner() -> Result<()> {
    let manager = ConfigManager::new()?;
    let mut config = manager.load_or_default()?;

    print_current_defaults(&config);

    let base_url = prompt_base_url(config.counsel.base_url.as_deref())?;
    let language = select_language(config.counsel.language.as_deref())?;
    let health_interval_secs = prompt_secs(
        "Health check interval (seconds):",
        config.counsel.health_interval_secs,
        DEFAULT_HEALTH_INTERVAL_SECS,
    )?;
    let request_timeout_secs = prompt_secs(
        "Request timeout (seconds):",
        config.counsel.request_timeout_secs,
        DEFAULT_REQUEST_TIMEOUT_SECS,
    )?;

    config.counsel = CounselConfig {
        base_url: Some(base_url),
        language: Some(language),
        health_interval_secs: Some(health_interval_secs),
        request_timeout_secs: Some(request_timeout_secs),
    };

    manager.save(&config)?;

    println!();
    println!(
        "{} Configuration saved to {}",
        Style::success("✓"),
        Style::secondary(manager.config_path().display().to_string())
    );

    Ok(())
}

fn print_current_defaults(config: &ConfigFile) {
    let not_set = || Style::secondary("(not set)");
    let c = &config.counsel;

    println!("{}", Style::header("Current defaults"));
    println!(
        "  {}              {}",
        Style::label("base_url"),
        c.base_url.as_deref().map_or_else(not_set, Style::value)
    );
    println!(
        "  {}              {}",
        Style::label("language"),
        c.language.as_deref().map_or_else(not_set, Style::value)
    );
    println!(
        "  {}  {}",
        Style::label("health_interval_secs"),
        c.health_interval_secs.map_or_else(not_set, Style::value)
    );
    println!(
        "  {}  {}",
        Style::label("request_timeout_secs"),
        c.request_timeout_secs.map_or_else(not_set, Style::value)
    );
    println!();
}

fn prompt_base_url(current: Option<&str>) -> Result<String> {
    let url = Text::new("API base URL:")
        .with_default(current.unwrap_or(DEFAULT_BASE_URL))
        .with_help_message("The counselor API, e.g. http://127.0.0.1:8000")
        .prompt()?;
    let url = url.trim();

    if !(url.starts_with("http://") || url.starts_with("https://")) {
        bail!("Base URL must start with http:// or https://");
    }

    Ok(url.trim_end_matches('/').to_string())
}

fn select_language(current: Option<&str>) -> Result<String> {
    let options: Vec<String> = SESSION_LANGUAGES
        .iter()
        .map(|(code, name)| format!("{code} - {name}"))
        .collect();

    let current = Language::coerce(current.unwrap_or_default());
    let default_index = SESSION_LANGUAGES
        .iter()
        .position(|(code, _)| *code == current.code())
        .unwrap_or(0);

    let selection = Select::new("Default language:", options)
        .with_starting_cursor(default_index)
        .prompt()?;

    // Extract code from "code - Name" format
    let code = selection.split(" - ").next().unwrap_or(&selection);
    Ok(code.to_string())
}

fn prompt_secs(message: &str, current: Option<u64>, default: u64) -> Result<u64> {
    let value = Text::new(message)
        .with_default(&current.unwrap_or(default).to_string())
        .prompt()?;

    match value.trim().parse::<u64>() {
        Ok(0) | Err(_) => bail!("Expected a whole number of seconds greater than zero"),
        Ok(secs) => Ok(secs),
    }
}
