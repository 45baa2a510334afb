//! Handler for the `config` command group.

use std::fs;
use std::path::Path;

use serde_json::json;

use crate::adapter::inbound::cli::{load_context, output};
use crate::adapter::inbound::cli::command::Cli;
use crate::config::Config;
use crate::error::{ConfigError, Error, Result};

/// Default config template with documentation.
const CONFIG_TEMPLATE: &str = include_str!("../../../../config.toml.example");

/// Execute `config init`.
pub fn execute_init(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        return Err(ConfigError::InvalidValue {
            field: "config",
            reason: "file already exists (use --force to overwrite)".to_string(),
        }
        .into());
    }

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    fs::write(path, CONFIG_TEMPLATE)?;
    output::section("Config Initialized");
    output::success("Created configuration file");
    output::field("Path", path.display());
    output::section("Next Steps");
    output::note(&format!("1. Edit {} with your settings", path.display()));
    output::note("2. Set APOSTAS_TOKEN or fill in the [auth] section");
    output::note("3. Run: apostas check");
    output::note("4. Run: apostas list");
    Ok(())
}

/// Execute `config show`.
pub fn execute_show(cli: &Cli) -> Result<()> {
    let (config, session) = load_context(cli)?;

    if output::is_json() {
        output::json_output(json!({
            "command": "config.show",
            "path": cli.config.display().to_string(),
            "api": { "base_url": config.base_url() },
            "http": {
                "timeout_ms": config.http.timeout_ms,
                "connect_timeout_ms": config.http.connect_timeout_ms,
                "retry_max_attempts": config.http.retry_max_attempts,
                "retry_backoff_ms": config.http.retry_backoff_ms,
            },
            "logging": { "level": config.logging.level, "format": config.logging.format },
            "authenticated": session.authenticated(),
        }));
        return Ok(());
    }

    output::header(env!("CARGO_PKG_VERSION"));
    output::section("Effective Configuration");
    output::field("Config file", cli.config.display());

    output::section("API");
    output::field("Base URL", config.base_url());

    output::section("HTTP");
    output::field("Timeout", format!("{}ms", config.http.timeout_ms));
    output::field(
        "Connect timeout",
        format!("{}ms", config.http.connect_timeout_ms),
    );
    output::field("Retries", config.http.retry_max_attempts);
    output::field("Backoff", format!("{}ms", config.http.retry_backoff_ms));

    output::section("Logging");
    output::field("Level", &config.logging.level);
    output::field("Format", &config.logging.format);

    output::section("Auth");
    if session.authenticated() {
        output::success("Bearer token loaded");
    } else {
        output::warning("No bearer token available");
    }
    Ok(())
}

/// Execute `config validate`.
pub fn execute_validate(path: &Path) -> Result<()> {
    let content = fs::read_to_string(path).map_err(ConfigError::ReadFile)?;

    match Config::from_toml(&content) {
        Ok(_) => {
            output::success("Configuration is valid");
            output::field("Path", path.display());
            Ok(())
        }
        Err(err) => {
            if let Error::Config(ConfigError::Parse(parse)) = &err {
                super::diagnostic::report_parse_error(path, &content, parse);
            }
            Err(err)
        }
    }
}
