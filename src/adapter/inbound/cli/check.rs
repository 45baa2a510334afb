//! Handler for the `check` command.
//!
//! Verifies the aposta service answers at the configured base URL. Any
//! HTTP response counts as reachable; an auth rejection still proves the
//! service is there.

use std::time::Duration;

use serde_json::json;

use crate::adapter::inbound::cli::command::Cli;
use crate::adapter::inbound::cli::{load_context, output};
use crate::auth::Session;
use crate::error::Result;

/// Execute the check command.
pub async fn execute(cli: &Cli) -> Result<()> {
    let (config, session) = load_context(cli)?;
    let url = format!("{}/aposta", config.base_url());

    output::section("Connection Check");
    output::field("API", config.base_url());
    output::field("Authenticated", session.authenticated());
    if output::verbosity() > 0 {
        output::field("Timeout", format!("{}ms", config.http.timeout_ms));
        output::field(
            "Connect timeout",
            format!("{}ms", config.http.connect_timeout_ms),
        );
    }

    let client = reqwest::Client::builder()
        .timeout(Duration::from_millis(config.http.timeout_ms))
        .connect_timeout(Duration::from_millis(config.http.connect_timeout_ms))
        .build()?;

    let mut request = client.get(&url);
    if let Session::Authenticated { token, .. } = &session {
        request = request.bearer_auth(token.reveal());
    }

    let pb = output::spinner("Checking REST API...");
    match request.send().await {
        Ok(response) => {
            let status = response.status();
            output::spinner_success(&pb, &format!("service reachable ({status})"));
            if status == reqwest::StatusCode::UNAUTHORIZED
                || status == reqwest::StatusCode::FORBIDDEN
            {
                output::warning("the service rejected the credential");
                output::hint(&format!(
                    "check {} or the [auth] section",
                    output::highlight("APOSTAS_TOKEN")
                ));
            }
            if output::is_json() {
                output::json_output(json!({
                    "command": "check",
                    "reachable": true,
                    "status": status.as_u16(),
                }));
            }
            Ok(())
        }
        Err(err) => {
            output::spinner_fail(&pb, "service unreachable");
            if output::is_json() {
                output::json_output(json!({
                    "command": "check",
                    "reachable": false,
                    "error": err.to_string(),
                }));
            }
            Err(err.into())
        }
    }
}
