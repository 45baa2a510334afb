//! Handler for the `session` command.

use serde_json::json;

use crate::adapter::inbound::cli::command::Cli;
use crate::adapter::inbound::cli::{load_context, output};
use crate::auth::Session;
use crate::error::Result;

/// Execute the session command. Never prints the token itself.
pub fn execute(cli: &Cli) -> Result<()> {
    let (_, session) = load_context(cli)?;

    if output::is_json() {
        let source = match &session {
            Session::Authenticated { source, .. } => Some(source.describe()),
            _ => None,
        };
        output::json_output(json!({
            "command": "session",
            "initialized": session.initialized(),
            "authenticated": session.authenticated(),
            "token_source": source,
        }));
        return Ok(());
    }

    output::section("Session");
    output::field("Initialized", session.initialized());
    output::field("Authenticated", session.authenticated());

    match &session {
        Session::Authenticated { source, .. } => {
            output::field("Token source", source.describe());
            output::success("ready to talk to the aposta service");
        }
        Session::Anonymous => {
            output::warning("auth is configured but no token was found");
            output::hint(&format!(
                "set {} or fill in auth.token / auth.token_file",
                output::highlight("APOSTAS_TOKEN")
            ));
        }
        Session::Uninitialized => {
            output::warning("no auth configuration found");
            output::hint(&format!(
                "run {} to create a config with an [auth] section",
                output::highlight("apostas config init")
            ));
        }
    }
    Ok(())
}
