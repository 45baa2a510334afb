//! Handler for the `show` command.

use serde_json::json;

use crate::adapter::inbound::cli::command::{Cli, ShowArgs};
use crate::adapter::inbound::cli::{bet_json, load_context, output, table};
use crate::adapter::outbound::api::ApostaClient;
use crate::auth::Session;
use crate::error::{AuthError, Result};
use crate::port::outbound::BetGateway;

/// Execute the show command.
///
/// Fetching a placed bet makes the service settle it when the underlying
/// match has finished, so the returned status can differ from the last
/// listing.
pub async fn execute(cli: &Cli, args: &ShowArgs) -> Result<()> {
    let (config, session) = load_context(cli)?;
    let token = match &session {
        Session::Authenticated { token, .. } => token.clone(),
        _ => return Err(AuthError::NotAuthenticated.into()),
    };
    let gateway = ApostaClient::from_config(&config, token);

    let pb = output::spinner("Fetching bet...");
    let bet = match gateway.get(&args.id).await {
        Ok(bet) => {
            output::spinner_success(&pb, &format!("bet {}", bet.id));
            bet
        }
        Err(err) => {
            output::spinner_fail(&pb, "fetch failed");
            return Err(err);
        }
    };

    if output::is_json() {
        output::json_output(json!({
            "command": "show",
            "bet": bet_json(&bet),
        }));
        return Ok(());
    }

    output::lines(&table::render(std::slice::from_ref(&bet)));
    Ok(())
}
