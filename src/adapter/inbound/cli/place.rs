//! Handler for the `place` command.

use serde_json::json;

use crate::adapter::inbound::cli::command::{Cli, PlaceArgs};
use crate::adapter::inbound::cli::{bet_json, load_context, output, table};
use crate::adapter::outbound::api::ApostaClient;
use crate::auth::Session;
use crate::domain::{format_amount, NewBet};
use crate::error::{AuthError, Result};
use crate::port::outbound::BetGateway;

/// Execute the place command.
pub async fn execute(cli: &Cli, args: &PlaceArgs) -> Result<()> {
    let (config, session) = load_context(cli)?;
    let token = match &session {
        Session::Authenticated { token, .. } => token.clone(),
        _ => return Err(AuthError::NotAuthenticated.into()),
    };
    let gateway = ApostaClient::from_config(&config, token);

    let bet = NewBet {
        id_partida: args.partida,
        resultado: args.resultado.into(),
        valor: args.valor,
    };

    let pb = output::spinner("Placing bet...");
    let placed = match gateway.place(&bet).await {
        Ok(placed) => {
            output::spinner_success(&pb, "bet placed");
            placed
        }
        Err(err) => {
            output::spinner_fail(&pb, "placing failed");
            return Err(err);
        }
    };

    if output::is_json() {
        output::json_output(json!({
            "command": "place",
            "accepted": true,
            "bet": placed.as_ref().map(bet_json),
        }));
        return Ok(());
    }

    match placed {
        Some(stored) => output::lines(&table::render(std::slice::from_ref(&stored))),
        None => {
            // The service acknowledged without echoing the record.
            output::field("Partida", bet.id_partida);
            output::field("Resultado", &bet.resultado);
            output::field("Valor", format_amount(bet.valor));
            output::hint(&format!(
                "run {} to see the stored record",
                output::highlight("apostas list")
            ));
        }
    }
    Ok(())
}
