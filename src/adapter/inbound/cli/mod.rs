//! CLI module graph.

pub mod check;
pub mod command;
pub mod config;
pub mod diagnostic;
pub mod list;
pub mod output;
pub mod paths;
pub mod place;
pub mod session;
pub mod show;
pub mod table;

use rust_decimal::prelude::ToPrimitive;

use crate::auth::Session;
use crate::config::Config;
use crate::domain::Aposta;
use crate::error::Result;

/// Load the config (defaults when the file is absent) and resolve the
/// session from it plus the global `--token` flag.
pub(crate) fn load_context(cli: &command::Cli) -> Result<(Config, Session)> {
    let config = Config::load_or_default(&cli.config)?;
    let session = Session::resolve(cli.token.as_deref(), config.auth.as_ref())?;
    Ok((config, session))
}

/// A bet in the wire's camelCase shape, for `--json` output.
pub(crate) fn bet_json(bet: &Aposta) -> serde_json::Value {
    serde_json::json!({
        "id": bet.id,
        "idPartida": bet.id_partida,
        "dataAposta": bet.data_aposta.to_rfc3339(),
        "resultado": bet.resultado.to_string(),
        "valor": bet.valor.to_f64(),
        "status": bet.status.to_string(),
    })
}
