//! Handler for the `list` command.
//!
//! One-shot mode fetches once and renders the table; `--watch` refreshes
//! on an interval, replacing the rows wholesale on every successful tick
//! and keeping the previous rows when a tick fails.

use std::time::Duration;

use chrono::Local;
use serde_json::json;
use tokio::time::sleep;
use tracing::info;

use crate::adapter::inbound::cli::command::{Cli, ListArgs};
use crate::adapter::inbound::cli::{bet_json, load_context, output, table};
use crate::adapter::outbound::api::ApostaClient;
use crate::app::{BetListView, RefreshOutcome};
use crate::auth::Session;
use crate::domain::BetStatus;
use crate::error::{Error, Result};
use crate::port::outbound::{BetGateway, ListFilter};

/// Execute the list command.
pub async fn execute(cli: &Cli, args: &ListArgs) -> Result<()> {
    let (config, session) = load_context(cli)?;

    let filter = match &args.status {
        Some(label) => ListFilter::with_status(BetStatus::from(label.clone())),
        None => ListFilter::default(),
    };
    let mut view = BetListView::new(filter);

    let token = match &session {
        Session::Authenticated { token, .. } => token.clone(),
        _ => {
            report_skipped(&session);
            return Ok(());
        }
    };
    let gateway = ApostaClient::from_config(&config, token);

    match args.watch {
        None => fetch_once(&mut view, &session, &gateway).await,
        Some(seconds) => watch(&mut view, &session, &gateway, seconds).await,
    }
}

/// Explain why no request was made, without treating it as a failure.
fn report_skipped(session: &Session) {
    if output::is_json() {
        output::json_output(json!({
            "command": "list",
            "outcome": "skipped",
            "initialized": session.initialized(),
            "authenticated": false,
        }));
        return;
    }

    if session.initialized() {
        output::warning("not authenticated; no request was made");
    } else {
        output::warning("session not initialized; no request was made");
    }
    output::hint(&format!(
        "set {} or add an [auth] section to the config",
        output::highlight("APOSTAS_TOKEN")
    ));
}

async fn fetch_once<G: BetGateway>(
    view: &mut BetListView,
    session: &Session,
    gateway: &G,
) -> Result<()> {
    let pb = output::spinner("Fetching bets...");
    let outcome = view.refresh(session, gateway).await;

    match outcome {
        RefreshOutcome::Replaced { count } => {
            output::spinner_success(&pb, &format!("{count} bet(s)"));
            render(view);
            Ok(())
        }
        RefreshOutcome::Failed { error } => {
            output::spinner_fail(&pb, "fetch failed");
            Err(Error::FetchFailed { reason: error })
        }
        RefreshOutcome::Skipped => {
            output::spinner_fail(&pb, "session not ready");
            report_skipped(session);
            Ok(())
        }
    }
}

async fn watch<G: BetGateway>(
    view: &mut BetListView,
    session: &Session,
    gateway: &G,
    seconds: u64,
) -> Result<()> {
    let period = Duration::from_secs(seconds.max(1));
    info!(period_s = period.as_secs(), "watching bet list");

    loop {
        let outcome = view.refresh(session, gateway).await;
        let stamp = Local::now().format("%H:%M:%S").to_string();

        match outcome {
            RefreshOutcome::Replaced { count } => {
                if output::is_json() {
                    output::json_output(json!({
                        "command": "list",
                        "outcome": "replaced",
                        "at": stamp,
                        "bets": view.rows().iter().map(bet_json).collect::<Vec<_>>(),
                    }));
                } else {
                    output::section(&format!("{} · {count} bet(s)", output::muted(&stamp)));
                    render(view);
                }
            }
            RefreshOutcome::Failed { error } => {
                // Keep showing what we had; the next tick may recover.
                output::warning(&format!("{stamp} fetch failed, keeping last view: {error}"));
            }
            RefreshOutcome::Skipped => {
                report_skipped(session);
                return Ok(());
            }
        }

        sleep(period).await;
    }
}

fn render(view: &BetListView) {
    if output::is_json() {
        output::json_output(json!({
            "command": "list",
            "outcome": "replaced",
            "bets": view.rows().iter().map(bet_json).collect::<Vec<_>>(),
        }));
        return;
    }

    if view.rows().is_empty() {
        output::note("no bets to show");
        return;
    }
    output::lines(&table::render(view.rows()));
}
