//! Bet list view behavior through the public API.

use apostas::app::{BetListView, RefreshOutcome};
use apostas::auth::{BearerToken, Session, TokenSource};
use apostas::domain::{BetStatus, NewBet};
use apostas::error::{ApiError, Error, ServerDetail};
use apostas::port::outbound::{BetGateway, ListFilter};
use apostas::testkit::fixtures;
use apostas::testkit::gateway::{RecordingGateway, Script};
use rust_decimal_macros::dec;

fn authenticated() -> Session {
    Session::Authenticated {
        token: BearerToken::new("tok"),
        source: TokenSource::Flag,
    }
}

fn server_error() -> Error {
    Error::Api(ApiError::UnexpectedStatus {
        status: 503,
        url: "http://localhost:8081/aposta".into(),
        detail: ServerDetail(None),
    })
}

#[tokio::test]
async fn unready_sessions_never_reach_the_gateway() {
    let gateway = RecordingGateway::new(Script::lists([Ok(vec![])]));
    let mut view = BetListView::new(ListFilter::default());

    for session in [Session::Uninitialized, Session::Anonymous] {
        let outcome = view.refresh(&session, &gateway).await;
        assert_eq!(outcome, RefreshOutcome::Skipped);
    }
    assert_eq!(gateway.list_calls(), 0);
}

#[tokio::test]
async fn the_view_always_shows_the_last_successful_response() {
    let gateway = RecordingGateway::new(
        Script::lists([
            Ok(vec![fixtures::aposta("first"), fixtures::aposta("second")]),
            Err(server_error()),
            Ok(vec![fixtures::aposta_ganhou("third")]),
        ]),
    );
    let mut view = BetListView::new(ListFilter::default());
    let session = authenticated();

    view.refresh(&session, &gateway).await;
    assert_eq!(view.rows().len(), 2);

    // Failure keeps the previous rows on screen.
    let failed = view.refresh(&session, &gateway).await;
    assert!(matches!(failed, RefreshOutcome::Failed { .. }));
    assert_eq!(view.rows().len(), 2);
    assert_eq!(view.rows()[0].id, "first");

    // The next success replaces them wholesale.
    view.refresh(&session, &gateway).await;
    assert_eq!(view.rows().len(), 1);
    assert_eq!(view.rows()[0].id, "third");
    assert_eq!(view.rows()[0].status, BetStatus::Ganhou);

    assert_eq!(gateway.list_calls(), 3);
}

#[tokio::test]
async fn status_filters_reach_the_gateway_verbatim() {
    let gateway = RecordingGateway::new(Script::lists([Ok(vec![])]));
    let mut view = BetListView::new(ListFilter::with_status(BetStatus::from(
        "GANHOU".to_string(),
    )));

    view.refresh(&authenticated(), &gateway).await;

    assert_eq!(
        gateway.last_filter(),
        Some(ListFilter::with_status(BetStatus::Ganhou))
    );
}

#[tokio::test]
async fn scripted_gateway_records_gets_and_places() {
    let gateway = RecordingGateway::new(
        Script::default()
            .with_gets([Ok(fixtures::aposta_ganhou("bet-1"))])
            .with_places([Ok(None)]),
    );

    let fetched = gateway.get("bet-1").await.unwrap();
    assert_eq!(fetched.status, BetStatus::Ganhou);
    assert_eq!(gateway.last_get_id().as_deref(), Some("bet-1"));

    let new_bet = NewBet {
        id_partida: 9,
        resultado: "EMPATE".parse().unwrap(),
        valor: dec!(5),
    };
    let echoed = gateway.place(&new_bet).await.unwrap();
    assert!(echoed.is_none());
    assert_eq!(gateway.last_placed(), Some(new_bet));
    assert_eq!(gateway.place_calls(), 1);
}
