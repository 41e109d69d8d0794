mod support;

use std::time::Duration;

use runtime::{ApiError, LoopKind, LoopOutcome, MessageLevel, StateAggregator, ViewState, shutdown_channel};
use serde_json::json;
use support::*;

fn aggregator(server: &std::sync::Arc<ScriptedServer>, view: &ViewState) -> StateAggregator {
    StateAggregator::new(api(server), session(), view.clone(), &fast_config())
}

#[tokio::test]
async fn board_shows_self_and_surroundings() {
    let server = ScriptedServer::with_game();
    server.route(
        "player/surroundings",
        json!({
            "creep": [{"position": {"x": 5, "y": 5}}, {"position": {"x": 1, "y": 1}}],
            "players": [{"position": {"x": 10, "y": 10}}],
            "powerups": null,
        }),
    );
    let view = ViewState::default();

    aggregator(&server, &view).refresh_board().await.unwrap();

    let board = view.board();
    let rows: Vec<&str> = board.lines().collect();
    // leading blank line, ten rows, ruler
    assert_eq!(rows.len(), 12);
    assert!(rows[1].starts_with("10"));
    assert!(rows[1].ends_with("[1]"));
    // self wins over the creep sharing (5, 5)
    assert_eq!(&rows[6][2 + 4 * 3..2 + 5 * 3], "[1]");
    assert_eq!(&rows[10][2..5], "[2]");
}

#[tokio::test]
async fn status_block_reflects_turn() {
    let server = ScriptedServer::with_game();
    let view = ViewState::default();

    aggregator(&server, &view).refresh_status().await.unwrap();

    assert_eq!(
        &*view.status(),
        "alice health: (100/100)\n\
         actions: 2/2 position: x=5,y=5\n\
         game name: arena\n\
         alive creep/players 3/2\n\
         game curr player: IT IS OUR ROUND!\n"
    );
}

#[tokio::test]
async fn event_log_keeps_newest_five_hundred() {
    let server = ScriptedServer::with_game();
    let events: Vec<_> = (1..=600)
        .map(|id| json!({"ID": id, "date_created": "2021-03-14T10:00:00+00:00", "msg": format!("event {id}")}))
        .collect();
    server.route(&events_path(), json!({ "events": events }));
    let view = ViewState::default();

    aggregator(&server, &view).refresh_events().await.unwrap();

    let log = view.log();
    let lines: Vec<&str> = log.lines().collect();
    assert_eq!(lines.len(), 500);
    assert_eq!(lines[0], "14T10:00:00 -> event 600");
    assert_eq!(lines[499], "14T10:00:00 -> event 101");
}

#[tokio::test]
async fn null_event_list_renders_empty_log() {
    let server = ScriptedServer::with_game();
    server.route(&events_path(), json!({"events": null}));
    let view = ViewState::default();

    aggregator(&server, &view).refresh_events().await.unwrap();
    assert_eq!(&*view.log(), "");
}

#[tokio::test]
async fn malformed_game_info_stops_only_the_board_loop() {
    let server = ScriptedServer::with_game();
    server.route(&game_info_path(), json!({"error": "game not found"}));
    let view = ViewState::default();
    let (trigger, shutdown) = shutdown_channel();

    let handle = aggregator(&server, &view).spawn(shutdown);

    assert!(
        eventually(Duration::from_secs(2), || !handle.running().contains(&LoopKind::Board)).await,
        "board loop should stop on a malformed response"
    );
    let surroundings_calls = server.calls("player/surroundings");
    let event_calls = server.calls(&events_path());

    assert!(
        eventually(Duration::from_secs(2), || server.calls(&events_path()) > event_calls + 2).await,
        "event loop should keep polling"
    );
    assert_eq!(server.calls("player/surroundings"), surroundings_calls);
    assert_eq!(surroundings_calls, 0);

    trigger.trigger();
    let outcomes = handle.join().await;
    for (kind, outcome) in outcomes {
        match kind {
            LoopKind::Board | LoopKind::Status => assert!(
                matches!(
                    outcome,
                    LoopOutcome::Failed(ApiError::Malformed {
                        discriminator: "fow",
                        ..
                    })
                ),
                "{kind} ended with {outcome:?}"
            ),
            LoopKind::Events => assert!(outcome.is_cancelled()),
        }
    }

    let notices = view.notices();
    assert!(
        notices
            .iter()
            .any(|n| n.level == MessageLevel::Error && n.text.starts_with("board refresh stopped"))
    );
}

#[tokio::test]
async fn transient_failures_are_retried_until_success() {
    let server = ScriptedServer::with_game();
    server.route_with(&events_path(), |_, call| {
        if call < 2 {
            Err(ApiError::transport("game/events/g-1", "connection reset"))
        } else {
            Ok(json!({"events": [{"ID": 1, "date_created": "2021-03-14T10:00:00+00:00", "msg": "hello"}]}))
        }
    });
    let view = ViewState::default();
    let (trigger, shutdown) = shutdown_channel();

    let handle = aggregator(&server, &view).spawn(shutdown);

    assert!(
        eventually(Duration::from_secs(2), || &*view.log() == "14T10:00:00 -> hello\n").await,
        "event loop should recover after transient failures"
    );
    assert!(handle.running().contains(&LoopKind::Events));

    trigger.trigger();
    for (_, outcome) in handle.join().await {
        assert!(outcome.is_cancelled());
    }
    assert!(view.notices().is_empty());
}

#[tokio::test]
async fn retry_exhaustion_fails_with_visible_notice() {
    let server = ScriptedServer::with_game();
    server.route_with(&events_path(), |_, _| {
        Err(ApiError::ServerError {
            status: 502,
            body: "bad gateway".into(),
        })
    });
    let view = ViewState::default();
    let (trigger, shutdown) = shutdown_channel();

    let handle = aggregator(&server, &view).spawn(shutdown);

    assert!(
        eventually(Duration::from_secs(2), || !handle.running().contains(&LoopKind::Events)).await
    );
    // initial attempt plus the default three retries
    assert_eq!(server.calls(&events_path()), 4);
    assert!(handle.running().contains(&LoopKind::Board));

    trigger.trigger();
    let outcomes = handle.join().await;
    assert!(outcomes.iter().any(|(kind, outcome)| *kind == LoopKind::Events
        && matches!(outcome, LoopOutcome::Failed(ApiError::ServerError { status: 502, .. }))));
    assert!(view.notices().iter().any(|n| n.text.contains("bad gateway")));
}

#[tokio::test]
async fn shutdown_cancels_every_loop() {
    let server = ScriptedServer::with_game();
    let view = ViewState::default();
    let (trigger, shutdown) = shutdown_channel();

    let handle = aggregator(&server, &view).spawn(shutdown);
    assert!(eventually(Duration::from_secs(2), || server.calls(&events_path()) > 0).await);

    trigger.trigger();
    let outcomes = tokio::time::timeout(Duration::from_secs(2), handle.join())
        .await
        .expect("loops should stop promptly");

    assert_eq!(outcomes.len(), 3);
    assert!(outcomes.iter().all(|(_, outcome)| outcome.is_cancelled()));
}
