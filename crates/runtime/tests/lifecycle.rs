mod support;

use std::time::Duration;

use runtime::{Runtime, RuntimeError};
use support::*;

#[tokio::test]
async fn build_requires_a_session() {
    let result = Runtime::builder().config(fast_config()).build();
    assert!(matches!(result, Err(RuntimeError::MissingSession)));
}

#[tokio::test]
async fn start_refresh_is_idempotent() {
    let server = ScriptedServer::with_game();
    let runtime = Runtime::builder()
        .config(fast_config())
        .session(session())
        .transport(server.clone())
        .build()
        .unwrap();
    let handle = runtime.handle();

    assert_eq!(&*handle.view().board(), "press ctrl+r to start");
    assert!(handle.start_refresh().await);
    assert!(!handle.start_refresh().await);

    assert!(
        eventually(Duration::from_secs(2), || handle.view().board().contains("[1]")).await,
        "board should show the player"
    );

    let outcomes = runtime.shutdown().await;
    assert_eq!(outcomes.len(), 3);
    assert!(outcomes.iter().all(|(_, outcome)| outcome.is_cancelled()));
    assert!(!handle.start_refresh().await);
}

#[tokio::test]
async fn shutdown_without_loops_is_empty() {
    let server = ScriptedServer::with_game();
    let runtime = Runtime::builder()
        .session(session())
        .transport(server)
        .build()
        .unwrap();

    assert!(runtime.shutdown().await.is_empty());
}
