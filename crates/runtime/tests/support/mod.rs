//! In-memory game server for driving the runtime without a network.
#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use runtime::{ApiError, ApiRequest, GameApi, RuntimeConfig, Session, Transport};
use serde_json::{Value, json};

pub const GAME_ID: &str = "g-1";
pub const PLAYER_ID: &str = "p-1";

type Responder = Box<dyn Fn(&ApiRequest, usize) -> Result<Value, ApiError> + Send + Sync>;

/// Answers requests from per-path responders and counts calls per path.
///
/// Paths without a responder answer with [`ApiError::NotFound`].
#[derive(Default)]
pub struct ScriptedServer {
    routes: Mutex<HashMap<String, Responder>>,
    delays: Mutex<HashMap<String, Duration>>,
    calls: Mutex<HashMap<String, usize>>,
    requests: Mutex<Vec<ApiRequest>>,
}

impl ScriptedServer {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// A server hosting one 10x10 game with the session player at (5, 5).
    pub fn with_game() -> Arc<Self> {
        let server = Self::new();
        server.route(&game_info_path(), game_info_json());
        server.route("player/status", player_status_json(5, 5));
        server.route(
            "player/surroundings",
            json!({"creep": null, "players": null, "powerups": null}),
        );
        server.route(&events_path(), json!({"events": []}));
        server
    }

    pub fn route(&self, path: &str, payload: Value) {
        self.route_with(path, move |_, _| Ok(payload.clone()));
    }

    /// `respond` receives the request and the 0-based call index for `path`.
    pub fn route_with<F>(&self, path: &str, respond: F)
    where
        F: Fn(&ApiRequest, usize) -> Result<Value, ApiError> + Send + Sync + 'static,
    {
        self.routes
            .lock()
            .unwrap()
            .insert(path.to_string(), Box::new(respond));
    }

    pub fn delay(&self, path: &str, delay: Duration) {
        self.delays.lock().unwrap().insert(path.to_string(), delay);
    }

    pub fn calls(&self, path: &str) -> usize {
        self.calls.lock().unwrap().get(path).copied().unwrap_or(0)
    }

    pub fn calls_with_prefix(&self, prefix: &str) -> usize {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter(|(path, _)| path.starts_with(prefix))
            .map(|(_, count)| count)
            .sum()
    }

    pub fn requests(&self, path: &str) -> Vec<ApiRequest> {
        self.requests
            .lock()
            .unwrap()
            .iter()
            .filter(|request| request.path == path)
            .cloned()
            .collect()
    }
}

#[async_trait]
impl Transport for ScriptedServer {
    async fn send(&self, request: ApiRequest) -> Result<Value, ApiError> {
        let index = {
            let mut calls = self.calls.lock().unwrap();
            let count = calls.entry(request.path.clone()).or_default();
            *count += 1;
            *count - 1
        };
        self.requests.lock().unwrap().push(request.clone());

        let delay = self.delays.lock().unwrap().get(&request.path).copied();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        let routes = self.routes.lock().unwrap();
        match routes.get(&request.path) {
            Some(respond) => respond(&request, index),
            None => Err(ApiError::NotFound {
                path: request.path.clone(),
                body: String::new(),
            }),
        }
    }
}

pub fn session() -> Session {
    Session::new(GAME_ID, PLAYER_ID).unwrap()
}

pub fn api(server: &Arc<ScriptedServer>) -> GameApi {
    GameApi::new(server.clone())
}

/// Fast cadence so loop tests finish quickly.
pub fn fast_config() -> RuntimeConfig {
    let mut config = RuntimeConfig {
        poll_interval: Duration::from_millis(10),
        request_timeout: Duration::from_millis(200),
        ..RuntimeConfig::default()
    };
    config.retry.initial_backoff = Duration::from_millis(2);
    config.retry.max_backoff = Duration::from_millis(8);
    config
}

pub fn game_info_path() -> String {
    format!("game/info/{GAME_ID}")
}

pub fn events_path() -> String {
    format!("game/events/{GAME_ID}")
}

pub fn game_info_json() -> Value {
    json!({
        "name": "arena",
        "size_x": 10,
        "size_y": 10,
        "fow": false,
        "created": "2021-03-14T10:00:00+00:00",
        "started": null,
        "game_entities": {"alive_creep": 3, "alive_players": 2},
        "current_player": PLAYER_ID,
    })
}

pub fn player_status_json(x: i32, y: i32) -> Value {
    json!({
        "player": {
            "name": "alice",
            "health": 100,
            "action_count": 2,
            "position": {"x": x, "y": y},
            "buffs": null,
            "powerups": null,
        }
    })
}

/// Polls `check` until it holds or `within` elapses.
pub async fn eventually<F>(within: Duration, mut check: F) -> bool
where
    F: FnMut() -> bool,
{
    let deadline = tokio::time::Instant::now() + within;
    while tokio::time::Instant::now() < deadline {
        if check() {
            return true;
        }
        tokio::time::sleep(Duration::from_millis(5)).await;
    }
    check()
}
