//! One-shot subcommands of the `sconwar` binary.
//!
//! Each command returns the text to print. A response the server sent
//! without the expected discriminator, or a 4xx that came with a body, is
//! returned raw instead of as an error so the player sees what the server
//! actually said.
use rand::Rng;
use runtime::aggregator::build_board;
use runtime::{ApiError, GameApi, RuntimeError, Session};

pub async fn games_get(api: &GameApi) -> Result<String, ApiError> {
    let games = match api.list_games().await {
        Ok(games) => games,
        Err(err) => return raw_response(err),
    };

    if games.is_empty() {
        return Ok("no games".to_string());
    }

    Ok(games
        .iter()
        .map(|game| format!("game id: {game}"))
        .collect::<Vec<_>>()
        .join("\n"))
}

pub async fn games_new(api: &GameApi, name: &str) -> Result<String, ApiError> {
    match api.new_game(name).await {
        Ok(uuid) => Ok(format!("created game with uuid: {uuid}")),
        Err(err) => raw_response(err),
    }
}

pub async fn games_info(api: &GameApi, session: &Session) -> Result<String, ApiError> {
    let game = match api.game_info(&session.game_id).await {
        Ok(game) => game,
        Err(err) => return raw_response(err),
    };

    let created = game.created.as_deref().unwrap_or("-");
    let started = game.started.as_deref().unwrap_or("-");
    Ok(format!(
        "name    : {}\nx       : {}\ny       : {}\nfow     : {}\ncreated : {created}\nstarted : {started}",
        game.name, game.width, game.height, game.fog_of_war
    ))
}

pub async fn games_join(api: &GameApi, session: &Session) -> Result<String, ApiError> {
    match api.join_game(session).await {
        Ok(joined) => Ok(format!("joined status: {joined}")),
        Err(err) => raw_response(err),
    }
}

pub async fn player_register(api: &GameApi, name: &str) -> Result<String, ApiError> {
    match api.register_player(name).await {
        Ok(uuid) => Ok(format!("your uuid is: {uuid} . keep it safe!")),
        Err(err) => raw_response(err),
    }
}

/// Renders the board once, the same way the board panel does.
pub async fn player_view(api: &GameApi, session: &Session) -> Result<String, ApiError> {
    let board = async {
        let game = api.game_info(&session.game_id).await?;
        let surroundings = api.surroundings(session).await?;
        let me = api.player_status(session).await?;
        Ok::<_, ApiError>(build_board(&game, &me, &surroundings).render())
    };

    match board.await {
        Ok(board) => Ok(board),
        Err(err) => raw_response(err),
    }
}

/// Creates, joins and starts a fresh game for `player_id`.
///
/// Returns the session for the new game.
pub async fn new_interactive_game(api: &GameApi, player_id: &str) -> anyhow::Result<Session> {
    if player_id.trim().is_empty() {
        return Err(RuntimeError::MissingPlayerId.into());
    }

    let name = random_game_name();
    let game_id = api.new_game(&name).await?;
    let session = Session::new(game_id, player_id)?;

    let joined = api.join_game(&session).await?;
    api.start_game(&session.game_id).await?;

    tracing::info!(game_id = %session.game_id, %name, joined, "started new game");
    Ok(session)
}

/// Five random lowercase letters.
pub fn random_game_name() -> String {
    let mut rng = rand::thread_rng();
    (0..5).map(|_| rng.gen_range('a'..='z')).collect()
}

fn raw_response(err: ApiError) -> Result<String, ApiError> {
    match err {
        ApiError::Malformed { payload, .. } => Ok(payload.to_string()),
        ApiError::Validation { body, .. } => Ok(body),
        ApiError::NotFound { body, .. } if !body.trim().is_empty() => Ok(body),
        other => Err(other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn random_name_is_five_lowercase_letters() {
        for _ in 0..20 {
            let name = random_game_name();
            assert_eq!(name.len(), 5);
            assert!(name.chars().all(|ch| ch.is_ascii_lowercase()));
        }
    }

    #[test]
    fn server_payloads_print_raw() {
        let payload = serde_json::json!({"error": "no such game"});
        let err = ApiError::Malformed {
            path: "game/new".into(),
            discriminator: "created",
            payload: payload.clone(),
        };
        assert_eq!(raw_response(err).unwrap(), payload.to_string());

        let err = ApiError::Validation {
            status: 400,
            body: "bad name".into(),
        };
        assert_eq!(raw_response(err).unwrap(), "bad name");

        let err = ApiError::NotFound {
            path: "game/info/g-9".into(),
            body: r#"{"error":"no such game"}"#.into(),
        };
        assert_eq!(raw_response(err).unwrap(), r#"{"error":"no such game"}"#);

        let err = ApiError::NotFound {
            path: "x".into(),
            body: String::new(),
        };
        assert!(raw_response(err).is_err());
    }
}
