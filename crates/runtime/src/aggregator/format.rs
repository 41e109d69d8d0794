//! Pure projections from server state to panel text.
use std::fmt::Write as _;

use game_core::{Board, EntityKind, GameState, LogEvent, PlayerState, PowerupKind};
use tracing::warn;

use crate::api::Surroundings;
use crate::session::Session;

/// Places the player first, then creep, other players and powerups, so the
/// player's own marker wins on a shared cell.
pub fn build_board(game: &GameState, me: &PlayerState, surroundings: &Surroundings) -> Board {
    let mut board = Board::new(game.width, game.height);

    let groups = [
        (EntityKind::Creep, surroundings.creep.as_deref()),
        (EntityKind::Player, surroundings.players.as_deref()),
        (EntityKind::PowerUp, surroundings.powerups.as_deref()),
    ];
    let others = groups.into_iter().flat_map(|(kind, group)| {
        group
            .unwrap_or_default()
            .iter()
            .map(move |located| (kind, located.position))
    });

    for (kind, position) in std::iter::once((EntityKind::Player, me.position)).chain(others) {
        if let Err(err) = board.add(kind, position.x, position.y) {
            warn!(%err, "skipping entity outside the board");
        }
    }

    board
}

pub fn format_status(session: &Session, me: &PlayerState, game: &GameState) -> String {
    let mut out = String::new();

    // Writing into a String cannot fail.
    let _ = writeln!(
        out,
        "{} health: ({}/{})",
        me.name,
        me.health,
        PlayerState::MAX_HEALTH
    );
    let _ = writeln!(
        out,
        "actions: {}/{} position: {}",
        me.action_count,
        PlayerState::MAX_ACTIONS,
        me.position
    );

    if let Some(buffs) = &me.buffs {
        let _ = write!(out, "buffs: {} ", buffs.len());
        for buff in buffs {
            let _ = write!(out, "[{}]", PowerupKind::label(*buff));
        }
        out.push('\n');
    }

    if let Some(powerups) = &me.powerups {
        let _ = writeln!(out, "powerups: {}", powerups.len());
        for powerup in powerups {
            let _ = writeln!(
                out,
                " ! powerup {} -> {}",
                PowerupKind::label(powerup.kind),
                powerup.id
            );
        }
    }

    let _ = writeln!(out, "game name: {}", game.name);
    let _ = writeln!(
        out,
        "alive creep/players {}/{}",
        game.entities.alive_creep, game.entities.alive_players
    );
    if game.is_turn_of(&session.player_id) {
        out.push_str("game curr player: IT IS OUR ROUND!\n");
    } else {
        let _ = writeln!(out, "game curr player: {}", game.current_player);
    }

    out
}

/// Newest `limit` events by id, one `"<day> -> <message>"` line each.
pub fn format_events(mut events: Vec<LogEvent>, limit: usize) -> String {
    events.sort_by(|a, b| b.id.cmp(&a.id));

    events
        .iter()
        .take(limit)
        .fold(String::new(), |mut out, event| {
            out.push_str(&event.log_line());
            out.push('\n');
            out
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::Located;
    use game_core::{EntityCounts, Position, Powerup};

    fn session() -> Session {
        Session::new("g-1", "p-1").unwrap()
    }

    fn me() -> PlayerState {
        PlayerState {
            id: "p-1".into(),
            name: "alice".into(),
            health: 80,
            action_count: 1,
            position: Position::new(2, 3),
            buffs: None,
            powerups: None,
        }
    }

    fn game(current_player: &str) -> GameState {
        GameState {
            id: "g-1".into(),
            name: "arena".into(),
            width: 4,
            height: 4,
            fog_of_war: true,
            created: None,
            started: None,
            entities: EntityCounts {
                alive_creep: 7,
                alive_players: 2,
            },
            current_player: current_player.into(),
        }
    }

    fn located(x: i32, y: i32) -> Located {
        Located {
            position: Position::new(x, y),
        }
    }

    #[test]
    fn status_block_for_our_turn() {
        let text = format_status(&session(), &me(), &game("p-1"));
        assert_eq!(
            text,
            "alice health: (80/100)\n\
             actions: 1/2 position: x=2,y=3\n\
             game name: arena\n\
             alive creep/players 7/2\n\
             game curr player: IT IS OUR ROUND!\n"
        );
    }

    #[test]
    fn status_block_lists_buffs_and_powerups() {
        let mut player = me();
        player.buffs = Some(vec![0, 2]);
        player.powerups = Some(vec![Powerup {
            id: "pu-9".into(),
            kind: 1,
        }]);

        let text = format_status(&session(), &player, &game("p-2"));
        assert!(text.contains("buffs: 2 [health][doubledmg]\n"));
        assert!(text.contains("powerups: 1\n ! powerup teleport -> pu-9\n"));
        assert!(text.ends_with("game curr player: p-2\n"));
    }

    #[test]
    fn board_places_self_before_surroundings() {
        let surroundings = Surroundings {
            creep: Some(vec![located(2, 3), located(1, 1)]),
            players: None,
            powerups: Some(vec![located(4, 4)]),
        };

        let board = build_board(&game("p-1"), &me(), &surroundings);
        let kinds: Vec<_> = board.entities().iter().map(|e| e.kind).collect();
        assert_eq!(
            kinds,
            vec![
                EntityKind::Player,
                EntityKind::Creep,
                EntityKind::Creep,
                EntityKind::PowerUp
            ]
        );
        assert_eq!(
            board.entity_at(Position::new(2, 3)).map(|e| e.kind),
            Some(EntityKind::Player)
        );
    }

    #[test]
    fn board_skips_entities_outside_the_grid() {
        let surroundings = Surroundings {
            creep: Some(vec![located(9, 9)]),
            ..Default::default()
        };
        let board = build_board(&game("p-1"), &me(), &surroundings);
        assert_eq!(board.entities().len(), 1);
    }

    #[test]
    fn events_are_newest_first_and_capped() {
        let events = (1..=5)
            .map(|id| LogEvent {
                id,
                date_created: format!("2021-03-1{id}T00:00:00+00:00"),
                message: format!("event {id}"),
            })
            .collect();

        let text = format_events(events, 3);
        assert_eq!(
            text,
            "15T00:00:00 -> event 5\n14T00:00:00 -> event 4\n13T00:00:00 -> event 3\n"
        );
    }
}
