//! Public projection of a session.
//!
//! Only cards that are face-up, matched, or part of a reveal carry their
//! symbol. Everything else goes out as an id with no emoji.

use serde::Serialize;
use time::OffsetDateTime;

use crate::domain::countdown::remaining_seconds;
use crate::domain::flip::RevealPair;
use crate::domain::settings::Settings;
use crate::domain::state::{CardId, GameId, GameSession, GameStatus};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicCard {
    pub id: CardId,
    pub is_face_up: bool,
    pub is_matched: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emoji: Option<&'static str>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicGameState {
    pub status: GameStatus,
    pub turns: u32,
    pub bad_guesses: u32,
    /// Unix seconds, fractional.
    pub started_at: f64,
    #[serde(skip)]
    pub countdown_seconds: i32,
    pub remaining_seconds: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicGameView {
    pub game_id: GameId,
    pub board: Vec<PublicCard>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub settings: Option<Settings>,
    pub state: PublicGameState,
}

impl PublicGameView {
    /// Drop the settings echo (flip responses).
    pub fn without_settings(self) -> Self {
        Self {
            settings: None,
            ..self
        }
    }
}

fn unix_seconds(ts: OffsetDateTime) -> f64 {
    ts.unix_timestamp_nanos() as f64 / 1_000_000_000.0
}

/// Project `session` at `now`, with settings included.
pub fn project(
    session: &GameSession,
    reveal: Option<&RevealPair>,
    now: OffsetDateTime,
) -> PublicGameView {
    let board = session
        .board
        .iter()
        .map(|card| {
            let revealed = reveal.and_then(|r| r.emoji_for(&card.id));
            let is_face_up =
                session.flipped_card_ids.iter().any(|id| *id == card.id) || revealed.is_some();
            let is_matched = session.matched_card_ids.contains(&card.id);
            let emoji = match revealed {
                Some(e) => Some(e),
                None if is_face_up || is_matched => Some(card.emoji),
                None => None,
            };
            PublicCard {
                id: card.id.clone(),
                is_face_up,
                is_matched,
                emoji,
            }
        })
        .collect();

    let remaining = match session.status {
        GameStatus::Playing => remaining_seconds(session, now),
        GameStatus::Won | GameStatus::Lost => 0,
    };

    PublicGameView {
        game_id: session.game_id.clone(),
        board,
        settings: Some(session.settings.clone()),
        state: PublicGameState {
            status: session.status,
            turns: session.turns,
            bad_guesses: session.bad_guesses,
            started_at: unix_seconds(session.started_at),
            countdown_seconds: session.settings.countdown_seconds,
            remaining_seconds: remaining,
        },
    }
}
