//! Test-only session builders for domain unit tests.

use std::collections::BTreeSet;

use time::OffsetDateTime;

use crate::domain::board::{card_id, Card};
use crate::domain::settings::Settings;
use crate::domain::state::{GameId, GameSession, GameStatus};

/// Timestamp `secs` seconds after the Unix epoch.
pub fn at(secs: i64) -> OffsetDateTime {
    OffsetDateTime::from_unix_timestamp(secs).expect("valid unix timestamp")
}

pub fn settings(card_count: i32, countdown_seconds: i32) -> Settings {
    Settings {
        user_name: "alice".to_string(),
        card_count,
        countdown_seconds,
        flip_back_delay_ms: 800,
        max_bad_guesses: None,
    }
}

pub struct MakeSessionArgs {
    /// Board symbols by position; ids are assigned `card-{i}`.
    pub symbols: Vec<&'static str>,
    pub countdown_seconds: i32,
    pub max_bad_guesses: Option<i32>,
    pub started_at: OffsetDateTime,
}

impl Default for MakeSessionArgs {
    fn default() -> Self {
        Self {
            symbols: vec!["🐶", "🐱", "🐶", "🐱"],
            countdown_seconds: 60,
            max_bad_guesses: None,
            started_at: at(1000),
        }
    }
}

/// Playing session with a fixed, known board layout.
pub fn make_session(args: MakeSessionArgs) -> GameSession {
    let board: Vec<Card> = args
        .symbols
        .iter()
        .enumerate()
        .map(|(i, &emoji)| Card {
            id: card_id(i),
            emoji,
        })
        .collect();

    let mut s = settings(board.len() as i32, args.countdown_seconds);
    s.max_bad_guesses = args.max_bad_guesses;

    GameSession {
        game_id: GameId::from("game-1"),
        user_name: s.user_name.clone(),
        settings: s,
        board,
        status: GameStatus::Playing,
        started_at: args.started_at,
        turns: 0,
        bad_guesses: 0,
        flipped_card_ids: Vec::new(),
        matched_card_ids: BTreeSet::new(),
    }
}
