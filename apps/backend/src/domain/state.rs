use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

use crate::domain::board::Card;
use crate::domain::settings::Settings;

pub type CardId = String;

/// Opaque, stable game identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GameId(String);

impl GameId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Fresh UUID v4 id.
    pub fn random() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for GameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for GameId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// Overall session status. `Won` and `Lost` are terminal.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameStatus {
    Playing,
    Won,
    Lost,
}

impl GameStatus {
    pub const fn as_str(&self) -> &'static str {
        match self {
            GameStatus::Playing => "playing",
            GameStatus::Won => "won",
            GameStatus::Lost => "lost",
        }
    }

    pub const fn is_playing(&self) -> bool {
        match self {
            GameStatus::Playing => true,
            GameStatus::Won | GameStatus::Lost => false,
        }
    }
}

/// Full internal state of one game.
///
/// Transitions never mutate a session in place; they return a successor.
#[derive(Debug, Clone, PartialEq)]
pub struct GameSession {
    pub game_id: GameId,
    pub user_name: String,
    pub settings: Settings,
    /// Generated once per (re)start, never edited.
    pub board: Vec<Card>,
    pub status: GameStatus,
    pub started_at: OffsetDateTime,
    /// Completed two-card turns.
    pub turns: u32,
    /// Mismatched turns.
    pub bad_guesses: u32,
    /// Cards face-up in the active turn, in flip order (0 or 1 between
    /// requests).
    pub flipped_card_ids: Vec<CardId>,
    /// Cards in confirmed pairs; always even-sized.
    pub matched_card_ids: BTreeSet<CardId>,
}

impl GameSession {
    pub fn card(&self, card_id: &str) -> Option<&Card> {
        self.board.iter().find(|c| c.id == card_id)
    }

    pub fn total_pairs(&self) -> usize {
        self.board.len() / 2
    }

    pub fn matched_pairs(&self) -> usize {
        self.matched_card_ids.len() / 2
    }
}
