//! Session creation and restart.

use std::collections::BTreeSet;

use rand::Rng;
use time::OffsetDateTime;

use crate::domain::board::generate_board;
use crate::domain::settings::{validate_settings, GameLimits, Settings};
use crate::domain::state::{GameId, GameSession, GameStatus};
use crate::errors::domain::DomainError;

/// Validate `settings` and build a fresh playing session.
pub fn create_session<R: Rng + ?Sized>(
    game_id: GameId,
    settings: Settings,
    limits: &GameLimits,
    now: OffsetDateTime,
    rng: &mut R,
) -> Result<GameSession, DomainError> {
    validate_settings(&settings, limits)?;
    let board = generate_board(settings.card_count as usize, rng);
    Ok(GameSession {
        game_id,
        user_name: settings.user_name.clone(),
        settings,
        board,
        status: GameStatus::Playing,
        started_at: now,
        turns: 0,
        bad_guesses: 0,
        flipped_card_ids: Vec::new(),
        matched_card_ids: BTreeSet::new(),
    })
}

/// New board and counters under the same id and settings.
pub fn restart_session<R: Rng + ?Sized>(
    session: &GameSession,
    now: OffsetDateTime,
    rng: &mut R,
) -> GameSession {
    GameSession {
        game_id: session.game_id.clone(),
        user_name: session.user_name.clone(),
        settings: session.settings.clone(),
        board: generate_board(session.settings.card_count as usize, rng),
        status: GameStatus::Playing,
        started_at: now,
        turns: 0,
        bad_guesses: 0,
        flipped_card_ids: Vec::new(),
        matched_card_ids: BTreeSet::new(),
    }
}
