//! Lazy countdown expiry.
//!
//! There is no timer in the domain. Expiry is observed whenever a session is
//! read or flipped, so a session can stay `Playing` past its deadline until
//! someone looks at it.

use time::OffsetDateTime;

use crate::domain::state::{GameSession, GameStatus};

/// `max(0, countdown - elapsed)` where elapsed is truncated toward zero to
/// whole seconds.
pub fn remaining_seconds(session: &GameSession, now: OffsetDateTime) -> i64 {
    let elapsed = (now - session.started_at).whole_seconds();
    (i64::from(session.settings.countdown_seconds) - elapsed).max(0)
}

/// Mark a playing session as lost once its countdown has run out.
pub fn apply_expiry(session: GameSession, now: OffsetDateTime) -> GameSession {
    match session.status {
        GameStatus::Playing if remaining_seconds(&session, now) == 0 => GameSession {
            status: GameStatus::Lost,
            ..session
        },
        GameStatus::Playing | GameStatus::Won | GameStatus::Lost => session,
    }
}
