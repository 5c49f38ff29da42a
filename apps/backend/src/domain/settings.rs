//! Game settings and their validation.

use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use crate::errors::domain::{DomainError, ValidationKind};

/// Configuration for one game. Immutable once attached to a session.
///
/// Integer fields are signed so out-of-range input reaches
/// [`validate_settings`] and is rejected with a specific reason instead of
/// failing deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    #[serde(alias = "user_name")]
    pub user_name: String,
    #[serde(alias = "card_count")]
    pub card_count: i32,
    #[serde(alias = "countdown_seconds")]
    pub countdown_seconds: i32,
    /// Client-side delay before a mismatched pair flips back. Not used by
    /// the game rules.
    #[serde(alias = "flip_back_delay_ms")]
    pub flip_back_delay_ms: i64,
    #[serde(
        default,
        alias = "max_bad_guesses",
        skip_serializing_if = "Option::is_none"
    )]
    pub max_bad_guesses: Option<i32>,
}

/// Deployment bounds for settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameLimits {
    pub card_count: RangeInclusive<i32>,
    pub countdown_seconds: RangeInclusive<i32>,
}

pub const CARD_COUNT_MIN: i32 = 4;
pub const CARD_COUNT_MAX: i32 = 100;
pub const COUNTDOWN_SECONDS_MIN: i32 = 4;
pub const COUNTDOWN_SECONDS_MAX: i32 = 120;

impl Default for GameLimits {
    fn default() -> Self {
        Self {
            card_count: CARD_COUNT_MIN..=CARD_COUNT_MAX,
            countdown_seconds: COUNTDOWN_SECONDS_MIN..=COUNTDOWN_SECONDS_MAX,
        }
    }
}

/// Check every settings rule, returning the first one that fails.
pub fn validate_settings(settings: &Settings, limits: &GameLimits) -> Result<(), DomainError> {
    if settings.user_name.trim().is_empty() {
        return Err(DomainError::validation(
            ValidationKind::EmptyUserName,
            "user_name must be non-empty",
        ));
    }

    if settings.card_count % 2 != 0 {
        return Err(DomainError::validation(
            ValidationKind::OddCardCount,
            "card_count must be even",
        ));
    }

    if !limits.card_count.contains(&settings.card_count) {
        return Err(DomainError::validation(
            ValidationKind::CardCountOutOfRange,
            format!(
                "card_count must be between {} and {}",
                limits.card_count.start(),
                limits.card_count.end()
            ),
        ));
    }

    if !limits.countdown_seconds.contains(&settings.countdown_seconds) {
        return Err(DomainError::validation(
            ValidationKind::CountdownOutOfRange,
            format!(
                "countdown_seconds must be between {} and {}",
                limits.countdown_seconds.start(),
                limits.countdown_seconds.end()
            ),
        ));
    }

    if settings.flip_back_delay_ms < 0 {
        return Err(DomainError::validation(
            ValidationKind::NegativeFlipBackDelay,
            "flip_back_delay_ms must be non-negative",
        ));
    }

    if matches!(settings.max_bad_guesses, Some(max) if max < 1) {
        return Err(DomainError::validation(
            ValidationKind::InvalidMaxBadGuesses,
            "max_bad_guesses must be positive when set",
        ));
    }

    Ok(())
}
