//! Game limits and RNG seeding.

use crate::config::{env_lookup, parse_var};
use crate::domain::settings::{
    GameLimits, CARD_COUNT_MAX, CARD_COUNT_MIN, COUNTDOWN_SECONDS_MAX, COUNTDOWN_SECONDS_MIN,
};
use crate::error::AppError;

/// Limits from `GAME_CARD_COUNT_MIN/MAX` and `GAME_COUNTDOWN_SECONDS_MIN/MAX`.
pub fn game_limits_from_env() -> Result<GameLimits, AppError> {
    game_limits_from(env_lookup)
}

/// `GAME_RNG_SEED`, when set.
pub fn rng_seed_from_env() -> Result<Option<u64>, AppError> {
    parse_var(&env_lookup, "GAME_RNG_SEED")
}

pub(crate) fn game_limits_from(
    lookup: impl Fn(&str) -> Option<String>,
) -> Result<GameLimits, AppError> {
    let card_min = parse_var(&lookup, "GAME_CARD_COUNT_MIN")?.unwrap_or(CARD_COUNT_MIN);
    let card_max = parse_var(&lookup, "GAME_CARD_COUNT_MAX")?.unwrap_or(CARD_COUNT_MAX);
    let countdown_min =
        parse_var(&lookup, "GAME_COUNTDOWN_SECONDS_MIN")?.unwrap_or(COUNTDOWN_SECONDS_MIN);
    let countdown_max =
        parse_var(&lookup, "GAME_COUNTDOWN_SECONDS_MAX")?.unwrap_or(COUNTDOWN_SECONDS_MAX);

    if card_min < 2 || card_min > card_max {
        return Err(AppError::config(format!(
            "card count bounds {card_min}..={card_max} are invalid"
        )));
    }
    if countdown_min < 1 || countdown_min > countdown_max {
        return Err(AppError::config(format!(
            "countdown bounds {countdown_min}..={countdown_max} are invalid"
        )));
    }

    Ok(GameLimits {
        card_count: card_min..=card_max,
        countdown_seconds: countdown_min..=countdown_max,
    })
}
