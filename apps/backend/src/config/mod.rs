//! Startup configuration read from environment variables.

pub mod game_limits;
pub mod server;

use std::str::FromStr;

use crate::error::AppError;

pub use game_limits::{game_limits_from_env, rng_seed_from_env};
pub use server::ServerConfig;

/// Parse an optional variable, reporting the variable name on failure.
pub(crate) fn parse_var<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &str,
) -> Result<Option<T>, AppError> {
    match lookup(name) {
        None => Ok(None),
        Some(raw) if raw.trim().is_empty() => Ok(None),
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|_| AppError::config(format!("{name} has an invalid value: {raw:?}"))),
    }
}

pub(crate) fn env_lookup(name: &str) -> Option<String> {
    std::env::var(name).ok()
}
