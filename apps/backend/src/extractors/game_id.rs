use std::future::{ready, Ready};

use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpRequest};

use crate::domain::state::GameId;
use crate::error::AppError;
use crate::errors::ErrorCode;

/// `{game_id}` path segment.
///
/// Only checks shape. Whether the game exists is the service's call, so a
/// well-formed unknown id yields 404 rather than 400.
#[derive(Debug, Clone)]
pub struct GamePath(pub GameId);

impl GamePath {
    pub fn into_inner(self) -> GameId {
        self.0
    }
}

const MAX_GAME_ID_LEN: usize = 64;

impl FromRequest for GamePath {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        ready(parse(req.match_info().get("game_id")))
    }
}

fn parse(raw: Option<&str>) -> Result<GamePath, AppError> {
    let raw = raw
        .ok_or_else(|| AppError::bad_request(ErrorCode::InvalidGameId, "Missing game_id parameter"))?
        .trim();

    if raw.is_empty() || raw.len() > MAX_GAME_ID_LEN {
        return Err(AppError::bad_request(
            ErrorCode::InvalidGameId,
            format!("Invalid game id: {raw:?}"),
        ));
    }
    if !raw
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        return Err(AppError::bad_request(
            ErrorCode::InvalidGameId,
            format!("Invalid game id: {raw:?}"),
        ));
    }

    Ok(GamePath(GameId::new(raw)))
}
