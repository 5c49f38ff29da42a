//! `/api/games` endpoints.

use actix_web::{web, HttpResponse};
use serde::Deserialize;

use crate::domain::settings::Settings;
use crate::error::AppError;
use crate::extractors::{GamePath, ValidatedJson};
use crate::state::app_state::AppState;
use crate::ws;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlipRequest {
    #[serde(alias = "card_id")]
    pub card_id: String,
}

async fn create_game(
    body: ValidatedJson<Settings>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let view = app_state.games().create_game(body.into_inner()).await?;
    Ok(HttpResponse::Created().json(view))
}

async fn get_game(
    path: GamePath,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let view = app_state.games().get_game(&path.0).await?;
    Ok(HttpResponse::Ok().json(view))
}

async fn flip_card(
    path: GamePath,
    body: ValidatedJson<FlipRequest>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let view = app_state
        .games()
        .flip_card(&path.0, &body.card_id)
        .await?;
    Ok(HttpResponse::Ok().json(view))
}

async fn restart_game(
    path: GamePath,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let view = app_state.games().restart_game(&path.0).await?;
    Ok(HttpResponse::Ok().json(view))
}

async fn delete_game(
    path: GamePath,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    app_state.games().delete_game(&path.0).await?;
    Ok(HttpResponse::NoContent().finish())
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("", web::post().to(create_game))
        .service(
            web::resource("/{game_id}")
                .route(web::get().to(get_game))
                .route(web::delete().to(delete_game)),
        )
        .route("/{game_id}/flip", web::post().to(flip_card))
        .route("/{game_id}/restart", web::post().to(restart_game))
        .route("/{game_id}/timer", web::get().to(ws::timer::upgrade));
}
