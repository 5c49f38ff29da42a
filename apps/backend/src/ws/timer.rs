//! Countdown push over WebSocket.
//!
//! One actor per connection. It polls the service once a second, so lazy
//! expiry is observed (and persisted) even when nobody flips a card.

use std::sync::Arc;
use std::time::{Duration, Instant};

use actix::prelude::*;
use actix_web::{web, Error, HttpRequest, HttpResponse};
use actix_web_actors::ws;
use tracing::{debug, error, info, warn};
use uuid::Uuid;

use crate::domain::state::GameId;
use crate::errors::domain::DomainError;
use crate::extractors::GamePath;
use crate::services::games::{GameService, TimerTick};
use crate::state::app_state::AppState;
use crate::ws::protocol::{TimerErrorCode, TimerMsg};

const TICK_INTERVAL: Duration = Duration::from_secs(1);
const HEARTBEAT_INTERVAL: Duration = Duration::from_secs(20);
const CLIENT_TIMEOUT: Duration = Duration::from_secs(40);

pub async fn upgrade(
    req: HttpRequest,
    stream: web::Payload,
    path: GamePath,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, Error> {
    let session = TimerSession::new(path.into_inner(), app_state.games());
    ws::start(session, &req, stream)
}

pub struct TimerSession {
    conn_id: Uuid,
    game_id: GameId,
    games: Arc<GameService>,
    last_heartbeat: Instant,
    /// Skip a tick while the previous read is still pending.
    tick_in_flight: bool,
    finished: bool,
}

impl TimerSession {
    fn new(game_id: GameId, games: Arc<GameService>) -> Self {
        Self {
            conn_id: Uuid::new_v4(),
            game_id,
            games,
            last_heartbeat: Instant::now(),
            tick_in_flight: false,
            finished: false,
        }
    }

    fn send_json(ctx: &mut ws::WebsocketContext<Self>, msg: &TimerMsg) {
        match serde_json::to_string(msg) {
            Ok(payload) => ctx.text(payload),
            Err(err) => warn!(error = %err, "[WS TIMER] failed to serialize outbound message"),
        }
    }

    fn finish(&mut self, ctx: &mut ws::WebsocketContext<Self>, code: ws::CloseCode) {
        self.finished = true;
        ctx.close(Some(ws::CloseReason::from(code)));
        ctx.stop();
    }

    fn tick(&mut self, ctx: &mut ws::WebsocketContext<Self>) {
        if self.tick_in_flight || self.finished {
            return;
        }
        self.tick_in_flight = true;

        let games = Arc::clone(&self.games);
        let game_id = self.game_id.clone();

        ctx.spawn(
            async move { games.timer_tick(&game_id).await }
                .into_actor(self)
                .map(|res, actor, ctx| {
                    actor.tick_in_flight = false;
                    if actor.finished {
                        return;
                    }
                    actor.handle_tick(res, ctx);
                }),
        );
    }

    fn handle_tick(
        &mut self,
        res: Result<TimerTick, DomainError>,
        ctx: &mut ws::WebsocketContext<Self>,
    ) {
        match res {
            Ok(tick) => {
                Self::send_json(
                    ctx,
                    &TimerMsg::Tick {
                        remaining_seconds: tick.remaining_seconds,
                        status: tick.status,
                    },
                );
                if !tick.status.is_playing() {
                    debug!(
                        conn_id = %self.conn_id,
                        game_id = %self.game_id,
                        status = tick.status.as_str(),
                        "[WS TIMER] game over, closing"
                    );
                    self.finish(ctx, ws::CloseCode::Normal);
                }
            }
            Err(DomainError::NotFound(..)) => {
                Self::send_json(
                    ctx,
                    &TimerMsg::Error {
                        error: TimerErrorCode::NotFound,
                    },
                );
                self.finish(ctx, ws::CloseCode::Normal);
            }
            Err(err) => {
                error!(
                    conn_id = %self.conn_id,
                    game_id = %self.game_id,
                    error = %err,
                    "[WS TIMER] tick failed"
                );
                Self::send_json(
                    ctx,
                    &TimerMsg::Error {
                        error: TimerErrorCode::Internal,
                    },
                );
                self.finish(ctx, ws::CloseCode::Error);
            }
        }
    }

    fn start_heartbeat(&self, ctx: &mut ws::WebsocketContext<Self>) {
        ctx.run_interval(HEARTBEAT_INTERVAL, |actor, ctx| {
            if Instant::now().duration_since(actor.last_heartbeat) > CLIENT_TIMEOUT {
                warn!(
                    conn_id = %actor.conn_id,
                    game_id = %actor.game_id,
                    "[WS TIMER] heartbeat timed out"
                );
                actor.finish(ctx, ws::CloseCode::Normal);
                return;
            }
            ctx.ping(b"keepalive");
        });
    }
}

impl Actor for TimerSession {
    type Context = ws::WebsocketContext<Self>;

    fn started(&mut self, ctx: &mut Self::Context) {
        info!(
            conn_id = %self.conn_id,
            game_id = %self.game_id,
            "[WS TIMER] started"
        );
        self.tick(ctx);
        ctx.run_interval(TICK_INTERVAL, |actor, ctx| actor.tick(ctx));
        self.start_heartbeat(ctx);
    }

    fn stopped(&mut self, _ctx: &mut Self::Context) {
        info!(
            conn_id = %self.conn_id,
            game_id = %self.game_id,
            "[WS TIMER] stopped"
        );
    }
}

impl StreamHandler<Result<ws::Message, ws::ProtocolError>> for TimerSession {
    fn handle(&mut self, msg: Result<ws::Message, ws::ProtocolError>, ctx: &mut Self::Context) {
        match msg {
            Ok(ws::Message::Ping(payload)) => {
                self.last_heartbeat = Instant::now();
                ctx.pong(&payload);
            }
            Ok(ws::Message::Pong(_)) | Ok(ws::Message::Text(_)) | Ok(ws::Message::Binary(_)) => {
                // Client frames carry nothing, but they prove liveness.
                self.last_heartbeat = Instant::now();
            }
            Ok(ws::Message::Close(reason)) => {
                debug!(conn_id = %self.conn_id, ?reason, "[WS TIMER] client closed");
                self.finished = true;
                ctx.close(reason);
                ctx.stop();
            }
            Ok(ws::Message::Continuation(_)) | Ok(ws::Message::Nop) => {}
            Err(err) => {
                warn!(conn_id = %self.conn_id, error = %err, "[WS TIMER] protocol error");
                self.finish(ctx, ws::CloseCode::Protocol);
            }
        }
    }
}
