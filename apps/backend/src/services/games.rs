//! Game orchestration: lock, load, transition, save, project.

use std::sync::Arc;

use parking_lot::Mutex;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info};

use crate::domain::flip::flip_card;
use crate::domain::lifecycle::{create_session, restart_session};
use crate::domain::settings::{GameLimits, Settings};
use crate::domain::state::{GameId, GameSession, GameStatus};
use crate::domain::view::{project, PublicGameView};
use crate::domain::{apply_expiry, remaining_seconds};
use crate::errors::domain::{DomainError, NotFoundKind};
use crate::repos::games::GameRepository;
use crate::services::clock::Clock;

/// Snapshot pushed by the timer socket.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerTick {
    pub remaining_seconds: i64,
    pub status: GameStatus,
}

pub struct GameService {
    repo: Arc<dyn GameRepository>,
    clock: Arc<dyn Clock>,
    limits: GameLimits,
    /// Shared by all board generations; seeded for reproducible boards.
    rng: Mutex<ChaCha8Rng>,
}

impl GameService {
    pub fn new(
        repo: Arc<dyn GameRepository>,
        clock: Arc<dyn Clock>,
        limits: GameLimits,
        rng_seed: Option<u64>,
    ) -> Self {
        let rng = match rng_seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_os_rng(),
        };
        Self {
            repo,
            clock,
            limits,
            rng: Mutex::new(rng),
        }
    }

    pub fn limits(&self) -> &GameLimits {
        &self.limits
    }

    pub async fn create_game(&self, settings: Settings) -> Result<PublicGameView, DomainError> {
        let now = self.clock.now();
        let game_id = GameId::random();
        let session = {
            let mut rng = self.rng.lock();
            create_session(game_id, settings, &self.limits, now, &mut *rng)?
        };
        self.repo.save(session.clone()).await?;

        info!(
            game_id = %session.game_id,
            card_count = session.settings.card_count,
            countdown_seconds = session.settings.countdown_seconds,
            "game created"
        );
        Ok(project(&session, None, now))
    }

    pub async fn get_game(&self, game_id: &GameId) -> Result<PublicGameView, DomainError> {
        let _lock = self.repo.lock(game_id).await;
        let now = self.clock.now();
        let session = self.load_current(game_id, now).await?;
        Ok(project(&session, None, now))
    }

    pub async fn flip_card(
        &self,
        game_id: &GameId,
        card_id: &str,
    ) -> Result<PublicGameView, DomainError> {
        let _lock = self.repo.lock(game_id).await;
        let now = self.clock.now();
        let session = self.load(game_id).await?;

        let outcome = flip_card(&session, card_id, now).inspect_err(|err| {
            debug!(game_id = %game_id, card_id, error = %err, "flip rejected");
        })?;
        self.repo.save(outcome.session.clone()).await?;

        info!(
            game_id = %game_id,
            card_id,
            status = outcome.session.status.as_str(),
            turns = outcome.session.turns,
            bad_guesses = outcome.session.bad_guesses,
            mismatch = outcome.reveal.is_some(),
            "card flipped"
        );
        Ok(project(&outcome.session, outcome.reveal.as_ref(), now).without_settings())
    }

    pub async fn restart_game(&self, game_id: &GameId) -> Result<PublicGameView, DomainError> {
        let _lock = self.repo.lock(game_id).await;
        let now = self.clock.now();
        let session = self.load(game_id).await?;
        let restarted = {
            let mut rng = self.rng.lock();
            restart_session(&session, now, &mut *rng)
        };
        self.repo.save(restarted.clone()).await?;

        info!(game_id = %game_id, "game restarted");
        Ok(project(&restarted, None, now))
    }

    pub async fn delete_game(&self, game_id: &GameId) -> Result<(), DomainError> {
        let _lock = self.repo.lock(game_id).await;
        self.repo.delete(game_id).await?;
        info!(game_id = %game_id, "game deleted");
        Ok(())
    }

    /// Remaining time and status, with lazy expiry applied and persisted.
    pub async fn timer_tick(&self, game_id: &GameId) -> Result<TimerTick, DomainError> {
        let _lock = self.repo.lock(game_id).await;
        let now = self.clock.now();
        let session = self.load_current(game_id, now).await?;
        let remaining = match session.status {
            GameStatus::Playing => remaining_seconds(&session, now),
            GameStatus::Won | GameStatus::Lost => 0,
        };
        Ok(TimerTick {
            remaining_seconds: remaining,
            status: session.status,
        })
    }

    async fn load(&self, game_id: &GameId) -> Result<GameSession, DomainError> {
        self.repo
            .find_by_id(game_id)
            .await?
            .ok_or_else(|| DomainError::not_found(NotFoundKind::Game, "Game not found"))
    }

    /// Load and apply expiry, saving when the countdown ran out.
    /// Caller must hold the game lock.
    async fn load_current(
        &self,
        game_id: &GameId,
        now: time::OffsetDateTime,
    ) -> Result<GameSession, DomainError> {
        let session = self.load(game_id).await?;
        let was_playing = session.status.is_playing();
        let session = apply_expiry(session, now);
        if was_playing && !session.status.is_playing() {
            self.repo.save(session.clone()).await?;
            info!(game_id = %game_id, "game lost on countdown expiry");
        }
        Ok(session)
    }
}
