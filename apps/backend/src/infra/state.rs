use std::sync::Arc;

use crate::config::{game_limits_from_env, rng_seed_from_env};
use crate::domain::settings::GameLimits;
use crate::error::AppError;
use crate::repos::games::{GameRepository, InMemoryGameRepository};
use crate::services::clock::{Clock, SystemClock};
use crate::services::games::GameService;
use crate::state::app_state::AppState;

/// Builder for creating AppState instances (used in both tests and main)
pub struct StateBuilder {
    repo: Option<Arc<dyn GameRepository>>,
    clock: Option<Arc<dyn Clock>>,
    limits: GameLimits,
    rng_seed: Option<u64>,
}

impl StateBuilder {
    pub fn new() -> Self {
        Self {
            repo: None,
            clock: None,
            limits: GameLimits::default(),
            rng_seed: None,
        }
    }

    /// Limits and seed from the environment.
    pub fn with_env(mut self) -> Result<Self, AppError> {
        self.limits = game_limits_from_env()?;
        self.rng_seed = rng_seed_from_env()?;
        Ok(self)
    }

    pub fn with_repo(mut self, repo: Arc<dyn GameRepository>) -> Self {
        self.repo = Some(repo);
        self
    }

    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = Some(clock);
        self
    }

    pub fn with_limits(mut self, limits: GameLimits) -> Self {
        self.limits = limits;
        self
    }

    pub fn with_rng_seed(mut self, seed: u64) -> Self {
        self.rng_seed = Some(seed);
        self
    }

    pub fn build(self) -> AppState {
        let repo = self
            .repo
            .unwrap_or_else(|| Arc::new(InMemoryGameRepository::new()));
        let clock = self.clock.unwrap_or_else(|| Arc::new(SystemClock));
        let games = GameService::new(repo, clock, self.limits, self.rng_seed);
        AppState::new(Arc::new(games))
    }
}

impl Default for StateBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub fn build_state() -> StateBuilder {
    StateBuilder::new()
}
