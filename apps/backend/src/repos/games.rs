//! Game session store.
//!
//! The store is the only shared mutable state in the backend. It hands out a
//! per-game lock so that at most one mutation of a given game is in flight.

use std::sync::Arc;

use async_trait::async_trait;
use dashmap::DashMap;
use tokio::sync::{Mutex, OwnedMutexGuard};
use tracing::debug;

use crate::domain::state::{GameId, GameSession};
use crate::errors::domain::DomainError;

type LockMap = DashMap<GameId, Arc<Mutex<()>>>;

/// Guard that represents the exclusive right to mutate one game.
/// Released on drop; the map entry goes with it once nobody else waits.
pub struct GameLock {
    game_id: GameId,
    guard: Option<OwnedMutexGuard<()>>,
    locks: Arc<LockMap>,
}

impl GameLock {
    pub fn game_id(&self) -> &GameId {
        &self.game_id
    }
}

impl Drop for GameLock {
    fn drop(&mut self) {
        // Release first so our guard no longer counts as a holder.
        drop(self.guard.take());
        // Map entry plus no guards or waiters leaves a count of one. Waiters
        // clone the Arc under the shard lock, so they cannot race this check.
        self.locks
            .remove_if(&self.game_id, |_, mutex| Arc::strong_count(mutex) == 1);
        debug!(game_id = %self.game_id, "game lock released");
    }
}

#[async_trait]
pub trait GameRepository: Send + Sync {
    /// Insert or replace by `game_id`.
    async fn save(&self, session: GameSession) -> Result<(), DomainError>;

    /// Snapshot of the stored session, if any.
    async fn find_by_id(&self, game_id: &GameId) -> Result<Option<GameSession>, DomainError>;

    /// Remove the session. Absent ids are not an error.
    async fn delete(&self, game_id: &GameId) -> Result<(), DomainError>;

    /// Wait for exclusive mutation rights on `game_id`.
    async fn lock(&self, game_id: &GameId) -> GameLock;
}

/// Process-local store. Contents are lost on restart.
#[derive(Default)]
pub struct InMemoryGameRepository {
    sessions: DashMap<GameId, GameSession>,
    locks: Arc<LockMap>,
}

impl InMemoryGameRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    /// Games with a lock currently held or awaited.
    pub fn lock_count(&self) -> usize {
        self.locks.len()
    }
}

#[async_trait]
impl GameRepository for InMemoryGameRepository {
    async fn save(&self, session: GameSession) -> Result<(), DomainError> {
        self.sessions.insert(session.game_id.clone(), session);
        Ok(())
    }

    async fn find_by_id(&self, game_id: &GameId) -> Result<Option<GameSession>, DomainError> {
        Ok(self.sessions.get(game_id).map(|entry| entry.value().clone()))
    }

    async fn delete(&self, game_id: &GameId) -> Result<(), DomainError> {
        self.sessions.remove(game_id);
        Ok(())
    }

    async fn lock(&self, game_id: &GameId) -> GameLock {
        // Clone the Arc out so the map shard is not held across the await.
        let mutex = self
            .locks
            .entry(game_id.clone())
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .clone();
        let guard = mutex.lock_owned().await;
        debug!(game_id = %game_id, "game lock acquired");
        GameLock {
            game_id: game_id.clone(),
            guard: Some(guard),
            locks: Arc::clone(&self.locks),
        }
    }
}
