use std::sync::Arc;

use crate::services::games::GameService;

/// Application state shared by all workers.
#[derive(Clone)]
pub struct AppState {
    games: Arc<GameService>,
}

impl AppState {
    pub fn new(games: Arc<GameService>) -> Self {
        Self { games }
    }

    pub fn games(&self) -> Arc<GameService> {
        Arc::clone(&self.games)
    }
}
