//! Domain layer: pure game session logic.
//!
//! Nothing here performs I/O or reads the clock. Callers pass `now` and an
//! RNG in, and get a new session value back.

pub mod board;
pub mod countdown;
pub mod flip;
pub mod lifecycle;
pub mod settings;
pub mod state;
pub mod view;

#[cfg(test)]
mod test_gens;
#[cfg(test)]
mod test_prelude;
#[cfg(test)]
mod test_state_helpers;
#[cfg(test)]
mod tests_flip;
#[cfg(test)]
mod tests_props_flip;

// Re-exports for ergonomics
pub use board::{generate_board, Card, EMOJI_POOL};
pub use countdown::{apply_expiry, remaining_seconds};
pub use flip::{flip_card, FlipOutcome, RevealPair, RevealedCard};
pub use lifecycle::{create_session, restart_session};
pub use settings::{validate_settings, GameLimits, Settings};
pub use state::{CardId, GameId, GameSession, GameStatus};
pub use view::{project, PublicCard, PublicGameState, PublicGameView};
