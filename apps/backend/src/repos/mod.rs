//! Session storage.

pub mod games;

pub use games::{GameLock, GameRepository, InMemoryGameRepository};
