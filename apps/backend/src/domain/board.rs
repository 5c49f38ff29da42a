//! Board generation: paired cards drawn from a fixed symbol pool.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::domain::state::CardId;

/// Symbols cards are drawn from.
///
/// Smaller than the largest board's pair count, so a symbol can back more
/// than one pair. Matching compares symbols, so any two cards with the
/// same symbol form a pair.
pub const EMOJI_POOL: &[&str] = &[
    "🐶", "🐱", "🐭", "🐹", "🐰", "🦊", "🐻", "🐼", "🐨", "🐯", "🦁", "🐮", "🐷", "🐸", "🐵",
    "🐔", "🐧", "🐦", "🐤", "🦄",
];

/// Server-only card: id plus the symbol used for matching.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    pub id: CardId,
    pub emoji: &'static str,
}

/// Positional card id.
pub fn card_id(index: usize) -> CardId {
    format!("card-{index}")
}

/// Build a shuffled board of `card_count` cards.
///
/// Draws `card_count / 2` symbols with replacement, places each twice,
/// shuffles (Fisher-Yates), then assigns ids by final position.
pub fn generate_board<R: Rng + ?Sized>(card_count: usize, rng: &mut R) -> Vec<Card> {
    let pairs = card_count / 2;
    let chosen: Vec<&'static str> = (0..pairs)
        .map(|_| EMOJI_POOL[rng.random_range(0..EMOJI_POOL.len())])
        .collect();

    let mut symbols = Vec::with_capacity(pairs * 2);
    symbols.extend_from_slice(&chosen);
    symbols.extend_from_slice(&chosen);
    symbols.shuffle(rng);

    symbols
        .into_iter()
        .enumerate()
        .map(|(i, emoji)| Card {
            id: card_id(i),
            emoji,
        })
        .collect()
}
