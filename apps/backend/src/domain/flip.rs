//! Turn state machine.
//!
//! Per turn: `Idle` (no pending card) to `OnePending` (one card face-up),
//! then back to `Idle` on the second flip with a match or mismatch applied.

use time::OffsetDateTime;

use crate::domain::countdown::apply_expiry;
use crate::domain::state::{CardId, GameSession, GameStatus};
use crate::errors::domain::{DomainError, FlipKind, InfraErrorKind};

/// A card value disclosed only in the response to a mismatching flip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevealedCard {
    pub card_id: CardId,
    pub emoji: &'static str,
}

/// Both cards of a mismatched turn, first flip first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevealPair {
    pub first: RevealedCard,
    pub second: RevealedCard,
}

impl RevealPair {
    pub fn emoji_for(&self, card_id: &str) -> Option<&'static str> {
        [&self.first, &self.second]
            .into_iter()
            .find(|r| r.card_id == card_id)
            .map(|r| r.emoji)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FlipOutcome {
    pub session: GameSession,
    pub reveal: Option<RevealPair>,
}

/// Apply one flip. On error the input session is untouched.
pub fn flip_card(
    session: &GameSession,
    card_id: &str,
    now: OffsetDateTime,
) -> Result<FlipOutcome, DomainError> {
    match session.status {
        GameStatus::Playing => {}
        GameStatus::Won | GameStatus::Lost => {
            return Err(DomainError::flip(
                FlipKind::GameNotPlaying,
                "Game is not in progress",
            ))
        }
    }

    let Some(card) = session.card(card_id) else {
        return Err(DomainError::flip(FlipKind::CardNotFound, "Card not found"));
    };
    if session.matched_card_ids.contains(card_id) {
        return Err(DomainError::flip(
            FlipKind::CardAlreadyMatched,
            "Card is already matched",
        ));
    }
    if session.flipped_card_ids.iter().any(|id| id == card_id) {
        return Err(DomainError::flip(
            FlipKind::CardAlreadyFaceUp,
            "Card is already face-up",
        ));
    }

    match session.flipped_card_ids.as_slice() {
        [] => {
            let mut next = session.clone();
            next.flipped_card_ids.push(card.id.clone());
            Ok(FlipOutcome {
                session: apply_expiry(next, now),
                reveal: None,
            })
        }
        [first_id] => {
            let Some(first) = session.card(first_id) else {
                return Err(DomainError::infra(
                    InfraErrorKind::DataCorruption,
                    format!("pending card {first_id} is not on the board"),
                ));
            };

            let mut next = session.clone();
            next.flipped_card_ids.clear();
            next.turns += 1;

            let reveal = if first.emoji == card.emoji {
                next.matched_card_ids.insert(first.id.clone());
                next.matched_card_ids.insert(card.id.clone());
                if next.matched_pairs() >= next.total_pairs() {
                    next.status = GameStatus::Won;
                }
                None
            } else {
                next.bad_guesses += 1;
                if let Some(max) = next.settings.max_bad_guesses {
                    if i64::from(next.bad_guesses) >= i64::from(max) {
                        next.status = GameStatus::Lost;
                    }
                }
                Some(RevealPair {
                    first: RevealedCard {
                        card_id: first.id.clone(),
                        emoji: first.emoji,
                    },
                    second: RevealedCard {
                        card_id: card.id.clone(),
                        emoji: card.emoji,
                    },
                })
            };

            Ok(FlipOutcome {
                session: apply_expiry(next, now),
                reveal,
            })
        }
        _ => Err(DomainError::flip(
            FlipKind::TwoCardsPending,
            "Already two cards face-up this turn",
        )),
    }
}
