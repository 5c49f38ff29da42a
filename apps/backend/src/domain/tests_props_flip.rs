//! Property tests for the flip state machine.
//!
//! Properties tested:
//! - flipped ids never exceed two and matched ids stay paired
//! - turns only advance on the second flip of a turn
//! - matched cards can never be flipped again
//! - rejected flips leave the session untouched

use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::domain::flip::flip_card;
use crate::domain::lifecycle::create_session;
use crate::domain::settings::GameLimits;
use crate::domain::state::{GameId, GameStatus};
use crate::domain::test_gens;
use crate::domain::test_prelude;
use crate::domain::test_state_helpers::{at, settings};
use crate::errors::domain::FlipKind;

proptest! {
    #![proptest_config(test_prelude::proptest_config())]

    #[test]
    fn prop_flip_sequences_keep_invariants(
        card_count in test_gens::small_card_count(),
        seed in test_gens::seed(),
        positions in test_gens::flip_positions(64),
    ) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut s = create_session(
            GameId::from("g"),
            settings(card_count, 120),
            &GameLimits::default(),
            at(0),
            &mut rng,
        )
        .unwrap();

        for pos in positions {
            let id = s.board[pos % s.board.len()].id.clone();
            match flip_card(&s, &id, at(1)) {
                Ok(out) => {
                    let next = out.session;
                    let was_pending = s.flipped_card_ids.len() == 1;
                    if was_pending {
                        prop_assert_eq!(next.turns, s.turns + 1);
                        prop_assert!(next.flipped_card_ids.is_empty());
                    } else {
                        prop_assert_eq!(next.turns, s.turns);
                        prop_assert_eq!(next.bad_guesses, s.bad_guesses);
                        prop_assert!(out.reveal.is_none());
                    }
                    prop_assert!(next.flipped_card_ids.len() <= 2);
                    prop_assert_eq!(next.matched_card_ids.len() % 2, 0);
                    prop_assert!(next.matched_card_ids.is_superset(&s.matched_card_ids));
                    for id in next.flipped_card_ids.iter().chain(next.matched_card_ids.iter()) {
                        prop_assert!(next.card(id).is_some());
                    }
                    s = next;
                }
                Err(err) => {
                    let kind = err.flip_kind();
                    prop_assert!(matches!(
                        kind,
                        Some(FlipKind::CardAlreadyMatched)
                            | Some(FlipKind::CardAlreadyFaceUp)
                            | Some(FlipKind::GameNotPlaying)
                    ));
                    if s.matched_card_ids.contains(&id) {
                        prop_assert!(matches!(
                            kind,
                            Some(FlipKind::CardAlreadyMatched) | Some(FlipKind::GameNotPlaying)
                        ));
                    }
                }
            }
        }

        if s.status == GameStatus::Won {
            prop_assert_eq!(s.matched_card_ids.len(), s.board.len());
        }
    }

    #[test]
    fn prop_rejected_flip_leaves_session_unchanged(
        seed in test_gens::seed(),
        bogus in "[a-z]{1,8}",
    ) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let s = create_session(
            GameId::from("g"),
            settings(8, 60),
            &GameLimits::default(),
            at(0),
            &mut rng,
        )
        .unwrap();
        let before = s.clone();
        let err = flip_card(&s, &bogus, at(1)).unwrap_err();
        prop_assert_eq!(err.flip_kind(), Some(FlipKind::CardNotFound));
        prop_assert_eq!(s, before);
    }
}
