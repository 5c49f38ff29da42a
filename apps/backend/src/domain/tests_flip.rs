//! Flip resolution: preconditions, match, mismatch, win, loss.

use crate::domain::countdown::remaining_seconds;
use crate::domain::flip::flip_card;
use crate::domain::state::{GameSession, GameStatus};
use crate::domain::test_state_helpers::{at, make_session, MakeSessionArgs};
use crate::domain::view::project;
use crate::errors::domain::{DomainError, FlipKind, InfraErrorKind};

fn flip(s: &GameSession, id: &str) -> GameSession {
    flip_card(s, id, at(1001)).expect("flip accepted").session
}

fn rejected(s: &GameSession, id: &str) -> FlipKind {
    flip_card(s, id, at(1001))
        .expect_err("flip rejected")
        .flip_kind()
        .expect("flip error")
}

#[test]
fn first_flip_is_pending_without_counting_a_turn() {
    let s = make_session(MakeSessionArgs::default());
    let out = flip_card(&s, "card-0", at(1001)).unwrap();
    assert_eq!(out.session.flipped_card_ids, vec!["card-0".to_string()]);
    assert_eq!(out.session.turns, 0);
    assert!(out.reveal.is_none());
}

#[test]
fn matching_pair_completes_turn() {
    let s = make_session(MakeSessionArgs::default());
    let s = flip(&s, "card-0");
    let out = flip_card(&s, "card-2", at(1001)).unwrap();

    assert!(out.reveal.is_none());
    let s = out.session;
    assert_eq!(s.turns, 1);
    assert_eq!(s.bad_guesses, 0);
    assert!(s.flipped_card_ids.is_empty());
    assert!(s.matched_card_ids.contains("card-0"));
    assert!(s.matched_card_ids.contains("card-2"));
    assert_eq!(s.status, GameStatus::Playing);
}

#[test]
fn four_card_board_is_won_after_both_pairs() {
    let s = make_session(MakeSessionArgs {
        countdown_seconds: 30,
        ..Default::default()
    });
    let s = flip(&flip(&s, "card-0"), "card-2");

    let v = project(&s, None, at(1001));
    assert_eq!(v.state.turns, 1);
    assert_eq!(v.board.iter().filter(|c| c.is_matched).count(), 2);
    assert!(!v.board[1].is_matched && !v.board[3].is_matched);

    let s = flip(&flip(&s, "card-1"), "card-3");
    assert_eq!(s.status, GameStatus::Won);
    assert_eq!(s.turns, 2);
    assert_eq!(s.matched_card_ids.len(), 4);
}

#[test]
fn mismatch_reveals_both_cards_and_flips_them_back() {
    let s = make_session(MakeSessionArgs::default());
    let s = flip(&s, "card-0");
    let out = flip_card(&s, "card-1", at(1001)).unwrap();

    let reveal = out.reveal.expect("mismatch reveals");
    assert_eq!(reveal.first.card_id, "card-0");
    assert_eq!(reveal.first.emoji, "🐶");
    assert_eq!(reveal.second.card_id, "card-1");
    assert_eq!(reveal.second.emoji, "🐱");

    assert_eq!(out.session.turns, 1);
    assert_eq!(out.session.bad_guesses, 1);
    assert!(out.session.flipped_card_ids.is_empty());
    assert!(out.session.matched_card_ids.is_empty());
}

#[test]
fn bad_guess_limit_loses_the_game() {
    let s = make_session(MakeSessionArgs {
        symbols: vec!["🐶", "🐱", "🐭", "🐶", "🐱", "🐭"],
        max_bad_guesses: Some(2),
        ..Default::default()
    });
    let s = flip(&flip(&s, "card-0"), "card-1");
    assert_eq!(s.status, GameStatus::Playing);
    let s = flip(&flip(&s, "card-1"), "card-2");

    assert_eq!(s.bad_guesses, 2);
    assert_eq!(s.status, GameStatus::Lost);
    assert_eq!(rejected(&s, "card-3"), FlipKind::GameNotPlaying);
}

#[test]
fn unlimited_bad_guesses_never_lose() {
    let mut s = make_session(MakeSessionArgs::default());
    for _ in 0..20 {
        s = flip(&flip(&s, "card-0"), "card-1");
    }
    assert_eq!(s.bad_guesses, 20);
    assert_eq!(s.status, GameStatus::Playing);
}

#[test]
fn unknown_card_is_rejected_and_session_unchanged() {
    let s = make_session(MakeSessionArgs::default());
    let before = s.clone();
    assert_eq!(rejected(&s, "card-99"), FlipKind::CardNotFound);
    assert_eq!(s, before);
}

#[test]
fn matched_card_is_rejected() {
    let s = make_session(MakeSessionArgs::default());
    let s = flip(&flip(&s, "card-0"), "card-2");
    assert_eq!(rejected(&s, "card-0"), FlipKind::CardAlreadyMatched);
    assert_eq!(rejected(&s, "card-2"), FlipKind::CardAlreadyMatched);
}

#[test]
fn same_card_twice_is_rejected() {
    let s = flip(&make_session(MakeSessionArgs::default()), "card-1");
    assert_eq!(rejected(&s, "card-1"), FlipKind::CardAlreadyFaceUp);
}

#[test]
fn third_pending_card_is_rejected() {
    let mut s = make_session(MakeSessionArgs::default());
    s.flipped_card_ids = vec!["card-0".into(), "card-1".into()];
    assert_eq!(rejected(&s, "card-2"), FlipKind::TwoCardsPending);
}

#[test]
fn preconditions_checked_in_order() {
    let mut s = make_session(MakeSessionArgs::default());
    s.status = GameStatus::Won;
    assert_eq!(rejected(&s, "card-99"), FlipKind::GameNotPlaying);

    let mut s = make_session(MakeSessionArgs::default());
    s.matched_card_ids.insert("card-0".into());
    s.matched_card_ids.insert("card-2".into());
    s.flipped_card_ids = vec!["card-1".into(), "card-3".into()];
    assert_eq!(rejected(&s, "card-0"), FlipKind::CardAlreadyMatched);
    assert_eq!(rejected(&s, "card-1"), FlipKind::CardAlreadyFaceUp);
}

#[test]
fn flip_after_deadline_loses() {
    let s = make_session(MakeSessionArgs {
        countdown_seconds: 10,
        started_at: at(1000),
        ..Default::default()
    });
    let out = flip_card(&s, "card-0", at(1011)).unwrap();
    assert_eq!(out.session.status, GameStatus::Lost);
    assert_eq!(remaining_seconds(&out.session, at(1011)), 0);
}

#[test]
fn winning_flip_past_deadline_stays_won() {
    let s = make_session(MakeSessionArgs {
        symbols: vec!["🐶", "🐶"],
        countdown_seconds: 10,
        started_at: at(1000),
        ..Default::default()
    });
    let s = flip_card(&s, "card-0", at(1005)).unwrap().session;
    let s = flip_card(&s, "card-1", at(1020)).unwrap().session;
    assert_eq!(s.status, GameStatus::Won);
}

#[test]
fn pending_card_missing_from_board_is_corruption() {
    let mut s = make_session(MakeSessionArgs::default());
    s.flipped_card_ids = vec!["card-99".to_string()];

    let err = flip_card(&s, "card-0", at(1001)).expect_err("corrupted session");
    assert!(matches!(
        err,
        DomainError::Infra(InfraErrorKind::DataCorruption, _)
    ));
    assert_eq!(err.flip_kind(), None);
    assert_eq!(err.validation_kind(), None);
}
