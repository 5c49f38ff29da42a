// Proptest generators for domain types.

use proptest::prelude::*;

use crate::domain::settings::{CARD_COUNT_MAX, CARD_COUNT_MIN};

/// Even card count within the default bounds.
pub fn card_count() -> impl Strategy<Value = i32> {
    (CARD_COUNT_MIN / 2..=CARD_COUNT_MAX / 2).prop_map(|pairs| pairs * 2)
}

/// Small even card count, keeps flip sequences short.
pub fn small_card_count() -> impl Strategy<Value = i32> {
    (2..=8i32).prop_map(|pairs| pairs * 2)
}

pub fn seed() -> impl Strategy<Value = u64> {
    any::<u64>()
}

/// Sequence of board positions to flip, reduced modulo board size by the
/// caller.
pub fn flip_positions(max_len: usize) -> impl Strategy<Value = Vec<usize>> {
    prop::collection::vec(any::<usize>(), 0..max_len)
}
