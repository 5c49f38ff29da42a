#![allow(dead_code)]

use std::time::Duration;

use serde_json::{json, Value};

// Logging is auto-installed for every test binary that includes this module
#[ctor::ctor]
fn init_logging() {
    backend_test_support::logging::init();
}

pub const SHORT_TIMEOUT: Duration = Duration::from_secs(3);

/// Create-game body with the given size and countdown.
pub fn settings_body(card_count: i32, countdown_seconds: i32) -> Value {
    json!({
        "userName": "alice",
        "cardCount": card_count,
        "countdownSeconds": countdown_seconds,
        "flipBackDelayMs": 800,
    })
}
