use serde::{Deserialize, Serialize};

use crate::domain::state::GameStatus;

/// Outbound timer frames. There are no inbound application messages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TimerMsg {
    #[serde(rename_all = "camelCase")]
    Tick {
        remaining_seconds: i64,
        status: GameStatus,
    },
    Error { error: TimerErrorCode },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TimerErrorCode {
    NotFound,
    Internal,
}
