//! Error codes for the memory game API.
//!
//! Add new codes here; never pass ad-hoc strings as error codes.
//! All codes are SCREAMING_SNAKE_CASE and map 1:1 to the strings that
//! appear in HTTP responses.

use core::fmt;

/// Centralized error codes for the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Settings validation
    /// user_name is empty after trimming
    EmptyUserName,
    /// card_count is odd
    OddCardCount,
    /// card_count outside configured bounds
    CardCountOutOfRange,
    /// countdown_seconds outside configured bounds
    CountdownOutOfRange,
    /// flip_back_delay_ms is negative
    NegativeFlipBackDelay,
    /// max_bad_guesses present but below 1
    InvalidMaxBadGuesses,
    /// General validation error
    ValidationError,

    // Flip rejections
    /// Game already won or lost
    GameNotPlaying,
    /// Card id not on the board
    CardNotFound,
    /// Card already part of a matched pair
    CardAlreadyMatched,
    /// Card already face-up this turn
    CardAlreadyFaceUp,
    /// Two cards already pending in this turn
    TwoCardsPending,

    // Request
    /// General bad request error
    BadRequest,
    /// Malformed game id in the path
    InvalidGameId,

    // Resource Not Found
    /// Game not found
    GameNotFound,
    /// General not found error
    NotFound,

    // System Errors
    /// Internal server error
    InternalError,
    /// Configuration error
    ConfigError,
}

impl ErrorCode {
    /// Returns the canonical SCREAMING_SNAKE_CASE string for this error code.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::EmptyUserName => "EMPTY_USER_NAME",
            Self::OddCardCount => "ODD_CARD_COUNT",
            Self::CardCountOutOfRange => "CARD_COUNT_OUT_OF_RANGE",
            Self::CountdownOutOfRange => "COUNTDOWN_OUT_OF_RANGE",
            Self::NegativeFlipBackDelay => "NEGATIVE_FLIP_BACK_DELAY",
            Self::InvalidMaxBadGuesses => "INVALID_MAX_BAD_GUESSES",
            Self::ValidationError => "VALIDATION_ERROR",

            Self::GameNotPlaying => "GAME_NOT_PLAYING",
            Self::CardNotFound => "CARD_NOT_FOUND",
            Self::CardAlreadyMatched => "CARD_ALREADY_MATCHED",
            Self::CardAlreadyFaceUp => "CARD_ALREADY_FACE_UP",
            Self::TwoCardsPending => "TWO_CARDS_PENDING",

            Self::BadRequest => "BAD_REQUEST",
            Self::InvalidGameId => "INVALID_GAME_ID",

            Self::GameNotFound => "GAME_NOT_FOUND",
            Self::NotFound => "NOT_FOUND",

            Self::InternalError => "INTERNAL_ERROR",
            Self::ConfigError => "CONFIG_ERROR",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
