//! Domain-level error type used across services and routes.
//!
//! This error type is HTTP-agnostic. Handlers return
//! `Result<T, crate::error::AppError>` and convert from `DomainError`
//! using the `From<DomainError> for AppError` implementation.

use std::error::Error;
use std::fmt::{Display, Formatter, Result as FmtResult};

/// Settings rules, one variant per rule so each rejection is distinguishable.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ValidationKind {
    EmptyUserName,
    OddCardCount,
    CardCountOutOfRange,
    CountdownOutOfRange,
    NegativeFlipBackDelay,
    InvalidMaxBadGuesses,
    Other(String),
}

/// Reasons a flip is rejected, in the order they are checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlipKind {
    GameNotPlaying,
    CardNotFound,
    CardAlreadyMatched,
    CardAlreadyFaceUp,
    TwoCardsPending,
}

/// Server-side failures the caller cannot fix
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum InfraErrorKind {
    DataCorruption,
    Other(String),
}

/// Domain-level not found entities
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum NotFoundKind {
    Game,
    Other(String),
}

/// Central domain error type
#[derive(Debug, Clone, PartialEq)]
pub enum DomainError {
    /// Settings rejected at creation
    Validation(ValidationKind, String),
    /// Flip rejected; the session is left untouched
    Flip(FlipKind, String),
    /// Missing resource in domain terms
    NotFound(NotFoundKind, String),
    /// Stored state is inconsistent or the store failed
    Infra(InfraErrorKind, String),
}

impl Display for DomainError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            DomainError::Validation(kind, d) => write!(f, "validation error {kind:?}: {d}"),
            DomainError::Flip(kind, d) => write!(f, "invalid flip {kind:?}: {d}"),
            DomainError::NotFound(kind, d) => write!(f, "not found {kind:?}: {d}"),
            DomainError::Infra(kind, d) => write!(f, "infra {kind:?}: {d}"),
        }
    }
}

impl Error for DomainError {}

impl DomainError {
    pub fn validation(kind: ValidationKind, detail: impl Into<String>) -> Self {
        Self::Validation(kind, detail.into())
    }
    pub fn flip(kind: FlipKind, detail: impl Into<String>) -> Self {
        Self::Flip(kind, detail.into())
    }
    pub fn not_found(kind: NotFoundKind, detail: impl Into<String>) -> Self {
        Self::NotFound(kind, detail.into())
    }
    pub fn infra(kind: InfraErrorKind, detail: impl Into<String>) -> Self {
        Self::Infra(kind, detail.into())
    }

    /// The flip rejection kind, if this is a flip error.
    pub fn flip_kind(&self) -> Option<FlipKind> {
        match self {
            DomainError::Flip(kind, _) => Some(*kind),
            _ => None,
        }
    }

    /// The validation rule that failed, if this is a validation error.
    pub fn validation_kind(&self) -> Option<&ValidationKind> {
        match self {
            DomainError::Validation(kind, _) => Some(kind),
            _ => None,
        }
    }
}
