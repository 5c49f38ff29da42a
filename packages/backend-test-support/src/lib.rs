//! Backend test support utilities
//!
//! Shared helpers for the memory game backend tests: one-time logging
//! initialization and assertions over Problem Details error bodies.

pub mod logging;
pub mod problem_details;
