// ABOUTME: Training intelligence module for derived insights over logged history
// ABOUTME: Houses the progressive-overload advisor
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Derived training intelligence.
//!
//! Everything here is a pure function of logged history: no side effects,
//! no caching, safe to call on every page render.

/// Progressive-overload history retrieval and suggestion policy
pub mod progression;

pub use progression::{ProgressionEngine, round_to_increment};
