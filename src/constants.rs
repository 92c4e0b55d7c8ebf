// ABOUTME: System-wide constants for the liftlog core
// ABOUTME: Domain defaults for progression policy, history scans, and rep parsing
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # Constants Module
//!
//! Hard defaults organized by domain. Runtime-tunable values are surfaced
//! through [`crate::config::ProgressionConfig`], which starts from these.

/// Progressive-overload policy defaults
pub mod progression {
    /// Mean reps per set a lifter must reach before a load increase is suggested
    pub const REP_TARGET_THRESHOLD: f64 = 8.0;

    /// Multiplier applied to the last session's mean weight (2.5% increase)
    pub const WEIGHT_INCREASE_FACTOR: f64 = 1.025;

    /// Suggested weights are rounded to the nearest multiple of this, in the
    /// user's weight unit (smallest common plate pair)
    pub const WEIGHT_ROUNDING_INCREMENT: f64 = 2.5;

    /// Minimum number of logged sessions before a suggestion is attempted
    pub const MIN_HISTORY_SESSIONS: usize = 2;

    /// Number of recent sessions retrieved when judging a trend
    pub const SUGGESTION_HISTORY_WINDOW: usize = 5;
}

/// Exercise history retrieval defaults
pub mod history {
    /// How many of the user's most recent workouts are scanned for matches
    pub const RECENT_WORKOUT_SCAN_LIMIT: usize = 30;

    /// Default cap on returned history records
    pub const DEFAULT_HISTORY_LIMIT: usize = 10;
}

/// Rep-specification parsing defaults
pub mod reps {
    /// Rep target used for AMRAP sets and for unparseable rep specs
    pub const DEFAULT_REP_TARGET: u32 = 10;
}
