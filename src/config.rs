// ABOUTME: Runtime configuration for the liftlog core services
// ABOUTME: Progression tuning knobs with environment-variable overrides
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Environment-based configuration for the progression engine.
//!
//! Defaults come from [`crate::constants`]; each knob can be overridden
//! through an environment variable for deployment-specific tuning.

use std::env;

use crate::constants::{history, progression};

/// Tuning knobs for the progressive-overload advisor
#[derive(Debug, Clone)]
pub struct ProgressionConfig {
    /// How many of the user's most recent workouts are scanned for history
    pub workout_scan_limit: usize,
    /// Default cap on returned history records
    pub history_limit: usize,
    /// Number of recent sessions retrieved when judging a trend
    pub suggestion_window: usize,
    /// Minimum logged sessions before a suggestion is attempted
    pub min_history_sessions: usize,
    /// Mean reps per set required before a load increase is suggested
    pub rep_target_threshold: f64,
    /// Multiplier applied to the last session's mean weight
    pub weight_increase_factor: f64,
    /// Suggested weights are rounded to the nearest multiple of this
    pub weight_rounding_increment: f64,
}

impl Default for ProgressionConfig {
    fn default() -> Self {
        Self {
            workout_scan_limit: history::RECENT_WORKOUT_SCAN_LIMIT,
            history_limit: history::DEFAULT_HISTORY_LIMIT,
            suggestion_window: progression::SUGGESTION_HISTORY_WINDOW,
            min_history_sessions: progression::MIN_HISTORY_SESSIONS,
            rep_target_threshold: progression::REP_TARGET_THRESHOLD,
            weight_increase_factor: progression::WEIGHT_INCREASE_FACTOR,
            weight_rounding_increment: progression::WEIGHT_ROUNDING_INCREMENT,
        }
    }
}

impl ProgressionConfig {
    /// Create configuration from environment variables, falling back to
    /// defaults for unset or unparseable values
    #[must_use]
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            workout_scan_limit: env_usize("LIFTLOG_WORKOUT_SCAN_LIMIT", defaults.workout_scan_limit),
            history_limit: env_usize("LIFTLOG_HISTORY_LIMIT", defaults.history_limit),
            suggestion_window: env_usize("LIFTLOG_SUGGESTION_WINDOW", defaults.suggestion_window),
            min_history_sessions: env_usize(
                "LIFTLOG_MIN_HISTORY_SESSIONS",
                defaults.min_history_sessions,
            ),
            rep_target_threshold: env_f64(
                "LIFTLOG_REP_TARGET_THRESHOLD",
                defaults.rep_target_threshold,
            ),
            weight_increase_factor: env_f64(
                "LIFTLOG_WEIGHT_INCREASE_FACTOR",
                defaults.weight_increase_factor,
            ),
            weight_rounding_increment: env_f64(
                "LIFTLOG_WEIGHT_ROUNDING_INCREMENT",
                defaults.weight_rounding_increment,
            ),
        }
    }
}

fn env_usize(key: &str, default: usize) -> usize {
    env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

fn env_f64(key: &str, default: f64) -> f64 {
    env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_constants() {
        let config = ProgressionConfig::default();
        assert_eq!(config.workout_scan_limit, 30);
        assert_eq!(config.min_history_sessions, 2);
        assert!((config.weight_increase_factor - 1.025).abs() < f64::EPSILON);
        assert!((config.weight_rounding_increment - 2.5).abs() < f64::EPSILON);
    }
}
