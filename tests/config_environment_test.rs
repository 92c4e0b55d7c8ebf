// ABOUTME: Tests for environment-driven configuration overrides
// ABOUTME: Verifies ProgressionConfig env parsing and fallback to defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::float_cmp)]
#![allow(missing_docs)]

use serial_test::serial;

use liftlog::config::ProgressionConfig;

#[test]
#[serial]
fn env_overrides_are_picked_up() {
    std::env::set_var("LIFTLOG_REP_TARGET_THRESHOLD", "6.0");
    std::env::set_var("LIFTLOG_WORKOUT_SCAN_LIMIT", "50");

    let config = ProgressionConfig::from_env();
    assert_eq!(config.rep_target_threshold, 6.0);
    assert_eq!(config.workout_scan_limit, 50);
    // untouched knobs keep their defaults
    assert_eq!(config.min_history_sessions, 2);

    std::env::remove_var("LIFTLOG_REP_TARGET_THRESHOLD");
    std::env::remove_var("LIFTLOG_WORKOUT_SCAN_LIMIT");
}

#[test]
#[serial]
fn unparseable_env_values_fall_back_to_defaults() {
    std::env::set_var("LIFTLOG_WEIGHT_INCREASE_FACTOR", "lots");

    let config = ProgressionConfig::from_env();
    assert_eq!(config.weight_increase_factor, 1.025);

    std::env::remove_var("LIFTLOG_WEIGHT_INCREASE_FACTOR");
}

#[test]
#[serial]
fn clean_environment_yields_defaults() {
    for key in [
        "LIFTLOG_WORKOUT_SCAN_LIMIT",
        "LIFTLOG_HISTORY_LIMIT",
        "LIFTLOG_SUGGESTION_WINDOW",
        "LIFTLOG_MIN_HISTORY_SESSIONS",
        "LIFTLOG_REP_TARGET_THRESHOLD",
        "LIFTLOG_WEIGHT_INCREASE_FACTOR",
        "LIFTLOG_WEIGHT_ROUNDING_INCREMENT",
    ] {
        std::env::remove_var(key);
    }

    let config = ProgressionConfig::from_env();
    assert_eq!(config.workout_scan_limit, 30);
    assert_eq!(config.history_limit, 10);
    assert_eq!(config.suggestion_window, 5);
    assert_eq!(config.rep_target_threshold, 8.0);
    assert_eq!(config.weight_rounding_increment, 2.5);
}
