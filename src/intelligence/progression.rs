// ABOUTME: Progressive-overload advisor over a user's logged exercise history
// ABOUTME: Scans recent workouts and proposes a next-session target weight, or declines
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # Progressive Overload
//!
//! Once a lifter consistently hits their rep target at a load, the load
//! should go up. [`ProgressionEngine`] applies that policy to the single
//! most recent session of an exercise: enough history, enough average
//! reps, and a scalable (non-zero) load earn a suggestion; anything else
//! declines rather than guessing.

#![allow(clippy::cast_precision_loss)] // set counts and rep counts are far below f64 precision

use std::sync::Arc;

use tracing::debug;
use uuid::Uuid;

use crate::config::ProgressionConfig;
use crate::database::FitnessRepository;
use crate::errors::AppResult;
use crate::models::{ExerciseHistoryEntry, OverloadSuggestion, SetEntry};

/// Round `value` to the nearest multiple of `increment`
///
/// A non-positive increment leaves the value untouched.
#[must_use]
pub fn round_to_increment(value: f64, increment: f64) -> f64 {
    if increment <= 0.0 {
        return value;
    }
    (value / increment).round() * increment
}

/// Mean weight and mean reps across a session's sets
fn session_averages(sets: &[SetEntry]) -> Option<(f64, f64)> {
    if sets.is_empty() {
        return None;
    }
    let count = sets.len() as f64;
    let avg_weight = sets.iter().map(|s| s.weight).sum::<f64>() / count;
    let avg_reps = sets.iter().map(|s| f64::from(s.reps)).sum::<f64>() / count;
    Some((avg_weight, avg_reps))
}

/// Progressive-overload advisor
pub struct ProgressionEngine<R> {
    db: Arc<R>,
    config: ProgressionConfig,
}

impl<R> ProgressionEngine<R> {
    /// Create an engine with the default policy configuration
    #[must_use]
    pub fn new(db: Arc<R>) -> Self {
        Self {
            db,
            config: ProgressionConfig::default(),
        }
    }

    /// Create an engine with a custom policy configuration
    #[must_use]
    pub const fn with_config(db: Arc<R>, config: ProgressionConfig) -> Self {
        Self { db, config }
    }
}

impl<R: FitnessRepository> ProgressionEngine<R> {
    /// Retrieve a user's recent history for one exercise, newest first
    ///
    /// Scans a bounded window of the user's most recent workouts and
    /// collects each appearance of an exercise whose name equals
    /// `exercise_name` case-insensitively. Matching is exact string
    /// equality, no fuzzy matching: an exercise logged under a variant
    /// name yields no history. The result is truncated to `limit`, which
    /// defaults to the configured history limit.
    pub async fn exercise_history(
        &self,
        user_id: Uuid,
        exercise_name: &str,
        limit: Option<usize>,
    ) -> AppResult<Vec<ExerciseHistoryEntry>> {
        let limit = limit.unwrap_or(self.config.history_limit);
        let workouts = self
            .db
            .get_workouts_by_user(user_id, Some(self.config.workout_scan_limit))
            .await?;

        let mut history = Vec::new();
        for workout in &workouts {
            let exercises = self.db.get_exercises_by_workout(workout.id).await?;
            for exercise in exercises {
                if exercise.name.eq_ignore_ascii_case(exercise_name) {
                    history.push(ExerciseHistoryEntry {
                        date: workout.date,
                        sets: exercise.sets,
                        workout_name: workout.name.clone(),
                    });
                }
            }
        }
        history.truncate(limit);

        debug!(
            user_id = %user_id,
            exercise = exercise_name,
            records = history.len(),
            "collected exercise history"
        );
        Ok(history)
    }

    /// Propose a next-session target weight for one exercise
    ///
    /// Judged on the single most recent session of the exercise:
    ///
    /// - fewer than two historical sessions at all: no suggestion
    ///   (insufficient data to judge a trend)
    /// - mean reps at or above the configured threshold with a non-zero
    ///   mean weight: suggest the mean weight scaled by the configured
    ///   factor, rounded to the configured increment
    /// - otherwise: no suggestion, either the current load is not yet
    ///   mastered or the entries are bodyweight placeholders that cannot
    ///   be scaled this way
    pub async fn suggest_progressive_overload(
        &self,
        user_id: Uuid,
        exercise_name: &str,
    ) -> AppResult<Option<OverloadSuggestion>> {
        let history = self
            .exercise_history(user_id, exercise_name, Some(self.config.suggestion_window))
            .await?;

        if history.len() < self.config.min_history_sessions {
            debug!(
                exercise = exercise_name,
                records = history.len(),
                "not enough history for a suggestion"
            );
            return Ok(None);
        }

        let Some(last_session) = history.first() else {
            return Ok(None);
        };
        let Some((avg_weight, avg_reps)) = session_averages(&last_session.sets) else {
            return Ok(None);
        };

        if avg_reps >= self.config.rep_target_threshold && avg_weight > 0.0 {
            let suggested_weight = round_to_increment(
                avg_weight * self.config.weight_increase_factor,
                self.config.weight_rounding_increment,
            );
            debug!(
                exercise = exercise_name,
                avg_reps, avg_weight, suggested_weight, "suggesting load increase"
            );
            return Ok(Some(OverloadSuggestion {
                suggested_weight,
                reason: format!(
                    "You averaged {avg_reps:.1} reps last session. Time to increase the load."
                ),
            }));
        }

        debug!(
            exercise = exercise_name,
            avg_reps, avg_weight, "rep target not met or load not scalable"
        );
        Ok(None)
    }
}
