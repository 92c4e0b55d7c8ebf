// ABOUTME: Template catalog reads and template-to-workout instantiation
// ABOUTME: Turns a WorkoutTemplate and its ordered exercises into a concrete logged Workout
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # Template Instantiation
//!
//! [`TemplateManager`] serves the template catalog and instantiates
//! templates into concrete workouts with placeholder sets. Instantiation
//! is the only writing operation in the core.

use std::sync::Arc;

use chrono::{NaiveDate, Utc};
use tracing::{debug, info};
use uuid::Uuid;

use crate::database::FitnessRepository;
use crate::errors::{AppError, AppResult};
use crate::models::{Difficulty, Exercise, SetEntry, TemplateExercise, Workout, WorkoutTemplate};

/// Template catalog and instantiation service
pub struct TemplateManager<R> {
    db: Arc<R>,
}

impl<R> TemplateManager<R> {
    /// Create a new manager over the given repository
    #[must_use]
    pub const fn new(db: Arc<R>) -> Self {
        Self { db }
    }
}

impl<R: FitnessRepository> TemplateManager<R> {
    /// List catalog templates, optionally filtered by difficulty and category
    pub async fn list_templates(
        &self,
        difficulty: Option<Difficulty>,
        category: Option<&str>,
    ) -> AppResult<Vec<WorkoutTemplate>> {
        Ok(self.db.get_workout_templates(difficulty, category).await?)
    }

    /// Get a template by ID
    ///
    /// # Errors
    ///
    /// Returns `NotFound` when the template does not exist.
    pub async fn get_template(&self, id: Uuid) -> AppResult<WorkoutTemplate> {
        self.db
            .get_workout_template(id)
            .await?
            .ok_or_else(|| AppError::not_found("Workout template").with_resource_id(id.to_string()))
    }

    /// Get a template's exercises, ordered by `order_index`
    pub async fn template_exercises(&self, template_id: Uuid) -> AppResult<Vec<TemplateExercise>> {
        Ok(self.db.get_template_exercises(template_id).await?)
    }

    /// Instantiate a template into a concrete workout for `user_id`
    ///
    /// Creates one workout named after the template (notes taken from the
    /// template description) and, per template exercise in order, one
    /// exercise with exactly `sets_count` placeholder sets. Placeholder
    /// sets carry the rep scheme's default target and zero weight; actual
    /// load is user-entered during the workout.
    ///
    /// `date` defaults to today when omitted.
    ///
    /// # Errors
    ///
    /// - `NotFound` when the template does not exist
    /// - `ValidationError` (before any write) when a template exercise
    ///   prescribes zero sets
    /// - `StorageError` from the repository; the two-write sequence is
    ///   only atomic if the backend overrides
    ///   [`FitnessRepository::create_workout_with_exercises`]
    pub async fn create_workout_from_template(
        &self,
        template_id: Uuid,
        user_id: Uuid,
        date: Option<NaiveDate>,
    ) -> AppResult<Workout> {
        let template = self.get_template(template_id).await?;
        let template_exercises = self.db.get_template_exercises(template_id).await?;

        for te in &template_exercises {
            if te.sets_count == 0 {
                return Err(AppError::invalid_input(format!(
                    "template exercise '{}' prescribes zero sets",
                    te.exercise_name
                ))
                .with_resource_id(te.id.to_string()));
            }
        }

        let date = date.unwrap_or_else(|| Utc::now().date_naive());
        let workout = Workout {
            id: Uuid::new_v4(),
            user_id,
            name: template.name.clone(),
            date,
            notes: template.description.clone(),
            created_at: Utc::now(),
        };

        let exercises: Vec<Exercise> = template_exercises
            .iter()
            .map(|te| {
                let placeholder = SetEntry {
                    reps: te.reps.default_reps(),
                    weight: 0.0,
                };
                Exercise {
                    id: Uuid::new_v4(),
                    workout_id: workout.id,
                    name: te.exercise_name.clone(),
                    sets: vec![placeholder; te.sets_count as usize],
                }
            })
            .collect();

        debug!(
            template_id = %template_id,
            exercise_count = exercises.len(),
            "instantiating template"
        );
        self.db
            .create_workout_with_exercises(&workout, &exercises)
            .await?;

        info!(
            workout_id = %workout.id,
            user_id = %user_id,
            template = %template.name,
            "created workout from template"
        );
        Ok(workout)
    }
}
