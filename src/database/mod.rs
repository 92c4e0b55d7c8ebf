// ABOUTME: Repository abstraction for the liftlog core
// ABOUTME: Async trait over workouts, templates, programs, enrollments, and nutrition plumbing
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # Repository Abstraction
//!
//! The core services derive everything from fresh reads against this seam
//! and hold no in-process shared state. Backends implement
//! [`FitnessRepository`]; an in-memory reference implementation lives in
//! [`memory`] and a demo-catalog loader in [`seed`].
//!
//! Ownership checks are the repository layer's job: every read or mutation
//! of a user-owned row takes the caller's identity and must match it
//! against the row's `user_id`. Failures surface as absent rows, never as
//! a distinct error, so callers cannot probe for other users' data.

use async_trait::async_trait;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::StorageError;
use crate::models::{
    CompletedWorkout, Difficulty, Exercise, ExerciseLibraryItem, HeartRateSession, Meal, Program,
    ProgramStatus, ProgramWorkout, SetEntry, TemplateExercise, UserPreferences, UserProgram,
    Workout, WorkoutTemplate,
};

pub mod memory;
pub mod seed;

/// Partial update applied to a user's program enrollment
///
/// Unset fields are left untouched. `completed_workouts` replaces the log
/// wholesale; append semantics are the service layer's concern.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserProgramUpdate {
    /// New current week, 1-based
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_week: Option<u32>,
    /// New enrollment status
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ProgramStatus>,
    /// Replacement completed-workout log
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed_workouts: Option<Vec<CompletedWorkout>>,
}

/// Core repository abstraction trait
///
/// All persistence backends implement this trait to provide a consistent
/// interface for the service layer. Reads that scope by user return only
/// rows owned by that user; identity-scoped mutations are no-ops (reported
/// as absent rows) when the row exists but belongs to someone else.
#[async_trait]
pub trait FitnessRepository: Send + Sync + Clone {
    // ================================
    // Exercise Library (global reference data)
    // ================================

    /// Add an entry to the exercise library
    async fn create_exercise_library_item(
        &self,
        item: &ExerciseLibraryItem,
    ) -> Result<(), StorageError>;

    /// Search the library by name substring and/or muscle group
    async fn search_exercises(
        &self,
        query: Option<&str>,
        muscle_group: Option<&str>,
    ) -> Result<Vec<ExerciseLibraryItem>, StorageError>;

    /// Get a library entry by ID
    async fn get_exercise_by_id(
        &self,
        id: Uuid,
    ) -> Result<Option<ExerciseLibraryItem>, StorageError>;

    /// Distinct muscle groups present in the library, sorted
    async fn get_muscle_groups(&self) -> Result<Vec<String>, StorageError>;

    // ================================
    // Workout Templates (global reference data)
    // ================================

    /// Add a workout template to the catalog
    async fn create_workout_template(&self, template: &WorkoutTemplate)
        -> Result<(), StorageError>;

    /// Add an ordered exercise to a template
    async fn create_template_exercise(
        &self,
        exercise: &TemplateExercise,
    ) -> Result<(), StorageError>;

    /// List templates, optionally filtered by difficulty and category
    async fn get_workout_templates(
        &self,
        difficulty: Option<Difficulty>,
        category: Option<&str>,
    ) -> Result<Vec<WorkoutTemplate>, StorageError>;

    /// Get a template by ID
    async fn get_workout_template(
        &self,
        id: Uuid,
    ) -> Result<Option<WorkoutTemplate>, StorageError>;

    /// Get a template's exercises, ordered by `order_index` ascending
    async fn get_template_exercises(
        &self,
        template_id: Uuid,
    ) -> Result<Vec<TemplateExercise>, StorageError>;

    // ================================
    // Workouts & Exercises (user-owned)
    // ================================

    /// Persist a new workout
    async fn create_workout(&self, workout: &Workout) -> Result<(), StorageError>;

    /// Persist a new exercise under an existing workout
    async fn create_exercise(&self, exercise: &Exercise) -> Result<(), StorageError>;

    /// Persist a workout and its exercises as one logical unit
    ///
    /// The default implementation issues the writes sequentially (workout
    /// first), so an interruption can leave an orphaned workout with no
    /// exercises; that is a recoverable anomaly, not corruption, since
    /// exercises can be added later. Backends with transactions SHOULD
    /// override this with an atomic implementation.
    async fn create_workout_with_exercises(
        &self,
        workout: &Workout,
        exercises: &[Exercise],
    ) -> Result<(), StorageError> {
        self.create_workout(workout).await?;
        for exercise in exercises {
            self.create_exercise(exercise).await?;
        }
        Ok(())
    }

    /// Get a user's workouts, newest first, optionally capped at `limit`
    async fn get_workouts_by_user(
        &self,
        user_id: Uuid,
        limit: Option<usize>,
    ) -> Result<Vec<Workout>, StorageError>;

    /// Get a workout by ID, scoped to the owning user
    async fn get_workout(&self, id: Uuid, user_id: Uuid) -> Result<Option<Workout>, StorageError>;

    /// Delete a workout and its exercises, scoped to the owning user
    ///
    /// Returns `false` when no owned row matched.
    async fn delete_workout(&self, id: Uuid, user_id: Uuid) -> Result<bool, StorageError>;

    /// Get a workout's exercises in the order they were logged
    async fn get_exercises_by_workout(
        &self,
        workout_id: Uuid,
    ) -> Result<Vec<Exercise>, StorageError>;

    /// Replace an exercise's logged sets (the user filling in actual loads)
    async fn update_exercise_sets(
        &self,
        id: Uuid,
        sets: &[SetEntry],
    ) -> Result<Option<Exercise>, StorageError>;

    // ================================
    // Programs (global reference data)
    // ================================

    /// Add a program to the catalog
    async fn create_program(&self, program: &Program) -> Result<(), StorageError>;

    /// Add a scheduled slot to a program
    async fn create_program_workout(&self, workout: &ProgramWorkout) -> Result<(), StorageError>;

    /// List programs, optionally filtered by difficulty and goal
    async fn get_programs(
        &self,
        difficulty: Option<Difficulty>,
        goal: Option<&str>,
    ) -> Result<Vec<Program>, StorageError>;

    /// Get a program by ID
    async fn get_program(&self, id: Uuid) -> Result<Option<Program>, StorageError>;

    /// Get one week's slots for a program, ordered by `day_number` ascending
    async fn get_program_workouts(
        &self,
        program_id: Uuid,
        week_number: u32,
    ) -> Result<Vec<ProgramWorkout>, StorageError>;

    /// Get every slot for a program, ordered by week then day
    async fn get_all_program_workouts(
        &self,
        program_id: Uuid,
    ) -> Result<Vec<ProgramWorkout>, StorageError>;

    // ================================
    // Program Enrollments (user-owned)
    // ================================

    /// Persist a new enrollment
    async fn create_user_program(&self, enrollment: &UserProgram) -> Result<(), StorageError>;

    /// Get an enrollment by ID
    async fn get_user_program(&self, id: Uuid) -> Result<Option<UserProgram>, StorageError>;

    /// Get a user's enrollments, newest first
    async fn get_user_programs(&self, user_id: Uuid) -> Result<Vec<UserProgram>, StorageError>;

    /// Apply a partial update to an enrollment, scoped to the owning user
    ///
    /// Returns the updated row, or `None` when no owned row matched.
    async fn update_user_program(
        &self,
        id: Uuid,
        user_id: Uuid,
        update: &UserProgramUpdate,
    ) -> Result<Option<UserProgram>, StorageError>;

    // ================================
    // Meals (user-owned plumbing)
    // ================================

    /// Persist a new meal
    async fn create_meal(&self, meal: &Meal) -> Result<(), StorageError>;

    /// Get a user's meals, newest first, optionally capped at `limit`
    async fn get_meals(
        &self,
        user_id: Uuid,
        limit: Option<usize>,
    ) -> Result<Vec<Meal>, StorageError>;

    /// Get a user's meals for one calendar date
    async fn get_meals_by_date(
        &self,
        user_id: Uuid,
        date: NaiveDate,
    ) -> Result<Vec<Meal>, StorageError>;

    /// Delete a meal, scoped to the owning user
    async fn delete_meal(&self, id: Uuid, user_id: Uuid) -> Result<bool, StorageError>;

    // ================================
    // Heart Rate Sessions (user-owned plumbing)
    // ================================

    /// Persist a new heart-rate session
    async fn create_heart_rate_session(
        &self,
        session: &HeartRateSession,
    ) -> Result<(), StorageError>;

    /// Get a user's heart-rate sessions, newest first
    async fn get_heart_rate_sessions(
        &self,
        user_id: Uuid,
    ) -> Result<Vec<HeartRateSession>, StorageError>;

    // ================================
    // User Preferences
    // ================================

    /// Get a user's preferences
    async fn get_user_preferences(
        &self,
        user_id: Uuid,
    ) -> Result<Option<UserPreferences>, StorageError>;

    /// Create or replace a user's preferences
    async fn upsert_user_preferences(&self, prefs: &UserPreferences) -> Result<(), StorageError>;
}
