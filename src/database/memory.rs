// ABOUTME: In-memory FitnessRepository implementation backed by dashmap
// ABOUTME: Reference backend for tests, demos, and embedding without a database
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! In-memory repository backend.
//!
//! Each logical table is a [`DashMap`]; collections owned by a parent row
//! (a workout's exercises, a program's slots) are keyed by the parent ID
//! so insertion order is preserved. Concurrent same-row updates are
//! last-write-wins, matching the reference storage model.

use std::collections::BTreeSet;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;
use dashmap::DashMap;
use uuid::Uuid;

use super::{FitnessRepository, UserProgramUpdate};
use crate::errors::StorageError;
use crate::models::{
    Difficulty, Exercise, ExerciseLibraryItem, HeartRateSession, Meal, Program, ProgramWorkout,
    SetEntry, TemplateExercise, UserPreferences, UserProgram, Workout, WorkoutTemplate,
};

/// In-memory [`FitnessRepository`] implementation
///
/// Cloning is cheap; clones share the same underlying store.
#[derive(Debug, Clone, Default)]
pub struct MemoryRepository {
    inner: Arc<Inner>,
}

#[derive(Debug, Default)]
struct Inner {
    library: DashMap<Uuid, ExerciseLibraryItem>,
    templates: DashMap<Uuid, WorkoutTemplate>,
    /// Template exercises keyed by owning template
    template_exercises: DashMap<Uuid, Vec<TemplateExercise>>,
    programs: DashMap<Uuid, Program>,
    /// Program slots keyed by owning program
    program_workouts: DashMap<Uuid, Vec<ProgramWorkout>>,
    workouts: DashMap<Uuid, Workout>,
    /// Logged exercises keyed by owning workout, in insertion order
    exercises: DashMap<Uuid, Vec<Exercise>>,
    user_programs: DashMap<Uuid, UserProgram>,
    meals: DashMap<Uuid, Meal>,
    /// Heart-rate sessions keyed by owning user
    heart_rate_sessions: DashMap<Uuid, Vec<HeartRateSession>>,
    /// Preferences keyed by owning user
    preferences: DashMap<Uuid, UserPreferences>,
}

impl MemoryRepository {
    /// Create an empty in-memory repository
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl FitnessRepository for MemoryRepository {
    // ================================
    // Exercise Library
    // ================================

    async fn create_exercise_library_item(
        &self,
        item: &ExerciseLibraryItem,
    ) -> Result<(), StorageError> {
        self.inner.library.insert(item.id, item.clone());
        Ok(())
    }

    async fn search_exercises(
        &self,
        query: Option<&str>,
        muscle_group: Option<&str>,
    ) -> Result<Vec<ExerciseLibraryItem>, StorageError> {
        let query = query.map(str::to_lowercase);
        let mut items: Vec<ExerciseLibraryItem> = self
            .inner
            .library
            .iter()
            .filter(|entry| {
                let item = entry.value();
                let name_matches = query
                    .as_deref()
                    .is_none_or(|q| item.name.to_lowercase().contains(q));
                let group_matches = muscle_group
                    .is_none_or(|g| item.muscle_group.eq_ignore_ascii_case(g));
                name_matches && group_matches
            })
            .map(|entry| entry.value().clone())
            .collect();
        items.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(items)
    }

    async fn get_exercise_by_id(
        &self,
        id: Uuid,
    ) -> Result<Option<ExerciseLibraryItem>, StorageError> {
        Ok(self.inner.library.get(&id).map(|entry| entry.value().clone()))
    }

    async fn get_muscle_groups(&self) -> Result<Vec<String>, StorageError> {
        let groups: BTreeSet<String> = self
            .inner
            .library
            .iter()
            .map(|entry| entry.value().muscle_group.clone())
            .collect();
        Ok(groups.into_iter().collect())
    }

    // ================================
    // Workout Templates
    // ================================

    async fn create_workout_template(
        &self,
        template: &WorkoutTemplate,
    ) -> Result<(), StorageError> {
        self.inner.templates.insert(template.id, template.clone());
        Ok(())
    }

    async fn create_template_exercise(
        &self,
        exercise: &TemplateExercise,
    ) -> Result<(), StorageError> {
        self.inner
            .template_exercises
            .entry(exercise.template_id)
            .or_default()
            .push(exercise.clone());
        Ok(())
    }

    async fn get_workout_templates(
        &self,
        difficulty: Option<Difficulty>,
        category: Option<&str>,
    ) -> Result<Vec<WorkoutTemplate>, StorageError> {
        let mut templates: Vec<WorkoutTemplate> = self
            .inner
            .templates
            .iter()
            .filter(|entry| {
                let template = entry.value();
                let difficulty_matches = difficulty.is_none_or(|d| template.difficulty == d);
                let category_matches = category.is_none_or(|c| {
                    template
                        .category
                        .as_deref()
                        .is_some_and(|tc| tc.eq_ignore_ascii_case(c))
                });
                difficulty_matches && category_matches
            })
            .map(|entry| entry.value().clone())
            .collect();
        templates.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(templates)
    }

    async fn get_workout_template(
        &self,
        id: Uuid,
    ) -> Result<Option<WorkoutTemplate>, StorageError> {
        Ok(self.inner.templates.get(&id).map(|entry| entry.value().clone()))
    }

    async fn get_template_exercises(
        &self,
        template_id: Uuid,
    ) -> Result<Vec<TemplateExercise>, StorageError> {
        let mut exercises = self
            .inner
            .template_exercises
            .get(&template_id)
            .map(|entry| entry.value().clone())
            .unwrap_or_default();
        exercises.sort_by_key(|e| e.order_index);
        Ok(exercises)
    }

    // ================================
    // Workouts & Exercises
    // ================================

    async fn create_workout(&self, workout: &Workout) -> Result<(), StorageError> {
        self.inner.workouts.insert(workout.id, workout.clone());
        Ok(())
    }

    async fn create_exercise(&self, exercise: &Exercise) -> Result<(), StorageError> {
        self.inner
            .exercises
            .entry(exercise.workout_id)
            .or_default()
            .push(exercise.clone());
        Ok(())
    }

    async fn get_workouts_by_user(
        &self,
        user_id: Uuid,
        limit: Option<usize>,
    ) -> Result<Vec<Workout>, StorageError> {
        let mut workouts: Vec<Workout> = self
            .inner
            .workouts
            .iter()
            .filter(|entry| entry.value().user_id == user_id)
            .map(|entry| entry.value().clone())
            .collect();
        workouts.sort_by(|a, b| {
            b.date
                .cmp(&a.date)
                .then_with(|| b.created_at.cmp(&a.created_at))
        });
        if let Some(limit) = limit {
            workouts.truncate(limit);
        }
        Ok(workouts)
    }

    async fn get_workout(&self, id: Uuid, user_id: Uuid) -> Result<Option<Workout>, StorageError> {
        Ok(self
            .inner
            .workouts
            .get(&id)
            .filter(|entry| entry.value().user_id == user_id)
            .map(|entry| entry.value().clone()))
    }

    async fn delete_workout(&self, id: Uuid, user_id: Uuid) -> Result<bool, StorageError> {
        let removed = self
            .inner
            .workouts
            .remove_if(&id, |_, workout| workout.user_id == user_id)
            .is_some();
        if removed {
            self.inner.exercises.remove(&id);
        }
        Ok(removed)
    }

    async fn get_exercises_by_workout(
        &self,
        workout_id: Uuid,
    ) -> Result<Vec<Exercise>, StorageError> {
        Ok(self
            .inner
            .exercises
            .get(&workout_id)
            .map(|entry| entry.value().clone())
            .unwrap_or_default())
    }

    async fn update_exercise_sets(
        &self,
        id: Uuid,
        sets: &[SetEntry],
    ) -> Result<Option<Exercise>, StorageError> {
        for mut entry in self.inner.exercises.iter_mut() {
            if let Some(exercise) = entry.value_mut().iter_mut().find(|e| e.id == id) {
                exercise.sets = sets.to_vec();
                return Ok(Some(exercise.clone()));
            }
        }
        Ok(None)
    }

    // ================================
    // Programs
    // ================================

    async fn create_program(&self, program: &Program) -> Result<(), StorageError> {
        self.inner.programs.insert(program.id, program.clone());
        Ok(())
    }

    async fn create_program_workout(&self, workout: &ProgramWorkout) -> Result<(), StorageError> {
        self.inner
            .program_workouts
            .entry(workout.program_id)
            .or_default()
            .push(workout.clone());
        Ok(())
    }

    async fn get_programs(
        &self,
        difficulty: Option<Difficulty>,
        goal: Option<&str>,
    ) -> Result<Vec<Program>, StorageError> {
        let mut programs: Vec<Program> = self
            .inner
            .programs
            .iter()
            .filter(|entry| {
                let program = entry.value();
                let difficulty_matches = difficulty.is_none_or(|d| program.difficulty == d);
                let goal_matches = goal.is_none_or(|g| {
                    program
                        .goal
                        .as_deref()
                        .is_some_and(|pg| pg.eq_ignore_ascii_case(g))
                });
                difficulty_matches && goal_matches
            })
            .map(|entry| entry.value().clone())
            .collect();
        programs.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(programs)
    }

    async fn get_program(&self, id: Uuid) -> Result<Option<Program>, StorageError> {
        Ok(self.inner.programs.get(&id).map(|entry| entry.value().clone()))
    }

    async fn get_program_workouts(
        &self,
        program_id: Uuid,
        week_number: u32,
    ) -> Result<Vec<ProgramWorkout>, StorageError> {
        let mut slots: Vec<ProgramWorkout> = self
            .inner
            .program_workouts
            .get(&program_id)
            .map(|entry| {
                entry
                    .value()
                    .iter()
                    .filter(|slot| slot.week_number == week_number)
                    .cloned()
                    .collect()
            })
            .unwrap_or_default();
        slots.sort_by_key(|slot| slot.day_number);
        Ok(slots)
    }

    async fn get_all_program_workouts(
        &self,
        program_id: Uuid,
    ) -> Result<Vec<ProgramWorkout>, StorageError> {
        let mut slots = self
            .inner
            .program_workouts
            .get(&program_id)
            .map(|entry| entry.value().clone())
            .unwrap_or_default();
        slots.sort_by_key(|slot| (slot.week_number, slot.day_number));
        Ok(slots)
    }

    // ================================
    // Program Enrollments
    // ================================

    async fn create_user_program(&self, enrollment: &UserProgram) -> Result<(), StorageError> {
        self.inner
            .user_programs
            .insert(enrollment.id, enrollment.clone());
        Ok(())
    }

    async fn get_user_program(&self, id: Uuid) -> Result<Option<UserProgram>, StorageError> {
        Ok(self
            .inner
            .user_programs
            .get(&id)
            .map(|entry| entry.value().clone()))
    }

    async fn get_user_programs(&self, user_id: Uuid) -> Result<Vec<UserProgram>, StorageError> {
        let mut enrollments: Vec<UserProgram> = self
            .inner
            .user_programs
            .iter()
            .filter(|entry| entry.value().user_id == user_id)
            .map(|entry| entry.value().clone())
            .collect();
        enrollments.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(enrollments)
    }

    async fn update_user_program(
        &self,
        id: Uuid,
        user_id: Uuid,
        update: &UserProgramUpdate,
    ) -> Result<Option<UserProgram>, StorageError> {
        let Some(mut entry) = self.inner.user_programs.get_mut(&id) else {
            return Ok(None);
        };
        if entry.value().user_id != user_id {
            return Ok(None);
        }
        let enrollment = entry.value_mut();
        if let Some(current_week) = update.current_week {
            enrollment.current_week = current_week;
        }
        if let Some(status) = update.status {
            enrollment.status = status;
        }
        if let Some(completed_workouts) = &update.completed_workouts {
            enrollment.completed_workouts = completed_workouts.clone();
        }
        Ok(Some(enrollment.clone()))
    }

    // ================================
    // Meals
    // ================================

    async fn create_meal(&self, meal: &Meal) -> Result<(), StorageError> {
        self.inner.meals.insert(meal.id, meal.clone());
        Ok(())
    }

    async fn get_meals(
        &self,
        user_id: Uuid,
        limit: Option<usize>,
    ) -> Result<Vec<Meal>, StorageError> {
        let mut meals: Vec<Meal> = self
            .inner
            .meals
            .iter()
            .filter(|entry| entry.value().user_id == user_id)
            .map(|entry| entry.value().clone())
            .collect();
        meals.sort_by(|a, b| b.date.cmp(&a.date));
        if let Some(limit) = limit {
            meals.truncate(limit);
        }
        Ok(meals)
    }

    async fn get_meals_by_date(
        &self,
        user_id: Uuid,
        date: NaiveDate,
    ) -> Result<Vec<Meal>, StorageError> {
        Ok(self
            .inner
            .meals
            .iter()
            .filter(|entry| {
                let meal = entry.value();
                meal.user_id == user_id && meal.date == date
            })
            .map(|entry| entry.value().clone())
            .collect())
    }

    async fn delete_meal(&self, id: Uuid, user_id: Uuid) -> Result<bool, StorageError> {
        Ok(self
            .inner
            .meals
            .remove_if(&id, |_, meal| meal.user_id == user_id)
            .is_some())
    }

    // ================================
    // Heart Rate Sessions
    // ================================

    async fn create_heart_rate_session(
        &self,
        session: &HeartRateSession,
    ) -> Result<(), StorageError> {
        self.inner
            .heart_rate_sessions
            .entry(session.user_id)
            .or_default()
            .push(session.clone());
        Ok(())
    }

    async fn get_heart_rate_sessions(
        &self,
        user_id: Uuid,
    ) -> Result<Vec<HeartRateSession>, StorageError> {
        let mut sessions = self
            .inner
            .heart_rate_sessions
            .get(&user_id)
            .map(|entry| entry.value().clone())
            .unwrap_or_default();
        sessions.sort_by(|a, b| b.date.cmp(&a.date));
        Ok(sessions)
    }

    // ================================
    // User Preferences
    // ================================

    async fn get_user_preferences(
        &self,
        user_id: Uuid,
    ) -> Result<Option<UserPreferences>, StorageError> {
        Ok(self
            .inner
            .preferences
            .get(&user_id)
            .map(|entry| entry.value().clone()))
    }

    async fn upsert_user_preferences(&self, prefs: &UserPreferences) -> Result<(), StorageError> {
        self.inner.preferences.insert(prefs.user_id, prefs.clone());
        Ok(())
    }
}
