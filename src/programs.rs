// ABOUTME: Program catalog, enrollment lifecycle, and weekly schedule resolution
// ABOUTME: Joins program slots with templates and marks completion against the enrollment log
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # Program Scheduling
//!
//! [`ProgramManager`] resolves a user's weekly schedule from their program
//! enrollment and tracks progress through it. Schedule resolution is
//! read-only and derives everything from fresh repository reads, so it is
//! safe to call repeatedly and concurrently.

use std::sync::Arc;

use chrono::{NaiveDate, Utc};
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::database::{FitnessRepository, UserProgramUpdate};
use crate::errors::{AppError, AppResult};
use crate::models::{
    CompletedWorkout, Difficulty, Program, ProgramStatus, ProgramWorkout, ScheduledWorkout,
    UserProgram,
};

/// Program catalog and enrollment service
pub struct ProgramManager<R> {
    db: Arc<R>,
}

impl<R> ProgramManager<R> {
    /// Create a new manager over the given repository
    #[must_use]
    pub const fn new(db: Arc<R>) -> Self {
        Self { db }
    }
}

impl<R: FitnessRepository> ProgramManager<R> {
    /// List catalog programs, optionally filtered by difficulty and goal
    pub async fn list_programs(
        &self,
        difficulty: Option<Difficulty>,
        goal: Option<&str>,
    ) -> AppResult<Vec<Program>> {
        Ok(self.db.get_programs(difficulty, goal).await?)
    }

    /// Get a program by ID
    ///
    /// # Errors
    ///
    /// Returns `NotFound` when the program does not exist.
    pub async fn get_program(&self, id: Uuid) -> AppResult<Program> {
        self.db
            .get_program(id)
            .await?
            .ok_or_else(|| AppError::not_found("Program").with_resource_id(id.to_string()))
    }

    /// Get every scheduled slot of a program, ordered by week then day
    pub async fn program_schedule(&self, program_id: Uuid) -> AppResult<Vec<ProgramWorkout>> {
        Ok(self.db.get_all_program_workouts(program_id).await?)
    }

    /// Get a user's enrollments, newest first
    pub async fn user_programs(&self, user_id: Uuid) -> AppResult<Vec<UserProgram>> {
        Ok(self.db.get_user_programs(user_id).await?)
    }

    /// Enroll `user_id` in a program
    ///
    /// The enrollment starts at week 1 with an empty completion log and
    /// active status. A user follows one program at a time: any of their
    /// existing active enrollments are transitioned to paused first. The
    /// pause-then-create sequence is not atomic; an interruption can leave
    /// the user with every enrollment paused, which the next enroll or a
    /// manual status update repairs.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` when the program does not exist.
    pub async fn enroll(
        &self,
        user_id: Uuid,
        program_id: Uuid,
        start_date: NaiveDate,
    ) -> AppResult<UserProgram> {
        let program = self.get_program(program_id).await?;

        for existing in self.db.get_user_programs(user_id).await? {
            if existing.status == ProgramStatus::Active {
                info!(
                    user_id = %user_id,
                    enrollment_id = %existing.id,
                    "pausing prior active enrollment"
                );
                self.db
                    .update_user_program(
                        existing.id,
                        user_id,
                        &UserProgramUpdate {
                            status: Some(ProgramStatus::Paused),
                            ..UserProgramUpdate::default()
                        },
                    )
                    .await?;
            }
        }

        let enrollment = UserProgram {
            id: Uuid::new_v4(),
            user_id,
            program_id,
            start_date,
            current_week: 1,
            completed_workouts: Vec::new(),
            status: ProgramStatus::Active,
            created_at: Utc::now(),
        };
        self.db.create_user_program(&enrollment).await?;

        info!(
            user_id = %user_id,
            program = %program.name,
            enrollment_id = %enrollment.id,
            "enrolled in program"
        );
        Ok(enrollment)
    }

    /// Resolve the ordered weekly schedule for an enrollment
    ///
    /// Returns the week's slots ascending by `day_number`, each joined
    /// with its template and marked completed when the enrollment log
    /// contains the slot's `(week, day)` pair. A missing enrollment yields
    /// an empty list (nothing scheduled, not an error); a slot whose
    /// template has been deleted is skipped rather than failing the call.
    pub async fn get_scheduled_workouts(
        &self,
        user_program_id: Uuid,
        week_number: u32,
    ) -> AppResult<Vec<ScheduledWorkout>> {
        let Some(enrollment) = self.db.get_user_program(user_program_id).await? else {
            debug!(user_program_id = %user_program_id, "enrollment not found, empty schedule");
            return Ok(Vec::new());
        };

        let mut slots = self
            .db
            .get_program_workouts(enrollment.program_id, week_number)
            .await?;
        slots.sort_by_key(|slot| slot.day_number);

        let mut scheduled = Vec::with_capacity(slots.len());
        for slot in slots {
            let Some(template) = self.db.get_workout_template(slot.template_id).await? else {
                warn!(
                    program_id = %enrollment.program_id,
                    template_id = %slot.template_id,
                    week_number,
                    day_number = slot.day_number,
                    "scheduled slot references a missing template, skipping"
                );
                continue;
            };
            let is_completed = enrollment.has_completed(slot.week_number, slot.day_number);
            scheduled.push(ScheduledWorkout {
                slot,
                is_completed,
                template,
            });
        }
        Ok(scheduled)
    }

    /// Apply a partial update to an enrollment, scoped to the owning user
    ///
    /// # Errors
    ///
    /// - `ValidationError` when the patch sets `current_week` to zero
    ///   (weeks are 1-based)
    /// - `NotFound` when the enrollment does not exist or belongs to
    ///   another user
    pub async fn update_user_program(
        &self,
        id: Uuid,
        user_id: Uuid,
        update: &UserProgramUpdate,
    ) -> AppResult<UserProgram> {
        if update.current_week == Some(0) {
            return Err(AppError::invalid_input("current_week is 1-based"));
        }
        self.db
            .update_user_program(id, user_id, update)
            .await?
            .ok_or_else(|| {
                AppError::not_found("User program")
                    .with_user_id(user_id)
                    .with_resource_id(id.to_string())
            })
    }

    /// Record completion of a scheduled slot in the enrollment log
    ///
    /// Completion is idempotent: recording the same `(week, day)` pair
    /// again leaves the log unchanged.
    ///
    /// # Errors
    ///
    /// - `ValidationError` when week or day is zero (both are 1-based)
    /// - `NotFound` when the enrollment does not exist or belongs to
    ///   another user
    pub async fn record_completion(
        &self,
        user_program_id: Uuid,
        user_id: Uuid,
        week_number: u32,
        day_number: u32,
        workout_id: Uuid,
        completed_date: NaiveDate,
    ) -> AppResult<UserProgram> {
        if week_number == 0 || day_number == 0 {
            return Err(AppError::invalid_input(
                "week_number and day_number are 1-based",
            ));
        }

        let enrollment = self
            .db
            .get_user_program(user_program_id)
            .await?
            .filter(|e| e.user_id == user_id)
            .ok_or_else(|| {
                AppError::not_found("User program")
                    .with_user_id(user_id)
                    .with_resource_id(user_program_id.to_string())
            })?;

        if enrollment.has_completed(week_number, day_number) {
            debug!(
                enrollment_id = %enrollment.id,
                week_number,
                day_number,
                "slot already completed, log unchanged"
            );
            return Ok(enrollment);
        }

        let mut completed_workouts = enrollment.completed_workouts;
        completed_workouts.push(CompletedWorkout {
            week_number,
            day_number,
            workout_id,
            completed_date,
        });

        let updated = self
            .db
            .update_user_program(
                user_program_id,
                user_id,
                &UserProgramUpdate {
                    completed_workouts: Some(completed_workouts),
                    ..UserProgramUpdate::default()
                },
            )
            .await?
            .ok_or_else(|| {
                AppError::not_found("User program").with_resource_id(user_program_id.to_string())
            })?;

        info!(
            enrollment_id = %updated.id,
            week_number,
            day_number,
            workout_id = %workout_id,
            "recorded workout completion"
        );
        Ok(updated)
    }
}
