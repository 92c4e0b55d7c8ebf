// ABOUTME: Library root for the liftlog fitness-tracking core
// ABOUTME: Program scheduling, template instantiation, and progressive-overload engine
//
// SPDX-License-Identifier: MIT OR Apache-2.0

#![deny(unsafe_code)]

//! # Liftlog Core
//!
//! Scheduling and recommendation core for a personal fitness tracker:
//! users follow pre-built workout templates and multi-week programs, and
//! get progressive-overload suggestions from their logged history.
//!
//! Three services cover the non-trivial logic, all reading through one
//! async repository seam:
//!
//! - [`templates::TemplateManager`] instantiates a template into a
//!   concrete workout with placeholder sets
//! - [`programs::ProgramManager`] resolves a user's weekly schedule
//!   from their enrollment and tracks completion
//! - [`intelligence::ProgressionEngine`] proposes a next-session target
//!   weight from recent performance, or declines
//!
//! Transport, authentication, and persistence are external collaborators:
//! callers supply an authenticated user identifier per request, and any
//! [`database::FitnessRepository`] backend supplies storage.
//!
//! ```no_run
//! use std::sync::Arc;
//! use liftlog::database::{memory::MemoryRepository, seed};
//! use liftlog::templates::TemplateManager;
//!
//! # async fn demo() -> liftlog::errors::AppResult<()> {
//! let db = Arc::new(MemoryRepository::new());
//! let catalog = seed::seed_demo_catalog(db.as_ref()).await?;
//!
//! let templates = TemplateManager::new(Arc::clone(&db));
//! let user_id = uuid::Uuid::new_v4();
//! let workout = templates
//!     .create_workout_from_template(catalog.push_template_id, user_id, None)
//!     .await?;
//! # Ok(())
//! # }
//! ```

/// Unified error handling with `AppError`, `ErrorCode`, and `StorageError`
pub mod errors;

/// Core data models (workouts, templates, programs, enrollments)
pub mod models;

/// Application constants organized by domain
pub mod constants;

/// Environment-based runtime configuration
pub mod config;

/// Structured logging setup built on `tracing`
pub mod logging;

/// Repository abstraction and the in-memory reference backend
pub mod database;

/// Template catalog and template-to-workout instantiation
pub mod templates;

/// Program catalog, enrollment lifecycle, and weekly schedules
pub mod programs;

/// Derived training intelligence (progressive overload)
pub mod intelligence;

pub use errors::{AppError, AppResult, ErrorCode, StorageError};
pub use models::{
    CompletedWorkout, Difficulty, Exercise, ExerciseHistoryEntry, OverloadSuggestion, Program,
    ProgramStatus, ProgramWorkout, RepsSpec, ScheduledWorkout, SetEntry, TemplateExercise,
    UserProgram, Workout, WorkoutTemplate,
};
