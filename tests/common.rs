// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides repository setup, catalog seeding, and session logging helpers
//
// SPDX-License-Identifier: MIT OR Apache-2.0

#![allow(dead_code, clippy::unwrap_used, clippy::expect_used, clippy::missing_panics_doc)]
#![allow(missing_docs)]

//! Shared test utilities for `liftlog` integration tests.

use std::sync::{Arc, Once};

use chrono::{NaiveDate, Utc};
use uuid::Uuid;

use liftlog::database::memory::MemoryRepository;
use liftlog::database::seed::{seed_demo_catalog, SeededCatalog};
use liftlog::database::FitnessRepository;
use liftlog::models::{Exercise, SetEntry, Workout};

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::WARN)
            .with_test_writer()
            .init();
    });
}

/// Standard empty test repository
pub fn test_db() -> Arc<MemoryRepository> {
    init_test_logging();
    Arc::new(MemoryRepository::new())
}

/// Test repository preloaded with the demo catalog
pub async fn seeded_db() -> (Arc<MemoryRepository>, SeededCatalog) {
    let db = test_db();
    let catalog = seed_demo_catalog(db.as_ref()).await.unwrap();
    (db, catalog)
}

/// Shorthand calendar date constructor
pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

/// Log a workout containing one exercise with the given `(reps, weight)` sets
pub async fn log_session(
    db: &MemoryRepository,
    user_id: Uuid,
    workout_name: &str,
    exercise_name: &str,
    session_date: NaiveDate,
    sets: &[(u32, f64)],
) -> Uuid {
    let workout = Workout {
        id: Uuid::new_v4(),
        user_id,
        name: workout_name.to_owned(),
        date: session_date,
        notes: None,
        created_at: Utc::now(),
    };
    db.create_workout(&workout).await.unwrap();

    let exercise = Exercise {
        id: Uuid::new_v4(),
        workout_id: workout.id,
        name: exercise_name.to_owned(),
        sets: sets
            .iter()
            .map(|&(reps, weight)| SetEntry { reps, weight })
            .collect(),
    };
    db.create_exercise(&exercise).await.unwrap();
    workout.id
}
