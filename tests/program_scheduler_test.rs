// ABOUTME: Integration tests for program enrollment and weekly schedule resolution
// ABOUTME: Verifies slot ordering, completion marking, tolerance, and ownership scoping
//
// SPDX-License-Identifier: MIT OR Apache-2.0

#![allow(clippy::unwrap_used, clippy::expect_used)]
#![allow(missing_docs)]

mod common;

use std::sync::Arc;

use uuid::Uuid;

use liftlog::database::{FitnessRepository, UserProgramUpdate};
use liftlog::errors::ErrorCode;
use liftlog::models::{Difficulty, Program, ProgramStatus, ProgramWorkout};
use liftlog::programs::ProgramManager;

use common::{date, seeded_db};

/// Insert a bare program with no slots
async fn insert_program(db: &liftlog::database::memory::MemoryRepository) -> Uuid {
    let program = Program {
        id: Uuid::new_v4(),
        name: "Test Split".to_owned(),
        description: None,
        difficulty: Difficulty::Intermediate,
        duration_weeks: 4,
        days_per_week: 3,
        goal: None,
    };
    db.create_program(&program).await.unwrap();
    program.id
}

async fn insert_slot(
    db: &liftlog::database::memory::MemoryRepository,
    program_id: Uuid,
    template_id: Uuid,
    week_number: u32,
    day_number: u32,
) {
    db.create_program_workout(&ProgramWorkout {
        id: Uuid::new_v4(),
        program_id,
        template_id,
        week_number,
        day_number,
        day_name: None,
    })
    .await
    .unwrap();
}

#[tokio::test]
async fn schedule_is_ordered_by_day_with_completion_marked() {
    let (db, catalog) = seeded_db().await;
    let program_id = insert_program(&db).await;
    // inserted out of order on purpose
    insert_slot(&db, program_id, catalog.push_template_id, 2, 3).await;
    insert_slot(&db, program_id, catalog.pull_template_id, 2, 1).await;
    insert_slot(&db, program_id, catalog.legs_template_id, 2, 2).await;

    let manager = ProgramManager::new(Arc::clone(&db));
    let user_id = Uuid::new_v4();
    let enrollment = manager
        .enroll(user_id, program_id, date(2025, 1, 6))
        .await
        .unwrap();

    manager
        .record_completion(enrollment.id, user_id, 2, 1, Uuid::new_v4(), date(2025, 1, 13))
        .await
        .unwrap();

    let schedule = manager
        .get_scheduled_workouts(enrollment.id, 2)
        .await
        .unwrap();

    let days: Vec<u32> = schedule.iter().map(|s| s.slot.day_number).collect();
    assert_eq!(days, [1, 2, 3]);
    let completed: Vec<bool> = schedule.iter().map(|s| s.is_completed).collect();
    assert_eq!(completed, [true, false, false]);
    // each slot carries its joined template
    assert_eq!(schedule[0].template.name, "Pull Day");
    assert_eq!(schedule[2].template.name, "Push Day");
}

#[tokio::test]
async fn slot_with_missing_template_is_skipped_not_raised() {
    let (db, catalog) = seeded_db().await;
    let program_id = insert_program(&db).await;
    insert_slot(&db, program_id, catalog.push_template_id, 1, 1).await;
    insert_slot(&db, program_id, Uuid::new_v4(), 1, 2).await; // deleted template

    let manager = ProgramManager::new(Arc::clone(&db));
    let user_id = Uuid::new_v4();
    let enrollment = manager
        .enroll(user_id, program_id, date(2025, 1, 6))
        .await
        .unwrap();

    let schedule = manager
        .get_scheduled_workouts(enrollment.id, 1)
        .await
        .unwrap();
    assert_eq!(schedule.len(), 1);
    assert_eq!(schedule[0].slot.day_number, 1);
}

#[tokio::test]
async fn missing_enrollment_yields_empty_schedule() {
    let (db, _catalog) = seeded_db().await;
    let manager = ProgramManager::new(Arc::clone(&db));

    let schedule = manager
        .get_scheduled_workouts(Uuid::new_v4(), 1)
        .await
        .unwrap();
    assert!(schedule.is_empty());
}

#[tokio::test]
async fn enrollment_starts_at_week_one_and_pauses_prior_active() {
    let (db, catalog) = seeded_db().await;
    let manager = ProgramManager::new(Arc::clone(&db));
    let user_id = Uuid::new_v4();

    let first = manager
        .enroll(user_id, catalog.program_id, date(2025, 1, 6))
        .await
        .unwrap();
    assert_eq!(first.current_week, 1);
    assert!(first.completed_workouts.is_empty());
    assert_eq!(first.status, ProgramStatus::Active);

    let second_program = insert_program(&db).await;
    let second = manager
        .enroll(user_id, second_program, date(2025, 2, 3))
        .await
        .unwrap();
    assert_eq!(second.status, ProgramStatus::Active);

    let enrollments = manager.user_programs(user_id).await.unwrap();
    let first_again = enrollments.iter().find(|e| e.id == first.id).unwrap();
    assert_eq!(first_again.status, ProgramStatus::Paused);
}

#[tokio::test]
async fn enrolling_in_unknown_program_fails() {
    let (db, _catalog) = seeded_db().await;
    let manager = ProgramManager::new(Arc::clone(&db));

    let error = manager
        .enroll(Uuid::new_v4(), Uuid::new_v4(), date(2025, 1, 6))
        .await
        .unwrap_err();
    assert_eq!(error.code, ErrorCode::ResourceNotFound);
}

#[tokio::test]
async fn updates_are_scoped_to_the_owning_user() {
    let (db, catalog) = seeded_db().await;
    let manager = ProgramManager::new(Arc::clone(&db));
    let owner = Uuid::new_v4();
    let enrollment = manager
        .enroll(owner, catalog.program_id, date(2025, 1, 6))
        .await
        .unwrap();

    // another user cannot tell this enrollment apart from a missing one
    let error = manager
        .update_user_program(
            enrollment.id,
            Uuid::new_v4(),
            &UserProgramUpdate {
                current_week: Some(2),
                ..UserProgramUpdate::default()
            },
        )
        .await
        .unwrap_err();
    assert_eq!(error.code, ErrorCode::ResourceNotFound);

    let updated = manager
        .update_user_program(
            enrollment.id,
            owner,
            &UserProgramUpdate {
                current_week: Some(2),
                ..UserProgramUpdate::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.current_week, 2);
}

#[tokio::test]
async fn zero_week_patch_is_rejected() {
    let (db, catalog) = seeded_db().await;
    let manager = ProgramManager::new(Arc::clone(&db));
    let user_id = Uuid::new_v4();
    let enrollment = manager
        .enroll(user_id, catalog.program_id, date(2025, 1, 6))
        .await
        .unwrap();

    let error = manager
        .update_user_program(
            enrollment.id,
            user_id,
            &UserProgramUpdate {
                current_week: Some(0),
                ..UserProgramUpdate::default()
            },
        )
        .await
        .unwrap_err();
    assert_eq!(error.code, ErrorCode::InvalidInput);
}

#[tokio::test]
async fn completion_marking_is_idempotent() {
    let (db, catalog) = seeded_db().await;
    let manager = ProgramManager::new(Arc::clone(&db));
    let user_id = Uuid::new_v4();
    let enrollment = manager
        .enroll(user_id, catalog.program_id, date(2025, 1, 6))
        .await
        .unwrap();

    let workout_id = Uuid::new_v4();
    manager
        .record_completion(enrollment.id, user_id, 1, 1, workout_id, date(2025, 1, 6))
        .await
        .unwrap();
    let after_repeat = manager
        .record_completion(enrollment.id, user_id, 1, 1, workout_id, date(2025, 1, 7))
        .await
        .unwrap();

    assert_eq!(after_repeat.completed_workouts.len(), 1);

    let schedule = manager
        .get_scheduled_workouts(enrollment.id, 1)
        .await
        .unwrap();
    let completed_count = schedule.iter().filter(|s| s.is_completed).count();
    assert_eq!(completed_count, 1);
}

#[tokio::test]
async fn completion_rejects_zero_based_coordinates() {
    let (db, catalog) = seeded_db().await;
    let manager = ProgramManager::new(Arc::clone(&db));
    let user_id = Uuid::new_v4();
    let enrollment = manager
        .enroll(user_id, catalog.program_id, date(2025, 1, 6))
        .await
        .unwrap();

    let error = manager
        .record_completion(enrollment.id, user_id, 0, 1, Uuid::new_v4(), date(2025, 1, 6))
        .await
        .unwrap_err();
    assert_eq!(error.code, ErrorCode::InvalidInput);
}

#[tokio::test]
async fn seeded_program_schedule_spans_all_weeks() {
    let (db, catalog) = seeded_db().await;
    let manager = ProgramManager::new(Arc::clone(&db));

    let slots = manager.program_schedule(catalog.program_id).await.unwrap();
    assert_eq!(slots.len(), 12); // 4 weeks x 3 days
    assert!(slots.windows(2).all(|pair| {
        (pair[0].week_number, pair[0].day_number) <= (pair[1].week_number, pair[1].day_number)
    }));
}
