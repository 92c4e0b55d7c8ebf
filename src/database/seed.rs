// ABOUTME: Demo catalog seeding for any FitnessRepository backend
// ABOUTME: Loads a small exercise library, push/pull/legs templates, and a multi-week program
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Demo catalog seeding.
//!
//! Populates a repository with reference data for demos and tests: a small
//! exercise library, three workout templates, and one multi-week program
//! scheduling them. Returns the created IDs so callers can address the
//! catalog directly.

use tracing::info;
use uuid::Uuid;

use super::FitnessRepository;
use crate::errors::StorageError;
use crate::models::{
    Difficulty, ExerciseLibraryItem, Program, ProgramWorkout, RepsSpec, TemplateExercise,
    WorkoutTemplate,
};

/// IDs of the catalog rows created by [`seed_demo_catalog`]
#[derive(Debug, Clone)]
pub struct SeededCatalog {
    /// "Push Day" template
    pub push_template_id: Uuid,
    /// "Pull Day" template
    pub pull_template_id: Uuid,
    /// "Leg Day" template
    pub legs_template_id: Uuid,
    /// The push/pull/legs program
    pub program_id: Uuid,
}

struct TemplateSpec<'a> {
    name: &'a str,
    description: &'a str,
    duration_minutes: u32,
    exercises: &'a [(&'a str, u32, &'a str, u32)],
}

/// Populate `db` with the demo exercise library, templates, and program
///
/// # Errors
///
/// Propagates any [`StorageError`] from the repository.
pub async fn seed_demo_catalog<R: FitnessRepository>(db: &R) -> Result<SeededCatalog, StorageError> {
    let library: &[(&str, &str, &str)] = &[
        ("Barbell Bench Press", "Chest", "Barbell"),
        ("Incline Dumbbell Press", "Chest", "Dumbbells"),
        ("Overhead Press", "Shoulders", "Barbell"),
        ("Lateral Raise", "Shoulders", "Dumbbells"),
        ("Tricep Pushdown", "Arms", "Cable"),
        ("Deadlift", "Back", "Barbell"),
        ("Pull-Ups", "Back", "Bodyweight"),
        ("Barbell Row", "Back", "Barbell"),
        ("Barbell Curl", "Arms", "Barbell"),
        ("Barbell Squat", "Legs", "Barbell"),
        ("Romanian Deadlift", "Legs", "Barbell"),
        ("Leg Curl", "Legs", "Machine"),
        ("Calf Raise", "Legs", "Machine"),
    ];

    let mut library_ids = Vec::with_capacity(library.len());
    for (name, muscle_group, equipment) in library {
        let item = ExerciseLibraryItem {
            id: Uuid::new_v4(),
            name: (*name).to_owned(),
            muscle_group: (*muscle_group).to_owned(),
            equipment: Some((*equipment).to_owned()),
            instructions: None,
        };
        db.create_exercise_library_item(&item).await?;
        library_ids.push((*name, item.id));
    }
    let library_id = |name: &str| library_ids.iter().find(|(n, _)| *n == name).map(|(_, id)| *id);

    // (exercise name, sets, reps, rest seconds)
    let templates = [
        TemplateSpec {
            name: "Push Day",
            description: "Chest, shoulders, and triceps",
            duration_minutes: 60,
            exercises: &[
                ("Barbell Bench Press", 4, "6-8", 180),
                ("Incline Dumbbell Press", 3, "8-10", 120),
                ("Overhead Press", 3, "8-10", 120),
                ("Lateral Raise", 3, "12-15", 60),
                ("Tricep Pushdown", 3, "12-15", 60),
            ],
        },
        TemplateSpec {
            name: "Pull Day",
            description: "Back and biceps",
            duration_minutes: 60,
            exercises: &[
                ("Deadlift", 4, "5-6", 180),
                ("Pull-Ups", 3, "AMRAP", 120),
                ("Barbell Row", 3, "8-10", 120),
                ("Barbell Curl", 3, "10-12", 60),
            ],
        },
        TemplateSpec {
            name: "Leg Day",
            description: "Quads, hamstrings, and calves",
            duration_minutes: 65,
            exercises: &[
                ("Barbell Squat", 4, "6-8", 180),
                ("Romanian Deadlift", 3, "8-10", 120),
                ("Leg Curl", 3, "12-15", 60),
                ("Calf Raise", 4, "15-20", 60),
            ],
        },
    ];

    let mut template_ids = Vec::with_capacity(templates.len());
    for spec in &templates {
        let template = WorkoutTemplate {
            id: Uuid::new_v4(),
            name: spec.name.to_owned(),
            description: Some(spec.description.to_owned()),
            difficulty: Difficulty::Intermediate,
            duration_minutes: spec.duration_minutes,
            category: Some("hypertrophy".to_owned()),
        };
        db.create_workout_template(&template).await?;

        for (index, (exercise_name, sets_count, reps, rest_seconds)) in
            spec.exercises.iter().enumerate()
        {
            let exercise = TemplateExercise {
                id: Uuid::new_v4(),
                template_id: template.id,
                exercise_library_id: library_id(exercise_name),
                exercise_name: (*exercise_name).to_owned(),
                order_index: u32::try_from(index).unwrap_or(u32::MAX).saturating_add(1),
                sets_count: *sets_count,
                reps: RepsSpec::parse_lossy(reps),
                rest_seconds: Some(*rest_seconds),
                notes: None,
            };
            db.create_template_exercise(&exercise).await?;
        }
        template_ids.push(template.id);
    }
    let [push_template_id, pull_template_id, legs_template_id] = template_ids[..] else {
        return Err(StorageError::Corrupt {
            entity: "workout_template",
            reason: "seed produced an unexpected template count".to_owned(),
        });
    };

    let program = Program {
        id: Uuid::new_v4(),
        name: "Push Pull Legs".to_owned(),
        description: Some("Classic three-day split repeated weekly".to_owned()),
        difficulty: Difficulty::Intermediate,
        duration_weeks: 4,
        days_per_week: 3,
        goal: Some("hypertrophy".to_owned()),
    };
    db.create_program(&program).await?;

    let days = [
        (1_u32, "Monday", push_template_id),
        (3, "Wednesday", pull_template_id),
        (5, "Friday", legs_template_id),
    ];
    for week_number in 1..=program.duration_weeks {
        for (day_number, day_name, template_id) in days {
            db.create_program_workout(&ProgramWorkout {
                id: Uuid::new_v4(),
                program_id: program.id,
                template_id,
                week_number,
                day_number,
                day_name: Some(day_name.to_owned()),
            })
            .await?;
        }
    }

    info!(
        library_items = library.len(),
        templates = templates.len(),
        program = %program.name,
        "seeded demo catalog"
    );

    Ok(SeededCatalog {
        push_template_id,
        pull_template_id,
        legs_template_id,
        program_id: program.id,
    })
}
