// ABOUTME: Core data models for the liftlog fitness-tracking domain
// ABOUTME: Workouts, exercises, templates, programs, enrollments, and derived result shapes
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # Data Models
//!
//! Domain types shared by the repository seam and the core services.
//!
//! ## Design Principles
//!
//! - **Typed at the boundary**: polymorphic text fields from the wire
//!   (rep specifications, difficulty labels) are parsed once at ingestion
//!   into tagged enums rather than re-parsed on every use
//! - **Serializable**: all models support JSON serialization for the API layer
//! - **Ownership-aware**: every user-owned row carries its `user_id`, which
//!   the repository layer matches against the authenticated caller

use std::fmt::{Display, Formatter, Result as FmtResult};

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::constants::reps::DEFAULT_REP_TARGET;

/// Difficulty rating for templates and programs
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    /// Suitable for lifters in their first months of training
    Beginner,
    /// Assumes familiarity with the main barbell lifts
    Intermediate,
    /// High-volume or high-skill programming
    Advanced,
}

impl Difficulty {
    /// Parse a difficulty label from user input, defaulting to beginner
    #[must_use]
    pub fn from_str_lossy(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "intermediate" => Self::Intermediate,
            "advanced" => Self::Advanced,
            _ => Self::Beginner,
        }
    }
}

impl Display for Difficulty {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::Beginner => write!(f, "beginner"),
            Self::Intermediate => write!(f, "intermediate"),
            Self::Advanced => write!(f, "advanced"),
        }
    }
}

/// A prescribed rep scheme for one template exercise
///
/// Wire formats overload three shapes in one text field (`"8-12"`, `"5"`,
/// `"AMRAP"`). They are parsed once at ingestion via [`RepsSpec::parse_lossy`]
/// and carried as a tagged variant from then on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum RepsSpec {
    /// A rep range such as `8-12`; the low bound is the instantiation target
    Range {
        /// Lower bound of the range
        low: u32,
        /// Upper bound of the range
        high: u32,
    },
    /// A fixed rep count such as `5`
    Fixed(u32),
    /// As many reps as possible
    Amrap,
}

impl RepsSpec {
    /// Parse a rep specification from its wire form
    ///
    /// Unparseable input degrades to a fixed count of
    /// [`DEFAULT_REP_TARGET`] rather than failing: template catalogs are
    /// reference data and a malformed row must not break instantiation.
    #[must_use]
    pub fn parse_lossy(s: &str) -> Self {
        let s = s.trim();
        if s.eq_ignore_ascii_case("AMRAP") {
            return Self::Amrap;
        }
        if let Some((low, high)) = s.split_once('-') {
            return match (low.trim().parse(), high.trim().parse()) {
                (Ok(low), Ok(high)) => Self::Range { low, high },
                // "8-" keeps its usable low bound
                (Ok(low), Err(_)) => Self::Range { low, high: low },
                _ => Self::Fixed(DEFAULT_REP_TARGET),
            };
        }
        s.parse().map_or(Self::Fixed(DEFAULT_REP_TARGET), Self::Fixed)
    }

    /// Rep target used when instantiating placeholder sets
    ///
    /// Ranges start at their low bound; AMRAP sets get a nominal target of
    /// [`DEFAULT_REP_TARGET`] since the real count is decided under the bar.
    #[must_use]
    pub const fn default_reps(self) -> u32 {
        match self {
            Self::Range { low, .. } => low,
            Self::Fixed(count) => count,
            Self::Amrap => DEFAULT_REP_TARGET,
        }
    }
}

impl Display for RepsSpec {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::Range { low, high } => write!(f, "{low}-{high}"),
            Self::Fixed(count) => write!(f, "{count}"),
            Self::Amrap => write!(f, "AMRAP"),
        }
    }
}

impl From<String> for RepsSpec {
    fn from(s: String) -> Self {
        Self::parse_lossy(&s)
    }
}

impl From<RepsSpec> for String {
    fn from(spec: RepsSpec) -> Self {
        spec.to_string()
    }
}

/// Immutable catalog entry for a known exercise
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExerciseLibraryItem {
    /// Unique identifier
    pub id: Uuid,
    /// Exercise name (e.g. "Barbell Bench Press")
    pub name: String,
    /// Coarse categorical tag (e.g. "Chest", "Back", "Legs")
    pub muscle_group: String,
    /// Required equipment, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub equipment: Option<String>,
    /// Form cues and execution notes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instructions: Option<String>,
}

/// A reusable, unowned blueprint a user can instantiate into a logged workout
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkoutTemplate {
    /// Unique identifier
    pub id: Uuid,
    /// Template name, reused as the instantiated workout's name
    pub name: String,
    /// Description, copied into the instantiated workout's notes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Difficulty rating
    pub difficulty: Difficulty,
    /// Expected session duration in minutes
    pub duration_minutes: u32,
    /// Free-form category tag (e.g. "strength", "hypertrophy")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

/// Ordered member of a workout template
///
/// Carries both an advisory library reference and a denormalized exercise
/// name; the plain name is authoritative for display and history matching,
/// so library edits cannot orphan template rows.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TemplateExercise {
    /// Unique identifier
    pub id: Uuid,
    /// Owning template
    pub template_id: Uuid,
    /// Advisory reference into the exercise library
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exercise_library_id: Option<Uuid>,
    /// Authoritative exercise name
    pub exercise_name: String,
    /// Position within the template, unique and dense per template
    pub order_index: u32,
    /// Number of prescribed sets
    pub sets_count: u32,
    /// Prescribed rep scheme
    pub reps: RepsSpec,
    /// Prescribed rest between sets, in seconds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rest_seconds: Option<u32>,
    /// Coaching notes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// A multi-week, multi-day-per-week structured schedule of templates
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Program {
    /// Unique identifier
    pub id: Uuid,
    /// Program name
    pub name: String,
    /// Description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Difficulty rating
    pub difficulty: Difficulty,
    /// Length of the program in weeks
    pub duration_weeks: u32,
    /// Scheduled training days per week
    pub days_per_week: u32,
    /// Training goal (e.g. "strength", "fat loss")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub goal: Option<String>,
}

/// A scheduled slot within a program: one template on one day of one week
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProgramWorkout {
    /// Unique identifier
    pub id: Uuid,
    /// Owning program
    pub program_id: Uuid,
    /// Template scheduled in this slot
    pub template_id: Uuid,
    /// 1-based week of the program
    pub week_number: u32,
    /// 1-based day-of-week index (not a sequential workout count)
    pub day_number: u32,
    /// Display name for the day (e.g. "Monday")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub day_name: Option<String>,
}

/// Status of a user's program enrollment
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ProgramStatus {
    /// Enrollment in progress
    #[default]
    Active,
    /// Enrollment suspended, may be resumed
    Paused,
    /// Program finished
    Completed,
}

/// A completed-workout entry in an enrollment's log
///
/// Matched against program slots by `(week_number, day_number)`; a given
/// pair appears at most once.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CompletedWorkout {
    /// Week of the completed slot
    pub week_number: u32,
    /// Day of the completed slot
    pub day_number: u32,
    /// The concrete workout that was logged for the slot
    pub workout_id: Uuid,
    /// Date of completion
    pub completed_date: NaiveDate,
}

/// A user's progress record against a program
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProgram {
    /// Unique identifier
    pub id: Uuid,
    /// Owning user
    pub user_id: Uuid,
    /// Program the user is enrolled in
    pub program_id: Uuid,
    /// Date the enrollment started
    pub start_date: NaiveDate,
    /// 1-based week the user is currently on
    pub current_week: u32,
    /// Append-only log of completed slots
    pub completed_workouts: Vec<CompletedWorkout>,
    /// Enrollment status
    pub status: ProgramStatus,
    /// Record creation timestamp
    pub created_at: DateTime<Utc>,
}

impl UserProgram {
    /// Whether the enrollment log contains a completion for the given slot
    #[must_use]
    pub fn has_completed(&self, week_number: u32, day_number: u32) -> bool {
        self.completed_workouts
            .iter()
            .any(|c| c.week_number == week_number && c.day_number == day_number)
    }
}

/// A single logged set: actual reps performed at an actual load
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct SetEntry {
    /// Repetitions performed
    pub reps: u32,
    /// Load in the user's weight unit; zero for bodyweight or placeholder sets
    pub weight: f64,
}

/// A concrete logged training session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Workout {
    /// Unique identifier
    pub id: Uuid,
    /// Owning user
    pub user_id: Uuid,
    /// Session name
    pub name: String,
    /// Calendar date of the session
    pub date: NaiveDate,
    /// Free-form notes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// Record creation timestamp
    pub created_at: DateTime<Utc>,
}

/// A concrete logged exercise within a workout
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Exercise {
    /// Unique identifier
    pub id: Uuid,
    /// Owning workout
    pub workout_id: Uuid,
    /// Exercise name, matched case-insensitively for history lookups
    pub name: String,
    /// Ordered, non-empty sequence of sets
    pub sets: Vec<SetEntry>,
}

/// One slot of a user's weekly schedule, joined with its template
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduledWorkout {
    /// The underlying program slot
    #[serde(flatten)]
    pub slot: ProgramWorkout,
    /// Whether the enrollment log contains this slot's `(week, day)` pair
    pub is_completed: bool,
    /// The slot's template, joined so callers need no second fetch
    pub template: WorkoutTemplate,
}

/// One historical appearance of an exercise in a user's log
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExerciseHistoryEntry {
    /// Date of the session
    pub date: NaiveDate,
    /// Sets performed in that session
    pub sets: Vec<SetEntry>,
    /// Name of the containing workout
    pub workout_name: String,
}

/// A proposed next-session target weight with its rationale
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OverloadSuggestion {
    /// Suggested load in the user's weight unit
    pub suggested_weight: f64,
    /// Human-readable rationale citing the observed performance
    pub reason: String,
}

/// Type of meal
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum MealType {
    /// Breakfast meal
    Breakfast,
    /// Lunch meal
    Lunch,
    /// Dinner meal
    Dinner,
    /// Snack between meals
    Snack,
    /// Unspecified or other meal type
    Other,
}

impl MealType {
    /// Parse meal type from string
    #[must_use]
    pub fn from_str_lossy(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "breakfast" => Self::Breakfast,
            "lunch" => Self::Lunch,
            "dinner" => Self::Dinner,
            "snack" => Self::Snack,
            _ => Self::Other,
        }
    }
}

/// A logged meal with macros
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Meal {
    /// Unique identifier
    pub id: Uuid,
    /// Owning user
    pub user_id: Uuid,
    /// Meal name or description
    pub name: String,
    /// Calendar date the meal was eaten
    pub date: NaiveDate,
    /// Meal type
    pub meal_type: MealType,
    /// Calories
    #[serde(skip_serializing_if = "Option::is_none")]
    pub calories: Option<f64>,
    /// Protein in grams
    #[serde(skip_serializing_if = "Option::is_none")]
    pub protein_g: Option<f64>,
    /// Carbohydrates in grams
    #[serde(skip_serializing_if = "Option::is_none")]
    pub carbohydrates_g: Option<f64>,
    /// Fat in grams
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fat_g: Option<f64>,
}

/// A logged heart-rate session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeartRateSession {
    /// Unique identifier
    pub id: Uuid,
    /// Owning user
    pub user_id: Uuid,
    /// Calendar date of the session
    pub date: NaiveDate,
    /// Session length in seconds
    pub duration_seconds: u32,
    /// Average heart rate in BPM
    pub avg_bpm: u32,
    /// Peak heart rate in BPM
    pub max_bpm: u32,
    /// Free-form notes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Weight unit preference
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum WeightUnit {
    /// Pounds
    #[default]
    Lb,
    /// Kilograms
    Kg,
}

/// Per-user display and goal preferences
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserPreferences {
    /// Owning user
    pub user_id: Uuid,
    /// Preferred weight unit
    pub weight_unit: WeightUnit,
    /// Empty-bar weight in the preferred unit
    pub bar_weight: f64,
    /// Plate denominations the user owns, per side
    pub available_plates: Vec<f64>,
    /// Daily calorie goal
    pub calorie_goal: u32,
    /// Daily protein goal in grams
    pub protein_goal: u32,
    /// Daily carbohydrate goal in grams
    pub carbs_goal: u32,
    /// Daily fat goal in grams
    pub fat_goal: u32,
}

impl UserPreferences {
    /// Default preferences for a new user
    #[must_use]
    pub fn defaults_for(user_id: Uuid) -> Self {
        Self {
            user_id,
            weight_unit: WeightUnit::Lb,
            bar_weight: 45.0,
            available_plates: vec![45.0, 35.0, 25.0, 10.0, 5.0, 2.5],
            calorie_goal: 2000,
            protein_goal: 150,
            carbs_goal: 200,
            fat_goal: 67,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn reps_spec_parses_ranges_fixed_and_amrap() {
        assert_eq!(
            RepsSpec::parse_lossy("8-12"),
            RepsSpec::Range { low: 8, high: 12 }
        );
        assert_eq!(RepsSpec::parse_lossy("5"), RepsSpec::Fixed(5));
        assert_eq!(RepsSpec::parse_lossy("amrap"), RepsSpec::Amrap);
        assert_eq!(RepsSpec::parse_lossy("AMRAP"), RepsSpec::Amrap);
        assert_eq!(RepsSpec::parse_lossy("bad"), RepsSpec::Fixed(10));
        assert_eq!(
            RepsSpec::parse_lossy("bad-12"),
            RepsSpec::Fixed(DEFAULT_REP_TARGET)
        );
    }

    #[test]
    fn reps_spec_default_reps() {
        assert_eq!(RepsSpec::Range { low: 8, high: 12 }.default_reps(), 8);
        assert_eq!(RepsSpec::Fixed(5).default_reps(), 5);
        assert_eq!(RepsSpec::Amrap.default_reps(), 10);
    }

    #[test]
    fn reps_spec_round_trips_through_display() {
        for raw in ["8-12", "5", "AMRAP"] {
            assert_eq!(RepsSpec::parse_lossy(raw).to_string(), raw);
        }
    }

    #[test]
    fn difficulty_lossy_parse_defaults_to_beginner() {
        assert_eq!(Difficulty::from_str_lossy("Advanced"), Difficulty::Advanced);
        assert_eq!(Difficulty::from_str_lossy("???"), Difficulty::Beginner);
    }

    #[test]
    fn completion_pair_matching() {
        let program = UserProgram {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            program_id: Uuid::new_v4(),
            start_date: NaiveDate::from_ymd_opt(2025, 1, 6).unwrap(),
            current_week: 2,
            completed_workouts: vec![CompletedWorkout {
                week_number: 2,
                day_number: 1,
                workout_id: Uuid::new_v4(),
                completed_date: NaiveDate::from_ymd_opt(2025, 1, 13).unwrap(),
            }],
            status: ProgramStatus::Active,
            created_at: Utc::now(),
        };
        assert!(program.has_completed(2, 1));
        assert!(!program.has_completed(2, 2));
        assert!(!program.has_completed(1, 1));
    }
}
