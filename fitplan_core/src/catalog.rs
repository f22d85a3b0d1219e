//! Default catalog of exercises.
//!
//! Logged sessions reference exercises by id; the catalog supplies each
//! exercise's muscle group so statistics can tally work per group.

use crate::types::*;
use crate::{Error, Result};
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Cached default catalog - built once and reused across all operations
static DEFAULT_CATALOG: Lazy<ExerciseCatalog> = Lazy::new(build_default_catalog);

/// Get a reference to the cached default catalog
pub fn get_default_catalog() -> &'static ExerciseCatalog {
    &DEFAULT_CATALOG
}

fn exercise(
    id: &str,
    name: &str,
    muscle_group: MuscleGroup,
    kind: ExerciseKind,
    level: Level,
    equipment: &[&str],
) -> Exercise {
    Exercise {
        id: id.into(),
        name: name.into(),
        muscle_group,
        kind,
        level,
        equipment: equipment.iter().map(|e| e.to_string()).collect(),
    }
}

/// Builds the default catalog of built-in exercises
///
/// Prefer `get_default_catalog()`; this is kept for tests and custom catalogs.
pub fn build_default_catalog() -> ExerciseCatalog {
    use ExerciseKind::{Compound, Isolation};
    use Level::{Beginner, Intermediate};
    use MuscleGroup::*;

    let exercises = vec![
        // Chest
        exercise(
            "bench_press",
            "Bench Press",
            Chest,
            Compound,
            Beginner,
            &["barbell", "bench"],
        ),
        exercise(
            "incline_dumbbell_press",
            "Incline Dumbbell Press",
            Chest,
            Compound,
            Beginner,
            &["dumbbells", "incline bench"],
        ),
        exercise(
            "cable_fly",
            "Cable Fly",
            Chest,
            Isolation,
            Intermediate,
            &["cable machine"],
        ),
        // Back
        exercise(
            "deadlift",
            "Deadlift",
            Back,
            Compound,
            Intermediate,
            &["barbell"],
        ),
        exercise(
            "pull_up",
            "Pull-Up",
            Back,
            Compound,
            Intermediate,
            &["pull-up bar"],
        ),
        exercise(
            "barbell_row",
            "Barbell Row",
            Back,
            Compound,
            Beginner,
            &["barbell"],
        ),
        exercise(
            "lat_pulldown",
            "Lat Pulldown",
            Back,
            Compound,
            Beginner,
            &["cable machine", "lat pulldown bar"],
        ),
        // Shoulders
        exercise(
            "overhead_press",
            "Overhead Press",
            Shoulders,
            Compound,
            Intermediate,
            &["barbell"],
        ),
        exercise(
            "lateral_raise",
            "Lateral Raise",
            Shoulders,
            Isolation,
            Beginner,
            &["dumbbells"],
        ),
        exercise(
            "face_pull",
            "Face Pull",
            Shoulders,
            Isolation,
            Beginner,
            &["cable machine", "rope attachment"],
        ),
        // Arms
        exercise(
            "barbell_curl",
            "Barbell Curl",
            Arms,
            Isolation,
            Beginner,
            &["barbell"],
        ),
        exercise(
            "tricep_pushdown",
            "Tricep Pushdown",
            Arms,
            Isolation,
            Beginner,
            &["cable machine"],
        ),
        exercise(
            "hammer_curl",
            "Hammer Curl",
            Arms,
            Isolation,
            Beginner,
            &["dumbbells"],
        ),
        exercise(
            "skull_crusher",
            "Skull Crusher",
            Arms,
            Isolation,
            Intermediate,
            &["barbell", "EZ bar", "bench"],
        ),
        // Legs
        exercise(
            "squat",
            "Squat",
            Legs,
            Compound,
            Beginner,
            &["barbell", "squat rack"],
        ),
        exercise(
            "romanian_deadlift",
            "Romanian Deadlift",
            Legs,
            Compound,
            Intermediate,
            &["barbell"],
        ),
        exercise(
            "leg_press",
            "Leg Press",
            Legs,
            Compound,
            Beginner,
            &["leg press machine"],
        ),
        exercise(
            "leg_curl",
            "Leg Curl",
            Legs,
            Isolation,
            Beginner,
            &["leg curl machine"],
        ),
        // Core
        exercise("plank", "Plank", Core, Isolation, Beginner, &[]),
        exercise(
            "cable_crunch",
            "Cable Crunch",
            Core,
            Isolation,
            Beginner,
            &["cable machine", "rope attachment"],
        ),
        // Full body
        exercise("burpee", "Burpee", FullBody, Compound, Beginner, &[]),
        exercise(
            "kettlebell_swing",
            "Kettlebell Swing",
            FullBody,
            Compound,
            Intermediate,
            &["kettlebell"],
        ),
    ];

    ExerciseCatalog {
        exercises: exercises.into_iter().map(|e| (e.id.clone(), e)).collect(),
    }
}

impl ExerciseCatalog {
    /// Look up an exercise by id
    pub fn get(&self, id: &str) -> Result<&Exercise> {
        self.exercises
            .get(id)
            .ok_or_else(|| Error::UnknownExercise(id.to_string()))
    }

    /// Exercises ordered by muscle group, then name, optionally filtered
    pub fn list(&self, muscle_group: Option<MuscleGroup>) -> Vec<&Exercise> {
        let mut listed: Vec<&Exercise> = self
            .exercises
            .values()
            .filter(|e| muscle_group.map_or(true, |g| e.muscle_group == g))
            .collect();
        listed.sort_by(|a, b| {
            a.muscle_group
                .cmp(&b.muscle_group)
                .then_with(|| a.name.cmp(&b.name))
        });
        listed
    }

    /// Validate the catalog for consistency and completeness
    ///
    /// Returns a list of validation errors, or empty Vec if valid.
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        for (id, exercise) in &self.exercises {
            if id.is_empty() || exercise.id.is_empty() {
                errors.push("Exercise has empty ID".to_string());
            }
            if id != &exercise.id {
                errors.push(format!(
                    "Exercise key '{}' doesn't match exercise.id '{}'",
                    id, exercise.id
                ));
            }
            if exercise.name.is_empty() {
                errors.push(format!("Exercise '{}' has empty name", id));
            }
        }

        for group in MuscleGroup::ALL {
            if !self.exercises.values().any(|e| e.muscle_group == group) {
                errors.push(format!("Catalog has no {} exercises", group));
            }
        }

        errors
    }
}

impl Exercise {
    /// Reference embedded in an exercise log
    pub fn to_ref(&self) -> ExerciseRef {
        ExerciseRef {
            id: self.id.clone(),
            name: self.name.clone(),
            muscle_group: self.muscle_group,
        }
    }
}
