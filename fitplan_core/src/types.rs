//! Core domain types for the fitplan engine.
//!
//! This module defines the fundamental types used throughout the system:
//! - Physical profile, goal and training level
//! - Energy targets, meals and the nutrition plan payload
//! - Logged training sessions and exercise logs
//! - Training statistics
//! - The built-in exercise catalog

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use uuid::Uuid;

// ============================================================================
// Profile Types
// ============================================================================

/// Training goal driving calorie adjustment, protein target and meal menu.
///
/// Deserialization is lenient: any unrecognised label becomes `Maintenance`.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE", from = "String")]
pub enum Goal {
    Definition,
    #[default]
    Maintenance,
    Volume,
}

impl Goal {
    /// Parse a goal label (case-insensitive), `None` if unrecognised
    pub fn parse(label: &str) -> Option<Self> {
        match label.trim().to_uppercase().as_str() {
            "DEFINITION" => Some(Goal::Definition),
            "MAINTENANCE" => Some(Goal::Maintenance),
            "VOLUME" => Some(Goal::Volume),
            _ => None,
        }
    }

    /// Parse a goal label, falling back to `Maintenance` for anything unknown
    pub fn from_label(label: &str) -> Self {
        Self::parse(label).unwrap_or_else(|| {
            tracing::debug!("Unrecognised goal {:?}, using MAINTENANCE", label);
            Goal::Maintenance
        })
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Goal::Definition => "DEFINITION",
            Goal::Maintenance => "MAINTENANCE",
            Goal::Volume => "VOLUME",
        }
    }
}

impl From<String> for Goal {
    fn from(label: String) -> Self {
        Goal::from_label(&label)
    }
}

impl fmt::Display for Goal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Training experience level, used to pick the activity multiplier.
///
/// Deserialization is lenient: any unrecognised label becomes `Beginner`.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE", from = "String")]
pub enum Level {
    #[default]
    Beginner,
    Intermediate,
    Advanced,
}

impl Level {
    /// Parse a level label (case-insensitive), `None` if unrecognised
    pub fn parse(label: &str) -> Option<Self> {
        match label.trim().to_uppercase().as_str() {
            "BEGINNER" => Some(Level::Beginner),
            "INTERMEDIATE" => Some(Level::Intermediate),
            "ADVANCED" => Some(Level::Advanced),
            _ => None,
        }
    }

    /// Parse a level label, falling back to `Beginner` for anything unknown
    pub fn from_label(label: &str) -> Self {
        Self::parse(label).unwrap_or_else(|| {
            tracing::debug!("Unrecognised level {:?}, using BEGINNER", label);
            Level::Beginner
        })
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Beginner => "BEGINNER",
            Level::Intermediate => "INTERMEDIATE",
            Level::Advanced => "ADVANCED",
        }
    }
}

impl From<String> for Level {
    fn from(label: String) -> Self {
        Level::from_label(&label)
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// A user's physical profile as stored. Every field may be absent.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct Profile {
    /// Body weight in kilograms
    pub weight: Option<f64>,
    /// Height in centimetres
    pub height: Option<f64>,
    /// Age in years
    pub age: Option<u32>,
    pub goal: Option<Goal>,
    pub level: Option<Level>,
}

/// A profile with every default applied, ready for computation
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ResolvedProfile {
    pub weight: f64,
    pub height: f64,
    pub age: u32,
    pub goal: Goal,
    pub level: Level,
}

// ============================================================================
// Nutrition Types
// ============================================================================

/// Daily energy and macronutrient targets derived from a profile
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct EnergyTargets {
    pub bmr: i64,
    pub tdee: i64,
    pub calories: i64,
    /// Grams of protein
    pub protein: i64,
    /// Grams of carbohydrate; may be negative for implausible profiles
    pub carbs: i64,
    /// Grams of fat
    pub fat: i64,
}

/// Illustrative food item attached to a meal
#[derive(Clone, Copy, Debug, Serialize, PartialEq, Eq)]
pub struct FoodItem {
    pub name: &'static str,
    pub quantity: &'static str,
    pub calories: u32,
    pub protein: u32,
    pub carbs: u32,
    pub fat: u32,
}

/// One meal of the daily schedule with its share of the targets
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct Meal {
    pub name: &'static str,
    pub time: &'static str,
    pub calories: i64,
    pub protein: i64,
    pub carbs: i64,
    pub fat: i64,
    pub foods: Vec<FoodItem>,
}

/// Number of meals in every daily schedule
pub const MEALS_PER_DAY: usize = 5;

/// The fixed five-meal daily schedule
pub type MealPlan = [Meal; MEALS_PER_DAY];

/// Macronutrient content per 100 g of a food
#[derive(Clone, Copy, Debug, Serialize, PartialEq)]
pub struct Per100g {
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
}

/// Entry of the food reference table
#[derive(Clone, Copy, Debug, Serialize, PartialEq)]
pub struct FoodReference {
    pub name: &'static str,
    #[serde(rename = "per100g")]
    pub per_100g: Per100g,
}

/// Nutrition plan response payload
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct NutritionPlan {
    pub calories: i64,
    pub protein: i64,
    pub carbs: i64,
    pub fat: i64,
    pub bmr: i64,
    pub tdee: i64,
    pub goal: Goal,
    pub meals: MealPlan,
    pub tips: Vec<&'static str>,
}

// ============================================================================
// Exercise and Session Types
// ============================================================================

/// Muscle group classification of an exercise
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MuscleGroup {
    Chest,
    Back,
    Shoulders,
    Arms,
    Legs,
    Core,
    FullBody,
}

impl MuscleGroup {
    pub const ALL: [MuscleGroup; 7] = [
        MuscleGroup::Chest,
        MuscleGroup::Back,
        MuscleGroup::Shoulders,
        MuscleGroup::Arms,
        MuscleGroup::Legs,
        MuscleGroup::Core,
        MuscleGroup::FullBody,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MuscleGroup::Chest => "CHEST",
            MuscleGroup::Back => "BACK",
            MuscleGroup::Shoulders => "SHOULDERS",
            MuscleGroup::Arms => "ARMS",
            MuscleGroup::Legs => "LEGS",
            MuscleGroup::Core => "CORE",
            MuscleGroup::FullBody => "FULL_BODY",
        }
    }

    /// Parse a muscle group label (case-insensitive, `-` or `_` separators)
    pub fn parse(label: &str) -> Option<Self> {
        let normalized = label.trim().to_uppercase().replace('-', "_");
        Self::ALL.into_iter().find(|g| g.as_str() == normalized)
    }
}

impl fmt::Display for MuscleGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Mechanical classification of an exercise
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ExerciseKind {
    Compound,
    Isolation,
}

/// A built-in exercise definition
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Exercise {
    pub id: String,
    pub name: String,
    pub muscle_group: MuscleGroup,
    pub kind: ExerciseKind,
    pub level: Level,
    pub equipment: Vec<String>,
}

/// Reference from a log to the exercise it records
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ExerciseRef {
    pub id: String,
    pub name: String,
    pub muscle_group: MuscleGroup,
}

/// One exercise performed within a session
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ExerciseLog {
    pub exercise: ExerciseRef,
    pub sets: u32,
    pub reps: u32,
    /// Load in kilograms; absent for bodyweight work
    #[serde(default)]
    pub weight: Option<f64>,
    #[serde(default)]
    pub rpe: Option<u8>,
    #[serde(default)]
    pub notes: Option<String>,
}

/// A recorded training session
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Session {
    pub id: Uuid,
    pub date: DateTime<Utc>,
    #[serde(default)]
    pub workout_id: Option<String>,
    /// Duration in minutes
    #[serde(default)]
    pub duration: Option<u32>,
    #[serde(default)]
    pub total_volume: Option<f64>,
    #[serde(default)]
    pub rpe: Option<u8>,
    #[serde(default)]
    pub notes: Option<String>,
    pub completed: bool,
    #[serde(default)]
    pub logs: Vec<ExerciseLog>,
}

/// Input for recording a new session, before any derivation
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct NewSession {
    pub date: Option<DateTime<Utc>>,
    pub workout_id: Option<String>,
    pub duration: Option<u32>,
    pub total_volume: Option<f64>,
    pub rpe: Option<u8>,
    pub notes: Option<String>,
    pub completed: Option<bool>,
    #[serde(default)]
    pub logs: Vec<ExerciseLog>,
}

// ============================================================================
// Statistics Types
// ============================================================================

/// Training statistics response payload
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TrainingStats {
    pub total_sessions: usize,
    pub sessions_this_week: usize,
    pub total_volume: f64,
    /// Minutes
    pub total_duration: u64,
    pub avg_rpe: Option<f64>,
    pub sessions_per_week: f64,
    pub most_worked_muscle: Option<MuscleGroup>,
    /// Week-start (Monday) date to summed volume
    pub weekly_volume: BTreeMap<NaiveDate, f64>,
}

// ============================================================================
// Catalog Type
// ============================================================================

/// The complete catalog of built-in exercises, keyed by id
#[derive(Clone, Debug)]
pub struct ExerciseCatalog {
    pub exercises: HashMap<String, Exercise>,
}
