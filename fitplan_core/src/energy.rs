//! Energy expenditure and macronutrient targets.
//!
//! Uses a gender-neutral Mifflin-St Jeor estimate:
//! - BMR from weight, height and age
//! - TDEE from BMR and an activity multiplier chosen by training level
//! - Calorie target from TDEE and a goal adjustment
//! - Protein per kg of body weight, fat as a fixed share of calories,
//!   carbohydrate as the remainder

use crate::config::NutritionConfig;
use crate::rounding::round_to_int;
use crate::{EnergyTargets, Goal, Level, Profile};

/// Share of daily calories allotted to fat
pub const FAT_CALORIE_SHARE: f64 = 0.25;

pub const KCAL_PER_GRAM_FAT: i64 = 9;
pub const KCAL_PER_GRAM_PROTEIN: i64 = 4;
pub const KCAL_PER_GRAM_CARBS: i64 = 4;

/// Per-level policy values
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LevelPolicy {
    pub activity_multiplier: f64,
}

impl LevelPolicy {
    pub const fn for_level(level: Level) -> Self {
        match level {
            Level::Beginner => Self {
                activity_multiplier: 1.375,
            },
            Level::Intermediate => Self {
                activity_multiplier: 1.55,
            },
            Level::Advanced => Self {
                activity_multiplier: 1.725,
            },
        }
    }
}

/// Per-goal policy values
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GoalPolicy {
    /// Added to TDEE to get the calorie target
    pub calorie_adjustment: i64,
    /// Grams of protein per kilogram of body weight
    pub protein_per_kg: f64,
}

impl GoalPolicy {
    pub const fn for_goal(goal: Goal) -> Self {
        match goal {
            Goal::Definition => Self {
                calorie_adjustment: -400,
                protein_per_kg: 2.5,
            },
            Goal::Maintenance => Self {
                calorie_adjustment: 0,
                protein_per_kg: 2.0,
            },
            Goal::Volume => Self {
                calorie_adjustment: 400,
                protein_per_kg: 2.2,
            },
        }
    }
}

/// Compute energy targets with default nutrition settings
pub fn compute(profile: &Profile) -> EnergyTargets {
    compute_with(profile, &NutritionConfig::default())
}

/// Compute energy targets for a profile
///
/// Absent profile fields are replaced by their defaults first, so this never
/// fails. A negative carbohydrate residual is reported with a warning and
/// left as is unless `clamp_negative_carbs` is set.
pub fn compute_with(profile: &Profile, config: &NutritionConfig) -> EnergyTargets {
    let p = profile.resolve();
    let level_policy = LevelPolicy::for_level(p.level);
    let goal_policy = GoalPolicy::for_goal(p.goal);

    let bmr = round_to_int(10.0 * p.weight + 6.25 * p.height - 5.0 * f64::from(p.age));
    let tdee = round_to_int(bmr as f64 * level_policy.activity_multiplier);
    let calories = tdee + goal_policy.calorie_adjustment;

    let protein = round_to_int(p.weight * goal_policy.protein_per_kg);
    let fat = round_to_int(calories as f64 * FAT_CALORIE_SHARE / KCAL_PER_GRAM_FAT as f64);
    let remainder = calories - protein * KCAL_PER_GRAM_PROTEIN - fat * KCAL_PER_GRAM_FAT;
    let mut carbs = round_to_int(remainder as f64 / KCAL_PER_GRAM_CARBS as f64);

    if carbs < 0 {
        tracing::warn!(
            "Negative carbohydrate target ({} g) for {} kg, goal {}: implausible profile",
            carbs,
            p.weight,
            p.goal
        );
        if config.clamp_negative_carbs {
            carbs = 0;
        }
    }

    tracing::debug!(
        "Energy targets: bmr {}, tdee {}, calories {}, P/C/F {}/{}/{}",
        bmr,
        tdee,
        calories,
        protein,
        carbs,
        fat
    );

    EnergyTargets {
        bmr,
        tdee,
        calories,
        protein,
        carbs,
        fat,
    }
}
