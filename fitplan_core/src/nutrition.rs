//! Nutrition plan assembly: energy targets, meal schedule and tips.

use crate::config::NutritionConfig;
use crate::{energy, meal_plan, NutritionPlan, Profile};

/// Build the full nutrition plan response for a profile
pub fn build_plan(profile: &Profile, config: &NutritionConfig) -> NutritionPlan {
    let goal = profile.resolve().goal;
    let targets = energy::compute_with(profile, config);
    let meals = meal_plan::compose(
        goal,
        targets.calories,
        targets.protein,
        targets.carbs,
        targets.fat,
    );

    tracing::info!(
        "Built {} nutrition plan: {} kcal over {} meals",
        goal,
        targets.calories,
        meals.len()
    );

    NutritionPlan {
        calories: targets.calories,
        protein: targets.protein,
        carbs: targets.carbs,
        fat: targets.fat,
        bmr: targets.bmr,
        tdee: targets.tdee,
        goal,
        meals,
        tips: meal_plan::tips(goal),
    }
}
