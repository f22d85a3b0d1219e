//! Daily meal schedule and nutrition tips.
//!
//! Every plan has the same five meal slots with fixed shares of the daily
//! targets. Only the meal times and the illustrative food lists vary, chosen
//! from a static menu per goal. Food lists are descriptive and are not
//! reconciled with the scaled targets.

use crate::rounding::round_to_int;
use crate::{FoodItem, Goal, Meal, MealPlan, MEALS_PER_DAY};

/// A meal slot and its share of the daily targets
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MealSlot {
    pub name: &'static str,
    pub fraction: f64,
}

/// The fixed daily schedule, in serving order
pub const MEAL_SLOTS: [MealSlot; MEALS_PER_DAY] = [
    MealSlot {
        name: "Breakfast",
        fraction: 0.25,
    },
    MealSlot {
        name: "Mid-morning",
        fraction: 0.15,
    },
    MealSlot {
        name: "Lunch",
        fraction: 0.35,
    },
    MealSlot {
        name: "Afternoon snack",
        fraction: 0.10,
    },
    MealSlot {
        name: "Dinner",
        fraction: 0.15,
    },
];

/// Meal times and food lists for one goal, indexed like `MEAL_SLOTS`
struct Menu {
    times: [&'static str; MEALS_PER_DAY],
    foods: [&'static [FoodItem]; MEALS_PER_DAY],
}

const fn item(
    name: &'static str,
    quantity: &'static str,
    calories: u32,
    protein: u32,
    carbs: u32,
    fat: u32,
) -> FoodItem {
    FoodItem {
        name,
        quantity,
        calories,
        protein,
        carbs,
        fat,
    }
}

static VOLUME_MENU: Menu = Menu {
    times: ["08:00", "11:00", "14:00", "17:30", "20:30"],
    foods: [
        &[
            item("Oats", "100g", 389, 17, 66, 7),
            item("Whole milk", "300ml", 195, 10, 14, 10),
            item("Banana", "1 large", 120, 1, 31, 0),
            item("Peanut butter", "20g", 118, 5, 3, 10),
        ],
        &[
            item("Protein shake", "1 scoop (30g)", 120, 25, 5, 2),
            item("Apple", "1 medium", 80, 0, 21, 0),
            item("Almonds", "25g", 145, 5, 5, 13),
        ],
        &[
            item("Chicken breast", "200g", 330, 62, 0, 7),
            item("White rice", "150g cooked", 195, 4, 42, 0),
            item("Broccoli", "200g", 68, 6, 13, 0),
            item("Olive oil", "15ml", 135, 0, 0, 15),
        ],
        &[
            item("Greek yogurt", "200g", 130, 20, 8, 2),
            item("Mixed berries", "100g", 50, 1, 12, 0),
            item("Walnuts", "20g", 130, 3, 3, 13),
        ],
        &[
            item("Salmon", "180g", 350, 40, 0, 20),
            item("Sweet potato", "150g", 130, 2, 30, 0),
            item("Mixed salad", "150g", 35, 2, 7, 0),
        ],
    ],
};

static DEFINITION_MENU: Menu = Menu {
    times: ["07:30", "10:30", "13:30", "17:00", "20:00"],
    foods: [
        &[
            item("Egg whites", "6 whites", 100, 22, 1, 0),
            item("Oats", "60g", 233, 10, 40, 4),
            item("Blueberries", "100g", 57, 1, 14, 0),
        ],
        &[
            item("Protein shake", "1 scoop (30g)", 120, 25, 5, 2),
            item("Cucumber", "200g", 30, 1, 7, 0),
        ],
        &[
            item("Chicken breast", "220g", 363, 68, 0, 8),
            item("Brown rice", "100g cooked", 110, 3, 23, 1),
            item("Sauteed spinach", "200g", 46, 6, 7, 0),
            item("Olive oil", "10ml", 90, 0, 0, 10),
        ],
        &[
            item("Tuna in water", "120g", 130, 28, 0, 2),
            item("Cherry tomatoes", "150g", 27, 1, 6, 0),
        ],
        &[
            item("Baked hake", "200g", 180, 38, 0, 3),
            item("Roasted vegetables", "250g", 85, 3, 18, 0),
            item("Olive oil", "10ml", 90, 0, 0, 10),
        ],
    ],
};

static MAINTENANCE_MENU: Menu = Menu {
    times: ["08:00", "11:00", "14:00", "17:30", "20:30"],
    foods: [
        &[
            item("Scrambled eggs", "3 eggs", 210, 18, 2, 15),
            item("Wholegrain toast", "2 slices", 140, 6, 26, 2),
            item("Orange", "1 medium", 62, 1, 15, 0),
        ],
        &[
            item("Plain yogurt", "200g", 100, 8, 12, 2),
            item("Kiwi", "2 pieces", 84, 2, 20, 0),
        ],
        &[
            item("Chicken breast", "180g", 297, 56, 0, 6),
            item("Wholegrain pasta", "80g dry", 290, 12, 58, 2),
            item("Tomato and lettuce", "150g", 30, 1, 7, 0),
        ],
        &[
            item("Ricotta", "150g", 120, 15, 5, 4),
            item("Strawberries", "150g", 48, 1, 11, 0),
        ],
        &[
            item("Lean beef", "150g", 225, 34, 0, 9),
            item("Quinoa", "100g cooked", 120, 4, 21, 2),
            item("Green salad", "200g", 30, 2, 6, 0),
        ],
    ],
};

impl Menu {
    fn for_goal(goal: Goal) -> &'static Menu {
        match goal {
            Goal::Volume => &VOLUME_MENU,
            Goal::Definition => &DEFINITION_MENU,
            Goal::Maintenance => &MAINTENANCE_MENU,
        }
    }
}

fn share(total: i64, fraction: f64) -> i64 {
    round_to_int(total as f64 * fraction)
}

/// Expand daily targets into the five-meal schedule for a goal
///
/// Each meal value is rounded independently, so the meals may not add up
/// exactly to the daily totals.
pub fn compose(goal: Goal, calories: i64, protein: i64, carbs: i64, fat: i64) -> MealPlan {
    let menu = Menu::for_goal(goal);

    std::array::from_fn(|i| {
        let slot = MEAL_SLOTS[i];
        Meal {
            name: slot.name,
            time: menu.times[i],
            calories: share(calories, slot.fraction),
            protein: share(protein, slot.fraction),
            carbs: share(carbs, slot.fraction),
            fat: share(fat, slot.fraction),
            foods: menu.foods[i].to_vec(),
        }
    })
}

const GENERAL_TIPS: [&str; 4] = [
    "Drink at least 2.5-3 L of water a day",
    "Eat protein with every main meal",
    "Sleep 7-9 hours to get the most out of muscle recovery",
    "Prepare the next day's food the night before",
];

const VOLUME_TIPS: [&str; 3] = [
    "Eat even when you are not hungry: a calorie surplus is what builds mass",
    "Prioritise complex carbohydrates before and after training",
    "A protein shake with milk after training speeds up recovery",
];

const DEFINITION_TIPS: [&str; 3] = [
    "Keep the deficit between 200 and 500 kcal below your TDEE",
    "Fasted cardio can speed up fat loss",
    "Increase fibre (vegetables) to stay full on fewer calories",
];

const MAINTENANCE_TIPS: [&str; 3] = [
    "Vary your foods to cover all micronutrients",
    "Listen to your body's hunger and fullness signals",
    "One day a week you can eat something you fancy without guilt",
];

/// Goal-specific tips followed by the general tips
pub fn tips(goal: Goal) -> Vec<&'static str> {
    let by_goal = match goal {
        Goal::Volume => &VOLUME_TIPS,
        Goal::Definition => &DEFINITION_TIPS,
        Goal::Maintenance => &MAINTENANCE_TIPS,
    };
    by_goal.iter().chain(GENERAL_TIPS.iter()).copied().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slot_fractions_sum_to_one() {
        let sum: f64 = MEAL_SLOTS.iter().map(|s| s.fraction).sum();
        assert!((sum - 1.0).abs() < 1e-12, "fractions sum to {}", sum);
    }

    #[test]
    fn test_meal_order_and_names() {
        let plan = compose(Goal::Maintenance, 2364, 150, 293, 66);
        let names: Vec<_> = plan.iter().map(|m| m.name).collect();
        assert_eq!(
            names,
            ["Breakfast", "Mid-morning", "Lunch", "Afternoon snack", "Dinner"]
        );
    }

    #[test]
    fn test_meals_scaled_by_fraction() {
        let plan = compose(Goal::Maintenance, 2364, 150, 293, 66);

        assert_eq!(plan[0].calories, 591); // 2364 * 0.25
        assert_eq!(plan[1].calories, 355); // 354.6
        assert_eq!(plan[2].calories, 827); // 827.4
        assert_eq!(plan[3].calories, 236); // 236.4
        assert_eq!(plan[4].calories, 355);
        assert_eq!(plan[0].protein, 38); // 37.5 rounds up
        assert_eq!(plan[0].carbs, 73); // 73.25
        assert_eq!(plan[3].fat, 7); // 6.6
    }

    #[test]
    fn test_rounding_drift_is_small() {
        for calories in [1200, 1999, 2364, 3187, 4001] {
            let plan = compose(Goal::Volume, calories, 180, 350, 80);
            for (meal, slot) in plan.iter().zip(MEAL_SLOTS.iter()) {
                let exact = calories as f64 * slot.fraction;
                assert!((meal.calories as f64 - exact).abs() <= 0.5);
            }
            let total: i64 = plan.iter().map(|m| m.calories).sum();
            assert!((total - calories).abs() <= 2, "{} vs {}", total, calories);
        }
    }

    #[test]
    fn test_menu_depends_only_on_goal() {
        let small = compose(Goal::Definition, 1500, 100, 150, 40);
        let large = compose(Goal::Definition, 3500, 200, 400, 90);
        for (a, b) in small.iter().zip(large.iter()) {
            assert_eq!(a.foods, b.foods);
            assert_eq!(a.time, b.time);
        }
        assert_eq!(small[0].time, "07:30");
        assert_eq!(small[0].foods[0].name, "Egg whites");
    }

    #[test]
    fn test_volume_menu() {
        let plan = compose(Goal::Volume, 3000, 165, 400, 83);
        assert_eq!(plan[0].foods.len(), 4);
        assert_eq!(plan[0].foods[0].name, "Oats");
        assert_eq!(plan[3].time, "17:30");
        assert_eq!(plan[4].foods[0].name, "Salmon");
    }

    #[test]
    fn test_tips_goal_first_then_general() {
        let t = tips(Goal::Definition);
        assert_eq!(t.len(), 7);
        assert_eq!(t[0], DEFINITION_TIPS[0]);
        assert_eq!(&t[3..], &GENERAL_TIPS[..]);
    }

    #[test]
    fn test_unknown_goal_uses_maintenance_menu_and_tips() {
        let fallback = Goal::from_label("RECOMP");
        assert_eq!(tips(fallback), tips(Goal::Maintenance));
        assert_eq!(
            compose(fallback, 2000, 150, 200, 55),
            compose(Goal::Maintenance, 2000, 150, 200, 55)
        );
    }
}
