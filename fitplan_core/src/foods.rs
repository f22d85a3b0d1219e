//! Static food reference table (macros per 100 g).

use crate::{FoodReference, Per100g};

const fn food(
    name: &'static str,
    calories: f64,
    protein: f64,
    carbs: f64,
    fat: f64,
) -> FoodReference {
    FoodReference {
        name,
        per_100g: Per100g {
            calories,
            protein,
            carbs,
            fat,
        },
    }
}

static FOOD_DATABASE: [FoodReference; 30] = [
    food("Chicken breast", 165.0, 31.0, 0.0, 3.6),
    food("Turkey breast", 135.0, 29.0, 0.0, 1.0),
    food("Salmon", 208.0, 20.0, 0.0, 13.0),
    food("Tuna in water", 116.0, 26.0, 0.0, 1.0),
    food("Hake", 82.0, 18.0, 0.0, 1.0),
    food("Whole egg", 155.0, 13.0, 1.0, 11.0),
    food("Egg white", 52.0, 11.0, 1.0, 0.0),
    food("White rice, cooked", 130.0, 2.7, 28.0, 0.3),
    food("Brown rice, cooked", 111.0, 2.6, 23.0, 0.9),
    food("Pasta, cooked", 158.0, 6.0, 31.0, 1.0),
    food("Oats", 389.0, 17.0, 66.0, 7.0),
    food("Wholegrain bread", 247.0, 13.0, 41.0, 4.0),
    food("Potato, boiled", 87.0, 2.0, 20.0, 0.0),
    food("Sweet potato", 86.0, 1.6, 20.0, 0.0),
    food("Quinoa, cooked", 120.0, 4.0, 21.0, 2.0),
    food("Greek yogurt 0%", 59.0, 10.0, 3.6, 0.4),
    food("Greek yogurt, whole", 97.0, 9.0, 3.6, 5.0),
    food("Whole milk", 61.0, 3.2, 4.8, 3.3),
    food("Cottage cheese", 98.0, 11.0, 3.4, 4.3),
    food("Ricotta", 74.0, 11.0, 4.0, 1.0),
    food("Almonds", 579.0, 21.0, 22.0, 50.0),
    food("Walnuts", 654.0, 15.0, 14.0, 65.0),
    food("Peanut butter", 588.0, 25.0, 20.0, 50.0),
    food("Avocado", 160.0, 2.0, 9.0, 15.0),
    food("Olive oil", 884.0, 0.0, 0.0, 100.0),
    food("Broccoli", 34.0, 2.8, 7.0, 0.4),
    food("Spinach", 23.0, 2.9, 3.6, 0.4),
    food("Banana", 89.0, 1.1, 23.0, 0.3),
    food("Apple", 52.0, 0.3, 14.0, 0.2),
    food("Blueberries", 57.0, 0.7, 14.0, 0.3),
];

/// The read-only food reference table, independent of any profile
pub fn food_database() -> &'static [FoodReference] {
    &FOOD_DATABASE
}
