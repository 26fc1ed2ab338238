use std::collections::BTreeMap;

use crate::models::{CostTier, FoodRecord, GoalProfile, MacroProfile, MedicalCondition};
use crate::reference::NutritionReference;

// ─────────────────────────────────────────────────────────────────────────────
// Foods: per-serving macros (protein g, carbs g, fat g, fiber g, kcal) and cost tier
// ─────────────────────────────────────────────────────────────────────────────

const FOODS: &[(&str, MacroProfile, CostTier)] = &[
    ("chicken_breast", MacroProfile::new(31.0, 0.0, 3.6, 0.0, 165.0), CostTier::Medium),
    ("salmon", MacroProfile::new(20.0, 0.0, 13.0, 0.0, 208.0), CostTier::High),
    ("tofu", MacroProfile::new(8.0, 2.0, 4.0, 0.3, 76.0), CostTier::Low),
    ("brown_rice", MacroProfile::new(2.6, 23.0, 0.9, 1.8, 112.0), CostTier::Low),
    ("quinoa", MacroProfile::new(4.4, 21.3, 1.9, 2.8, 120.0), CostTier::Medium),
    ("sweet_potato", MacroProfile::new(1.6, 20.1, 0.1, 3.0, 86.0), CostTier::Low),
    ("spinach", MacroProfile::new(2.9, 3.6, 0.4, 2.2, 23.0), CostTier::Low),
    ("chickpeas", MacroProfile::new(8.9, 27.4, 2.6, 7.6, 164.0), CostTier::Low),
    ("eggs", MacroProfile::new(12.6, 0.7, 9.5, 0.0, 143.0), CostTier::Low),
    ("greek_yogurt", MacroProfile::new(10.0, 3.6, 0.4, 0.0, 59.0), CostTier::Medium),
    ("avocado", MacroProfile::new(2.0, 8.5, 15.0, 6.7, 160.0), CostTier::Medium),
    ("almonds", MacroProfile::new(21.2, 21.7, 49.4, 12.2, 579.0), CostTier::Medium),
    ("oats", MacroProfile::new(13.2, 67.7, 6.9, 10.1, 381.0), CostTier::Low),
    ("banana", MacroProfile::new(1.1, 22.8, 0.3, 2.6, 89.0), CostTier::Low),
    ("beef", MacroProfile::new(26.1, 0.0, 11.8, 0.0, 217.0), CostTier::High),
    ("lentils", MacroProfile::new(9.0, 20.0, 0.4, 7.9, 116.0), CostTier::Low),
];

// ─────────────────────────────────────────────────────────────────────────────
// Goals: (key, protein %, carbs %, fat %, calorie modifier, focus)
// ─────────────────────────────────────────────────────────────────────────────

const GOALS: &[(&str, f64, f64, f64, i32, Option<&str>)] = &[
    ("weight_loss", 30.0, 40.0, 30.0, -300, None),
    ("muscle_gain", 40.0, 40.0, 20.0, 300, None),
    ("maintenance", 30.0, 45.0, 25.0, 0, None),
    ("heart_health", 25.0, 50.0, 25.0, 0, Some("omega3")),
    ("diabetes_management", 30.0, 35.0, 35.0, 0, Some("low_GI")),
    ("anti_aging", 30.0, 40.0, 30.0, 0, Some("antioxidants")),
    ("athletic_performance", 35.0, 55.0, 10.0, 0, Some("complex_carbs")),
];

const CONDITIONS: &[(&str, &[&str], &[&str])] = &[
    ("diabetes", &["refined_sugar", "white_bread"], &["low_GI_foods"]),
    ("hypertension", &["excess_sodium"], &["potassium_rich_foods"]),
    ("celiac", &["gluten"], &["gluten_free_grains"]),
    ("lactose_intolerance", &["dairy"], &["plant_based_alternatives"]),
    ("gout", &["red_meat", "seafood"], &["plant_proteins"]),
    ("ibs", &["trigger_foods"], &["fodmap_friendly_foods"]),
];

const REGIONS: &[(&str, &[&str])] = &[
    (
        "North America",
        &["chicken_breast", "beef", "salmon", "sweet_potato", "kale", "quinoa", "almonds"],
    ),
    (
        "South America",
        &["beans", "corn", "quinoa", "plantains", "cassava", "beef"],
    ),
    (
        "Europe",
        &["chicken", "pork", "potatoes", "dairy", "rye_bread", "olive_oil"],
    ),
    (
        "East Asia",
        &["rice", "tofu", "fish", "bok_choy", "seaweed", "mushrooms"],
    ),
    (
        "South Asia",
        &["lentils", "rice", "chickpeas", "spinach", "yogurt", "chicken"],
    ),
    (
        "Middle East",
        &["chickpeas", "lamb", "bulgur", "dates", "olive_oil", "yogurt"],
    ),
    (
        "Africa",
        &["cassava", "plantains", "beans", "fish", "millet", "peanuts"],
    ),
    (
        "Australia/Oceania",
        &["beef", "lamb", "fish", "sweet_potato", "macadamia_nuts"],
    ),
];

impl NutritionReference {
    /// The dataset shipped with the crate.
    pub fn builtin() -> Self {
        let foods = FOODS
            .iter()
            .map(|(key, macros, cost)| {
                let food = FoodRecord::new(key, *macros, *cost);
                (food.key.clone(), food)
            })
            .collect();

        let goals = GOALS
            .iter()
            .map(|(key, protein, carbs, fat, modifier, focus)| {
                let mut goal =
                    GoalProfile::new(key, *protein, *carbs, *fat).with_calorie_modifier(*modifier);
                if let Some(focus) = focus {
                    goal = goal.with_focus(focus);
                }
                (goal.key.clone(), goal)
            })
            .collect();

        let conditions = CONDITIONS
            .iter()
            .map(|(key, avoid, prefer)| {
                let condition = MedicalCondition::new(key, avoid, prefer);
                (condition.key.clone(), condition)
            })
            .collect();

        let regions: BTreeMap<String, Vec<String>> = REGIONS
            .iter()
            .map(|(name, foods)| {
                (
                    name.to_string(),
                    foods.iter().map(|f| f.to_string()).collect(),
                )
            })
            .collect();

        Self {
            foods,
            goals,
            conditions,
            regions,
        }
    }
}
