//! Nutrition analysis of generated meal-plan text.
//!
//! Plan text is scanned for reference food keys; the match counts feed two independent
//! paths: nutrient aggregation followed by goal alignment scoring, and cost estimation.
//! Every function here is pure and total: degenerate input yields zeroes or explicit
//! "not applicable" / "unknown" markers, never an error.

pub mod aggregator;
pub mod alignment;
pub mod constants;
pub mod cost;
pub mod matcher;

use log::debug;

use crate::models::{normalize_goal_key, PlanAnalysis};
use crate::reference::NutritionReference;

pub use aggregator::{aggregate_nutrients, daily_estimate, sum_matched_nutrients};
pub use alignment::{macro_alignment, macro_percentage, score_goal_alignment};
pub use cost::{cost_category_for_mean, estimate_cost};
pub use matcher::{count_food_matches, count_occurrences, plan_days};

/// Analyze a meal plan against a goal.
///
/// Unknown goals contribute no calorie modifier and produce a `NotApplicable` alignment.
pub fn analyze_meal_plan(plan_text: &str, goal: &str, reference: &NutritionReference) -> PlanAnalysis {
    let matches = count_food_matches(plan_text, reference);
    let days = plan_days(plan_text);
    let modifier = reference.calorie_modifier(goal);

    let nutrition = aggregate_nutrients(&matches, reference, days, modifier);
    let alignment = score_goal_alignment(&nutrition.daily, goal, reference);
    let cost = estimate_cost(&matches, reference);

    debug!(
        "Analyzed plan: {} distinct foods, {} days, {} kcal/day, cost {}",
        matches.len(),
        days,
        nutrition.daily.calories,
        cost.category
    );

    PlanAnalysis {
        goal: normalize_goal_key(goal),
        matches,
        nutrition,
        alignment,
        cost,
    }
}

/// Analyzer bound to one shared reference dataset.
///
/// Holds only a shared borrow, so one dataset can back any number of analyzers across threads.
#[derive(Debug, Clone, Copy)]
pub struct MealPlanAnalyzer<'a> {
    reference: &'a NutritionReference,
}

impl<'a> MealPlanAnalyzer<'a> {
    pub fn new(reference: &'a NutritionReference) -> Self {
        Self { reference }
    }

    pub fn analyze(&self, plan_text: &str, goal: &str) -> PlanAnalysis {
        analyze_meal_plan(plan_text, goal, self.reference)
    }
}
