use assert_float_eq::*;

use meal_plan_analyzer_rs::analyzer::{analyze_meal_plan, score_goal_alignment};
use meal_plan_analyzer_rs::models::{
    AlignmentReport, CostCategory, DailyEstimate, MacroProfile, TierCounts,
};
use meal_plan_analyzer_rs::reference::BUILTIN_REFERENCE;

#[test]
fn test_single_day_weight_loss_plan() {
    let plan = "Breakfast: chicken_breast omelette\n\
                Lunch: brown_rice bowl\n\
                Dinner: grilled chicken_breast";
    let analysis = analyze_meal_plan(plan, "weight_loss", &BUILTIN_REFERENCE);

    assert_eq!(analysis.matches.get("chicken_breast"), Some(&2));
    assert_eq!(analysis.matches.get("brown_rice"), Some(&1));
    assert_eq!(analysis.nutrition.days, 1);

    let totals = analysis.nutrition.totals;
    assert_float_absolute_eq!(totals.protein, 64.6, 1e-9);
    assert_float_absolute_eq!(totals.carbs, 23.0, 1e-9);
    assert_float_absolute_eq!(totals.fat, 8.1, 1e-9);
    assert_float_absolute_eq!(totals.fiber, 1.8, 1e-9);
    assert_float_absolute_eq!(totals.calories, 442.0, 1e-9);

    // 442 kcal with the -300 modifier applied once
    assert_eq!(analysis.nutrition.daily.calories, 142);

    let alignment = analysis.alignment.alignment().unwrap();
    assert_eq!(alignment.protein_alignment, 0.0);
    assert_eq!(alignment.carbs_alignment, 50.4);
    assert_eq!(alignment.fat_alignment, 57.3);
    assert_eq!(alignment.overall_alignment, 35.9);
    assert_eq!(alignment.macros_actual.protein, 182.0);
    assert_eq!(alignment.macros_target.carbs, 40.0);

    assert_eq!(analysis.cost.category, CostCategory::Low);
    assert_eq!(analysis.cost.breakdown, TierCounts { low: 1, medium: 2, high: 0 });
    assert_eq!(analysis.cost.percentages.low, 33.3);
    assert_eq!(analysis.cost.percentages.medium, 66.7);
}

#[test]
fn test_empty_text() {
    let analysis = analyze_meal_plan("", "weight_loss", &BUILTIN_REFERENCE);

    assert_eq!(analysis.nutrition.totals, MacroProfile::default());
    assert_eq!(analysis.cost.category, CostCategory::Unknown);
    assert_eq!(analysis.cost.breakdown, TierCounts::default());
    // -300 modifier leaves a negative estimate with nothing to split
    assert_eq!(analysis.nutrition.daily.calories, -300);
    assert_eq!(analysis.alignment, AlignmentReport::NotApplicable);
}

#[test]
fn test_single_high_tier_food() {
    let analysis = analyze_meal_plan("Seared salmon", "maintenance", &BUILTIN_REFERENCE);

    assert_eq!(analysis.cost.breakdown, TierCounts { low: 0, medium: 0, high: 1 });
    assert_eq!(analysis.cost.category, CostCategory::High);
    assert_eq!(analysis.cost.percentages.low, 0.0);
    assert_eq!(analysis.cost.percentages.medium, 0.0);
    assert_eq!(analysis.cost.percentages.high, 100.0);
}

#[test]
fn test_maintenance_protein_alignment() {
    // 30 g protein in 2000 kcal = 6 % against a 30 % target
    let daily = DailyEstimate {
        protein: 30.0,
        carbs: 225.0,
        fat: 55.6,
        fiber: 20.0,
        calories: 2000,
    };
    let report = score_goal_alignment(&daily, "maintenance", &BUILTIN_REFERENCE);
    let alignment = report.alignment().unwrap();

    assert_eq!(alignment.macros_target.protein, 30.0);
    assert_eq!(alignment.macros_target.carbs, 45.0);
    assert_eq!(alignment.macros_target.fat, 25.0);
    assert_eq!(alignment.macros_actual.protein, 6.0);
    assert_eq!(alignment.protein_alignment, 52.0);
}

#[test]
fn test_week_plan_spreads_totals() {
    let plan = "Day 1: oats with banana\nDay 2: lentils with spinach\nDay 3: tofu";
    let analysis = analyze_meal_plan(plan, "Muscle Gain", &BUILTIN_REFERENCE);

    assert_eq!(analysis.nutrition.days, 7);
    let kcal: f64 = (381.0 + 89.0 + 116.0 + 23.0 + 76.0) / 7.0 + 300.0;
    assert_eq!(analysis.nutrition.daily.calories, kcal.round() as i64);
    assert!(analysis.alignment.is_applicable());
    assert_eq!(analysis.cost.category, CostCategory::Low);
}

#[test]
fn test_prose_multi_word_foods_do_not_match() {
    let analysis = analyze_meal_plan(
        "Greek yogurt with sweet potato and brown rice",
        "maintenance",
        &BUILTIN_REFERENCE,
    );
    assert!(analysis.matches.is_empty());
    assert_eq!(analysis.cost.category, CostCategory::Unknown);
}

#[test]
fn test_tier_percentages_round_ties_to_even() {
    // 1 of 16 is exactly 6.25 %, 15 of 16 exactly 93.75 %
    let plan = format!("salmon {}", "tofu ".repeat(15));
    let analysis = analyze_meal_plan(&plan, "maintenance", &BUILTIN_REFERENCE);

    assert_eq!(analysis.cost.breakdown, TierCounts { low: 15, medium: 0, high: 1 });
    assert_eq!(analysis.cost.percentages.high, 6.2);
    assert_eq!(analysis.cost.percentages.low, 93.8);
    assert_eq!(analysis.cost.percentages.medium, 0.0);
    assert_float_absolute_eq!(analysis.cost.percentages.sum(), 100.0, 1e-9);
}

#[test]
fn test_padded_goal_name_is_unknown() {
    let analysis = analyze_meal_plan("banana", " weight loss ", &BUILTIN_REFERENCE);

    assert_eq!(analysis.goal, "_weight_loss_");
    // No -300 modifier for an unknown goal
    assert_eq!(analysis.nutrition.daily.calories, 89);
    assert_eq!(analysis.alignment, AlignmentReport::NotApplicable);

    let unpadded = analyze_meal_plan("banana", "weight loss", &BUILTIN_REFERENCE);
    assert_eq!(unpadded.goal, "weight_loss");
    assert_eq!(unpadded.nutrition.daily.calories, -211);
}
