use log::debug;

use crate::analyzer::constants::{round_to, REPORT_DECIMALS};
use crate::models::{DailyEstimate, MacroProfile, MatchCounts, NutrientTally};
use crate::reference::NutritionReference;

/// Sum the macro profiles of all matched foods, weighted by occurrence count.
///
/// Keys missing from the reference are skipped.
pub fn sum_matched_nutrients(counts: &MatchCounts, reference: &NutritionReference) -> MacroProfile {
    let mut totals = MacroProfile::default();
    for (key, count) in counts {
        match reference.food(key) {
            Some(food) => totals += food.macros.scaled(*count),
            None => debug!("Skipping unknown food key '{}'", key),
        }
    }
    totals
}

/// Turn absolute totals into a per-day estimate.
///
/// Grams are divided by `days` and rounded to one decimal. Calories are divided by `days`,
/// offset by `calorie_modifier` and rounded to a whole number without clamping, so a large
/// negative modifier can produce a negative estimate. `days` is treated as at least 1.
pub fn daily_estimate(totals: &MacroProfile, days: u32, calorie_modifier: i32) -> DailyEstimate {
    let per_day = totals.per_day(days);
    DailyEstimate {
        protein: round_to(per_day.protein, REPORT_DECIMALS),
        carbs: round_to(per_day.carbs, REPORT_DECIMALS),
        fat: round_to(per_day.fat, REPORT_DECIMALS),
        fiber: round_to(per_day.fiber, REPORT_DECIMALS),
        calories: (per_day.calories + calorie_modifier as f64).round_ties_even() as i64,
    }
}

/// Aggregate match counts into absolute totals and a daily estimate.
pub fn aggregate_nutrients(
    counts: &MatchCounts,
    reference: &NutritionReference,
    days: u32,
    calorie_modifier: i32,
) -> NutrientTally {
    let days = days.max(1);
    let totals = sum_matched_nutrients(counts, reference);
    let daily = daily_estimate(&totals, days, calorie_modifier);

    NutrientTally {
        totals,
        days,
        daily,
    }
}
