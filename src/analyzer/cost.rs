use crate::analyzer::constants::{round_to, REPORT_DECIMALS};
use crate::models::{CostCategory, CostReport, CostTier, MatchCounts, TierCounts, TierPercentages};
use crate::reference::NutritionReference;

/// Categories indexed by truncated mean tier score minus one.
const CATEGORY_BY_SCORE: [CostCategory; 3] = [CostCategory::Low, CostCategory::Medium, CostCategory::High];

/// Map a mean tier score (1.0 to 3.0) to a category.
///
/// The mean is truncated, not rounded: [1,2) is Low, [2,3) is Medium and only exactly 3.0 is
/// High, so a plan averaging 2.99 is Medium.
pub fn cost_category_for_mean(mean: f64) -> CostCategory {
    let position = mean.trunc() as usize;
    let index = position.saturating_sub(1).min(CATEGORY_BY_SCORE.len() - 1);
    CATEGORY_BY_SCORE[index]
}

/// Occurrence-weighted count of each cost tier among the matched foods.
pub fn tier_breakdown(counts: &MatchCounts, reference: &NutritionReference) -> TierCounts {
    let mut breakdown = TierCounts::default();
    for (key, count) in counts {
        if let Some(food) = reference.food(key) {
            breakdown.add(food.cost, *count);
        }
    }
    breakdown
}

/// Mean tier score of a breakdown, `None` when it is empty.
pub fn mean_tier_score(breakdown: &TierCounts) -> Option<f64> {
    let total = breakdown.total();
    if total == 0 {
        return None;
    }
    let weighted: u32 = CostTier::ALL
        .iter()
        .map(|tier| tier.score() * breakdown.get(*tier))
        .sum();
    Some(weighted as f64 / total as f64)
}

/// Per-tier share of the total count, rounded to one decimal. All zero for an empty breakdown.
pub fn tier_percentages(breakdown: &TierCounts) -> TierPercentages {
    let total = breakdown.total();
    if total == 0 {
        return TierPercentages::default();
    }
    let pct = |n: u32| round_to(n as f64 / total as f64 * 100.0, REPORT_DECIMALS);
    TierPercentages {
        low: pct(breakdown.low),
        medium: pct(breakdown.medium),
        high: pct(breakdown.high),
    }
}

/// Classify the plan's overall cost from its matched foods.
pub fn estimate_cost(counts: &MatchCounts, reference: &NutritionReference) -> CostReport {
    let breakdown = tier_breakdown(counts, reference);
    match mean_tier_score(&breakdown) {
        Some(mean) => CostReport {
            category: cost_category_for_mean(mean),
            breakdown,
            percentages: tier_percentages(&breakdown),
        },
        None => CostReport::unknown(),
    }
}
