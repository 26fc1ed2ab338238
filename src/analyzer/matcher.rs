use crate::analyzer::constants::{DAY_MARKER, SINGLE_DAY_PLAN_DAYS, WEEK_PLAN_DAYS};
use crate::models::MatchCounts;
use crate::reference::NutritionReference;

/// Count non-overlapping literal occurrences of `needle` in `haystack`.
///
/// An empty needle never matches.
pub fn count_occurrences(haystack: &str, needle: &str) -> u32 {
    if needle.is_empty() {
        return 0;
    }
    haystack.matches(needle).count() as u32
}

/// Count every reference food key found in the plan text.
///
/// Matching is case-insensitive literal substring search only: `chicken_breast` does not
/// match "chicken breast", and "eggs" inside "eggshell" does match. Only positive counts
/// are returned.
pub fn count_food_matches(plan_text: &str, reference: &NutritionReference) -> MatchCounts {
    let text = plan_text.to_lowercase();
    reference
        .foods()
        .filter_map(|food| {
            let count = count_occurrences(&text, &food.key);
            (count > 0).then(|| (food.key.clone(), count))
        })
        .collect()
}

/// Number of days the plan is assumed to cover: a week if it mentions the day marker
/// anywhere, otherwise a single day. Never zero.
pub fn plan_days(plan_text: &str) -> u32 {
    if plan_text.to_lowercase().contains(DAY_MARKER) {
        WEEK_PLAN_DAYS
    } else {
        SINGLE_DAY_PLAN_DAYS
    }
}
