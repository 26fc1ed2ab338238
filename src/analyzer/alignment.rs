use crate::analyzer::constants::*;
use crate::models::{AlignmentReport, DailyEstimate, GoalAlignment, GoalProfile, MacroSplit};
use crate::reference::NutritionReference;

/// Share of daily calories contributed by `grams` of a macro with the given kcal/g factor.
///
/// Callers guarantee `daily_calories > 0`.
#[inline]
pub fn macro_percentage(grams: f64, kcal_per_gram: f64, daily_calories: f64) -> f64 {
    grams * kcal_per_gram / daily_calories * 100.0
}

/// Closeness of an actual percentage to its target, from 0 to 100.
///
/// Loses two points per percentage point of deviation: 100 at an exact match, 0 at a
/// deviation of 50 points or more.
#[inline]
pub fn macro_alignment(actual_pct: f64, target_pct: f64) -> f64 {
    let penalty = ((actual_pct - target_pct).abs() * ALIGNMENT_PENALTY_PER_POINT).min(ALIGNMENT_MAX);
    (ALIGNMENT_MAX - penalty).clamp(ALIGNMENT_MIN, ALIGNMENT_MAX)
}

/// Realized protein / carbs / fat split of a daily estimate, unrounded.
pub fn actual_macro_split(daily: &DailyEstimate) -> Option<MacroSplit> {
    if daily.calories <= 0 {
        return None;
    }
    let calories = daily.calories as f64;
    Some(MacroSplit {
        protein: macro_percentage(daily.protein, PROTEIN_KCAL_PER_GRAM, calories),
        carbs: macro_percentage(daily.carbs, CARBS_KCAL_PER_GRAM, calories),
        fat: macro_percentage(daily.fat, FAT_KCAL_PER_GRAM, calories),
    })
}

/// Score a realized split against a goal profile.
pub fn align_with_goal(actual: &MacroSplit, goal: &GoalProfile) -> GoalAlignment {
    let protein = macro_alignment(actual.protein, goal.protein_pct);
    let carbs = macro_alignment(actual.carbs, goal.carbs_pct);
    let fat = macro_alignment(actual.fat, goal.fat_pct);
    let overall = (protein + carbs + fat) / 3.0;

    GoalAlignment {
        goal: goal.key.clone(),
        protein_alignment: round_to(protein, REPORT_DECIMALS),
        carbs_alignment: round_to(carbs, REPORT_DECIMALS),
        fat_alignment: round_to(fat, REPORT_DECIMALS),
        overall_alignment: round_to(overall, REPORT_DECIMALS),
        macros_actual: MacroSplit {
            protein: round_to(actual.protein, REPORT_DECIMALS),
            carbs: round_to(actual.carbs, REPORT_DECIMALS),
            fat: round_to(actual.fat, REPORT_DECIMALS),
        },
        macros_target: MacroSplit {
            protein: goal.protein_pct,
            carbs: goal.carbs_pct,
            fat: goal.fat_pct,
        },
    }
}

/// Compare a daily estimate with the named goal.
///
/// Returns `NotApplicable` when the goal is unknown or the estimate has no positive
/// calories to split.
pub fn score_goal_alignment(
    daily: &DailyEstimate,
    goal: &str,
    reference: &NutritionReference,
) -> AlignmentReport {
    let Some(profile) = reference.goal(goal) else {
        return AlignmentReport::NotApplicable;
    };
    match actual_macro_split(daily) {
        Some(actual) => AlignmentReport::Aligned(align_with_goal(&actual, profile)),
        None => AlignmentReport::NotApplicable,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reference::BUILTIN_REFERENCE;

    fn daily(protein: f64, carbs: f64, fat: f64, calories: i64) -> DailyEstimate {
        DailyEstimate {
            protein,
            carbs,
            fat,
            fiber: 0.0,
            calories,
        }
    }

    #[test]
    fn test_macro_alignment_bounds() {
        assert_eq!(macro_alignment(30.0, 30.0), 100.0);
        assert_eq!(macro_alignment(6.0, 30.0), 52.0);
        assert_eq!(macro_alignment(80.0, 30.0), 0.0);
        assert_eq!(macro_alignment(500.0, 30.0), 0.0);
    }

    #[test]
    fn test_macro_percentage() {
        assert!((macro_percentage(30.0, 4.0, 2000.0) - 6.0).abs() < 1e-9);
        assert!((macro_percentage(50.0, 9.0, 1800.0) - 25.0).abs() < 1e-9);
    }

    #[test]
    fn test_maintenance_protein_at_six_percent() {
        // 30 g protein * 4 / 2000 kcal = 6 %
        let report = score_goal_alignment(
            &daily(30.0, 225.0, 55.6, 2000),
            "maintenance",
            &BUILTIN_REFERENCE,
        );
        let alignment = report.alignment().unwrap();
        assert_eq!(alignment.protein_alignment, 52.0);
        assert_eq!(alignment.macros_actual.protein, 6.0);
        assert_eq!(alignment.macros_target.protein, 30.0);
    }

    #[test]
    fn test_perfect_split_scores_100() {
        // 150 g * 4 = 600 (30 %), 225 g * 4 = 900 (45 %), 500/9 g * 9 = 500 (25 %)
        let report = score_goal_alignment(
            &daily(150.0, 225.0, 500.0 / 9.0, 2000),
            "Maintenance",
            &BUILTIN_REFERENCE,
        );
        assert_eq!(report.overall(), Some(100.0));
    }

    #[test]
    fn test_overall_is_mean_of_unrounded_scores() {
        let actual = MacroSplit {
            protein: 30.02,
            carbs: 45.02,
            fat: 25.02,
        };
        let goal = BUILTIN_REFERENCE.goal("maintenance").unwrap();
        let alignment = align_with_goal(&actual, goal);
        // each score is 99.96 -> overall 99.96 -> 100.0
        assert_eq!(alignment.protein_alignment, 100.0);
        assert_eq!(alignment.overall_alignment, 100.0);
    }

    #[test]
    fn test_unknown_goal_is_not_applicable() {
        let report = score_goal_alignment(&daily(100.0, 100.0, 50.0, 2000), "keto", &BUILTIN_REFERENCE);
        assert_eq!(report, AlignmentReport::NotApplicable);
    }

    #[test]
    fn test_zero_calories_is_not_applicable() {
        let report = score_goal_alignment(&daily(0.0, 0.0, 0.0, 0), "maintenance", &BUILTIN_REFERENCE);
        assert!(!report.is_applicable());
    }

    #[test]
    fn test_negative_calories_is_not_applicable() {
        let report = score_goal_alignment(&daily(2.9, 3.6, 0.4, -277), "weight_loss", &BUILTIN_REFERENCE);
        assert!(!report.is_applicable());
    }
}
