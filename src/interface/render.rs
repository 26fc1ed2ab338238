use std::fmt;

use crate::models::{AlignmentReport, PlanAnalysis};
use crate::reference::NutritionReference;

/// Plain-text report view of an analysis.
pub struct AnalysisReport<'a>(pub &'a PlanAnalysis);

impl fmt::Display for AnalysisReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let analysis = self.0;
        let tally = &analysis.nutrition;

        writeln!(f, "=== Nutrition Analysis ({}) ===", analysis.goal)?;
        writeln!(f)?;

        if analysis.matches.is_empty() {
            writeln!(f, "No known foods found in the plan.")?;
        } else {
            // Find max food key length for alignment
            let width = analysis.matches.keys().map(|k| k.len()).max().unwrap_or(10);
            writeln!(f, "Matched foods:")?;
            for (key, count) in &analysis.matches {
                writeln!(f, "  {:<width$}  x{}", key, count, width = width)?;
            }
        }

        writeln!(f)?;
        writeln!(f, "--- Daily estimate ({} day plan) ---", tally.days)?;
        writeln!(f, "Calories: {} kcal", tally.daily.calories)?;
        writeln!(f, "Protein:  {:.1} g", tally.daily.protein)?;
        writeln!(f, "Carbs:    {:.1} g", tally.daily.carbs)?;
        writeln!(f, "Fat:      {:.1} g", tally.daily.fat)?;
        writeln!(f, "Fiber:    {:.1} g", tally.daily.fiber)?;

        writeln!(f)?;
        writeln!(f, "--- Goal alignment ---")?;
        match &analysis.alignment {
            AlignmentReport::Aligned(a) => {
                writeln!(f, "{:<8} {:>8} {:>8} {:>8}", "", "actual", "target", "score")?;
                for (name, actual, target, score) in [
                    ("Protein", a.macros_actual.protein, a.macros_target.protein, a.protein_alignment),
                    ("Carbs", a.macros_actual.carbs, a.macros_target.carbs, a.carbs_alignment),
                    ("Fat", a.macros_actual.fat, a.macros_target.fat, a.fat_alignment),
                ] {
                    writeln!(f, "{:<8} {:>7.1}% {:>7.1}% {:>8.1}", name, actual, target, score)?;
                }
                writeln!(f, "Overall alignment: {:.1}%", a.overall_alignment)?;
            }
            AlignmentReport::NotApplicable => {
                writeln!(f, "Overall alignment: N/A")?;
            }
        }

        let cost = &analysis.cost;
        writeln!(f)?;
        writeln!(f, "--- Cost ---")?;
        writeln!(f, "Category: {}", cost.category)?;
        writeln!(
            f,
            "Low: {} ({:.1}%)  Medium: {} ({:.1}%)  High: {} ({:.1}%)",
            cost.breakdown.low,
            cost.percentages.low,
            cost.breakdown.medium,
            cost.percentages.medium,
            cost.breakdown.high,
            cost.percentages.high
        )
    }
}

/// Format an analysis as a plain-text report.
pub fn format_analysis(analysis: &PlanAnalysis) -> String {
    AnalysisReport(analysis).to_string()
}

/// Display an analysis report.
pub fn display_analysis(analysis: &PlanAnalysis) {
    println!();
    print!("{}", AnalysisReport(analysis));
    println!();
}

/// Display the reference food table.
pub fn display_food_table(reference: &NutritionReference) {
    let width = reference.foods().map(|f| f.key.len()).max().unwrap_or(10);

    println!();
    println!("=== Foods ({} items) ===", reference.food_count());
    println!();

    for food in reference.foods() {
        println!(
            "  {:<width$}  {:>5.0} kcal  P:{:>5.1} C:{:>5.1} F:{:>5.1} Fi:{:>5.1}  {}",
            food.key,
            food.macros.calories,
            food.macros.protein,
            food.macros.carbs,
            food.macros.fat,
            food.macros.fiber,
            food.cost,
            width = width
        );
    }

    println!();
}

/// Display the goal table.
pub fn display_goals(reference: &NutritionReference) {
    println!();
    println!("=== Goals ({} items) ===", reference.goal_count());
    println!();

    for goal in reference.goals() {
        let focus = goal
            .focus
            .as_deref()
            .map(|f| format!("  focus: {}", f))
            .unwrap_or_default();
        println!(
            "  {:<22} P {:>4.0}%  C {:>4.0}%  F {:>4.0}%  {:+} kcal{}",
            goal.key, goal.protein_pct, goal.carbs_pct, goal.fat_pct, goal.calorie_modifier, focus
        );
    }

    println!();
}
