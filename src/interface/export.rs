use std::path::Path;

use crate::error::Result;
use crate::models::PlanAnalysis;

const CSV_HEADER: [&str; 14] = [
    "plan",
    "goal",
    "days",
    "matched_foods",
    "daily_calories",
    "daily_protein_g",
    "daily_carbs_g",
    "daily_fat_g",
    "daily_fiber_g",
    "overall_alignment",
    "cost_category",
    "low_pct",
    "medium_pct",
    "high_pct",
];

fn csv_record(name: &str, analysis: &PlanAnalysis) -> Vec<String> {
    let daily = &analysis.nutrition.daily;
    let cost = &analysis.cost;
    vec![
        name.to_string(),
        analysis.goal.clone(),
        analysis.nutrition.days.to_string(),
        analysis.total_matches().to_string(),
        daily.calories.to_string(),
        format!("{:.1}", daily.protein),
        format!("{:.1}", daily.carbs),
        format!("{:.1}", daily.fat),
        format!("{:.1}", daily.fiber),
        analysis
            .alignment
            .overall()
            .map(|v| format!("{:.1}", v))
            .unwrap_or_else(|| "N/A".to_string()),
        cost.category.label().to_string(),
        format!("{:.1}", cost.percentages.low),
        format!("{:.1}", cost.percentages.medium),
        format!("{:.1}", cost.percentages.high),
    ]
}

/// Write one summary row per named analysis to a CSV file.
pub fn write_csv(analyses: &[(String, PlanAnalysis)], path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record(CSV_HEADER)?;
    for (name, analysis) in analyses {
        wtr.write_record(csv_record(name, analysis))?;
    }

    wtr.flush()?;
    Ok(())
}

/// Pretty JSON for an analysis.
pub fn to_json(analysis: &PlanAnalysis) -> Result<String> {
    Ok(serde_json::to_string_pretty(analysis)?)
}
