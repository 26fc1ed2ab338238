use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::models::{CostTier, MacroProfile};

/// Occurrence count per matched food key. Only keys with a positive count are present.
pub type MatchCounts = BTreeMap<String, u32>;

/// Per-day nutrient estimate derived from a plan's absolute totals.
///
/// Grams are rounded to one decimal; calories are rounded to a whole number after the goal's
/// calorie modifier is applied and may be negative.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct DailyEstimate {
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
    pub fiber: f64,
    pub calories: i64,
}

/// Absolute nutrient totals for a whole plan plus the derived daily estimate.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NutrientTally {
    pub totals: MacroProfile,
    pub days: u32,
    pub daily: DailyEstimate,
}

/// Protein / carbs / fat percentages of daily calories.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MacroSplit {
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
}

/// Alignment scores for a goal that could be evaluated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoalAlignment {
    pub goal: String,
    pub protein_alignment: f64,
    pub carbs_alignment: f64,
    pub fat_alignment: f64,
    pub overall_alignment: f64,
    pub macros_actual: MacroSplit,
    pub macros_target: MacroSplit,
}

/// Outcome of goal scoring: either scores or an explicit "not applicable" marker
/// (unknown goal, or no positive daily calories to split).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum AlignmentReport {
    Aligned(GoalAlignment),
    NotApplicable,
}

impl AlignmentReport {
    pub fn is_applicable(&self) -> bool {
        matches!(self, AlignmentReport::Aligned(_))
    }

    pub fn alignment(&self) -> Option<&GoalAlignment> {
        match self {
            AlignmentReport::Aligned(alignment) => Some(alignment),
            AlignmentReport::NotApplicable => None,
        }
    }

    /// Overall score, if applicable.
    pub fn overall(&self) -> Option<f64> {
        self.alignment().map(|a| a.overall_alignment)
    }
}

/// Overall price bucket of a plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CostCategory {
    Unknown,
    Low,
    Medium,
    High,
}

impl CostCategory {
    pub fn label(self) -> &'static str {
        match self {
            CostCategory::Unknown => "Unknown",
            CostCategory::Low => "Low",
            CostCategory::Medium => "Medium",
            CostCategory::High => "High",
        }
    }
}

impl fmt::Display for CostCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Weighted occurrence count per cost tier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierCounts {
    pub low: u32,
    pub medium: u32,
    pub high: u32,
}

impl TierCounts {
    pub fn add(&mut self, tier: CostTier, count: u32) {
        match tier {
            CostTier::Low => self.low += count,
            CostTier::Medium => self.medium += count,
            CostTier::High => self.high += count,
        }
    }

    pub fn get(&self, tier: CostTier) -> u32 {
        match tier {
            CostTier::Low => self.low,
            CostTier::Medium => self.medium,
            CostTier::High => self.high,
        }
    }

    pub fn total(&self) -> u32 {
        self.low + self.medium + self.high
    }
}

/// Share of the weighted count per tier, in percent, rounded to one decimal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct TierPercentages {
    pub low: f64,
    pub medium: f64,
    pub high: f64,
}

impl TierPercentages {
    pub fn sum(&self) -> f64 {
        self.low + self.medium + self.high
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostReport {
    pub category: CostCategory,
    pub breakdown: TierCounts,
    pub percentages: TierPercentages,
}

impl CostReport {
    /// Report for a plan with no matched foods.
    pub fn unknown() -> Self {
        Self {
            category: CostCategory::Unknown,
            breakdown: TierCounts::default(),
            percentages: TierPercentages::default(),
        }
    }
}

/// Everything derived from one plan text and goal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanAnalysis {
    pub goal: String,
    pub matches: MatchCounts,
    pub nutrition: NutrientTally,
    pub alignment: AlignmentReport,
    pub cost: CostReport,
}

impl PlanAnalysis {
    /// Total number of food occurrences found in the plan.
    pub fn total_matches(&self) -> u32 {
        self.matches.values().sum()
    }
}
