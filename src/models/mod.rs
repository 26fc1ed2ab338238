mod food;
mod goal;
mod profile;
mod report;

pub use food::{CostTier, FoodRecord, MacroProfile};
pub use goal::{normalize_goal_key, GoalProfile, MedicalCondition};
pub use profile::{UserProfile, DEFAULT_BUDGET, DEFAULT_GOAL, DEFAULT_LOCATION};
pub use report::{
    AlignmentReport, CostCategory, CostReport, DailyEstimate, GoalAlignment, MacroSplit,
    MatchCounts, NutrientTally, PlanAnalysis, TierCounts, TierPercentages,
};
