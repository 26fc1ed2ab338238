pub mod analyzer;
pub mod cli;
pub mod error;
pub mod generation;
pub mod interface;
pub mod models;
pub mod reference;

pub use analyzer::{analyze_meal_plan, MealPlanAnalyzer};
pub use error::{AnalyzerError, Result};
pub use models::{AlignmentReport, CostReport, NutrientTally, PlanAnalysis};
pub use reference::{NutritionReference, BUILTIN_REFERENCE};
