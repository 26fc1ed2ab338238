use serde::{Deserialize, Serialize};

pub const DEFAULT_LOCATION: &str = "North America";
pub const DEFAULT_GOAL: &str = "maintenance";
pub const DEFAULT_BUDGET: &str = "Medium";

/// What the user told us about themselves when requesting a meal plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserProfile {
    pub location: String,
    pub age: Option<u32>,
    pub diet_type: Option<String>,
    pub goal: String,
    pub budget: String,
    pub taste_preferences: Option<String>,
    pub medical_conditions: Vec<String>,
}

impl Default for UserProfile {
    fn default() -> Self {
        Self {
            location: DEFAULT_LOCATION.to_string(),
            age: None,
            diet_type: None,
            goal: DEFAULT_GOAL.to_string(),
            budget: DEFAULT_BUDGET.to_string(),
            taste_preferences: None,
            medical_conditions: Vec::new(),
        }
    }
}
