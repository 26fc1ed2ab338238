use serde::{Deserialize, Serialize};

/// Canonical lookup key for a goal name: lowercased, spaces replaced by underscores.
///
/// "Weight Loss" and "weight_loss" both normalize to `weight_loss`. Every goal lookup goes
/// through this function. Surrounding whitespace is kept, so " weight loss " is not a known goal.
pub fn normalize_goal_key(goal: &str) -> String {
    goal.to_lowercase().replace(' ', "_")
}

/// Target macro split for a named dietary goal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoalProfile {
    pub key: String,

    /// Target share of daily calories from protein, in percent.
    pub protein_pct: f64,

    /// Target share of daily calories from carbohydrates, in percent.
    pub carbs_pct: f64,

    /// Target share of daily calories from fat, in percent.
    pub fat_pct: f64,

    /// Signed kcal offset applied to the daily calorie estimate.
    #[serde(default)]
    pub calorie_modifier: i32,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub focus: Option<String>,
}

impl GoalProfile {
    pub fn new(key: &str, protein_pct: f64, carbs_pct: f64, fat_pct: f64) -> Self {
        Self {
            key: normalize_goal_key(key),
            protein_pct,
            carbs_pct,
            fat_pct,
            calorie_modifier: 0,
            focus: None,
        }
    }

    pub fn with_calorie_modifier(mut self, modifier: i32) -> Self {
        self.calorie_modifier = modifier;
        self
    }

    pub fn with_focus(mut self, focus: &str) -> Self {
        self.focus = Some(focus.to_string());
        self
    }

    /// Percentages each within 0..=100.
    pub fn is_valid(&self) -> bool {
        !self.key.is_empty()
            && [self.protein_pct, self.carbs_pct, self.fat_pct]
                .into_iter()
                .all(|p| (0.0..=100.0).contains(&p))
    }
}

/// Foods to avoid and prefer for a medical condition. Used only for prompt guidance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MedicalCondition {
    pub key: String,
    pub avoid: Vec<String>,
    pub prefer: Vec<String>,
}

impl MedicalCondition {
    pub fn new(key: &str, avoid: &[&str], prefer: &[&str]) -> Self {
        Self {
            key: key.to_lowercase(),
            avoid: avoid.iter().map(|s| s.to_string()).collect(),
            prefer: prefer.iter().map(|s| s.to_string()).collect(),
        }
    }
}
