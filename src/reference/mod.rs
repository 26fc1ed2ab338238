mod builtin;
mod persistence;

use std::collections::BTreeMap;
use std::sync::LazyLock;

use log::debug;
use serde::{Deserialize, Serialize};
use strsim::jaro_winkler;

use crate::error::{AnalyzerError, Result};
use crate::models::{normalize_goal_key, FoodRecord, GoalProfile, MedicalCondition};

pub use persistence::{load_reference, save_reference};

/// Minimum Jaro-Winkler similarity for a goal name suggestion.
pub const GOAL_SUGGESTION_THRESHOLD: f64 = 0.7;

/// Process-wide built-in dataset, built on first use and never mutated.
pub static BUILTIN_REFERENCE: LazyLock<NutritionReference> = LazyLock::new(NutritionReference::builtin);

/// Serialized shape of a reference dataset.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReferenceData {
    pub foods: Vec<FoodRecord>,
    pub goals: Vec<GoalProfile>,
    #[serde(default)]
    pub medical_conditions: Vec<MedicalCondition>,
    #[serde(default)]
    pub regions: BTreeMap<String, Vec<String>>,
}

/// Immutable lookup tables for foods, goals, medical conditions and regional foods.
///
/// All maps are ordered so that iteration (and therefore floating point summation order)
/// is the same on every run.
#[derive(Debug, Clone, PartialEq)]
pub struct NutritionReference {
    foods: BTreeMap<String, FoodRecord>,
    goals: BTreeMap<String, GoalProfile>,
    conditions: BTreeMap<String, MedicalCondition>,
    regions: BTreeMap<String, Vec<String>>,
}

impl NutritionReference {
    /// Build a reference from serialized data, validating every entry.
    ///
    /// Keys are normalized; a duplicate key keeps the last entry.
    pub fn from_data(data: ReferenceData) -> Result<Self> {
        let mut foods = BTreeMap::new();
        for mut food in data.foods {
            if !food.is_valid() {
                return Err(AnalyzerError::InvalidReference(format!(
                    "food '{}' has an empty key or negative values",
                    food.key
                )));
            }
            food.key = food.key.trim().to_lowercase();
            foods.insert(food.key.clone(), food);
        }

        let mut goals = BTreeMap::new();
        for mut goal in data.goals {
            goal.key = normalize_goal_key(&goal.key);
            if !goal.is_valid() {
                return Err(AnalyzerError::InvalidReference(format!(
                    "goal '{}' has an empty key or percentages outside 0-100",
                    goal.key
                )));
            }
            goals.insert(goal.key.clone(), goal);
        }

        let mut conditions = BTreeMap::new();
        for mut condition in data.medical_conditions {
            condition.key = normalize_goal_key(&condition.key);
            if condition.key.is_empty() {
                return Err(AnalyzerError::InvalidReference(
                    "medical condition with an empty key".to_string(),
                ));
            }
            conditions.insert(condition.key.clone(), condition);
        }

        debug!(
            "Loaded reference: {} foods, {} goals, {} conditions, {} regions",
            foods.len(),
            goals.len(),
            conditions.len(),
            data.regions.len()
        );

        Ok(Self {
            foods,
            goals,
            conditions,
            regions: data.regions,
        })
    }

    /// Convert back to the serialized shape.
    pub fn to_data(&self) -> ReferenceData {
        ReferenceData {
            foods: self.foods.values().cloned().collect(),
            goals: self.goals.values().cloned().collect(),
            medical_conditions: self.conditions.values().cloned().collect(),
            regions: self.regions.clone(),
        }
    }

    /// Get a food by its key (case-insensitive).
    pub fn food(&self, key: &str) -> Option<&FoodRecord> {
        self.foods.get(&key.to_lowercase())
    }

    /// All foods in key order.
    pub fn foods(&self) -> impl Iterator<Item = &FoodRecord> {
        self.foods.values()
    }

    /// Get a goal by name; the name is normalized first.
    pub fn goal(&self, name: &str) -> Option<&GoalProfile> {
        self.goals.get(&normalize_goal_key(name))
    }

    /// All goals in key order.
    pub fn goals(&self) -> impl Iterator<Item = &GoalProfile> {
        self.goals.values()
    }

    /// Calorie offset for a goal, 0 when the goal is unknown or has none.
    pub fn calorie_modifier(&self, goal: &str) -> i32 {
        self.goal(goal).map(|g| g.calorie_modifier).unwrap_or(0)
    }

    /// Closest known goal key to an unrecognized name, if any is similar enough.
    pub fn closest_goal(&self, name: &str) -> Option<&str> {
        let wanted = normalize_goal_key(name);
        self.goals
            .keys()
            .map(|key| (key.as_str(), jaro_winkler(key, &wanted)))
            .filter(|(_, score)| *score > GOAL_SUGGESTION_THRESHOLD)
            .max_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal))
            .map(|(key, _)| key)
    }

    /// Get a medical condition by name (normalized like goal names).
    pub fn condition(&self, name: &str) -> Option<&MedicalCondition> {
        self.conditions.get(&normalize_goal_key(name))
    }

    pub fn conditions(&self) -> impl Iterator<Item = &MedicalCondition> {
        self.conditions.values()
    }

    /// Foods commonly available in a region (case-insensitive). Unknown regions have none.
    pub fn region_foods(&self, region: &str) -> &[String] {
        let wanted = region.trim().to_lowercase();
        self.regions
            .iter()
            .find(|(name, _)| name.to_lowercase() == wanted)
            .map(|(_, foods)| foods.as_slice())
            .unwrap_or(&[])
    }

    /// Region names in order.
    pub fn regions(&self) -> impl Iterator<Item = &str> {
        self.regions.keys().map(String::as_str)
    }

    pub fn food_count(&self) -> usize {
        self.foods.len()
    }

    pub fn goal_count(&self) -> usize {
        self.goals.len()
    }
}
