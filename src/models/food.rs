use std::fmt;
use std::ops::{Add, AddAssign};

use serde::{Deserialize, Serialize};

/// Macronutrient profile of one serving of a food.
///
/// All values are non-negative: grams for protein, carbs, fat and fiber, kcal for calories.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MacroProfile {
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
    #[serde(default)]
    pub fiber: f64,
    pub calories: f64,
}

impl MacroProfile {
    pub const fn new(protein: f64, carbs: f64, fat: f64, fiber: f64, calories: f64) -> Self {
        Self {
            protein,
            carbs,
            fat,
            fiber,
            calories,
        }
    }

    /// Profile multiplied by an occurrence count.
    #[inline]
    pub fn scaled(&self, count: u32) -> Self {
        let n = count as f64;
        Self {
            protein: self.protein * n,
            carbs: self.carbs * n,
            fat: self.fat * n,
            fiber: self.fiber * n,
            calories: self.calories * n,
        }
    }

    /// Profile divided evenly across `days` (treated as at least 1).
    #[inline]
    pub fn per_day(&self, days: u32) -> Self {
        let d = days.max(1) as f64;
        Self {
            protein: self.protein / d,
            carbs: self.carbs / d,
            fat: self.fat / d,
            fiber: self.fiber / d,
            calories: self.calories / d,
        }
    }

    /// True when every field is finite and non-negative.
    pub fn is_valid(&self) -> bool {
        [self.protein, self.carbs, self.fat, self.fiber, self.calories]
            .into_iter()
            .all(|v| v.is_finite() && v >= 0.0)
    }
}

impl Add for MacroProfile {
    type Output = MacroProfile;

    fn add(self, other: MacroProfile) -> MacroProfile {
        MacroProfile {
            protein: self.protein + other.protein,
            carbs: self.carbs + other.carbs,
            fat: self.fat + other.fat,
            fiber: self.fiber + other.fiber,
            calories: self.calories + other.calories,
        }
    }
}

impl AddAssign for MacroProfile {
    fn add_assign(&mut self, other: MacroProfile) {
        *self = *self + other;
    }
}

/// Price bucket of a food item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CostTier {
    Low,
    Medium,
    High,
}

impl CostTier {
    pub const ALL: [CostTier; 3] = [CostTier::Low, CostTier::Medium, CostTier::High];

    /// Numeric score used when averaging tiers: low=1, medium=2, high=3.
    #[inline]
    pub fn score(self) -> u32 {
        match self {
            CostTier::Low => 1,
            CostTier::Medium => 2,
            CostTier::High => 3,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            CostTier::Low => "low",
            CostTier::Medium => "medium",
            CostTier::High => "high",
        }
    }
}

impl fmt::Display for CostTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A reference food: the literal key searched for in plan text, its macros and cost tier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodRecord {
    pub key: String,

    #[serde(flatten)]
    pub macros: MacroProfile,

    pub cost: CostTier,
}

impl FoodRecord {
    pub fn new(key: &str, macros: MacroProfile, cost: CostTier) -> Self {
        Self {
            key: key.to_lowercase(),
            macros,
            cost,
        }
    }

    /// Basic validation: non-empty key and non-negative macros.
    pub fn is_valid(&self) -> bool {
        !self.key.trim().is_empty() && self.macros.is_valid()
    }

    /// Debug string for logging.
    pub fn debug_string(&self) -> String {
        format!(
            "{}: {} cal, P:{} C:{} F:{} Fi:{}, cost:{}",
            self.key,
            self.macros.calories,
            self.macros.protein,
            self.macros.carbs,
            self.macros.fat,
            self.macros.fiber,
            self.cost
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_food() -> FoodRecord {
        FoodRecord::new(
            "Chicken_Breast",
            MacroProfile::new(31.0, 0.0, 3.6, 0.0, 165.0),
            CostTier::Medium,
        )
    }

    #[test]
    fn test_key_is_lowercased() {
        assert_eq!(sample_food().key, "chicken_breast");
    }

    #[test]
    fn test_scaled() {
        let scaled = sample_food().macros.scaled(3);
        assert!((scaled.protein - 93.0).abs() < 0.001);
        assert!((scaled.fat - 10.8).abs() < 0.001);
        assert!((scaled.calories - 495.0).abs() < 0.001);
    }

    #[test]
    fn test_scaled_by_zero_is_empty() {
        assert_eq!(sample_food().macros.scaled(0), MacroProfile::default());
    }

    #[test]
    fn test_add_profiles() {
        let mut total = MacroProfile::default();
        total += MacroProfile::new(1.0, 2.0, 3.0, 4.0, 5.0);
        total += MacroProfile::new(1.0, 2.0, 3.0, 4.0, 5.0);
        assert_eq!(total, MacroProfile::new(2.0, 4.0, 6.0, 8.0, 10.0));
    }

    #[test]
    fn test_per_day_never_divides_by_zero() {
        let profile = MacroProfile::new(7.0, 14.0, 21.0, 0.0, 700.0);
        assert_eq!(profile.per_day(0), profile);
        assert!((profile.per_day(7).calories - 100.0).abs() < 0.001);
    }

    #[test]
    fn test_is_valid() {
        assert!(sample_food().is_valid());

        let mut invalid = sample_food();
        invalid.macros.fat = -1.0;
        assert!(!invalid.is_valid());

        let mut blank = sample_food();
        blank.key = "  ".to_string();
        assert!(!blank.is_valid());
    }

    #[test]
    fn test_cost_tier_scores() {
        assert_eq!(CostTier::Low.score(), 1);
        assert_eq!(CostTier::Medium.score(), 2);
        assert_eq!(CostTier::High.score(), 3);
    }

    #[test]
    fn test_cost_tier_serde_lowercase() {
        let json = serde_json::to_string(&CostTier::High).unwrap();
        assert_eq!(json, "\"high\"");
        let tier: CostTier = serde_json::from_str("\"low\"").unwrap();
        assert_eq!(tier, CostTier::Low);
    }
}
