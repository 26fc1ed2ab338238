use std::fs;
use std::path::Path;

use log::info;

use crate::error::Result;
use crate::reference::{NutritionReference, ReferenceData};

/// Load and validate a reference dataset from a JSON file.
///
/// Duplicate keys are deduplicated after normalization (last occurrence wins).
pub fn load_reference<P: AsRef<Path>>(path: P) -> Result<NutritionReference> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    let data: ReferenceData = serde_json::from_str(&content)?;
    let reference = NutritionReference::from_data(data)?;

    info!(
        "Loaded {} foods and {} goals from {}",
        reference.food_count(),
        reference.goal_count(),
        path.display()
    );

    Ok(reference)
}

/// Save a reference dataset to a JSON file.
pub fn save_reference<P: AsRef<Path>>(path: P, reference: &NutritionReference) -> Result<()> {
    let json = serde_json::to_string_pretty(&reference.to_data())?;
    fs::write(path, json)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AnalyzerError;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_and_save_roundtrip() {
        let out_file = NamedTempFile::new().unwrap();
        let builtin = NutritionReference::builtin();
        save_reference(out_file.path(), &builtin).unwrap();

        let reloaded = load_reference(out_file.path()).unwrap();
        assert_eq!(reloaded, builtin);
    }

    #[test]
    fn test_load_minimal_file() {
        let json = r#"{
            "foods": [
                {"key": "Rice", "protein": 2.7, "carbs": 28, "fat": 0.3, "calories": 130, "cost": "low"}
            ],
            "goals": [
                {"key": "maintenance", "protein_pct": 30, "carbs_pct": 45, "fat_pct": 25}
            ]
        }"#;

        let mut file = NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();

        let reference = load_reference(file.path()).unwrap();
        let rice = reference.food("rice").unwrap();
        assert_eq!(rice.macros.fiber, 0.0);
        assert_eq!(reference.calorie_modifier("maintenance"), 0);
        assert_eq!(reference.regions().count(), 0);
    }

    #[test]
    fn test_deduplication() {
        let json = r#"{
            "foods": [
                {"key": "oats", "protein": 1, "carbs": 1, "fat": 1, "calories": 10, "cost": "low"},
                {"key": "OATS", "protein": 2, "carbs": 2, "fat": 2, "calories": 20, "cost": "high"}
            ],
            "goals": []
        }"#;

        let mut file = NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();

        let reference = load_reference(file.path()).unwrap();
        assert_eq!(reference.food_count(), 1);
        // Last occurrence wins
        assert_eq!(reference.food("oats").unwrap().cost.as_str(), "high");
    }

    #[test]
    fn test_load_rejects_out_of_range_goal() {
        let json = r#"{
            "foods": [],
            "goals": [{"key": "odd", "protein_pct": 150, "carbs_pct": 0, "fat_pct": 0}]
        }"#;

        let mut file = NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();

        assert!(matches!(
            load_reference(file.path()),
            Err(AnalyzerError::InvalidReference(_))
        ));
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        assert!(matches!(
            load_reference("/definitely/not/here.json"),
            Err(AnalyzerError::Io(_))
        ));
    }
}
