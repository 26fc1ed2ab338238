use dialoguer::{Confirm, Input, MultiSelect, Select};

use crate::error::{AnalyzerError, Result};
use crate::models::{UserProfile, DEFAULT_BUDGET, DEFAULT_LOCATION};
use crate::reference::NutritionReference;

const BUDGETS: [&str; 3] = ["Low", "Medium", "High"];

/// Prompt for the user's region.
pub fn prompt_location(reference: &NutritionReference) -> Result<String> {
    let regions: Vec<&str> = reference.regions().collect();
    if regions.is_empty() {
        return prompt_optional_text("Where are you located?").map(|loc| {
            loc.unwrap_or_else(|| DEFAULT_LOCATION.to_string())
        });
    }

    let default = regions
        .iter()
        .position(|r| *r == DEFAULT_LOCATION)
        .unwrap_or(0);

    let selection = Select::new()
        .with_prompt("Where are you located?")
        .items(&regions)
        .default(default)
        .interact()?;

    Ok(regions[selection].to_string())
}

/// Prompt for age in years.
pub fn prompt_age() -> Result<u32> {
    let input: String = Input::new()
        .with_prompt("How old are you?")
        .default("30".to_string())
        .interact_text()?;

    input
        .trim()
        .parse()
        .map_err(|_| AnalyzerError::InvalidInput("Invalid age".to_string()))
}

/// Prompt for a dietary goal from the reference goals.
pub fn prompt_goal(reference: &NutritionReference) -> Result<String> {
    let goals: Vec<&str> = reference.goals().map(|g| g.key.as_str()).collect();
    if goals.is_empty() {
        return Err(AnalyzerError::InvalidInput(
            "Reference data defines no goals".to_string(),
        ));
    }

    let selection = Select::new()
        .with_prompt("What is your goal?")
        .items(&goals)
        .default(0)
        .interact()?;

    Ok(goals[selection].to_string())
}

/// Prompt for a budget preference.
pub fn prompt_budget() -> Result<String> {
    let default = BUDGETS.iter().position(|b| *b == DEFAULT_BUDGET).unwrap_or(0);
    let selection = Select::new()
        .with_prompt("Budget preference")
        .items(&BUDGETS[..])
        .default(default)
        .interact()?;

    Ok(BUDGETS[selection].to_string())
}

/// Prompt for known medical conditions.
pub fn prompt_conditions(reference: &NutritionReference) -> Result<Vec<String>> {
    let conditions: Vec<&str> = reference.conditions().map(|c| c.key.as_str()).collect();
    if conditions.is_empty() {
        return Ok(Vec::new());
    }

    let selections = MultiSelect::new()
        .with_prompt("Medical conditions (space to toggle, enter to confirm)")
        .items(&conditions)
        .interact()?;

    Ok(selections
        .into_iter()
        .map(|i| conditions[i].to_string())
        .collect())
}

/// Prompt for free text; empty input means "not specified".
pub fn prompt_optional_text(prompt: &str) -> Result<Option<String>> {
    let input: String = Input::new()
        .with_prompt(prompt)
        .allow_empty(true)
        .interact_text()?;

    let input = input.trim();
    Ok((!input.is_empty()).then(|| input.to_string()))
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}

/// Collect a full profile for a meal plan request.
pub fn collect_user_profile(reference: &NutritionReference) -> Result<UserProfile> {
    let location = prompt_location(reference)?;
    let age = prompt_age()?;
    let diet_type = prompt_optional_text("Diet type (e.g. vegetarian, keto)")?;
    let goal = prompt_goal(reference)?;
    let budget = prompt_budget()?;
    let taste_preferences = prompt_optional_text("Taste preferences")?;
    let medical_conditions = prompt_conditions(reference)?;

    Ok(UserProfile {
        location,
        age: Some(age),
        diet_type,
        goal,
        budget,
        taste_preferences,
        medical_conditions,
    })
}
