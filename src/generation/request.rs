use crate::models::UserProfile;
use crate::reference::NutritionReference;

/// System instruction for the free-form nutrition chatbot.
pub const CHAT_SYSTEM_PROMPT: &str = "You are a nutrition expert chatbot. Provide:
- Personalized meal advice considering location, medical conditions, and taste preferences
- Nutritional facts and calculations
- Budget-friendly options
- Cultural food considerations
Be specific, helpful, and consider the user's region when suggesting foods.";

/// Fallback instruction for unrecognized advice modules.
pub const GENERIC_ADVICE_PROMPT: &str = "Provide health advice";

/// Specialized advice areas with their own prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdviceModule {
    WomensHealth,
    ChildHealth,
    ElderlyHealth,
}

impl AdviceModule {
    /// Parse a module title such as "Women's Health".
    pub fn from_title(title: &str) -> Option<Self> {
        match title.trim() {
            "Women's Health" => Some(AdviceModule::WomensHealth),
            "Child Health" => Some(AdviceModule::ChildHealth),
            "Elderly Health" => Some(AdviceModule::ElderlyHealth),
            _ => None,
        }
    }
}

/// Details collected for a specialized advice request. Missing fields render as "None".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AdviceDetails {
    pub age: Option<u32>,
    pub cycle_days: Option<u32>,
    pub pregnancy: Option<String>,
    pub weight_kg: Option<f64>,
    pub conditions: Option<String>,
    pub concerns: Option<String>,
}

fn or_none<T: ToString>(value: &Option<T>) -> String {
    value
        .as_ref()
        .map(|v| v.to_string())
        .unwrap_or_else(|| "None".to_string())
}

/// Per-condition guidance lines ("- For gout: Avoid red_meat, seafood. Prefer plant_proteins.").
///
/// Conditions missing from the reference add no line.
pub fn medical_guidance(conditions: &[String], reference: &NutritionReference) -> String {
    let mut guidance = String::new();
    for name in conditions {
        if let Some(condition) = reference.condition(name) {
            guidance.push_str(&format!(
                "\n- For {}: Avoid {}. Prefer {}.",
                name,
                condition.avoid.join(", "),
                condition.prefer.join(", ")
            ));
        }
    }
    guidance
}

/// System instruction asking for a 7-day plan tailored to the profile.
pub fn meal_plan_system_prompt(profile: &UserProfile, reference: &NutritionReference) -> String {
    let region_foods = reference.region_foods(&profile.location).join(", ");
    let conditions = if profile.medical_conditions.is_empty() {
        "None".to_string()
    } else {
        profile.medical_conditions.join(", ")
    };

    format!(
        "Create a detailed 7-day meal plan considering:
- Location: {location} (common foods: {region_foods})
- Age: {age} years
- Diet type: {diet}
- Goal: {goal}
- Budget preference: {budget}
- Taste preferences: {taste}
- Medical conditions: {conditions}{guidance}

Format the meal plan day by day, with breakfast, lunch, dinner and 1-2 snacks.
Include specific portion sizes and preparation methods.
Focus on practical, easy-to-follow meals that align with the user's preferences.",
        location = profile.location,
        age = or_none(&profile.age),
        diet = or_none(&profile.diet_type),
        goal = profile.goal,
        budget = profile.budget,
        taste = profile
            .taste_preferences
            .as_deref()
            .unwrap_or("Not specified"),
        guidance = medical_guidance(&profile.medical_conditions, reference),
    )
}

/// Instruction for a specialized advice module; unknown modules get a generic prompt.
pub fn specialized_advice_prompt(module: Option<AdviceModule>, details: &AdviceDetails) -> String {
    match module {
        Some(AdviceModule::WomensHealth) => format!(
            "Provide personalized women's health advice for a {}-year-old with cycle length {} days, pregnancy status: {}. Address these concerns: {}",
            or_none(&details.age),
            or_none(&details.cycle_days),
            or_none(&details.pregnancy),
            or_none(&details.concerns)
        ),
        Some(AdviceModule::ChildHealth) => format!(
            "Provide pediatric health advice for a {}-year-old child weighing {}kg with these concerns: {}",
            or_none(&details.age),
            or_none(&details.weight_kg),
            or_none(&details.concerns)
        ),
        Some(AdviceModule::ElderlyHealth) => format!(
            "Provide geriatric health advice for a {}-year-old with these health conditions: {} and concerns: {}",
            or_none(&details.age),
            or_none(&details.conditions),
            or_none(&details.concerns)
        ),
        None => GENERIC_ADVICE_PROMPT.to_string(),
    }
}
