pub mod export;
pub mod prompts;
pub mod render;

pub use export::{to_json, write_csv};
pub use prompts::{
    collect_user_profile, prompt_age, prompt_budget, prompt_conditions, prompt_goal,
    prompt_location, prompt_optional_text, prompt_yes_no,
};
pub use render::{
    display_analysis, display_food_table, display_goals, format_analysis, AnalysisReport,
};
