use log::{info, warn};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::analyzer::analyze_meal_plan;
use crate::error::Result;
use crate::generation::request::{meal_plan_system_prompt, CHAT_SYSTEM_PROMPT};
use crate::models::{PlanAnalysis, UserProfile};
use crate::reference::NutritionReference;

/// Number of most recent chat turns sent as context.
pub const CONTEXT_WINDOW: usize = 6;

/// Failure reported by the text generation collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerationError {
    #[error("API usage limit reached: {0}")]
    QuotaExceeded(String),

    #[error("Generation failed: {0}")]
    Transport(String),
}

impl GenerationError {
    /// Classify a raw collaborator error message.
    ///
    /// A 403 mentioning a resource limit is a quota failure; anything else is transport.
    pub fn classify(message: &str) -> Self {
        if message.contains("403") && message.contains("resource limit") {
            GenerationError::QuotaExceeded(message.to_string())
        } else {
            GenerationError::Transport(message.to_string())
        }
    }

    pub fn is_quota(&self) -> bool {
        matches!(self, GenerationError::QuotaExceeded(_))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }
}

/// The last `limit` messages of a conversation, oldest first.
pub fn recent_context(history: &[ChatMessage], limit: usize) -> &[ChatMessage] {
    &history[history.len().saturating_sub(limit)..]
}

/// External service producing text from a system instruction and conversation context.
pub trait TextGenerator {
    fn generate(
        &self,
        system: &str,
        context: &[ChatMessage],
    ) -> std::result::Result<String, GenerationError>;
}

/// A generated plan and its analysis.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeneratedPlan {
    pub plan: String,
    pub analysis: PlanAnalysis,
}

/// Request a meal plan for `profile` and analyze it against the profile's goal.
///
/// The generator is called exactly once. Its failure is returned as is and no analysis
/// runs, since there is no text to analyze.
pub fn generate_meal_plan<G: TextGenerator + ?Sized>(
    generator: &G,
    reference: &NutritionReference,
    profile: &UserProfile,
) -> Result<GeneratedPlan> {
    let system = meal_plan_system_prompt(profile, reference);
    let request = serde_json::to_string(profile)?;

    let plan = generator
        .generate(&system, &[ChatMessage::user(request)])
        .inspect_err(|e| warn!("Meal plan generation failed: {}", e))?;

    info!("Generated meal plan ({} chars)", plan.len());
    let analysis = analyze_meal_plan(&plan, &profile.goal, reference);

    Ok(GeneratedPlan { plan, analysis })
}

/// Send one chatbot turn: record the user message, ask the generator with the recent
/// context window and record the reply.
///
/// On failure the user message stays in the history and no reply is recorded.
pub fn chat_reply<G: TextGenerator + ?Sized>(
    generator: &G,
    history: &mut Vec<ChatMessage>,
    message: &str,
) -> Result<String> {
    history.push(ChatMessage::user(message));
    let reply = generator.generate(CHAT_SYSTEM_PROMPT, recent_context(history, CONTEXT_WINDOW))?;
    history.push(ChatMessage::assistant(reply.clone()));
    Ok(reply)
}
