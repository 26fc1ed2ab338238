pub mod request;
pub mod service;

pub use request::{
    meal_plan_system_prompt, medical_guidance, specialized_advice_prompt, AdviceDetails,
    AdviceModule, CHAT_SYSTEM_PROMPT,
};
pub use service::{
    chat_reply, generate_meal_plan, recent_context, ChatMessage, GeneratedPlan, GenerationError, Role,
    TextGenerator, CONTEXT_WINDOW,
};
