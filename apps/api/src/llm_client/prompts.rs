// Shared prompt fragments.
// Each service that needs LLM calls defines its own prompts.rs alongside it;
// only cross-cutting pieces live here.

/// System prompt fragment that enforces JSON-only output.
pub const JSON_ONLY_SYSTEM: &str = "You are a precise, structured assistant. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences. \
    Do NOT include explanations or apologies.";

/// Explains the Hinglish option to the model. Appended wherever the user can
/// pick a post language.
pub const HINGLISH_NOTE: &str = "If Language is Hinglish then it means it is a mix of Hindi and English. \
    The script for the generated post should always be English.";
