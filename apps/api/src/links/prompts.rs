// Link summarizer prompts.

pub const SUMMARIZER_SYSTEM: &str = "You are a concise technical summarizer for LinkedIn context. \
    Return 5-7 bullet points with key insights, facts, and a practical takeaway. \
    Keep it crisp, no fluff.";

/// Replace `{max_bullets}` and `{text}` before sending.
pub const SUMMARIZE_PROMPT_TEMPLATE: &str = "Summarize in {max_bullets} bullets:\n\n{text}";
