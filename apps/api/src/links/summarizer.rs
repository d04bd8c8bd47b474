use serde::{Deserialize, Serialize};

use crate::links::prompts::{SUMMARIZE_PROMPT_TEMPLATE, SUMMARIZER_SYSTEM};
use crate::links::scraper::{paragraph_texts, visible_text};
use crate::llm_client::{ChatRequest, LlmBackend, LlmError};

pub const EXCERPT_PARAGRAPHS: usize = 5;
pub const EXCERPT_CHARS: usize = 300;
/// Page text beyond this many chars is not sent to the model.
pub const LLM_INPUT_CHARS: usize = 12_000;
pub const DEFAULT_MAX_BULLETS: u32 = 6;
const MAX_BULLETS_CAP: u32 = 15;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SummaryMode {
    /// Opening paragraphs of the page, no LLM call.
    #[default]
    Excerpt,
    /// Bullet-point summary written by the LLM.
    Llm,
}

/// Joins the first paragraphs and cuts the result at `EXCERPT_CHARS`.
pub fn excerpt(html: &str) -> String {
    let text = paragraph_texts(html, EXCERPT_PARAGRAPHS).join(" ");
    if text.chars().count() > EXCERPT_CHARS {
        format!("{}...", truncate_chars(&text, EXCERPT_CHARS))
    } else {
        text
    }
}

pub async fn summarize_page(
    llm: &dyn LlmBackend,
    html: &str,
    max_bullets: u32,
) -> Result<String, LlmError> {
    summarize_text(llm, &visible_text(html), max_bullets).await
}

pub async fn summarize_text(
    llm: &dyn LlmBackend,
    text: &str,
    max_bullets: u32,
) -> Result<String, LlmError> {
    let max_bullets = max_bullets.clamp(1, MAX_BULLETS_CAP);
    let prompt = SUMMARIZE_PROMPT_TEMPLATE
        .replace("{max_bullets}", &max_bullets.to_string())
        .replace("{text}", truncate_chars(text, LLM_INPUT_CHARS));
    let request = ChatRequest::new(prompt).system(SUMMARIZER_SYSTEM);
    Ok(llm.complete(&request).await?.trim().to_string())
}

fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm_client::testing::StubLlm;

    #[test]
    fn test_excerpt_joins_first_five_paragraphs() {
        let html: String = (1..=7).map(|i| format!("<p>P{i}</p>")).collect();
        assert_eq!(excerpt(&html), "P1 P2 P3 P4 P5");
    }

    #[test]
    fn test_excerpt_truncates_long_text() {
        let html = format!("<p>{}</p>", "a".repeat(450));
        let summary = excerpt(&html);
        assert_eq!(summary.len(), EXCERPT_CHARS + 3);
        assert!(summary.ends_with("..."));
    }

    #[test]
    fn test_excerpt_of_exactly_limit_is_untouched() {
        let html = format!("<p>{}</p>", "b".repeat(EXCERPT_CHARS));
        assert!(!excerpt(&html).ends_with("..."));
    }

    #[test]
    fn test_truncate_respects_char_boundaries() {
        assert_eq!(truncate_chars("héllo", 2), "hé");
        assert_eq!(truncate_chars("hi", 10), "hi");
    }

    #[tokio::test]
    async fn test_summarize_text_caps_input_and_uses_system_prompt() {
        let llm = StubLlm::replying("- point one\n- point two\n");
        let long = "x".repeat(LLM_INPUT_CHARS + 500);
        let summary = summarize_text(&llm, &long, 4).await.unwrap();
        assert_eq!(summary, "- point one\n- point two");

        let sent = llm.last_request();
        assert_eq!(sent.system.as_deref(), Some(SUMMARIZER_SYSTEM));
        assert!(sent.prompt.starts_with("Summarize in 4 bullets:"));
        assert!(!sent.prompt.contains(&"x".repeat(LLM_INPUT_CHARS + 1)));
    }

    #[tokio::test]
    async fn test_summarize_page_sends_visible_text() {
        let llm = StubLlm::replying("- ok");
        let html = "<html><body><nav>menu</nav><p>Real content</p></body></html>";
        summarize_page(&llm, html, 0).await.unwrap();
        let sent = llm.last_request();
        assert!(sent.prompt.starts_with("Summarize in 1 bullets:"));
        assert!(sent.prompt.contains("Real content"));
        assert!(!sent.prompt.contains("menu"));
    }
}
