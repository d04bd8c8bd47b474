use serde::Deserialize;
use tracing::{debug, info};

use crate::errors::AppError;
use crate::llm_client::{ChatRequest, LlmBackend};
use crate::posts::few_shot::FewShotPosts;
use crate::posts::format::{PostLanguage, PostLength};
use crate::posts::prompts::{post_prompt, profile_post_prompt};
use crate::profile::ProfileRecord;

const GENERATION_TEMPERATURE: f32 = 0.7;
const GENERATION_MAX_TOKENS: u32 = 1024;

#[derive(Debug, Clone, Deserialize)]
pub struct GeneratePostRequest {
    pub tag: String,
    pub length: PostLength,
    pub language: PostLanguage,
    /// Record from a previous profile analysis; omit for a generic post.
    #[serde(default)]
    pub profile: Option<ProfileRecord>,
}

/// Picks the profile-aware prompt when a non-empty profile is supplied.
/// Few-shot examples are always filtered by the selected tag.
pub fn build_prompt(few_shot: &FewShotPosts, request: &GeneratePostRequest) -> String {
    let tag = request.tag.trim();
    let examples = few_shot.filtered(request.length, request.language, tag);
    debug!("{} few-shot examples match tag '{tag}'", examples.len());

    match request.profile.as_ref().filter(|p| !p.is_empty()) {
        Some(profile) => profile_post_prompt(profile, tag, request.length, request.language, &examples),
        None => post_prompt(tag, request.length, request.language, &examples),
    }
}

/// Generates a LinkedIn post. Returns the post text, trimmed.
pub async fn generate_post(
    llm: &dyn LlmBackend,
    few_shot: &FewShotPosts,
    request: &GeneratePostRequest,
) -> Result<String, AppError> {
    let prompt = build_prompt(few_shot, request);
    let chat = ChatRequest::new(prompt)
        .temperature(GENERATION_TEMPERATURE)
        .max_tokens(GENERATION_MAX_TOKENS);

    let text = llm
        .complete(&chat)
        .await
        .map_err(|e| AppError::Llm(format!("Post generation failed: {e}")))?;

    info!(
        "Generated {} {} post for '{}'",
        request.length.as_str(),
        request.language.as_str(),
        request.tag
    );
    Ok(text.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm_client::testing::StubLlm;
    use crate::posts::few_shot::FewShotPost;

    fn few_shot() -> FewShotPosts {
        FewShotPosts::from_posts(vec![FewShotPost {
            text: "Rejected 12 times. Hired on the 13th.".to_string(),
            engagement: Some(400),
            line_count: 2,
            language: "English".to_string(),
            tags: vec!["Rejection".to_string()],
        }])
    }

    fn request(profile: Option<ProfileRecord>) -> GeneratePostRequest {
        GeneratePostRequest {
            tag: "Rejection".to_string(),
            length: PostLength::Short,
            language: PostLanguage::English,
            profile,
        }
    }

    #[test]
    fn test_plain_prompt_includes_matching_example() {
        let prompt = build_prompt(&few_shot(), &request(None));
        assert!(prompt.starts_with("Generate a LinkedIn post"));
        assert!(prompt.contains("Hired on the 13th"));
    }

    #[test]
    fn test_profile_prompt_keeps_tag_filtered_examples() {
        let profile = ProfileRecord {
            skills: vec!["Python".to_string()],
            ..Default::default()
        };
        let prompt = build_prompt(&few_shot(), &request(Some(profile)));
        assert!(prompt.starts_with("You are a professional LinkedIn content writer"));
        assert!(prompt.contains("- Skills: Python"));
        assert!(prompt.contains("Hired on the 13th"));
    }

    #[test]
    fn test_empty_profile_uses_plain_prompt() {
        let prompt = build_prompt(&few_shot(), &request(Some(ProfileRecord::default())));
        assert!(prompt.starts_with("Generate a LinkedIn post"));
    }

    #[tokio::test]
    async fn test_generate_post_trims_reply() {
        let llm = StubLlm::replying("\n  Keep going.  \n");
        let post = generate_post(&llm, &few_shot(), &request(None)).await.unwrap();
        assert_eq!(post, "Keep going.");
        let sent = llm.last_request();
        assert!(sent.system.is_none());
        assert!(sent.prompt.contains("1) Topic: Rejection"));
    }

    #[tokio::test]
    async fn test_generate_post_maps_llm_failure() {
        let llm = StubLlm::failing("overloaded");
        let err = generate_post(&llm, &few_shot(), &request(None)).await.unwrap_err();
        assert!(matches!(err, AppError::Llm(_)));
    }
}
