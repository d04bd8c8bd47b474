// Prompt builders for post generation.

use crate::llm_client::prompts::HINGLISH_NOTE;
use crate::posts::few_shot::FewShotPost;
use crate::posts::format::{PostLanguage, PostLength};
use crate::profile::ProfileRecord;

/// At most this many few-shot examples go into a prompt.
pub const MAX_EXAMPLES: usize = 2;
/// Profile lines quoted in a profile-aware prompt.
pub const PROFILE_EXPERIENCE_LINES: usize = 5;
pub const PROFILE_EDUCATION_LINES: usize = 3;

/// Plain topic prompt.
pub fn post_prompt(
    tag: &str,
    length: PostLength,
    language: PostLanguage,
    examples: &[&FewShotPost],
) -> String {
    let mut prompt = format!(
        "Generate a LinkedIn post using the below information. No preamble.\n\n\
         1) Topic: {tag}\n\
         2) Length: {}\n\
         3) Language: {}\n\
         {HINGLISH_NOTE}\n",
        length.line_range(),
        language.as_str(),
    );
    if !examples.is_empty() {
        prompt.push_str("\n4) Use the writing style as per the following examples.");
        prompt.push_str(&examples_block(examples));
    }
    prompt
}

/// Prompt personalised with the analyzed profile.
pub fn profile_post_prompt(
    profile: &ProfileRecord,
    topic: &str,
    length: PostLength,
    language: PostLanguage,
    examples: &[&FewShotPost],
) -> String {
    let mut lines = vec![
        "You are a professional LinkedIn content writer. Write a single LinkedIn post (no preamble).".to_string(),
        "Tone: motivational, professional, slightly personal. Keep it concise as per length requirement.".to_string(),
        format!(
            "Length: {} (Short = 1-5 lines, Medium = 6-10 lines, Long = 11-15 lines).",
            length.as_str()
        ),
        format!(
            "Language: {} (use Hinglish format if requested, but script must be English).",
            language.as_str()
        ),
        format!("Topic: {topic}."),
        String::new(),
        "Profile information (use this to make the post personal and relevant):".to_string(),
    ];

    if !profile.skills.is_empty() {
        lines.push(format!("- Skills: {}", profile.skills.join(", ")));
    }
    if !profile.experience.is_empty() {
        lines.push(format!(
            "- Experience (examples): {}",
            head(&profile.experience, PROFILE_EXPERIENCE_LINES)
        ));
    }
    if !profile.education.is_empty() {
        lines.push(format!(
            "- Education: {}",
            head(&profile.education, PROFILE_EDUCATION_LINES)
        ));
    }
    if !profile.raw_text_preview.is_empty() {
        lines.push("\nRaw profile text preview (for context):".to_string());
        lines.push(profile.raw_text_preview.clone());
    }

    lines.push("\nGuidelines:".to_string());
    lines.push("- Start with a hook (1 line) and then add a short personal insight or story if possible.".to_string());
    lines.push("- Include 1 relevant hashtag or 2 short hashtags.".to_string());
    lines.push("- Add a call-to-action (connect, comment, share, or reach out).".to_string());
    lines.push("- Avoid filler and generic phrases. Make it feel like a real person.".to_string());

    let mut prompt = lines.join("\n");
    if !examples.is_empty() {
        prompt.push_str("\n\nUse the writing style as per the following examples.");
        prompt.push_str(&examples_block(examples));
    }
    prompt
}

fn head(items: &[String], n: usize) -> String {
    items.iter().take(n).cloned().collect::<Vec<_>>().join(", ")
}

fn examples_block(examples: &[&FewShotPost]) -> String {
    examples
        .iter()
        .take(MAX_EXAMPLES)
        .enumerate()
        .map(|(i, post)| format!("\n\nExample {}: \n\n{}", i + 1, post.text))
        .collect()
}
