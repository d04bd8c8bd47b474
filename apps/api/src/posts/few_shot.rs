//! Few-shot example store: curated LinkedIn posts used as style references.

use std::collections::BTreeSet;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::posts::format::{PostLanguage, PostLength};

/// Topics offered when no example file is available.
pub const DEFAULT_TAGS: &[&str] = &["Networking", "Growth", "Rejection", "Career Change"];

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FewShotPost {
    pub text: String,
    #[serde(default)]
    pub engagement: Option<u32>,
    pub line_count: u32,
    pub language: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl FewShotPost {
    pub fn length(&self) -> PostLength {
        PostLength::from_line_count(self.line_count)
    }
}

#[derive(Debug, Clone, Default)]
pub struct FewShotPosts {
    posts: Vec<FewShotPost>,
}

impl FewShotPosts {
    #[cfg(test)]
    pub fn from_posts(posts: Vec<FewShotPost>) -> Self {
        Self { posts }
    }

    /// Loads the JSON array of examples at `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read few-shot posts from {}", path.display()))?;
        let posts: Vec<FewShotPost> = serde_json::from_str(&raw)
            .with_context(|| format!("Invalid few-shot posts file {}", path.display()))?;
        info!("Loaded {} few-shot posts from {}", posts.len(), path.display());
        Ok(Self { posts })
    }

    /// Like `load`, but a missing or broken file only costs the style examples.
    pub fn load_or_empty(path: impl AsRef<Path>) -> Self {
        Self::load(path).unwrap_or_else(|e| {
            warn!("Few-shot examples unavailable, generating without them: {e:#}");
            Self::default()
        })
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.posts.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }

    /// Sorted, unique topic tags across all examples.
    pub fn tags(&self) -> Vec<String> {
        let tags: BTreeSet<&str> = self
            .posts
            .iter()
            .flat_map(|p| p.tags.iter().map(String::as_str))
            .collect();
        if tags.is_empty() {
            return DEFAULT_TAGS.iter().map(|t| t.to_string()).collect();
        }
        tags.into_iter().map(String::from).collect()
    }

    /// Examples matching length bucket, language and tag.
    pub fn filtered(&self, length: PostLength, language: PostLanguage, tag: &str) -> Vec<&FewShotPost> {
        self.posts
            .iter()
            .filter(|p| p.length() == length)
            .filter(|p| p.language.eq_ignore_ascii_case(language.as_str()))
            .filter(|p| p.tags.iter().any(|t| t.eq_ignore_ascii_case(tag)))
            .collect()
    }
}
