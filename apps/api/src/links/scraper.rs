//! Page fetching and HTML-to-text helpers for the link saver.

use std::time::Duration;

use once_cell::sync::Lazy;
use regex::Regex;
use reqwest::{header, StatusCode, Url};
use scraper::{node::Node, Html, Selector};
use thiserror::Error;
use tracing::{debug, info};

const USER_AGENT: &str = "Mozilla/5.0";
const FETCH_TIMEOUT: Duration = Duration::from_secs(15);

/// Elements whose text never counts as page content.
const SKIPPED_ELEMENTS: &[&str] = &["script", "style", "noscript", "header", "footer", "nav"];

static PARAGRAPH_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("p").expect("Failed to compile PARAGRAPH_SELECTOR"));

static INLINE_WHITESPACE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[ \t]+").expect("Failed to compile INLINE_WHITESPACE_RE"));

static BLANK_LINES_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\n{2,}").expect("Failed to compile BLANK_LINES_RE"));

#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("Invalid URL '{0}': only http and https links can be summarized")]
    InvalidUrl(String),

    #[error("Network request failed: {0}")]
    Network(#[from] reqwest::Error),

    #[error("HTTP {status} while fetching {url}")]
    Http { status: StatusCode, url: String },
}

/// HTTP client used to download pages for summarizing.
#[derive(Clone)]
pub struct PageFetcher {
    client: reqwest::Client,
}

impl PageFetcher {
    pub fn new() -> Result<Self, ScrapeError> {
        Ok(Self {
            client: reqwest::Client::builder()
                .user_agent(USER_AGENT)
                .timeout(FETCH_TIMEOUT)
                .build()?,
        })
    }

    /// Downloads the page body. Non-2xx responses are errors.
    pub async fn fetch_html(&self, url: &str) -> Result<String, ScrapeError> {
        let url = parse_web_url(url)?;
        info!("Fetching page {url}");

        let response = self
            .client
            .get(url.clone())
            .header(header::ACCEPT, "text/html,application/xhtml+xml,*/*")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ScrapeError::Http {
                status,
                url: url.to_string(),
            });
        }

        let body = response.text().await?;
        debug!("Downloaded {} bytes from {url}", body.len());
        Ok(body)
    }
}

fn parse_web_url(raw: &str) -> Result<Url, ScrapeError> {
    let url = Url::parse(raw.trim()).map_err(|_| ScrapeError::InvalidUrl(raw.to_string()))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        _ => Err(ScrapeError::InvalidUrl(raw.to_string())),
    }
}

/// Text of the first `limit` `<p>` elements, in document order.
pub fn paragraph_texts(html: &str, limit: usize) -> Vec<String> {
    let document = Html::parse_document(html);
    document
        .select(&PARAGRAPH_SELECTOR)
        .take(limit)
        .map(|p| p.text().collect::<String>())
        .collect()
}

/// Visible text of a page: scripts, styles and page chrome dropped, one
/// text node per line, whitespace runs collapsed.
pub fn visible_text(html: &str) -> String {
    let document = Html::parse_document(html);

    let chunks: Vec<&str> = document
        .root_element()
        .descendants()
        .filter_map(|node| match node.value() {
            Node::Text(text) => {
                let hidden = node.ancestors().any(|ancestor| {
                    ancestor
                        .value()
                        .as_element()
                        .is_some_and(|e| SKIPPED_ELEMENTS.contains(&e.name()))
                });
                let text = text.trim();
                (!hidden && !text.is_empty()).then_some(text)
            }
            _ => None,
        })
        .collect();

    let joined = chunks.join("\n");
    let collapsed = INLINE_WHITESPACE_RE.replace_all(&joined, " ");
    BLANK_LINES_RE
        .replace_all(&collapsed, "\n\n")
        .trim()
        .to_string()
}
