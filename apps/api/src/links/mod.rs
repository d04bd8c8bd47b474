// Link saver: fetch a public page, summarize it (paragraph excerpt or LLM
// bullets) and keep the summary alongside generated posts.

pub mod handlers;
pub mod prompts;
pub mod scraper;
pub mod summarizer;
