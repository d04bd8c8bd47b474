// LinkedIn post generation: few-shot style examples, prompt building, the
// LLM call, and the `posts` table that keeps every generated post.

pub mod few_shot;
pub mod format;
pub mod generator;
pub mod handlers;
pub mod prompts;
pub mod store;
