// LLM-backed advice: industry trends, engagement rewrites and post scoring.

pub mod advisor;
pub mod handlers;
pub mod prompts;
