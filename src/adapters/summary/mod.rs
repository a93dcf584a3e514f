//! LLM summary adapter.

pub mod client;
pub mod prompt;

pub use client::{HfSummaryClient, SummarizerConfig};
pub use prompt::build_prompt;
