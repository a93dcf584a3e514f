//! GitHub upstream adapter.

pub mod client;

pub use client::{GitHubClient, GitHubConfig};
