//! Gitbrief - cached GitHub profile summaries
//!
//! An HTTP service that fetches a public GitHub profile and recent
//! repositories, asks a hosted language model for a short narrative summary,
//! and caches the combined result per username with a 12-hour expiry.
//!
//! # Architecture
//!
//! This crate follows Hexagonal Architecture principles:
//!
//! - **Domain Layer** (`domain`): models, error taxonomy, and port traits
//! - **Service Layer** (`services`): the cache-aside lookup orchestrator
//! - **Adapters** (`adapters`): GitHub REST, Hugging Face router, SQLite
//! - **Infrastructure** (`infrastructure`): configuration loading
//! - **Server** (`server`): axum routes and handlers

pub mod adapters;
pub mod domain;
pub mod infrastructure;
pub mod server;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::models::{CachedLookup, LookupOutcome, Profile, RepoSummary, MAX_REPOSITORIES};
pub use domain::ports::{LookupCache, NullLookupCache, ProfileSource, Summarizer};
pub use infrastructure::config::{Config, ConfigLoader};
pub use services::{normalize_key, LookupService, FALLBACK_SUMMARY};
