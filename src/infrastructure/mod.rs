//! Cross-cutting infrastructure: configuration and startup wiring.

pub mod config;
