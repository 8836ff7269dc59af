//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate repository calls into use-case level APIs.
//! - Answer author/magazine relationship queries over the article registry.

mod author_queries;
mod magazine_queries;
pub mod publication_service;

pub use magazine_queries::CONTRIBUTING_AUTHOR_MIN_EXCLUSIVE;
