//! Core domain logic for the press catalog: authors, magazines and the
//! articles linking them.
//! This crate is the single source of truth for publication invariants.

pub mod config;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use config::{default_log_level, LoggingConfig};
pub use logging::{init_logging, logging_status};
pub use model::article::{Article, ArticleId};
pub use model::author::{Author, AuthorId};
pub use model::magazine::{Magazine, MagazineId};
pub use model::validation::{
    ValidationError, ARTICLE_TITLE_MAX_CHARS, ARTICLE_TITLE_MIN_CHARS, MAGAZINE_NAME_MAX_CHARS,
    MAGAZINE_NAME_MIN_CHARS,
};
pub use repo::publication_repo::{
    InMemoryPublicationRepository, PublicationRepository, RepoError, RepoResult,
};
pub use service::publication_service::PublicationService;
pub use service::CONTRIBUTING_AUTHOR_MIN_EXCLUSIVE;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
