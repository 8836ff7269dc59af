//! Article domain model, the join record between an author and a magazine.
//!
//! # Invariants
//! - `title` is 5..=50 characters and never changes after construction.
//! - The model only guarantees well-formed handles; whether the referenced
//!   author and magazine exist is enforced by the repository on every write.

use crate::model::author::AuthorId;
use crate::model::magazine::MagazineId;
use crate::model::validation::{check_title, ValidationError};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier of an article.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ArticleId(Uuid);

impl ArticleId {
    /// Generates a fresh random identifier.
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    pub fn as_uuid(self) -> Uuid {
        self.0
    }
}

impl Display for ArticleId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One article written by one author for one magazine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ArticleRecord")]
pub struct Article {
    id: ArticleId,
    author: AuthorId,
    magazine: MagazineId,
    title: String,
}

#[derive(Deserialize)]
struct ArticleRecord {
    id: ArticleId,
    author: AuthorId,
    magazine: MagazineId,
    title: String,
}

impl TryFrom<ArticleRecord> for Article {
    type Error = ValidationError;

    fn try_from(record: ArticleRecord) -> Result<Self, Self::Error> {
        Self::with_id(record.id, record.author, record.magazine, record.title)
    }
}

impl Article {
    /// Creates an article with a generated identifier.
    ///
    /// # Errors
    /// - `ValidationError::TitleLength` when `title` is not 5..=50 chars.
    pub fn new(
        author: AuthorId,
        magazine: MagazineId,
        title: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        Self::with_id(ArticleId::generate(), author, magazine, title)
    }

    /// Creates an article with a caller-provided identifier.
    pub fn with_id(
        id: ArticleId,
        author: AuthorId,
        magazine: MagazineId,
        title: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let title = title.into();
        check_title(&title)?;
        Ok(Self {
            id,
            author,
            magazine,
            title,
        })
    }

    pub fn id(&self) -> ArticleId {
        self.id
    }

    pub fn author(&self) -> AuthorId {
        self.author
    }

    pub fn magazine(&self) -> MagazineId {
        self.magazine
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Points this article at another author.
    ///
    /// Existence of the target is checked by the repository, not here.
    pub(crate) fn set_author(&mut self, author: AuthorId) {
        self.author = author;
    }

    /// Points this article at another magazine.
    pub(crate) fn set_magazine(&mut self, magazine: MagazineId) {
        self.magazine = magazine;
    }
}
