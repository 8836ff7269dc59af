//! Publication repository contracts and in-memory implementation.
//!
//! # Responsibility
//! - Own the insertion-ordered author, magazine and article registries.
//! - Enforce referential integrity for article writes.
//!
//! # Invariants
//! - Listing order is insertion order; nothing is ever removed.
//! - A stored article always references a stored author and magazine.
//! - Identifiers are unique per registry.
//! - Article titles are never rewritten by `update_article`.

use crate::model::article::{Article, ArticleId};
use crate::model::author::{Author, AuthorId};
use crate::model::magazine::{Magazine, MagazineId};
use crate::model::validation::ValidationError;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type RepoResult<T> = Result<T, RepoError>;

/// Errors from publication repository and service operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepoError {
    /// A record field failed validation.
    Validation(ValidationError),
    /// Referenced author is not registered.
    AuthorNotFound(AuthorId),
    /// Referenced magazine is not registered.
    MagazineNotFound(MagazineId),
    /// Referenced article is not registered.
    ArticleNotFound(ArticleId),
    DuplicateAuthor(AuthorId),
    DuplicateMagazine(MagazineId),
    DuplicateArticle(ArticleId),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::AuthorNotFound(id) => write!(f, "author not found: {id}"),
            Self::MagazineNotFound(id) => write!(f, "magazine not found: {id}"),
            Self::ArticleNotFound(id) => write!(f, "article not found: {id}"),
            Self::DuplicateAuthor(id) => write!(f, "author already registered: {id}"),
            Self::DuplicateMagazine(id) => write!(f, "magazine already registered: {id}"),
            Self::DuplicateArticle(id) => write!(f, "article already registered: {id}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ValidationError> for RepoError {
    fn from(value: ValidationError) -> Self {
        Self::Validation(value)
    }
}

/// Repository interface over the three publication registries.
pub trait PublicationRepository {
    fn insert_author(&mut self, author: Author) -> RepoResult<AuthorId>;
    fn insert_magazine(&mut self, magazine: Magazine) -> RepoResult<MagazineId>;
    fn insert_article(&mut self, article: Article) -> RepoResult<ArticleId>;
    fn update_magazine(&mut self, magazine: &Magazine) -> RepoResult<()>;
    fn update_article(&mut self, article: &Article) -> RepoResult<()>;
    fn get_author(&self, id: AuthorId) -> Option<&Author>;
    fn get_magazine(&self, id: MagazineId) -> Option<&Magazine>;
    fn get_article(&self, id: ArticleId) -> Option<&Article>;
    fn list_authors(&self) -> &[Author];
    fn list_magazines(&self) -> &[Magazine];
    fn list_articles(&self) -> &[Article];
}

/// Vec-backed repository. Lookups are linear scans.
#[derive(Debug, Default)]
pub struct InMemoryPublicationRepository {
    authors: Vec<Author>,
    magazines: Vec<Magazine>,
    articles: Vec<Article>,
}

impl InMemoryPublicationRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn ensure_references(&self, article: &Article) -> RepoResult<()> {
        if self.get_author(article.author()).is_none() {
            return Err(RepoError::AuthorNotFound(article.author()));
        }
        if self.get_magazine(article.magazine()).is_none() {
            return Err(RepoError::MagazineNotFound(article.magazine()));
        }
        Ok(())
    }
}

impl PublicationRepository for InMemoryPublicationRepository {
    fn insert_author(&mut self, author: Author) -> RepoResult<AuthorId> {
        let id = author.id();
        if self.get_author(id).is_some() {
            return Err(RepoError::DuplicateAuthor(id));
        }
        self.authors.push(author);
        Ok(id)
    }

    fn insert_magazine(&mut self, magazine: Magazine) -> RepoResult<MagazineId> {
        let id = magazine.id();
        if self.get_magazine(id).is_some() {
            return Err(RepoError::DuplicateMagazine(id));
        }
        self.magazines.push(magazine);
        Ok(id)
    }

    fn insert_article(&mut self, article: Article) -> RepoResult<ArticleId> {
        let id = article.id();
        if self.get_article(id).is_some() {
            return Err(RepoError::DuplicateArticle(id));
        }
        self.ensure_references(&article)?;
        self.articles.push(article);
        Ok(id)
    }

    fn update_magazine(&mut self, magazine: &Magazine) -> RepoResult<()> {
        let stored = self
            .magazines
            .iter_mut()
            .find(|stored| stored.id() == magazine.id())
            .ok_or(RepoError::MagazineNotFound(magazine.id()))?;
        *stored = magazine.clone();
        Ok(())
    }

    fn update_article(&mut self, article: &Article) -> RepoResult<()> {
        if self.get_article(article.id()).is_none() {
            return Err(RepoError::ArticleNotFound(article.id()));
        }
        self.ensure_references(article)?;

        if let Some(stored) = self
            .articles
            .iter_mut()
            .find(|stored| stored.id() == article.id())
        {
            stored.set_author(article.author());
            stored.set_magazine(article.magazine());
        }
        Ok(())
    }

    fn get_author(&self, id: AuthorId) -> Option<&Author> {
        self.authors.iter().find(|author| author.id() == id)
    }

    fn get_magazine(&self, id: MagazineId) -> Option<&Magazine> {
        self.magazines.iter().find(|magazine| magazine.id() == id)
    }

    fn get_article(&self, id: ArticleId) -> Option<&Article> {
        self.articles.iter().find(|article| article.id() == id)
    }

    fn list_authors(&self) -> &[Author] {
        &self.authors
    }

    fn list_magazines(&self) -> &[Magazine] {
        &self.magazines
    }

    fn list_articles(&self) -> &[Article] {
        &self.articles
    }
}
