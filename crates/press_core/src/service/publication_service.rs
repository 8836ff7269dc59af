//! Publication use-case service: registration and mutation entry points.
//!
//! # Responsibility
//! - Validate input, then persist through the repository.
//! - Emit metadata-only log events for every write and every rejection.
//!
//! # Invariants
//! - A failed call leaves the repository unchanged.
//! - Log events never carry names, categories or titles.
//!
//! Relationship queries live in `author_queries` and `magazine_queries`.

use crate::model::article::{Article, ArticleId};
use crate::model::author::{Author, AuthorId};
use crate::model::magazine::{Magazine, MagazineId};
use crate::repo::publication_repo::{PublicationRepository, RepoError, RepoResult};
use log::{debug, warn};

/// Use-case service wrapping one publication repository.
pub struct PublicationService<R: PublicationRepository> {
    pub(crate) repo: R,
}

impl<R: PublicationRepository> PublicationService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Read access to the underlying registries.
    pub fn repository(&self) -> &R {
        &self.repo
    }

    /// Validates and registers a new author.
    pub fn create_author(&mut self, name: impl Into<String>) -> RepoResult<Author> {
        let author = Author::new(name).map_err(|err| rejected("author_create", err.into()))?;
        self.repo
            .insert_author(author.clone())
            .map_err(|err| rejected("author_create", err))?;
        debug!(
            "event=author_create module=service status=ok author_id={}",
            author.id()
        );
        Ok(author)
    }

    /// Validates and registers a new magazine.
    pub fn create_magazine(
        &mut self,
        name: impl Into<String>,
        category: impl Into<String>,
    ) -> RepoResult<Magazine> {
        let magazine = Magazine::new(name, category)
            .map_err(|err| rejected("magazine_create", err.into()))?;
        self.repo
            .insert_magazine(magazine.clone())
            .map_err(|err| rejected("magazine_create", err))?;
        debug!(
            "event=magazine_create module=service status=ok magazine_id={}",
            magazine.id()
        );
        Ok(magazine)
    }

    /// Validates and registers a new article.
    ///
    /// # Errors
    /// - `RepoError::Validation` for an out-of-range title.
    /// - `RepoError::AuthorNotFound` / `MagazineNotFound` for unknown handles.
    pub fn create_article(
        &mut self,
        author: AuthorId,
        magazine: MagazineId,
        title: impl Into<String>,
    ) -> RepoResult<Article> {
        let article = Article::new(author, magazine, title)
            .map_err(|err| rejected("article_create", err.into()))?;
        self.repo
            .insert_article(article.clone())
            .map_err(|err| rejected("article_create", err))?;
        debug!(
            "event=article_create module=service status=ok article_id={} author_id={} magazine_id={}",
            article.id(),
            author,
            magazine
        );
        Ok(article)
    }

    /// Renames a magazine; the previous name is kept on rejection.
    pub fn rename_magazine(
        &mut self,
        id: MagazineId,
        name: impl Into<String>,
    ) -> RepoResult<Magazine> {
        let mut magazine = self
            .require_magazine(id)
            .map_err(|err| rejected("magazine_rename", err))?
            .clone();
        magazine
            .set_name(name)
            .map_err(|err| rejected("magazine_rename", err.into()))?;
        self.repo
            .update_magazine(&magazine)
            .map_err(|err| rejected("magazine_rename", err))?;
        debug!("event=magazine_rename module=service status=ok magazine_id={id}");
        Ok(magazine)
    }

    /// Changes a magazine category; the previous category is kept on rejection.
    pub fn recategorize_magazine(
        &mut self,
        id: MagazineId,
        category: impl Into<String>,
    ) -> RepoResult<Magazine> {
        let mut magazine = self
            .require_magazine(id)
            .map_err(|err| rejected("magazine_recategorize", err))?
            .clone();
        magazine
            .set_category(category)
            .map_err(|err| rejected("magazine_recategorize", err.into()))?;
        self.repo
            .update_magazine(&magazine)
            .map_err(|err| rejected("magazine_recategorize", err))?;
        debug!("event=magazine_recategorize module=service status=ok magazine_id={id}");
        Ok(magazine)
    }

    /// Points an article at another registered author.
    pub fn reassign_article_author(
        &mut self,
        id: ArticleId,
        author: AuthorId,
    ) -> RepoResult<Article> {
        let mut article = self
            .require_article(id)
            .map_err(|err| rejected("article_reassign_author", err))?
            .clone();
        article.set_author(author);
        self.repo
            .update_article(&article)
            .map_err(|err| rejected("article_reassign_author", err))?;
        debug!(
            "event=article_reassign_author module=service status=ok article_id={id} author_id={author}"
        );
        Ok(article)
    }

    /// Points an article at another registered magazine.
    pub fn reassign_article_magazine(
        &mut self,
        id: ArticleId,
        magazine: MagazineId,
    ) -> RepoResult<Article> {
        let mut article = self
            .require_article(id)
            .map_err(|err| rejected("article_reassign_magazine", err))?
            .clone();
        article.set_magazine(magazine);
        self.repo
            .update_article(&article)
            .map_err(|err| rejected("article_reassign_magazine", err))?;
        debug!(
            "event=article_reassign_magazine module=service status=ok article_id={id} magazine_id={magazine}"
        );
        Ok(article)
    }

    pub(crate) fn require_author(&self, id: AuthorId) -> RepoResult<&Author> {
        self.repo.get_author(id).ok_or(RepoError::AuthorNotFound(id))
    }

    pub(crate) fn require_magazine(&self, id: MagazineId) -> RepoResult<&Magazine> {
        self.repo
            .get_magazine(id)
            .ok_or(RepoError::MagazineNotFound(id))
    }

    pub(crate) fn require_article(&self, id: ArticleId) -> RepoResult<&Article> {
        self.repo
            .get_article(id)
            .ok_or(RepoError::ArticleNotFound(id))
    }
}

fn rejected(event: &str, err: RepoError) -> RepoError {
    warn!(
        "event={event} module=service status=rejected reason={}",
        reject_reason(&err)
    );
    err
}

fn reject_reason(err: &RepoError) -> &'static str {
    match err {
        RepoError::Validation(inner) => inner.code(),
        RepoError::AuthorNotFound(_) => "author_not_found",
        RepoError::MagazineNotFound(_) => "magazine_not_found",
        RepoError::ArticleNotFound(_) => "article_not_found",
        RepoError::DuplicateAuthor(_) => "duplicate_author",
        RepoError::DuplicateMagazine(_) => "duplicate_magazine",
        RepoError::DuplicateArticle(_) => "duplicate_article",
    }
}
