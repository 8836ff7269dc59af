//! Author-centric relationship queries.
//!
//! Every query scans the article registry in insertion order and filters by
//! author handle. Unknown authors are reported as `AuthorNotFound` rather
//! than an empty result.

use crate::model::article::Article;
use crate::model::author::AuthorId;
use crate::model::magazine::{Magazine, MagazineId};
use crate::repo::publication_repo::{PublicationRepository, RepoResult};
use crate::service::publication_service::PublicationService;

impl<R: PublicationRepository> PublicationService<R> {
    /// Articles written by `author`, in registration order.
    pub fn author_articles(&self, author: AuthorId) -> RepoResult<Vec<&Article>> {
        self.require_author(author)?;
        Ok(self
            .repo
            .list_articles()
            .iter()
            .filter(|article| article.author() == author)
            .collect())
    }

    /// Distinct magazines `author` has written for, first-seen order.
    pub fn author_magazines(&self, author: AuthorId) -> RepoResult<Vec<&Magazine>> {
        let mut seen: Vec<MagazineId> = Vec::new();
        for article in self.author_articles(author)? {
            if !seen.contains(&article.magazine()) {
                seen.push(article.magazine());
            }
        }
        seen.into_iter()
            .map(|id| self.require_magazine(id))
            .collect()
    }

    /// Registers a new article by `author` for `magazine`.
    ///
    /// Same validation and registration rules as `create_article`.
    pub fn add_article(
        &mut self,
        author: AuthorId,
        magazine: MagazineId,
        title: impl Into<String>,
    ) -> RepoResult<Article> {
        self.create_article(author, magazine, title)
    }

    /// Distinct categories of the magazines `author` has written for.
    ///
    /// Empty when the author has no articles.
    pub fn topic_areas(&self, author: AuthorId) -> RepoResult<Vec<&str>> {
        let mut categories: Vec<&str> = Vec::new();
        for magazine in self.author_magazines(author)? {
            if !categories.contains(&magazine.category()) {
                categories.push(magazine.category());
            }
        }
        Ok(categories)
    }
}
