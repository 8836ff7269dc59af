//! Magazine-centric relationship queries.

use crate::model::article::Article;
use crate::model::author::{Author, AuthorId};
use crate::model::magazine::{Magazine, MagazineId};
use crate::repo::publication_repo::{PublicationRepository, RepoResult};
use crate::service::publication_service::PublicationService;

/// Authors need strictly more than this many articles in one magazine to
/// count as contributing authors.
pub const CONTRIBUTING_AUTHOR_MIN_EXCLUSIVE: usize = 2;

impl<R: PublicationRepository> PublicationService<R> {
    /// Articles published in `magazine`, in registration order.
    pub fn magazine_articles(&self, magazine: MagazineId) -> RepoResult<Vec<&Article>> {
        self.require_magazine(magazine)?;
        Ok(self
            .repo
            .list_articles()
            .iter()
            .filter(|article| article.magazine() == magazine)
            .collect())
    }

    pub fn article_count(&self, magazine: MagazineId) -> RepoResult<usize> {
        Ok(self.magazine_articles(magazine)?.len())
    }

    /// Distinct authors of `magazine`, first-seen order.
    pub fn contributors(&self, magazine: MagazineId) -> RepoResult<Vec<&Author>> {
        let counts = self.author_counts(magazine)?;
        counts
            .into_iter()
            .map(|(id, _)| self.require_author(id))
            .collect()
    }

    /// Titles of the articles in `magazine`; empty when there are none.
    pub fn article_titles(&self, magazine: MagazineId) -> RepoResult<Vec<&str>> {
        Ok(self
            .magazine_articles(magazine)?
            .into_iter()
            .map(Article::title)
            .collect())
    }

    /// Authors with more than two articles in `magazine`, first-seen order.
    pub fn contributing_authors(&self, magazine: MagazineId) -> RepoResult<Vec<&Author>> {
        let counts = self.author_counts(magazine)?;
        counts
            .into_iter()
            .filter(|(_, count)| *count > CONTRIBUTING_AUTHOR_MIN_EXCLUSIVE)
            .map(|(id, _)| self.require_author(id))
            .collect()
    }

    /// Magazine with the most articles across the registry.
    ///
    /// `None` when no article exists. Ties go to the magazine registered
    /// first.
    pub fn top_publisher(&self) -> Option<&Magazine> {
        let articles = self.repo.list_articles();
        if articles.is_empty() {
            return None;
        }

        let mut best: Option<&Magazine> = None;
        let mut best_count = 0;
        for magazine in self.repo.list_magazines() {
            let count = articles
                .iter()
                .filter(|article| article.magazine() == magazine.id())
                .count();
            if count > best_count {
                best = Some(magazine);
                best_count = count;
            }
        }
        best
    }

    /// Per-author article counts for `magazine`, first-seen order.
    fn author_counts(&self, magazine: MagazineId) -> RepoResult<Vec<(AuthorId, usize)>> {
        let mut counts: Vec<(AuthorId, usize)> = Vec::new();
        for article in self.magazine_articles(magazine)? {
            match counts.iter_mut().find(|(id, _)| *id == article.author()) {
                Some((_, count)) => *count += 1,
                None => counts.push((article.author(), 1)),
            }
        }
        Ok(counts)
    }
}
