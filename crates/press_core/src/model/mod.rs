//! Publication domain model: authors, magazines and the articles joining them.
//!
//! # Responsibility
//! - Define the validated records shared by repository and service layers.
//! - Keep field rules (length bounds, non-empty text) next to the records.
//!
//! # Invariants
//! - Every record is identified by a stable typed handle (`AuthorId`,
//!   `MagazineId`, `ArticleId`); identity never depends on field values.
//! - A record that exists has passed validation. Constructors and
//!   deserialization both go through the same checks.
//! - `Author::name` and `Article::title` are fixed once constructed.

pub mod article;
pub mod author;
pub mod magazine;
pub mod validation;
