//! Field validation rules for publication records.
//!
//! Lengths are counted in Unicode scalar values, not bytes.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Minimum magazine name length (inclusive).
pub const MAGAZINE_NAME_MIN_CHARS: usize = 2;
/// Maximum magazine name length (inclusive).
pub const MAGAZINE_NAME_MAX_CHARS: usize = 16;
/// Minimum article title length (inclusive).
pub const ARTICLE_TITLE_MIN_CHARS: usize = 5;
/// Maximum article title length (inclusive).
pub const ARTICLE_TITLE_MAX_CHARS: usize = 50;

/// Field-level validation failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// Author name is empty.
    EmptyAuthorName,
    /// Magazine name is outside the allowed length window.
    MagazineNameLength { chars: usize },
    /// Magazine category is empty.
    EmptyCategory,
    /// Article title is outside the allowed length window.
    TitleLength { chars: usize },
}

impl ValidationError {
    /// Stable machine-readable code, used in log events.
    pub fn code(self) -> &'static str {
        match self {
            Self::EmptyAuthorName => "empty_author_name",
            Self::MagazineNameLength { .. } => "magazine_name_length",
            Self::EmptyCategory => "empty_category",
            Self::TitleLength { .. } => "title_length",
        }
    }
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyAuthorName => write!(f, "author name must not be empty"),
            Self::MagazineNameLength { chars } => write!(
                f,
                "magazine name must be {MAGAZINE_NAME_MIN_CHARS}..={MAGAZINE_NAME_MAX_CHARS} characters, got {chars}"
            ),
            Self::EmptyCategory => write!(f, "magazine category must not be empty"),
            Self::TitleLength { chars } => write!(
                f,
                "article title must be {ARTICLE_TITLE_MIN_CHARS}..={ARTICLE_TITLE_MAX_CHARS} characters, got {chars}"
            ),
        }
    }
}

impl Error for ValidationError {}

pub(crate) fn check_author_name(name: &str) -> Result<(), ValidationError> {
    if name.is_empty() {
        return Err(ValidationError::EmptyAuthorName);
    }
    Ok(())
}

pub(crate) fn check_magazine_name(name: &str) -> Result<(), ValidationError> {
    let chars = name.chars().count();
    if !(MAGAZINE_NAME_MIN_CHARS..=MAGAZINE_NAME_MAX_CHARS).contains(&chars) {
        return Err(ValidationError::MagazineNameLength { chars });
    }
    Ok(())
}

pub(crate) fn check_category(category: &str) -> Result<(), ValidationError> {
    if category.is_empty() {
        return Err(ValidationError::EmptyCategory);
    }
    Ok(())
}

pub(crate) fn check_title(title: &str) -> Result<(), ValidationError> {
    let chars = title.chars().count();
    if !(ARTICLE_TITLE_MIN_CHARS..=ARTICLE_TITLE_MAX_CHARS).contains(&chars) {
        return Err(ValidationError::TitleLength { chars });
    }
    Ok(())
}
