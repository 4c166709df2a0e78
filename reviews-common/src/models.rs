//! Review models
//!
//! `Review` mirrors a row of the `thereviews` table. Input coming from a
//! form goes through `NewReview::new`, which is the only place rating and
//! title bounds are checked.

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Maximum title length, matching the `title` column bound
pub const MAX_TITLE_LEN: usize = 60;

/// A stored review
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Review {
    pub id: i64,
    pub title: String,
    pub text: String,
    pub rating: i64,
}

/// Star rating, bounded to `Rating::MIN..=Rating::MAX`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Rating(i64);

impl Rating {
    pub const MIN: i64 = 0;
    pub const MAX: i64 = 5;

    pub fn new(value: i64) -> Result<Self> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Self(value))
        } else {
            Err(Error::InvalidInput(format!(
                "rating must be between {} and {}, got {}",
                Self::MIN,
                Self::MAX,
                value
            )))
        }
    }

    /// Parse a rating submitted as form text
    pub fn parse(raw: &str) -> Result<Self> {
        let value = raw
            .trim()
            .parse::<i64>()
            .map_err(|_| Error::InvalidInput(format!("rating is not a whole number: {:?}", raw)))?;
        Self::new(value)
    }

    pub fn value(self) -> i64 {
        self.0
    }
}

/// Validated field values for create and update
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewReview {
    pub title: String,
    pub text: String,
    pub rating: Rating,
}

impl NewReview {
    pub fn new(title: impl Into<String>, text: impl Into<String>, rating: Rating) -> Result<Self> {
        let title = title.into();
        if title.chars().count() > MAX_TITLE_LEN {
            return Err(Error::InvalidInput(format!(
                "title must be at most {} characters",
                MAX_TITLE_LEN
            )));
        }

        Ok(Self {
            title,
            text: text.into(),
            rating,
        })
    }
}

/// Result of a write that targets an existing row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Success,
    NotFound,
}

impl Outcome {
    pub(crate) fn from_rows_affected(rows: u64) -> Self {
        if rows == 0 {
            Outcome::NotFound
        } else {
            Outcome::Success
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rating_bounds() {
        assert_eq!(Rating::new(0).unwrap().value(), 0);
        assert_eq!(Rating::new(5).unwrap().value(), 5);
        assert!(matches!(Rating::new(6), Err(Error::InvalidInput(_))));
        assert!(matches!(Rating::new(-1), Err(Error::InvalidInput(_))));
    }

    #[test]
    fn test_rating_parse_form_text() {
        assert_eq!(Rating::parse(" 4 ").unwrap(), Rating::new(4).unwrap());
        assert!(Rating::parse("four").is_err());
        assert!(Rating::parse("").is_err());
        assert!(Rating::parse("3.5").is_err());
    }

    #[test]
    fn test_new_review_title_limit() {
        let rating = Rating::new(3).unwrap();
        let max = "a".repeat(MAX_TITLE_LEN);
        assert!(NewReview::new(max, "text", rating).is_ok());

        let too_long = "a".repeat(MAX_TITLE_LEN + 1);
        assert!(matches!(
            NewReview::new(too_long, "text", rating),
            Err(Error::InvalidInput(_))
        ));
    }

    #[test]
    fn test_outcome_from_rows_affected() {
        assert_eq!(Outcome::from_rows_affected(0), Outcome::NotFound);
        assert_eq!(Outcome::from_rows_affected(1), Outcome::Success);
    }
}
