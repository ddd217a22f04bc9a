use thiserror::Error;
use uuid::Uuid;
use crate::models::{Review, REVIEW_HIGHLIGHTS};

pub const MAX_COMMENT_CHARS: usize = 2000;

#[derive(Debug, Error, PartialEq)]
pub enum ReviewError {
    #[error("Star rating must be between 1 and 5, got {0}")]
    InvalidStars(u8),

    #[error("Unknown highlight: {0}")]
    UnknownHighlight(String),

    #[error("Comment exceeds {} characters", MAX_COMMENT_CHARS)]
    TextTooLong,
}

/// Validate a rating and give it a fabricated id
///
/// Highlights are matched case-insensitively and normalized to their
/// canonical spelling; duplicates collapse. Blank comments become `None`.
pub fn submit_review(
    listing_id: u32,
    stars: u8,
    highlights: &[String],
    comment: Option<&str>,
) -> Result<Review, ReviewError> {
    if !(1..=5).contains(&stars) {
        return Err(ReviewError::InvalidStars(stars));
    }

    let mut normalized: Vec<String> = Vec::with_capacity(highlights.len());
    for highlight in highlights {
        let canonical = REVIEW_HIGHLIGHTS
            .iter()
            .find(|known| known.eq_ignore_ascii_case(highlight.trim()))
            .ok_or_else(|| ReviewError::UnknownHighlight(highlight.clone()))?;

        if !normalized.iter().any(|h| h == canonical) {
            normalized.push(canonical.to_string());
        }
    }

    let comment = comment.map(str::trim).filter(|c| !c.is_empty());
    if comment.is_some_and(|c| c.chars().count() > MAX_COMMENT_CHARS) {
        return Err(ReviewError::TextTooLong);
    }

    Ok(Review {
        id: Uuid::new_v4().to_string(),
        listing_id,
        stars,
        highlights: normalized,
        comment: comment.map(str::to_string),
        created_at: chrono::Utc::now(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_known_highlights() {
        let highlights = vec!["clean".to_string(), "Would Rebook".to_string(), "CLEAN".to_string()];
        let review = submit_review(1, 5, &highlights, Some("  Great stay  ")).unwrap();

        assert_eq!(review.highlights, vec!["Clean", "Would Rebook"]);
        assert_eq!(review.comment.as_deref(), Some("Great stay"));
    }

    #[test]
    fn test_rejects_bad_stars() {
        assert_eq!(submit_review(1, 0, &[], None).unwrap_err(), ReviewError::InvalidStars(0));
        assert_eq!(submit_review(1, 6, &[], None).unwrap_err(), ReviewError::InvalidStars(6));
    }

    #[test]
    fn test_rejects_unknown_highlight() {
        let err = submit_review(1, 4, &["Has pool".to_string()], None).unwrap_err();
        assert_eq!(err, ReviewError::UnknownHighlight("Has pool".to_string()));
    }

    #[test]
    fn test_blank_comment_dropped() {
        let review = submit_review(1, 3, &[], Some("   ")).unwrap();
        assert!(review.comment.is_none());
    }
}
