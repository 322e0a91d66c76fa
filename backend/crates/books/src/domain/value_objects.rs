//! Rating Value Object
//!
//! 評価値は 1〜5 の整数。範囲外の値は保存層に到達する前に拒否する。
//!
//! ## 設計方針
//! - JSON 入力の時点で検証（`try_from = "i16"`）
//! - DB 行の復元も同じ検証を通す（CHECK 制約と二重の防御）

use serde::{Deserialize, Serialize};
use std::fmt;

/// Minimum accepted rating
pub const RATING_MIN: i16 = 1;

/// Maximum accepted rating
pub const RATING_MAX: i16 = 5;

/// Error returned when rating validation fails
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RatingError {
    pub value: i16,
}

impl fmt::Display for RatingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Rating {} is out of range ({RATING_MIN}..={RATING_MAX})",
            self.value
        )
    }
}

impl std::error::Error for RatingError {}

/// Validated rating
///
/// # Invariants
/// - Value between `RATING_MIN` and `RATING_MAX` inclusive
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i16", into = "i16")]
pub struct Rating(i16);

impl Rating {
    /// Create a new Rating, validating the range
    pub fn new(value: i16) -> Result<Self, RatingError> {
        if (RATING_MIN..=RATING_MAX).contains(&value) {
            Ok(Self(value))
        } else {
            Err(RatingError { value })
        }
    }

    /// Get the inner value
    #[inline]
    pub fn value(&self) -> i16 {
        self.0
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<i16> for Rating {
    type Error = RatingError;

    fn try_from(value: i16) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Rating> for i16 {
    fn from(rating: Rating) -> Self {
        rating.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_range() {
        for value in RATING_MIN..=RATING_MAX {
            assert_eq!(Rating::new(value).unwrap().value(), value);
        }
    }

    #[test]
    fn test_out_of_range() {
        assert_eq!(Rating::new(0), Err(RatingError { value: 0 }));
        assert_eq!(Rating::new(6), Err(RatingError { value: 6 }));
        assert_eq!(Rating::new(-3), Err(RatingError { value: -3 }));
    }

    #[test]
    fn test_serialize() {
        let rating = Rating::new(4).unwrap();
        assert_eq!(serde_json::to_string(&rating).unwrap(), "4");
    }

    #[test]
    fn test_deserialize() {
        let rating: Rating = serde_json::from_str("5").unwrap();
        assert_eq!(rating.value(), 5);
    }

    #[test]
    fn test_deserialize_out_of_range() {
        let result: Result<Rating, _> = serde_json::from_str("9");
        assert!(result.is_err());
    }
}
