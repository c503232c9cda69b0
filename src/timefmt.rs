//! Brew-time text codec.
//!
//! Brew times are entered and displayed as `MM:SS` but stored as total
//! seconds. Minutes are unbounded; seconds are always two digits in the
//! 0..60 range.

use std::fmt;

/// Rejection reasons for malformed `MM:SS` input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatError {
    /// Input did not split into exactly a minutes and a seconds component.
    Shape,
    /// A component was not a non-negative integer.
    NonNumeric,
    /// Seconds component was 60 or greater.
    SecondsOutOfRange,
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Shape => write!(f, "must be minutes and seconds separated by a colon"),
            Self::NonNumeric => write!(f, "minutes and seconds must be non-negative integers"),
            Self::SecondsOutOfRange => write!(f, "seconds must be less than 60"),
        }
    }
}

impl std::error::Error for FormatError {}

/// Parses `MM:SS` into total seconds.
///
/// Exactly two components split on `:`, both non-negative integers, with
/// the seconds component strictly below 60.
pub fn parse_mm_ss(input: &str) -> Result<u32, FormatError> {
    let mut parts = input.split(':');
    let (Some(minutes), Some(seconds), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err(FormatError::Shape);
    };

    let minutes: u32 = minutes.parse().map_err(|_| FormatError::NonNumeric)?;
    let seconds: u32 = seconds.parse().map_err(|_| FormatError::NonNumeric)?;
    if seconds >= 60 {
        return Err(FormatError::SecondsOutOfRange);
    }

    minutes
        .checked_mul(60)
        .and_then(|m| m.checked_add(seconds))
        .ok_or(FormatError::NonNumeric)
}

/// Renders total seconds as zero-padded `MM:SS`, truncating fractions.
pub fn format_mm_ss(total_seconds: f64) -> String {
    let total = total_seconds.max(0.0) as u64;
    format!("{:02}:{:02}", total / 60, total % 60)
}
