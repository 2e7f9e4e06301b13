//! Boil duration parsing and remaining-time formatting.

use std::num::ParseFloatError;

/// Errors produced when the duration text cannot be used as a boil duration.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum DurationError {
    /// The text was empty after trimming whitespace.
    #[display("duration is empty")]
    Empty,
    /// The text is not a number.
    #[display("invalid duration {input:?}: {source}")]
    Invalid {
        /// The trimmed input text.
        input: String,
        /// The underlying parse failure.
        source: ParseFloatError,
    },
    /// The number is zero, negative, or not finite.
    #[display("duration must be a positive number of seconds, got {input:?}")]
    NotPositive {
        /// The trimmed input text.
        input: String,
    },
}

/// Parses a duration in seconds from user input.
///
/// Surrounding whitespace is ignored.
///
/// # Errors
///
/// Returns [`DurationError`] if the text is empty, not a number, or not a
/// positive finite number.
///
/// # Examples
///
/// ```
/// use eggtimer_core::parse_duration;
///
/// assert_eq!(parse_duration(" 30 "), Ok(30.0));
/// assert!(parse_duration("abc").is_err());
/// ```
pub fn parse_duration(text: &str) -> Result<f64, DurationError> {
    let input = text.trim();
    if input.is_empty() {
        return Err(DurationError::Empty);
    }
    let value = input
        .parse::<f64>()
        .map_err(|source| DurationError::Invalid {
            input: input.to_owned(),
            source,
        })?;
    if !value.is_finite() || value <= 0.0 {
        return Err(DurationError::NotPositive {
            input: input.to_owned(),
        });
    }
    Ok(value)
}

/// Formats remaining seconds with one decimal, rounded to the nearest tenth.
#[must_use]
pub fn format_remaining(seconds: f64) -> String {
    format!("{:.1}", (seconds * 10.0).round() / 10.0)
}
