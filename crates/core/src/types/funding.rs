//! Funding amounts as reported by organizations.
//!
//! Organizations report funding as display strings (`"$50,000"`). The
//! directory keeps the string verbatim for presentation and derives a
//! numeric [`Decimal`] amount for aggregation by stripping everything
//! except digits, matching how the reports are written in the field.

use core::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing a [`Funding`] amount.
#[derive(thiserror::Error, Debug, Clone)]
pub enum FundingError {
    /// The input string is empty.
    #[error("funding amount cannot be empty")]
    Empty,
    /// The input contains no digits to derive an amount from.
    #[error("funding amount must contain at least one digit")]
    NoDigits,
    /// The input string is too long.
    #[error("funding amount must be at most {max} characters")]
    TooLong {
        /// Maximum allowed length.
        max: usize,
    },
}

/// An organization's reported funding, e.g. `"$50,000"`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct Funding(String);

impl Funding {
    /// Maximum accepted length.
    pub const MAX_LENGTH: usize = 32;

    /// Parse a `Funding` from a display string.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is empty, too long, or contains no
    /// digits.
    pub fn parse(s: &str) -> Result<Self, FundingError> {
        if s.is_empty() {
            return Err(FundingError::Empty);
        }
        if s.len() > Self::MAX_LENGTH {
            return Err(FundingError::TooLong {
                max: Self::MAX_LENGTH,
            });
        }
        if !s.chars().any(|c| c.is_ascii_digit()) {
            return Err(FundingError::NoDigits);
        }
        Ok(Self(s.to_owned()))
    }

    /// The zero amount, used when an organization reports no funding.
    #[must_use]
    pub fn zero() -> Self {
        Self("$0".to_owned())
    }

    /// The numeric amount, derived from the digits of the display string.
    #[must_use]
    pub fn amount(&self) -> Decimal {
        let digits: String = self.0.chars().filter(char::is_ascii_digit).collect();
        // A valid Funding always holds at least one digit.
        digits.parse().unwrap_or(Decimal::ZERO)
    }

    /// Returns the display string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Funding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for Funding {
    type Err = FundingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
