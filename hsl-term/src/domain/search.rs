//! Stop search terms.

use std::fmt;

use super::DomainError;

/// Search terms must be longer than this many characters.
pub const MIN_SEARCH_CHARS: usize = 3;

/// A validated stop search term: a stop name fragment or stop number.
///
/// # Examples
///
/// ```
/// use hsl_term::domain::SearchTerm;
///
/// assert_eq!(SearchTerm::parse(" Kamppi ").unwrap().as_str(), "Kamppi");
/// assert!(SearchTerm::parse("1517").is_ok());
/// assert!(SearchTerm::parse("ab").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTerm(String);

impl SearchTerm {
    /// Parse a search term, trimming surrounding whitespace.
    ///
    /// Length is counted in characters, so "Töölö" is five.
    pub fn parse(s: &str) -> Result<Self, DomainError> {
        let trimmed = s.trim();
        if trimmed.chars().count() <= MIN_SEARCH_CHARS {
            return Err(DomainError::SearchTermTooShort(trimmed.to_string()));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SearchTerm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
