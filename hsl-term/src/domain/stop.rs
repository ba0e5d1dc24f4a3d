//! Stop identity types.

use std::fmt;

use super::DomainError;

/// A GTFS stop identifier as used by Digitransit, e.g. `HSL:1174505`.
///
/// The value is opaque: the only guarantee is that it is non-empty and free
/// of whitespace, so it can be passed back to the API verbatim.
///
/// # Examples
///
/// ```
/// use hsl_term::domain::StopId;
///
/// let id = StopId::parse("HSL:1174505").unwrap();
/// assert_eq!(id.as_str(), "HSL:1174505");
///
/// assert!(StopId::parse("").is_err());
/// assert!(StopId::parse("HSL 1174505").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct StopId(String);

impl StopId {
    /// Parse a stop identifier.
    pub fn parse(s: &str) -> Result<Self, DomainError> {
        if s.is_empty() || s.chars().any(char::is_whitespace) {
            return Err(DomainError::InvalidStopId(s.to_string()));
        }
        Ok(Self(s.to_string()))
    }

    /// Returns the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for StopId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StopId({})", self.0)
    }
}

impl fmt::Display for StopId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A transit stop as reported by the timetable query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stop {
    pub id: StopId,
    pub name: String,
    /// Short code shown on the stop sign (e.g. "H1234"). Some stops have none.
    pub code: Option<String>,
}

impl Stop {
    pub fn new(id: StopId, name: impl Into<String>, code: Option<String>) -> Self {
        Self {
            id,
            name: name.into(),
            code,
        }
    }

    /// Board title: the stop name followed by its code in parentheses.
    pub fn title(&self) -> String {
        match &self.code {
            Some(code) => format!("{} ({})", self.name, code),
            None => self.name.clone(),
        }
    }
}
