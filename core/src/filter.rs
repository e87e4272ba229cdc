//! Attribute filter values.
//!
//! The engine treats filters as opaque key/value pairs; the only structure
//! it knows about is the wildcard convention of the attribute search API,
//! where a leading and/or trailing `*` turns an exact match into a prefix,
//! suffix or substring match.

use std::fmt;

/// How a filter value is matched against the attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum MatchMode {
    /// `value`
    #[default]
    Equals,
    /// `value*`
    StartsWith,
    /// `*value`
    EndsWith,
    /// `*value*`
    Contains,
}

/// A filter value together with its match mode.
///
/// # Examples
///
/// ```
/// use restcriteria_core::FilterValue;
///
/// assert_eq!(FilterValue::equals("Admins").to_string(), "Admins");
/// assert_eq!(FilterValue::starts_with("Adm").to_string(), "Adm*");
/// assert_eq!(FilterValue::contains("min").to_string(), "*min*");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FilterValue {
    value: String,
    mode: MatchMode,
}

impl FilterValue {
    pub fn new(value: impl Into<String>, mode: MatchMode) -> Self {
        Self {
            value: value.into(),
            mode,
        }
    }

    pub fn equals(value: impl Into<String>) -> Self {
        Self::new(value, MatchMode::Equals)
    }

    pub fn starts_with(value: impl Into<String>) -> Self {
        Self::new(value, MatchMode::StartsWith)
    }

    pub fn ends_with(value: impl Into<String>) -> Self {
        Self::new(value, MatchMode::EndsWith)
    }

    pub fn contains(value: impl Into<String>) -> Self {
        Self::new(value, MatchMode::Contains)
    }

    #[inline]
    pub fn value(&self) -> &str {
        &self.value
    }

    #[inline]
    pub const fn mode(&self) -> MatchMode {
        self.mode
    }
}

impl From<&str> for FilterValue {
    fn from(value: &str) -> Self {
        Self::equals(value)
    }
}

impl From<String> for FilterValue {
    fn from(value: String) -> Self {
        Self::equals(value)
    }
}

impl fmt::Display for FilterValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.mode {
            MatchMode::Equals => f.write_str(&self.value),
            MatchMode::StartsWith => write!(f, "{}*", self.value),
            MatchMode::EndsWith => write!(f, "*{}", self.value),
            MatchMode::Contains => write!(f, "*{}*", self.value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_rendering() {
        assert_eq!(FilterValue::ends_with("@example.com").to_string(), "*@example.com");
        assert_eq!(FilterValue::from("ENABLED").to_string(), "ENABLED");
        assert_eq!(FilterValue::from(String::from("x")).mode(), MatchMode::Equals);
    }

    #[test]
    fn test_empty_value_with_wildcards() {
        assert_eq!(FilterValue::contains("").to_string(), "**");
        assert_eq!(FilterValue::equals("").value(), "");
    }
}
