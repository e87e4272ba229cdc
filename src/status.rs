use std::fmt;

use restcriteria_core::FilterValue;

/// Lifecycle status shared by accounts, applications, directories and groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "UPPERCASE"))]
pub enum Status {
    Enabled,
    Disabled,
    /// Accounts only: created but the email address isn't verified yet
    Unverified,
}

impl Status {
    /// Wire value, e.g. `ENABLED`.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Status::Enabled => "ENABLED",
            Status::Disabled => "DISABLED",
            Status::Unverified => "UNVERIFIED",
        }
    }

    /// Parse a status from a string (case-insensitive)
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        if s.eq_ignore_ascii_case("enabled") {
            Some(Status::Enabled)
        } else if s.eq_ignore_ascii_case("disabled") {
            Some(Status::Disabled)
        } else if s.eq_ignore_ascii_case("unverified") {
            Some(Status::Unverified)
        } else {
            None
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<Status> for FilterValue {
    fn from(status: Status) -> Self {
        FilterValue::equals(status.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_parse() {
        assert_eq!(Status::parse("ENABLED"), Some(Status::Enabled));
        assert_eq!(Status::parse("disabled"), Some(Status::Disabled));
        assert_eq!(Status::parse("Unverified"), Some(Status::Unverified));
        assert_eq!(Status::parse("locked"), None);
        assert_eq!(Status::parse(""), None);
    }

    #[test]
    fn test_status_filter_value() {
        assert_eq!(FilterValue::from(Status::Disabled).to_string(), "DISABLED");
        assert_eq!(format!("{}", Status::Enabled), "ENABLED");
    }
}
