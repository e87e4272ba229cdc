//! Relation expansion directives.

use std::borrow::Cow;
use std::fmt;

use crate::bounds;
use crate::error::Result;

/// "Also include related resource R", optionally paginated.
///
/// Pagination only makes sense for collection relations. The resource types
/// generated by [`resource!`](crate::resource) only offer the paginated
/// constructors for those, so a singular relation such as `tenant` can't be
/// expanded with a limit through the typed surface.
///
/// # Examples
///
/// ```
/// use restcriteria_core::ExpansionDirective;
///
/// let d = ExpansionDirective::paged("accounts", 5, 0).unwrap();
/// assert_eq!(d.to_string(), "accounts(offset:0,limit:5)");
///
/// let d = ExpansionDirective::named("tenant");
/// assert_eq!(d.to_string(), "tenant");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawExpansion"))]
pub struct ExpansionDirective {
    property: Cow<'static, str>,
    limit: Option<u32>,
    offset: Option<u32>,
}

impl ExpansionDirective {
    /// Unpaginated directive for a compile-time relation name - const
    ///
    /// # Panics
    ///
    /// When `property` is empty or contains `,` `(` `)` or `:`. In a const
    /// context that is a compile error.
    #[inline]
    pub const fn named(property: &'static str) -> Self {
        assert!(bounds::is_plain_name(property), "invalid relation name");
        Self {
            property: Cow::Borrowed(property),
            limit: None,
            offset: None,
        }
    }

    /// Unpaginated directive. Fails on an empty name or one containing
    /// `,` `(` `)` or `:`.
    pub fn new(property: impl Into<Cow<'static, str>>) -> Result<Self> {
        let property = property.into();
        bounds::name("property name", &property)?;
        Ok(Self {
            property,
            limit: None,
            offset: None,
        })
    }

    /// Directive carrying a page size only.
    pub fn limited(property: impl Into<Cow<'static, str>>, limit: i64) -> Result<Self> {
        let limit = bounds::limit("limit", limit)?;
        Ok(Self {
            limit: Some(limit),
            ..Self::new(property)?
        })
    }

    /// Directive carrying both page size and skip count.
    pub fn paged(property: impl Into<Cow<'static, str>>, limit: i64, offset: i64) -> Result<Self> {
        let limit = bounds::limit("limit", limit)?;
        let offset = bounds::offset("offset", offset)?;
        Ok(Self {
            limit: Some(limit),
            offset: Some(offset),
            ..Self::new(property)?
        })
    }

    /// The relation name, e.g. `accounts`.
    #[inline]
    pub fn property(&self) -> &str {
        &self.property
    }

    #[inline]
    pub const fn limit(&self) -> Option<u32> {
        self.limit
    }

    #[inline]
    pub const fn offset(&self) -> Option<u32> {
        self.offset
    }

    pub(crate) fn key(&self) -> Cow<'static, str> {
        self.property.clone()
    }

    /// Whether either pagination field is present.
    #[inline]
    pub const fn is_paged(&self) -> bool {
        self.limit.is_some() || self.offset.is_some()
    }
}

/// Wire shape accepted by `Deserialize`, checked through the same rules as
/// the constructors.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawExpansion {
    property: String,
    limit: Option<u32>,
    offset: Option<u32>,
}

#[cfg(feature = "serde")]
impl TryFrom<RawExpansion> for ExpansionDirective {
    type Error = crate::CriteriaError;

    fn try_from(raw: RawExpansion) -> Result<Self> {
        let limit = match raw.limit {
            Some(limit) => Some(bounds::limit("limit", i64::from(limit))?),
            None => None,
        };
        Ok(Self {
            limit,
            offset: raw.offset,
            ..Self::new(raw.property)?
        })
    }
}

/// Renders the wire value of an `expand` parameter: `name` or
/// `name(offset:<o>,limit:<l>)` with absent fields left out.
impl fmt::Display for ExpansionDirective {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.property)?;
        if !self.is_paged() {
            return Ok(());
        }
        f.write_str("(")?;
        let mut sep = "";
        if let Some(offset) = self.offset {
            write!(f, "offset:{offset}")?;
            sep = ",";
        }
        if let Some(limit) = self.limit {
            write!(f, "{sep}limit:{limit}")?;
        }
        f.write_str(")")
    }
}
