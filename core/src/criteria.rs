//! Search criteria: filters, orderings and pagination of a collection query,
//! layered on top of a resource's expansion options.

use std::borrow::Cow;

use smallvec::SmallVec;

use crate::bounds;
use crate::error::Result;
use crate::filter::FilterValue;
use crate::options::ResourceOptions;
use crate::query::{self, QueryParams, SEARCH};
use crate::transport::Transport;

/// Sort direction for `orderBy` entries
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Direction {
    #[default]
    Asc,
    Desc,
}

impl Direction {
    #[inline]
    pub const fn from_ascending(ascending: bool) -> Self {
        if ascending { Self::Asc } else { Self::Desc }
    }

    #[inline]
    pub const fn is_ascending(self) -> bool {
        matches!(self, Self::Asc)
    }
}

/// One entry of the ordering sequence.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawSortKey"))]
pub struct SortKey {
    attribute: Cow<'static, str>,
    direction: Direction,
}

impl SortKey {
    /// Ascending key for a compile-time attribute name - const
    ///
    /// # Panics
    ///
    /// When `attribute` is empty or contains `,` `(` `)` or `:`.
    #[inline]
    pub const fn asc(attribute: &'static str) -> Self {
        assert!(bounds::is_plain_name(attribute), "invalid attribute name");
        Self {
            attribute: Cow::Borrowed(attribute),
            direction: Direction::Asc,
        }
    }

    /// Descending key for a compile-time attribute name - const
    ///
    /// # Panics
    ///
    /// When `attribute` is empty or contains `,` `(` `)` or `:`.
    #[inline]
    pub const fn desc(attribute: &'static str) -> Self {
        assert!(bounds::is_plain_name(attribute), "invalid attribute name");
        Self {
            attribute: Cow::Borrowed(attribute),
            direction: Direction::Desc,
        }
    }

    pub fn new(attribute: impl Into<Cow<'static, str>>, direction: Direction) -> Result<Self> {
        let attribute = attribute.into();
        bounds::name("attribute name", &attribute)?;
        Ok(Self {
            attribute,
            direction,
        })
    }

    #[inline]
    pub fn attribute(&self) -> &str {
        &self.attribute
    }

    #[inline]
    pub const fn direction(&self) -> Direction {
        self.direction
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawSortKey {
    attribute: String,
    direction: Direction,
}

#[cfg(feature = "serde")]
impl TryFrom<RawSortKey> for SortKey {
    type Error = crate::CriteriaError;

    fn try_from(raw: RawSortKey) -> Result<Self> {
        Self::new(raw.attribute, raw.direction)
    }
}

/// Generic state behind every resource's criteria type.
///
/// A criteria is built by one caller through sequential calls and then
/// serialized; nothing here locks, so sharing one across threads while
/// mutating it needs outside synchronization.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CriteriaCore<O> {
    options: O,
    filters: SmallVec<[(Cow<'static, str>, FilterValue); 4]>,
    orderings: SmallVec<[SortKey; 4]>,
    offset: Option<u32>,
    limit: Option<u32>,
}

impl<O: ResourceOptions> CriteriaCore<O> {
    pub fn new() -> Self {
        Self::with_options(O::default())
    }

    pub fn with_options(options: O) -> Self {
        Self {
            options,
            filters: SmallVec::new(),
            orderings: SmallVec::new(),
            offset: None,
            limit: None,
        }
    }

    /// Appends `key`, dropping any earlier entry for the same attribute so the
    /// attribute ends up last with the new direction.
    pub fn push_sort_key(&mut self, key: SortKey) -> &mut Self {
        self.orderings.retain(|k| k.attribute != key.attribute);
        self.orderings.push(key);
        self
    }

    pub fn order_by(
        &mut self,
        attribute: impl Into<Cow<'static, str>>,
        direction: Direction,
    ) -> Result<&mut Self> {
        let key = SortKey::new(attribute, direction)?;
        Ok(self.push_sort_key(key))
    }

    /// Sets the primary-result skip count. Fails when `offset < 0`.
    pub fn set_offset(&mut self, offset: i64) -> Result<&mut Self> {
        self.offset = Some(bounds::offset("offset", offset)?);
        Ok(self)
    }

    /// Sets the primary-result page size. Fails when `limit <= 0`.
    pub fn set_limit(&mut self, limit: i64) -> Result<&mut Self> {
        self.limit = Some(bounds::limit("limit", limit)?);
        Ok(self)
    }

    /// Sets a filter. A key that is already present keeps its position and
    /// takes the new value. Fails on an empty key or one the serializer
    /// emits itself (`orderBy`, `offset`, `limit`, `expand`).
    pub fn set_filter(&mut self, key: impl Into<Cow<'static, str>>, value: FilterValue) -> Result<&mut Self> {
        let key = key.into();
        bounds::filter_key(&key)?;
        Ok(self.upsert_filter(key, value))
    }

    /// Infallible [`set_filter`](Self::set_filter) for compile-time keys.
    ///
    /// # Panics
    ///
    /// On a key [`set_filter`](Self::set_filter) would reject.
    pub fn put_filter(&mut self, key: &'static str, value: FilterValue) -> &mut Self {
        if let Err(err) = bounds::filter_key(key) {
            panic!("{err}");
        }
        self.upsert_filter(Cow::Borrowed(key), value)
    }

    fn upsert_filter(&mut self, key: Cow<'static, str>, value: FilterValue) -> &mut Self {
        match self.filters.iter_mut().find(|(k, _)| *k == key) {
            Some((_, existing)) => *existing = value,
            None => self.filters.push((key, value)),
        }
        self
    }

    pub fn remove_filter(&mut self, key: &str) -> Option<FilterValue> {
        let pos = self.filters.iter().position(|(k, _)| k == key)?;
        Some(self.filters.remove(pos).1)
    }

    #[inline]
    pub fn options(&self) -> &O {
        &self.options
    }

    #[inline]
    pub fn options_mut(&mut self) -> &mut O {
        &mut self.options
    }

    pub fn into_options(self) -> O {
        self.options
    }

    pub fn filters(&self) -> impl Iterator<Item = (&str, &FilterValue)> {
        self.filters.iter().map(|(k, v)| (k.as_ref(), v))
    }

    pub fn filter(&self, key: &str) -> Option<&FilterValue> {
        self.filters.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    #[inline]
    pub fn orderings(&self) -> &[SortKey] {
        &self.orderings
    }

    #[inline]
    pub const fn offset(&self) -> Option<u32> {
        self.offset
    }

    #[inline]
    pub const fn limit(&self) -> Option<u32> {
        self.limit
    }
}

/// A resource-specific criteria type.
///
/// Implementors wrap a [`CriteriaCore`] parameterized by their options type
/// and add named `order_by_*`, `where_*` and `expand_*` methods for their
/// resource's vocabulary. The provided methods form the generic fluent
/// surface; every one of them consumes and returns the criteria so calls
/// chain. Usually generated with [`resource!`](crate::resource).
pub trait ResourceCriteria: Default + Sized {
    type Options: ResourceOptions;

    /// Collection path the criteria is issued against, e.g. `/applications`.
    const PATH: &'static str;

    fn core(&self) -> &CriteriaCore<Self::Options>;

    fn core_mut(&mut self) -> &mut CriteriaCore<Self::Options>;

    /// Orders ascending by `attribute`.
    fn order_by(mut self, attribute: impl Into<Cow<'static, str>>) -> Result<Self> {
        self.core_mut().order_by(attribute, Direction::Asc)?;
        Ok(self)
    }

    /// Orders by `attribute` in the given direction.
    fn order_by_dir(mut self, attribute: impl Into<Cow<'static, str>>, ascending: bool) -> Result<Self> {
        self.core_mut()
            .order_by(attribute, Direction::from_ascending(ascending))?;
        Ok(self)
    }

    /// Skips the first `offset` results. Fails when `offset < 0`.
    fn offset_by(mut self, offset: i64) -> Result<Self> {
        self.core_mut().set_offset(offset)?;
        Ok(self)
    }

    /// Returns at most `limit` results. Fails when `limit <= 0`.
    fn limit_to(mut self, limit: i64) -> Result<Self> {
        self.core_mut().set_limit(limit)?;
        Ok(self)
    }

    /// Filters on an arbitrary attribute.
    fn filter(mut self, key: impl Into<Cow<'static, str>>, value: impl Into<FilterValue>) -> Result<Self> {
        self.core_mut().set_filter(key, value.into())?;
        Ok(self)
    }

    /// Free-text search across the resource's searchable attributes.
    fn search(mut self, text: impl Into<String>) -> Self {
        self.core_mut().put_filter(SEARCH, FilterValue::equals(text));
        self
    }

    fn expand(mut self, property: impl Into<Cow<'static, str>>) -> Result<Self> {
        self.core_mut().options_mut().core_mut().expand(property)?;
        Ok(self)
    }

    fn expand_limited(mut self, property: impl Into<Cow<'static, str>>, limit: i64) -> Result<Self> {
        self.core_mut()
            .options_mut()
            .core_mut()
            .expand_limited(property, limit)?;
        Ok(self)
    }

    fn expand_paged(
        mut self,
        property: impl Into<Cow<'static, str>>,
        limit: i64,
        offset: i64,
    ) -> Result<Self> {
        self.core_mut()
            .options_mut()
            .core_mut()
            .expand_paged(property, limit, offset)?;
        Ok(self)
    }

    fn options(&self) -> &Self::Options {
        self.core().options()
    }

    fn options_mut(&mut self) -> &mut Self::Options {
        self.core_mut().options_mut()
    }

    fn to_query_params(&self) -> QueryParams {
        let params = query::serialize_criteria(self.core());
        crate::restcriteria_trace_query!(
            <Self::Options as ResourceOptions>::RESOURCE,
            params.len()
        );
        params
    }

    fn into_query_params(self) -> QueryParams {
        self.to_query_params()
    }

    /// Serializes the criteria and hands it to `transport` against [`Self::PATH`].
    fn execute<T: Transport>(self, transport: &T) -> std::result::Result<T::Response, T::Error> {
        let params = self.into_query_params();
        crate::restcriteria_trace_request!(Self::PATH, params);
        transport.issue_request(Self::PATH, &params)
    }
}
