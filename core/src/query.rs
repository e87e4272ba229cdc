//! Query serialization.
//!
//! Turns a finished criteria (or a bare options instance) into the ordered
//! parameter list the transport appends to a request URL. Output order is
//! fixed: filters, `orderBy`, `offset`, `limit`, then one `expand` per
//! directive sorted by property name. Nothing here can fail; every value was
//! range checked when it was set.

use std::borrow::Cow;
use std::fmt;

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

use crate::criteria::{CriteriaCore, Direction, SortKey};
use crate::options::{OptionsCore, ResourceOptions};

pub const ORDER_BY: &str = "orderBy";
pub const OFFSET: &str = "offset";
pub const LIMIT: &str = "limit";
pub const EXPAND: &str = "expand";
/// Free-text search filter key
pub const SEARCH: &str = "q";

/// Bytes escaped in keys and values. Unreserved characters stay literal, as do
/// the separators the API itself reads inside a value (`,` `(` `)` `:` `*`).
const QUERY_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~')
    .remove(b',')
    .remove(b'(')
    .remove(b')')
    .remove(b':')
    .remove(b'*');

/// Ordered key/value query parameters.
///
/// Keys may repeat (`expand` does); order is preserved exactly as serialized.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct QueryParams {
    pairs: Vec<(Cow<'static, str>, String)>,
}

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            pairs: Vec::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, key: impl Into<Cow<'static, str>>, value: impl Into<String>) {
        self.pairs.push((key.into(), value.into()));
    }

    /// First value stored under `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Every value stored under `key`, in order.
    pub fn get_all<'a>(&'a self, key: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.pairs
            .iter()
            .filter(move |(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(k, v)| (k.as_ref(), v.as_str()))
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Renders `k=v&k=v` with keys and values percent-encoded.
    pub fn to_query_string(&self) -> String {
        let mut out = String::new();
        for (i, (key, value)) in self.pairs.iter().enumerate() {
            if i > 0 {
                out.push('&');
            }
            out.extend(utf8_percent_encode(key, QUERY_COMPONENT));
            out.push('=');
            out.extend(utf8_percent_encode(value, QUERY_COMPONENT));
        }
        out
    }

    /// Joins `path` and the rendered query, using `&` when `path` already
    /// carries a query string. An empty parameter list returns `path` as is.
    pub fn append_to(&self, path: &str) -> String {
        if self.is_empty() {
            return path.to_owned();
        }
        let sep = if path.contains('?') { '&' } else { '?' };
        format!("{path}{sep}{}", self.to_query_string())
    }
}

impl fmt::Display for QueryParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_query_string())
    }
}

impl IntoIterator for QueryParams {
    type Item = (Cow<'static, str>, String);
    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.pairs.into_iter()
    }
}

/// Serializes a criteria into its canonical parameter list.
pub fn serialize_criteria<O: ResourceOptions>(criteria: &CriteriaCore<O>) -> QueryParams {
    let options = criteria.options().core();
    let mut params = QueryParams::with_capacity(4 + options.len());

    for (key, value) in criteria.filters() {
        params.push(key.to_owned(), value.to_string());
    }

    if !criteria.orderings().is_empty() {
        params.push(ORDER_BY, render_orderings(criteria.orderings()));
    }

    if let Some(offset) = criteria.offset() {
        params.push(OFFSET, offset.to_string());
    }

    if let Some(limit) = criteria.limit() {
        params.push(LIMIT, limit.to_string());
    }

    push_expansions(&mut params, options);
    params
}

/// Serializes options alone: one `expand` per directive.
pub fn serialize_options(options: &OptionsCore) -> QueryParams {
    let mut params = QueryParams::with_capacity(options.len());
    push_expansions(&mut params, options);
    params
}

fn push_expansions(params: &mut QueryParams, options: &OptionsCore) {
    for directive in options.iter() {
        params.push(EXPAND, directive.to_string());
    }
}

/// Joins orderings in sequence order: `attr` or `attr,desc`.
fn render_orderings(keys: &[SortKey]) -> String {
    let mut out = String::new();
    for (i, key) in keys.iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        out.push_str(key.attribute());
        if key.direction() == Direction::Desc {
            out.push_str(",desc");
        }
    }
    out
}
