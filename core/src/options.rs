//! Expansion options: the per-resource accumulator of [`ExpansionDirective`]s.

use std::borrow::Cow;
use std::collections::BTreeMap;

use crate::error::Result;
use crate::expansion::ExpansionDirective;
use crate::query::{self, QueryParams};

/// Untyped storage behind every resource's options type.
///
/// Directives are keyed by property name, so expanding the same relation
/// twice keeps only the most recent directive. Iteration is in property
/// name order, which is what makes serialization deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OptionsCore {
    expansions: BTreeMap<Cow<'static, str>, ExpansionDirective>,
}

impl OptionsCore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a directive, returning the one it replaced.
    pub fn insert(&mut self, directive: ExpansionDirective) -> Option<ExpansionDirective> {
        self.expansions.insert(directive.key(), directive)
    }

    /// Expands `property` without pagination.
    pub fn expand(&mut self, property: impl Into<Cow<'static, str>>) -> Result<&mut Self> {
        self.insert(ExpansionDirective::new(property)?);
        Ok(self)
    }

    /// Expands `property` with a page size.
    pub fn expand_limited(
        &mut self,
        property: impl Into<Cow<'static, str>>,
        limit: i64,
    ) -> Result<&mut Self> {
        self.insert(ExpansionDirective::limited(property, limit)?);
        Ok(self)
    }

    /// Expands `property` with a page size and skip count.
    pub fn expand_paged(
        &mut self,
        property: impl Into<Cow<'static, str>>,
        limit: i64,
        offset: i64,
    ) -> Result<&mut Self> {
        self.insert(ExpansionDirective::paged(property, limit, offset)?);
        Ok(self)
    }

    pub fn get(&self, property: &str) -> Option<&ExpansionDirective> {
        self.expansions.get(property)
    }

    pub fn remove(&mut self, property: &str) -> Option<ExpansionDirective> {
        self.expansions.remove(property)
    }

    /// Directives sorted by property name.
    pub fn iter(&self) -> impl Iterator<Item = &ExpansionDirective> {
        self.expansions.values()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.expansions.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.expansions.is_empty()
    }
}

/// A resource-specific options type.
///
/// Implementors are thin wrappers around an [`OptionsCore`]; they add named
/// `expand_*` methods for the relations their resource actually has and get
/// the generic fluent surface from the provided methods here. Usually
/// generated with [`resource!`](crate::resource).
pub trait ResourceOptions: Default + Sized {
    /// Resource name, used in trace output.
    const RESOURCE: &'static str;

    fn core(&self) -> &OptionsCore;

    fn core_mut(&mut self) -> &mut OptionsCore;

    /// Expands an arbitrary relation without pagination.
    fn expand(mut self, property: impl Into<Cow<'static, str>>) -> Result<Self> {
        self.core_mut().expand(property)?;
        Ok(self)
    }

    /// Expands an arbitrary relation with a page size.
    ///
    /// Fails with an invalid-argument error when `limit <= 0`.
    fn expand_limited(mut self, property: impl Into<Cow<'static, str>>, limit: i64) -> Result<Self> {
        self.core_mut().expand_limited(property, limit)?;
        Ok(self)
    }

    /// Expands an arbitrary relation with a page size and skip count.
    ///
    /// Fails with an invalid-argument error when `limit <= 0` or `offset < 0`.
    fn expand_paged(
        mut self,
        property: impl Into<Cow<'static, str>>,
        limit: i64,
        offset: i64,
    ) -> Result<Self> {
        self.core_mut().expand_paged(property, limit, offset)?;
        Ok(self)
    }

    /// Serializes the expansions alone, for fetching a single resource.
    fn to_query_params(&self) -> QueryParams {
        let params = query::serialize_options(self.core());
        crate::restcriteria_trace_query!(Self::RESOURCE, params.len());
        params
    }
}
