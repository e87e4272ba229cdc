/// Declares the options and criteria types for one resource.
///
/// Generates `<Name>Options` and `<Name>Criteria`. Each relation, order
/// attribute and filter attribute becomes a named method that forwards to the
/// generic engine with a fixed wire name, so a resource only ever offers the
/// vocabulary declared here:
///
/// - `expand`: singular relations, `expand_<rel>()`
/// - `collections`: collection relations, `expand_<rel>()`,
///   `expand_<rel>_limited(limit)` and `expand_<rel>_paged(limit, offset)`
/// - `order`: `order_by_<attr>()` and `order_by_<attr>_desc()`
/// - `filter`: `where_<attr>(value)`
///
/// ```
/// use restcriteria_core::{ResourceCriteria, resource};
///
/// resource! {
///     /// A tenant application.
///     pub Application {
///         path: "/applications",
///         expand: [tenant => "tenant"],
///         collections: [accounts => "accounts"],
///         order: [name => "name"],
///         filter: [name => "name"],
///     }
/// }
///
/// # fn main() -> restcriteria_core::Result<()> {
/// let criteria = ApplicationCriteria::new()
///     .order_by_name()
///     .limit_to(25)?
///     .expand_accounts_paged(5, 0)?;
///
/// assert_eq!(
///     criteria.to_query_params().to_string(),
///     "orderBy=name&limit=25&expand=accounts(offset:0,limit:5)"
/// );
/// # Ok(())
/// # }
/// ```
#[macro_export]
macro_rules! resource {
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident {
            path: $path:literal,
            expand: [$($one:ident => $one_prop:literal),* $(,)?],
            collections: [$($many:ident => $many_prop:literal),* $(,)?],
            order: [$($ord:ident => $ord_attr:literal),* $(,)?],
            filter: [$($flt:ident => $flt_attr:literal),* $(,)?] $(,)?
        }
    ) => {
        $crate::__private::paste! {
            #[doc = concat!("Expansion options for [`", stringify!($name), "Criteria`] and single-resource fetches.")]
            #[derive(Debug, Clone, Default, PartialEq, Eq)]
            $vis struct [<$name Options>] {
                core: $crate::OptionsCore,
            }

            impl [<$name Options>] {
                pub fn new() -> Self {
                    Self::default()
                }

                $(
                    pub fn [<expand_ $one>](mut self) -> Self {
                        self.core.insert($crate::ExpansionDirective::named($one_prop));
                        self
                    }
                )*

                $(
                    pub fn [<expand_ $many>](mut self) -> Self {
                        self.core.insert($crate::ExpansionDirective::named($many_prop));
                        self
                    }

                    pub fn [<expand_ $many _limited>](mut self, limit: i64) -> $crate::Result<Self> {
                        self.core.expand_limited($many_prop, limit)?;
                        Ok(self)
                    }

                    pub fn [<expand_ $many _paged>](mut self, limit: i64, offset: i64) -> $crate::Result<Self> {
                        self.core.expand_paged($many_prop, limit, offset)?;
                        Ok(self)
                    }
                )*
            }

            impl $crate::ResourceOptions for [<$name Options>] {
                const RESOURCE: &'static str = stringify!($name);

                fn core(&self) -> &$crate::OptionsCore {
                    &self.core
                }

                fn core_mut(&mut self) -> &mut $crate::OptionsCore {
                    &mut self.core
                }
            }

            $(#[$meta])*
            #[derive(Debug, Clone, Default, PartialEq, Eq)]
            $vis struct [<$name Criteria>] {
                core: $crate::CriteriaCore<[<$name Options>]>,
            }

            impl [<$name Criteria>] {
                pub fn new() -> Self {
                    Self::default()
                }

                pub fn with_options(options: [<$name Options>]) -> Self {
                    Self {
                        core: $crate::CriteriaCore::with_options(options),
                    }
                }

                $(
                    pub fn [<order_by_ $ord>](mut self) -> Self {
                        self.core.push_sort_key($crate::SortKey::asc($ord_attr));
                        self
                    }

                    pub fn [<order_by_ $ord _desc>](mut self) -> Self {
                        self.core.push_sort_key($crate::SortKey::desc($ord_attr));
                        self
                    }
                )*

                $(
                    pub fn [<where_ $flt>](mut self, value: impl Into<$crate::FilterValue>) -> Self {
                        self.core.put_filter($flt_attr, value.into());
                        self
                    }
                )*

                $(
                    pub fn [<expand_ $one>](mut self) -> Self {
                        self.options_core().insert($crate::ExpansionDirective::named($one_prop));
                        self
                    }
                )*

                $(
                    pub fn [<expand_ $many>](mut self) -> Self {
                        self.options_core().insert($crate::ExpansionDirective::named($many_prop));
                        self
                    }

                    pub fn [<expand_ $many _limited>](mut self, limit: i64) -> $crate::Result<Self> {
                        self.options_core().expand_limited($many_prop, limit)?;
                        Ok(self)
                    }

                    pub fn [<expand_ $many _paged>](mut self, limit: i64, offset: i64) -> $crate::Result<Self> {
                        self.options_core().expand_paged($many_prop, limit, offset)?;
                        Ok(self)
                    }
                )*

                #[allow(dead_code)]
                fn options_core(&mut self) -> &mut $crate::OptionsCore {
                    $crate::ResourceOptions::core_mut(self.core.options_mut())
                }
            }

            impl From<[<$name Options>]> for [<$name Criteria>] {
                fn from(options: [<$name Options>]) -> Self {
                    Self::with_options(options)
                }
            }

            impl $crate::ResourceCriteria for [<$name Criteria>] {
                type Options = [<$name Options>];

                const PATH: &'static str = $path;

                fn core(&self) -> &$crate::CriteriaCore<Self::Options> {
                    &self.core
                }

                fn core_mut(&mut self) -> &mut $crate::CriteriaCore<Self::Options> {
                    &mut self.core
                }
            }
        }
    };
}
