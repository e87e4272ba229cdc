//! Query construction engine for resource-oriented REST APIs.
//!
//! Resource types declared with [`resource!`] accumulate filters, orderings,
//! pagination and relation expansions, and serialize them into the ordered
//! query parameters a transport appends to a request URL.

mod bounds;
pub mod criteria;
pub mod error;
pub mod expansion;
pub mod filter;
mod macros;
pub mod options;
pub mod query;
pub mod tracing;
pub mod transport;

// Re-export key types and traits
pub use criteria::{CriteriaCore, Direction, ResourceCriteria, SortKey};
pub use error::{CriteriaError, Result};
pub use expansion::ExpansionDirective;
pub use filter::{FilterValue, MatchMode};
pub use options::{OptionsCore, ResourceOptions};
pub use query::{QueryParams, serialize_criteria, serialize_options};
pub use transport::Transport;

#[doc(hidden)]
pub mod __private {
    pub use paste::paste;
}
