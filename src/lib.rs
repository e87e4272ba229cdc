//! # restcriteria
//!
//! Type-safe search criteria and relation expansion for resource-oriented
//! REST APIs: build filters, orderings, pagination and `expand` directives
//! fluently, then hand the serialized query to your HTTP transport.
//!
//! ## Quick Start
//!
//! ```rust
//! use restcriteria::prelude::*;
//!
//! # fn main() -> restcriteria::Result<()> {
//! let criteria = ApplicationCriteria::new()
//!     .where_status(Status::Enabled)
//!     .order_by_name()
//!     .offset_by(10)?
//!     .limit_to(25)?
//!     .expand_accounts_paged(5, 0)?;
//!
//! assert_eq!(
//!     criteria.to_query_params().to_string(),
//!     "status=ENABLED&orderBy=name&offset=10&limit=25&expand=accounts(offset:0,limit:5)"
//! );
//! # Ok(())
//! # }
//! ```
//!
//! ## Resources
//!
//! | Resource        | Singular relations     | Collection relations                 |
//! |-----------------|------------------------|--------------------------------------|
//! | Account         | directory, tenant      | groups, groupMemberships             |
//! | Application     | tenant                 | accounts, groups                     |
//! | Directory       | tenant                 | accounts, groups                     |
//! | Group           | directory, tenant      | accounts, accountMemberships         |
//! | GroupMembership | account, group         |                                      |
//! | Tenant          |                        | applications, directories            |
//!
//! Only collection relations offer `_limited`/`_paged` expansion methods; a
//! singular relation can't be paginated through the typed surface:
//!
//! ```compile_fail
//! use restcriteria::prelude::*;
//!
//! let _ = ApplicationCriteria::new().expand_tenant_limited(5);
//! ```
//!
//! The generic entry points stay available for relations the typed surface
//! doesn't know about, and they still range-check their arguments:
//!
//! ```
//! use restcriteria::prelude::*;
//!
//! assert!(ApplicationOptions::new().expand_limited("tenant", 0).is_err());
//! ```
//!
//! New resources are declared with [`resource!`].

mod resources;
mod status;

// =============================================================================
// Root-level exports
// =============================================================================

/// Result type for builder operations
pub use restcriteria_core::error::Result;

/// Resource declaration macro
pub use restcriteria_core::resource;

/// Error types
pub mod error {
    pub use restcriteria_core::error::CriteriaError;
}

/// Generic engine: cores, directives, serializer and transport seam.
pub mod core {
    pub use restcriteria_core::*;
}

pub use resources::*;
pub use status::Status;

/// Everything needed to build and send criteria.
pub mod prelude {
    pub use crate::Status;
    pub use crate::error::CriteriaError;
    pub use crate::resources::*;
    pub use restcriteria_core::{
        Direction, ExpansionDirective, FilterValue, MatchMode, QueryParams, ResourceCriteria,
        ResourceOptions, Transport,
    };
}
