//! Resource vocabulary: the relations, order attributes and filter
//! attributes each resource type accepts.

mod account;
mod application;
mod directory;
mod group;
mod group_membership;
mod tenant;

pub use account::{AccountCriteria, AccountOptions};
pub use application::{ApplicationCriteria, ApplicationOptions};
pub use directory::{DirectoryCriteria, DirectoryOptions};
pub use group::{GroupCriteria, GroupOptions};
pub use group_membership::{GroupMembershipCriteria, GroupMembershipOptions};
pub use tenant::{TenantCriteria, TenantOptions};
