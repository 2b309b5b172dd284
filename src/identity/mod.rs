/// Invoking-User Identity Resolution
///
/// Determines which account is effectively running the current process,
/// caching the answer per effective uid and falling back to an
/// environment-supplied name when the platform account database is
/// unavailable or inconclusive.

pub mod cache;
pub mod resolver;
pub mod source;

pub use cache::IdentityCache;
pub use resolver::{IdentityResolver, IdentityResolverConfig};
pub use source::{ProcessIdentitySource, SystemIdentitySource};

use serde::Serialize;

/// Cached invoking-user entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CachedIdentity {
    /// Effective uid the name was resolved under
    pub uid: u32,
    /// Lowercase account name
    pub name: String,
}
