/// Invoker - invoking-user identity resolution
///
/// A small library that answers one question: which account is effectively
/// running the current process? The answer is resolved from the platform
/// account database, lowercased, and cached per effective uid; when the
/// database is unavailable or has no entry, a well-known environment
/// variable supplies the name instead.

pub mod error;
pub mod identity;

pub use error::{InvokerError, InvokerResult};
pub use identity::{
    CachedIdentity, IdentityCache, IdentityResolver, IdentityResolverConfig,
    ProcessIdentitySource, SystemIdentitySource,
};
