/// Identity cache - per-process storage for the resolved invoking user
use crate::identity::CachedIdentity;

/// Invoking-user cache
///
/// Holds at most one entry: the account name last resolved from the platform
/// account database, keyed on the effective uid it was resolved under. A name
/// is only served while that uid still matches; observing a different uid
/// invalidates it.
#[derive(Debug, Default)]
pub struct IdentityCache {
    cached_uid: Option<u32>,
    cached_name: Option<String>,
}

impl IdentityCache {
    /// Create an empty cache
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the cached name, if it is still valid for `uid`
    pub fn name_for(&self, uid: u32) -> Option<&str> {
        match (self.cached_uid, self.cached_name.as_deref()) {
            (Some(cached_uid), Some(name)) if cached_uid == uid => Some(name),
            _ => None,
        }
    }

    /// Record the effective uid just observed
    ///
    /// A name cached under a different uid is dropped; the uid itself is
    /// recorded even when no name ends up being resolved for it.
    pub fn observe_uid(&mut self, uid: u32) {
        if self.cached_uid != Some(uid) {
            self.cached_uid = Some(uid);
            self.cached_name = None;
        }
    }

    /// Cache `name` as resolved under `uid`
    pub fn store(&mut self, uid: u32, name: String) {
        self.cached_uid = Some(uid);
        self.cached_name = Some(name);
    }

    /// Drop the cached entry entirely (force re-resolution)
    pub fn clear(&mut self) {
        self.cached_uid = None;
        self.cached_name = None;
    }

    /// Current entry, if a name is cached
    pub fn entry(&self) -> Option<CachedIdentity> {
        match (self.cached_uid, self.cached_name.as_ref()) {
            (Some(uid), Some(name)) => Some(CachedIdentity {
                uid,
                name: name.clone(),
            }),
            _ => None,
        }
    }
}
