/// Identity Resolver - resolves the invoking user with caching
use crate::{
    error::{InvokerError, InvokerResult},
    identity::{
        cache::IdentityCache,
        source::{ProcessIdentitySource, SystemIdentitySource},
        CachedIdentity,
    },
};
use serde::{Deserialize, Serialize};
use std::env;
use std::sync::{Arc, Mutex};
use tracing::{debug, warn};

/// Identity resolution configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IdentityResolverConfig {
    /// Environment variable consulted when the account database yields nothing
    pub fallback_var: String,
}

impl Default for IdentityResolverConfig {
    fn default() -> Self {
        Self {
            fallback_var: default_fallback_var().to_string(),
        }
    }
}

/// The platform's well-known username variable
#[cfg(unix)]
fn default_fallback_var() -> &'static str {
    "USER"
}

#[cfg(not(unix))]
fn default_fallback_var() -> &'static str {
    "USERNAME"
}

impl IdentityResolverConfig {
    /// Load from environment variables
    pub fn from_env() -> InvokerResult<Self> {
        dotenv::dotenv().ok();

        let fallback_var = env::var("INVOKER_FALLBACK_VAR")
            .unwrap_or_else(|_| default_fallback_var().to_string());

        if fallback_var.trim().is_empty() {
            return Err(InvokerError::Environment(
                "INVOKER_FALLBACK_VAR must name a variable".to_string(),
            ));
        }

        Ok(Self { fallback_var })
    }
}

/// Main identity resolver - combines caching with the platform source
///
/// Owns the per-process identity cache; the cached name stays valid exactly
/// as long as the effective uid it was resolved under.
pub struct IdentityResolver {
    cache: Mutex<IdentityCache>,
    source: Arc<dyn ProcessIdentitySource>,
    config: IdentityResolverConfig,
}

impl IdentityResolver {
    /// Create a resolver over the operating system account database
    pub fn new(config: IdentityResolverConfig) -> Self {
        Self::with_source(Arc::new(SystemIdentitySource::new()), config)
    }

    /// Create a resolver over a custom identity source
    pub fn with_source(
        source: Arc<dyn ProcessIdentitySource>,
        config: IdentityResolverConfig,
    ) -> Self {
        Self {
            cache: Mutex::new(IdentityCache::new()),
            source,
            config,
        }
    }

    /// Resolve the lowercase account name of the user invoking this process
    ///
    /// Resolution order:
    /// 1. Check cache first (fast path, valid while the effective uid is unchanged)
    /// 2. Platform account database lookup, where the platform supports it
    /// 3. Fallback environment variable (recomputed every call, never cached)
    ///
    /// Never fails: an identity that cannot be resolved is `None`, not an
    /// error. Lookup failures are logged and absorbed.
    pub fn resolve_current_user(&self) -> Option<String> {
        let uid = self.source.effective_uid();

        // The lock spans check, lookup, and store, so racing first calls
        // resolve the same uid at most once.
        let mut cache = self.cache.lock().unwrap_or_else(|e| e.into_inner());

        if let Some(name) = cache.name_for(uid) {
            debug!("Identity cache HIT for uid {}", uid);
            return Some(name.to_string());
        }

        debug!("Identity cache MISS for uid {}", uid);
        cache.observe_uid(uid);

        if self.source.supports_uid_lookup() {
            match self.source.lookup_name(uid) {
                Ok(Some(name)) => {
                    let name = name.to_lowercase();
                    cache.store(uid, name.clone());
                    return Some(name);
                }
                Ok(None) => {
                    debug!("No account entry for uid {}", uid);
                }
                Err(e) => {
                    warn!("Identity lookup failed for uid {}: {}", uid, e);
                }
            }
        }

        // Only a uid-keyed lookup result may populate the cache; the
        // environment value is re-read on every call that gets this far.
        match env::var(&self.config.fallback_var) {
            Ok(name) if !name.is_empty() => Some(name.to_lowercase()),
            _ => None,
        }
    }

    /// Drop the cached identity (force re-resolution)
    pub fn invalidate(&self) {
        self.cache.lock().unwrap_or_else(|e| e.into_inner()).clear();
    }

    /// Currently cached identity, if any
    pub fn cached_identity(&self) -> Option<CachedIdentity> {
        self.cache.lock().unwrap_or_else(|e| e.into_inner()).entry()
    }
}
