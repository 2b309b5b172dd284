/// Platform seam for process-ambient identity
use crate::error::InvokerResult;

#[cfg(unix)]
use crate::error::InvokerError;

/// Source of the process's ambient identity
///
/// Implementations report the effective uid, whether this platform can map a
/// uid to an account name at all, and the mapping itself. The resolver is
/// written against this trait so tests can script uid changes and lookup
/// outcomes.
pub trait ProcessIdentitySource: Send + Sync {
    /// Effective uid of the current process
    fn effective_uid(&self) -> u32;

    /// Whether uid-to-name lookup is available on this platform
    fn supports_uid_lookup(&self) -> bool;

    /// Resolve the account name for `uid` from the platform account database
    ///
    /// `Ok(None)` means the database has no entry for the uid; `Err` means
    /// the lookup itself failed.
    fn lookup_name(&self, uid: u32) -> InvokerResult<Option<String>>;
}

/// Identity source backed by the operating system
///
/// On Unix this reads the effective uid and the passwd database. On other
/// platforms uid lookup is reported as unsupported and never attempted.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemIdentitySource;

impl SystemIdentitySource {
    /// Create a new system identity source
    pub fn new() -> Self {
        Self
    }
}

#[cfg(unix)]
impl ProcessIdentitySource for SystemIdentitySource {
    fn effective_uid(&self) -> u32 {
        nix::unistd::geteuid().as_raw()
    }

    fn supports_uid_lookup(&self) -> bool {
        true
    }

    fn lookup_name(&self, uid: u32) -> InvokerResult<Option<String>> {
        let entry = nix::unistd::User::from_uid(nix::unistd::Uid::from_raw(uid))
            .map_err(|e| {
                InvokerError::Lookup(format!("Failed to read passwd entry for uid {}: {}", uid, e))
            })?;

        Ok(entry.map(|user| user.name))
    }
}

#[cfg(not(unix))]
impl ProcessIdentitySource for SystemIdentitySource {
    fn effective_uid(&self) -> u32 {
        // No POSIX uid notion here; a constant keys the cache and cannot
        // change mid-process.
        0
    }

    fn supports_uid_lookup(&self) -> bool {
        false
    }

    fn lookup_name(&self, _uid: u32) -> InvokerResult<Option<String>> {
        Ok(None)
    }
}
