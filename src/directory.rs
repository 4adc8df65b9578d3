//! The directory of named registry groups.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::key_gen::{KeyGenerator, UuidKeyGenerator};
use crate::registry_event::{new_trace_slot, RegistryEvent, TraceSlot};
use crate::{GroupHandle, Registry};

/// Directory of named registry groups.
///
/// Construct one at process start and pass it to whatever needs
/// [`open_group`](RegistryDirectory::open_group): the directory guarantees
/// exactly one [`Registry`] per distinct name for its lifetime. Groups are
/// created lazily on first access and never removed; distinct names yield
/// fully independent registries.
///
/// # Examples
///
/// ```rust
/// use group_registry::RegistryDirectory;
///
/// let directory = RegistryDirectory::new();
///
/// let cache = directory.open_group("cache");
/// let config = directory.open_group("config");
///
/// cache.set("user:1", "Alice".to_string()).unwrap();
///
/// // Groups do not share keys.
/// assert!(cache.has("user:1"));
/// assert!(!config.has("user:1"));
/// ```
pub struct RegistryDirectory {
    groups: Mutex<HashMap<String, Arc<Registry>>>,
    trace: TraceSlot,
    keygen: Arc<dyn KeyGenerator>,
}

impl RegistryDirectory {
    /// Empty directory using random UUID keys for instance registration.
    pub fn new() -> Self {
        Self::with_key_generator(Arc::new(UuidKeyGenerator))
    }

    /// Empty directory using the supplied key generator.
    ///
    /// Lets tests inject deterministic keys instead of random ones.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use group_registry::{KeyGenerator, RegistryDirectory};
    /// use std::sync::Arc;
    ///
    /// struct Fixed;
    ///
    /// impl KeyGenerator for Fixed {
    ///     fn generate(&self) -> String {
    ///         "instance-1".to_string()
    ///     }
    /// }
    ///
    /// let directory = RegistryDirectory::with_key_generator(Arc::new(Fixed));
    /// let workers = directory.open_group("workers");
    ///
    /// let key = workers.register_instance(42i32);
    /// assert_eq!(key, "instance-1");
    /// ```
    pub fn with_key_generator(keygen: Arc<dyn KeyGenerator>) -> Self {
        Self {
            groups: Mutex::new(HashMap::new()),
            trace: new_trace_slot(),
            keygen,
        }
    }

    /// Returns the registry for `group`, creating it on first access.
    ///
    /// Deterministic and idempotent: every call with the same name returns
    /// the identical instance, so mutations through one caller are visible
    /// to all.
    pub fn get_or_create(&self, group: &str) -> Arc<Registry> {
        let mut groups = self.groups.lock().unwrap_or_else(|p| p.into_inner());
        match groups.get(group) {
            Some(registry) => registry.clone(),
            None => {
                tracing::debug!(group = %group, "creating registry group");
                let registry = Arc::new(Registry::new(group, self.trace.clone()));
                groups.insert(group.to_string(), registry.clone());
                registry
            }
        }
    }

    /// Opens a handle bound to `group`'s registry.
    ///
    /// Handles are created fresh on every call but always operate on the same
    /// underlying storage for a given name.
    pub fn open_group(&self, group: &str) -> GroupHandle {
        GroupHandle::new(self.get_or_create(group), self.keygen.clone())
    }

    /// Sets a trace callback invoked on every registry interaction, across
    /// all groups of this directory (including groups created before the
    /// callback was set).
    ///
    /// # Safety Restrictions
    ///
    /// The callback must NOT call registry methods of the same directory, as
    /// this will cause a deadlock: it is invoked while the trace lock is
    /// held.
    pub fn set_trace_callback(&self, callback: impl Fn(&RegistryEvent) + Send + Sync + 'static) {
        let mut guard = self.trace.lock().unwrap_or_else(|p| p.into_inner());
        *guard = Some(Arc::new(callback));
    }

    /// Clears the trace callback; no further events are observed.
    ///
    /// Note: this does not affect stored values, only the callback.
    pub fn clear_trace_callback(&self) {
        let mut guard = self.trace.lock().unwrap_or_else(|p| p.into_inner());
        *guard = None;
    }
}

impl Default for RegistryDirectory {
    fn default() -> Self {
        Self::new()
    }
}
