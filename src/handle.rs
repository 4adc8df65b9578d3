//! Application-facing operations over one named group.

use std::sync::Arc;

use crate::key_gen::KeyGenerator;
use crate::{Registry, RegistryError};

/// Bound operation set over one group's [`Registry`].
///
/// Obtained from
/// [`RegistryDirectory::open_group`](crate::RegistryDirectory::open_group).
/// The handle holds no data of its own: dropping it leaves the group
/// untouched, and every handle opened for the same name operates on the same
/// underlying storage.
///
/// On top of the registry's operations, the handle adds overwrite guarding
/// ([`set`](GroupHandle::set) vs [`force_set`](GroupHandle::force_set) vs
/// [`update`](GroupHandle::update)) and generated-identity registration for
/// anonymous instances ([`register_instance`](GroupHandle::register_instance)).
///
/// # Examples
///
/// ```rust
/// use group_registry::{RegistryDirectory, RegistryError};
/// use std::sync::Arc;
///
/// let directory = RegistryDirectory::new();
/// let cache = directory.open_group("cache");
///
/// cache.set("user:1", "Alice".to_string()).unwrap();
///
/// // A second non-forced write is rejected...
/// let denied = cache.set("user:1", "Bob".to_string());
/// assert!(matches!(denied, Err(RegistryError::AlreadyExists { .. })));
///
/// // ...while update requires the entry to exist.
/// cache.update("user:1", "Bob".to_string()).unwrap();
///
/// let user: Arc<String> = cache.get("user:1").unwrap();
/// assert_eq!(&*user, "Bob");
/// ```
#[derive(Clone)]
pub struct GroupHandle {
    registry: Arc<Registry>,
    keygen: Arc<dyn KeyGenerator>,
}

impl GroupHandle {
    pub(crate) fn new(registry: Arc<Registry>, keygen: Arc<dyn KeyGenerator>) -> Self {
        Self { registry, keygen }
    }

    /// Name of the group this handle is bound to.
    pub fn group(&self) -> &str {
        self.registry.group()
    }

    /// Direct access to the underlying registry.
    pub fn registry(&self) -> &Arc<Registry> {
        &self.registry
    }

    /// Retrieves the value stored at `key`.
    ///
    /// # Errors
    ///
    /// - [`RegistryError::NotFound`] when the key is absent
    /// - [`RegistryError::TypeMismatch`] when the entry does not hold a `T`
    pub fn get<T: Send + Sync + 'static>(&self, key: &str) -> Result<Arc<T>, RegistryError> {
        self.registry.get(key)
    }

    /// Non-failing lookup variant; `Ok(None)` when the key is absent.
    pub fn try_get<T: Send + Sync + 'static>(
        &self,
        key: &str,
    ) -> Result<Option<Arc<T>>, RegistryError> {
        self.registry.try_get(key)
    }

    /// Retrieves a clone of the value stored at `key`.
    pub fn get_cloned<T: Send + Sync + Clone + 'static>(
        &self,
        key: &str,
    ) -> Result<T, RegistryError> {
        self.registry.get_cloned(key)
    }

    /// Returns the value at `key`, storing `factory()`'s result first when
    /// the key is absent. The factory runs at most once, never speculatively.
    pub fn get_or_insert_with<T, F>(
        &self,
        key: impl Into<String>,
        factory: F,
    ) -> Result<Arc<T>, RegistryError>
    where
        T: Send + Sync + 'static,
        F: FnOnce() -> T,
    {
        self.registry.get_or_insert_with(key, factory)
    }

    /// Inserts `value` at `key`, refusing to overwrite.
    ///
    /// Guards against unintended overwrite of an established entry; use
    /// [`force_set`](GroupHandle::force_set) to overwrite deliberately.
    ///
    /// # Errors
    ///
    /// [`RegistryError::AlreadyExists`] when the key is occupied. The write
    /// is rejected outright, not merged or silently ignored.
    pub fn set<T: Send + Sync + 'static>(
        &self,
        key: impl Into<String>,
        value: T,
    ) -> Result<(), RegistryError> {
        self.registry.insert_if_vacant(key.into(), value)
    }

    /// Insert-or-overwrite without the existence guard. Never fails.
    pub fn force_set<T: Send + Sync + 'static>(&self, key: impl Into<String>, value: T) {
        self.registry.set(key, value);
    }

    /// Checks whether `key` holds an entry.
    pub fn has(&self, key: &str) -> bool {
        self.registry.has(key)
    }

    /// Overwrites the entry at `key`, which must already exist; returns the
    /// newly stored value.
    ///
    /// The mirror image of [`set`](GroupHandle::set): `set` without force
    /// guards against overwriting something established, `update` guards
    /// against creating an entry when an update was intended.
    ///
    /// # Errors
    ///
    /// [`RegistryError::NotFound`] when the key is absent; storage is left
    /// unchanged.
    pub fn update<T: Send + Sync + 'static>(
        &self,
        key: impl Into<String>,
        value: T,
    ) -> Result<Arc<T>, RegistryError> {
        self.registry.replace_existing(key.into(), value)
    }

    /// Deletes the entry at `key`; a no-op (not an error) when absent.
    pub fn remove(&self, key: &str) {
        self.registry.remove(key);
    }

    /// Stores `value` under a freshly generated key and returns the key.
    ///
    /// The key comes from the directory's injected
    /// [`KeyGenerator`](crate::KeyGenerator); generated keys are assumed
    /// collision-free, so the write goes through the forced path and never
    /// fails.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use group_registry::RegistryDirectory;
    /// use std::sync::Arc;
    ///
    /// let directory = RegistryDirectory::new();
    /// let workers = directory.open_group("workers");
    ///
    /// let key = workers.register_instance("worker state".to_string());
    ///
    /// assert!(workers.has(&key));
    /// let state: Arc<String> = workers.get(&key).unwrap();
    /// assert_eq!(&*state, "worker state");
    /// ```
    pub fn register_instance<T: Send + Sync + 'static>(&self, value: T) -> String {
        let key = self.keygen.generate();
        tracing::debug!(group = %self.group(), key = %key, "registering anonymous instance");
        self.registry.set(key.clone(), value);
        key
    }

    /// Removes a previously registered instance.
    ///
    /// A no-op when the key is already gone, so double-unregistration is
    /// never an error.
    pub fn unregister_instance(&self, key: &str) {
        self.registry.remove(key);
    }

    /// Empties the whole group.
    ///
    /// Requires the literal [`CLEAR_CONFIRMATION`](crate::CLEAR_CONFIRMATION)
    /// string; anything else fails with
    /// [`RegistryError::InvalidConfirmation`] and leaves every entry intact.
    pub fn clear(&self, confirmation: &str) -> Result<(), RegistryError> {
        self.registry.clear(confirmation)
    }

    /// Snapshot of all keys currently present, in insertion order.
    pub fn keys(&self) -> Vec<String> {
        self.registry.keys()
    }
}
