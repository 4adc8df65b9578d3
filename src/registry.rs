//! The key → value store backing one group.

use std::any::Any;
use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard};

use indexmap::IndexMap;

use crate::registry_event::{RegistryEvent, TraceSlot};
use crate::RegistryError;

/// Confirmation literal required by [`Registry::clear`].
///
/// The exact-match requirement is a deliberate friction device against
/// accidental destructive calls; no stronger authorization is implied.
pub const CLEAR_CONFIRMATION: &str = "CONFIRM";

type Entries = IndexMap<String, Arc<dyn Any + Send + Sync>>;

/// One group's mapping from string key to shared value.
///
/// Values are stored type-erased behind `Arc`; the concrete type is supplied
/// by the caller at the `get`/`set` boundary and checked there. Stored values
/// are shared, never cloned: every retrieval hands back another reference to
/// the same instance, so mutation through one holder (via interior
/// mutability) is visible to all.
///
/// Keys are unique within a registry and enumerate in insertion order. A
/// registry is created lazily by its
/// [`RegistryDirectory`](crate::RegistryDirectory) and lives for the life of
/// the directory; there is no group deletion.
///
/// # Examples
///
/// ```rust
/// use group_registry::RegistryDirectory;
/// use std::sync::Arc;
///
/// let directory = RegistryDirectory::new();
/// let registry = directory.get_or_create("cache");
///
/// registry.set("answer", 42i32);
///
/// let answer: Arc<i32> = registry.get("answer").unwrap();
/// assert_eq!(*answer, 42);
/// ```
pub struct Registry {
    group: String,
    entries: Mutex<Entries>,
    trace: TraceSlot,
}

impl Registry {
    pub(crate) fn new(group: impl Into<String>, trace: TraceSlot) -> Self {
        Self {
            group: group.into(),
            entries: Mutex::new(IndexMap::new()),
            trace,
        }
    }

    /// Name of the group this registry backs.
    pub fn group(&self) -> &str {
        &self.group
    }

    /// Number of entries currently stored.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// `true` when the registry holds no entries.
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    // Poisoning only occurs if a thread panics while holding the lock; the
    // map itself is still consistent, so recover and continue.
    fn lock(&self) -> MutexGuard<'_, Entries> {
        self.entries.lock().unwrap_or_else(|p| p.into_inner())
    }

    /// Emit a registry event using the directory's current trace callback.
    ///
    /// Must never be called while the entries lock is held: the callback is
    /// user code and may take arbitrarily long.
    fn emit(&self, event: &RegistryEvent) {
        let guard = self.trace.lock().unwrap_or_else(|p| p.into_inner());
        if let Some(callback) = guard.as_ref() {
            callback(event);
        }
    }

    fn downcast<T: Send + Sync + 'static>(
        &self,
        key: &str,
        value: Arc<dyn Any + Send + Sync>,
    ) -> Result<Arc<T>, RegistryError> {
        value
            .downcast::<T>()
            .map_err(|_| RegistryError::TypeMismatch {
                group: self.group.clone(),
                key: key.to_string(),
                expected: std::any::type_name::<T>(),
            })
    }

    /// Unconditional insert-or-overwrite. Never fails.
    ///
    /// Takes ownership of the value and wraps it in an `Arc` automatically.
    /// If the key already holds an entry, it is replaced.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use group_registry::RegistryDirectory;
    /// use std::sync::Arc;
    ///
    /// let directory = RegistryDirectory::new();
    /// let registry = directory.get_or_create("app");
    ///
    /// registry.set("motd", "welcome".to_string());
    /// registry.set("motd", "updated".to_string()); // replaces
    ///
    /// let motd: Arc<String> = registry.get("motd").unwrap();
    /// assert_eq!(&*motd, "updated");
    /// ```
    pub fn set<T: Send + Sync + 'static>(&self, key: impl Into<String>, value: T) {
        self.set_arc(key, Arc::new(value));
    }

    /// Inserts an `Arc`-wrapped value.
    ///
    /// More efficient than [`set`](Registry::set) when you already have an
    /// `Arc`, as it avoids creating an additional allocation.
    pub fn set_arc<T: Send + Sync + 'static>(&self, key: impl Into<String>, value: Arc<T>) {
        let key = key.into();
        self.lock().insert(key.clone(), value);
        self.emit(&RegistryEvent::Set {
            group: self.group.clone(),
            key,
        });
    }

    /// Retrieves the value stored at `key`.
    ///
    /// # Errors
    ///
    /// - [`RegistryError::NotFound`] when the key is absent
    /// - [`RegistryError::TypeMismatch`] when the entry does not hold a `T`
    ///
    /// # Examples
    ///
    /// ```rust
    /// use group_registry::{RegistryDirectory, RegistryError};
    /// use std::sync::Arc;
    ///
    /// let directory = RegistryDirectory::new();
    /// let registry = directory.get_or_create("app");
    ///
    /// registry.set("answer", 42i32);
    /// let answer: Arc<i32> = registry.get("answer").unwrap();
    /// assert_eq!(*answer, 42);
    ///
    /// // Missing keys surface as a typed error
    /// let missing = registry.get::<i32>("nope");
    /// assert!(matches!(missing, Err(RegistryError::NotFound { .. })));
    /// ```
    pub fn get<T: Send + Sync + 'static>(&self, key: &str) -> Result<Arc<T>, RegistryError> {
        let stored = self.lock().get(key).cloned();

        let result = match stored {
            Some(value) => self.downcast::<T>(key, value),
            None => Err(RegistryError::NotFound {
                group: self.group.clone(),
                key: key.to_string(),
            }),
        };

        self.emit(&RegistryEvent::Get {
            group: self.group.clone(),
            key: key.to_string(),
            found: result.is_ok(),
        });

        result
    }

    /// Non-failing lookup variant for callers that treat absence as an
    /// ordinary branch rather than an error.
    ///
    /// Returns `Ok(None)` when the key is absent; a present entry of the
    /// wrong type still fails with [`RegistryError::TypeMismatch`].
    pub fn try_get<T: Send + Sync + 'static>(
        &self,
        key: &str,
    ) -> Result<Option<Arc<T>>, RegistryError> {
        match self.get::<T>(key) {
            Ok(value) => Ok(Some(value)),
            Err(RegistryError::NotFound { .. }) => Ok(None),
            Err(err) => Err(err),
        }
    }

    /// Retrieves a clone of the value stored at `key`.
    ///
    /// Returns an owned value by cloning the stored instance. Useful when you
    /// need to own the value rather than share it via `Arc<T>`.
    ///
    /// # Errors
    ///
    /// Same as [`get`](Registry::get).
    pub fn get_cloned<T: Send + Sync + Clone + 'static>(
        &self,
        key: &str,
    ) -> Result<T, RegistryError> {
        let arc = self.get::<T>(key)?;
        Ok((*arc).clone())
    }

    /// Checks whether `key` holds an entry. No side effects on storage.
    pub fn has(&self, key: &str) -> bool {
        let found = self.lock().contains_key(key);
        self.emit(&RegistryEvent::Contains {
            group: self.group.clone(),
            key: key.to_string(),
            found,
        });
        found
    }

    /// Returns the value at `key`, storing `factory()`'s result first when
    /// the key is absent.
    ///
    /// The factory is invoked at most once per call, only when the key is
    /// absent — never speculatively. The check and the insert happen under a
    /// single lock acquisition, so the factory must not call back into this
    /// registry.
    ///
    /// # Errors
    ///
    /// [`RegistryError::TypeMismatch`] when an existing entry does not hold a
    /// `T` (the factory is not invoked in that case).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use group_registry::RegistryDirectory;
    ///
    /// let directory = RegistryDirectory::new();
    /// let registry = directory.get_or_create("app");
    ///
    /// let first = registry.get_or_insert_with("counter", || 1i32).unwrap();
    /// let second = registry.get_or_insert_with("counter", || 2i32).unwrap();
    ///
    /// // The second factory never ran; both see the stored value.
    /// assert_eq!(*first, 1);
    /// assert_eq!(*second, 1);
    /// ```
    pub fn get_or_insert_with<T, F>(
        &self,
        key: impl Into<String>,
        factory: F,
    ) -> Result<Arc<T>, RegistryError>
    where
        T: Send + Sync + 'static,
        F: FnOnce() -> T,
    {
        let key = key.into();
        let mut inserted = false;

        let stored = {
            let mut entries = self.lock();
            match entries.get(&key) {
                Some(existing) => existing.clone(),
                None => {
                    let value: Arc<dyn Any + Send + Sync> = Arc::new(factory());
                    entries.insert(key.clone(), value.clone());
                    inserted = true;
                    value
                }
            }
        };

        if inserted {
            self.emit(&RegistryEvent::Set {
                group: self.group.clone(),
                key: key.clone(),
            });
        }

        self.downcast::<T>(&key, stored)
    }

    /// Deletes the entry at `key`; a no-op (not an error) when absent.
    ///
    /// Remaining keys keep their enumeration order.
    pub fn remove(&self, key: &str) {
        self.lock().shift_remove(key);
        self.emit(&RegistryEvent::Remove {
            group: self.group.clone(),
            key: key.to_string(),
        });
    }

    /// Replaces the entire mapping with an empty one.
    ///
    /// Only proceeds when `confirmation` equals [`CLEAR_CONFIRMATION`];
    /// otherwise fails and leaves every entry intact. Already-retrieved
    /// `Arc<T>` references remain valid.
    ///
    /// # Errors
    ///
    /// [`RegistryError::InvalidConfirmation`] when the confirmation string
    /// does not match.
    pub fn clear(&self, confirmation: &str) -> Result<(), RegistryError> {
        if confirmation != CLEAR_CONFIRMATION {
            return Err(RegistryError::InvalidConfirmation {
                group: self.group.clone(),
                given: confirmation.to_string(),
            });
        }

        *self.lock() = IndexMap::new();
        self.emit(&RegistryEvent::Clear {
            group: self.group.clone(),
        });
        Ok(())
    }

    /// Snapshot of the currently present keys, in insertion order.
    ///
    /// The snapshot is finite and non-lazy: later mutation of the registry
    /// does not affect a vector already returned.
    pub fn keys(&self) -> Vec<String> {
        self.lock().keys().cloned().collect()
    }

    /// Insert that fails when `key` is already occupied.
    ///
    /// Check and write happen under one lock acquisition, so there is no
    /// intermediate observable state.
    pub(crate) fn insert_if_vacant<T: Send + Sync + 'static>(
        &self,
        key: String,
        value: T,
    ) -> Result<(), RegistryError> {
        {
            let mut entries = self.lock();
            if entries.contains_key(&key) {
                return Err(RegistryError::AlreadyExists {
                    group: self.group.clone(),
                    key,
                });
            }
            entries.insert(key.clone(), Arc::new(value));
        }

        self.emit(&RegistryEvent::Set {
            group: self.group.clone(),
            key,
        });
        Ok(())
    }

    /// Overwrite that fails when `key` has no entry yet; returns the newly
    /// stored value.
    pub(crate) fn replace_existing<T: Send + Sync + 'static>(
        &self,
        key: String,
        value: T,
    ) -> Result<Arc<T>, RegistryError> {
        let stored = Arc::new(value);

        {
            let mut entries = self.lock();
            if !entries.contains_key(&key) {
                return Err(RegistryError::NotFound {
                    group: self.group.clone(),
                    key,
                });
            }
            let erased: Arc<dyn Any + Send + Sync> = stored.clone();
            entries.insert(key.clone(), erased);
        }

        self.emit(&RegistryEvent::Set {
            group: self.group.clone(),
            key,
        });
        Ok(stored)
    }
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry")
            .field("group", &self.group)
            .field("len", &self.len())
            .finish_non_exhaustive()
    }
}
