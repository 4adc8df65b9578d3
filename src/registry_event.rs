//! Events emitted by registries during operations.

use std::sync::{Arc, Mutex};

/// Events emitted by a registry during operations.
///
/// These events are passed to the trace callback set via
/// [`RegistryDirectory::set_trace_callback`](crate::RegistryDirectory::set_trace_callback).
/// The `Clone` derive allows callbacks to store or forward events if needed.
///
/// # Examples
///
/// ```rust
/// use group_registry::RegistryEvent;
///
/// let event = RegistryEvent::Set {
///     group: "cache".to_string(),
///     key: "user:1".to_string(),
/// };
/// println!("{}", event);
/// ```
#[derive(Debug, Clone)]
pub enum RegistryEvent {
    /// A value was written (insert, overwrite, or update).
    Set {
        /// Name of the group that was written to.
        group: String,
        /// The key that received the value.
        key: String,
    },

    /// A value was requested.
    Get {
        /// Name of the group that was searched.
        group: String,
        /// The key that was requested.
        key: String,
        /// Whether an entry of the requested type was found.
        found: bool,
    },

    /// A key existence check was performed.
    Contains {
        /// Name of the group that was searched.
        group: String,
        /// The key that was checked.
        key: String,
        /// Whether the key exists in the group.
        found: bool,
    },

    /// An entry was removed (or a removal was attempted on an absent key).
    Remove {
        /// Name of the group the removal targeted.
        group: String,
        /// The key that was removed.
        key: String,
    },

    /// A group's mapping was cleared.
    Clear {
        /// Name of the group that was emptied.
        group: String,
    },
}

impl std::fmt::Display for RegistryEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RegistryEvent::Set { group, key } => {
                write!(f, "set {{ group: {}, key: {} }}", group, key)
            }
            RegistryEvent::Get { group, key, found } => {
                write!(f, "get {{ group: {}, key: {}, found: {} }}", group, key, found)
            }
            RegistryEvent::Contains { group, key, found } => {
                write!(
                    f,
                    "contains {{ group: {}, key: {}, found: {} }}",
                    group, key, found
                )
            }
            RegistryEvent::Remove { group, key } => {
                write!(f, "remove {{ group: {}, key: {} }}", group, key)
            }
            RegistryEvent::Clear { group } => write!(f, "clear {{ group: {} }}", group),
        }
    }
}

/// Type alias for the user-supplied trace callback.
///
/// The callback receives a reference to a [`RegistryEvent`] every time a
/// registry of the owning directory is interacted with. It must be
/// thread-safe because registries may be shared across threads.
pub type TraceCallback = dyn Fn(&RegistryEvent) + Send + Sync + 'static;

/// Shared slot holding the optional trace callback of one directory.
///
/// Every registry created by a directory holds a clone of the same slot, so
/// setting a callback after a group was created still covers that group.
pub(crate) type TraceSlot = Arc<Mutex<Option<Arc<TraceCallback>>>>;

pub(crate) fn new_trace_slot() -> TraceSlot {
    Arc::new(Mutex::new(None))
}
