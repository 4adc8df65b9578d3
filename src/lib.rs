//! # Group Registry
//!
//! A named-group instance registry for sharing single instances of values
//! ("singletons") by string key, scoped to independent named groups so
//! unrelated subsystems do not collide.
//!
//! Construct one [`RegistryDirectory`] at process start and pass it to the
//! components that need shared instances; each distinct group name maps to
//! exactly one [`Registry`] for the directory's lifetime.
//!
//! ## Quick Start
//!
//! ```rust
//! use group_registry::RegistryDirectory;
//! use std::sync::Arc;
//!
//! let directory = RegistryDirectory::new();
//! let cache = directory.open_group("cache");
//!
//! // Store a value (rejected if the key is already taken)
//! cache.set("greeting", "Hello, World!".to_string()).unwrap();
//!
//! // Retrieve the shared instance
//! let greeting: Arc<String> = cache.get("greeting").unwrap();
//! assert_eq!(&*greeting, "Hello, World!");
//! ```
//!
//! ## Features
//!
//! - **Isolated groups**: keys set in one group are invisible to every other
//! - **Shared instances**: stored values are referenced, never cloned
//! - **Guarded writes**: [`GroupHandle::set`] rejects overwrites,
//!   [`GroupHandle::update`] requires prior existence,
//!   [`GroupHandle::force_set`] does neither
//! - **Generated identities**: [`GroupHandle::register_instance`] stores
//!   anonymous instances under freshly generated keys
//! - **Confirmation-gated clear**: bulk deletion requires the literal
//!   [`CLEAR_CONFIRMATION`] string
//! - **Tracing support**: optional callback system for monitoring registry
//!   operations
//!
//! ## Main Types
//!
//! - [`RegistryDirectory`] - the explicitly passed context mapping group
//!   names to registries
//! - [`GroupHandle`] - the application-facing operation set for one group
//! - [`Registry`] - the key-value store backing one group
//! - [`KeyGenerator`] - injectable unique-key source for anonymous instances
//! - [`RegistryError`] - typed, recoverable failures

mod directory;
mod handle;
mod key_gen;
mod registry;
mod registry_error;
mod registry_event;

// Re-export the main public API
pub use directory::RegistryDirectory;
pub use handle::GroupHandle;
pub use key_gen::{KeyGenerator, UuidKeyGenerator};
pub use registry::{Registry, CLEAR_CONFIRMATION};
pub use registry_error::RegistryError;
pub use registry_event::{RegistryEvent, TraceCallback};
