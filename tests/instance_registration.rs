//! Integration tests for generated-identity registration.
//!
//! This test demonstrates registering anonymous instances under generated
//! keys, both with the default UUID generator and with a deterministic fake
//! injected for reproducible assertions.

use group_registry::{KeyGenerator, RegistryDirectory, RegistryError};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Deterministic generator producing "instance-1", "instance-2", ...
struct SequentialKeys {
    next: AtomicUsize,
}

impl SequentialKeys {
    fn new() -> Self {
        Self {
            next: AtomicUsize::new(1),
        }
    }
}

impl KeyGenerator for SequentialKeys {
    fn generate(&self) -> String {
        format!("instance-{}", self.next.fetch_add(1, Ordering::SeqCst))
    }
}

#[test]
fn test_register_instance_returns_addressable_key() {
    let directory = RegistryDirectory::new();
    let workers = directory.open_group("workers");

    let key = workers.register_instance("worker state".to_string());

    assert!(workers.has(&key));
    let state: Arc<String> = workers.get(&key).unwrap();
    assert_eq!(&**state, "worker state");
}

#[test]
fn test_unregister_then_get_fails() {
    let directory = RegistryDirectory::new();
    let workers = directory.open_group("workers");

    let key = workers.register_instance(7usize);
    workers.unregister_instance(&key);

    let result = workers.get::<usize>(&key);
    assert!(matches!(result, Err(RegistryError::NotFound { .. })));
}

#[test]
fn test_double_unregistration_is_never_an_error() {
    let directory = RegistryDirectory::new();
    let workers = directory.open_group("workers");

    let key = workers.register_instance(1i32);
    workers.unregister_instance(&key);
    workers.unregister_instance(&key);

    // A never-registered key is equally forgiving
    workers.unregister_instance("never-registered");
}

#[test]
fn test_default_generator_produces_distinct_keys() {
    let directory = RegistryDirectory::new();
    let workers = directory.open_group("workers");

    let first = workers.register_instance(1i32);
    let second = workers.register_instance(2i32);

    assert_ne!(first, second);
    assert_eq!(*workers.get::<i32>(&first).unwrap(), 1);
    assert_eq!(*workers.get::<i32>(&second).unwrap(), 2);
}

#[test]
fn test_injected_generator_yields_deterministic_keys() {
    let directory = RegistryDirectory::with_key_generator(Arc::new(SequentialKeys::new()));
    let workers = directory.open_group("workers");

    let first = workers.register_instance("a".to_string());
    let second = workers.register_instance("b".to_string());

    assert_eq!(first, "instance-1");
    assert_eq!(second, "instance-2");
    assert_eq!(workers.keys(), vec!["instance-1", "instance-2"]);
}

#[test]
fn test_generator_is_shared_by_all_groups_of_a_directory() {
    let directory = RegistryDirectory::with_key_generator(Arc::new(SequentialKeys::new()));

    let first = directory.open_group("a").register_instance(1i32);
    let second = directory.open_group("b").register_instance(2i32);

    // One sequence across groups: the generator belongs to the directory
    assert_eq!(first, "instance-1");
    assert_eq!(second, "instance-2");
}

#[test]
fn test_registered_instances_coexist_with_named_entries() {
    let directory = RegistryDirectory::with_key_generator(Arc::new(SequentialKeys::new()));
    let group = directory.open_group("mixed");

    group.set("named", "explicit".to_string()).unwrap();
    let generated = group.register_instance("anonymous".to_string());

    assert_eq!(group.keys(), vec!["named".to_string(), generated.clone()]);

    group.unregister_instance(&generated);
    assert_eq!(group.keys(), vec!["named".to_string()]);
}
