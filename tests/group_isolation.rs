//! Integration tests for group isolation and shared storage.
//!
//! This test demonstrates that distinct group names yield completely
//! independent registries, while handles opened for the same name always
//! operate on the same underlying storage.

use group_registry::RegistryDirectory;
use std::sync::Arc;

#[test]
fn test_multiple_isolated_groups() {
    let directory = RegistryDirectory::new();

    // Open three separate groups
    let database = directory.open_group("database");
    let cache = directory.open_group("cache");
    let config = directory.open_group("config");

    // Store different values under the same key in each
    database.set("url", "postgresql://localhost".to_string()).unwrap();
    cache.set("url", "redis://localhost".to_string()).unwrap();
    config.set("url", "file://app.toml".to_string()).unwrap();

    // Each group holds its own value
    let db: Arc<String> = database.get("url").unwrap();
    let cache_val: Arc<String> = cache.get("url").unwrap();
    let cfg: Arc<String> = config.get("url").unwrap();

    assert_eq!(&**db, "postgresql://localhost");
    assert_eq!(&**cache_val, "redis://localhost");
    assert_eq!(&**cfg, "file://app.toml");
}

#[test]
fn test_keys_do_not_leak_between_groups() {
    let directory = RegistryDirectory::new();

    let group_a = directory.open_group("a");
    let group_b = directory.open_group("b");

    group_a.set("only-in-a", 1i32).unwrap();

    assert!(group_a.has("only-in-a"));
    assert!(!group_b.has("only-in-a"));

    // Getting from the other group fails
    let result = group_b.get::<i32>("only-in-a");
    assert!(result.is_err());
}

#[test]
fn test_open_group_twice_shares_storage() {
    let directory = RegistryDirectory::new();

    let first = directory.open_group("shared");
    let second = directory.open_group("shared");

    // A value set through the first handle is visible via the second
    first.set("key", "set through first".to_string()).unwrap();

    let seen: Arc<String> = second.get("key").unwrap();
    assert_eq!(&**seen, "set through first");
}

#[test]
fn test_clear_affects_only_its_own_group() {
    let directory = RegistryDirectory::new();

    let victim = directory.open_group("victim");
    let bystander = directory.open_group("bystander");

    victim.set("key", 1i32).unwrap();
    bystander.set("key", 2i32).unwrap();

    victim.clear("CONFIRM").unwrap();

    assert!(!victim.has("key"));
    assert!(bystander.has("key"));
}

#[test]
fn test_separate_directories_are_independent() {
    // Two directories never share groups, even under the same name
    let directory_a = RegistryDirectory::new();
    let directory_b = RegistryDirectory::new();

    directory_a.open_group("app").set("key", 1i32).unwrap();

    assert!(!directory_b.open_group("app").has("key"));
}

#[test]
fn test_shared_instance_mutation_is_visible_to_all_holders() {
    use std::sync::Mutex;

    let directory = RegistryDirectory::new();
    let group = directory.open_group("shared-state");

    group.set("counter", Mutex::new(0i32)).unwrap();

    // Two retrievals hand back the same instance, not copies
    let first: Arc<Mutex<i32>> = group.get("counter").unwrap();
    let second: Arc<Mutex<i32>> = group.get("counter").unwrap();

    *first.lock().unwrap() += 5;

    assert_eq!(*second.lock().unwrap(), 5);
}
