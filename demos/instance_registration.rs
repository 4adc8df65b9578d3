//! Anonymous instance registration example for group-registry.
//!
//! Demonstrates:
//! - Registering unnamed instances with `register_instance()` (keys are
//!   generated UUIDs by default)
//! - Addressing instances later through the returned key
//! - Forgiving `unregister_instance()` semantics
//! - Observing operations with the trace callback
//!
//! Run with: `cargo run --example instance_registration`

use group_registry::RegistryDirectory;
use std::sync::Arc;

#[derive(Debug)]
struct Worker {
    task: String,
}

fn main() {
    println!("=== group-registry: Instance Registration ===\n");

    let directory = RegistryDirectory::new();

    // -------------------------------------------------------------------------
    // 1. Watch the registry with a trace callback
    // -------------------------------------------------------------------------
    directory.set_trace_callback(|event| println!("   [trace] {}", event));

    // -------------------------------------------------------------------------
    // 2. Register anonymous instances
    // -------------------------------------------------------------------------
    println!("1. Registering workers without choosing keys...");

    let workers = directory.open_group("workers");

    let key_a = workers.register_instance(Worker {
        task: "index".to_string(),
    });
    let key_b = workers.register_instance(Worker {
        task: "compact".to_string(),
    });

    println!("   key_a = {}", key_a);
    println!("   key_b = {}", key_b);

    // -------------------------------------------------------------------------
    // 3. Address instances through the returned keys
    // -------------------------------------------------------------------------
    println!("\n2. Looking workers up by generated key...");

    let a: Arc<Worker> = workers.get(&key_a).unwrap();
    let b: Arc<Worker> = workers.get(&key_b).unwrap();
    println!("   {} -> {:?}", key_a, a);
    println!("   {} -> {:?}", key_b, b);

    println!("   all keys: {:?}", workers.keys());

    // -------------------------------------------------------------------------
    // 4. Unregister — double unregistration is a no-op
    // -------------------------------------------------------------------------
    println!("\n3. Unregistering worker A twice...");

    workers.unregister_instance(&key_a);
    workers.unregister_instance(&key_a); // no-op, never an error

    println!("   has(key_a) = {}", workers.has(&key_a));
    println!("   has(key_b) = {}", workers.has(&key_b));

    println!("\n=== Example Complete ===");
}
