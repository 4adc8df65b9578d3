//! Basic usage example for group-registry.
//!
//! Demonstrates:
//! - Opening named groups from an explicitly constructed directory
//! - Storing values with `set()` (guarded), `force_set()`, and `update()`
//! - Retrieving values with `get()` (returns `Arc<T>`) and `get_cloned()`
//! - Checking for keys with `has()` and enumerating them with `keys()`
//! - The confirmation-gated `clear()`
//!
//! Run with: `cargo run --example basic_usage`

use group_registry::RegistryDirectory;
use std::sync::Arc;

// Custom struct to demonstrate complex types
#[derive(Debug, Clone, PartialEq)]
struct AppConfig {
    name: String,
    version: u32,
    debug_mode: bool,
}

fn main() {
    println!("=== group-registry: Basic Usage ===\n");

    // The directory is created once and passed to whoever needs groups.
    let directory = RegistryDirectory::new();

    // -------------------------------------------------------------------------
    // 1. Open a group and store some values
    // -------------------------------------------------------------------------
    println!("1. Storing values in the 'app' group...");

    let app = directory.open_group("app");

    app.set("answer", 42i32).unwrap();
    app.set("pi", 3.14f64).unwrap();
    app.set("motd", "Hello, group-registry!".to_string()).unwrap();
    app.set(
        "config",
        AppConfig {
            name: "MyApp".to_string(),
            version: 1,
            debug_mode: true,
        },
    )
    .unwrap();

    println!("   Stored: answer, pi, motd, config");

    // -------------------------------------------------------------------------
    // 2. Guarded writes reject accidental overwrites
    // -------------------------------------------------------------------------
    println!("\n2. Trying to overwrite 'answer' without force...");

    match app.set("answer", 0i32) {
        Ok(()) => println!("   Unexpected success"),
        Err(e) => println!("   Error (expected): {}", e),
    }

    // force_set overwrites deliberately; update requires prior existence
    app.force_set("answer", 43i32);
    app.update("answer", 44i32).unwrap();
    println!("   After force_set + update: answer = {}", app.get::<i32>("answer").unwrap());

    // -------------------------------------------------------------------------
    // 3. Retrieve shared instances with get() -> Arc<T>
    // -------------------------------------------------------------------------
    println!("\n3. Retrieving values with get() -> Arc<T>...");

    let answer: Arc<i32> = app.get("answer").unwrap();
    let pi: Arc<f64> = app.get("pi").unwrap();
    let motd: Arc<String> = app.get("motd").unwrap();
    let cfg: Arc<AppConfig> = app.get("config").unwrap();

    println!("   answer: {}", *answer);
    println!("   pi:     {}", *pi);
    println!("   motd:   {}", *motd);
    println!("   config: {:?}", *cfg);

    // -------------------------------------------------------------------------
    // 4. Retrieve owned copies with get_cloned() -> T
    // -------------------------------------------------------------------------
    println!("\n4. Retrieving cloned values with get_cloned() -> T...");

    let motd_owned: String = app.get_cloned("motd").unwrap();
    let cfg_owned: AppConfig = app.get_cloned("config").unwrap();

    println!("   motd (owned):   {}", motd_owned);
    println!("   config (owned): {:?}", cfg_owned);

    // -------------------------------------------------------------------------
    // 5. Groups are isolated
    // -------------------------------------------------------------------------
    println!("\n5. Checking isolation between groups...");

    let other = directory.open_group("other");
    println!("   app.has(\"answer\")   = {}", app.has("answer"));
    println!("   other.has(\"answer\") = {}", other.has("answer"));

    // -------------------------------------------------------------------------
    // 6. Enumerate keys and clear with confirmation
    // -------------------------------------------------------------------------
    println!("\n6. Enumerating and clearing...");

    println!("   keys: {:?}", app.keys());

    match app.clear("please") {
        Ok(()) => println!("   Unexpected success"),
        Err(e) => println!("   Error (expected): {}", e),
    }

    app.clear("CONFIRM").unwrap();
    println!("   After clear(\"CONFIRM\"): keys = {:?}", app.keys());

    // -------------------------------------------------------------------------
    // Summary
    // -------------------------------------------------------------------------
    println!("\n=== Example Complete ===");
}
