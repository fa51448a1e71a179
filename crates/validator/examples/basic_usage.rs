//! Tour of the catalog: identity numbers, flexible dates, key checks,
//! and value introspection.
//!
//! Run with: `cargo run --example basic_usage`

use vouch_validator::introspect::{is_empty, is_nil};
use vouch_validator::prelude::*;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Identity numbers: legacy 15-digit input upgrades to the canonical
    // 18-character form; canonical input round-trips unchanged.
    let id = resident_id();
    let canonical = id.canonicalize("110105491001001")?;
    println!("upgraded legacy id -> {canonical}");
    assert_eq!(id.canonicalize(&canonical)?, canonical);

    // Flexible dates: partial input fills toward midnight; pre-epoch
    // dates come back with a negative timestamp.
    let date = flexible_date().normalize("2024/03/05 10:30")?;
    println!("normalized date    -> {} ({})", date.canonical(), date.timestamp());
    let before_epoch = flexible_date().normalize("1969-12-31")?;
    assert!(before_epoch.timestamp() < 0);

    // Composition: the same pieces chain with and/or/not.
    let guarded = not_empty().and(resident_id());
    match guarded.validate("990105194910010015") {
        Ok(()) => println!("unexpectedly valid"),
        Err(e) => println!("rejected as hoped  -> {e}"),
    }

    // Introspection: emptiness and nilness without knowing the kind.
    assert!(is_empty(""));
    assert!(is_empty(&0_i64));
    assert!(is_empty(&serde_json::json!([])));
    assert!(is_nil(&serde_json::json!(null)));
    assert!(!is_nil(&0_i64));
    println!("introspection ok");

    Ok(())
}
