// ============================================================================
// Basic Usage Example
// ============================================================================

use decimal_entry::prelude::*;
use std::sync::Arc;

fn main() {
    println!("=== Decimal Entry Example ===\n");

    // Canonicalize a few typed values directly
    println!("Canonicalization:");
    for raw in ["1.234.567", "1,234.56", "12,5", " 1 234,56 ", "abc"] {
        match canonicalize(raw) {
            Some(value) => println!("  {:>12} -> {}", raw, value),
            None => println!("  {:>12} -> (no value)", raw),
        }
    }

    // Wire a small form through the registry
    let registry = FieldRegistry::new();

    let fields = [
        (FieldConfig::price("unit_price"), "1.234,5"),
        (FieldConfig::quantity("volume"), "12,5"),
        (FieldConfig::price("subtotal"), "=unit_price*volume"),
        (FieldConfig::quantity("waste_factor"), "n/a"),
    ];

    for (config, initial) in fields {
        let bound = create_from_config(
            config,
            Box::new(MemoryField::new(initial)),
            Arc::new(LoggingEventHandler),
        )
        .expect("valid field configuration");
        registry.register(bound).expect("unique field id");
    }

    println!("\nRegistered {} fields\n", registry.len());

    // Commit everything, as when the form loses focus
    println!("=== Commit Outcomes ===");
    for event in registry.commit_all() {
        match event {
            FieldEvent::ValueCommitted {
                field_id, display, ..
            } => println!("  {:>12}: now shows '{}'", field_id, display),
            FieldEvent::FieldCleared { field_id, raw, .. } => {
                println!("  {:>12}: cleared (was '{}')", field_id, raw)
            },
            FieldEvent::FormulaRetained { field_id, .. } => {
                println!("  {:>12}: formula kept as-is", field_id)
            },
        }
    }

    // Serialize the canonical snapshot
    println!("\n=== Canonical Snapshot ===");
    for (id, value) in registry.canonical_values() {
        match value {
            Some(canonical) => println!("  {:>12} = {}", id, canonical),
            None => println!("  {:>12} = (absent)", id),
        }
    }
}
