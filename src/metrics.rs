//! Business metrics for repository operations.
//!
//! Counters go through the `metrics` facade. Without an installed recorder
//! they are no-ops, and `OBSERVABILITY_ENABLED=false` skips them outright.

use boarding_core::Operation;
use metrics::{counter, gauge};
use std::sync::OnceLock;

static OBSERVABILITY_ENABLED: OnceLock<bool> = OnceLock::new();

/// Check if observability is enabled via OBSERVABILITY_ENABLED env var
pub fn is_observability_enabled() -> bool {
    *OBSERVABILITY_ENABLED.get_or_init(|| {
        std::env::var("OBSERVABILITY_ENABLED")
            .map(|v| v.to_lowercase() != "false" && v != "0")
            .unwrap_or(true) // Enabled by default
    })
}

/// Counts one repository call and its outcome.
pub fn track_operation(entity: &'static str, operation: Operation, outcome: &'static str) {
    if !is_observability_enabled() {
        return;
    }
    counter!(
        "entity_operations_total",
        "entity" => entity,
        "operation" => operation.as_str(),
        "outcome" => outcome
    )
    .increment(1);
}

pub fn track_entity_created(entity: &'static str) {
    if !is_observability_enabled() {
        return;
    }
    counter!("entities_created_total", "entity" => entity).increment(1);
}

pub fn track_entity_deleted(entity: &'static str) {
    if !is_observability_enabled() {
        return;
    }
    counter!("entities_deleted_total", "entity" => entity).increment(1);
}

/// Records the current size of a store after a mutation.
pub fn track_collection_size(entity: &'static str, size: usize) {
    if !is_observability_enabled() {
        return;
    }
    gauge!("entity_collection_size", "entity" => entity).set(size as f64);
}

/// Counts a state-container response dropped because a newer fetch was issued.
pub fn track_stale_response(entity: &'static str) {
    if !is_observability_enabled() {
        return;
    }
    counter!("stale_responses_discarded_total", "entity" => entity).increment(1);
}
