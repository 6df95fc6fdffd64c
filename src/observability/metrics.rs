//! Metrics collection.
//!
//! # Metrics
//! - `gear_frontend_alias_operations_total` (counter): alias add/remove by outcome
//! - `gear_frontend_reload_total` (counter): reload commands by target and outcome
//!
//! # Design Decisions
//! - Recorded through the `metrics` facade; the embedding process installs
//!   an exporter if it wants one
//! - Without a recorder every call is a no-op

/// Record an alias add or remove.
pub fn record_alias_operation(op: &'static str, outcome: &'static str) {
    ::metrics::counter!(
        "gear_frontend_alias_operations_total",
        "op" => op,
        "outcome" => outcome
    )
    .increment(1);
}

/// Record one reload command.
pub fn record_reload(consumer: &'static str, success: bool) {
    let outcome = if success { "success" } else { "failure" };
    ::metrics::counter!(
        "gear_frontend_reload_total",
        "target" => consumer,
        "outcome" => outcome
    )
    .increment(1);
}
