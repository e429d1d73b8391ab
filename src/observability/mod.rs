//! Observability for rollcall
//!
//! - Typed lifecycle and record events, emitted through `tracing`
//! - Counter registry, exposed read-only over HTTP
//!
//! Observability never changes the outcome of a request.
//!
//! # Usage
//!
//! ```ignore
//! use rollcall::observability::{log_event_with_fields, Event};
//!
//! log_event_with_fields(Event::RecordCreated, &[("id", "6")]);
//! ```

mod events;
mod metrics;

pub use events::{Event, Severity};
pub use metrics::{MetricsRegistry, MetricsSnapshot};

/// Log a lifecycle event
pub fn log_event(event: Event) {
    log_event_with_fields(event, &[]);
}

/// Log an event with key/value fields
///
/// Fields are rendered in alphabetical key order so that the same event
/// always produces the same line.
pub fn log_event_with_fields(event: Event, fields: &[(&str, &str)]) {
    let rendered = render_fields(fields);
    match event.severity() {
        Severity::Debug => tracing::debug!(event = event.as_str(), "{}", rendered),
        Severity::Info => tracing::info!(event = event.as_str(), "{}", rendered),
        Severity::Warn => tracing::warn!(event = event.as_str(), "{}", rendered),
    }
}

fn render_fields(fields: &[(&str, &str)]) -> String {
    let mut sorted: Vec<_> = fields.iter().collect();
    sorted.sort_by_key(|(k, _)| *k);
    sorted
        .iter()
        .map(|(k, v)| format!("{}={}", k, v))
        .collect::<Vec<_>>()
        .join(" ")
}
