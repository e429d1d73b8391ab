//! Observable events for rollcall
//!
//! Events are explicit and typed. Each maps to a stable name that appears as
//! the `event` field of the emitted log line.

use std::fmt;

/// Observable events in rollcall
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    // Lifecycle
    /// Server boot begins
    ServerStart,
    /// Listener bound, ready to serve
    ServerReady,
    /// Shutdown signal received
    ServerShutdown,

    // Record operations
    /// Record inserted
    RecordCreated,
    /// Record fields replaced
    RecordUpdated,
    /// Record deleted
    RecordDeleted,
    /// Lookup by id found nothing
    RecordNotFound,
    /// Request body failed validation
    ValidationRejected,
}

/// How loudly an event is reported
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Debug,
    Info,
    Warn,
}

impl Event {
    /// Returns the string representation of the event
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::ServerStart => "ROLLCALL_STARTUP_BEGIN",
            Event::ServerReady => "ROLLCALL_SERVING",
            Event::ServerShutdown => "ROLLCALL_SHUTDOWN",

            Event::RecordCreated => "RECORD_CREATED",
            Event::RecordUpdated => "RECORD_UPDATED",
            Event::RecordDeleted => "RECORD_DELETED",
            Event::RecordNotFound => "RECORD_NOT_FOUND",
            Event::ValidationRejected => "VALIDATION_REJECTED",
        }
    }

    /// Client-caused failures are debug noise; lifecycle and writes are info.
    pub fn severity(&self) -> Severity {
        match self {
            Event::RecordNotFound => Severity::Debug,
            Event::ValidationRejected => Severity::Warn,
            _ => Severity::Info,
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
