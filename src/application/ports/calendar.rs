// src/application/ports/calendar.rs
use chrono::{DateTime, Utc};

/// Renders a stored UTC timestamp in the reader's local calendar.
pub trait CalendarFormatter: Send + Sync {
    fn format(&self, at: DateTime<Utc>) -> String;
}
