// tests/support/mocks/calendar.rs
use blogcore::application::ports::calendar::CalendarFormatter;
use chrono::{DateTime, Utc};

/// Plain Gregorian formatter, handy where the Jalali output is not under test.
pub struct IsoCalendar;

impl CalendarFormatter for IsoCalendar {
    fn format(&self, at: DateTime<Utc>) -> String {
        at.format("%Y-%m-%d %H:%M").to_string()
    }
}
