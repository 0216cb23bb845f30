// src/infrastructure/calendar.rs
//! Solar Hijri (Jalali) rendering of timestamps for Persian readers.
use crate::application::ports::calendar::CalendarFormatter;
use chrono::{DateTime, Datelike, FixedOffset, Offset, Timelike, Utc};

const MONTHS: [&str; 12] = [
    "فروردین",
    "اردیبهشت",
    "خرداد",
    "تیر",
    "مرداد",
    "شهریور",
    "مهر",
    "آبان",
    "آذر",
    "دی",
    "بهمن",
    "اسفند",
];

/// Days before the first of each Gregorian month in a common year.
const CUMULATIVE_DAYS: [i64; 12] = [0, 31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334];

/// Iran Standard Time, UTC+03:30.
pub const TEHRAN_OFFSET_SECONDS: i32 = 3 * 3600 + 30 * 60;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JalaliDate {
    pub year: i64,
    pub month: u32,
    pub day: u32,
}

impl JalaliDate {
    /// Converts a proleptic Gregorian date. Jalali years are only meaningful
    /// after 621 CE; anything before year 1 CE, or an impossible month or day,
    /// yields `None`.
    pub fn from_gregorian(year: i32, month: u32, day: u32) -> Option<Self> {
        if year < 1 || !(1..=12).contains(&month) || !(1..=31).contains(&day) {
            return None;
        }
        let gy = i64::from(year);
        let gy2 = if month > 2 { gy + 1 } else { gy };
        let mut days = 355_666 + 365 * gy + (gy2 + 3) / 4 - (gy2 + 99) / 100
            + (gy2 + 399) / 400
            + i64::from(day)
            + CUMULATIVE_DAYS[(month - 1) as usize];

        let mut jy = -1595 + 33 * (days / 12_053);
        days %= 12_053;
        jy += 4 * (days / 1461);
        days %= 1461;
        if days > 365 {
            jy += (days - 1) / 365;
            days = (days - 1) % 365;
        }

        let (month, day) = if days < 186 {
            (1 + days / 31, 1 + days % 31)
        } else {
            (7 + (days - 186) / 30, 1 + (days - 186) % 30)
        };

        Some(Self {
            year: jy,
            month: u32::try_from(month).ok()?,
            day: u32::try_from(day).ok()?,
        })
    }

    /// Empty for a month outside 1..=12.
    pub fn month_name(&self) -> &'static str {
        MONTHS
            .get((self.month as usize).wrapping_sub(1))
            .copied()
            .unwrap_or_default()
    }
}

/// Replaces ASCII digits with Extended Arabic-Indic (Persian) digits.
pub fn persian_digits(input: &str) -> String {
    input
        .chars()
        .map(|c| match c.to_digit(10) {
            Some(d) => char::from_u32(0x06F0 + d).unwrap_or(c),
            None => c,
        })
        .collect()
}

/// Formats as `"{day} {month} {year}، ساعت {hour}:{minute}"` in Persian digits,
/// e.g. `۱ فروردین ۱۴۰۳، ساعت ۱۵:۳۰`. Hours and minutes are not zero-padded.
#[derive(Debug, Clone)]
pub struct JalaliCalendarFormatter {
    offset: FixedOffset,
}

impl JalaliCalendarFormatter {
    pub fn new(offset: FixedOffset) -> Self {
        Self { offset }
    }

    pub fn tehran() -> Self {
        Self::from_offset_seconds(TEHRAN_OFFSET_SECONDS)
    }

    /// Falls back to UTC when the offset is out of chrono's range.
    pub fn from_offset_seconds(seconds: i32) -> Self {
        let offset = FixedOffset::east_opt(seconds).unwrap_or_else(|| {
            tracing::warn!(seconds, "display offset out of range, using UTC");
            Utc.fix()
        });
        Self::new(offset)
    }
}

impl Default for JalaliCalendarFormatter {
    fn default() -> Self {
        Self::tehran()
    }
}

impl CalendarFormatter for JalaliCalendarFormatter {
    fn format(&self, at: DateTime<Utc>) -> String {
        let local = at.with_timezone(&self.offset);
        let Some(date) = JalaliDate::from_gregorian(local.year(), local.month(), local.day())
        else {
            tracing::warn!(year = local.year(), "date outside the Jalali range, using Gregorian");
            return persian_digits(&local.format("%Y-%m-%d، ساعت %-H:%-M").to_string());
        };
        let text = format!(
            "{} {} {}، ساعت {}:{}",
            date.day,
            date.month_name(),
            date.year,
            local.hour(),
            local.minute()
        );
        persian_digits(&text)
    }
}
