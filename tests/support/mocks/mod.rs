// tests/support/mocks/mod.rs
#![allow(dead_code)]
#![allow(unused_imports)]

pub mod calendar;
pub mod time;

pub use calendar::IsoCalendar;
pub use time::{FixedClock, fixed_now};
