// src/application/ports/mod.rs
pub mod calendar;
pub mod time;
pub mod util;

