//! ICS document generation.
//!
//! Composes the VCALENDAR/VEVENT envelope around the timezone blocks,
//! in the exact line format calendar applications consume.

mod generate;

pub use generate::{escape_description, generate_ics};
