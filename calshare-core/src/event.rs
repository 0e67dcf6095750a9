//! The event description callers hand to the artifact builders.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use crate::error::ShareResult;

/// A single event to share.
///
/// Datetimes are carried in the caller's serialized form (extended ISO with
/// an explicit UTC offset suffix, e.g. `2026-06-01T10:00:00+00:00`) and only
/// parsed where an artifact needs the underlying instant.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    pub title: String,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub location: String,

    /// Start instant, extended ISO form with explicit UTC offset.
    pub start: String,

    /// End instant, same form as `start`.
    pub end: String,

    /// IANA timezone identifier. Empty means floating time: DTSTART/DTEND
    /// are emitted in UTC and no VTIMEZONE block is generated.
    #[serde(default)]
    pub timezone: String,

    /// Source document URL for the VEVENT URL property. Supplied by the
    /// caller, never read from ambient environment state.
    #[serde(default)]
    pub url: String,

    /// Duration for share targets whose URLs carry one (Yahoo).
    #[serde(default)]
    pub duration: Option<EventDuration>,
}

impl Event {
    /// Parse the start string into an instant.
    pub fn start_instant(&self) -> ShareResult<DateTime<FixedOffset>> {
        Ok(DateTime::parse_from_rfc3339(&self.start)?)
    }

    /// Parse the end string into an instant.
    pub fn end_instant(&self) -> ShareResult<DateTime<FixedOffset>> {
        Ok(DateTime::parse_from_rfc3339(&self.end)?)
    }
}

/// Event duration for share URLs expecting an `HHMM`-style value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EventDuration {
    /// Pre-formatted value, passed through unchanged (`"0100"`).
    Formatted(String),
    /// Decomposed hours and minutes.
    HoursMinutes(u8, u8),
}
