pub mod ics;
pub mod url;
pub mod zones;

use anyhow::{Context, Result};
use calshare_core::{Event, EventDuration};
use clap::Args;

use crate::config::Config;

/// Event fields shared by the url and ics subcommands.
#[derive(Args)]
pub struct EventArgs {
    /// Event title
    #[arg(short, long)]
    pub title: Option<String>,

    /// Start instant, ISO form with offset (e.g. 2026-06-01T10:00:00+00:00)
    #[arg(long)]
    pub start: Option<String>,

    /// End instant, same form as --start
    #[arg(long)]
    pub end: Option<String>,

    /// IANA timezone identifier (defaults to config, then the system zone)
    #[arg(long)]
    pub timezone: Option<String>,

    /// Emit a floating-time event (no timezone, no VTIMEZONE)
    #[arg(long)]
    pub floating: bool,

    /// Event location
    #[arg(short, long)]
    pub location: Option<String>,

    /// Event description
    #[arg(short, long)]
    pub description: Option<String>,

    /// Source URL embedded in the event
    #[arg(long)]
    pub url: Option<String>,

    /// Duration as HHMM (used by Yahoo links)
    #[arg(long)]
    pub duration: Option<String>,

    /// Read the event from a JSON file instead of flags
    #[arg(long, value_name = "FILE")]
    pub from: Option<std::path::PathBuf>,
}

impl EventArgs {
    /// Resolve CLI flags (or a JSON file) into an Event.
    pub fn into_event(self, config: &Config) -> Result<Event> {
        if let Some(path) = &self.from {
            let contents = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read event file at {}", path.display()))?;
            let event: Event = serde_json::from_str(&contents)
                .with_context(|| format!("Failed to parse event file at {}", path.display()))?;
            return Ok(event);
        }

        let title = self.title.context("--title is required (or use --from)")?;
        let start = self.start.context("--start is required (or use --from)")?;
        let end = self.end.context("--end is required (or use --from)")?;

        chrono::DateTime::parse_from_rfc3339(&start)
            .with_context(|| format!("Invalid --start '{}'. Expected ISO form with offset", start))?;
        chrono::DateTime::parse_from_rfc3339(&end)
            .with_context(|| format!("Invalid --end '{}'. Expected ISO form with offset", end))?;

        if let Some(raw) = &self.url {
            // `url` the crate, not the sibling command module.
            ::url::Url::parse(raw).with_context(|| format!("Invalid event URL: {}", raw))?;
        }

        let timezone = if self.floating {
            String::new()
        } else {
            match self.timezone {
                Some(tz) => tz,
                None => config
                    .default_timezone
                    .clone()
                    .unwrap_or_else(system_timezone),
            }
        };

        Ok(Event {
            title,
            description: self.description.unwrap_or_default(),
            location: self.location.unwrap_or_default(),
            start,
            end,
            timezone,
            url: self.url.unwrap_or_default(),
            duration: self.duration.map(EventDuration::Formatted),
        })
    }
}

/// Best-effort system timezone; an empty string falls back to floating time.
fn system_timezone() -> String {
    iana_time_zone::get_timezone().unwrap_or_default()
}
