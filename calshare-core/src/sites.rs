//! Share-URL templates for third-party calendar targets.

use std::str::FromStr;

use crate::delivery::{DeliveryContext, deliver_ics};
use crate::error::{ShareError, ShareResult};
use crate::event::{Event, EventDuration};
use crate::ics::generate_ics;
use crate::timezone::TransitionProvider;

/// Supported share targets.
///
/// `ICal` and `Outlook` are file based: they receive the composed ICS
/// document instead of a provider URL, and their free-text fields are not
/// percent-encoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShareSite {
    Google,
    ICal,
    Outlook,
    Yahoo,
}

impl ShareSite {
    pub fn is_file_based(self) -> bool {
        matches!(self, ShareSite::ICal | ShareSite::Outlook)
    }

    pub fn name(self) -> &'static str {
        match self {
            ShareSite::Google => "google",
            ShareSite::ICal => "ical",
            ShareSite::Outlook => "outlook",
            ShareSite::Yahoo => "yahoo",
        }
    }
}

impl FromStr for ShareSite {
    type Err = ShareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "google" => Ok(ShareSite::Google),
            "ical" => Ok(ShareSite::ICal),
            "outlook" => Ok(ShareSite::Outlook),
            "yahoo" => Ok(ShareSite::Yahoo),
            _ => Err(ShareError::UnknownSite(s.to_string())),
        }
    }
}

/// Build the sharing artifact for a site.
///
/// URL targets get a fully query-encoded link; file-based targets get the
/// ICS document, wrapped for the delivery context.
pub fn build_share_url<P, C>(
    event: &Event,
    site: ShareSite,
    provider: &P,
    context: &C,
) -> ShareResult<String>
where
    P: TransitionProvider,
    C: DeliveryContext,
{
    match site {
        ShareSite::Google => Ok(google_url(event)),
        ShareSite::Yahoo => yahoo_url(event),
        ShareSite::ICal | ShareSite::Outlook => {
            let content = generate_ics(event, provider)?;
            Ok(deliver_ics(&content, context))
        }
    }
}

/// Rewrite an explicit `+00:00` offset suffix to the `Z` designator.
/// `None` passes through unchanged.
pub fn format_date(date: Option<&str>) -> Option<String> {
    date.map(|d| d.replace("+00:00", "Z"))
}

/// Normalize a duration to the `HHMM` form provider URLs expect.
pub fn format_duration(duration: &EventDuration) -> String {
    match duration {
        EventDuration::Formatted(formatted) => formatted.clone(),
        EventDuration::HoursMinutes(hours, minutes) => format!("{:02}{:02}", hours, minutes),
    }
}

fn google_url(event: &Event) -> String {
    let start = format_date(Some(&event.start)).unwrap_or_default();
    let end = format_date(Some(&event.end)).unwrap_or_default();

    let mut url = format!(
        "https://calendar.google.com/calendar/render?action=TEMPLATE&dates={}/{}",
        start, end
    );
    if !event.timezone.is_empty() {
        url.push_str("&ctz=");
        url.push_str(&event.timezone);
    }
    url.push_str(&format!(
        "&location={}&text={}&details={}",
        urlencoding::encode(&event.location),
        urlencoding::encode(&event.title),
        urlencoding::encode(&event.description)
    ));
    url
}

fn yahoo_url(event: &Event) -> ShareResult<String> {
    let duration = match &event.duration {
        Some(duration) => format_duration(duration),
        None => derived_duration(event)?,
    };
    let start = format_date(Some(&event.start)).unwrap_or_default();

    Ok(format!(
        "https://calendar.yahoo.com/?view=d&type=20&title={}&st={}&dur={}&desc={}&in_loc={}",
        urlencoding::encode(&event.title),
        start,
        duration,
        urlencoding::encode(&event.description),
        urlencoding::encode(&event.location)
    ))
}

/// Derive an `HHMM` duration from the event's parsed instants.
fn derived_duration(event: &Event) -> ShareResult<String> {
    let start = event.start_instant()?;
    let end = event.end_instant()?;
    let minutes = (end - start).num_minutes().max(0);
    Ok(format!("{:02}{:02}", minutes / 60, minutes % 60))
}
