//! VCALENDAR/VEVENT composition.

use chrono::Utc;

use crate::error::ShareResult;
use crate::event::Event;
use crate::timezone::TransitionProvider;
use crate::timezone::vtimezone::{vtimezone_lines, wall_clock_format};

/// Generate the calendar document for an event.
///
/// The document is `\n`-joined. With a timezone, DTSTART/DTEND carry a
/// `TZID` parameter and local wall-clock values, and the matching
/// VTIMEZONE block precedes the VEVENT; without one the event floats and
/// the values are plain UTC.
pub fn generate_ics<P: TransitionProvider>(event: &Event, provider: &P) -> ShareResult<String> {
    let start = event.start_instant()?.with_timezone(&Utc);
    let end = event.end_instant()?.with_timezone(&Utc);
    let start_ms = start.timestamp_millis();
    let end_ms = end.timestamp_millis();

    let timezone = event.timezone.as_str();
    let (timezone_lines, dtstart, dtend, tzid_param) = if timezone.is_empty() {
        (
            Vec::new(),
            start.format("%Y%m%dT%H%M%SZ").to_string(),
            end.format("%Y%m%dT%H%M%SZ").to_string(),
            String::new(),
        )
    } else {
        let table = provider.lookup(timezone)?;
        table.validate()?;
        (
            vtimezone_lines(&table, timezone, start_ms, end_ms),
            wall_clock_format(table.to_wall_clock(start_ms)),
            wall_clock_format(table.to_wall_clock(end_ms)),
            format!(";TZID={}", timezone),
        )
    };

    let mut lines = vec!["BEGIN:VCALENDAR".to_string(), "VERSION:2.0".to_string()];
    lines.extend(timezone_lines);
    lines.push("BEGIN:VEVENT".to_string());
    lines.push(format!("URL:{}", event.url));
    lines.push("METHOD:PUBLISH".to_string());
    lines.push(format!("DTSTART{}:{}", tzid_param, dtstart));
    lines.push(format!("DTEND{}:{}", tzid_param, dtend));
    lines.push(format!("SUMMARY:{}", event.title));
    lines.push(format!(
        "DESCRIPTION:{}",
        escape_description(&event.description)
    ));
    lines.push(format!("LOCATION:{}", event.location));
    lines.push("END:VEVENT".to_string());
    lines.push("END:VCALENDAR".to_string());

    Ok(lines.join("\n"))
}

/// Replace line breaks and `<br>`-style markup with the literal `\n`
/// escape required inside ICS text values.
pub fn escape_description(text: &str) -> String {
    text.replace("\r\n", "\\n")
        .replace('\n', "\\n")
        .replace("<br />", "\\n")
        .replace("<br/>", "\\n")
        .replace("<br>", "\\n")
}
