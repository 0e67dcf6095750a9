//! VTIMEZONE observance block generation.

use chrono::{DateTime, Utc};

use crate::error::ShareResult;
use crate::timezone::table::{TransitionProvider, TransitionTable};

/// Format a table-polarity offset (minutes behind UTC) as a signed
/// iCalendar `HHMM` string.
///
/// The polarity inverts: positive table minutes are west of UTC, so they
/// render with a `-` sign. `-600` becomes `+1000`, `330` becomes `-0530`.
pub fn utc_offset_string(minutes: i32) -> String {
    let sign = if minutes > 0 { '-' } else { '+' };
    let magnitude = minutes.abs();
    format!("{}{:02}{:02}", sign, magnitude / 60, magnitude % 60)
}

/// Build the VTIMEZONE lines covering an event window.
///
/// Returns an empty sequence when `timezone` is empty: the event floats,
/// and the caller omits the block entirely. Unknown identifiers propagate
/// the provider's error.
pub fn build_vtimezone<P: TransitionProvider>(
    provider: &P,
    timezone: &str,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
) -> ShareResult<Vec<String>> {
    if timezone.is_empty() {
        return Ok(Vec::new());
    }

    let table = provider.lookup(timezone)?;
    table.validate()?;
    Ok(vtimezone_lines(
        &table,
        timezone,
        start.timestamp_millis(),
        end.timestamp_millis(),
    ))
}

/// Emit the observance blocks for a validated table.
///
/// The window runs from the observance active at event start through one
/// boundary of lookahead past the observance active at event end, plus one
/// further index. The loop deliberately overshoots the lookahead boundary;
/// at the table edges, the backward read for the introducing boundary
/// clamps to index 0 and indices past the end are skipped.
pub fn vtimezone_lines(
    table: &TransitionTable,
    timezone: &str,
    start_ms: i64,
    end_ms: i64,
) -> Vec<String> {
    let last = table.len() - 1;
    let current_until = table
        .untils
        .iter()
        .position(|&until| until > start_ms)
        .unwrap_or(last);
    let future_until = table
        .untils
        .iter()
        .position(|&until| until > end_ms)
        .unwrap_or(last);

    let mut lines = vec!["BEGIN:VTIMEZONE".to_string(), format!("TZID:{}", timezone)];

    for index in current_until..=future_until + 1 {
        if index > last {
            break;
        }
        let previous = index.saturating_sub(1);
        let kind = if (index + 1) % 2 == 0 {
            "STANDARD"
        } else {
            "DAYLIGHT"
        };
        let starts_at =
            table.untils[previous] - i64::from(table.offsets[index]) * 60_000;

        lines.push(format!("BEGIN:{}", kind));
        lines.push(format!(
            "TZOFFSETFROM:{}",
            utc_offset_string(table.offsets[previous])
        ));
        lines.push(format!(
            "TZOFFSETTO:{}",
            utc_offset_string(table.offsets[index])
        ));
        lines.push(format!("TZNAME:{}", table.abbrs[index]));
        lines.push(format!("DTSTART:{}", wall_clock_format(starts_at)));
        lines.push(format!("END:{}", kind));
    }

    lines.push("END:VTIMEZONE".to_string());
    lines
}

/// Format wall-clock epoch milliseconds as an iCalendar local datetime.
///
/// A boundary that lands outside the representable range (the sentinel
/// tail of a single-observance table) pins to the epoch.
pub fn wall_clock_format(ms: i64) -> String {
    match DateTime::from_timestamp_millis(ms) {
        Some(datetime) => datetime.naive_utc().format("%Y%m%dT%H%M%S").to_string(),
        None => "19700101T000000".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ShareError, ShareResult};
    use crate::timezone::table::UNTIL_FOREVER;

    /// Stockholm-style fixture: alternating CET (UTC+1) and CEST (UTC+2).
    fn fixture_table() -> TransitionTable {
        TransitionTable {
            untils: vec![
                1_711_846_800_000, // 2024-03-31T01:00:00Z, CET ends
                1_729_990_800_000, // 2024-10-27T01:00:00Z, CEST ends
                1_743_296_400_000, // 2025-03-30T01:00:00Z, CET ends
                UNTIL_FOREVER,
            ],
            offsets: vec![-60, -120, -60, -120],
            abbrs: vec![
                "CET".to_string(),
                "CEST".to_string(),
                "CET".to_string(),
                "CEST".to_string(),
            ],
        }
    }

    struct FixtureProvider;

    impl TransitionProvider for FixtureProvider {
        fn lookup(&self, tzid: &str) -> ShareResult<TransitionTable> {
            if tzid == "Europe/Stockholm" {
                Ok(fixture_table())
            } else {
                Err(ShareError::UnknownTimezone(tzid.to_string()))
            }
        }
    }

    fn utc(s: &str) -> DateTime<Utc> {
        DateTime::parse_from_rfc3339(s).unwrap().to_utc()
    }

    // --- utc_offset_string ---

    #[test]
    fn offset_string_inverts_table_polarity() {
        assert_eq!(utc_offset_string(-600), "+1000");
        assert_eq!(utc_offset_string(330), "-0530");
        assert_eq!(utc_offset_string(0), "+0000");
        assert_eq!(utc_offset_string(-60), "+0100");
        assert_eq!(utc_offset_string(300), "-0500");
    }

    #[test]
    fn offset_string_always_five_signed_digits() {
        for minutes in [-840, -330, -1, 0, 1, 59, 60, 61, 720, 840] {
            let formatted = utc_offset_string(minutes);
            assert_eq!(formatted.len(), 5, "bad length for {}: {}", minutes, formatted);
            assert!(
                formatted.starts_with('+') || formatted.starts_with('-'),
                "missing sign for {}: {}",
                minutes,
                formatted
            );
            assert!(
                formatted[1..].chars().all(|c| c.is_ascii_digit()),
                "non-digit body for {}: {}",
                minutes,
                formatted
            );
            assert_eq!(formatted.starts_with('-'), minutes > 0);
        }
    }

    // --- build_vtimezone ---

    #[test]
    fn empty_timezone_builds_nothing() {
        let lines = build_vtimezone(
            &FixtureProvider,
            "",
            utc("2024-06-10T10:00:00+00:00"),
            utc("2024-06-10T11:00:00+00:00"),
        )
        .unwrap();
        assert!(lines.is_empty());
    }

    #[test]
    fn unknown_timezone_propagates() {
        let result = build_vtimezone(
            &FixtureProvider,
            "Mars/Olympus",
            utc("2024-06-10T10:00:00+00:00"),
            utc("2024-06-10T11:00:00+00:00"),
        );
        assert!(matches!(result, Err(ShareError::UnknownTimezone(_))));
    }

    #[test]
    fn quiet_window_emits_active_observance_plus_lookahead() {
        // One-day event in June 2024, no transition inside the window. The
        // deliberate overshoot adds the following observance as lookahead.
        let lines = build_vtimezone(
            &FixtureProvider,
            "Europe/Stockholm",
            utc("2024-06-10T10:00:00+00:00"),
            utc("2024-06-11T10:00:00+00:00"),
        )
        .unwrap();

        assert_eq!(
            lines,
            vec![
                "BEGIN:VTIMEZONE",
                "TZID:Europe/Stockholm",
                "BEGIN:STANDARD",
                "TZOFFSETFROM:+0100",
                "TZOFFSETTO:+0200",
                "TZNAME:CEST",
                "DTSTART:20240331T030000",
                "END:STANDARD",
                "BEGIN:DAYLIGHT",
                "TZOFFSETFROM:+0200",
                "TZOFFSETTO:+0100",
                "TZNAME:CET",
                "DTSTART:20241027T020000",
                "END:DAYLIGHT",
                "END:VTIMEZONE",
            ]
        );
    }

    #[test]
    fn transition_inside_window_links_adjacent_offsets() {
        // Event spanning the 2024 spring-forward boundary.
        let lines = build_vtimezone(
            &FixtureProvider,
            "Europe/Stockholm",
            utc("2024-03-30T10:00:00+00:00"),
            utc("2024-03-31T10:00:00+00:00"),
        )
        .unwrap();

        let offsets_from: Vec<&str> = lines
            .iter()
            .filter_map(|l| l.strip_prefix("TZOFFSETFROM:"))
            .collect();
        let offsets_to: Vec<&str> = lines
            .iter()
            .filter_map(|l| l.strip_prefix("TZOFFSETTO:"))
            .collect();
        let kinds: Vec<&str> = lines
            .iter()
            .filter_map(|l| l.strip_prefix("BEGIN:"))
            .filter(|k| *k != "VTIMEZONE")
            .collect();

        // Three blocks: the clamped front block, the observance the event
        // ends in, and the overshoot lookahead block.
        assert_eq!(kinds, vec!["DAYLIGHT", "STANDARD", "DAYLIGHT"]);
        assert_eq!(
            offsets_to[0], offsets_from[1],
            "consecutive blocks must chain offsets"
        );
        assert_ne!(kinds[0], kinds[1]);
    }

    #[test]
    fn front_clamp_starts_first_block_at_its_own_end_boundary() {
        // The i - 1 read clamps to index 0 when the event starts inside
        // the first recorded observance, so the first DTSTART lands on
        // that observance's *end* boundary (in its own wall clock).
        let lines = build_vtimezone(
            &FixtureProvider,
            "Europe/Stockholm",
            utc("2024-03-30T10:00:00+00:00"),
            utc("2024-03-31T10:00:00+00:00"),
        )
        .unwrap();

        assert_eq!(lines[2], "BEGIN:DAYLIGHT");
        assert_eq!(lines[3], "TZOFFSETFROM:+0100");
        assert_eq!(lines[4], "TZOFFSETTO:+0100");
        assert_eq!(lines[5], "TZNAME:CET");
        assert_eq!(lines[6], "DTSTART:20240331T020000");
    }

    #[test]
    fn window_at_table_tail_skips_out_of_range_lookahead() {
        // Event inside the final (sentinel) observance: the overshoot
        // index falls past the table end and is skipped.
        let lines = build_vtimezone(
            &FixtureProvider,
            "Europe/Stockholm",
            utc("2025-06-10T10:00:00+00:00"),
            utc("2025-06-10T11:00:00+00:00"),
        )
        .unwrap();

        let kinds: Vec<&str> = lines
            .iter()
            .filter_map(|l| l.strip_prefix("BEGIN:"))
            .filter(|k| *k != "VTIMEZONE")
            .collect();
        assert_eq!(kinds, vec!["STANDARD"]);
        assert_eq!(
            lines[6],
            "DTSTART:20250330T030000",
            "final block starts at the last real boundary"
        );
    }

    #[test]
    fn single_observance_table_pins_dtstart_to_epoch() {
        let table = TransitionTable {
            untils: vec![UNTIL_FOREVER],
            offsets: vec![0],
            abbrs: vec!["UTC".to_string()],
        };
        let lines = vtimezone_lines(
            &table,
            "UTC",
            utc("2024-06-10T10:00:00+00:00").timestamp_millis(),
            utc("2024-06-10T11:00:00+00:00").timestamp_millis(),
        );

        assert_eq!(
            lines,
            vec![
                "BEGIN:VTIMEZONE",
                "TZID:UTC",
                "BEGIN:DAYLIGHT",
                "TZOFFSETFROM:+0000",
                "TZOFFSETTO:+0000",
                "TZNAME:UTC",
                "DTSTART:19700101T000000",
                "END:DAYLIGHT",
                "END:VTIMEZONE",
            ]
        );
    }
}
