//! Transition tables derived from the embedded IANA database.

use chrono::{DateTime, NaiveDate, Offset, TimeZone};
use chrono_tz::{OffsetName, Tz};

use crate::error::{ShareError, ShareResult};
use crate::timezone::table::{TransitionProvider, TransitionTable, UNTIL_FOREVER};

/// Probe spacing while scanning a zone for offset changes. One week never
/// steps over a pair of transitions in the post-1970 database, so a change
/// between two probes pins exactly one boundary.
const PROBE_STEP_SECS: i64 = 7 * 24 * 3600;

/// Transition provider backed by the `chrono-tz` copy of the IANA database.
///
/// Tables are built on demand by scanning the zone's offset and
/// abbreviation over a bounded year range and bisecting each change down
/// to the exact second.
#[derive(Debug, Clone, Copy)]
pub struct TzdbProvider {
    first_year: i32,
    last_year: i32,
}

impl Default for TzdbProvider {
    fn default() -> Self {
        TzdbProvider {
            first_year: 1970,
            last_year: 2037,
        }
    }
}

impl TzdbProvider {
    /// Provider scanning a custom year range (both ends inclusive).
    pub fn new(first_year: i32, last_year: i32) -> Self {
        TzdbProvider {
            first_year,
            last_year,
        }
    }

    /// All IANA identifiers known to the embedded database.
    pub fn zone_names() -> impl Iterator<Item = &'static str> {
        chrono_tz::TZ_VARIANTS.iter().map(|tz| tz.name())
    }
}

impl TransitionProvider for TzdbProvider {
    fn lookup(&self, tzid: &str) -> ShareResult<TransitionTable> {
        let tz: Tz = tzid
            .parse()
            .map_err(|_| ShareError::UnknownTimezone(tzid.to_string()))?;

        let scan_start = year_start(self.first_year);
        let scan_end = year_start(self.last_year + 1);

        let mut untils = Vec::new();
        let mut offsets = Vec::new();
        let mut abbrs = Vec::new();

        let (mut current_offset, mut current_abbr) = observance_at(tz, scan_start);
        let mut probe = scan_start;
        while probe < scan_end {
            let next = (probe + PROBE_STEP_SECS).min(scan_end);
            let (offset, abbr) = observance_at(tz, next);
            if offset != current_offset || abbr != current_abbr {
                let boundary = refine_boundary(tz, probe, next);
                untils.push(boundary * 1000);
                offsets.push(current_offset);
                abbrs.push(current_abbr);
                (current_offset, current_abbr) = observance_at(tz, boundary);
            }
            probe = next;
        }

        untils.push(UNTIL_FOREVER);
        offsets.push(current_offset);
        abbrs.push(current_abbr);

        let table = TransitionTable {
            untils,
            offsets,
            abbrs,
        };
        table.validate()?;
        Ok(table)
    }
}

fn year_start(year: i32) -> i64 {
    // Both bounds are in-range for any plausible scan window.
    NaiveDate::from_ymd_opt(year, 1, 1)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap()
        .and_utc()
        .timestamp()
}

/// Offset (table polarity, minutes behind UTC) and abbreviation in effect
/// at an instant.
fn observance_at(tz: Tz, secs: i64) -> (i32, String) {
    let utc = DateTime::from_timestamp(secs, 0).unwrap().naive_utc();
    let offset = tz.offset_from_utc_datetime(&utc);
    let east_minutes = offset.fix().local_minus_utc() / 60;
    let abbr = match offset.abbreviation() {
        Some(abbr) => abbr.to_string(),
        None => numeric_abbr(east_minutes),
    };
    (-east_minutes, abbr)
}

/// Numeric fallback for zones without an alphabetic abbreviation,
/// matching the database's own "+07" / "-0330" convention.
fn numeric_abbr(east_minutes: i32) -> String {
    let sign = if east_minutes < 0 { '-' } else { '+' };
    let magnitude = east_minutes.abs();
    if magnitude % 60 == 0 {
        format!("{}{:02}", sign, magnitude / 60)
    } else {
        format!("{}{:02}{:02}", sign, magnitude / 60, magnitude % 60)
    }
}

/// Bisect `(low, high]` to the first second whose observance differs from
/// the one in effect at `low`.
fn refine_boundary(tz: Tz, mut low: i64, mut high: i64) -> i64 {
    let base = observance_at(tz, low);
    while high - low > 1 {
        let mid = low + (high - low) / 2;
        if observance_at(tz, mid) == base {
            low = mid;
        } else {
            high = mid;
        }
    }
    high
}
