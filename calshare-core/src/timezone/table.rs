//! Packed timezone transition tables.

use crate::error::{ShareError, ShareResult};

/// Sentinel boundary for the final "no further transitions" entry.
pub const UNTIL_FOREVER: i64 = i64::MAX;

/// Ordered UTC-offset transitions for one timezone.
///
/// Three parallel sequences: `offsets[i]` and `abbrs[i]` describe the
/// observance in effect up to `untils[i]` (epoch milliseconds, exclusive).
/// The last entry carries the [`UNTIL_FOREVER`] sentinel.
///
/// Offsets use the table polarity: positive minutes mean the zone is
/// *behind* UTC (minutes west), so CET is `-60` and EST is `300`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionTable {
    pub untils: Vec<i64>,
    pub offsets: Vec<i32>,
    pub abbrs: Vec<String>,
}

impl TransitionTable {
    /// Check the parallel-sequence invariants.
    pub fn validate(&self) -> ShareResult<()> {
        if self.untils.is_empty() {
            return Err(ShareError::InvalidTable(
                "table has no observances".to_string(),
            ));
        }
        if self.untils.len() != self.offsets.len() || self.untils.len() != self.abbrs.len() {
            return Err(ShareError::InvalidTable(format!(
                "parallel sequences differ in length: {} untils, {} offsets, {} abbrs",
                self.untils.len(),
                self.offsets.len(),
                self.abbrs.len()
            )));
        }
        if self.untils.windows(2).any(|pair| pair[0] > pair[1]) {
            return Err(ShareError::InvalidTable(
                "boundary instants are not sorted".to_string(),
            ));
        }
        Ok(())
    }

    /// Number of observances in the table.
    pub fn len(&self) -> usize {
        self.untils.len()
    }

    pub fn is_empty(&self) -> bool {
        self.untils.is_empty()
    }

    /// Offset (table polarity) in effect at an instant.
    ///
    /// Callers validate the table first; the sentinel tail guarantees a
    /// matching observance for any instant.
    pub fn offset_at(&self, ms: i64) -> i32 {
        let index = self
            .untils
            .iter()
            .position(|&until| until > ms)
            .unwrap_or(self.untils.len() - 1);
        self.offsets[index]
    }

    /// Shift a UTC instant to the zone's wall clock, as epoch milliseconds.
    pub fn to_wall_clock(&self, ms: i64) -> i64 {
        ms - i64::from(self.offset_at(ms)) * 60_000
    }
}

/// Read-only oracle supplying transition tables by IANA identifier.
pub trait TransitionProvider {
    /// Look up the transition table for `tzid`.
    ///
    /// Fails with [`ShareError::UnknownTimezone`] for unrecognized
    /// identifiers; never recovers on the caller's behalf.
    fn lookup(&self, tzid: &str) -> ShareResult<TransitionTable>;
}
