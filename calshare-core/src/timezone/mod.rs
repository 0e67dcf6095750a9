//! Timezone transition tables and VTIMEZONE generation.
//!
//! The table model treats the timezone database as a read-only oracle:
//! a [`TransitionProvider`] supplies packed transition tables, and the
//! builder in [`vtimezone`] turns the slice of a table covering an event
//! into DAYLIGHT/STANDARD observance blocks.

pub mod table;
pub mod tzdb;
pub mod vtimezone;

pub use table::{TransitionProvider, TransitionTable, UNTIL_FOREVER};
pub use tzdb::TzdbProvider;
pub use vtimezone::{build_vtimezone, utc_offset_string, vtimezone_lines};
