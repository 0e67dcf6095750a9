//! Calendar-sharing artifacts for a single event.
//!
//! This crate turns one event description into the things a client
//! application needs to offer "add to calendar" actions without a server:
//! - deep links for web calendars (Google, Yahoo)
//! - portable iCalendar (ICS) text for file-based targets (iCal, Outlook),
//!   including timezone-aware VTIMEZONE blocks derived from packed
//!   transition tables
//! - a `data:text/calendar` URI form of the same text for mobile contexts

pub mod delivery;
pub mod error;
pub mod event;
pub mod ics;
pub mod sites;
pub mod timezone;

pub use delivery::{DeliveryContext, Desktop, UserAgentContext, deliver_ics};
pub use error::{ShareError, ShareResult};
pub use event::{Event, EventDuration};
pub use ics::{escape_description, generate_ics};
pub use sites::{ShareSite, build_share_url, format_date, format_duration};
pub use timezone::{
    TransitionProvider, TransitionTable, TzdbProvider, build_vtimezone, utc_offset_string,
};
