//! Artifact delivery for the consuming context.
//!
//! Whether ICS content goes out as raw text or as a `data:` URI depends on
//! the consuming browser. That decision is injected as a predicate so the
//! choice stays deterministic and testable.

/// Predicate answering whether the consuming context is a mobile browser.
///
/// Queried once per share-file build.
pub trait DeliveryContext {
    fn is_mobile(&self) -> bool;
}

/// Fixed non-mobile context, for terminals and tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct Desktop;

impl DeliveryContext for Desktop {
    fn is_mobile(&self) -> bool {
        false
    }
}

/// Context derived from a browser user-agent string.
#[derive(Debug, Clone)]
pub struct UserAgentContext {
    user_agent: String,
}

impl UserAgentContext {
    pub fn new(user_agent: impl Into<String>) -> Self {
        UserAgentContext {
            user_agent: user_agent.into(),
        }
    }
}

const MOBILE_MARKERS: [&str; 7] = [
    "Mobile",
    "iPhone",
    "iPod",
    "iPad",
    "Android",
    "BlackBerry",
    "IEMobile",
];

impl DeliveryContext for UserAgentContext {
    fn is_mobile(&self) -> bool {
        MOBILE_MARKERS
            .iter()
            .any(|marker| self.user_agent.contains(marker))
    }
}

/// Wrap ICS content for the consuming context: raw text on desktop, a
/// percent-encoded `data:` URI on mobile.
pub fn deliver_ics(content: &str, context: &impl DeliveryContext) -> String {
    if context.is_mobile() {
        format!(
            "data:text/calendar;charset=utf8,{}",
            urlencoding::encode(content)
        )
    } else {
        content.to_string()
    }
}
