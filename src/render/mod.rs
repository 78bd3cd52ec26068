//! HTML rendering for the four display regions.
//!
//! Every template escapes interpolated values, so server data can never
//! inject markup into a region.

pub mod alert;
pub mod helpline;
pub mod page;
pub mod safe_location;
pub mod volunteer;

use std::fmt;

use chrono::{DateTime, Local, NaiveDateTime, TimeZone};

use crate::domain::models::Notice;

pub use alert::render_alert;
pub use helpline::render_helpline;
pub use page::{render_page, PageSection};
pub use safe_location::render_safe_location;
pub use volunteer::render_volunteer;

/// Date/time layout used for displayed timestamps (`10/18/2026, 3:04:05 PM`).
const TIMESTAMP_FORMAT: &str = "%-m/%-d/%Y, %-I:%M:%S %p";

/// Offset-less layouts the backend has been seen to emit.
const NAIVE_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// Escape HTML special characters
pub fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Format a server timestamp in the viewer's local time zone.
pub fn format_timestamp(raw: &str) -> String {
    format_timestamp_in(raw, &Local)
}

/// Format a server timestamp in `tz`.
///
/// Accepts RFC 3339, RFC 2822 (`Sat, 18 Oct 2026 10:00:00 GMT`) and ISO
/// timestamps without an offset, which are read as wall-clock time in `tz`.
/// Anything else is returned unchanged.
pub fn format_timestamp_in<Tz>(raw: &str, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    parse_timestamp(raw, tz).map_or_else(
        || raw.to_string(),
        |dt| dt.format(TIMESTAMP_FORMAT).to_string(),
    )
}

fn parse_timestamp<Tz: TimeZone>(raw: &str, tz: &Tz) -> Option<DateTime<Tz>> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(tz));
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(raw) {
        return Some(dt.with_timezone(tz));
    }
    NAIVE_FORMATS.iter().find_map(|layout| {
        NaiveDateTime::parse_from_str(raw, layout)
            .ok()
            .and_then(|naive| tz.from_local_datetime(&naive).earliest())
    })
}

/// Render a row of tag spans, e.g. facilities or skills.
pub(crate) fn render_tags(wrapper_class: &str, tag_class: &str, tags: &[String]) -> String {
    let spans: String = tags
        .iter()
        .map(|tag| format!("<span class=\"{tag_class}\">{}</span>", escape_html(tag)))
        .collect();
    format!("<div class=\"{wrapper_class}\">{spans}</div>")
}

/// Render the placeholder shown when a collection is empty.
pub fn render_placeholder(message: &str) -> String {
    format!("<p class=\"loading\">{}</p>", escape_html(message))
}

/// Render the static message shown when a collection failed to load.
pub fn render_load_error(message: &str) -> String {
    format!("<p class=\"error\">{}</p>", escape_html(message))
}

/// Render a notice banner.
pub fn render_notice(notice: &Notice) -> String {
    format!(
        "<div class=\"{}\">{}</div>",
        notice.level.css_class(),
        escape_html(&notice.text)
    )
}
