use crate::domain::models::Alert;

use super::{escape_html, format_timestamp};

/// Render one alert card.
pub fn render_alert(alert: &Alert) -> String {
    let mut html = format!(
        "<div class=\"alert-card {}\">\n",
        escape_html(&alert.severity)
    );
    html.push_str(&format!("  <h4>{}</h4>\n", escape_html(&alert.title)));
    html.push_str(&format!("  <p>{}</p>\n", escape_html(&alert.message)));
    if !alert.location.is_empty() {
        html.push_str(&format!(
            "  <p><strong>Location:</strong> {}</p>\n",
            escape_html(&alert.location)
        ));
    }
    let posted = alert
        .timestamp
        .as_deref()
        .map_or_else(|| "Unknown".to_string(), format_timestamp);
    html.push_str(&format!(
        "  <div class=\"meta\"><strong>Severity:</strong> {} | <strong>Posted:</strong> {}</div>\n",
        escape_html(&alert.severity.to_uppercase()),
        escape_html(&posted)
    ));
    html.push_str("</div>\n");
    html
}
