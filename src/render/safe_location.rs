use crate::domain::models::SafeLocation;

use super::{escape_html, render_tags};

/// Render one safe-location card.
///
/// Capacity shows `N/A` when unknown or zero; occupancy shows 0 when unknown.
pub fn render_safe_location(location: &SafeLocation) -> String {
    let mut html = String::from("<div class=\"location-card\">\n");
    html.push_str(&format!("  <h4>{}</h4>\n", escape_html(&location.name)));
    html.push_str(&format!(
        "  <p class=\"address\">📍 {}</p>\n",
        escape_html(&location.address)
    ));
    if !location.contact.is_empty() {
        html.push_str(&format!(
            "  <p><strong>Contact:</strong> {}</p>\n",
            escape_html(&location.contact)
        ));
    }

    let capacity = match location.capacity {
        Some(capacity) if capacity != 0 => capacity.to_string(),
        _ => "N/A".to_string(),
    };
    let occupancy = location.current_occupancy.unwrap_or(0);
    html.push_str("  <div class=\"info\">\n");
    html.push_str(&info_item("Capacity", &capacity));
    html.push_str(&info_item("Occupancy", &occupancy.to_string()));
    if let Some((latitude, longitude)) = location.coordinates() {
        html.push_str(&info_item("Coordinates", &format!("{latitude}, {longitude}")));
    }
    html.push_str("  </div>\n");

    if !location.facilities.is_empty() {
        html.push_str("  ");
        html.push_str(&render_tags("facilities", "facility-tag", &location.facilities));
        html.push('\n');
    }
    html.push_str("</div>\n");
    html
}

fn info_item(label: &str, value: &str) -> String {
    format!(
        "    <div class=\"info-item\"><strong>{label}</strong> {}</div>\n",
        escape_html(value)
    )
}
