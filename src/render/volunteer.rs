use crate::domain::models::Volunteer;

use super::{escape_html, render_tags};

/// Render one volunteer card.
pub fn render_volunteer(volunteer: &Volunteer) -> String {
    let mut html = String::from("<div class=\"volunteer-card\">\n");
    html.push_str(&format!("  <h4>{}</h4>\n", escape_html(&volunteer.name)));
    html.push_str(&format!(
        "  <div class=\"contact\">📧 {}<br>📞 {}</div>\n",
        escape_html(&volunteer.email),
        escape_html(&volunteer.phone)
    ));
    if !volunteer.location.is_empty() {
        html.push_str(&format!(
            "  <p><strong>Location:</strong> {}</p>\n",
            escape_html(&volunteer.location)
        ));
    }
    let availability = escape_html(&volunteer.availability);
    html.push_str(&format!(
        "  <span class=\"availability {availability}\">{availability}</span>\n"
    ));
    if !volunteer.skills.is_empty() {
        html.push_str("  ");
        html.push_str(&render_tags("skills", "skill-tag", &volunteer.skills));
        html.push('\n');
    }
    html.push_str("</div>\n");
    html
}
