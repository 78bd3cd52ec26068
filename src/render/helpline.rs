use crate::domain::models::Helpline;

use super::escape_html;

/// Render one helpline card.
pub fn render_helpline(helpline: &Helpline) -> String {
    let mut html = String::from("<div class=\"helpline-card\">\n");
    html.push_str(&format!("  <h4>{}</h4>\n", escape_html(&helpline.name)));
    html.push_str(&format!(
        "  <div class=\"number\">{}</div>\n",
        escape_html(&helpline.number)
    ));
    if !helpline.description.is_empty() {
        html.push_str(&format!("  <p>{}</p>\n", escape_html(&helpline.description)));
    }
    html.push_str(&format!(
        "  <span class=\"category\">{}</span>\n",
        escape_html(&helpline.category)
    ));
    html.push_str("</div>\n");
    html
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_helpline() {
        let helpline = Helpline {
            id: None,
            name: "Disaster Relief Hotline".to_string(),
            number: "1-800-DISASTER".to_string(),
            category: "rescue".to_string(),
            description: String::new(),
        };
        let html = render_helpline(&helpline);
        assert_eq!(
            html,
            "<div class=\"helpline-card\">\n  <h4>Disaster Relief Hotline</h4>\n  \
             <div class=\"number\">1-800-DISASTER</div>\n  \
             <span class=\"category\">rescue</span>\n</div>\n"
        );
    }
}
