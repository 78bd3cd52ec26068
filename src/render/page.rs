//! Standalone page holding every region of the board.

use super::escape_html;

/// One titled region of the page.
#[derive(Debug, Clone, Copy)]
pub struct PageSection<'a> {
    /// Element id of the list container
    pub list_id: &'a str,
    pub title: &'a str,
    /// Region markup, already rendered
    pub html: &'a str,
}

/// Render a complete HTML document with one `<section>` per region.
pub fn render_page(title: &str, sections: &[PageSection<'_>]) -> String {
    let mut page = format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n  <meta charset=\"utf-8\">\n  <title>{}</title>\n</head>\n<body>\n  <h1>{}</h1>\n",
        escape_html(title),
        escape_html(title)
    );
    for section in sections {
        page.push_str(&format!(
            "  <section>\n    <h2>{}</h2>\n    <div id=\"{}\">\n{}\n    </div>\n  </section>\n",
            escape_html(section.title),
            escape_html(section.list_id),
            section.html.trim_end()
        ));
    }
    page.push_str("</body>\n</html>\n");
    page
}
