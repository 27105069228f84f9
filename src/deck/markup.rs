//! Small HTML building helpers

/// Escape text for use in element content and double-quoted attributes
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// `<ul>` of trusted fragments
pub fn unordered_list<'a>(items: impl IntoIterator<Item = &'a str>) -> String {
    let mut html = String::from("<ul>");
    for item in items {
        html.push_str("<li>");
        html.push_str(item);
        html.push_str("</li>");
    }
    html.push_str("</ul>");
    html
}

/// `<ol>` of trusted fragments
pub fn ordered_list<'a>(items: impl IntoIterator<Item = &'a str>) -> String {
    let mut html = String::from("<ol class=\"steps\">");
    for item in items {
        html.push_str("<li>");
        html.push_str(item);
        html.push_str("</li>");
    }
    html.push_str("</ol>");
    html
}

pub fn section_title(title: &str) -> String {
    format!("<div class=\"section\">{}</div>\n", escape_html(title))
}
