use log::debug;
use crate::utils::escape_attr;

/// Links shown in the sidebar, `(href, label)`
const NAV_LINKS: [(&str, &str); 3] = [
    ("/", "Home"),
    ("/new", "Create New Page"),
    ("/shuffle", "Random Page"),
];

/// Component for the sidebar shared by every page
pub struct NavigationComponent;

impl NavigationComponent {
    /// Create a new navigation component
    pub fn new() -> Self {
        Self
    }

    /// Build sidebar HTML. `current_href` marks the active link and
    /// `query` pre-fills the search box.
    pub fn build_sidebar_html(&self, current_href: &str, query: &str) -> String {
        debug!("Building sidebar for '{}'", current_href);

        let mut html = String::new();
        html.push_str("<h2 class=\"brand\">Wiki</h2>");

        html.push_str("<form class=\"search\" action=\"/search\" method=\"get\">");
        html.push_str(&format!(
            "<input type=\"text\" name=\"q\" placeholder=\"Search Encyclopedia\" value=\"{}\">",
            escape_attr(query)
        ));
        html.push_str("</form>");

        html.push_str("<ul class=\"nav-list\">");
        for (href, label) in NAV_LINKS {
            let current_class = if href == current_href { " class=\"current\"" } else { "" };
            html.push_str(&format!(
                "<li{}><a href=\"{}\">{}</a></li>",
                current_class, href, label
            ));
        }
        html.push_str("</ul>");
        html
    }
}

impl Default for NavigationComponent {
    fn default() -> Self {
        Self::new()
    }
}
