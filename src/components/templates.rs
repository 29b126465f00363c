use crate::components::NavigationComponent;
use crate::forms::{EntryForm, Field, FormErrors, MAX_TITLE_CHARS};
use crate::types::{Page, TemplateContext};
use crate::utils::{edit_href, entry_href, escape_attr, escape_html};

const STYLE: &str = "\
body{margin:0;font-family:-apple-system,BlinkMacSystemFont,\"Segoe UI\",Roboto,sans-serif}\
.layout{display:flex;min-height:100vh}\
.sidebar{width:220px;padding:20px;background:#f0f0f0;border-right:1px solid #ccc}\
.sidebar .search input{width:100%;box-sizing:border-box}\
.nav-list{list-style:none;padding:0}.nav-list li{margin:6px 0}.nav-list .current a{font-weight:bold}\
.content{flex:1;padding:20px 40px}\
.errorlist{color:#b00020;list-style:none;padding:0;margin:4px 0}\
.form-control{width:100%;max-width:720px;box-sizing:border-box}\
textarea.form-control{height:20em}\
.error-message{color:#b00020}";

/// Component rendering complete HTML documents
pub struct TemplateComponent {
    navigation: NavigationComponent,
}

impl TemplateComponent {
    /// Create a new template component
    pub fn new() -> Self {
        Self { navigation: NavigationComponent::new() }
    }

    /// Render any page kind to a full document
    pub fn render_page(&self, page: &Page) -> String {
        let (current, query) = match page {
            Page::Index { .. } => ("/", ""),
            Page::NewForm { .. } => ("/new", ""),
            Page::SearchResults { query, .. } => ("/search", query.as_str()),
            _ => ("", ""),
        };

        let context = TemplateContext {
            title: page.title(),
            content: self.render_body(page),
            sidebar: self.navigation.build_sidebar_html(current, query),
        };
        self.render_shell_template(&context)
    }

    /// Wrap rendered content in the shared layout
    pub fn render_shell_template(&self, context: &TemplateContext) -> String {
        format!(
            "<!doctype html><html lang=\"en\"><head><meta charset=\"utf-8\"><meta name=\"viewport\" content=\"width=device-width, initial-scale=1\"><title>{}</title><style>{}</style></head><body><div class=\"layout\"><aside class=\"sidebar\">{}</aside><main class=\"content\">{}</main></div></body></html>",
            escape_html(&context.title), STYLE, context.sidebar, context.content
        )
    }

    fn render_body(&self, page: &Page) -> String {
        match page {
            Page::Index { entries } => {
                let mut html = String::from("<h1>All Pages</h1>");
                html.push_str(&title_list(entries));
                html
            }
            Page::Entry { title, html } => format!(
                "<article class=\"entry\">{}</article><p class=\"entry-actions\"><a href=\"{}\">Edit this page</a></p>",
                html,
                escape_attr(&edit_href(title))
            ),
            Page::NewForm { form, errors } => {
                let mut html = String::from("<h1>Create New Page</h1>");
                html.push_str(&entry_form("/new", form, errors, "Save"));
                html
            }
            Page::EditForm { title, form, errors } => {
                let mut html = format!("<h1>Edit {}</h1>", escape_html(title));
                html.push_str(&entry_form(&edit_href(title), form, errors, "Save Changes"));
                html
            }
            Page::SearchResults { query, matches } => {
                let mut html = String::from("<h1>Search Results</h1>");
                html.push_str(&format!(
                    "<p class=\"results-count\">{} page{} containing \"{}\"</p>",
                    matches.len(),
                    if matches.len() == 1 { "" } else { "s" },
                    escape_html(query)
                ));
                html.push_str(&title_list(matches));
                html
            }
            Page::Error { message } => format!(
                "<h1>Error</h1><p class=\"error-message\">{}</p>",
                escape_html(message)
            ),
        }
    }
}

impl Default for TemplateComponent {
    fn default() -> Self {
        Self::new()
    }
}

/// Unordered list linking each title to its view page
fn title_list(titles: &[String]) -> String {
    let mut html = String::from("<ul class=\"entries\">");
    for title in titles {
        html.push_str(&format!(
            "<li><a href=\"{}\">{}</a></li>",
            escape_attr(&entry_href(title)),
            escape_html(title)
        ));
    }
    html.push_str("</ul>");
    html
}

fn entry_form(action: &str, form: &EntryForm, errors: &FormErrors, submit: &str) -> String {
    let mut html = format!("<form action=\"{}\" method=\"post\">", escape_attr(action));

    html.push_str("<p><label for=\"id_title\">Title:</label>");
    html.push_str(&error_list(errors, Field::Title));
    html.push_str(&format!(
        "<input type=\"text\" name=\"title\" id=\"id_title\" class=\"form-control\" maxlength=\"{}\" required value=\"{}\"></p>",
        MAX_TITLE_CHARS,
        escape_attr(&form.title)
    ));

    html.push_str("<p><label for=\"id_content\">Content:</label>");
    html.push_str(&error_list(errors, Field::Content));
    html.push_str(&format!(
        "<textarea name=\"content\" id=\"id_content\" class=\"form-control\" required>\n{}</textarea></p>",
        escape_html(&form.content)
    ));

    html.push_str(&format!("<input type=\"submit\" value=\"{}\"></form>", escape_attr(submit)));
    html
}

fn error_list(errors: &FormErrors, field: Field) -> String {
    let messages: Vec<&str> = errors.for_field(field).collect();
    if messages.is_empty() {
        return String::new();
    }
    let mut html = String::from("<ul class=\"errorlist\">");
    for message in messages {
        html.push_str(&format!("<li>{}</li>", escape_html(message)));
    }
    html.push_str("</ul>");
    html
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(page: Page) -> String {
        TemplateComponent::new().render_page(&page)
    }

    #[test]
    fn index_links_every_entry() {
        let html = render(Page::Index { entries: vec!["CSS".into(), "C Sharp".into()] });
        assert!(html.contains("<title>Encyclopedia</title>"));
        assert!(html.contains("<li><a href=\"/wiki/CSS/\">CSS</a></li>"));
        assert!(html.contains("<li><a href=\"/wiki/C%20Sharp/\">C Sharp</a></li>"));
    }

    #[test]
    fn entry_page_embeds_rendered_html_and_edit_link() {
        let html = render(Page::Entry { title: "HTML".into(), html: "<h1>HTML</h1>".into() });
        assert!(html.contains("<article class=\"entry\"><h1>HTML</h1></article>"));
        assert!(html.contains("href=\"/edit/HTML\""));
    }

    #[test]
    fn form_redisplays_values_and_errors() {
        let mut errors = FormErrors::default();
        errors.push(Field::Content, "This field is required.");
        let html = render(Page::NewForm {
            form: EntryForm::new("<Git>", ""),
            errors,
        });
        assert!(html.contains("value=\"&lt;Git&gt;\""));
        assert!(html.contains("<ul class=\"errorlist\"><li>This field is required.</li></ul>"));
        assert!(html.contains("action=\"/new\""));
    }

    #[test]
    fn edit_form_posts_back_to_entry() {
        let html = render(Page::EditForm {
            title: "Python".into(),
            form: EntryForm::new("Python", "# Python\n<script>"),
            errors: FormErrors::default(),
        });
        assert!(html.contains("action=\"/edit/Python\""));
        assert!(html.contains("# Python\n&lt;script&gt;</textarea>"));
        assert!(!html.contains("<ul class=\"errorlist\">"));
    }

    #[test]
    fn search_results_prefill_the_search_box() {
        let html = render(Page::SearchResults { query: "S".into(), matches: vec!["CSS".into()] });
        assert!(html.contains("1 page containing \"S\""));
        assert!(html.contains("name=\"q\" placeholder=\"Search Encyclopedia\" value=\"S\""));
    }

    #[test]
    fn error_message_is_escaped() {
        let html = render(Page::Error { message: "<b>bad</b>".into() });
        assert!(html.contains("&lt;b&gt;bad&lt;/b&gt;"));
    }
}
