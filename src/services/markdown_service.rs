use std::collections::HashMap;
use log::debug;
use pulldown_cmark::{html, CowStr, Event, HeadingLevel, Options, Parser, Tag, TagEnd};

/// Service converting stored Markdown into display HTML
#[derive(Clone, Copy)]
pub struct MarkdownService {
    options: Options,
}

impl MarkdownService {
    /// Create a new markdown service
    pub fn new() -> Self {
        let mut options = Options::empty();
        options.insert(Options::ENABLE_TABLES);
        options.insert(Options::ENABLE_STRIKETHROUGH);
        options.insert(Options::ENABLE_TASKLISTS);
        Self { options }
    }

    /// Render markup to HTML. Never fails; malformed input renders best effort.
    pub fn render(&self, markup: &str) -> String {
        let mut events: Vec<Event<'_>> = Parser::new_ext(markup, self.options).collect();
        assign_heading_ids(&mut events);

        let mut out = String::with_capacity(markup.len() + markup.len() / 2);
        html::push_html(&mut out, events.into_iter());
        debug!("Rendered {} bytes of markup into {} bytes of HTML", markup.len(), out.len());
        out
    }
}

impl Default for MarkdownService {
    fn default() -> Self {
        Self::new()
    }
}

/// Give every heading without an explicit id a unique slug
fn assign_heading_ids(events: &mut [Event<'_>]) {
    let mut seen: HashMap<String, usize> = HashMap::new();

    for i in 0..events.len() {
        let level = match &events[i] {
            Event::Start(Tag::Heading { level, id: None, .. }) => *level,
            _ => continue,
        };

        let mut slug = slugify(&heading_text(&events[i + 1..]));
        if slug.is_empty() {
            slug = format!("h{}", heading_level_to_u32(level));
        }
        let count = seen.entry(slug.clone()).or_insert(0);
        if *count > 0 {
            slug = format!("{}-{}", slug, count);
        }
        *count += 1;

        if let Event::Start(Tag::Heading { id, .. }) = &mut events[i] {
            *id = Some(CowStr::from(slug));
        }
    }
}

/// Plain text of a heading, given the events following its start tag
fn heading_text(events: &[Event<'_>]) -> String {
    let mut text = String::new();
    for event in events {
        match event {
            Event::End(TagEnd::Heading(_)) => break,
            Event::Text(t) | Event::Code(t) => text.push_str(t),
            Event::SoftBreak | Event::HardBreak => text.push(' '),
            _ => {}
        }
    }
    text
}

/// Convert heading level to u32
fn heading_level_to_u32(level: HeadingLevel) -> u32 {
    match level {
        HeadingLevel::H1 => 1,
        HeadingLevel::H2 => 2,
        HeadingLevel::H3 => 3,
        HeadingLevel::H4 => 4,
        HeadingLevel::H5 => 5,
        HeadingLevel::H6 => 6,
    }
}

/// Create URL-friendly slug from text
fn slugify(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut last_dash = false;
    for ch in text.chars() {
        let c = ch.to_ascii_lowercase();
        if c.is_ascii_alphanumeric() {
            out.push(c);
            last_dash = false;
        } else if (c.is_ascii_whitespace() || c == '-' || c == '_') && !last_dash && !out.is_empty() {
            out.push('-');
            last_dash = true;
        }
    }
    if out.ends_with('-') {
        out.pop();
    }
    out
}
