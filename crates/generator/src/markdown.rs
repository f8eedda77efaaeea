use folio_core::slugify;
use pulldown_cmark::{CowStr, Event, Options, Parser, Tag, TagEnd, html};
use std::collections::HashMap;

use crate::components::html_escape;

const ANCHOR_ICON: &str = r#"<svg width="16" height="16" viewBox="0 0 16 16" xmlns="http://www.w3.org/2000/svg"><path fill-rule="evenodd" fill="currentcolor" d="M4 9h1v1H4c-1.5 0-3-1.69-3-3.5S2.55 3 4 3h4c1.45 0 3 1.69 3 3.5 0 1.41-.91 2.72-2 3.25V8.59c.58-.45 1-1.27 1-2.09C10 5.22 8.98 4 8 4H4c-.98 0-2 1.22-2 2.5S3 9 4 9zm9-3h-1v1h1c1 0 2 1.22 2 2.5S13.98 12 13 12H9c-.98 0-2-1.22-2-2.5 0-.83.42-1.64 1-2.09V6.25c-1.09.53-2 1.84-2 3.25C6 11.31 7.55 13 9 13h4c1.45 0 3-1.69 3-3.5S14.5 6 13 6z"/></svg>"#;

/// Render markdown to HTML, giving every heading an id and an anchor link.
///
/// Ids are slugs of the heading text; repeats get `-1`, `-2`, ... appended.
/// Explicit `{#id}` attributes are kept as written. Each heading is wrapped in
/// a `div.heading-wrapper` with a link to `#id` after it.
pub fn render_markdown(source: &str) -> String {
    let options = Options::ENABLE_TABLES
        | Options::ENABLE_STRIKETHROUGH
        | Options::ENABLE_FOOTNOTES
        | Options::ENABLE_TASKLISTS
        | Options::ENABLE_HEADING_ATTRIBUTES;

    let mut events: Vec<Event> = Parser::new_ext(source, options).collect();
    assign_heading_ids(&mut events);
    let events = link_headings(events);

    let mut out = String::with_capacity(source.len() * 3 / 2);
    html::push_html(&mut out, events.into_iter());
    out
}

fn link_headings(events: Vec<Event<'_>>) -> Vec<Event<'_>> {
    let mut out = Vec::with_capacity(events.len());
    let mut open_id: Option<String> = None;

    for event in events {
        if let Event::Start(Tag::Heading { level, id: Some(id), .. }) = &event {
            out.push(Event::Html(CowStr::from(format!(
                "<div class=\"heading-wrapper level-{}\" tabindex=\"-1\">\n",
                level
            ))));
            open_id = Some(id.to_string());
        }

        let closes_heading = matches!(event, Event::End(TagEnd::Heading(_)));
        out.push(event);

        if !closes_heading {
            continue;
        }
        if let Some(id) = open_id.take() {
            out.push(Event::Html(CowStr::from(format!(
                "<a class=\"anchor-link\" href=\"#{}\"><span class=\"anchor-icon\" aria-hidden=\"true\">{}</span></a>\n</div>\n",
                html_escape(&id),
                ANCHOR_ICON
            ))));
        }
    }

    out
}

fn assign_heading_ids(events: &mut [Event]) {
    let mut seen: HashMap<String, usize> = HashMap::new();

    for start in 0..events.len() {
        let needs_id = matches!(&events[start], Event::Start(Tag::Heading { id: None, .. }));
        if !needs_id {
            continue;
        }

        let mut text = String::new();
        for event in &events[start + 1..] {
            match event {
                Event::End(TagEnd::Heading(_)) => break,
                Event::Text(t) | Event::Code(t) => text.push_str(t),
                _ => {}
            }
        }

        let base = slugify(&text);
        let count = seen.entry(base.clone()).or_insert(0);
        let slug = if *count == 0 {
            base
        } else {
            format!("{}-{}", base, count)
        };
        *count += 1;

        if let Event::Start(Tag::Heading { id, .. }) = &mut events[start] {
            *id = Some(CowStr::from(slug));
        }
    }
}
