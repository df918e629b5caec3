//! Markdown to HTML rendering for blog posts and chat bubbles.
//!
//! Both renderers strip raw HTML from the source before rendering. The post
//! renderer additionally swaps the structural tags for class-carrying ones so
//! each element gets its own presentational treatment in the stylesheet.

use pulldown_cmark::{CodeBlockKind, CowStr, Event, HeadingLevel, Options, Parser, Tag, TagEnd, html};

#[cfg(test)]
#[path = "markdown_test.rs"]
mod markdown_test;

/// Render chat message markdown with the stock pulldown-cmark tags.
pub fn render_markdown_html(markdown: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TASKLISTS);

    let mut out = String::new();
    html::push_html(&mut out, Parser::new_ext(markdown, options).filter(|event| !is_raw_html(event)));
    out
}

/// Render a blog post body with per-element classes.
pub fn render_post_html(markdown: &str) -> String {
    let events = Parser::new_ext(markdown, Options::ENABLE_STRIKETHROUGH)
        .filter(|event| !is_raw_html(event))
        .flat_map(style_event);

    let mut out = String::new();
    html::push_html(&mut out, events);
    out
}

fn is_raw_html(event: &Event<'_>) -> bool {
    matches!(event, Event::Html(_) | Event::InlineHtml(_))
}

fn style_event(event: Event<'_>) -> Vec<Event<'_>> {
    match event {
        Event::Start(Tag::Heading { level, .. }) => {
            vec![raw(format!("<{} class=\"{}\">", heading_tag(level), heading_class(level)))]
        }
        Event::End(TagEnd::Heading(level)) => vec![raw(format!("</{}>\n", heading_tag(level)))],
        Event::Start(Tag::Paragraph) => vec![raw("<p class=\"post__p\">".to_owned())],
        Event::Start(Tag::List(None)) => vec![raw("<ul class=\"post__ul\">\n".to_owned())],
        Event::Start(Tag::List(Some(1))) => vec![raw("<ol class=\"post__ol\">\n".to_owned())],
        Event::Start(Tag::List(Some(start))) => {
            vec![raw(format!("<ol class=\"post__ol\" start=\"{start}\">\n"))]
        }
        Event::Start(Tag::Item) => vec![raw("<li class=\"post__li\">".to_owned())],
        Event::Start(Tag::CodeBlock(kind)) => {
            let open = match kind {
                CodeBlockKind::Fenced(lang) if !lang.is_empty() => {
                    let lang = lang.split_whitespace().next().unwrap_or_default();
                    format!("<pre class=\"post__pre\"><code class=\"post__code-block language-{}\">", attr_escape(lang))
                }
                _ => "<pre class=\"post__pre\"><code class=\"post__code-block\">".to_owned(),
            };
            vec![raw(open)]
        }
        Event::Code(text) => vec![
            raw("<code class=\"post__code\">".to_owned()),
            Event::Text(text),
            raw("</code>".to_owned()),
        ],
        other => vec![other],
    }
}

fn raw(html: String) -> Event<'static> {
    Event::Html(CowStr::from(html))
}

fn heading_tag(level: HeadingLevel) -> &'static str {
    match level {
        HeadingLevel::H1 => "h1",
        HeadingLevel::H2 => "h2",
        HeadingLevel::H3 => "h3",
        HeadingLevel::H4 => "h4",
        HeadingLevel::H5 => "h5",
        HeadingLevel::H6 => "h6",
    }
}

fn heading_class(level: HeadingLevel) -> &'static str {
    match level {
        HeadingLevel::H1 => "post__h1",
        HeadingLevel::H2 => "post__h2",
        _ => "post__h3",
    }
}

fn attr_escape(value: &str) -> String {
    value
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '+' | '.'))
        .collect()
}
