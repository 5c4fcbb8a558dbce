//! Rendered preview of the editor's Markdown.

#[cfg(test)]
#[path = "markdown_preview_test.rs"]
mod markdown_preview_test;

use leptos::prelude::*;
use pulldown_cmark::{Event, Options, Parser, html};

#[component]
pub fn MarkdownPreview(#[prop(into)] source: Signal<String>) -> impl IntoView {
    view! { <div class="markdown-preview" inner_html=move || render_markdown_html(&source.get())></div> }
}

/// Render Markdown to HTML with raw HTML dropped.
pub fn render_markdown_html(markdown: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TASKLISTS);

    let parser = Parser::new_ext(markdown, options).filter_map(|event| match event {
        Event::Html(_) | Event::InlineHtml(_) => None,
        other => Some(other),
    });

    let mut out = String::new();
    html::push_html(&mut out, parser);
    out
}
