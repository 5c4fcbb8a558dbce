use super::*;

#[test]
fn renders_basic_markdown() {
    let out = render_markdown_html("**Big** launch");
    assert_eq!(out, "<p><strong>Big</strong> launch</p>\n");
}

#[test]
fn drops_raw_html() {
    let out = render_markdown_html("hi <script>alert(1)</script> there");
    assert!(!out.contains("<script>"));
    assert!(out.contains("hi"));
    assert!(out.contains("there"));
}

#[test]
fn renders_lists() {
    let out = render_markdown_html("- one\n- two\n");
    assert!(out.contains("<ul>"));
    assert!(out.contains("<li>two</li>"));
}

#[test]
fn empty_source_renders_nothing() {
    assert_eq!(render_markdown_html(""), "");
}
