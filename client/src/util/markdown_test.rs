use super::*;

use crate::content::POSTS;

// =============================================================
// render_post_html
// =============================================================

#[test]
fn headings_get_level_classes() {
    let html = render_post_html("# Title\n\n## Section\n\n### Detail\n");
    assert!(html.contains("<h1 class=\"post__h1\">Title</h1>"), "{html}");
    assert!(html.contains("<h2 class=\"post__h2\">Section</h2>"), "{html}");
    assert!(html.contains("<h3 class=\"post__h3\">Detail</h3>"), "{html}");
}

#[test]
fn paragraphs_get_class() {
    let html = render_post_html("Hello world.\n");
    assert_eq!(html, "<p class=\"post__p\">Hello world.</p>\n");
}

#[test]
fn unordered_list_items_get_classes() {
    let html = render_post_html("- one\n- two\n");
    assert!(html.starts_with("<ul class=\"post__ul\">"), "{html}");
    assert_eq!(html.matches("<li class=\"post__li\">").count(), 2);
    assert!(html.contains("</ul>"));
}

#[test]
fn ordered_list_keeps_start_number() {
    let html = render_post_html("1. a\n2. b\n");
    assert!(html.starts_with("<ol class=\"post__ol\">"), "{html}");

    let html = render_post_html("3. c\n4. d\n");
    assert!(html.starts_with("<ol class=\"post__ol\" start=\"3\">"), "{html}");
}

#[test]
fn inline_code_is_distinct_from_code_block() {
    let html = render_post_html("Run `cargo` now.\n\n```bash\nnpm install\n```\n");
    assert!(html.contains("<code class=\"post__code\">cargo</code>"), "{html}");
    assert!(
        html.contains("<pre class=\"post__pre\"><code class=\"post__code-block language-bash\">npm install\n</code></pre>"),
        "{html}"
    );
}

#[test]
fn fenced_block_without_language() {
    let html = render_post_html("```\nplain\n```\n");
    assert!(html.contains("<code class=\"post__code-block\">plain\n</code>"), "{html}");
}

#[test]
fn inline_code_text_is_escaped() {
    let html = render_post_html("`<b>`\n");
    assert!(html.contains("<code class=\"post__code\">&lt;b&gt;</code>"), "{html}");
}

#[test]
fn code_block_language_is_sanitized() {
    let html = render_post_html("```ts\"onload=x\nconst a = 1;\n```\n");
    assert!(html.contains("language-tsonloadx\""), "{html}");
}

#[test]
fn raw_html_is_dropped_from_posts() {
    let html = render_post_html("<script>alert(1)</script>\n\nSafe <b>text</b>.\n");
    assert!(!html.contains("<script>"), "{html}");
    assert!(!html.contains("<b>"), "{html}");
    assert!(html.contains("Safe"));
}

#[test]
fn rendering_is_deterministic() {
    for post in POSTS {
        assert_eq!(render_post_html(post.content), render_post_html(post.content));
    }
}

#[test]
fn shipped_post_renders_every_treatment() {
    let html = render_post_html(POSTS[0].content);
    for class in ["post__h1", "post__h2", "post__p", "post__ul", "post__ol", "post__li", "post__code-block"] {
        assert!(html.contains(class), "missing {class}");
    }
}

// =============================================================
// render_markdown_html
// =============================================================

#[test]
fn chat_markdown_uses_plain_tags() {
    let html = render_markdown_html("**hi** there");
    assert_eq!(html, "<p><strong>hi</strong> there</p>\n");
}

#[test]
fn chat_markdown_drops_raw_html() {
    let html = render_markdown_html("hi <img src=x onerror=alert(1)>");
    assert!(!html.contains("<img"), "{html}");
}
